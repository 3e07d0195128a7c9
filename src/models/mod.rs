mod food;
mod plan;
mod profile;

pub use food::FoodItem;
pub use plan::{DayPlan, MacroTotals, Meal, MealSlot, PlannedDay, WeekPlan};
pub use profile::{
    ActivityLevel, BiometricProfile, Gender, Goal, NutritionTargets, PreferenceProfile, TagScores,
};
