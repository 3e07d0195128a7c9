use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{FoodItem, NutritionTargets};

/// The four meal slots of a planned day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    /// All slots in serving order.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    /// Share of the daily calorie target assigned to this slot.
    pub fn calorie_share(self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::Lunch => 0.35,
            MealSlot::Snack => 0.10,
            MealSlot::Dinner => 0.30,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack => "snack",
            MealSlot::Dinner => "dinner",
        }
    }

    /// Parse a slot key (case-insensitive). `None` for unknown keys.
    pub fn from_key(key: &str) -> Option<MealSlot> {
        match key.to_lowercase().as_str() {
            "breakfast" => Some(MealSlot::Breakfast),
            "lunch" => Some(MealSlot::Lunch),
            "snack" => Some(MealSlot::Snack),
            "dinner" => Some(MealSlot::Dinner),
            _ => None,
        }
    }
}

/// Summed macro grams of a meal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroTotals {
    fn accumulate(&mut self, item: &FoodItem) {
        self.protein += item.protein;
        self.carbs += item.carbs;
        self.fat += item.fat;
    }
}

/// The items selected for one slot on one day, with summed totals.
///
/// Totals are always derived from the item list; nothing tracks them
/// independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub items: Vec<FoodItem>,
    pub total_calories: f64,
    pub macros: MacroTotals,
}

impl Meal {
    /// An empty meal: the normal outcome for a slot with no candidates.
    pub fn empty() -> Self {
        Self::from_items(Vec::new())
    }

    /// Build a meal from selected items, summing calories and macros.
    pub fn from_items(items: Vec<FoodItem>) -> Self {
        let total_calories = items.iter().map(|i| i.calories).sum();
        let mut macros = MacroTotals::default();
        for item in &items {
            macros.accumulate(item);
        }
        Self {
            items,
            total_calories,
            macros,
        }
    }

    pub fn contains(&self, food_id: &str) -> bool {
        self.items.iter().any(|i| i.id == food_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One meal per slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub snack: Meal,
    pub dinner: Meal,
}

impl DayPlan {
    pub fn meal(&self, slot: MealSlot) -> &Meal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack => &self.snack,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Meals paired with their slots, in serving order.
    pub fn meals(&self) -> [(MealSlot, &Meal); 4] {
        [
            (MealSlot::Breakfast, &self.breakfast),
            (MealSlot::Lunch, &self.lunch),
            (MealSlot::Snack, &self.snack),
            (MealSlot::Dinner, &self.dinner),
        ]
    }
}

/// A named day with its meals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedDay {
    pub day: String,
    pub meals: DayPlan,
}

/// Seven days of meals plus the targets they were generated against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekPlan {
    pub targets: NutritionTargets,
    pub days: Vec<PlannedDay>,
}

impl WeekPlan {
    /// Distinct food ids used anywhere in the week.
    pub fn distinct_food_ids(&self) -> HashSet<&str> {
        self.days
            .iter()
            .flat_map(|d| d.meals.meals())
            .flat_map(|(_, meal)| meal.items.iter())
            .map(|i| i.id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: id.to_string(),
            calories,
            protein,
            carbs,
            fat,
            categories: vec![MealSlot::Lunch],
            veg: true,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_meal_totals_derive_from_items() {
        let meal = Meal::from_items(vec![
            item("a", 300.0, 20.0, 30.0, 10.0),
            item("b", 150.0, 5.0, 25.0, 2.0),
        ]);

        assert_eq!(meal.total_calories, 450.0);
        assert_eq!(meal.macros.protein, 25.0);
        assert_eq!(meal.macros.carbs, 55.0);
        assert_eq!(meal.macros.fat, 12.0);
    }

    #[test]
    fn test_empty_meal() {
        let meal = Meal::empty();
        assert!(meal.is_empty());
        assert_eq!(meal.total_calories, 0.0);
        assert_eq!(meal.macros, MacroTotals::default());
    }

    #[test]
    fn test_slot_from_key() {
        assert_eq!(MealSlot::from_key("breakfast"), Some(MealSlot::Breakfast));
        assert_eq!(MealSlot::from_key("DINNER"), Some(MealSlot::Dinner));
        assert_eq!(MealSlot::from_key("brunch"), None);
    }

    #[test]
    fn test_slot_shares_cover_the_day() {
        let total: f64 = MealSlot::ALL.iter().map(|s| s.calorie_share()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_slot_serde_lowercase() {
        let json = serde_json::to_string(&MealSlot::Breakfast).unwrap();
        assert_eq!(json, "\"breakfast\"");
        let slot: MealSlot = serde_json::from_str("\"snack\"").unwrap();
        assert_eq!(slot, MealSlot::Snack);
    }
}
