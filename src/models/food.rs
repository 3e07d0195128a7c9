use serde::{Deserialize, Serialize};

use crate::models::MealSlot;

/// A food item from the catalog.
///
/// Items are read-only for the duration of planning; rotation state lives
/// in `RotationTracker`, never on the item itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,

    pub name: String,

    pub calories: f64,

    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub carbs: f64,

    #[serde(default)]
    pub fat: f64,

    /// Meal slots this item may be served in. Non-exclusive.
    #[serde(default)]
    pub categories: Vec<MealSlot>,

    #[serde(default)]
    pub veg: bool,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl FoodItem {
    pub fn fits_slot(&self, slot: MealSlot) -> bool {
        self.categories.contains(&slot)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): {} cal, P:{} C:{} F:{}",
            self.name, self.id, self.calories, self.protein, self.carbs, self.fat
        )
    }
}
