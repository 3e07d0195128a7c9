use std::collections::HashMap;

use crate::models::{DayPlan, MealSlot};

/// Rotation state for one plan-generation call.
///
/// Created fresh per call and threaded explicitly through the orchestrator
/// and selection engine; nothing here survives the call or is shared
/// between concurrent requests.
#[derive(Debug, Default)]
pub struct RotationTracker {
    /// Times each food id has been selected so far this week.
    weekly_usage: HashMap<String, u32>,

    /// Food ids served per slot on the immediately preceding day.
    /// Overwritten whole at each day boundary; only a one-day lookback.
    previous_day: HashMap<MealSlot, Vec<String>>,
}

impl RotationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn usage_count(&self, food_id: &str) -> u32 {
        self.weekly_usage.get(food_id).copied().unwrap_or(0)
    }

    /// Record an accepted selection. Counts update at acceptance time, so
    /// later picks within the same meal already see the new count.
    pub fn record_use(&mut self, food_id: &str) {
        *self.weekly_usage.entry(food_id.to_string()).or_insert(0) += 1;
    }

    /// Seed a food past the weekly cap so the rotation gate always rejects
    /// it; only the relaxed fallback can bring it back.
    pub fn seed_avoided(&mut self, food_id: &str) {
        self.weekly_usage.insert(
            food_id.to_string(),
            crate::planner::constants::AVOID_SEED_COUNT,
        );
    }

    pub fn served_yesterday(&self, slot: MealSlot, food_id: &str) -> bool {
        self.previous_day
            .get(&slot)
            .is_some_and(|ids| ids.iter().any(|id| id == food_id))
    }

    /// Replace the previous-day record with a finished day's selections.
    pub fn finish_day(&mut self, day: &DayPlan) {
        self.previous_day.clear();
        for (slot, meal) in day.meals() {
            self.previous_day
                .insert(slot, meal.items.iter().map(|i| i.id.clone()).collect());
        }
    }
}
