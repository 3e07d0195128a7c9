use rand::Rng;

use crate::models::{
    DayPlan, FoodItem, Meal, MealSlot, NutritionTargets, PlannedDay, PreferenceProfile, TagScores,
    WeekPlan,
};
use crate::planner::constants::DAY_NAMES;
use crate::planner::filters::filter_catalog;
use crate::planner::selection::build_meal;
use crate::state::RotationTracker;

/// Calorie target for one slot, rounded per slot. The four rounded slot
/// targets are not re-normalized to sum to the daily total.
pub fn slot_target(slot: MealSlot, daily_calories: u32) -> f64 {
    (daily_calories as f64 * slot.calorie_share()).round()
}

/// The effective tag weights for a request: an explicitly supplied learned
/// mapping wins over whatever the preference profile carries. Normalized
/// here once, not per scoring call.
fn effective_tag_scores(prefs: &PreferenceProfile, learned: Option<&TagScores>) -> TagScores {
    learned.cloned().unwrap_or_else(|| prefs.tag_scores.clone())
}

fn build_day<R: Rng>(
    targets: &NutritionTargets,
    eligible: &[&FoodItem],
    state: &mut RotationTracker,
    scores: &TagScores,
    rng: &mut R,
) -> DayPlan {
    let daily = targets.calories;

    DayPlan {
        breakfast: build_meal(
            MealSlot::Breakfast,
            slot_target(MealSlot::Breakfast, daily),
            eligible,
            state,
            scores,
            rng,
        ),
        lunch: build_meal(
            MealSlot::Lunch,
            slot_target(MealSlot::Lunch, daily),
            eligible,
            state,
            scores,
            rng,
        ),
        snack: build_meal(
            MealSlot::Snack,
            slot_target(MealSlot::Snack, daily),
            eligible,
            state,
            scores,
            rng,
        ),
        dinner: build_meal(
            MealSlot::Dinner,
            slot_target(MealSlot::Dinner, daily),
            eligible,
            state,
            scores,
            rng,
        ),
    }
}

/// Generate a full week of meals against the given targets.
///
/// Rotation state is created fresh here and discarded on return; nothing
/// survives across calls. Days run strictly Monday through Sunday, each
/// day's gating depending on the previous day's output.
pub fn generate_weekly_plan<R: Rng>(
    catalog: &[FoodItem],
    targets: &NutritionTargets,
    prefs: &PreferenceProfile,
    learned: Option<&TagScores>,
    rng: &mut R,
) -> WeekPlan {
    let mut state = RotationTracker::new();
    let eligible = filter_catalog(catalog, prefs);
    let scores = effective_tag_scores(prefs, learned);

    let mut days = Vec::with_capacity(DAY_NAMES.len());
    for day in DAY_NAMES {
        let meals = build_day(targets, &eligible, &mut state, &scores, rng);
        state.finish_day(&meals);
        days.push(PlannedDay {
            day: day.to_string(),
            meals,
        });
    }

    WeekPlan {
        targets: *targets,
        days,
    }
}

/// Regenerate one meal outside any weekly context.
///
/// Uses a fresh rotation tracker seeded only with the avoided food, pushed
/// past the weekly cap so it can return only through the relaxed fallback
/// when nothing else fits the slot.
pub fn regenerate_single_meal<R: Rng>(
    catalog: &[FoodItem],
    slot: MealSlot,
    target_calories: f64,
    prefs: &PreferenceProfile,
    avoid_food_id: Option<&str>,
    learned: Option<&TagScores>,
    rng: &mut R,
) -> Meal {
    let eligible = filter_catalog(catalog, prefs);
    let scores = effective_tag_scores(prefs, learned);

    let mut state = RotationTracker::new();
    if let Some(id) = avoid_food_id {
        state.seed_avoided(id);
    }

    build_meal(slot, target_calories, &eligible, &mut state, &scores, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn targets() -> NutritionTargets {
        NutritionTargets {
            calories: 2000,
            protein: 150,
            carbs: 200,
            fat: 67,
        }
    }

    fn item(id: &str, name: &str, calories: f64, slots: &[MealSlot]) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: name.to_string(),
            calories,
            protein: 10.0,
            carbs: 20.0,
            fat: 5.0,
            categories: slots.to_vec(),
            veg: true,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_slot_targets_split_and_round() {
        assert_eq!(slot_target(MealSlot::Breakfast, 2000), 500.0);
        assert_eq!(slot_target(MealSlot::Lunch, 2000), 700.0);
        assert_eq!(slot_target(MealSlot::Snack, 2000), 200.0);
        assert_eq!(slot_target(MealSlot::Dinner, 2000), 600.0);

        // Independent rounding: 2750 * 0.25 = 687.5 -> 688
        assert_eq!(slot_target(MealSlot::Breakfast, 2750), 688.0);
    }

    #[test]
    fn test_week_has_seven_named_days() {
        let catalog = vec![
            item("b1", "Oats Bowl", 400.0, &[MealSlot::Breakfast]),
            item("l1", "Veg Thali", 650.0, &[MealSlot::Lunch]),
            item("s1", "Fruit Bowl", 180.0, &[MealSlot::Snack]),
            item("d1", "Paneer Curry", 550.0, &[MealSlot::Dinner]),
        ];
        let mut rng = StdRng::seed_from_u64(1);

        let plan = generate_weekly_plan(
            &catalog,
            &targets(),
            &PreferenceProfile::default(),
            None,
            &mut rng,
        );

        assert_eq!(plan.days.len(), 7);
        assert_eq!(plan.days[0].day, "Monday");
        assert_eq!(plan.days[6].day, "Sunday");
        assert_eq!(plan.targets, targets());
    }

    #[test]
    fn test_empty_catalog_degrades_to_empty_meals() {
        let mut rng = StdRng::seed_from_u64(1);
        let plan = generate_weekly_plan(
            &[],
            &targets(),
            &PreferenceProfile::default(),
            None,
            &mut rng,
        );

        assert_eq!(plan.days.len(), 7);
        for day in &plan.days {
            for (_, meal) in day.meals.meals() {
                assert!(meal.is_empty());
            }
        }
    }

    #[test]
    fn test_learned_scores_override_profile_scores() {
        let mut prefs = PreferenceProfile::default();
        prefs.tag_scores.set("spicy", -5);

        let mut learned = TagScores::default();
        learned.set("spicy", 9);

        let effective = effective_tag_scores(&prefs, Some(&learned));
        assert_eq!(effective.weight("spicy"), 9);

        let fallback = effective_tag_scores(&prefs, None);
        assert_eq!(fallback.weight("spicy"), -5);
    }

    #[test]
    fn test_regenerate_is_stateless_and_avoids_food() {
        let catalog = vec![
            item("d1", "Paneer Curry", 550.0, &[MealSlot::Dinner]),
            item("d2", "Veg Kofta", 560.0, &[MealSlot::Dinner]),
            item("d3", "Mushroom Masala", 540.0, &[MealSlot::Dinner]),
        ];
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..10 {
            let meal = regenerate_single_meal(
                &catalog,
                MealSlot::Dinner,
                550.0,
                &PreferenceProfile::default(),
                Some("d1"),
                None,
                &mut rng,
            );
            assert!(!meal.is_empty());
            assert!(!meal.contains("d1"), "avoided food reappeared");
        }
    }

    #[test]
    fn test_regenerate_falls_back_to_avoided_food_as_last_resort() {
        let catalog = vec![item("d1", "Paneer Curry", 550.0, &[MealSlot::Dinner])];
        let mut rng = StdRng::seed_from_u64(5);

        let meal = regenerate_single_meal(
            &catalog,
            MealSlot::Dinner,
            550.0,
            &PreferenceProfile::default(),
            Some("d1"),
            None,
            &mut rng,
        );

        // The only candidate wins through the relaxed fallback
        assert!(meal.contains("d1"));
    }
}
