use crate::models::{BiometricProfile, Goal, WeekPlan};
use crate::planner::constants::*;

/// Post-hoc satisfaction estimate for a finished plan, clamped to 0-100.
///
/// A deterministic heuristic over variety and goal alignment. No side
/// effects, no state.
pub fn estimate_satisfaction(profile: &BiometricProfile, plan: &WeekPlan) -> u32 {
    let mut score = SATISFACTION_BASE;

    if plan.distinct_food_ids().len() > VARIETY_DISTINCT_THRESHOLD {
        score += VARIETY_BONUS;
    }

    if profile.goal == Goal::MuscleGain && plan.targets.protein > HIGH_PROTEIN_THRESHOLD {
        score += GOAL_ALIGNMENT_BONUS;
    }

    score.clamp(0, 100) as u32
}

/// One-line verdict attached next to the numeric score.
pub fn satisfaction_verdict(score: u32) -> &'static str {
    if score > 80 {
        "Highly optimized for your goal"
    } else {
        "Standard plan"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivityLevel, DayPlan, FoodItem, Gender, Meal, MealSlot, NutritionTargets, PlannedDay,
    };

    fn profile(goal: Goal) -> BiometricProfile {
        BiometricProfile {
            age: 28,
            gender: Gender::Female,
            height_cm: 165.0,
            weight_kg: 60.0,
            activity: ActivityLevel::Moderate,
            goal,
        }
    }

    fn item(id: &str) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: id.to_string(),
            calories: 300.0,
            protein: 15.0,
            carbs: 30.0,
            fat: 8.0,
            categories: vec![MealSlot::Lunch],
            veg: true,
            tags: Vec::new(),
        }
    }

    /// A week where every lunch holds `per_day` fresh items, ids unique
    /// across the whole week.
    fn plan_with_distinct_items(per_day: usize, protein_target: u32) -> WeekPlan {
        let days = (0..7)
            .map(|d| PlannedDay {
                day: format!("Day{}", d + 1),
                meals: DayPlan {
                    breakfast: Meal::empty(),
                    lunch: Meal::from_items(
                        (0..per_day).map(|i| item(&format!("f{}-{}", d, i))).collect(),
                    ),
                    snack: Meal::empty(),
                    dinner: Meal::empty(),
                },
            })
            .collect();

        WeekPlan {
            targets: NutritionTargets {
                calories: 2400,
                protein: protein_target,
                carbs: 240,
                fat: 80,
            },
            days,
        }
    }

    #[test]
    fn test_base_score_for_a_narrow_week() {
        let plan = plan_with_distinct_items(2, 120); // 14 distinct ids
        assert_eq!(estimate_satisfaction(&profile(Goal::Maintenance), &plan), 80);
    }

    #[test]
    fn test_variety_bonus_above_fifteen_distinct() {
        let plan = plan_with_distinct_items(3, 120); // 21 distinct ids
        assert_eq!(estimate_satisfaction(&profile(Goal::Maintenance), &plan), 90);
    }

    #[test]
    fn test_goal_alignment_bonus() {
        let plan = plan_with_distinct_items(3, 160);
        assert_eq!(estimate_satisfaction(&profile(Goal::MuscleGain), &plan), 95);

        // Protein at the threshold exactly does not qualify
        let borderline = plan_with_distinct_items(3, 150);
        assert_eq!(
            estimate_satisfaction(&profile(Goal::MuscleGain), &borderline),
            90
        );
    }

    #[test]
    fn test_score_stays_in_band() {
        let plan = plan_with_distinct_items(4, 200);
        let score = estimate_satisfaction(&profile(Goal::MuscleGain), &plan);
        assert!(score <= 100);
    }

    #[test]
    fn test_verdict_labels() {
        assert_eq!(satisfaction_verdict(95), "Highly optimized for your goal");
        assert_eq!(satisfaction_verdict(80), "Standard plan");
    }
}
