use rand::Rng;

use crate::models::{FoodItem, TagScores};
use crate::planner::constants::*;
use crate::state::RotationTracker;

/// Gaussian calorie-fit term: peaks at the target and decays smoothly.
pub fn calorie_fit(calories: f64, target_calories: f64) -> f64 {
    let diff = calories - target_calories;
    CALORIE_FIT_PEAK * (-(diff * diff) / (2.0 * CALORIE_FIT_SIGMA * CALORIE_FIT_SIGMA)).exp()
}

/// Diversity term keyed off this week's usage count. Discourages repeats
/// without forbidding them; the hard gate lives in the selection layer.
pub fn diversity_score(usage: u32) -> f64 {
    match usage {
        0 => NOVELTY_BONUS,
        1 => SECOND_USE_PENALTY,
        _ => HEAVY_USE_PENALTY,
    }
}

/// Sum of learned tag weights over the item's tags. The only place
/// per-user history influences selection.
pub fn preference_score(item: &FoodItem, scores: &TagScores) -> f64 {
    item.tags
        .iter()
        .map(|tag| scores.weight(tag) as f64)
        .sum()
}

/// The composite score driving every selection decision.
///
/// Weighted blend of calorie fit, diversity, and learned preference, plus
/// an unweighted uniform jitter in [0, JITTER_SPAN) that breaks ties
/// between near-equal candidates.
pub fn score_item<R: Rng>(
    item: &FoodItem,
    target_calories: f64,
    state: &RotationTracker,
    scores: &TagScores,
    rng: &mut R,
) -> f64 {
    let fit = calorie_fit(item.calories, target_calories);
    let diversity = diversity_score(state.usage_count(&item.id));
    let preference = preference_score(item, scores);
    let jitter = rng.gen_range(0.0..JITTER_SPAN);

    CALORIE_WEIGHT * fit + DIVERSITY_WEIGHT * diversity + PREFERENCE_WEIGHT * preference + jitter
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealSlot;
    use assert_float_eq::assert_float_absolute_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn item(id: &str, calories: f64, tags: &[&str]) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: id.to_string(),
            calories,
            protein: 10.0,
            carbs: 20.0,
            fat: 5.0,
            categories: vec![MealSlot::Lunch],
            veg: true,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_calorie_fit_peaks_at_target() {
        assert_float_absolute_eq!(calorie_fit(500.0, 500.0), 100.0, 1e-9);
        assert!(calorie_fit(450.0, 500.0) > calorie_fit(400.0, 500.0));
        // Symmetric around the target
        assert_float_absolute_eq!(
            calorie_fit(400.0, 500.0),
            calorie_fit(600.0, 500.0),
            1e-9
        );
        // Effectively dead past ~3 sigma
        assert!(calorie_fit(1000.0, 500.0) < 1.0);
    }

    #[test]
    fn test_diversity_score_tiers() {
        assert_eq!(diversity_score(0), NOVELTY_BONUS);
        assert_eq!(diversity_score(1), SECOND_USE_PENALTY);
        assert_eq!(diversity_score(2), HEAVY_USE_PENALTY);
        assert_eq!(diversity_score(7), HEAVY_USE_PENALTY);
    }

    #[test]
    fn test_preference_score_sums_tag_weights() {
        let mut scores = TagScores::default();
        scores.set("spicy", 4);
        scores.set("fried", -2);

        let food = item("f1", 300.0, &["spicy", "fried", "lentil"]);
        assert_float_absolute_eq!(preference_score(&food, &scores), 2.0, 1e-9);

        let plain = item("f2", 300.0, &[]);
        assert_float_absolute_eq!(preference_score(&plain, &scores), 0.0, 1e-9);
    }

    #[test]
    fn test_score_is_weighted_blend_plus_jitter() {
        let state = RotationTracker::new();
        let scores = TagScores::default();
        let food = item("f1", 500.0, &[]);
        let mut rng = StdRng::seed_from_u64(7);

        // Fresh item at exact target: 0.6*100 + 0.2*10 + 0.2*0 = 62,
        // plus jitter in [0, 5)
        let s = score_item(&food, 500.0, &state, &scores, &mut rng);
        assert!((62.0..67.0).contains(&s), "score {} outside band", s);
    }

    #[test]
    fn test_fixed_seed_gives_fixed_score() {
        let state = RotationTracker::new();
        let scores = TagScores::default();
        let food = item("f1", 480.0, &[]);

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let a = score_item(&food, 500.0, &state, &scores, &mut rng_a);
        let b = score_item(&food, 500.0, &state, &scores, &mut rng_b);
        assert_eq!(a, b);
    }
}
