use rand::Rng;

use crate::models::{FoodItem, Meal, MealSlot, TagScores};
use crate::planner::constants::*;
use crate::planner::scoring::score_item;
use crate::state::RotationTracker;

/// Carbohydrate staples (rice, breads and similar bases) are exempt from
/// rotation rules; they are expected to repeat.
pub fn is_staple(item: &FoodItem) -> bool {
    let name = item.name.to_lowercase();
    STAPLE_KEYWORDS.iter().any(|kw| name.contains(kw))
}

/// Rotation gate for non-staples: weekly usage under the cap and no
/// repeat of the same slot from the immediately preceding day.
fn passes_rotation(item: &FoodItem, slot: MealSlot, state: &RotationTracker) -> bool {
    if is_staple(item) {
        return true;
    }

    if state.usage_count(&item.id) >= WEEKLY_USAGE_CAP {
        return false;
    }

    !state.served_yesterday(slot, &item.id)
}

/// Pick the highest-scoring candidate for a slot.
///
/// Phase 1 scores only items passing the rotation gate. When that leaves
/// nothing, phase 2 relaxes the gate and scores the full pool, so a meal
/// is produced whenever any candidate exists at all. Score ties keep the
/// earlier item in catalog order; the jitter term settles most of them
/// anyway.
pub fn pick_best_item<'a, R: Rng>(
    candidates: &[&'a FoodItem],
    target_calories: f64,
    slot: MealSlot,
    state: &RotationTracker,
    scores: &TagScores,
    rng: &mut R,
) -> Option<&'a FoodItem> {
    let gated: Vec<&FoodItem> = candidates
        .iter()
        .copied()
        .filter(|item| passes_rotation(item, slot, state))
        .collect();

    let pool: &[&FoodItem] = if gated.is_empty() { candidates } else { &gated };

    let mut best: Option<&'a FoodItem> = None;
    let mut best_score = f64::NEG_INFINITY;
    for &item in pool {
        let score = score_item(item, target_calories, state, scores, rng);
        if score > best_score {
            best_score = score;
            best = Some(item);
        }
    }

    best
}

/// Build one meal for a slot: a main selection, then up to
/// `MAX_SIDE_ROUNDS` sides chasing the remaining calorie gap.
///
/// Never errors: an empty candidate pool degrades to an empty meal, and
/// an exhausted pool stops the fill loop early. Each accepted item bumps
/// its weekly usage count immediately, so later picks in the same meal
/// already see it.
pub fn build_meal<R: Rng>(
    slot: MealSlot,
    target_calories: f64,
    eligible: &[&FoodItem],
    state: &mut RotationTracker,
    scores: &TagScores,
    rng: &mut R,
) -> Meal {
    let candidates: Vec<&FoodItem> = eligible
        .iter()
        .copied()
        .filter(|item| item.fits_slot(slot))
        .collect();

    if candidates.is_empty() {
        return Meal::empty();
    }

    let Some(main) = pick_best_item(&candidates, target_calories, slot, state, scores, rng) else {
        return Meal::empty();
    };

    let mut selected: Vec<FoodItem> = vec![main.clone()];
    state.record_use(&main.id);

    for _ in 0..MAX_SIDE_ROUNDS {
        let current: f64 = selected.iter().map(|i| i.calories).sum();
        let gap = target_calories - current;
        if gap < GAP_CLOSE_ENOUGH {
            break;
        }

        // An item appears in a meal at most once
        let sides: Vec<&FoodItem> = candidates
            .iter()
            .copied()
            .filter(|item| !selected.iter().any(|s| s.id == item.id))
            .collect();

        match pick_best_item(&sides, gap, slot, state, scores, rng) {
            Some(side) => {
                state.record_use(&side.id);
                selected.push(side.clone());
            }
            None => break,
        }
    }

    Meal::from_items(selected)
}
