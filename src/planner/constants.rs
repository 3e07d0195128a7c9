// ─────────────────────────────────────────────────────────────────────────────
// Scoring
// ─────────────────────────────────────────────────────────────────────────────

/// Peak value of the calorie-fit term at an exact target match.
pub const CALORIE_FIT_PEAK: f64 = 100.0;

/// Gaussian width (kcal) of the calorie-fit term. Near-zero past ~450 off.
pub const CALORIE_FIT_SIGMA: f64 = 150.0;

/// Weights of the three scored terms.
pub const CALORIE_WEIGHT: f64 = 0.6;
pub const DIVERSITY_WEIGHT: f64 = 0.2;
pub const PREFERENCE_WEIGHT: f64 = 0.2;

/// Diversity term by weekly usage count: never used / used once / used more.
pub const NOVELTY_BONUS: f64 = 10.0;
pub const SECOND_USE_PENALTY: f64 = -5.0;
pub const HEAVY_USE_PENALTY: f64 = -20.0;

/// Upper bound (exclusive) of the uniform tie-breaking jitter, added
/// unweighted after the blend.
pub const JITTER_SPAN: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Rotation and meal assembly
// ─────────────────────────────────────────────────────────────────────────────

/// Weekly selection cap for non-staple items.
pub const WEEKLY_USAGE_CAP: u32 = 3;

/// Usage count seeded for a food the user asked to swap out. High enough
/// that the cap gate always rejects it.
pub const AVOID_SEED_COUNT: u32 = 99;

/// Stop gap-filling once the remaining calorie gap drops below this.
pub const GAP_CLOSE_ENOUGH: f64 = 80.0;

/// Maximum side dishes added after the main selection.
pub const MAX_SIDE_ROUNDS: usize = 3;

/// Name fragments marking carbohydrate staples, which are exempt from
/// rotation rules.
pub const STAPLE_KEYWORDS: [&str; 8] = [
    "roti", "naan", "rice", "bread", "toast", "idli", "poha", "upma",
];

/// Day names, in planning order.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// ─────────────────────────────────────────────────────────────────────────────
// Needs calculator
// ─────────────────────────────────────────────────────────────────────────────

/// BMI above which the basal estimate is scaled down; fat mass burns less
/// energy than lean mass.
pub const BMI_CORRECTION_THRESHOLD: f64 = 30.0;
pub const BMI_CORRECTION_FACTOR: f64 = 0.85;

/// Weight-loss calorie caps, applied regardless of the computed value.
pub const WEIGHT_LOSS_CAP_MALE: f64 = 2200.0;
pub const WEIGHT_LOSS_CAP_FEMALE: f64 = 1800.0;

/// Safety floors, applied regardless of goal.
pub const CALORIE_FLOOR_MALE: f64 = 1500.0;
pub const CALORIE_FLOOR_FEMALE: f64 = 1200.0;

/// Final targets round to the nearest multiple of this.
pub const CALORIE_ROUNDING_STEP: f64 = 50.0;

/// Atwater factors for converting calorie shares to grams.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Satisfaction estimate
// ─────────────────────────────────────────────────────────────────────────────

pub const SATISFACTION_BASE: i32 = 80;

/// Bonus when the week uses more than this many distinct foods.
pub const VARIETY_BONUS: i32 = 10;
pub const VARIETY_DISTINCT_THRESHOLD: usize = 15;

/// Bonus when a muscle-gain plan carries a protein target above this.
pub const GOAL_ALIGNMENT_BONUS: i32 = 5;
pub const HIGH_PROTEIN_THRESHOLD: u32 = 150;
