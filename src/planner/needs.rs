use crate::models::{BiometricProfile, Gender, Goal, NutritionTargets};
use crate::planner::constants::*;

/// Basal metabolic rate via Mifflin-St Jeor, corrected downward by 15%
/// when BMI exceeds 30 to avoid overestimating needs.
pub fn basal_metabolic_rate(profile: &BiometricProfile) -> f64 {
    let sex_term = match profile.gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
    };

    let mut bmr = 10.0 * profile.weight_kg + 6.25 * profile.height_cm
        - 5.0 * profile.age as f64
        + sex_term;

    let height_m = profile.height_cm / 100.0;
    let bmi = profile.weight_kg / (height_m * height_m);
    if bmi > BMI_CORRECTION_THRESHOLD {
        bmr *= BMI_CORRECTION_FACTOR;
    }

    bmr
}

/// Derive the daily calorie target and macro split from a profile.
///
/// Weight-loss targets are capped (2200 male / 1800 female) and every
/// target is floored (1500 male / 1200 female) before rounding to the
/// nearest 50. Macro grams round independently; they need not sum back
/// to the calorie target exactly.
pub fn compute_targets(profile: &BiometricProfile) -> NutritionTargets {
    let tdee = basal_metabolic_rate(profile) * profile.activity.factor();
    let mut target = tdee + profile.goal.calorie_adjustment();

    if profile.goal == Goal::WeightLoss {
        let cap = match profile.gender {
            Gender::Male => WEIGHT_LOSS_CAP_MALE,
            Gender::Female => WEIGHT_LOSS_CAP_FEMALE,
        };
        if target > cap {
            target = cap;
        }
    }

    let floor = match profile.gender {
        Gender::Male => CALORIE_FLOOR_MALE,
        Gender::Female => CALORIE_FLOOR_FEMALE,
    };
    if target < floor {
        target = floor;
    }

    let calories = ((target / CALORIE_ROUNDING_STEP).round() * CALORIE_ROUNDING_STEP) as u32;

    let (p_ratio, c_ratio, f_ratio) = profile.goal.macro_ratios();
    NutritionTargets {
        calories,
        protein: grams(calories, p_ratio, KCAL_PER_GRAM_PROTEIN),
        carbs: grams(calories, c_ratio, KCAL_PER_GRAM_CARBS),
        fat: grams(calories, f_ratio, KCAL_PER_GRAM_FAT),
    }
}

fn grams(calories: u32, ratio: f64, kcal_per_gram: f64) -> u32 {
    ((calories as f64 * ratio) / kcal_per_gram).round() as u32
}
