use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a gender key. Unrecognized keys fall back to male, matching
    /// the documented silent-default policy for profile keys.
    pub fn from_key(key: &str) -> Gender {
        match key.to_lowercase().as_str() {
            "female" | "f" => Gender::Female,
            _ => Gender::Male,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Parse an activity key. Unrecognized keys fall back to sedentary,
    /// the lowest factor.
    pub fn from_key(key: &str) -> ActivityLevel {
        match key.to_lowercase().as_str() {
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Sedentary,
        }
    }

    /// TDEE multiplier over the basal rate.
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.20,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    Maintenance,
    MuscleGain,
}

impl Goal {
    /// Parse a goal key. Unrecognized keys fall back to maintenance.
    pub fn from_key(key: &str) -> Goal {
        match key.to_lowercase().as_str() {
            "weight_loss" => Goal::WeightLoss,
            "muscle_gain" => Goal::MuscleGain,
            _ => Goal::Maintenance,
        }
    }

    /// Daily calorie adjustment over TDEE.
    pub fn calorie_adjustment(self) -> f64 {
        match self {
            Goal::WeightLoss => -500.0,
            Goal::Maintenance => 0.0,
            Goal::MuscleGain => 300.0,
        }
    }

    /// (protein, carbs, fat) calorie shares for the macro split.
    pub fn macro_ratios(self) -> (f64, f64, f64) {
        match self {
            Goal::WeightLoss => (0.40, 0.30, 0.30),
            Goal::Maintenance => (0.30, 0.40, 0.30),
            Goal::MuscleGain => (0.30, 0.45, 0.25),
        }
    }
}

/// The biometric inputs to the needs calculator. Field presence is the
/// caller's concern; everything here is already validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricProfile {
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

/// Learned per-tag weights: positive favors a tag, negative avoids it.
/// Unseen tags weigh 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagScores(HashMap<String, i32>);

impl TagScores {
    pub fn from_map(raw: HashMap<String, i32>) -> Self {
        Self(raw)
    }

    pub fn weight(&self, tag: &str) -> i32 {
        self.0.get(tag).copied().unwrap_or(0)
    }

    pub fn set(&mut self, tag: &str, weight: i32) {
        self.0.insert(tag.to_string(), weight);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Dietary constraints and learned taste signal for one plan request.
/// Read-only to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceProfile {
    #[serde(default)]
    pub vegetarian_only: bool,

    /// Terms matched loosely against item names and tags.
    #[serde(default)]
    pub allergies: Vec<String>,

    /// Entries matched exactly against item ids and display names.
    #[serde(default)]
    pub dislikes: Vec<String>,

    #[serde(default)]
    pub tag_scores: TagScores,
}

/// Daily calorie and macro targets, derived once per plan request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}
