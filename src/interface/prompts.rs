use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{
    ActivityLevel, BiometricProfile, FoodItem, Gender, Goal, PreferenceProfile,
};

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))
}

/// Collect the biometric profile interactively.
pub fn collect_profile() -> Result<BiometricProfile> {
    let age = prompt_number("Age (years)", "30")? as u32;

    let gender_options = ["male", "female"];
    let gender_idx = Select::new()
        .with_prompt("Gender")
        .items(&gender_options)
        .default(0)
        .interact()?;
    let gender = Gender::from_key(gender_options[gender_idx]);

    let height_cm = prompt_number("Height (cm)", "170")?;
    let weight_kg = prompt_number("Weight (kg)", "70")?;

    let activity_options = ["sedentary", "light", "moderate", "active", "very_active"];
    let activity_idx = Select::new()
        .with_prompt("Activity level")
        .items(&activity_options)
        .default(0)
        .interact()?;
    let activity = ActivityLevel::from_key(activity_options[activity_idx]);

    let goal_options = ["maintenance", "weight_loss", "muscle_gain"];
    let goal_idx = Select::new()
        .with_prompt("Goal")
        .items(&goal_options)
        .default(0)
        .interact()?;
    let goal = Goal::from_key(goal_options[goal_idx]);

    Ok(BiometricProfile {
        age,
        gender,
        height_cm,
        weight_kg,
        activity,
        goal,
    })
}

/// Collect dietary constraints interactively.
///
/// Allergies are free-text terms (matched loosely downstream). Dislikes
/// are resolved to exact catalog names via fuzzy matching, since the
/// dislike filter matches exactly.
pub fn collect_preferences(catalog: &[FoodItem]) -> Result<PreferenceProfile> {
    let vegetarian_only = Confirm::new()
        .with_prompt("Vegetarian meals only?")
        .default(false)
        .interact()?;

    let mut allergies = Vec::new();
    loop {
        let input: String = Input::new()
            .with_prompt("Enter an allergy term (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let term = input.trim();
        if term.is_empty() {
            break;
        }
        allergies.push(term.to_lowercase());
        println!("Added allergy: {}", term);
    }

    let mut dislikes = Vec::new();
    loop {
        let input: String = Input::new()
            .with_prompt("Enter a disliked food (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        if let Some(name) = resolve_food_name(catalog, input)? {
            println!("Added dislike: {}", name);
            dislikes.push(name);
        }
    }

    Ok(PreferenceProfile {
        vegetarian_only,
        allergies,
        dislikes,
        tag_scores: Default::default(),
    })
}

/// Resolve free-text input to an exact catalog name: exact match first,
/// then jaro-winkler candidates above 0.7 confirmed by the user.
fn resolve_food_name(catalog: &[FoodItem], input: &str) -> Result<Option<String>> {
    let lower = input.to_lowercase();

    if let Some(food) = catalog.iter().find(|f| f.name.to_lowercase() == lower) {
        return Ok(Some(food.name.clone()));
    }

    let mut candidates: Vec<(&FoodItem, f64)> = catalog
        .iter()
        .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &lower)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching food found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then(|| food.name.clone()));
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(f, _)| f.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(options[selection].clone()))
    } else {
        Ok(None)
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
