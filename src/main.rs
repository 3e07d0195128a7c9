use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use nutri_plan_rs::cli::{Cli, Command};
use nutri_plan_rs::error::{PlanError, Result};
use nutri_plan_rs::interface::{
    collect_preferences, collect_profile, display_food_list, display_meal, display_targets,
    display_week_plan, prompt_yes_no,
};
use nutri_plan_rs::models::{MealSlot, TagScores};
use nutri_plan_rs::planner::{
    compute_targets, estimate_satisfaction, generate_weekly_plan, regenerate_single_meal,
    satisfaction_verdict, slot_target,
};
use nutri_plan_rs::state::{load_catalog, load_tag_scores, save_plan};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let learned = match &cli.preferences {
        Some(path) => Some(load_tag_scores(path)?),
        None => None,
    };

    match command {
        Command::Plan { output } => cmd_plan(&cli.catalog, output.as_deref(), learned, &mut rng),
        Command::Regenerate { slot, avoid } => {
            cmd_regenerate(&cli.catalog, &slot, avoid.as_deref(), learned, &mut rng)
        }
        Command::Foods => cmd_foods(&cli.catalog),
    }
}

/// Generate and display a weekly plan.
fn cmd_plan(
    catalog_path: &str,
    output: Option<&str>,
    learned: Option<TagScores>,
    rng: &mut StdRng,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    if catalog.is_empty() {
        println!("Catalog at {} is empty; nothing to plan with.", catalog_path);
        return Ok(());
    }
    println!("Loaded {} foods", catalog.len());
    println!();

    let profile = collect_profile()?;
    let prefs = collect_preferences(&catalog)?;

    let targets = compute_targets(&profile);
    display_targets(&targets);

    let plan = generate_weekly_plan(&catalog, &targets, &prefs, learned.as_ref(), rng);
    display_week_plan(&plan);

    let score = estimate_satisfaction(&profile, &plan);
    println!(
        "Predicted satisfaction: {}% — {}",
        score,
        satisfaction_verdict(score)
    );
    println!();

    match output {
        Some(path) => {
            save_plan(path, &plan)?;
            println!("Plan saved to {}", path);
        }
        None => {
            if prompt_yes_no("Save plan to plan.json?", false)? {
                save_plan("plan.json", &plan)?;
                println!("Plan saved to plan.json");
            }
        }
    }

    Ok(())
}

/// Regenerate a single meal for one slot.
fn cmd_regenerate(
    catalog_path: &str,
    slot_key: &str,
    avoid: Option<&str>,
    learned: Option<TagScores>,
    rng: &mut StdRng,
) -> Result<()> {
    let slot = MealSlot::from_key(slot_key)
        .ok_or_else(|| PlanError::InvalidInput(format!("unknown meal slot: {}", slot_key)))?;

    let catalog = load_catalog(catalog_path)?;
    if catalog.is_empty() {
        println!("Catalog at {} is empty; nothing to plan with.", catalog_path);
        return Ok(());
    }

    let profile = collect_profile()?;
    let prefs = collect_preferences(&catalog)?;

    let targets = compute_targets(&profile);
    let target = slot_target(slot, targets.calories);

    let meal = regenerate_single_meal(
        &catalog,
        slot,
        target,
        &prefs,
        avoid,
        learned.as_ref(),
        rng,
    );

    println!();
    println!("=== Regenerated {} ({:.0} kcal target) ===", slot.as_str(), target);
    display_meal(slot.as_str(), &meal);
    println!();

    Ok(())
}

/// List the catalog.
fn cmd_foods(catalog_path: &str) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    display_food_list(&catalog);
    Ok(())
}
