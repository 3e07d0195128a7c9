use clap::{Parser, Subcommand};

/// NutriPlan — weekly meal plans around calorie targets, rotation rules,
/// and learned taste preferences.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog (JSON or CSV).
    #[arg(short, long, default_value = "foods.json")]
    pub catalog: String,

    /// Path to a learned tag-preference JSON file.
    #[arg(short, long)]
    pub preferences: Option<String>,

    /// Seed for the selection jitter; omit for a different plan each run.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a weekly meal plan from your profile.
    Plan {
        /// Write the finished plan to this JSON file.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Regenerate one meal, optionally swapping a food out.
    Regenerate {
        /// Meal slot: breakfast, lunch, snack, or dinner.
        slot: String,

        /// Food id to swap out of the new meal.
        #[arg(long)]
        avoid: Option<String>,
    },

    /// List the foods in the catalog.
    Foods,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan { output: None }
    }
}
