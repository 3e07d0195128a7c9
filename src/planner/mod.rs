pub mod constants;
pub mod filters;
pub mod needs;
pub mod satisfaction;
pub mod scoring;
pub mod selection;
pub mod week;

pub use filters::filter_catalog;
pub use needs::{basal_metabolic_rate, compute_targets};
pub use satisfaction::{estimate_satisfaction, satisfaction_verdict};
pub use scoring::score_item;
pub use selection::{build_meal, is_staple, pick_best_item};
pub use week::{generate_weekly_plan, regenerate_single_meal, slot_target};
