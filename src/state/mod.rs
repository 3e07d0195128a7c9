mod catalog;
mod rotation;

pub use catalog::{load_catalog, load_tag_scores, save_plan};
pub use rotation::RotationTracker;
