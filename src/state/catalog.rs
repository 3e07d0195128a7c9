use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PlanError, Result};
use crate::models::{FoodItem, MealSlot, TagScores, WeekPlan};

/// Load a food catalog from JSON or CSV, keyed by file extension.
///
/// Deduplicates by id, last occurrence wins; catalog order is otherwise
/// preserved since selection tie-breaking depends on it.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let items = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => return Err(PlanError::UnsupportedFormat(other.to_string())),
    };

    Ok(dedup_by_id(items))
}

fn load_json(path: &Path) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// CSV catalog row. Multi-value cells (categories, tags) are
/// pipe-separated; unknown slot keys are skipped rather than rejected.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    calories: f64,
    #[serde(default)]
    protein: f64,
    #[serde(default)]
    carbs: f64,
    #[serde(default)]
    fat: f64,
    #[serde(default)]
    categories: String,
    #[serde(default)]
    veg: bool,
    #[serde(default)]
    tags: String,
}

impl From<CsvRow> for FoodItem {
    fn from(row: CsvRow) -> Self {
        FoodItem {
            id: row.id,
            name: row.name,
            calories: row.calories,
            protein: row.protein,
            carbs: row.carbs,
            fat: row.fat,
            categories: split_multi(&row.categories)
                .filter_map(|key| MealSlot::from_key(key))
                .collect(),
            veg: row.veg,
            tags: split_multi(&row.tags).map(|t| t.to_string()).collect(),
        }
    }
}

fn split_multi(cell: &str) -> impl Iterator<Item = &str> {
    cell.split('|').map(str::trim).filter(|s| !s.is_empty())
}

fn load_csv(path: &Path) -> Result<Vec<FoodItem>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut items = Vec::new();
    for record in reader.deserialize() {
        let row: CsvRow = record?;
        items.push(row.into());
    }
    Ok(items)
}

fn dedup_by_id(items: Vec<FoodItem>) -> Vec<FoodItem> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<FoodItem> = Vec::with_capacity(items.len());
    for item in items {
        match index.get(&item.id) {
            Some(&i) => out[i] = item,
            None => {
                index.insert(item.id.clone(), out.len());
                out.push(item);
            }
        }
    }
    out
}

/// Write a finished plan as pretty JSON. The plan is plain data; anything
/// downstream can render it.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &WeekPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

/// Learned preference files arrive in either of two shapes: a bare
/// tag-to-weight map, or the map under a `tagScores` key. Both normalize
/// to the same `TagScores` here, once, at the boundary.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagScoresFile {
    Wrapped {
        #[serde(rename = "tagScores")]
        tag_scores: HashMap<String, i32>,
    },
    Plain(HashMap<String, i32>),
}

pub fn load_tag_scores<P: AsRef<Path>>(path: P) -> Result<TagScores> {
    let content = fs::read_to_string(path)?;
    let parsed: TagScoresFile = serde_json::from_str(&content)?;
    let raw = match parsed {
        TagScoresFile::Wrapped { tag_scores } => tag_scores,
        TagScoresFile::Plain(map) => map,
    };
    Ok(TagScores::from_map(raw))
}
