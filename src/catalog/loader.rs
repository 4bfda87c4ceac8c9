use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::MealCatalog;
use crate::error::{CoachError, Result};
use crate::models::{MealCatalogEntry, MealSlot};

/// One CSV row. Tags and allergens are `;`-separated.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogRow {
    slot: String,
    name: String,
    calories: u32,
    protein: u32,
    fat: u32,
    carbs: u32,
    #[serde(default)]
    diet_tags: String,
    #[serde(default)]
    allergens: String,
}

impl CatalogRow {
    fn from_entry(slot: MealSlot, entry: &MealCatalogEntry) -> Self {
        Self {
            slot: slot.label().to_string(),
            name: entry.name.clone(),
            calories: entry.calories,
            protein: entry.protein,
            fat: entry.fat,
            carbs: entry.carbs,
            diet_tags: join_labels(&entry.diet_tags),
            allergens: join_labels(&entry.allergens),
        }
    }

    fn into_entry(self) -> MealCatalogEntry {
        MealCatalogEntry {
            name: self.name,
            calories: self.calories,
            protein: self.protein,
            fat: self.fat,
            carbs: self.carbs,
            diet_tags: split_labels(&self.diet_tags),
            allergens: split_labels(&self.allergens),
        }
    }
}

fn join_labels(labels: &BTreeSet<String>) -> String {
    labels.iter().cloned().collect::<Vec<_>>().join(";")
}

fn split_labels(field: &str) -> BTreeSet<String> {
    field
        .split(';')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Load a replacement catalog from disk.
///
/// `.csv` files are read as slot-tagged rows; anything else is parsed as JSON.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let path = path.as_ref();

    let catalog = if is_csv(path) {
        load_catalog_csv(path)?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    };

    info!(
        path = %path.display(),
        breakfast = catalog.slot(MealSlot::Breakfast).len(),
        lunch = catalog.slot(MealSlot::Lunch).len(),
        dinner = catalog.slot(MealSlot::Dinner).len(),
        "loaded meal catalog"
    );

    Ok(catalog)
}

fn load_catalog_csv(path: &Path) -> Result<MealCatalog> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut breakfast = Vec::new();
    let mut lunch = Vec::new();
    let mut dinner = Vec::new();

    for row in reader.deserialize() {
        let row: CatalogRow = row?;
        let slot = MealSlot::parse(&row.slot).ok_or_else(|| {
            CoachError::InvalidInput(format!("unknown meal slot '{}' in catalog", row.slot))
        })?;

        let target = match slot {
            MealSlot::Breakfast => &mut breakfast,
            MealSlot::Lunch => &mut lunch,
            MealSlot::Dinner => &mut dinner,
        };
        target.push(row.into_entry());
    }

    MealCatalog::new(breakfast, lunch, dinner)
}

/// Write a catalog to disk, as CSV or JSON depending on the extension.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &MealCatalog) -> Result<()> {
    let path = path.as_ref();

    if is_csv(path) {
        let mut writer = csv::Writer::from_path(path)?;
        for (slot, entry) in catalog.entries() {
            writer.serialize(CatalogRow::from_entry(slot, entry))?;
        }
        writer.flush()?;
    } else {
        let json = serde_json::to_string_pretty(catalog)?;
        fs::write(path, json)?;
    }

    Ok(())
}
