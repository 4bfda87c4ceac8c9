mod builtin;
mod loader;

pub use loader::{load_catalog, save_catalog};

use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};
use crate::models::{MealCatalogEntry, MealSlot};

/// Immutable meal catalog, partitioned by slot.
///
/// Every slot is guaranteed non-empty; construction fails otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile")]
pub struct MealCatalog {
    breakfast: Vec<MealCatalogEntry>,
    lunch: Vec<MealCatalogEntry>,
    dinner: Vec<MealCatalogEntry>,
}

/// Unvalidated on-disk shape of a catalog.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    breakfast: Vec<MealCatalogEntry>,
    #[serde(default)]
    lunch: Vec<MealCatalogEntry>,
    #[serde(default)]
    dinner: Vec<MealCatalogEntry>,
}

impl TryFrom<CatalogFile> for MealCatalog {
    type Error = CoachError;

    fn try_from(file: CatalogFile) -> Result<Self> {
        MealCatalog::new(file.breakfast, file.lunch, file.dinner)
    }
}

impl MealCatalog {
    /// Build a catalog, normalizing labels and rejecting empty slots or unnamed entries.
    pub fn new(
        breakfast: Vec<MealCatalogEntry>,
        lunch: Vec<MealCatalogEntry>,
        dinner: Vec<MealCatalogEntry>,
    ) -> Result<Self> {
        let catalog = Self {
            breakfast: breakfast.into_iter().map(MealCatalogEntry::normalized).collect(),
            lunch: lunch.into_iter().map(MealCatalogEntry::normalized).collect(),
            dinner: dinner.into_iter().map(MealCatalogEntry::normalized).collect(),
        };

        for slot in MealSlot::ALL {
            let entries = catalog.slot(slot);
            if entries.is_empty() {
                return Err(CoachError::Configuration(format!(
                    "meal catalog has no {} entries",
                    slot.label()
                )));
            }
            if entries.iter().any(|e| e.name.is_empty()) {
                return Err(CoachError::Configuration(format!(
                    "meal catalog has an unnamed {} entry",
                    slot.label()
                )));
            }
        }

        Ok(catalog)
    }

    /// The catalog shipped with the engine: five dishes per slot.
    pub fn builtin() -> Self {
        builtin::builtin_catalog()
    }

    /// Entries for one slot.
    pub fn slot(&self, slot: MealSlot) -> &[MealCatalogEntry] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// All entries with their slot, breakfast first.
    pub fn entries(&self) -> impl Iterator<Item = (MealSlot, &MealCatalogEntry)> {
        MealSlot::ALL
            .into_iter()
            .flat_map(move |slot| self.slot(slot).iter().map(move |entry| (slot, entry)))
    }

    /// Total number of entries across all slots.
    pub fn len(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MealCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
