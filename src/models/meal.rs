use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::engine::constants::{
    BREAKFAST_CALORIE_SHARE, DINNER_CALORIE_SHARE, LUNCH_CALORIE_SHARE, OMNIVORE,
};
use crate::models::recommendation::Macros;

/// A meal slot in a daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        Self::ALL.into_iter().find(|slot| slot.label() == label)
    }

    /// Intended share of the daily calorie target for this slot.
    pub fn calorie_share(&self) -> f64 {
        match self {
            MealSlot::Breakfast => BREAKFAST_CALORIE_SHARE,
            MealSlot::Lunch => LUNCH_CALORIE_SHARE,
            MealSlot::Dinner => DINNER_CALORIE_SHARE,
        }
    }
}

/// One dish in the meal catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealCatalogEntry {
    pub name: String,
    pub calories: u32,
    /// Grams.
    pub protein: u32,
    /// Grams.
    pub fat: u32,
    /// Grams.
    pub carbs: u32,
    #[serde(default)]
    pub diet_tags: BTreeSet<String>,
    #[serde(default)]
    pub allergens: BTreeSet<String>,
}

impl MealCatalogEntry {
    pub fn new(
        name: impl Into<String>,
        calories: u32,
        protein: u32,
        fat: u32,
        carbs: u32,
        diet_tags: &[&str],
        allergens: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein,
            fat,
            carbs,
            diet_tags: diet_tags.iter().map(|t| t.to_string()).collect(),
            allergens: allergens.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Case-insensitive diet tag check.
    pub fn has_tag(&self, diet_type: &str) -> bool {
        let wanted = diet_type.trim().to_lowercase();
        self.diet_tags.iter().any(|tag| tag.to_lowercase() == wanted)
    }

    /// True when any listed allergy matches one of this entry's allergens.
    pub fn contains_any_allergen(&self, allergies: &[String]) -> bool {
        allergies.iter().any(|allergy| {
            let allergy = allergy.trim().to_lowercase();
            self.allergens.iter().any(|a| a.to_lowercase() == allergy)
        })
    }

    pub fn macros(&self) -> Macros {
        Macros {
            protein: self.protein,
            fat: self.fat,
            carbs: self.carbs,
        }
    }

    /// Lowercase and trim tags and allergens, dropping empties.
    pub(crate) fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.diet_tags = normalize_labels(self.diet_tags);
        self.allergens = normalize_labels(self.allergens);
        self
    }
}

fn normalize_labels(labels: BTreeSet<String>) -> BTreeSet<String> {
    labels
        .into_iter()
        .map(|label| label.trim().to_lowercase())
        .filter(|label| !label.is_empty())
        .collect()
}

/// Dietary preferences that narrow the meal catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanPreferences {
    #[serde(default = "default_diet_type")]
    pub diet_type: String,

    /// Matched case-insensitively against catalog allergens.
    #[serde(default)]
    pub allergies: Vec<String>,
}

fn default_diet_type() -> String {
    OMNIVORE.to_string()
}

impl Default for MealPlanPreferences {
    fn default() -> Self {
        Self {
            diet_type: default_diet_type(),
            allergies: Vec::new(),
        }
    }
}

impl MealPlanPreferences {
    /// Build preferences; a missing or blank diet type means omnivore.
    pub fn new(diet_type: Option<&str>, allergies: Vec<String>) -> Self {
        let diet_type = diet_type
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .unwrap_or_else(default_diet_type);

        Self {
            diet_type,
            allergies,
        }
    }

    /// Build preferences from intake answers where allergies are free text.
    pub fn from_intake(diet_type: Option<&str>, allergies_text: &str) -> Self {
        Self::new(diet_type, parse_allergy_list(allergies_text))
    }

    /// Diet filter to apply, if any.
    pub fn diet_filter(&self) -> Option<&str> {
        let diet = self.diet_type.trim();
        if diet.is_empty() || diet.eq_ignore_ascii_case(OMNIVORE) {
            None
        } else {
            Some(diet)
        }
    }
}

/// Split free-text allergies on commas and semicolons.
pub fn parse_allergy_list(text: &str) -> Vec<String> {
    text.split([',', ';'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
