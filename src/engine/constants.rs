use std::collections::HashMap;
use std::sync::LazyLock;

/// Energy density of protein (kcal per gram).
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy density of carbohydrate (kcal per gram).
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy density of fat (kcal per gram).
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_FACTOR: f64 = 10.0;
pub const BMR_HEIGHT_FACTOR: f64 = 6.25;
pub const BMR_AGE_FACTOR: f64 = 5.0;

/// Sex constant for "female".
pub const BMR_FEMALE_CONSTANT: f64 = -161.0;

/// Sex constant for every other value.
pub const BMR_MALE_CONSTANT: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Intake defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_AGE_YEARS: u32 = 30;

/// Diet type that disables diet filtering.
pub const OMNIVORE: &str = "omnivore";

// ─────────────────────────────────────────────────────────────────────────────
// Activity and goal tables
// ─────────────────────────────────────────────────────────────────────────────

/// Multiplier used for missing or unrecognised activity levels.
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.2;

/// Map from activity level label to TDEE multiplier.
pub static ACTIVITY_MULTIPLIERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("sedentary", 1.2);
    m.insert("light", 1.375);
    m.insert("moderate", 1.55);
    m.insert("active", 1.725);
    m.insert("very_active", 1.9);
    m
});

/// Map from goal label to daily calorie offset.
pub static GOAL_CALORIE_ADJUSTMENTS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("lose", -500.0);
    m.insert("maintain", 0.0);
    m.insert("gain", 300.0);
    m
});

/// Get the TDEE multiplier for an activity label.
pub fn activity_multiplier(label: &str) -> f64 {
    *ACTIVITY_MULTIPLIERS
        .get(label)
        .unwrap_or(&DEFAULT_ACTIVITY_MULTIPLIER)
}

/// Get the calorie offset for a goal label (0 for unknown goals).
pub fn goal_adjustment(label: &str) -> f64 {
    *GOAL_CALORIE_ADJUSTMENTS.get(label).unwrap_or(&0.0)
}

// ─────────────────────────────────────────────────────────────────────────────
// Macro ratios
// ─────────────────────────────────────────────────────────────────────────────

/// Share of calories assigned to each macronutrient. Sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl MacroRatios {
    pub fn sum(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }
}

pub const LOSE_MACRO_RATIOS: MacroRatios = MacroRatios {
    protein: 0.40,
    fat: 0.30,
    carbs: 0.30,
};

pub const GAIN_MACRO_RATIOS: MacroRatios = MacroRatios {
    protein: 0.30,
    fat: 0.20,
    carbs: 0.50,
};

/// Used for maintain and any unrecognised goal.
pub const DEFAULT_MACRO_RATIOS: MacroRatios = MacroRatios {
    protein: 0.30,
    fat: 0.25,
    carbs: 0.45,
};

// ─────────────────────────────────────────────────────────────────────────────
// BMI thresholds
// ─────────────────────────────────────────────────────────────────────────────

pub const BMI_NORMAL_MIN: f64 = 18.5;
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
pub const BMI_OBESE_MIN: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Slot calorie split (informational; selection does not enforce it)
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_CALORIE_SHARE: f64 = 0.25;
pub const LUNCH_CALORIE_SHARE: f64 = 0.35;
pub const DINNER_CALORIE_SHARE: f64 = 0.40;
