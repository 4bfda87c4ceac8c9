use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::engine::constants::{
    activity_multiplier, goal_adjustment, DEFAULT_AGE_YEARS, DEFAULT_HEIGHT_CM, DEFAULT_WEIGHT_KG,
};
use crate::models::meal::{parse_allergy_list, MealPlanPreferences};

/// Biological sex as captured by the intake form.
///
/// Only `Female` selects the female BMR constant; `Male` and `Other` both
/// use the male constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    #[default]
    Female,
    Other,
}

impl Gender {
    /// Exact-match parse: anything that is not literally "female" or "male" is `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "female" => Gender::Female,
            "male" => Gender::Male,
            _ => Gender::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// Weekly activity level used to scale BMR into TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Parse a known label, `None` for anything else.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }

    /// Parse a label, falling back to `Sedentary` for unknown input.
    pub fn from_label(label: &str) -> Self {
        Self::parse(label).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// TDEE multiplier for this level.
    pub fn multiplier(&self) -> f64 {
        activity_multiplier(self.label())
    }
}

/// Client goal. Unrecognised goals are kept verbatim so they can be echoed
/// back, and behave like `Maintain` everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    #[default]
    Lose,
    Maintain,
    Gain,
    Other(String),
}

impl Goal {
    pub fn from_label(label: &str) -> Self {
        match label {
            "lose" => Goal::Lose,
            "maintain" => Goal::Maintain,
            "gain" => Goal::Gain,
            other => Goal::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
            Goal::Other(label) => label,
        }
    }

    /// Daily calorie offset applied on top of TDEE.
    pub fn calorie_adjustment(&self) -> f64 {
        goal_adjustment(self.label())
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Goal::Other(_))
    }
}

impl From<String> for Goal {
    fn from(label: String) -> Self {
        Goal::from_label(&label)
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.label().to_string()
    }
}

/// A fully-populated client profile; every field has a usable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    /// Body weight in kilograms.
    pub weight: f64,
    /// Height in centimetres.
    pub height: f64,
    /// Age in whole years.
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self {
            weight: DEFAULT_WEIGHT_KG,
            height: DEFAULT_HEIGHT_CM,
            age: DEFAULT_AGE_YEARS,
            gender: Gender::default(),
            activity_level: ActivityLevel::default(),
            goal: Goal::default(),
        }
    }
}

/// Loosely-typed profile as it arrives from a stored client record or intake
/// form. Any field may be missing, null, a number, or a string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawClientProfile {
    #[serde(default)]
    pub weight: Option<Value>,

    #[serde(default)]
    pub height: Option<Value>,

    #[serde(default)]
    pub age: Option<Value>,

    #[serde(default)]
    pub gender: Option<Value>,

    #[serde(default, alias = "activityLevel", alias = "activity_level")]
    pub activity: Option<Value>,

    #[serde(default)]
    pub goal: Option<Value>,

    /// Only string values are used; anything else reads as omnivore.
    #[serde(default, rename = "dietType", alias = "diet_type")]
    pub diet_type: Option<Value>,

    /// Either a list of allergy names or free text ("peanuts, dairy").
    #[serde(default)]
    pub allergies: Option<Value>,
}

impl RawClientProfile {
    /// Apply defaults to every missing or unusable field.
    ///
    /// Never fails: a UI must always be able to render a recommendation.
    pub fn normalize(&self) -> ClientProfile {
        let defaults = ClientProfile::default();

        let weight = nonzero_number(self.weight.as_ref()).unwrap_or_else(|| {
            debug!(default = defaults.weight, "weight missing, using default");
            defaults.weight
        });
        let height = nonzero_number(self.height.as_ref()).unwrap_or_else(|| {
            debug!(default = defaults.height, "height missing, using default");
            defaults.height
        });
        let age = nonzero_number(self.age.as_ref())
            .filter(|&years| years >= 1.0)
            .map(|years| years.trunc() as u32)
            .unwrap_or_else(|| {
                debug!(default = defaults.age, "age missing, using default");
                defaults.age
            });

        let gender = match gender_label(self.gender.as_ref()) {
            Some(label) => Gender::from_label(&label),
            None => {
                debug!("gender missing, using default");
                defaults.gender
            }
        };

        let activity_level = match text(self.activity.as_ref()) {
            Some(label) => ActivityLevel::parse(&label).unwrap_or_else(|| {
                debug!(label = %label, "unknown activity level, using sedentary");
                ActivityLevel::Sedentary
            }),
            None => defaults.activity_level,
        };

        let goal = match text(self.goal.as_ref()) {
            Some(label) => Goal::from_label(&label),
            None => {
                debug!("goal missing, using default");
                defaults.goal
            }
        };

        ClientProfile {
            weight,
            height,
            age,
            gender,
            activity_level,
            goal,
        }
    }

    /// Meal-plan preferences captured alongside the intake.
    pub fn preferences(&self) -> MealPlanPreferences {
        let allergies = match &self.allergies {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str())
                .flat_map(parse_allergy_list)
                .collect(),
            Some(Value::String(free_text)) => parse_allergy_list(free_text),
            _ => Vec::new(),
        };

        let diet_type = self.diet_type.as_ref().and_then(Value::as_str);
        MealPlanPreferences::new(diet_type, allergies)
    }
}

/// Finite, non-zero numeric value. Negative numbers are kept as given.
fn nonzero_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_leading_number(s),
        _ => None,
    }?;

    (number.is_finite() && number != 0.0).then_some(number)
}

/// `null`, `false`, `0` and `""` carry no value.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Gender label, untrimmed so the exact-match rule sees what was stored.
fn gender_label(value: Option<&Value>) -> Option<String> {
    let value = value.filter(|v| !is_blank(v))?;
    Some(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Non-empty label, trimmed.
fn text(value: Option<&Value>) -> Option<String> {
    let value = value.filter(|v| !is_blank(v))?;
    let label = match value {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };

    (!label.is_empty()).then_some(label)
}

/// Parse the longest numeric prefix of a string, so "72kg" reads as 72.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
