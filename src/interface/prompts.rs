use dialoguer::{Confirm, Input, Select};
use serde_json::Value;
use strsim::jaro_winkler;

use crate::catalog::MealCatalog;
use crate::engine::constants::OMNIVORE;
use crate::error::Result;
use crate::models::{ActivityLevel, RawClientProfile};

/// Minimum Jaro-Winkler similarity before suggesting a correction.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Best fuzzy match for `input` among `options`, if any is close enough.
///
/// Returns `None` for exact matches (nothing to suggest).
pub fn closest_label<'a>(input: &str, options: &[&'a str]) -> Option<&'a str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() || options.iter().any(|o| o.to_lowercase() == input) {
        return None;
    }

    options
        .iter()
        .map(|o| (*o, jaro_winkler(&o.to_lowercase(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(o, _)| o)
}

/// Free-text prompt that may be left blank.
fn prompt_optional(prompt: &str) -> Result<Option<Value>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    Ok((!input.is_empty()).then(|| Value::String(input.to_string())))
}

/// Text prompt that offers a "did you mean" correction for near-miss answers.
fn prompt_label(prompt: &str, default: &str, options: &[&str]) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(format!("{} ({})", prompt, options.join(", ")))
        .default(default.to_string())
        .interact_text()?;

    let input = input.trim().to_string();

    if let Some(suggestion) = closest_label(&input, options) {
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", suggestion))
            .default(true)
            .interact()?;
        if confirm {
            return Ok(suggestion.to_string());
        }
    }

    Ok(input)
}

/// Run the intake questionnaire.
///
/// Blank answers are left unset so the engine applies its defaults.
pub fn collect_intake(catalog: &MealCatalog) -> Result<RawClientProfile> {
    let weight = prompt_optional("Weight in kg (blank for default)")?;
    let height = prompt_optional("Height in cm (blank for default)")?;
    let age = prompt_optional("Age in years (blank for default)")?;

    let genders = ["female", "male", "other"];
    let gender = Select::new()
        .with_prompt("Gender")
        .items(&genders[..])
        .default(0)
        .interact()?;

    let activity_options: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let activity = prompt_label("Activity level", "sedentary", &activity_options)?;

    let goals = ["lose", "maintain", "gain"];
    let goal = Select::new()
        .with_prompt("Goal")
        .items(&goals[..])
        .default(0)
        .interact()?;

    let mut diets: Vec<&str> = vec![OMNIVORE];
    for (_, entry) in catalog.entries() {
        for tag in &entry.diet_tags {
            if !diets.contains(&tag.as_str()) {
                diets.push(tag.as_str());
            }
        }
    }
    let diet_type = prompt_label("Diet type", OMNIVORE, &diets)?;

    let allergies: String = Input::new()
        .with_prompt("Allergies, comma-separated (blank for none)")
        .allow_empty(true)
        .interact_text()?;

    Ok(RawClientProfile {
        weight,
        height,
        age,
        gender: Some(Value::String(genders[gender].to_string())),
        activity: Some(Value::String(activity)),
        goal: Some(Value::String(goals[goal].to_string())),
        diet_type: Some(Value::String(diet_type)),
        allergies: Some(Value::String(allergies)),
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
