use crate::engine::constants::*;
use crate::engine::energy::round_half_up;
use crate::models::{Goal, Macros};

/// Calorie split for a goal.
pub fn macro_ratios(goal: &Goal) -> MacroRatios {
    match goal {
        Goal::Lose => LOSE_MACRO_RATIOS,
        Goal::Gain => GAIN_MACRO_RATIOS,
        Goal::Maintain | Goal::Other(_) => DEFAULT_MACRO_RATIOS,
    }
}

/// Convert a calorie target into gram targets.
///
/// Each macro is rounded on its own, so the grams reconverted to kcal drift
/// a few calories from `calories`.
pub fn calculate_macros(calories: u32, goal: &Goal) -> Macros {
    let ratios = macro_ratios(goal);
    Macros {
        protein: grams(calories, ratios.protein, KCAL_PER_GRAM_PROTEIN),
        fat: grams(calories, ratios.fat, KCAL_PER_GRAM_FAT),
        carbs: grams(calories, ratios.carbs, KCAL_PER_GRAM_CARBS),
    }
}

fn grams(calories: u32, ratio: f64, kcal_per_gram: f64) -> u32 {
    round_half_up(calories as f64 * ratio / kcal_per_gram).max(0.0) as u32
}
