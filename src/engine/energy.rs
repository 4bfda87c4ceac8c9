use crate::engine::constants::*;
use crate::models::{ActivityLevel, Gender, Goal};

/// Round half up, so 1267.5 becomes 1268 and -0.5 becomes 0.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Basal metabolic rate via Mifflin-St Jeor. Not rounded.
///
/// `bmr = 10*weight + 6.25*height - 5*age + s`, where `s` is -161 for
/// `Female` and +5 for everything else.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let sex_constant = match gender {
        Gender::Female => BMR_FEMALE_CONSTANT,
        Gender::Male | Gender::Other => BMR_MALE_CONSTANT,
    };

    BMR_WEIGHT_FACTOR * weight_kg + BMR_HEIGHT_FACTOR * height_cm
        - BMR_AGE_FACTOR * age_years as f64
        + sex_constant
}

/// Total daily energy expenditure: BMR scaled by activity.
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Daily calorie target: TDEE plus the goal offset, rounded and floored at zero.
pub fn calculate_target_calories(tdee: f64, goal: &Goal) -> u32 {
    round_half_up(tdee + goal.calorie_adjustment()).max(0.0) as u32
}

/// Body mass index from kilograms and centimetres.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    if height_m <= 0.0 {
        return 0.0;
    }
    weight_kg / (height_m * height_m)
}
