use tracing::debug;

use crate::engine::energy::{
    calculate_bmi, calculate_bmr, calculate_target_calories, calculate_tdee, round_half_up,
};
use crate::engine::macros::calculate_macros;
use crate::models::{BmiCategory, ClientProfile, RawClientProfile, Recommendation};

/// Full recommendation for a raw client record, defaulting anything missing.
///
/// Pure and deterministic; never fails.
pub fn generate_recommendations(client: &RawClientProfile) -> Recommendation {
    recommend_for_profile(&client.normalize())
}

/// Full recommendation for an already-normalized profile.
pub fn recommend_for_profile(profile: &ClientProfile) -> Recommendation {
    let bmr = calculate_bmr(profile.weight, profile.height, profile.age, profile.gender);
    let tdee = calculate_tdee(bmr, profile.activity_level);
    let target_calories = calculate_target_calories(tdee, &profile.goal);
    let macros = calculate_macros(target_calories, &profile.goal);

    let raw_bmi = calculate_bmi(profile.weight, profile.height);
    let bmi = round_half_up(raw_bmi * 10.0) / 10.0;

    debug!(
        bmr,
        tdee,
        target_calories,
        goal = profile.goal.label(),
        "computed recommendation"
    );

    Recommendation {
        bmr: round_half_up(bmr) as i64,
        tdee: round_half_up(tdee) as i64,
        target_calories,
        macros,
        goal: profile.goal.clone(),
        bmi,
        bmi_category: BmiCategory::classify(raw_bmi),
    }
}
