pub mod constants;
pub mod energy;
pub mod macros;
pub mod meal_plan;
pub mod recommend;

pub use constants::*;
pub use energy::{
    calculate_bmi, calculate_bmr, calculate_target_calories, calculate_tdee, round_half_up,
};
pub use macros::{calculate_macros, macro_ratios};
pub use meal_plan::{filter_candidates, slot_calorie_targets, NutritionEngine, SlotCandidates};
pub use recommend::{generate_recommendations, recommend_for_profile};
