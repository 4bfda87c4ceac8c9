pub mod prompts;
pub mod render;

pub use prompts::{closest_label, collect_intake, prompt_yes_no};
pub use render::{display_catalog, display_meal_plan, display_recommendation, display_weekly_plan};
