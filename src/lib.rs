pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;

pub use catalog::MealCatalog;
pub use engine::{generate_recommendations, NutritionEngine};
pub use error::{CoachError, Result};
pub use models::{GeneratedMealPlan, MealPlanPreferences, RawClientProfile, Recommendation};
