pub mod meal;
pub mod plan;
pub mod profile;
pub mod recommendation;

pub use meal::{MealCatalogEntry, MealPlanPreferences, MealSlot};
pub use plan::{DailyMealPlan, GeneratedMealPlan, MealPlanStats, PlannedMeals, Weekday, WeeklyMealPlan};
pub use profile::{ActivityLevel, ClientProfile, Gender, Goal, RawClientProfile};
pub use recommendation::{BmiCategory, Macros, Recommendation};
