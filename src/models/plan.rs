use serde::{Deserialize, Serialize};

use crate::models::recommendation::Macros;

/// Names of the dishes chosen for each slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedMeals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

/// Aggregate nutrition of a daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanStats {
    pub calories: u32,
    pub macros: Macros,
}

/// One breakfast, lunch and dinner plus their combined nutrition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMealPlan {
    pub meals: PlannedMeals,
    pub stats: MealPlanStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMealPlan {
    pub day: Weekday,
    pub plan: GeneratedMealPlan,
}

/// Seven independent daily plans, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyMealPlan {
    pub days: Vec<DailyMealPlan>,
}

impl WeeklyMealPlan {
    pub fn day(&self, day: Weekday) -> Option<&GeneratedMealPlan> {
        self.days.iter().find(|d| d.day == day).map(|d| &d.plan)
    }
}
