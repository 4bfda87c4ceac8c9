use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::catalog::MealCatalog;
use crate::engine::energy::round_half_up;
use crate::engine::recommend::generate_recommendations;
use crate::error::{CoachError, Result};
use crate::models::{
    DailyMealPlan, GeneratedMealPlan, Macros, MealCatalogEntry, MealPlanPreferences,
    MealPlanStats, MealSlot, PlannedMeals, RawClientProfile, Recommendation, Weekday,
    WeeklyMealPlan,
};

/// Filtered options for one slot, with a record of which fallbacks fired.
#[derive(Debug, Clone)]
pub struct SlotCandidates<'a> {
    pub candidates: Vec<&'a MealCatalogEntry>,
    /// No entry carried the requested diet tag, so the unfiltered list was kept.
    pub diet_fallback: bool,
    /// Every remaining entry hit an allergy, so the diet-filtered list was kept.
    pub allergy_fallback: bool,
}

/// Narrow one slot by diet type, then by allergies.
///
/// Each stage falls back to its input when it would leave nothing, so the
/// result is empty only when `entries` is.
pub fn filter_candidates<'a>(
    entries: &'a [MealCatalogEntry],
    preferences: &MealPlanPreferences,
) -> SlotCandidates<'a> {
    let all: Vec<&MealCatalogEntry> = entries.iter().collect();

    let (by_diet, diet_fallback) = match preferences.diet_filter() {
        Some(diet) => {
            let matching: Vec<&MealCatalogEntry> =
                all.iter().copied().filter(|e| e.has_tag(diet)).collect();
            if matching.is_empty() {
                (all, true)
            } else {
                (matching, false)
            }
        }
        None => (all, false),
    };

    let (candidates, allergy_fallback) = if preferences.allergies.is_empty() {
        (by_diet, false)
    } else {
        let safe: Vec<&MealCatalogEntry> = by_diet
            .iter()
            .copied()
            .filter(|e| !e.contains_any_allergen(&preferences.allergies))
            .collect();
        if safe.is_empty() {
            (by_diet, true)
        } else {
            (safe, false)
        }
    };

    SlotCandidates {
        candidates,
        diet_fallback,
        allergy_fallback,
    }
}

/// Documented breakfast/lunch/dinner calorie split of a daily target.
///
/// Informational only: meal selection does not try to hit these numbers.
pub fn slot_calorie_targets(target_calories: u32) -> [(MealSlot, u32); 3] {
    MealSlot::ALL.map(|slot| {
        let share = round_half_up(target_calories as f64 * slot.calorie_share());
        (slot, share as u32)
    })
}

/// Recommendation and meal-plan engine over an injected meal catalog.
///
/// Holds no mutable state; share freely across threads.
#[derive(Debug, Clone, Default)]
pub struct NutritionEngine {
    catalog: MealCatalog,
}

impl NutritionEngine {
    pub fn new(catalog: MealCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MealCatalog {
        &self.catalog
    }

    /// See [`generate_recommendations`].
    pub fn recommend(&self, client: &RawClientProfile) -> Recommendation {
        generate_recommendations(client)
    }

    /// Pick one breakfast, lunch and dinner that respect the preferences.
    ///
    /// `_target_calories` is accepted for callers that pass the daily target
    /// but does not constrain selection. The choice within each slot is
    /// uniform over `rng`; pass a seeded generator for reproducible plans.
    pub fn generate_meal_plan<R: Rng + ?Sized>(
        &self,
        _target_calories: u32,
        preferences: &MealPlanPreferences,
        rng: &mut R,
    ) -> Result<GeneratedMealPlan> {
        let breakfast = self.pick(MealSlot::Breakfast, preferences, &mut *rng)?;
        let lunch = self.pick(MealSlot::Lunch, preferences, &mut *rng)?;
        let dinner = self.pick(MealSlot::Dinner, preferences, &mut *rng)?;

        let calories = breakfast
            .calories
            .saturating_add(lunch.calories)
            .saturating_add(dinner.calories);
        let macros: Macros = breakfast.macros() + lunch.macros() + dinner.macros();

        Ok(GeneratedMealPlan {
            meals: PlannedMeals {
                breakfast: breakfast.name.clone(),
                lunch: lunch.name.clone(),
                dinner: dinner.name.clone(),
            },
            stats: MealPlanStats { calories, macros },
        })
    }

    /// One independent daily plan per weekday, Monday through Sunday.
    pub fn generate_weekly_plan<R: Rng + ?Sized>(
        &self,
        target_calories: u32,
        preferences: &MealPlanPreferences,
        rng: &mut R,
    ) -> Result<WeeklyMealPlan> {
        let days = Weekday::ALL
            .into_iter()
            .map(|day| {
                self.generate_meal_plan(target_calories, preferences, &mut *rng)
                    .map(|plan| DailyMealPlan { day, plan })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(WeeklyMealPlan { days })
    }

    fn pick<R: Rng + ?Sized>(
        &self,
        slot: MealSlot,
        preferences: &MealPlanPreferences,
        rng: &mut R,
    ) -> Result<&MealCatalogEntry> {
        let filtered = filter_candidates(self.catalog.slot(slot), preferences);

        if filtered.diet_fallback {
            debug!(
                slot = slot.label(),
                diet = %preferences.diet_type,
                "no meals match diet, using full slot"
            );
        }
        if filtered.allergy_fallback {
            debug!(
                slot = slot.label(),
                allergies = ?preferences.allergies,
                "every candidate contains an allergen, ignoring allergies"
            );
        }

        filtered.candidates.choose(rng).copied().ok_or_else(|| {
            CoachError::Configuration(format!("no {} options in meal catalog", slot.label()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn prefs(diet: &str, allergies: &[&str]) -> MealPlanPreferences {
        MealPlanPreferences::new(
            Some(diet),
            allergies.iter().map(|a| a.to_string()).collect(),
        )
    }

    fn names(candidates: &SlotCandidates) -> Vec<String> {
        candidates.candidates.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_omnivore_keeps_everything() {
        let catalog = MealCatalog::builtin();
        let filtered = filter_candidates(catalog.slot(MealSlot::Lunch), &prefs("omnivore", &[]));
        assert_eq!(filtered.candidates.len(), 5);
        assert!(!filtered.diet_fallback);
        assert!(!filtered.allergy_fallback);
    }

    #[test]
    fn test_vegan_breakfast() {
        let catalog = MealCatalog::builtin();
        let filtered = filter_candidates(catalog.slot(MealSlot::Breakfast), &prefs("vegan", &[]));
        assert_eq!(
            names(&filtered),
            vec!["Oatmeal with Blueberries & Almonds", "Smoothie Bowl"]
        );
    }

    #[test]
    fn test_keto_breakfast_falls_back_to_full_slot() {
        let catalog = MealCatalog::builtin();
        let filtered = filter_candidates(catalog.slot(MealSlot::Breakfast), &prefs("keto", &[]));
        assert!(filtered.diet_fallback);
        assert_eq!(filtered.candidates.len(), 5);
    }

    #[test]
    fn test_allergy_fallback_keeps_diet_filter() {
        // The only pescatarian dinner contains fish.
        let catalog = MealCatalog::builtin();
        let filtered = filter_candidates(
            catalog.slot(MealSlot::Dinner),
            &prefs("pescatarian", &["Fish"]),
        );
        assert!(!filtered.diet_fallback);
        assert!(filtered.allergy_fallback);
        assert_eq!(names(&filtered), vec!["Baked Salmon with Asparagus"]);
    }

    #[test]
    fn test_allergies_case_insensitive() {
        let catalog = MealCatalog::builtin();
        let filtered = filter_candidates(
            catalog.slot(MealSlot::Breakfast),
            &prefs("omnivore", &["DAIRY", "Eggs"]),
        );
        assert_eq!(
            names(&filtered),
            vec!["Oatmeal with Blueberries & Almonds", "Smoothie Bowl"]
        );
    }

    #[test]
    fn test_empty_slot_yields_no_candidates() {
        let filtered = filter_candidates(&[], &prefs("vegan", &["soy"]));
        assert!(filtered.candidates.is_empty());
    }

    #[test]
    fn test_slot_calorie_targets() {
        let targets = slot_calorie_targets(2000);
        assert_eq!(
            targets,
            [
                (MealSlot::Breakfast, 500),
                (MealSlot::Lunch, 700),
                (MealSlot::Dinner, 800)
            ]
        );
    }

    #[test]
    fn test_plan_stats_sum_selected_meals() {
        let engine = NutritionEngine::default();
        let mut rng = StdRng::seed_from_u64(7);
        let plan = engine
            .generate_meal_plan(1800, &MealPlanPreferences::default(), &mut rng)
            .unwrap();

        let catalog = engine.catalog();
        let find = |slot: MealSlot, name: &str| {
            catalog
                .slot(slot)
                .iter()
                .find(|e| e.name == name)
                .cloned()
                .unwrap()
        };
        let b = find(MealSlot::Breakfast, &plan.meals.breakfast);
        let l = find(MealSlot::Lunch, &plan.meals.lunch);
        let d = find(MealSlot::Dinner, &plan.meals.dinner);

        assert_eq!(plan.stats.calories, b.calories + l.calories + d.calories);
        assert_eq!(plan.stats.macros, b.macros() + l.macros() + d.macros());
    }

    #[test]
    fn test_oversized_catalog_totals_saturate() {
        let giant = |name: &str| {
            MealCatalogEntry::new(name, 2_000_000_000, 2_000_000_000, 10, 10, &[], &[])
        };
        let catalog = MealCatalog::new(
            vec![giant("Feast A")],
            vec![giant("Feast B")],
            vec![giant("Feast C")],
        )
        .unwrap();
        let engine = NutritionEngine::new(catalog);

        let plan = engine
            .generate_meal_plan(2000, &MealPlanPreferences::default(), &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(plan.stats.calories, u32::MAX);
        assert_eq!(plan.stats.macros.protein, u32::MAX);
        assert_eq!(plan.stats.macros.fat, 30);
    }

    #[test]
    fn test_weekly_plan_has_seven_days_in_order() {
        let engine = NutritionEngine::default();
        let mut rng = StdRng::seed_from_u64(42);
        let week = engine
            .generate_weekly_plan(2000, &prefs("vegetarian", &[]), &mut rng)
            .unwrap();

        let days: Vec<Weekday> = week.days.iter().map(|d| d.day).collect();
        assert_eq!(days, Weekday::ALL.to_vec());
        assert!(week.day(Weekday::Sunday).is_some());
    }
}
