use rand::SeedableRng;
use rand::rngs::StdRng;

use nutrition_coach_rs::engine::{filter_candidates, NutritionEngine};
use nutrition_coach_rs::models::{MealCatalogEntry, MealPlanPreferences, MealSlot};
use nutrition_coach_rs::{CoachError, MealCatalog};

fn prefs(diet: &str, allergies: &[&str]) -> MealPlanPreferences {
    MealPlanPreferences::new(
        Some(diet),
        allergies.iter().map(|a| a.to_string()).collect(),
    )
}

fn planned<'a>(engine: &'a NutritionEngine, slot: MealSlot, name: &str) -> &'a MealCatalogEntry {
    engine
        .catalog()
        .slot(slot)
        .iter()
        .find(|e| e.name == name)
        .expect("planned meal must come from the catalog")
}

fn plan_entries<'a>(
    engine: &'a NutritionEngine,
    plan: &nutrition_coach_rs::GeneratedMealPlan,
) -> [(MealSlot, &'a MealCatalogEntry); 3] {
    [
        (MealSlot::Breakfast, planned(engine, MealSlot::Breakfast, &plan.meals.breakfast)),
        (MealSlot::Lunch, planned(engine, MealSlot::Lunch, &plan.meals.lunch)),
        (MealSlot::Dinner, planned(engine, MealSlot::Dinner, &plan.meals.dinner)),
    ]
}

/// Catalog where no lunch is vegan and every dinner contains dairy.
fn sparse_catalog() -> MealCatalog {
    MealCatalog::new(
        vec![
            MealCatalogEntry::new("Tofu Scramble", 320, 22, 18, 12, &["vegan"], &["soy"]),
            MealCatalogEntry::new("Cheese Toast", 380, 16, 18, 36, &["vegetarian"], &["dairy"]),
        ],
        vec![
            MealCatalogEntry::new("Ham Sandwich", 450, 28, 16, 45, &[], &["gluten"]),
            MealCatalogEntry::new("Caprese Salad", 350, 18, 24, 10, &["vegetarian"], &["dairy"]),
        ],
        vec![
            MealCatalogEntry::new("Lasagne", 650, 35, 30, 60, &[], &["dairy", "gluten"]),
            MealCatalogEntry::new("Paneer Curry", 550, 25, 30, 40, &["vegetarian"], &["dairy"]),
        ],
    )
    .unwrap()
}

#[test]
fn test_vegan_plans_respect_tag_or_fallback() {
    for engine in [NutritionEngine::default(), NutritionEngine::new(sparse_catalog())] {
        let preferences = prefs("vegan", &[]);

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = engine.generate_meal_plan(2000, &preferences, &mut rng).unwrap();

            for (slot, entry) in plan_entries(&engine, &plan) {
                let filtered = filter_candidates(engine.catalog().slot(slot), &preferences);
                assert!(
                    entry.has_tag("vegan") || filtered.diet_fallback,
                    "{} is not vegan and no fallback fired for {:?}",
                    entry.name,
                    slot
                );
            }
        }
    }
}

#[test]
fn test_dairy_allergy_respected_or_fallback() {
    for engine in [NutritionEngine::default(), NutritionEngine::new(sparse_catalog())] {
        let preferences = prefs("omnivore", &["dairy"]);

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = engine.generate_meal_plan(1800, &preferences, &mut rng).unwrap();

            for (slot, entry) in plan_entries(&engine, &plan) {
                let all_contain_dairy = engine
                    .catalog()
                    .slot(slot)
                    .iter()
                    .all(|e| e.allergens.contains("dairy"));
                assert!(
                    !entry.allergens.contains("dairy") || all_contain_dairy,
                    "{} contains dairy although a safe {:?} option exists",
                    entry.name,
                    slot
                );
            }
        }
    }
}

#[test]
fn test_sparse_catalog_fallbacks_fire() {
    let catalog = sparse_catalog();

    let vegan_lunch = filter_candidates(catalog.slot(MealSlot::Lunch), &prefs("vegan", &[]));
    assert!(vegan_lunch.diet_fallback);
    assert_eq!(vegan_lunch.candidates.len(), 2);

    let dairy_free_dinner =
        filter_candidates(catalog.slot(MealSlot::Dinner), &prefs("omnivore", &["dairy"]));
    assert!(dairy_free_dinner.allergy_fallback);
    assert_eq!(dairy_free_dinner.candidates.len(), 2);

    // Allergy fallback keeps the diet-filtered set, not the whole slot.
    let vegetarian_dinner = filter_candidates(
        catalog.slot(MealSlot::Dinner),
        &prefs("vegetarian", &["dairy"]),
    );
    assert!(vegetarian_dinner.allergy_fallback);
    let names: Vec<&str> = vegetarian_dinner
        .candidates
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["Paneer Curry"]);
}

#[test]
fn test_seeded_generation_is_repeatable() {
    let engine = NutritionEngine::default();
    let preferences = prefs("vegetarian", &["gluten"]);

    for seed in [1, 17, 99, 4242] {
        let first = engine
            .generate_meal_plan(2000, &preferences, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let second = engine
            .generate_meal_plan(2000, &preferences, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_selection_covers_all_candidates() {
    let engine = NutritionEngine::default();
    let preferences = MealPlanPreferences::default();
    let mut rng = StdRng::seed_from_u64(2024);

    let mut seen = std::collections::HashSet::new();
    for _ in 0..300 {
        let plan = engine.generate_meal_plan(2000, &preferences, &mut rng).unwrap();
        seen.insert(plan.meals.breakfast);
    }

    assert_eq!(seen.len(), engine.catalog().slot(MealSlot::Breakfast).len());
}

#[test]
fn test_target_calories_does_not_change_selection() {
    let engine = NutritionEngine::default();
    let preferences = MealPlanPreferences::default();

    let low = engine
        .generate_meal_plan(1200, &preferences, &mut StdRng::seed_from_u64(5))
        .unwrap();
    let high = engine
        .generate_meal_plan(3500, &preferences, &mut StdRng::seed_from_u64(5))
        .unwrap();
    assert_eq!(low, high);
}

#[test]
fn test_weekly_plan_each_day_respects_preferences() {
    let engine = NutritionEngine::default();
    let preferences = prefs("vegan", &["soy", "tree nuts"]);
    let mut rng = StdRng::seed_from_u64(11);

    let week = engine.generate_weekly_plan(1900, &preferences, &mut rng).unwrap();
    assert_eq!(week.days.len(), 7);

    for day in &week.days {
        // The only vegan breakfast without tree nuts.
        assert_eq!(day.plan.meals.breakfast, "Smoothie Bowl");
        assert!(
            ["Quinoa & Black Bean Bowl", "Lentil Soup with Bread"]
                .contains(&day.plan.meals.lunch.as_str())
        );
        // Every vegan dinner has soy or tree nuts, so dinner falls back to the vegan set.
        for (_, entry) in plan_entries(&engine, &day.plan) {
            assert!(entry.has_tag("vegan"));
        }
    }
}

#[test]
fn test_empty_catalog_slot_is_configuration_error() {
    let meal = MealCatalogEntry::new("Porridge", 300, 10, 6, 50, &[], &[]);
    let result = MealCatalog::new(vec![meal.clone()], vec![meal], vec![]);
    assert!(matches!(result, Err(CoachError::Configuration(_))));
}

#[test]
fn test_plan_json_shape() {
    let engine = NutritionEngine::default();
    let plan = engine
        .generate_meal_plan(2000, &MealPlanPreferences::default(), &mut StdRng::seed_from_u64(3))
        .unwrap();

    let json = serde_json::to_value(&plan).unwrap();
    assert!(json["meals"]["breakfast"].is_string());
    assert!(json["meals"]["lunch"].is_string());
    assert!(json["meals"]["dinner"].is_string());
    assert!(json["stats"]["calories"].is_u64());
    assert!(json["stats"]["macros"]["protein"].is_u64());
}
