use crate::catalog::MealCatalog;
use crate::engine::slot_calorie_targets;
use crate::models::{GeneratedMealPlan, MealSlot, Recommendation, WeeklyMealPlan};

/// Display daily targets.
pub fn display_recommendation(rec: &Recommendation) {
    println!();
    println!("=== Daily Targets ===");
    println!();
    println!("Goal:            {}", rec.goal.label());
    println!("BMI:             {:.1} ({})", rec.bmi, rec.bmi_category);
    println!("BMR:             {} kcal", rec.bmr);
    println!("TDEE:            {} kcal", rec.tdee);
    println!("Target calories: {} kcal", rec.target_calories);
    println!(
        "Macros:          Protein {}g | Fat {}g | Carbs {}g",
        rec.macros.protein, rec.macros.fat, rec.macros.carbs
    );
    println!();
}

fn planned_name(plan: &GeneratedMealPlan, slot: MealSlot) -> &str {
    match slot {
        MealSlot::Breakfast => &plan.meals.breakfast,
        MealSlot::Lunch => &plan.meals.lunch,
        MealSlot::Dinner => &plan.meals.dinner,
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display a daily plan next to the intended per-slot calorie split.
pub fn display_meal_plan(plan: &GeneratedMealPlan, target_calories: u32) {
    println!();
    println!("=== Meal Plan ===");
    println!();

    let width = MealSlot::ALL
        .iter()
        .map(|slot| planned_name(plan, *slot).len())
        .max()
        .unwrap_or(10);

    for (slot, slot_target) in slot_calorie_targets(target_calories) {
        println!(
            "{:<10} {:<width$}  (aim ~{} kcal)",
            capitalize(slot.label()),
            planned_name(plan, slot),
            slot_target,
            width = width
        );
    }

    print_stats(plan, target_calories);
}

fn print_stats(plan: &GeneratedMealPlan, target_calories: u32) {
    let diff = plan.stats.calories as i64 - target_calories as i64;
    let sign = if diff >= 0 { "+" } else { "" };

    println!();
    println!("--- Summary ---");
    println!(
        "Total calories: {} ({}{} vs target)",
        plan.stats.calories, sign, diff
    );
    println!(
        "Protein {}g | Fat {}g | Carbs {}g",
        plan.stats.macros.protein, plan.stats.macros.fat, plan.stats.macros.carbs
    );
    println!();
}

/// Display a week of plans, one line per day.
pub fn display_weekly_plan(week: &WeeklyMealPlan, target_calories: u32) {
    println!();
    println!("=== Weekly Meal Plan ({} kcal/day target) ===", target_calories);
    println!();

    for day in &week.days {
        println!(
            "{:<10} B: {} | L: {} | D: {}  [{} kcal]",
            capitalize(day.day.label()),
            day.plan.meals.breakfast,
            day.plan.meals.lunch,
            day.plan.meals.dinner,
            day.plan.stats.calories
        );
    }

    println!();
}

/// Display every catalog entry grouped by slot.
pub fn display_catalog(catalog: &MealCatalog) {
    for slot in MealSlot::ALL {
        let entries = catalog.slot(slot);
        println!();
        println!("=== {} ({} items) ===", capitalize(slot.label()), entries.len());
        println!();

        for entry in entries {
            let tags = entry.diet_tags.iter().cloned().collect::<Vec<_>>().join(", ");
            let allergens = entry.allergens.iter().cloned().collect::<Vec<_>>().join(", ");
            println!(
                "  {} - {} cal, P:{} F:{} C:{}  tags: [{}]  allergens: [{}]",
                entry.name, entry.calories, entry.protein, entry.fat, entry.carbs, tags, allergens
            );
        }
    }

    println!();
}
