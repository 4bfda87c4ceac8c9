use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use nutrition_coach_rs::catalog::{load_catalog, save_catalog, MealCatalog};
use nutrition_coach_rs::cli::{Cli, Command, PlanArgs, ProfileArgs};
use nutrition_coach_rs::error::Result;
use nutrition_coach_rs::interface::{
    collect_intake, display_catalog, display_meal_plan, display_recommendation,
    display_weekly_plan, prompt_yes_no,
};
use nutrition_coach_rs::models::{MealPlanPreferences, RawClientProfile, Recommendation};
use nutrition_coach_rs::NutritionEngine;

fn main() {
    // Logs go to stderr so rendered output and --json stay clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nutrition_coach_rs=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => MealCatalog::builtin(),
    };
    let engine = NutritionEngine::new(catalog);

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Recommend { profile } => cmd_recommend(&engine, &profile, cli.json),
        Command::MealPlan { profile, plan } => cmd_meal_plan(&engine, &profile, &plan, cli.json),
        Command::Intake { seed } => cmd_intake(&engine, seed, cli.json),
        Command::Catalog { export } => match export {
            Some(path) => {
                save_catalog(&path, engine.catalog())?;
                println!("Catalog written to {}", path.display());
                Ok(())
            }
            None if cli.json => print_json(engine.catalog()),
            None => {
                display_catalog(engine.catalog());
                Ok(())
            }
        },
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Print targets for a client.
fn cmd_recommend(engine: &NutritionEngine, profile: &ProfileArgs, json: bool) -> Result<()> {
    let raw = profile.to_raw()?;
    let rec = engine.recommend(&raw);

    if json {
        print_json(&rec)
    } else {
        display_recommendation(&rec);
        Ok(())
    }
}

/// Print targets plus a daily or weekly plan.
fn cmd_meal_plan(
    engine: &NutritionEngine,
    profile: &ProfileArgs,
    plan: &PlanArgs,
    json: bool,
) -> Result<()> {
    let raw = profile.to_raw()?;
    let rec = engine.recommend(&raw);

    let stored = raw.preferences();
    let diet = plan.diet.as_deref().or(Some(stored.diet_type.as_str()));
    let allergies = if plan.allergies.is_empty() {
        stored.allergies.clone()
    } else {
        plan.allergies.clone()
    };
    let preferences = MealPlanPreferences::new(diet, allergies);

    print_plan(engine, &rec, &preferences, plan.seed, plan.week, json)
}

/// Interactive intake, then targets and a plan.
fn cmd_intake(engine: &NutritionEngine, seed: Option<u64>, json: bool) -> Result<()> {
    let raw: RawClientProfile = collect_intake(engine.catalog())?;
    let rec = engine.recommend(&raw);

    if !prompt_yes_no("Generate a meal plan?", true)? {
        if json {
            return print_json(&rec);
        }
        display_recommendation(&rec);
        return Ok(());
    }

    let week = prompt_yes_no("Plan a full week?", false)?;
    print_plan(engine, &rec, &raw.preferences(), seed, week, json)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanOutput<'a, P: Serialize> {
    recommendation: &'a Recommendation,
    preferences: &'a MealPlanPreferences,
    meal_plan: P,
}

fn print_plan(
    engine: &NutritionEngine,
    rec: &Recommendation,
    preferences: &MealPlanPreferences,
    seed: Option<u64>,
    week: bool,
    json: bool,
) -> Result<()> {
    let mut rng = rng_for(seed);

    if week {
        let weekly = engine.generate_weekly_plan(rec.target_calories, preferences, &mut rng)?;
        if json {
            return print_json(&PlanOutput {
                recommendation: rec,
                preferences,
                meal_plan: weekly,
            });
        }
        display_recommendation(rec);
        display_weekly_plan(&weekly, rec.target_calories);
    } else {
        let daily = engine.generate_meal_plan(rec.target_calories, preferences, &mut rng)?;
        if json {
            return print_json(&PlanOutput {
                recommendation: rec,
                preferences,
                meal_plan: daily,
            });
        }
        display_recommendation(rec);
        display_meal_plan(&daily, rec.target_calories);
    }

    Ok(())
}
