use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use crate::error::Result;
use crate::models::RawClientProfile;

/// NutritionCoach — calorie and macro targets plus filtered meal plans for coaching clients.
#[derive(Parser, Debug)]
#[command(name = "nutrition_coach")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Replacement meal catalog (JSON, or CSV by extension).
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Print JSON instead of formatted text.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute BMR, TDEE, calorie target and macros for a client.
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Compute targets and generate a meal plan.
    MealPlan {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        plan: PlanArgs,
    },

    /// Answer the intake questionnaire interactively.
    Intake {
        /// Seed for reproducible meal selection.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the active meal catalog.
    Catalog {
        /// Write the catalog to this path (JSON, or CSV by extension).
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Intake { seed: None }
    }
}

/// Client profile inputs. Values are kept as text so the engine's lenient
/// parsing and defaulting apply.
#[derive(Args, Debug, Default, Clone)]
pub struct ProfileArgs {
    /// JSON client record; individual flags override its fields.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Weight in kg.
    #[arg(long)]
    pub weight: Option<String>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<String>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<String>,

    /// female, male or other.
    #[arg(long)]
    pub gender: Option<String>,

    /// sedentary, light, moderate, active or very_active.
    #[arg(long)]
    pub activity: Option<String>,

    /// lose, maintain or gain.
    #[arg(long)]
    pub goal: Option<String>,
}

impl ProfileArgs {
    /// Merge the optional profile file with any flags given on the command line.
    pub fn to_raw(&self) -> Result<RawClientProfile> {
        let mut raw = match &self.profile {
            Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
            None => RawClientProfile::default(),
        };

        let text = |value: &Option<String>| value.clone().map(Value::String);

        if self.weight.is_some() {
            raw.weight = text(&self.weight);
        }
        if self.height.is_some() {
            raw.height = text(&self.height);
        }
        if self.age.is_some() {
            raw.age = text(&self.age);
        }
        if self.gender.is_some() {
            raw.gender = text(&self.gender);
        }
        if self.activity.is_some() {
            raw.activity = text(&self.activity);
        }
        if self.goal.is_some() {
            raw.goal = text(&self.goal);
        }

        Ok(raw)
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct PlanArgs {
    /// Diet type, e.g. vegan, vegetarian, pescatarian, keto.
    #[arg(long)]
    pub diet: Option<String>,

    /// Allergy to avoid; repeat for several.
    #[arg(long = "allergy")]
    pub allergies: Vec<String>,

    /// Seed for reproducible meal selection.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Generate a full week instead of a single day.
    #[arg(long)]
    pub week: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_override_profile_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"weight": 90, "goal": "gain", "activity": "light"}"#)
            .unwrap();

        let args = ProfileArgs {
            profile: Some(file.path().to_path_buf()),
            goal: Some("maintain".to_string()),
            ..Default::default()
        };

        let profile = args.to_raw().unwrap().normalize();
        assert_eq!(profile.weight, 90.0);
        assert_eq!(profile.goal.label(), "maintain");
        assert_eq!(profile.activity_level.label(), "light");
    }

    #[test]
    fn test_parse_meal_plan_command() {
        let cli = Cli::parse_from([
            "nutrition_coach",
            "meal-plan",
            "--weight",
            "65",
            "--diet",
            "vegan",
            "--allergy",
            "soy",
            "--allergy",
            "tree nuts",
            "--seed",
            "9",
        ]);

        match cli.command {
            Some(Command::MealPlan { profile, plan }) => {
                assert_eq!(profile.weight.as_deref(), Some("65"));
                assert_eq!(plan.diet.as_deref(), Some("vegan"));
                assert_eq!(plan.allergies, vec!["soy", "tree nuts"]);
                assert_eq!(plan.seed, Some(9));
                assert!(!plan.week);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
