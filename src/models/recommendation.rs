use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::engine::constants::{
    BMI_NORMAL_MIN, BMI_OBESE_MIN, BMI_OVERWEIGHT_MIN, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT,
    KCAL_PER_GRAM_PROTEIN,
};
use crate::models::profile::Goal;

/// Macronutrient amounts in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: u32,
    pub fat: u32,
    pub carbs: u32,
}

impl Macros {
    /// Energy content of these grams (4 kcal/g protein and carbs, 9 kcal/g fat).
    pub fn calories(&self) -> u32 {
        (self.protein as f64 * KCAL_PER_GRAM_PROTEIN
            + self.fat as f64 * KCAL_PER_GRAM_FAT
            + self.carbs as f64 * KCAL_PER_GRAM_CARBS) as u32
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        Macros {
            protein: self.protein.saturating_add(other.protein),
            fat: self.fat.saturating_add(other.fat),
            carbs: self.carbs.saturating_add(other.carbs),
        }
    }
}

/// Body-mass-index classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < BMI_NORMAL_MIN {
            BmiCategory::Underweight
        } else if bmi < BMI_OVERWEIGHT_MIN {
            BmiCategory::Normal
        } else if bmi < BMI_OBESE_MIN {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        f.write_str(name)
    }
}

/// Daily energy and macro targets derived from a client profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: u32,
    pub macros: Macros,
    pub goal: Goal,
    /// One decimal place.
    pub bmi: f64,
    pub bmi_category: BmiCategory,
}

impl Recommendation {
    /// Difference between the macros' reconverted energy and the calorie target.
    ///
    /// Non-zero because each macro is rounded to whole grams independently.
    pub fn macro_drift(&self) -> i64 {
        self.macros.calories() as i64 - self.target_calories as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_calories() {
        let macros = Macros {
            protein: 150,
            fat: 50,
            carbs: 150,
        };
        assert_eq!(macros.calories(), 150 * 4 + 50 * 9 + 150 * 4);
    }

    #[test]
    fn test_macro_add() {
        let a = Macros {
            protein: 12,
            fat: 10,
            carbs: 55,
        };
        let b = Macros {
            protein: 40,
            fat: 20,
            carbs: 15,
        };
        assert_eq!(
            a + b,
            Macros {
                protein: 52,
                fat: 30,
                carbs: 70
            }
        );
    }

    #[test]
    fn test_macro_add_saturates() {
        let huge = Macros {
            protein: u32::MAX - 1,
            fat: 2_000_000_000,
            carbs: 1,
        };
        let sum = huge + huge;
        assert_eq!(sum.protein, u32::MAX);
        assert_eq!(sum.fat, u32::MAX);
        assert_eq!(sum.carbs, 2);
    }

    #[test]
    fn test_bmi_classification_boundaries() {
        assert_eq!(BmiCategory::classify(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    }
}
