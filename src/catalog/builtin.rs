use super::MealCatalog;
use crate::models::MealCatalogEntry as Meal;

pub(super) fn builtin_catalog() -> MealCatalog {
    MealCatalog {
        breakfast: vec![
            Meal::new(
                "Oatmeal with Blueberries & Almonds",
                350,
                12,
                10,
                55,
                &["vegetarian", "vegan"],
                &["tree nuts"],
            ),
            Meal::new("Vegetable Omelette", 300, 20, 18, 5, &["vegetarian"], &["eggs", "dairy"]),
            Meal::new("Greek Yogurt Parfait", 280, 22, 6, 35, &["vegetarian"], &["dairy"]),
            Meal::new(
                "Avocado Toast with Egg",
                400,
                15,
                20,
                30,
                &["vegetarian"],
                &["eggs", "gluten"],
            ),
            Meal::new("Smoothie Bowl", 320, 10, 8, 50, &["vegetarian", "vegan"], &[]),
        ],
        lunch: vec![
            Meal::new("Grilled Chicken Salad", 450, 40, 20, 15, &[], &[]),
            Meal::new(
                "Quinoa & Black Bean Bowl",
                500,
                18,
                15,
                75,
                &["vegetarian", "vegan"],
                &[],
            ),
            Meal::new("Turkey Wrap", 420, 30, 12, 45, &[], &["gluten"]),
            Meal::new(
                "Lentil Soup with Bread",
                380,
                18,
                5,
                60,
                &["vegetarian", "vegan"],
                &["gluten"],
            ),
            Meal::new("Tuna Salad Nicoise", 400, 35, 22, 10, &["pescatarian"], &["fish"]),
        ],
        dinner: vec![
            Meal::new(
                "Baked Salmon with Asparagus",
                550,
                45,
                25,
                10,
                &["pescatarian"],
                &["fish"],
            ),
            Meal::new(
                "Stir-Fry Tofu & Veggies",
                400,
                20,
                15,
                50,
                &["vegetarian", "vegan"],
                &["soy"],
            ),
            Meal::new("Lean Beef Tacos", 600, 35, 28, 40, &[], &["gluten", "dairy"]),
            Meal::new(
                "Zucchini Noodles with Pesto",
                350,
                8,
                25,
                15,
                &["vegetarian", "vegan", "keto"],
                &["tree nuts"],
            ),
            Meal::new("Chicken Curry with Rice", 550, 30, 20, 60, &[], &[]),
        ],
    }
}
