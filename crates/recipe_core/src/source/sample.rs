//! Bundled sample catalog and meal log shown before a real provider exists.

use super::{MealSource, RecipeSource, SourceResult};
use crate::model::meal::Meal;
use crate::model::recipe::{Ingredient, Instruction, Nutrition, Recipe, RecipeId};

const PHOTO_BASE: &str = "https://images.unsplash.com/photo-";
const COVER_WIDTH: u32 = 400;
const THUMB_WIDTH: u32 = 100;

/// Ten-recipe sample catalog with ids `1..=10`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleRecipeSource;

impl RecipeSource for SampleRecipeSource {
    fn load_recipes(&self) -> SourceResult<Vec<Recipe>> {
        Ok(vec![
            taco_salad(),
            quinoa_bowl(),
            chicken_stir_fry(),
            buddha_bowl(),
            yogurt_parfait(),
            pasta_primavera(),
            salmon_teriyaki(),
            zucchini_noodles(),
            turkey_meatballs(),
            avocado_mousse(),
        ])
    }
}

/// Four-meal sample log in display order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleMealSource;

impl MealSource for SampleMealSource {
    fn load_meals(&self) -> SourceResult<Vec<Meal>> {
        Ok(vec![
            meal("Grilled Chicken Salad", "2:30 PM", "leaf.fill", [320, 28, 12, 18]),
            meal("Greek Yogurt Bowl", "10:15 AM", "bowl.fill", [180, 15, 22, 4]),
            meal("Avocado Toast", "8:00 AM", "toast.fill", [280, 8, 32, 14]),
            meal("Salmon & Quinoa", "7:45 PM", "fish.fill", [450, 35, 38, 18]),
        ])
    }
}

/// `macros` is `[calories, protein, carbs, fat]`.
fn meal(name: &str, time: &str, icon: &str, macros: [u32; 4]) -> Meal {
    let [calories, protein, carbs, fat] = macros;
    Meal {
        calories,
        protein,
        carbs,
        fat,
        ..Meal::new(name, time, icon)
    }
}

struct Header {
    id: RecipeId,
    title: &'static str,
    photo: &'static str,
    minutes: u32,
    servings: u32,
    price: f64,
    health: i32,
    diets: &'static [&'static str],
    cuisines: &'static [&'static str],
    summary: &'static str,
}

fn build(
    header: Header,
    steps: &[&str],
    ingredients: Vec<Ingredient>,
    nutrition: Nutrition,
) -> Recipe {
    Recipe {
        id: header.id,
        title: header.title.to_string(),
        image: photo_url(header.photo, COVER_WIDTH),
        ready_in_minutes: header.minutes,
        servings: header.servings,
        price_per_serving: header.price,
        health_score: header.health,
        diets: owned(header.diets),
        cuisines: owned(header.cuisines),
        summary: header.summary.to_string(),
        instructions: steps
            .iter()
            .zip(1..)
            .map(|(step, number)| Instruction {
                id: i64::from(number),
                step: (*step).to_string(),
                number,
            })
            .collect(),
        ingredients,
        nutrition,
        is_favorite: false,
    }
}

fn item(
    id: i64,
    name: &str,
    amount: f64,
    unit: &str,
    photo: &str,
    original: &str,
) -> Ingredient {
    Ingredient {
        id,
        name: name.to_string(),
        amount,
        unit: unit.to_string(),
        image: photo_url(photo, THUMB_WIDTH),
        original: original.to_string(),
    }
}

fn facts(
    calories: f64,
    carbs: f64,
    protein: f64,
    fat: f64,
    fiber: f64,
    sugar: f64,
    sodium: f64,
) -> Nutrition {
    Nutrition {
        calories,
        carbs,
        protein,
        fat,
        fiber,
        sugar,
        sodium,
    }
}

fn photo_url(photo: &str, width: u32) -> String {
    format!("{PHOTO_BASE}{photo}?w={width}")
}

fn owned(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| (*tag).to_string()).collect()
}

fn taco_salad() -> Recipe {
    build(
        Header {
            id: 1,
            title: "Healthy Taco Salad",
            photo: "1512058564366-18510be2db19",
            minutes: 15,
            servings: 4,
            price: 2.50,
            health: 85,
            diets: &["vegetarian", "gluten free"],
            cuisines: &["Mexican"],
            summary: "This Healthy Taco Salad is the universal delight of taco night. Packed with fresh vegetables, lean protein, and a zesty dressing, it's a nutritious meal that doesn't compromise on flavor.",
        },
        &[
            "Wash and chop all vegetables into bite-sized pieces.",
            "Cook ground turkey in a skillet over medium heat until browned.",
            "Add taco seasoning and mix well.",
            "Combine all ingredients in a large bowl and toss with dressing.",
        ],
        vec![
            item(1, "Ground Turkey", 1.0, "lb", "1544025162-d76694265947", "1 lb ground turkey"),
            item(2, "Romaine Lettuce", 1.0, "head", "1622206151226-18ca2c9ab4a1", "1 head romaine lettuce, chopped"),
            item(3, "Cherry Tomatoes", 1.0, "cup", "1592924357228-91a4daadcfea", "1 cup cherry tomatoes, halved"),
            item(4, "Avocado", 1.0, "piece", "1523049673857-eb18f1d7b578", "1 avocado, diced"),
        ],
        facts(320.0, 18.0, 28.0, 16.0, 8.0, 6.0, 420.0),
    )
}

fn quinoa_bowl() -> Recipe {
    build(
        Header {
            id: 2,
            title: "Mediterranean Quinoa Bowl",
            photo: "1512621776951-a57141f2eefd",
            minutes: 25,
            servings: 2,
            price: 3.20,
            health: 92,
            diets: &["vegan", "gluten free"],
            cuisines: &["Mediterranean"],
            summary: "A vibrant and nutritious quinoa bowl loaded with Mediterranean flavors. Perfect for a healthy lunch or light dinner.",
        },
        &[
            "Cook quinoa according to package instructions.",
            "Chop vegetables and prepare the dressing.",
            "Combine all ingredients in a bowl and serve.",
        ],
        vec![
            item(1, "Quinoa", 1.0, "cup", "1586201375761-83865001e31c", "1 cup quinoa"),
            item(2, "Cucumber", 1.0, "piece", "1449300079323-02e209d9d3a6", "1 cucumber, diced"),
            item(3, "Cherry Tomatoes", 1.0, "cup", "1592924357228-91a4daadcfea", "1 cup cherry tomatoes"),
            item(4, "Kalamata Olives", 0.5, "cup", "1515443961218-a51367888e4b", "1/2 cup kalamata olives"),
        ],
        facts(280.0, 42.0, 12.0, 8.0, 6.0, 8.0, 320.0),
    )
}

fn chicken_stir_fry() -> Recipe {
    build(
        Header {
            id: 3,
            title: "Keto Chicken Stir-Fry",
            photo: "1603133872878-684f208fb84b",
            minutes: 20,
            servings: 3,
            price: 4.10,
            health: 78,
            diets: &["keto", "gluten free"],
            cuisines: &["Asian"],
            summary: "A quick and delicious keto-friendly stir-fry that's perfect for busy weeknights. Low in carbs but high in flavor.",
        },
        &[
            "Cut chicken into bite-sized pieces and season.",
            "Heat oil in a large wok or skillet.",
            "Cook chicken until golden brown.",
            "Add vegetables and stir-fry for 3-4 minutes.",
            "Add sauce and toss everything together.",
        ],
        vec![
            item(1, "Chicken Breast", 1.5, "lbs", "1544025162-d76694265947", "1.5 lbs chicken breast, cubed"),
            item(2, "Broccoli", 2.0, "cups", "1438118907701-1257b46335f4", "2 cups broccoli florets"),
            item(3, "Bell Peppers", 2.0, "pieces", "1563565375-f3fdfdbefa83", "2 bell peppers, sliced"),
            item(4, "Soy Sauce", 3.0, "tbsp", "1582878826629-29b7ad1cdc43", "3 tbsp soy sauce"),
        ],
        facts(180.0, 8.0, 35.0, 2.0, 3.0, 4.0, 680.0),
    )
}

fn buddha_bowl() -> Recipe {
    build(
        Header {
            id: 4,
            title: "Vegan Buddha Bowl",
            photo: "1512621776951-a57141f2eefd",
            minutes: 30,
            servings: 2,
            price: 2.80,
            health: 95,
            diets: &["vegan", "gluten free"],
            cuisines: &["International"],
            summary: "A colorful and nutritious Buddha bowl packed with plant-based goodness. Perfect for a healthy and satisfying meal.",
        },
        &[
            "Preheat oven to 400°F and roast sweet potatoes.",
            "Cook quinoa and prepare all vegetables.",
            "Make the tahini dressing.",
            "Arrange all ingredients in bowls and drizzle with dressing.",
        ],
        vec![
            item(1, "Sweet Potato", 2.0, "pieces", "1571019613454-1cb2f99b2d8b", "2 sweet potatoes, cubed"),
            item(2, "Quinoa", 1.0, "cup", "1586201375761-83865001e31c", "1 cup quinoa"),
            item(3, "Chickpeas", 1.0, "can", "1544025162-d76694265947", "1 can chickpeas, drained"),
            item(4, "Kale", 2.0, "cups", "1622206151226-18ca2c9ab4a1", "2 cups kale, chopped"),
        ],
        facts(420.0, 65.0, 18.0, 12.0, 12.0, 15.0, 280.0),
    )
}

fn yogurt_parfait() -> Recipe {
    build(
        Header {
            id: 5,
            title: "High-Protein Greek Yogurt Parfait",
            photo: "1488477181946-6428a0291777",
            minutes: 10,
            servings: 1,
            price: 1.80,
            health: 88,
            diets: &["vegetarian", "gluten free"],
            cuisines: &["Greek"],
            summary: "A protein-packed parfait perfect for breakfast or a post-workout snack. Layers of Greek yogurt, fresh berries, and granola.",
        },
        &[
            "Layer Greek yogurt in a glass or bowl.",
            "Add fresh berries on top.",
            "Sprinkle with granola and drizzle with honey.",
        ],
        vec![
            item(1, "Greek Yogurt", 1.0, "cup", "1488477181946-6428a0291777", "1 cup Greek yogurt"),
            item(2, "Mixed Berries", 0.5, "cup", "1481349518771-20055b2a7b24", "1/2 cup mixed berries"),
            item(3, "Granola", 0.25, "cup", "1578985545062-69928b1d9587", "1/4 cup granola"),
            item(4, "Honey", 1.0, "tbsp", "1558642084-fd07fae5282e", "1 tbsp honey"),
        ],
        facts(280.0, 35.0, 25.0, 6.0, 4.0, 28.0, 120.0),
    )
}

fn pasta_primavera() -> Recipe {
    build(
        Header {
            id: 6,
            title: "Gluten-Free Pasta Primavera",
            photo: "1621996346565-e3dbc353d2e5",
            minutes: 35,
            servings: 4,
            price: 3.50,
            health: 82,
            diets: &["vegetarian", "gluten free"],
            cuisines: &["Italian"],
            summary: "A light and fresh pasta dish loaded with seasonal vegetables. Perfect for a healthy Italian-inspired meal.",
        },
        &[
            "Cook gluten-free pasta according to package instructions.",
            "Sauté vegetables in olive oil until tender.",
            "Combine pasta with vegetables and toss with sauce.",
            "Garnish with fresh herbs and serve.",
        ],
        vec![
            item(1, "Gluten-Free Pasta", 12.0, "oz", "1621996346565-e3dbc353d2e5", "12 oz gluten-free pasta"),
            item(2, "Zucchini", 2.0, "pieces", "1449300079323-02e209d9d3a6", "2 zucchini, sliced"),
            item(3, "Bell Peppers", 2.0, "pieces", "1563565375-f3fdfdbefa83", "2 bell peppers, sliced"),
            item(4, "Cherry Tomatoes", 1.0, "cup", "1592924357228-91a4daadcfea", "1 cup cherry tomatoes"),
        ],
        facts(320.0, 45.0, 12.0, 8.0, 6.0, 8.0, 420.0),
    )
}

fn salmon_teriyaki() -> Recipe {
    build(
        Header {
            id: 7,
            title: "Quick & Easy Salmon Teriyaki",
            photo: "1467003909585-2f8a72700288",
            minutes: 18,
            servings: 2,
            price: 5.20,
            health: 90,
            diets: &["gluten free"],
            cuisines: &["Asian"],
            summary: "A quick and flavorful salmon dish with homemade teriyaki sauce. Perfect for a healthy weeknight dinner.",
        },
        &[
            "Season salmon fillets with salt and pepper.",
            "Make the teriyaki sauce by combining ingredients.",
            "Cook salmon in a pan for 4-5 minutes per side.",
            "Brush with teriyaki sauce and serve with rice.",
        ],
        vec![
            item(1, "Salmon Fillets", 2.0, "pieces", "1467003909585-2f8a72700288", "2 salmon fillets"),
            item(2, "Soy Sauce", 3.0, "tbsp", "1582878826629-29b7ad1cdc43", "3 tbsp soy sauce"),
            item(3, "Honey", 2.0, "tbsp", "1558642084-fd07fae5282e", "2 tbsp honey"),
            item(4, "Ginger", 1.0, "tsp", "1582878826629-29b7ad1cdc43", "1 tsp fresh ginger, grated"),
        ],
        facts(380.0, 12.0, 42.0, 18.0, 1.0, 10.0, 720.0),
    )
}

fn zucchini_noodles() -> Recipe {
    build(
        Header {
            id: 8,
            title: "Low-Calorie Zucchini Noodles",
            photo: "1621996346565-e3dbc353d2e5",
            minutes: 15,
            servings: 2,
            price: 2.20,
            health: 95,
            diets: &["vegetarian", "gluten free", "low calorie"],
            cuisines: &["Italian"],
            summary: "Light and refreshing zucchini noodles with a light tomato sauce. Perfect for a low-calorie meal that's still satisfying.",
        },
        &[
            "Spiralize zucchini into noodles.",
            "Sauté garlic and tomatoes in olive oil.",
            "Add zucchini noodles and cook for 2-3 minutes.",
            "Season with herbs and serve immediately.",
        ],
        vec![
            item(1, "Zucchini", 4.0, "pieces", "1449300079323-02e209d9d3a6", "4 large zucchini"),
            item(2, "Cherry Tomatoes", 1.0, "cup", "1592924357228-91a4daadcfea", "1 cup cherry tomatoes"),
            item(3, "Garlic", 3.0, "cloves", "1582878826629-29b7ad1cdc43", "3 cloves garlic, minced"),
            item(4, "Basil", 0.25, "cup", "1582878826629-29b7ad1cdc43", "1/4 cup fresh basil"),
        ],
        facts(120.0, 15.0, 6.0, 4.0, 4.0, 10.0, 180.0),
    )
}

fn turkey_meatballs() -> Recipe {
    build(
        Header {
            id: 9,
            title: "High-Protein Turkey Meatballs",
            photo: "1565299624946-b28f40a0ca4b",
            minutes: 40,
            servings: 4,
            price: 3.80,
            health: 85,
            diets: &["gluten free"],
            cuisines: &["Italian"],
            summary: "Lean turkey meatballs packed with protein and flavor. Perfect for meal prep or a hearty dinner.",
        },
        &[
            "Preheat oven to 400°F.",
            "Mix ground turkey with seasonings and breadcrumbs.",
            "Form into meatballs and place on baking sheet.",
            "Bake for 20-25 minutes until cooked through.",
            "Serve with marinara sauce and pasta.",
        ],
        vec![
            item(1, "Ground Turkey", 1.5, "lbs", "1544025162-d76694265947", "1.5 lbs ground turkey"),
            item(2, "Egg", 1.0, "piece", "1518569656558-1ea25c4d4d3a", "1 egg"),
            item(3, "Breadcrumbs", 0.5, "cup", "1578985545062-69928b1d9587", "1/2 cup breadcrumbs"),
            item(4, "Parmesan Cheese", 0.25, "cup", "1488477181946-6428a0291777", "1/4 cup parmesan cheese"),
        ],
        facts(220.0, 8.0, 35.0, 6.0, 1.0, 2.0, 480.0),
    )
}

fn avocado_mousse() -> Recipe {
    build(
        Header {
            id: 10,
            title: "Vegan Chocolate Avocado Mousse",
            photo: "1488477181946-6428a0291777",
            minutes: 20,
            servings: 4,
            price: 2.10,
            health: 75,
            diets: &["vegan", "gluten free"],
            cuisines: &["International"],
            summary: "A rich and creamy chocolate mousse made with avocado. Surprisingly healthy and absolutely delicious.",
        },
        &[
            "Blend avocado with cocoa powder and sweetener.",
            "Add vanilla and blend until smooth.",
            "Chill in refrigerator for at least 1 hour.",
            "Serve with fresh berries and enjoy.",
        ],
        vec![
            item(1, "Avocado", 2.0, "pieces", "1523049673857-eb18f1d7b578", "2 ripe avocados"),
            item(2, "Cocoa Powder", 0.25, "cup", "1578985545062-69928b1d9587", "1/4 cup cocoa powder"),
            item(3, "Maple Syrup", 3.0, "tbsp", "1558642084-fd07fae5282e", "3 tbsp maple syrup"),
            item(4, "Vanilla Extract", 1.0, "tsp", "1582878826629-29b7ad1cdc43", "1 tsp vanilla extract"),
        ],
        facts(180.0, 22.0, 4.0, 12.0, 8.0, 16.0, 10.0),
    )
}
