use recipe_core::{
    derive_recipe_detail, CatalogStore, NutritionHighlights, Recipe, SampleRecipeSource,
};

#[test]
fn detail_formats_labels_and_headline_nutrition() {
    let store = CatalogStore::from_source(SampleRecipeSource).unwrap();
    let salad = store.recipe(1).expect("sample recipe 1");

    let detail = derive_recipe_detail(salad);
    assert_eq!(detail.title, "Healthy Taco Salad");
    assert_eq!(detail.ready_label, "15 min");
    assert_eq!(detail.servings_label, "4 servings");
    assert_eq!(
        detail.nutrition,
        NutritionHighlights {
            calories: 320,
            protein: 28,
            carbs: 18,
            fat: 16,
        }
    );
    assert_eq!(detail.ingredients.len(), 4);
    assert_eq!(detail.ingredients[1].original, "1 head romaine lettuce, chopped");
    assert_eq!(
        detail.steps.iter().map(|step| step.number).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
}

#[test]
fn detail_strips_summary_markup_and_truncates_fractions() {
    let mut recipe = Recipe::new(20, "Lentil Soup");
    recipe.summary = "A <b>hearty</b> soup with <a href=\"/lentils\">lentils</a>.".to_string();
    recipe.nutrition.calories = 249.9;
    recipe.nutrition.fat = 0.4;

    let detail = derive_recipe_detail(&recipe);
    assert_eq!(detail.summary_text, "A hearty soup with lentils.");
    assert_eq!(detail.nutrition.calories, 249);
    assert_eq!(detail.nutrition.fat, 0);
    assert_eq!(detail.servings_label, "1 servings");
}

#[test]
fn detail_preserves_step_order_even_when_numbers_repeat() {
    let mut recipe = Recipe::new(21, "Repeat");
    recipe.instructions = vec![
        recipe_core::Instruction {
            id: 1,
            step: "first".to_string(),
            number: 2,
        },
        recipe_core::Instruction {
            id: 2,
            step: "second".to_string(),
            number: 2,
        },
    ];

    let detail = derive_recipe_detail(&recipe);
    let texts = detail
        .steps
        .iter()
        .map(|step| step.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(texts, vec!["first", "second"]);
}

#[test]
fn detail_serializes_flat_view_fields() {
    let store = CatalogStore::from_source(SampleRecipeSource).unwrap();
    let detail = derive_recipe_detail(store.recipe(1).expect("sample recipe 1"));

    let json = serde_json::to_value(&detail).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["ready_label"], "15 min");
    assert_eq!(json["servings_label"], "4 servings");
    assert_eq!(json["nutrition"]["calories"], 320);
    assert_eq!(json["ingredients"][1]["name"], detail.ingredients[1].name);
    assert_eq!(json["steps"][0]["number"], 1);
    assert!(!json["summary_text"].as_str().unwrap().contains('<'));
}
