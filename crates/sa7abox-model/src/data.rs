//! Built-in catalog data. Values are the storefront's live tables; prices
//! are TND, nutrition is per unit.

use crate::ingredient::{Ingredient, IngredientCategory};
use crate::menu::{MenuCategory, MenuItem, Nutrition};

fn nutrition(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64) -> Nutrition {
    Nutrition {
        calories,
        protein,
        carbs: Some(carbs),
        fat: Some(fat),
        fiber,
    }
}

fn menu_item(
    id: &str,
    category: MenuCategory,
    image: &str,
    price_tnd: f64,
    nutrition: Nutrition,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        category,
        name_key: format!("menu.items.{id}.name"),
        description_key: format!("menu.items.{id}.description"),
        image_url: format!("/assets/menus/{image}"),
        price_tnd: Some(price_tnd),
        nutrition,
        options: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn ingredient(
    id: &str,
    group: &str,
    category: IngredientCategory,
    image: &str,
    unit_label: &str,
    unit_price_tnd: f64,
    per_unit: Nutrition,
    max_qty: u32,
) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name_key: format!("ingredients.{group}.{id}"),
        description_key: format!("ingredients.nutrition.{id}"),
        image_url: Some(format!("/assets/ingredients/{image}")),
        unit_label: unit_label.to_string(),
        unit_price_tnd,
        nutrition_per_unit: per_unit,
        min_qty: 0,
        max_qty,
        category,
        required: false,
    }
}

pub(crate) fn builtin_menu_items() -> Vec<MenuItem> {
    use MenuCategory::{Box, HealthyJuice};
    vec![
        menu_item("supercut", Box, "supercut.png", 10.0, nutrition(585.0, 75.0, 51.0, 8.0, 6.0)),
        menu_item("superbalance", Box, "superbalance.png", 10.0, nutrition(903.0, 81.0, 91.0, 24.0, 7.0)),
        menu_item("superbulk", Box, "superbulk.png", 12.0, nutrition(1187.0, 82.0, 138.0, 33.0, 8.0)),
        menu_item("carthageCaesar", Box, "carthage-caesar.png", 6.0, nutrition(295.0, 46.0, 6.0, 8.5, 3.0)),
        menu_item("healthyNuggets", Box, "healthy-nuggets.png", 10.0, nutrition(341.0, 34.0, 3.0, 8.5, 0.0)),
        menu_item("platcrevettepannee", Box, "plat-crevette-panne.png", 18.0, nutrition(573.0, 48.0, 75.0, 9.0, 6.0)),
        menu_item("platcrevettegrillee", Box, "plat-crevette-grillee.png", 16.0, nutrition(573.0, 48.0, 75.0, 9.0, 6.0)),
        menu_item("orangeJuice", HealthyJuice, "orange-fresh-juice.png", 4.0, nutrition(170.0, 3.0, 45.0, 0.0, 1.0)),
        menu_item("bananaJuice", HealthyJuice, "orange-protein-juice.png", 6.5, nutrition(245.0, 10.0, 43.0, 5.5, 1.0)),
        menu_item("yaourtArbi", HealthyJuice, "banana-protein-yogurt.png", 1.0, nutrition(130.0, 8.0, 10.0, 6.0, 1.0)),
        menu_item("proteinSmoothie", HealthyJuice, "banana-protein-smoothie.png", 8.5, nutrition(360.0, 39.0, 41.0, 8.0, 3.0)),
    ]
}

pub(crate) fn builtin_ingredients() -> Vec<Ingredient> {
    use IngredientCategory::{Base, Extra, Protein, Sauce, Veg};
    vec![
        ingredient("riz", "bases", Base, "rice.png", "container", 2.0, nutrition(210.0, 5.0, 46.0, 0.0, 0.0), 3),
        ingredient("borghol", "bases", Base, "bulgur.png", "portion", 2.0, nutrition(240.0, 8.0, 44.0, 1.0, 0.0), 3),
        ingredient("salade-lentilles", "bases", Veg, "lentils.jpeg", "portion", 1.0, nutrition(180.0, 13.0, 30.0, 0.0, 0.0), 3),
        ingredient("salade-laitue", "bases", Veg, "lettuce.png", "portion", 0.8, nutrition(30.0, 2.0, 6.0, 0.0, 0.0), 4),
        ingredient("salade-crombe", "bases", Veg, "cabbage.png", "portion", 1.0, nutrition(55.0, 3.0, 11.0, 0.0, 0.0), 4),
        ingredient("escalope-poulet", "proteins", Protein, "chicken-breast.png", "portion", 5.0, nutrition(175.0, 35.0, 0.0, 3.0, 0.0), 4),
        ingredient("crevette", "proteins", Protein, "shrimp.png", "portion", 8.0, nutrition(105.0, 24.0, 0.0, 1.0, 0.0), 4),
        ingredient("cuisses-poulet", "proteins", Protein, "chicken-thigh.png", "portion", 4.5, nutrition(241.0, 40.0, 11.0, 0.0, 0.0), 4),
        ingredient("2-oeufs", "proteins", Protein, "eggs.png", "portion", 1.5, nutrition(150.0, 14.0, 11.0, 11.0, 0.0), 4),
        ingredient("2-blancs-oeuf", "proteins", Protein, "egg-whites.png", "portion", 1.5, nutrition(32.0, 8.0, 0.0, 0.0, 0.0), 4),
        ingredient("amande", "extras", Extra, "almonds.png", "portion", 3.0, nutrition(280.0, 10.0, 10.0, 25.0, 0.0), 4),
        ingredient("sauce-sa7abox", "extras", Sauce, "sa7abox-sauce.png", "scoop", 0.0, nutrition(60.0, 6.0, 0.0, 4.0, 0.0), 3),
    ]
}
