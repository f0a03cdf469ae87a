//! Promotion of builder selections into cart lines.
//!
//! Both builders produce a synthetic `MenuItem` with the computed price and
//! nutrition baked in, plus a `SelectedOptions` carrying the raw selection
//! for server-side recompute and the human summary for display.

use crate::identity;
use crate::plate::{compute_meal, compute_plate_totals};
use sa7abox_model::{
    BuilderConfig, CartLine, Catalog, IngredientSelection, MenuCategory, MenuItem, SelectedOptions,
};

/// Turns a custom ingredient plate into a quantity-1 cart line.
pub fn cart_line_from_ingredients(
    selections: &[IngredientSelection],
    catalog: &Catalog,
) -> CartLine {
    let computed = compute_plate_totals(selections, catalog);
    let cart_item_id = identity::ingredient_fingerprint(selections);

    let menu_item = MenuItem {
        id: "custom-plate".to_string(),
        category: MenuCategory::Box,
        name_key: "builder.customPlate.name".to_string(),
        description_key: "builder.customPlate.description".to_string(),
        image_url: "/placeholder.png".to_string(),
        price_tnd: Some(computed.price_tnd),
        nutrition: computed.nutrition,
        options: None,
    };

    CartLine {
        cart_item_id,
        menu_item,
        selected_options: SelectedOptions {
            ingredient_selections: Some(selections.to_vec()),
            ingredient_summary: Some(computed.summary),
            ..Default::default()
        },
        quantity: 1,
    }
}

/// Turns a builder config plus its base meal into a quantity-1 cart line.
pub fn cart_line_from_builder(
    config: &BuilderConfig,
    base_meal: &MenuItem,
) -> Result<CartLine, serde_json::Error> {
    let computed = compute_meal(
        config,
        &base_meal.nutrition,
        base_meal.price_tnd.unwrap_or(0.0),
    );
    let cart_item_id = identity::builder_fingerprint(config)?;

    let menu_item = MenuItem {
        price_tnd: Some(computed.price_tnd),
        nutrition: computed.nutrition,
        ..base_meal.clone()
    };

    Ok(CartLine {
        cart_item_id,
        menu_item,
        selected_options: SelectedOptions {
            builder_config: Some(config.clone()),
            builder_summary: Some(computed.summary),
            ..Default::default()
        },
        quantity: 1,
    })
}
