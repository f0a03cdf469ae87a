// SPDX-License-Identifier: Apache-2.0

use sa7abox_model::{
    BuilderConfig, BuilderDraft, CartLine, CartState, Catalog, MealSize, SelectedOptions,
    SpicyLevel, CART_STATE_VERSION,
};
use serde_json::json;

#[test]
fn persisted_cart_record_is_version_tagged_camel_case() {
    let catalog = Catalog::builtin();
    let item = catalog.menu_item("supercut").expect("catalog item").clone();
    let state = CartState {
        version: CART_STATE_VERSION,
        lines: vec![CartLine {
            cart_item_id: "supercut_abc".to_string(),
            menu_item: item,
            selected_options: SelectedOptions::default(),
            quantity: 2,
        }],
    };

    let value = serde_json::to_value(&state).expect("encode cart state");
    assert_eq!(value["version"], json!(1));
    assert_eq!(value["lines"][0]["cartItemId"], json!("supercut_abc"));
    assert_eq!(value["lines"][0]["quantity"], json!(2));
    assert_eq!(value["lines"][0]["menuItem"]["priceTnd"], json!(10.0));

    let decoded: CartState = serde_json::from_value(value).expect("decode cart state");
    assert_eq!(decoded, state);
}

#[test]
fn absent_and_empty_option_collections_decode_identically() {
    let absent: SelectedOptions = serde_json::from_value(json!({})).expect("decode absent");
    let empty: SelectedOptions =
        serde_json::from_value(json!({ "extras": [], "removeIngredients": [] }))
            .expect("decode empty");
    assert_eq!(absent, empty);
    // Empty collections are stripped on encode, so both round-trip to `{}`.
    assert_eq!(serde_json::to_value(&empty).expect("encode"), json!({}));
}

#[test]
fn builder_draft_flattens_config_with_timestamp() {
    let draft = BuilderDraft {
        config: BuilderConfig {
            meal_id: "supercut".to_string(),
            size: MealSize::Large,
            toggles: sa7abox_model::BuilderToggles {
                no_onions: true,
                spicy_level: SpicyLevel::Mild,
            },
            portions: sa7abox_model::Portions {
                protein: 2,
                ..Default::default()
            },
        },
        timestamp: 1_700_000_000_000,
    };

    let value = serde_json::to_value(&draft).expect("encode draft");
    assert_eq!(value["mealId"], json!("supercut"));
    assert_eq!(value["size"], json!("large"));
    assert_eq!(value["toggles"]["spicyLevel"], json!(1));
    assert_eq!(value["timestamp"], json!(1_700_000_000_000u64));

    let decoded: BuilderDraft = serde_json::from_value(value).expect("decode draft");
    assert_eq!(decoded, draft);
}
