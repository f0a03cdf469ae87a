use sa7abox_model::{parse_ingredient_id, parse_menu_item_id, Catalog, PortionKey};

#[test]
fn builtin_catalog_ids_all_parse() {
    let catalog = Catalog::builtin();
    for item in catalog.menu_items() {
        parse_menu_item_id(&item.id).expect("menu item id");
    }
    for ing in catalog.ingredients() {
        parse_ingredient_id(&ing.id).expect("ingredient id");
        assert!(ing.min_qty <= ing.max_qty);
        assert!(ing.unit_price_tnd >= 0.0);
    }
}

#[test]
fn required_seed_respects_min_qty() {
    let catalog = Catalog::builtin();
    for sel in catalog.required_selection_seed() {
        let ing = catalog
            .ingredient(&sel.ingredient_id)
            .expect("seed references catalog");
        assert!(ing.required);
        assert_eq!(sel.quantity, ing.min_qty);
    }
}

#[test]
fn portion_summary_order_is_protein_carbs_veg_fat() {
    let labels: Vec<&str> = PortionKey::ALL.iter().map(|k| k.spec().label).collect();
    assert_eq!(labels, ["Protein", "Carbs", "Veg/Fiber", "Fat/Sauce"]);
}

mod proptests {
    use proptest::prelude::*;
    use sa7abox_model::{parse_ingredient_id, ID_MAX_LEN};

    proptest! {
        #[test]
        fn valid_ids_round_trip_unchanged(id in "[A-Za-z0-9_-]{1,64}") {
            let parsed = parse_ingredient_id(&id).expect("valid id");
            prop_assert_eq!(parsed, id);
        }

        #[test]
        fn oversized_ids_are_rejected(id in "[a-z0-9]{65,80}") {
            prop_assert!(id.len() > ID_MAX_LEN);
            prop_assert!(parse_ingredient_id(&id).is_err());
        }
    }
}
