use sa7abox_core::{calculate_totals, unit_price};
use sa7abox_model::{
    CartLine, Catalog, MenuItem, MenuItemOption, MenuItemOptions, SelectedOptions,
};

fn line(menu_item: MenuItem, options: SelectedOptions, quantity: u32) -> CartLine {
    CartLine {
        cart_item_id: format!("{}_test", menu_item.id),
        menu_item,
        selected_options: options,
        quantity,
    }
}

fn item_with_extras() -> MenuItem {
    let catalog = Catalog::builtin();
    let mut item = catalog.menu_item("supercut").expect("menu item").clone();
    item.options = Some(MenuItemOptions {
        extras: vec![
            MenuItemOption {
                id: "extra-egg".to_string(),
                label: "Extra egg".to_string(),
                price_tnd: Some(1.5),
            },
            MenuItemOption {
                id: "extra-cheese".to_string(),
                label: "Cheese".to_string(),
                price_tnd: Some(2.0),
            },
        ],
        ..Default::default()
    });
    item
}

#[test]
fn unit_price_rederives_base_plus_selected_extras() {
    let item = item_with_extras();
    let options = SelectedOptions {
        extras: vec!["extra-egg".to_string(), "extra-cheese".to_string()],
        ..Default::default()
    };
    assert_eq!(unit_price(&item, &options), 13.5);
    assert_eq!(unit_price(&item, &SelectedOptions::default()), 10.0);
}

#[test]
fn unknown_extras_and_missing_base_price_fall_back_to_zero() {
    let mut item = item_with_extras();
    let options = SelectedOptions {
        extras: vec!["nope".to_string()],
        ..Default::default()
    };
    assert_eq!(unit_price(&item, &options), 10.0);

    item.price_tnd = None;
    assert_eq!(unit_price(&item, &options), 0.0);
}

#[test]
fn totals_are_the_sum_over_lines_of_unit_price_times_quantity() {
    let item = item_with_extras();
    let with_extras = SelectedOptions {
        extras: vec!["extra-egg".to_string()],
        ..Default::default()
    };
    let lines = vec![
        line(item.clone(), with_extras, 3),
        line(item.clone(), SelectedOptions::default(), 2),
    ];

    let totals = calculate_totals(&lines);
    assert_eq!(totals.item_count, 5);
    // 3 x (10 + 1.5) + 2 x 10
    assert_eq!(totals.subtotal_tnd, 54.5);
}

#[test]
fn empty_cart_totals_are_zero() {
    let totals = calculate_totals(&[]);
    assert_eq!(totals.item_count, 0);
    assert_eq!(totals.subtotal_tnd, 0.0);
}
