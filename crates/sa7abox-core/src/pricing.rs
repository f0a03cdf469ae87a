//! Unit-price derivation and cart totals.
//!
//! Prices are re-derived from the menu item and its option tables at read
//! time rather than cached per line, so pricing-table edits are reflected
//! without any cart migration.

use sa7abox_model::{CartLine, CartTotals, MenuItem, SelectedOptions};

/// Price for one unit of a cart line: base price plus each selected extra's
/// flat price. Items without a base price (and unknown extra ids) price at 0.
///
/// Custom plates and builder meals carry their computed price on the
/// synthetic menu item and select no extras, so the same derivation applies.
#[must_use]
pub fn unit_price(menu_item: &MenuItem, options: &SelectedOptions) -> f64 {
    let Some(base) = menu_item.price_tnd else {
        return 0.0;
    };
    let mut total = base;
    if let Some(item_options) = &menu_item.options {
        for extra_id in &options.extras {
            if let Some(extra) = item_options.extras.iter().find(|e| &e.id == extra_id) {
                total += extra.price_tnd.unwrap_or(0.0);
            }
        }
    }
    total
}

/// Recomputes aggregate totals from the current lines. Pure read, O(n).
#[must_use]
pub fn calculate_totals(lines: &[CartLine]) -> CartTotals {
    let item_count = lines.iter().map(|l| l.quantity).sum();
    let subtotal_tnd = lines
        .iter()
        .map(|l| unit_price(&l.menu_item, &l.selected_options) * f64::from(l.quantity))
        .sum();
    CartTotals {
        item_count,
        subtotal_tnd,
    }
}
