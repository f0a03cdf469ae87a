use crate::menu::{MenuItem, Nutrition, SelectedOptions};
use serde::{Deserialize, Serialize};

pub const CART_STATE_VERSION: u32 = 1;

/// One deduplicated cart line.
///
/// `cart_item_id` is derived from the selection, never user-chosen; two
/// lines with the same id must never coexist in a `CartState`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub cart_item_id: String,
    pub menu_item: MenuItem,
    pub selected_options: SelectedOptions,
    pub quantity: u32,
}

/// Derived cart aggregate; recomputed from lines on every read.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: u32,
    pub subtotal_tnd: f64,
}

/// The persisted cart record, version-tagged for future migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub version: u32,
    pub lines: Vec<CartLine>,
}

impl Default for CartState {
    fn default() -> Self {
        Self {
            version: CART_STATE_VERSION,
            lines: Vec::new(),
        }
    }
}

/// Derived plate result: a pure function of (selection, catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedPlate {
    pub nutrition: Nutrition,
    pub price_tnd: f64,
    pub summary: String,
}
