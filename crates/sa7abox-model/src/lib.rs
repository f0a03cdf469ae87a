#![forbid(unsafe_code)]
//! Storefront model SSOT: catalog entities, selections, and cart shapes.
//!
//! Everything here is plain data. Computation over these shapes (pricing,
//! nutrition, cart line identity) lives in `sa7abox-core`; persistence lives
//! in `sa7abox-store`.

mod builder;
mod cart;
mod catalog;
mod data;
mod ids;
mod ingredient;
mod menu;

pub use builder::{
    BuilderConfig, BuilderDraft, BuilderToggles, MealSize, PortionKey, PortionSpec, Portions,
    SpicyLevel,
};
pub use cart::{CartLine, CartState, CartTotals, ComputedPlate, CART_STATE_VERSION};
pub use catalog::Catalog;
pub use ids::{parse_ingredient_id, parse_menu_item_id, ValidationError, ID_MAX_LEN};
pub use ingredient::{Ingredient, IngredientCategory, IngredientDraft, IngredientSelection};
pub use menu::{
    MenuCategory, MenuItem, MenuItemOption, MenuItemOptions, Nutrition, SelectedOptions,
};

pub const CRATE_NAME: &str = "sa7abox-model";
