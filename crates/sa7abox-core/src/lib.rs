#![forbid(unsafe_code)]
//! Order composition and pricing engine.
//!
//! Pure functions from (selection, catalog) to plates, prices, and cart line
//! identities. Nothing here touches the clock, the filesystem, or the
//! network; recomputing from the same inputs always yields the same result,
//! which is what lets the client cart and the server-side order path agree.

pub mod canonical;
pub mod identity;
pub mod integration;
pub mod plate;
pub mod pricing;

pub use identity::cart_item_id;
pub use integration::{cart_line_from_builder, cart_line_from_ingredients};
pub use plate::{compute_meal, compute_plate_totals, EMPTY_PLATE_SUMMARY, STANDARD_SUMMARY};
pub use pricing::{calculate_totals, unit_price};

pub const CRATE_NAME: &str = "sa7abox-core";
