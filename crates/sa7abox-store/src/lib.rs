#![forbid(unsafe_code)]
//! Durable session state: the cart store and the builder draft slots.
//!
//! Both persist whole-state JSON records under fixed keys in a
//! [`JsonStorage`] directory. Persistence is best-effort: a failed write is
//! logged and the in-memory mutation still completes, so the worst crash
//! outcome is losing the last mutation, never corrupting what was stored.

mod cart_store;
mod draft_store;
mod error;
mod storage;

pub use cart_store::{CartStore, MAX_QUANTITY, MIN_QUANTITY};
pub use draft_store::{unix_time_ms, DraftStore, DRAFT_MAX_AGE_MS};
pub use error::{StoreError, StoreErrorCode};
pub use storage::{JsonStorage, BUILDER_DRAFT_KEY, CART_KEY, INGREDIENT_DRAFT_KEY};

pub const CRATE_NAME: &str = "sa7abox-store";
