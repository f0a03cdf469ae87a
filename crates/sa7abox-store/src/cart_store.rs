use crate::error::StoreError;
use crate::storage::{JsonStorage, CART_KEY};
use sa7abox_core::{calculate_totals, cart_item_id};
use sa7abox_model::{CartLine, CartState, CartTotals, MenuItem, SelectedOptions, CART_STATE_VERSION};
use tracing::warn;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 20;

/// The cart state machine: an ordered collection of deduplicated lines.
///
/// Constructed explicitly and passed where needed; there is no process-wide
/// singleton. Every mutation persists the whole state; persistence failures
/// are logged and never block the in-memory mutation.
#[derive(Debug)]
pub struct CartStore {
    storage: JsonStorage,
    state: CartState,
}

impl CartStore {
    /// Opens the store, hydrating from storage when a valid record exists
    /// and starting empty otherwise.
    #[must_use]
    pub fn open(storage: JsonStorage) -> Self {
        let state = match storage.load::<CartState>(CART_KEY) {
            Ok(Some(state)) if state.version == CART_STATE_VERSION => state,
            Ok(Some(state)) => {
                warn!(version = state.version, "unknown cart record version, starting empty");
                CartState::default()
            }
            Ok(None) => CartState::default(),
            Err(err) => {
                warn!(%err, "failed to hydrate cart, starting empty");
                CartState::default()
            }
        };
        Self { storage, state }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.state.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lines.is_empty()
    }

    /// Recomputed from current lines on every call; never cached.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        calculate_totals(&self.state.lines)
    }

    /// Adds a selection to the cart and returns its derived line id.
    ///
    /// A selection whose fingerprint matches an existing line increments
    /// that line's quantity through [`CartStore::update_quantity`], so the
    /// quantity cap applies uniformly; otherwise a new line is appended with
    /// the quantity pre-clamped.
    pub fn add_item(
        &mut self,
        menu_item: &MenuItem,
        options: &SelectedOptions,
        quantity: u32,
    ) -> Result<String, StoreError> {
        let id = cart_item_id(menu_item, options)
            .map_err(|e| StoreError::serialization(&e, "derive cart line id"))?;

        if let Some(existing) = self.state.lines.iter().find(|l| l.cart_item_id == id) {
            let target = existing.quantity.saturating_add(quantity);
            self.update_quantity(&id, target);
        } else {
            self.state.lines.push(CartLine {
                cart_item_id: id.clone(),
                menu_item: menu_item.clone(),
                selected_options: options.clone(),
                quantity: quantity.clamp(MIN_QUANTITY, MAX_QUANTITY),
            });
            self.persist();
        }
        Ok(id)
    }

    /// Clamps to `[1, 20]` and replaces the line's quantity. Unknown ids are
    /// a no-op, not an error.
    pub fn update_quantity(&mut self, cart_item_id: &str, quantity: u32) {
        let clamped = quantity.clamp(MIN_QUANTITY, MAX_QUANTITY);
        let mut changed = false;
        for line in &mut self.state.lines {
            if line.cart_item_id == cart_item_id && line.quantity != clamped {
                line.quantity = clamped;
                changed = true;
            }
        }
        if changed {
            self.persist();
        }
    }

    /// Removes a line. Unknown ids are a no-op.
    pub fn remove_item(&mut self, cart_item_id: &str) {
        let before = self.state.lines.len();
        self.state.lines.retain(|l| l.cart_item_id != cart_item_id);
        if self.state.lines.len() != before {
            self.persist();
        }
    }

    pub fn clear(&mut self) {
        self.state.lines.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(CART_KEY, &self.state) {
            warn!(%err, "cart persistence failed, keeping in-memory state");
        }
    }
}
