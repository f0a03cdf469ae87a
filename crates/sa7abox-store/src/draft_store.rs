use crate::storage::{JsonStorage, BUILDER_DRAFT_KEY, INGREDIENT_DRAFT_KEY};
use sa7abox_model::{BuilderConfig, BuilderDraft, IngredientDraft, IngredientSelection};
use tracing::warn;

/// Drafts older than this are discarded at load time. Applies to both
/// slots.
pub const DRAFT_MAX_AGE_MS: u64 = 24 * 60 * 60 * 1000;

/// Milliseconds since the Unix epoch, for callers that stamp or expire
/// drafts against real time. The stores themselves never read the clock.
#[must_use]
pub fn unix_time_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Two independent single-draft slots, one per builder, keyed separately
/// from the cart so the records never collide.
///
/// Saves overwrite unconditionally; loads treat missing, malformed, and
/// stale records alike as absence. Writes are best-effort like the cart's.
#[derive(Debug, Clone)]
pub struct DraftStore {
    storage: JsonStorage,
}

impl DraftStore {
    #[must_use]
    pub fn new(storage: JsonStorage) -> Self {
        Self { storage }
    }

    pub fn save_builder(&self, config: &BuilderConfig, now_ms: u64) {
        let draft = BuilderDraft {
            config: config.clone(),
            timestamp: now_ms,
        };
        if let Err(err) = self.storage.save(BUILDER_DRAFT_KEY, &draft) {
            warn!(%err, "builder draft save failed");
        }
    }

    /// Returns the saved config if a structurally valid draft exists and is
    /// within the freshness window.
    #[must_use]
    pub fn load_builder(&self, now_ms: u64) -> Option<BuilderConfig> {
        let draft: BuilderDraft = self.load_slot(BUILDER_DRAFT_KEY)?;
        fresh(draft.timestamp, now_ms).then_some(draft.config)
    }

    pub fn clear_builder(&self) {
        if let Err(err) = self.storage.remove(BUILDER_DRAFT_KEY) {
            warn!(%err, "builder draft clear failed");
        }
    }

    pub fn save_ingredients(&self, selections: &[IngredientSelection], now_ms: u64) {
        let draft = IngredientDraft {
            selections: selections.to_vec(),
            timestamp: now_ms,
        };
        if let Err(err) = self.storage.save(INGREDIENT_DRAFT_KEY, &draft) {
            warn!(%err, "ingredient draft save failed");
        }
    }

    #[must_use]
    pub fn load_ingredients(&self, now_ms: u64) -> Option<Vec<IngredientSelection>> {
        let draft: IngredientDraft = self.load_slot(INGREDIENT_DRAFT_KEY)?;
        fresh(draft.timestamp, now_ms).then_some(draft.selections)
    }

    pub fn clear_ingredients(&self) {
        if let Err(err) = self.storage.remove(INGREDIENT_DRAFT_KEY) {
            warn!(%err, "ingredient draft clear failed");
        }
    }

    fn load_slot<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.storage.load(key) {
            Ok(found) => found,
            Err(err) => {
                warn!(%err, key, "draft unreadable, treating as absent");
                None
            }
        }
    }
}

fn fresh(timestamp: u64, now_ms: u64) -> bool {
    now_ms.saturating_sub(timestamp) < DRAFT_MAX_AGE_MS
}
