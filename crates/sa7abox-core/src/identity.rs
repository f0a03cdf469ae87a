//! Cart line identity: deterministic fingerprints that collapse identical
//! selections into a single cart line.

use crate::canonical::short_hash;
use sa7abox_model::{BuilderConfig, IngredientSelection, MenuItem, SelectedOptions};

/// Fingerprint for a catalog item plus extras/sauce/notes options.
///
/// Options are normalized first (blank strings dropped, empty collections
/// already absent from the canonical encoding), so field order and
/// absent-vs-empty differences never split a line.
pub fn menu_fingerprint(
    menu_item_id: &str,
    options: &SelectedOptions,
) -> Result<String, serde_json::Error> {
    let hash = short_hash(&normalize_options(options))?;
    Ok(format!("{menu_item_id}_{hash}"))
}

/// Fingerprint for an ingredient-based custom plate.
///
/// Zero-quantity entries are dropped and the rest sorted by ingredient id
/// before hashing, so builder insertion order never produces duplicates.
#[must_use]
pub fn ingredient_fingerprint(selections: &[IngredientSelection]) -> String {
    let mut picked: Vec<&IngredientSelection> =
        selections.iter().filter(|s| s.quantity > 0).collect();
    picked.sort_by(|a, b| a.ingredient_id.cmp(&b.ingredient_id));
    let encoded = picked
        .iter()
        .map(|s| format!("{}:{}", s.ingredient_id, s.quantity))
        .collect::<Vec<_>>()
        .join("|");
    let mut hash = crate::canonical::stable_hash_hex(encoded.as_bytes());
    hash.truncate(crate::canonical::SHORT_HASH_LEN);
    format!("custom_plate_{hash}")
}

/// Fingerprint for a builder-configured meal.
pub fn builder_fingerprint(config: &BuilderConfig) -> Result<String, serde_json::Error> {
    let hash = short_hash(config)?;
    Ok(format!("builder_{}_{hash}", config.meal_id))
}

/// Derives the dedup key for any selection variant.
pub fn cart_item_id(
    menu_item: &MenuItem,
    options: &SelectedOptions,
) -> Result<String, serde_json::Error> {
    if let Some(selections) = &options.ingredient_selections {
        return Ok(ingredient_fingerprint(selections));
    }
    if let Some(config) = &options.builder_config {
        return builder_fingerprint(config);
    }
    menu_fingerprint(&menu_item.id, options)
}

fn normalize_options(options: &SelectedOptions) -> SelectedOptions {
    let mut normalized = options.clone();
    normalized.sauce = take_nonblank(normalized.sauce);
    normalized.notes = take_nonblank(normalized.notes);
    normalized.builder_summary = None;
    normalized.ingredient_summary = None;
    normalized
}

fn take_nonblank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
