use sa7abox_model::{BuilderConfig, IngredientSelection, MealSize};
use sa7abox_store::{
    DraftStore, JsonStorage, BUILDER_DRAFT_KEY, DRAFT_MAX_AGE_MS, INGREDIENT_DRAFT_KEY,
};
use tempfile::tempdir;

const NOW_MS: u64 = 1_700_000_000_000;
const ONE_HOUR_MS: u64 = 60 * 60 * 1000;

fn store(dir: &tempfile::TempDir) -> DraftStore {
    DraftStore::new(JsonStorage::open(dir.path()).expect("storage"))
}

fn config() -> BuilderConfig {
    BuilderConfig {
        meal_id: "supercut".to_string(),
        size: MealSize::Large,
        ..Default::default()
    }
}

fn selections() -> Vec<IngredientSelection> {
    vec![IngredientSelection {
        ingredient_id: "riz".to_string(),
        quantity: 2,
    }]
}

#[test]
fn fresh_drafts_are_returned_and_stale_ones_discarded() {
    let dir = tempdir().expect("tempdir");
    let drafts = store(&dir);

    drafts.save_builder(&config(), NOW_MS);
    assert_eq!(drafts.load_builder(NOW_MS + ONE_HOUR_MS), Some(config()));
    assert_eq!(drafts.load_builder(NOW_MS + 25 * ONE_HOUR_MS), None);
}

#[test]
fn ingredient_drafts_expire_on_the_same_window() {
    let dir = tempdir().expect("tempdir");
    let drafts = store(&dir);

    drafts.save_ingredients(&selections(), NOW_MS);
    assert_eq!(
        drafts.load_ingredients(NOW_MS + DRAFT_MAX_AGE_MS - 1),
        Some(selections())
    );
    assert_eq!(drafts.load_ingredients(NOW_MS + DRAFT_MAX_AGE_MS), None);
}

#[test]
fn slots_are_independent_and_keyed_apart() {
    let dir = tempdir().expect("tempdir");
    let drafts = store(&dir);

    drafts.save_builder(&config(), NOW_MS);
    drafts.save_ingredients(&selections(), NOW_MS);

    drafts.clear_builder();
    assert_eq!(drafts.load_builder(NOW_MS), None);
    assert_eq!(drafts.load_ingredients(NOW_MS), Some(selections()));

    assert_ne!(BUILDER_DRAFT_KEY, INGREDIENT_DRAFT_KEY);
}

#[test]
fn save_overwrites_the_previous_draft_unconditionally() {
    let dir = tempdir().expect("tempdir");
    let drafts = store(&dir);

    drafts.save_builder(&config(), NOW_MS);
    let mut updated = config();
    updated.size = MealSize::Xl;
    drafts.save_builder(&updated, NOW_MS + 1);

    assert_eq!(drafts.load_builder(NOW_MS + 2), Some(updated));
}

#[test]
fn malformed_or_mismatched_drafts_read_as_absent() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join(format!("{BUILDER_DRAFT_KEY}.json")),
        b"{\"truncated\":",
    )
    .expect("write");
    std::fs::write(
        dir.path().join(format!("{INGREDIENT_DRAFT_KEY}.json")),
        // Structurally valid JSON, wrong shape: no selections/timestamp.
        b"{\"foo\":1}",
    )
    .expect("write");

    let drafts = store(&dir);
    assert_eq!(drafts.load_builder(NOW_MS), None);
    assert_eq!(drafts.load_ingredients(NOW_MS), None);
}

#[test]
fn clearing_an_empty_slot_is_a_no_op() {
    let dir = tempdir().expect("tempdir");
    let drafts = store(&dir);
    drafts.clear_builder();
    drafts.clear_ingredients();
    assert_eq!(drafts.load_builder(NOW_MS), None);
}
