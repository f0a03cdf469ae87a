// SPDX-License-Identifier: Apache-2.0

use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed storage key for the persisted cart record.
pub const CART_KEY: &str = "sa7abox_cart";
/// Fixed storage key for the portion/size builder draft slot.
pub const BUILDER_DRAFT_KEY: &str = "sa7abox_builder_draft";
/// Fixed storage key for the ingredient builder draft slot.
pub const INGREDIENT_DRAFT_KEY: &str = "sa7abox_ingredient_builder_draft";

/// Key-value JSON storage over a directory: one `<key>.json` file per key.
///
/// Saves are whole-state overwrites published via temp-file + rename, so a
/// crash mid-write never leaves a partially written record behind.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|e| StoreError::io(&e, "create storage directory"))?;
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| StoreError::serialization(&e, "encode record"))?;
        let target = self.path(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));
        fs::write(&tmp, &bytes).map_err(|e| StoreError::io(&e, "write record"))?;
        fs::rename(&tmp, &target).map_err(|e| StoreError::io(&e, "publish record"))?;
        Ok(())
    }

    /// Reads a record. A missing key is `Ok(None)`; unreadable or
    /// undecodable content is an error the caller downgrades as it sees fit.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(&e, "read record")),
        };
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::serialization(&e, "decode record"))?;
        Ok(Some(value))
    }

    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(&e, "remove record")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::JsonStorage;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn save_load_remove_round_trip() {
        let dir = tempdir().expect("tempdir");
        let storage = JsonStorage::open(dir.path()).expect("open");

        assert_eq!(
            storage.load::<serde_json::Value>("missing").expect("load"),
            None
        );

        storage.save("slot", &json!({"a": 1})).expect("save");
        assert_eq!(
            storage.load::<serde_json::Value>("slot").expect("load"),
            Some(json!({"a": 1}))
        );

        storage.remove("slot").expect("remove");
        assert_eq!(
            storage.load::<serde_json::Value>("slot").expect("load"),
            None
        );
        // Removing an absent key is a no-op.
        storage.remove("slot").expect("remove again");
    }

    #[test]
    fn undecodable_content_is_an_error_not_a_panic() {
        let dir = tempdir().expect("tempdir");
        let storage = JsonStorage::open(dir.path()).expect("open");
        std::fs::write(dir.path().join("slot.json"), b"{not json").expect("write");
        assert!(storage.load::<serde_json::Value>("slot").is_err());
    }
}
