//! Canonical JSON encoding and stable hashing.
//!
//! Object keys are sorted recursively before encoding, so two values that
//! differ only in field order hash identically. Fingerprints are dedup keys,
//! not security tokens; a truncated SHA-256 digest keeps them short and
//! stable across runs.

use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

pub const SHORT_HASH_LEN: usize = 12;

pub fn stable_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let raw = serde_json::to_value(value)?;
    let normalized = normalize_json_value(raw);
    serde_json::to_vec(&normalized)
}

#[must_use]
pub fn stable_hash_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Short stable digest of a value's canonical JSON encoding.
pub fn short_hash<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let bytes = stable_json_bytes(value)?;
    let mut hex = stable_hash_hex(&bytes);
    hex.truncate(SHORT_HASH_LEN);
    Ok(hex)
}

fn normalize_json_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut sorted = Map::new();
            let mut entries: Vec<(String, Value)> = map
                .into_iter()
                .map(|(k, v)| (k, normalize_json_value(v)))
                .collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (k, v) in entries {
                sorted.insert(k, v);
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_json_value).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::{short_hash, stable_json_bytes};
    use serde_json::json;

    #[test]
    fn canonical_json_orders_object_keys() {
        let value = json!({
            "z": 1,
            "a": {"d": 4, "b": 2},
            "arr": [{"k2": 2, "k1": 1}],
        });

        let bytes = stable_json_bytes(&value).expect("stable json bytes");
        let text = String::from_utf8(bytes).expect("utf8 json");
        assert_eq!(text, r#"{"a":{"b":2,"d":4},"arr":[{"k1":1,"k2":2}],"z":1}"#);
    }

    #[test]
    fn key_order_does_not_affect_the_hash() {
        let a = json!({"extras": ["x", "y"], "sauce": "harissa"});
        let b = json!({"sauce": "harissa", "extras": ["x", "y"]});
        assert_eq!(
            short_hash(&a).expect("hash a"),
            short_hash(&b).expect("hash b")
        );
    }

    #[test]
    fn array_order_still_matters() {
        let a = json!({"extras": ["x", "y"]});
        let b = json!({"extras": ["y", "x"]});
        assert_ne!(
            short_hash(&a).expect("hash a"),
            short_hash(&b).expect("hash b")
        );
    }

    #[test]
    fn short_hash_is_stable_across_calls() {
        let value = json!({"mealId": "supercut", "size": "large"});
        let first = short_hash(&value).expect("hash");
        let second = short_hash(&value).expect("hash");
        assert_eq!(first, second);
        assert_eq!(first.len(), super::SHORT_HASH_LEN);
    }
}
