//! Small hashing primitives used across presetforge internals.
//!
//! A content key is derived from the canonical JSON form of a value (object keys sorted at every
//! depth), so it depends only on structure and values, never on field insertion order.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Every content key starts with this prefix.
pub const KEY_PREFIX: &str = "hash";

#[derive(Debug, Error)]
pub enum HashError {
    #[error("value has no canonical json form: {0}")]
    Canonical(#[from] serde_json::Error),
}

/// Lowercase hex sha256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

pub fn canonicalize_json(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<_> = map.keys().cloned().collect();
            keys.sort();
            let mut out = serde_json::Map::new();
            for k in keys {
                if let Some(v) = map.get(&k) {
                    out.insert(k, canonicalize_json(v));
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize_json).collect()),
        other => other.clone(),
    }
}

/// Hex sha256 of the canonical serialization of `value`.
pub fn fingerprint(value: &Value) -> Result<String, HashError> {
    let canonical = serde_json::to_string(&canonicalize_json(value))?;
    Ok(sha256_hex(canonical.as_bytes()))
}

/// Turns a hex digest into an identifier-style key.
///
/// Preset chunk ids must not start with a digit, so digits are dropped and the remaining hex
/// letters are prefixed with [`KEY_PREFIX`].
pub fn identifier_key(hex_digest: &str) -> String {
    let mut key = String::with_capacity(KEY_PREFIX.len() + hex_digest.len());
    key.push_str(KEY_PREFIX);
    key.extend(hex_digest.chars().filter(|c| !c.is_ascii_digit()));
    key
}

/// Content key of any serializable value.
pub fn content_key<T: Serialize + ?Sized>(value: &T) -> Result<String, HashError> {
    let value = serde_json::to_value(value)?;
    Ok(identifier_key(&fingerprint(&value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sha256_hex_known_vector() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn fingerprint_is_order_independent() {
        let mut map1 = serde_json::Map::new();
        map1.insert("b".to_string(), json!(1));
        map1.insert("a".to_string(), json!({"z": 2, "y": 3}));

        let mut map2 = serde_json::Map::new();
        map2.insert("a".to_string(), json!({"y": 3, "z": 2}));
        map2.insert("b".to_string(), json!(1));

        let fp1 = fingerprint(&Value::Object(map1)).unwrap();
        let fp2 = fingerprint(&Value::Object(map2)).unwrap();
        assert_eq!(fp1, fp2);
    }

    #[test]
    fn array_order_is_significant() {
        let a = content_key(&json!(["1", "2"])).unwrap();
        let b = content_key(&json!(["2", "1"])).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn identifier_key_strips_digits() {
        assert_eq!(identifier_key("0a1b2c3d"), "hashabcd");
        assert_eq!(identifier_key("0123"), "hash");
    }

    #[test]
    fn content_key_is_identifier_safe() {
        let key = content_key(&json!({"name": "FFN", "desc": "Feature Function"})).unwrap();
        assert!(key.starts_with(KEY_PREFIX));
        assert!(key.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn content_key_rejects_non_string_map_keys() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(vec![1u8], "x");
        assert!(matches!(content_key(&map), Err(HashError::Canonical(_))));
    }
}
