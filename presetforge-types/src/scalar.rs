//! Lenient scalar decoding.
//!
//! The schema feeds were generated from loosely typed sources, so default values, lengths and
//! enumeration values show up as either JSON strings or JSON numbers. Both normalize to `String`.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

fn scalar_to_string<E: de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(E::custom(format!("expected a scalar, found {other}"))),
    }
}

/// Required string that may be encoded as a number.
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(value)?.ok_or_else(|| de::Error::custom("expected a scalar, found null"))
}

/// Optional string that may be encoded as a number or be `null`.
pub fn opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        Some(v) => scalar_to_string(v),
        None => Ok(None),
    }
}
