//! Lenient wire helpers
//!
//! WordPress hands back loosely typed JSON: attachment ids may arrive as
//! strings or `false`, flags as `"YES"`/`"NO"`. These helpers normalize
//! that at the deserialization boundary.

use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// `"YES"` / `"NO"` flag encoding used by the content-model option.
pub mod yes_no {
    use super::*;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "YES" } else { "NO" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(matches!(raw, Some(Value::Bool(true))) || matches!(raw, Some(Value::String(ref s)) if s == "YES"))
    }
}

/// Accepts numbers, numeric strings, `false` and `null`; anything unusable becomes 0.
pub fn attachment_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()).unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Like [`attachment_id`] but signed, for `menu_order`.
pub fn lenient_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_i64().and_then(|v| i32::try_from(v).ok()).unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Missing or `null` strings become empty.
pub fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
