//! Lenient deserializers for backend payloads.
//!
//! The backend is a JavaScript service and freely sends `null`, numbers as
//! strings or strings as numbers. These helpers keep one odd field from
//! rejecting the whole record: a value of the wrong shape reads as empty.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Anything that is not a list reads as an empty list; list elements that
/// do not deserialize as `T` are skipped
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Identifier that may arrive as a string or a number
pub fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Text field; numbers and booleans are rendered as text, other shapes are `None`
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Like [`lenient_string`] but empty instead of `None`
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

/// Number that may arrive as a numeric string (`"100.00"`)
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

/// Like [`lenient_f64`] but zero instead of `None`
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_f64(deserializer)?.unwrap_or_default())
}

/// Whole number; fractional values are truncated
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|v| v as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

/// Flag that may arrive as `"true"`/`"false"`, `0`/`1` or `null`
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Doc {
        #[serde(default, deserialize_with = "lenient_bool")]
        flag: bool,
        #[serde(default, deserialize_with = "lenient_list")]
        items: Vec<u32>,
        #[serde(default, deserialize_with = "opaque_id")]
        id: Option<String>,
        #[serde(default, deserialize_with = "lenient_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient_f64")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "lenient_i64")]
        count: Option<i64>,
    }

    #[test]
    fn test_null_and_absent_fields() {
        let doc: Doc =
            serde_json::from_str(r#"{"flag":null,"items":null,"name":null,"amount":null}"#).unwrap();
        assert!(!doc.flag);
        assert!(doc.items.is_empty());
        assert_eq!(doc.id, None);
        assert_eq!(doc.name, None);
        assert_eq!(doc.amount, None);

        let doc: Doc = serde_json::from_str("{}").unwrap();
        assert!(!doc.flag);
        assert!(doc.items.is_empty());
        assert_eq!(doc.count, None);
    }

    #[test]
    fn test_lenient_list_skips_bad_elements() {
        let doc: Doc = serde_json::from_str(r#"{"items":[1,"two",3]}"#).unwrap();
        assert_eq!(doc.items, vec![1, 3]);

        let doc: Doc = serde_json::from_str(r#"{"items":{"not":"a list"}}"#).unwrap();
        assert!(doc.items.is_empty());
    }

    #[test]
    fn test_opaque_id() {
        let doc: Doc = serde_json::from_str(r#"{"id":"65a1f0"}"#).unwrap();
        assert_eq!(doc.id.as_deref(), Some("65a1f0"));

        let doc: Doc = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(doc.id.as_deref(), Some("42"));
    }

    #[test]
    fn test_mismatched_shapes_read_leniently() {
        let doc: Doc = serde_json::from_str(
            r#"{"flag":"TRUE","name":1042,"amount":" 100.50 ","count":"3"}"#,
        )
        .unwrap();
        assert!(doc.flag);
        assert_eq!(doc.name.as_deref(), Some("1042"));
        assert_eq!(doc.amount, Some(100.5));
        assert_eq!(doc.count, Some(3));

        let doc: Doc =
            serde_json::from_str(r#"{"flag":1,"name":{"a":1},"amount":"n/a","count":2.9}"#).unwrap();
        assert!(doc.flag);
        assert_eq!(doc.name, None);
        assert_eq!(doc.amount, None);
        assert_eq!(doc.count, Some(2));
    }
}
