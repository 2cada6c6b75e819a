//! Lenient field deserializers for backend rows whose scalar types drift
//! between string and number.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept `"42"`, `42` or `null` (as empty) for a string field
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

/// Accept `42.5`, `"42.5"` or `null` (as zero) for a numeric field
pub fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("number out of range: {}", n))),
        Value::String(s) if s.trim().is_empty() => Ok(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| D::Error::custom(format!("invalid number {:?}: {}", s, e))),
        Value::Null => Ok(0.0),
        other => Err(D::Error::custom(format!(
            "expected number or string, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "number_or_string")]
        price: f64,
    }

    #[test]
    fn test_string_or_number() {
        let row: Row = serde_json::from_str(r#"{"id": 17, "price": 1}"#).unwrap();
        assert_eq!(row.id, "17");
        let row: Row = serde_json::from_str(r#"{"id": "A-17", "price": 1}"#).unwrap();
        assert_eq!(row.id, "A-17");
        let row: Row = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(row.id, "");
        assert!(serde_json::from_str::<Row>(r#"{"id": [1]}"#).is_err());
    }

    #[test]
    fn test_number_or_string() {
        let row: Row = serde_json::from_str(r#"{"price": 42.5}"#).unwrap();
        assert_eq!(row.price, 42.5);
        let row: Row = serde_json::from_str(r#"{"price": " 19.90 "}"#).unwrap();
        assert_eq!(row.price, 19.9);
        let row: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(row.price, 0.0);
        assert!(serde_json::from_str::<Row>(r#"{"price": "abc"}"#).is_err());
    }
}
