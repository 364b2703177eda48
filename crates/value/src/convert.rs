//! Conversions between [`Value`] and primitive / JSON types.
//!
//! `From<serde_json::Value>` is total: every JSON value has a `Value`
//! representation. The reverse direction is `TryFrom`, since dates,
//! functions and observables have no JSON form.

use std::collections::BTreeMap;

use crate::kind::ValueKind;
use crate::value::Value;

// ============================================================================
// PRIMITIVE CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Self::Object(v)
    }
}

// ============================================================================
// JSON CONVERSIONS
// ============================================================================

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => n.as_i64().map_or_else(
                // Numbers outside i64 (large u64, floats) land in Float.
                || Self::Float(n.as_f64().unwrap_or(f64::NAN)),
                Self::Integer,
            ),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Failure converting a [`Value`] to JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsonConvertError {
    /// The value (or one of its descendants) has no JSON representation.
    #[error("{0} values have no JSON representation")]
    Unrepresentable(ValueKind),
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = JsonConvertError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::Boolean(b) => Ok(Self::Bool(*b)),
            Value::Integer(i) => Ok(Self::from(*i)),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(Self::Number)
                .ok_or(JsonConvertError::Unrepresentable(ValueKind::Float)),
            Value::Text(s) => Ok(Self::String(s.clone())),
            Value::Array(items) => items.iter().map(Self::try_from).collect(),
            Value::Object(entries) => entries
                .iter()
                .map(|(k, v)| Self::try_from(v).map(|v| (k.clone(), v)))
                .collect::<Result<serde_json::Map<_, _>, _>>()
                .map(Self::Object),
            Value::Date(_) | Value::Function(_) | Value::Observable(_) => {
                Err(JsonConvertError::Unrepresentable(value.kind()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn json_round_trip() {
        let json = json!({
            "a": "some string",
            "b": 42,
            "c": {},
            "d": [42, "cute little string"],
            "i": true,
            "j": [1, 2, 3],
            "n": null,
            "x": 1.5,
        });
        let value = Value::from(json.clone());
        assert_eq!(serde_json::Value::try_from(&value), Ok(json));
    }

    #[test]
    fn large_u64_becomes_float() {
        let value = Value::from(json!(u64::MAX));
        assert!(matches!(value, Value::Float(_)));
    }

    #[test]
    fn opaque_handles_are_unrepresentable() {
        let value = Value::observable(Value::integer(1));
        assert_eq!(
            serde_json::Value::try_from(&value),
            Err(JsonConvertError::Unrepresentable(ValueKind::Observable))
        );

        let nested = Value::object([("f", Value::function(crate::Function::noop()))]);
        assert_eq!(
            serde_json::Value::try_from(&nested),
            Err(JsonConvertError::Unrepresentable(ValueKind::Function))
        );
    }
}
