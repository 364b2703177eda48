//! Compilation of declarative pattern literals.
//!
//! The declarative form mirrors how patterns are written in configuration:
//! a string leaf is shorthand, an object literal carries reserved `__`
//! control keys plus (possibly dotted) property keys. Compilation resolves
//! the whole literal into a typed [`Pattern`] up front; every malformed
//! construct is a [`PatternError`] here, never a mid-walk surprise.

use shapecheck_value::Value;

use crate::error::PatternError;
use crate::pattern::{ObjectPattern, Pattern};
use crate::registry::TypeName;

/// Reserved control keys of the declarative object form.
const CONTROL_KEYS: [&str; 6] = [
    "__type",
    "__required",
    "__nullable",
    "__elements",
    "__value",
    "__allowedValues",
];

impl Pattern {
    /// Compiles a declarative pattern literal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapecheck_validator::Pattern;
    /// use shapecheck_value::Value;
    ///
    /// let literal = Value::from(serde_json::json!({
    ///     "a": "string",
    ///     "b": "number",
    ///     "c": {"__required": false, "__type": "number"},
    /// }));
    /// let pattern = Pattern::from_value(&literal).unwrap();
    /// ```
    pub fn from_value(literal: &Value) -> Result<Self, PatternError> {
        match literal {
            Value::Text(s) => Self::parse(s),
            Value::Object(entries) => {
                let mut pattern = ObjectPattern::new();
                for (key, prop) in entries {
                    pattern = compile_entry(pattern, key, prop)?;
                }
                Ok(Self::Object(pattern))
            }
            // Arrays are not patterns; neither is any other literal.
            other => Err(PatternError::InvalidPattern(other.to_string())),
        }
    }
}

fn compile_entry(
    pattern: ObjectPattern,
    key: &str,
    prop: &Value,
) -> Result<ObjectPattern, PatternError> {
    if CONTROL_KEYS.contains(&key) {
        return compile_control(pattern, key, prop);
    }
    let nested = match prop {
        Value::Text(_) | Value::Object(_) => Pattern::from_value(prop)?,
        _ => return Err(PatternError::InvalidProperty(key.to_owned())),
    };
    pattern.field(key, nested)
}

fn compile_control(
    pattern: ObjectPattern,
    key: &str,
    prop: &Value,
) -> Result<ObjectPattern, PatternError> {
    match key {
        "__type" => {
            let Value::Text(name) = prop else {
                return Err(PatternError::InvalidControl {
                    key: "__type",
                    expected: "a type name string",
                });
            };
            let type_name = TypeName::from_token(name)
                .ok_or_else(|| PatternError::UnknownType(name.clone()))?;
            Ok(pattern.of_type(type_name))
        }
        "__required" => match prop {
            Value::Boolean(false) => Ok(pattern.optional()),
            Value::Boolean(true) => Ok(pattern),
            _ => Err(PatternError::InvalidControl {
                key: "__required",
                expected: "a boolean",
            }),
        },
        "__nullable" => match prop {
            Value::Boolean(true) => Ok(pattern.nullable()),
            Value::Boolean(false) => Ok(pattern),
            _ => Err(PatternError::InvalidControl {
                key: "__nullable",
                expected: "a boolean",
            }),
        },
        "__allowedValues" => match prop {
            Value::Array(items) => Ok(pattern.allowed(items.clone())),
            _ => Err(PatternError::AllowedValuesNotArray),
        },
        "__elements" => Ok(pattern.elements(Pattern::from_value(prop)?)),
        "__value" => Ok(pattern.value(Pattern::from_value(prop)?)),
        _ => unreachable!("CONTROL_KEYS is exhaustive"),
    }
}

// ============================================================================
// TESTS
// ============================================================================
