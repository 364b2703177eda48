//! The type registry: the closed set of primitive type names a pattern may
//! reference, and the predicate deciding whether a value satisfies each.
//!
//! The set is fixed — `string`, `number`, `boolean`, `object`, `function`,
//! `array`, `date`, `observable` — and is extended by exactly one capability:
//! `observable` checks are delegated to a host-supplied
//! [`ObservableHost`](shapecheck_value::ObservableHost), installed once on
//! the matcher. Looking up a name outside the set is a pattern error raised
//! at parse time, never mid-walk.

use std::fmt;
use std::str::FromStr;

use shapecheck_value::{ObservableHost, Value, ValueKind};

use crate::error::PatternError;

// ============================================================================
// TYPE NAMES
// ============================================================================

/// A primitive type name a pattern may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    String,
    Number,
    Boolean,
    Object,
    Function,
    Array,
    Date,
    Observable,
}

impl TypeName {
    /// Resolves a pattern token to a type name.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "object" => Some(Self::Object),
            "function" => Some(Self::Function),
            "array" => Some(Self::Array),
            "date" => Some(Self::Date),
            "observable" => Some(Self::Observable),
            _ => None,
        }
    }

    /// The canonical token for this type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Function => "function",
            Self::Array => "array",
            Self::Date => "date",
            Self::Observable => "observable",
        }
    }

    /// Returns true for the container types whose string-pattern remainder
    /// describes their content (`array`, `observable`).
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Array | Self::Observable)
    }

    /// Runs the registry predicate for this type against a value.
    ///
    /// `observable` is the one capability-backed check: it needs an
    /// [`ObservableHost`] and fails with
    /// [`TypeFailure::ObservablesUnavailable`] when none is installed.
    pub fn check(
        &self,
        value: &Value,
        observables: Option<&dyn ObservableHost>,
    ) -> Result<(), TypeFailure> {
        let satisfied = match self {
            Self::String => value.kind() == ValueKind::Text,
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::Function => value.is_function(),
            Self::Array => value.is_array(),
            Self::Date => value.is_date(),
            Self::Observable => {
                let Some(host) = observables else {
                    return Err(TypeFailure::ObservablesUnavailable);
                };
                host.is_observable(value)
            }
        };
        if satisfied {
            Ok(())
        } else {
            Err(TypeFailure::Mismatch)
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeName {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| PatternError::UnknownType(s.to_owned()))
    }
}

/// Outcome of a failed registry predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFailure {
    /// The value does not have the declared type.
    Mismatch,
    /// An `observable` check was requested with no host installed.
    ObservablesUnavailable,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shapecheck_value::Handles;

    #[test]
    fn number_covers_integers_and_floats() {
        assert_eq!(TypeName::Number.check(&Value::integer(42), None), Ok(()));
        assert_eq!(TypeName::Number.check(&Value::float(1.5), None), Ok(()));
        assert_eq!(
            TypeName::Number.check(&Value::text("42"), None),
            Err(TypeFailure::Mismatch)
        );
    }

    #[test]
    fn object_excludes_arrays_and_null() {
        assert_eq!(TypeName::Object.check(&Value::object_empty(), None), Ok(()));
        assert_eq!(
            TypeName::Object.check(&Value::array(vec![]), None),
            Err(TypeFailure::Mismatch)
        );
        assert_eq!(
            TypeName::Object.check(&Value::null(), None),
            Err(TypeFailure::Mismatch)
        );
    }

    #[test]
    fn observable_requires_a_host() {
        let value = Value::observable(Value::integer(3));
        assert_eq!(
            TypeName::Observable.check(&value, None),
            Err(TypeFailure::ObservablesUnavailable)
        );
        assert_eq!(TypeName::Observable.check(&value, Some(&Handles)), Ok(()));
        assert_eq!(
            TypeName::Observable.check(&Value::integer(3), Some(&Handles)),
            Err(TypeFailure::Mismatch)
        );
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        assert_eq!(
            "Sith Lord".parse::<TypeName>(),
            Err(PatternError::UnknownType("Sith Lord".into()))
        );
        assert_eq!("date".parse::<TypeName>(), Ok(TypeName::Date));
    }
}
