//! Error types for pattern construction and validation failures.
//!
//! Two stages, two types:
//!
//! - [`PatternError`] — configuration errors raised eagerly while a pattern
//!   is parsed or compiled, before any value is looked at.
//! - [`ValidationError`] — the single match-time failure kind. Matching is
//!   fail-fast: the first violation aborts the walk, so a check produces at
//!   most one of these.
//!
//! String fields use `Cow<'static, str>` for zero-allocation in the common
//! case of static error codes.

use std::borrow::Cow;
use std::fmt;

use crate::path::ValuePath;
use crate::registry::TypeName;

// ============================================================================
// PATTERN ERRORS (construction time)
// ============================================================================

/// A malformed pattern, rejected at parse/compile time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PatternError {
    /// A pattern string contained no tokens.
    #[error("empty pattern string!")]
    Empty,

    /// A token (or `__type` name) is not a registered type.
    #[error("unknown type '{0}' given in pattern!")]
    UnknownType(String),

    /// A non-container type was followed by further tokens.
    ///
    /// Only `array` and `observable` describe their remainder; e.g.
    /// `"number string"` is rejected here.
    #[error("invalid pattern: '{0}' cannot be followed by further tokens!")]
    TrailingTokens(&'static str),

    /// A token chain ended on `optional`/`nullable` with no type to apply.
    #[error("invalid pattern: '{0}' must be followed by a type!")]
    DanglingModifier(&'static str),

    /// The pattern literal is neither a string nor a structured object.
    #[error("invalid pattern: '{0}' was given as a pattern!")]
    InvalidPattern(String),

    /// An object-pattern property is neither a string nor an object pattern.
    #[error("invalid pattern: the '{0}' property must be a string or object pattern!")]
    InvalidProperty(String),

    /// A reserved control key carried a value of the wrong shape.
    #[error("invalid pattern: '{key}' must be {expected}!")]
    InvalidControl {
        key: &'static str,
        expected: &'static str,
    },

    /// `__allowedValues` was present but not an array.
    #[error("invalid pattern: '__allowedValues' must be an array!")]
    AllowedValuesNotArray,

    /// A property key is not a valid (dotted) path.
    #[error("invalid pattern: '{0}' is not a valid property key!")]
    InvalidFieldKey(String),
}

// ============================================================================
// VALIDATION ERROR (match time)
// ============================================================================

/// A single match-time validation failure.
///
/// Carries a stable `code` for programmatic handling, the accumulated
/// [`path`](ValidationError::path) of the offending sub-value, and a
/// human-readable, path-qualified message.
///
/// # Examples
///
/// ```rust
/// use shapecheck_validator::{Pattern, check};
/// use shapecheck_value::Value;
///
/// let pattern = Pattern::parse("number").unwrap();
/// let err = check(&Value::text("5"), &pattern).unwrap_err();
/// assert_eq!(err.code(), "type_mismatch");
/// assert_eq!(err.to_string(), "configObject should have number type!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    code: Cow<'static, str>,
    path: String,
    message: String,
}

impl ValidationError {
    /// Creates a validation error with an explicit code and message.
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            path: path.into(),
            message: message.into(),
        }
    }

    /// Error code for programmatic handling.
    ///
    /// One of: `mandatory`, `null_value`, `type_mismatch`,
    /// `not_allowed_value`, `observables_unavailable`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Accumulated path of the offending sub-value, e.g. `configObject.d[1]`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The full, path-qualified message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    // ==================== Convenience constructors ====================

    /// A required value is absent.
    #[must_use]
    pub fn mandatory(path: &ValuePath) -> Self {
        Self::new("mandatory", path.as_str(), format!("{path} is mandatory!"))
    }

    /// A value is null where nullability was not declared.
    #[must_use]
    pub fn not_null(path: &ValuePath) -> Self {
        Self::new(
            "null_value",
            path.as_str(),
            format!("{path} shouldn't be null!"),
        )
    }

    /// A value's runtime type does not satisfy the declared primitive.
    #[must_use]
    pub fn type_mismatch(path: &ValuePath, expected: TypeName) -> Self {
        Self::new(
            "type_mismatch",
            path.as_str(),
            format!("{path} should have {expected} type!"),
        )
    }

    /// A value is not a member of an explicit literal whitelist.
    #[must_use]
    pub fn not_allowed(path: &ValuePath) -> Self {
        Self::new(
            "not_allowed_value",
            path.as_str(),
            format!("{path} value is not among the allowed ones!"),
        )
    }

    /// An `observable` check ran on a matcher with no observable host.
    #[must_use]
    pub fn observables_unavailable(path: &ValuePath) -> Self {
        Self::new(
            "observables_unavailable",
            path.as_str(),
            format!("{path} needs an observable check, but observable checking is unavailable!"),
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================
