//! The pattern matcher: a pure recursive descent over value and pattern.
//!
//! Matching threads an accumulated [`ValuePath`] through the walk and stops
//! at the first violation. There is no shared mutable state across sibling
//! calls; the only configuration a [`Matcher`] carries is the optional
//! observable host capability, installed once and read-only thereafter.

use std::sync::Arc;

use tracing::{debug, trace};

use shapecheck_value::{ObservableHost, Value};

use crate::error::ValidationError;
use crate::path::{DEFAULT_ROOT, ValuePath};
use crate::pattern::{FieldKey, ObjectPattern, Pattern, Token};
use crate::registry::{TypeFailure, TypeName};

// ============================================================================
// MATCHER
// ============================================================================

/// Validates values against [`Pattern`]s.
///
/// # Examples
///
/// ```rust
/// use shapecheck_validator::{Matcher, Pattern};
/// use shapecheck_value::Value;
///
/// let matcher = Matcher::new();
/// let pattern = Pattern::from_value(&Value::from(serde_json::json!({
///     "a": "string",
///     "b": "number",
/// }))).unwrap();
///
/// let value = Value::from(serde_json::json!({"a": "s", "b": 5}));
/// assert!(matcher.check(&value, &pattern).is_ok());
///
/// let value = Value::from(serde_json::json!({"a": "s", "b": "5"}));
/// let err = matcher.check(&value, &pattern).unwrap_err();
/// assert_eq!(err.to_string(), "configObject.b should have number type!");
/// ```
#[derive(Clone, Default)]
pub struct Matcher {
    observables: Option<Arc<dyn ObservableHost>>,
}

impl Matcher {
    /// A matcher with no observable capability.
    ///
    /// Any `observable` type check fails with an
    /// `observables_unavailable` error until a host is installed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A matcher with the given observable host installed.
    #[must_use]
    pub fn with_observables(host: impl ObservableHost + 'static) -> Self {
        Self {
            observables: Some(Arc::new(host)),
        }
    }

    /// Installs (or replaces) the observable host. Last write wins.
    pub fn install_observables(&mut self, host: impl ObservableHost + 'static) {
        debug!("observable host installed");
        self.observables = Some(Arc::new(host));
    }

    // ==================== Entry points ====================

    /// Checks a value against a pattern, naming the root `configObject`.
    pub fn check(&self, value: &Value, pattern: &Pattern) -> Result<(), ValidationError> {
        self.check_named(value, pattern, DEFAULT_ROOT)
    }

    /// Checks a value against a pattern under an explicit root name.
    pub fn check_named(
        &self,
        value: &Value,
        pattern: &Pattern,
        name: &str,
    ) -> Result<(), ValidationError> {
        self.check_optional(Some(value), pattern, name)
    }

    /// Checks a possibly absent value against a pattern.
    ///
    /// `None` models an absent value (a missing property); whether absence
    /// is acceptable is decided by the pattern's `optional` / `__required`
    /// declaration.
    pub fn check_optional(
        &self,
        value: Option<&Value>,
        pattern: &Pattern,
        name: &str,
    ) -> Result<(), ValidationError> {
        trace!(root = name, pattern = %pattern, "checking value against pattern");
        self.match_pattern(value, pattern, &ValuePath::root(name))
    }

    // ==================== Recursive descent ====================

    fn match_pattern(
        &self,
        value: Option<&Value>,
        pattern: &Pattern,
        path: &ValuePath,
    ) -> Result<(), ValidationError> {
        match pattern {
            Pattern::Tokens(chain) => self.match_tokens(value, chain.tokens(), path),
            Pattern::Object(pattern) => self.match_object(value, pattern, path),
        }
    }

    /// Interprets a shorthand token chain left to right.
    fn match_tokens(
        &self,
        value: Option<&Value>,
        tokens: &[Token],
        path: &ValuePath,
    ) -> Result<(), ValidationError> {
        let Some((first, rest)) = tokens.split_first() else {
            return Ok(());
        };
        match first {
            Token::Optional => match value {
                None => Ok(()),
                Some(_) => self.match_tokens(value, rest, path),
            },
            Token::Nullable => match value {
                Some(v) if v.is_null() => Ok(()),
                _ => self.match_tokens(value, rest, path),
            },
            Token::Type(type_name) => {
                let Some(v) = value else {
                    return Err(ValidationError::mandatory(path));
                };
                if v.is_null() {
                    return Err(ValidationError::not_null(path));
                }
                self.check_type(v, *type_name, path)?;
                if rest.is_empty() {
                    return Ok(());
                }
                // Parsing guarantees leftover tokens only follow containers.
                match (type_name, v) {
                    (TypeName::Array, Value::Array(items)) => {
                        for (i, item) in items.iter().enumerate() {
                            self.match_tokens(Some(item), rest, &path.index(i))?;
                        }
                        Ok(())
                    }
                    (TypeName::Observable, _) => {
                        let content = self.unwrap_observable(v, path)?;
                        self.match_tokens(Some(&content), rest, &path.unwrapped())
                    }
                    _ => Ok(()),
                }
            }
        }
    }

    /// Interprets the structured object form.
    fn match_object(
        &self,
        value: Option<&Value>,
        pattern: &ObjectPattern,
        path: &ValuePath,
    ) -> Result<(), ValidationError> {
        let Some(v) = value else {
            return if pattern.is_required() {
                Err(ValidationError::mandatory(path))
            } else {
                Ok(())
            };
        };
        if v.is_null() {
            return if pattern.is_nullable() {
                Ok(())
            } else {
                Err(ValidationError::not_null(path))
            };
        }

        // The whitelist overrides all type checking at this node.
        if let Some(allowed) = pattern.allowed_values() {
            return if allowed.iter().any(|candidate| candidate == v) {
                Ok(())
            } else {
                Err(ValidationError::not_allowed(path))
            };
        }

        let type_name = pattern.type_name();
        self.check_type(v, type_name, path)?;

        match type_name {
            TypeName::Array => {
                if let (Some(element_pattern), Value::Array(items)) = (pattern.elements_pattern(), v)
                {
                    for (i, item) in items.iter().enumerate() {
                        self.match_pattern(Some(item), element_pattern, &path.index(i))?;
                    }
                }
                Ok(())
            }
            TypeName::Object | TypeName::Function | TypeName::Observable => {
                for (key, field_pattern) in pattern.fields() {
                    let (leaf, leaf_path) = resolve_field(v, key, path)?;
                    self.match_pattern(leaf, field_pattern, &leaf_path)?;
                }
                if type_name == TypeName::Observable {
                    if let Some(value_pattern) = pattern.value_pattern() {
                        let content = self.unwrap_observable(v, path)?;
                        self.match_pattern(Some(&content), value_pattern, &path.unwrapped())?;
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    // ==================== Helpers ====================

    fn check_type(
        &self,
        value: &Value,
        type_name: TypeName,
        path: &ValuePath,
    ) -> Result<(), ValidationError> {
        type_name
            .check(value, self.observables.as_deref())
            .map_err(|failure| match failure {
                TypeFailure::Mismatch => ValidationError::type_mismatch(path, type_name),
                TypeFailure::ObservablesUnavailable => {
                    ValidationError::observables_unavailable(path)
                }
            })
    }

    /// Reads the content of a value already verified to be observable.
    fn unwrap_observable(&self, value: &Value, path: &ValuePath) -> Result<Value, ValidationError> {
        self.observables
            .as_deref()
            .and_then(|host| host.read(value))
            .ok_or_else(|| ValidationError::type_mismatch(path, TypeName::Observable))
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("observables", &self.observables.is_some())
            .finish()
    }
}

/// Walks a (possibly dotted) field key through a value.
///
/// An intermediate segment that is present but not an object is a structural
/// error at that segment's path; an absent intermediate makes the leaf
/// absent, so the leaf pattern's required-ness decides.
fn resolve_field<'v>(
    value: &'v Value,
    key: &FieldKey,
    path: &ValuePath,
) -> Result<(Option<&'v Value>, ValuePath), ValidationError> {
    let mut current: Option<&'v Value> = Some(value);
    let mut current_path = path.clone();
    for (depth, segment) in key.segments().iter().enumerate() {
        if let Some(parent) = current {
            if depth > 0 && !parent.is_object() {
                return Err(ValidationError::type_mismatch(
                    &current_path,
                    TypeName::Object,
                ));
            }
            current = parent.get(segment);
        }
        current_path = current_path.child(segment);
    }
    Ok((current, current_path))
}

// ============================================================================
// CONVENIENCE ENTRY POINTS
// ============================================================================

/// Checks a value with a capability-free [`Matcher`], root named
/// `configObject`.
pub fn check(value: &Value, pattern: &Pattern) -> Result<(), ValidationError> {
    Matcher::new().check(value, pattern)
}

/// Checks a value with a capability-free [`Matcher`] under an explicit root
/// name.
pub fn check_named(value: &Value, pattern: &Pattern, name: &str) -> Result<(), ValidationError> {
    Matcher::new().check_named(value, pattern, name)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shapecheck_value::Handles;

    fn parse(pattern: &str) -> Pattern {
        Pattern::parse(pattern).unwrap()
    }

    #[test]
    fn primitive_success_and_mismatch() {
        let matcher = Matcher::new();
        assert!(matcher.check(&Value::text("s"), &parse("string")).is_ok());
        let err = matcher
            .check(&Value::integer(5), &parse("string"))
            .unwrap_err();
        assert_eq!(err.to_string(), "configObject should have string type!");
    }

    #[test]
    fn optional_short_circuits_on_absence() {
        let matcher = Matcher::new();
        assert!(
            matcher
                .check_optional(None, &parse("optional number"), "configObject")
                .is_ok()
        );
        let err = matcher
            .check_optional(None, &parse("number"), "configObject")
            .unwrap_err();
        assert_eq!(err.to_string(), "configObject is mandatory!");
    }

    #[test]
    fn nullable_short_circuits_on_null() {
        let matcher = Matcher::new();
        assert!(
            matcher
                .check(&Value::null(), &parse("nullable number"))
                .is_ok()
        );
        let err = matcher.check(&Value::null(), &parse("number")).unwrap_err();
        assert_eq!(err.to_string(), "configObject shouldn't be null!");
    }

    #[test]
    fn array_elements_report_failing_index() {
        let matcher = Matcher::new();
        let value = Value::array(vec![Value::integer(42), Value::text("x")]);
        let err = matcher.check(&value, &parse("array number")).unwrap_err();
        assert_eq!(err.path(), "configObject[1]");
        assert_eq!(err.to_string(), "configObject[1] should have number type!");
    }

    #[test]
    fn array_type_check_precedes_element_iteration() {
        let matcher = Matcher::new();
        let err = matcher
            .check(&Value::text("nope"), &parse("array number"))
            .unwrap_err();
        assert_eq!(err.to_string(), "configObject should have array type!");
    }

    #[test]
    fn observable_checks_need_a_host() {
        let value = Value::observable(Value::integer(3));
        let err = Matcher::new()
            .check(&value, &parse("observable"))
            .unwrap_err();
        assert_eq!(err.code(), "observables_unavailable");

        assert!(
            Matcher::with_observables(Handles)
                .check(&value, &parse("observable"))
                .is_ok()
        );
    }

    #[test]
    fn observable_unwrap_appends_call_marker() {
        let matcher = Matcher::with_observables(Handles);
        let value = Value::observable(Value::integer(3));
        let err = matcher
            .check(&value, &parse("observable string"))
            .unwrap_err();
        assert_eq!(err.path(), "configObject()");
        assert_eq!(err.to_string(), "configObject() should have string type!");
    }

    #[test]
    fn install_observables_overwrites() {
        struct Rejecting;
        impl ObservableHost for Rejecting {
            fn is_observable(&self, _: &Value) -> bool {
                false
            }
            fn read(&self, _: &Value) -> Option<Value> {
                None
            }
        }

        let mut matcher = Matcher::with_observables(Rejecting);
        let value = Value::observable(Value::null());
        let err = matcher.check(&value, &parse("observable")).unwrap_err();
        assert_eq!(err.code(), "type_mismatch");

        // Last write wins: the replacement host decides from here on.
        matcher.install_observables(Handles);
        assert!(matcher.check(&value, &parse("observable")).is_ok());
    }
}
