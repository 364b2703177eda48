//! The unified [`Value`] enum.
//!
//! This is the central type of the crate: a single enum covering every
//! runtime shape the validator can be asked about. Data variants compare
//! structurally; the opaque handle variants ([`Function`], [`Observable`])
//! compare by identity, which is what allowed-value whitelists expect.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::function::Function;
use crate::kind::ValueKind;
use crate::observable::Observable;

/// A dynamically typed runtime value.
///
/// # Examples
///
/// ```rust
/// use shapecheck_value::Value;
///
/// let v = Value::text("hello");
/// assert!(v.is_text());
///
/// let v = Value::from(serde_json::json!([1, 2, 3]));
/// assert_eq!(v.as_array().unwrap().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Null / absent-by-value.
    #[default]
    Null,

    /// Boolean value.
    Boolean(bool),

    /// Integer number (i64).
    Integer(i64),

    /// Floating point number (f64).
    Float(f64),

    /// UTF-8 text string.
    Text(String),

    /// Array of values.
    Array(Vec<Value>),

    /// Object (key-value map, ordered by key).
    Object(BTreeMap<String, Value>),

    /// Calendar date (year, month, day).
    Date(NaiveDate),

    /// Opaque callable handle.
    Function(Function),

    /// Reactive wrapper handle; read through an
    /// [`ObservableHost`](crate::ObservableHost).
    Observable(Observable),
}

impl Value {
    // ==================== Constructors ====================

    /// Creates a null value.
    #[must_use]
    pub const fn null() -> Self {
        Self::Null
    }

    /// Creates a boolean value.
    #[must_use]
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Creates an integer value.
    #[must_use]
    pub const fn integer(v: i64) -> Self {
        Self::Integer(v)
    }

    /// Creates a float value.
    #[must_use]
    pub const fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Creates a text value from a `String` or `&str`.
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// Creates an array value.
    #[must_use]
    pub fn array(v: Vec<Value>) -> Self {
        Self::Array(v)
    }

    /// Creates an empty object value.
    #[must_use]
    pub fn object_empty() -> Self {
        Self::Object(BTreeMap::new())
    }

    /// Creates an object value from key-value pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Creates a date value.
    #[must_use]
    pub const fn date(v: NaiveDate) -> Self {
        Self::Date(v)
    }

    /// Creates a function value.
    #[must_use]
    pub const fn function(v: Function) -> Self {
        Self::Function(v)
    }

    /// Creates an observable value holding a fixed content.
    ///
    /// Shorthand for `Value::Observable(Observable::of(content))`.
    #[must_use]
    pub fn observable(content: Value) -> Self {
        Self::Observable(Observable::of(content))
    }

    // ==================== Type queries ====================

    /// Returns the kind of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::Date(_) => ValueKind::Date,
            Self::Function(_) => ValueKind::Function,
            Self::Observable(_) => ValueKind::Observable,
        }
    }

    /// Returns true if this is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if this is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Returns true if this is an integer or a float.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Returns true if this is a text string.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns true if this is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns true if this is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns true if this is a date.
    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Returns true if this is a function handle.
    #[inline]
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns true if this is an observable handle.
    #[inline]
    #[must_use]
    pub const fn is_observable(&self) -> bool {
        matches!(self, Self::Observable(_))
    }

    // ==================== Accessors ====================

    /// Returns the boolean content, if any.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the numeric content widened to f64, if any.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the text content, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array content, if any.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the object content, if any.
    #[must_use]
    pub const fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the observable handle, if any.
    #[must_use]
    pub const fn as_observable(&self) -> Option<&Observable> {
        match self {
            Self::Observable(o) => Some(o),
            _ => None,
        }
    }

    /// Looks up a property on an object value.
    ///
    /// Returns `None` both when the property is missing and when the value
    /// is not an object; use [`Value::is_object`] to tell the cases apart.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(o) => o.get(key),
            _ => None,
        }
    }
}

// ============================================================================
// EQUALITY
// ============================================================================

// Structural equality for data variants, numeric equality across
// Integer/Float, handle identity for Function/Observable. This is the
// equality consulted by allowed-value whitelists.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Integer(a), Self::Float(b)) | (Self::Float(b), Self::Integer(a)) => {
                *a as f64 == *b
            }
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a.same_handle(b),
            (Self::Observable(a), Self::Observable(b)) => a.same_handle(b),
            _ => false,
        }
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Object(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                write!(f, "}}")
            }
            Self::Date(d) => write!(f, "{d}"),
            Self::Function(_) => write!(f, "<function>"),
            Self::Observable(_) => write!(f, "<observable>"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
