//! The pattern model.
//!
//! A [`Pattern`] is a closed tagged variant, resolved once at construction
//! time: either a parsed shorthand [`TokenChain`] or a structured
//! [`ObjectPattern`] with named control fields. Because all parsing happens
//! up front, a `Pattern` handed to the matcher is structurally valid — the
//! recursive walk never re-inspects pattern shape and never raises
//! configuration errors mid-match.
//!
//! Patterns can be built three ways:
//!
//! - [`Pattern::parse`] for the string shorthand;
//! - the [`ObjectPattern`] fluent builder;
//! - [`Pattern::from_value`] for the declarative literal form with reserved
//!   `__type` / `__required` / `__nullable` / `__elements` / `__value` /
//!   `__allowedValues` keys and dotted property shorthand.

mod literal;
mod tokens;

pub use tokens::{Token, TokenChain};

use std::fmt;
use std::str::FromStr;

use shapecheck_value::Value;

use crate::error::PatternError;
use crate::registry::TypeName;

// ============================================================================
// PATTERN
// ============================================================================

/// A declarative description of an expected value shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Parsed string shorthand, e.g. `"optional array number"`.
    Tokens(TokenChain),
    /// Structured object form with control fields and nested patterns.
    Object(ObjectPattern),
}

impl Pattern {
    /// Parses the string shorthand into a pattern.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapecheck_validator::Pattern;
    ///
    /// let p = Pattern::parse("observable string").unwrap();
    /// assert_eq!(p.to_string(), r#""observable string""#);
    /// ```
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        TokenChain::parse(pattern).map(Self::Tokens)
    }
}

impl From<TokenChain> for Pattern {
    fn from(chain: TokenChain) -> Self {
        Self::Tokens(chain)
    }
}

impl From<ObjectPattern> for Pattern {
    fn from(pattern: ObjectPattern) -> Self {
        Self::Object(pattern)
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tokens(chain) => write!(f, "\"{chain}\""),
            Self::Object(pattern) => pattern.fmt(f),
        }
    }
}

// ============================================================================
// FIELD KEYS
// ============================================================================

/// A property key of an object pattern, possibly dotted (`"g.g2"`).
///
/// A dotted key makes the matcher walk the value through each segment before
/// applying the nested pattern to the final segment's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKey {
    raw: String,
    segments: Vec<String>,
}

impl FieldKey {
    /// Parses a (possibly dotted) property key.
    ///
    /// Empty keys and keys with empty segments (`"a..b"`, `".a"`) are
    /// invalid.
    pub fn new(raw: impl Into<String>) -> Result<Self, PatternError> {
        let raw = raw.into();
        let segments: Vec<String> = raw.split('.').map(str::to_owned).collect();
        if raw.is_empty() || segments.iter().any(String::is_empty) {
            return Err(PatternError::InvalidFieldKey(raw));
        }
        Ok(Self { raw, segments })
    }

    /// The key as written in the pattern.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The dot-split segments, in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

// ============================================================================
// OBJECT PATTERN
// ============================================================================

/// The structured pattern form.
///
/// Controls default to the strict interpretation — `required` unless relaxed,
/// non-`nullable` unless declared, type `object` unless named. An
/// allowed-values whitelist, when present, overrides all type checking at
/// this node.
///
/// # Examples
///
/// ```rust
/// use shapecheck_validator::{ObjectPattern, Pattern, TypeName};
///
/// let pattern = ObjectPattern::new()
///     .field("a", Pattern::parse("string").unwrap()).unwrap()
///     .field("c", ObjectPattern::new().of_type(TypeName::Number).optional()).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectPattern {
    type_name: Option<TypeName>,
    required: Option<bool>,
    nullable: Option<bool>,
    allowed: Option<Vec<Value>>,
    elements: Option<Box<Pattern>>,
    value: Option<Box<Pattern>>,
    fields: Vec<(FieldKey, Pattern)>,
}

impl ObjectPattern {
    /// An empty object pattern: type `object`, required, not nullable.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Builder ====================

    /// Declares the effective type of the value at this node.
    #[must_use]
    pub fn of_type(mut self, type_name: TypeName) -> Self {
        self.type_name = Some(type_name);
        self
    }

    /// Relaxes required-ness: an absent value succeeds.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = Some(false);
        self
    }

    /// Declares nullability: a null value succeeds.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = Some(true);
        self
    }

    /// Pattern applied to every element of an `array`-typed value.
    #[must_use]
    pub fn elements(mut self, pattern: impl Into<Pattern>) -> Self {
        self.elements = Some(Box::new(pattern.into()));
        self
    }

    /// Pattern applied to the content of an `observable`-typed value.
    #[must_use]
    pub fn value(mut self, pattern: impl Into<Pattern>) -> Self {
        self.value = Some(Box::new(pattern.into()));
        self
    }

    /// Literal whitelist; overrides all type checking at this node.
    #[must_use]
    pub fn allowed(mut self, values: Vec<Value>) -> Self {
        self.allowed = Some(values);
        self
    }

    /// Adds a property pattern under a (possibly dotted) key.
    pub fn field(
        mut self,
        key: impl Into<String>,
        pattern: impl Into<Pattern>,
    ) -> Result<Self, PatternError> {
        self.fields.push((FieldKey::new(key)?, pattern.into()));
        Ok(self)
    }

    // ==================== Accessors ====================

    /// The effective type of this node (`object` unless declared).
    #[must_use]
    pub fn type_name(&self) -> TypeName {
        self.type_name.unwrap_or(TypeName::Object)
    }

    /// Required-ness (`true` unless relaxed).
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(true)
    }

    /// Nullability (`false` unless declared).
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable.unwrap_or(false)
    }

    /// The allowed-values whitelist, if any.
    #[must_use]
    pub fn allowed_values(&self) -> Option<&[Value]> {
        self.allowed.as_deref()
    }

    /// The array element pattern, if any.
    #[must_use]
    pub fn elements_pattern(&self) -> Option<&Pattern> {
        self.elements.as_deref()
    }

    /// The observable content pattern, if any.
    #[must_use]
    pub fn value_pattern(&self) -> Option<&Pattern> {
        self.value.as_deref()
    }

    /// The property patterns, in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[(FieldKey, Pattern)] {
        &self.fields
    }
}

impl fmt::Display for ObjectPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut sep = "";
        let mut item = |f: &mut fmt::Formatter<'_>, text: String| {
            let r = write!(f, "{sep}{text}");
            sep = ", ";
            r
        };
        if let Some(t) = self.type_name {
            item(f, format!("__type: \"{t}\""))?;
        }
        if let Some(required) = self.required {
            item(f, format!("__required: {required}"))?;
        }
        if let Some(nullable) = self.nullable {
            item(f, format!("__nullable: {nullable}"))?;
        }
        if let Some(allowed) = &self.allowed {
            item(f, format!("__allowedValues: {}", Value::array(allowed.clone())))?;
        }
        if let Some(elements) = &self.elements {
            item(f, format!("__elements: {elements}"))?;
        }
        if let Some(value) = &self.value {
            item(f, format!("__value: {value}"))?;
        }
        for (key, pattern) in &self.fields {
            item(f, format!("\"{}\": {pattern}", key.raw()))?;
        }
        write!(f, "}}")
    }
}

// ============================================================================
// TESTS
// ============================================================================
