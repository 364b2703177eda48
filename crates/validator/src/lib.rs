//! # shapecheck-validator
//!
//! Structural pattern validation for configuration objects and API inputs.
//!
//! A [`Pattern`] declares the expected shape of a value — either as a
//! compact string shorthand (`"array number"`, `"optional observable
//! string"`) or as a structured object form with control fields and dotted
//! property shorthand. The [`Matcher`] recursively verifies a
//! [`Value`](shapecheck_value::Value) against a pattern and reports the
//! first violation with a precise, path-qualified message.
//!
//! ## Quick Start
//!
//! ```rust
//! use shapecheck_validator::{Pattern, check};
//! use shapecheck_value::Value;
//!
//! let pattern = Pattern::from_value(&Value::from(serde_json::json!({
//!     "a": "string",
//!     "b": "number",
//!     "c": {"__required": false, "__type": "number"},
//! }))).unwrap();
//!
//! let config = Value::from(serde_json::json!({"a": "s", "b": 5}));
//! assert!(check(&config, &pattern).is_ok());
//!
//! let config = Value::from(serde_json::json!({"a": "s", "b": "5"}));
//! let err = check(&config, &pattern).unwrap_err();
//! assert_eq!(err.to_string(), "configObject.b should have number type!");
//! ```
//!
//! ## Observables
//!
//! Patterns may declare `observable` types — reactive wrapper values read
//! through a zero-argument unwrap. Observable checking is a capability the
//! embedding application installs on the matcher
//! ([`Matcher::with_observables`]); without it, any `observable` check
//! fails with a capability error.
//!
//! ```rust
//! use shapecheck_validator::{Matcher, Pattern};
//! use shapecheck_value::{Handles, Value};
//!
//! let matcher = Matcher::with_observables(Handles);
//! let pattern = Pattern::parse("observable number").unwrap();
//! assert!(matcher.check(&Value::observable(Value::integer(3)), &pattern).is_ok());
//! ```
//!
//! Matching is pure: no I/O, no shared mutable state, fail-fast on the
//! first violation.

pub mod error;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod prelude;
pub mod registry;

pub use error::{PatternError, ValidationError};
pub use matcher::{Matcher, check, check_named};
pub use path::{DEFAULT_ROOT, ValuePath};
pub use pattern::{FieldKey, ObjectPattern, Pattern, Token, TokenChain};
pub use registry::TypeName;
