//! Prelude module for convenient imports.
//!
//! Provides a single `use shapecheck_validator::prelude::*;` import that
//! brings in the matcher, the pattern model, and the error types.
//!
//! # Examples
//!
//! ```rust
//! use shapecheck_validator::prelude::*;
//!
//! let pattern = Pattern::parse("optional array number").unwrap();
//! let value = Value::from(serde_json::json!([1, 2, 3]));
//! assert!(check(&value, &pattern).is_ok());
//! ```

pub use crate::error::{PatternError, ValidationError};
pub use crate::matcher::{Matcher, check, check_named};
pub use crate::path::{DEFAULT_ROOT, ValuePath};
pub use crate::pattern::{FieldKey, ObjectPattern, Pattern, Token, TokenChain};
pub use crate::registry::TypeName;

pub use shapecheck_value::{Function, Handles, Observable, ObservableHost, Value, ValueKind};
