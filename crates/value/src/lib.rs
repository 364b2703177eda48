//! # shapecheck-value
//!
//! The dynamic value model the shapecheck validator operates on.
//!
//! A [`Value`] can represent any datum a configuration object or API input
//! may carry: the JSON-like data variants (null, booleans, numbers, text,
//! arrays, objects) plus the three host-flavoured variants the validator's
//! type registry knows about — dates, opaque callables ([`Function`]) and
//! reactive wrappers ([`Observable`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use shapecheck_value::{Value, ValueKind};
//!
//! let v = Value::from(serde_json::json!({"a": "some string", "b": 42}));
//! assert_eq!(v.kind(), ValueKind::Object);
//! assert_eq!(v.get("b").unwrap().kind(), ValueKind::Integer);
//! ```
//!
//! ## Observables
//!
//! An [`Observable`] is an opaque zero-argument readable handle, the
//! in-process stand-in for a host's reactive wrapper. The validator never
//! touches the handle directly; it goes through an [`ObservableHost`]
//! capability, so a different host representation can be plugged in without
//! changing the matcher.

pub mod convert;
pub mod function;
pub mod kind;
pub mod observable;
pub mod value;

pub use convert::JsonConvertError;
pub use function::Function;
pub use kind::ValueKind;
pub use observable::{Handles, Observable, ObservableHost};
pub use value::Value;
