//! Observable handles and the host capability seam.
//!
//! An [`Observable`] is an opaque zero-argument readable: the in-process
//! stand-in for a host's reactive wrapper value. The validator never reads
//! a handle directly — it goes
//! through an [`ObservableHost`], a capability the embedding application
//! installs once on the matcher. [`Handles`] is the ready-made host that
//! recognizes `Value::Observable` handles; an application bridging to a real
//! reactive runtime supplies its own implementation instead.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

type Reader = dyn Fn() -> Value + Send + Sync;

// ============================================================================
// OBSERVABLE HANDLE
// ============================================================================

/// An opaque zero-argument readable handle.
///
/// Reading (`get`) returns the current wrapped content. Two handles are
/// equal only if they are the same handle.
///
/// # Examples
///
/// ```rust
/// use shapecheck_value::{Observable, Value};
///
/// let obs = Observable::of(Value::integer(3));
/// assert_eq!(obs.get(), Value::integer(3));
/// ```
#[derive(Clone)]
pub struct Observable {
    read: Arc<Reader>,
}

impl Observable {
    /// Wraps a read closure into an observable handle.
    pub fn new(read: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self {
            read: Arc::new(read),
        }
    }

    /// An observable holding a fixed content.
    #[must_use]
    pub fn of(content: Value) -> Self {
        Self::new(move || content.clone())
    }

    /// Reads the current wrapped content.
    #[must_use]
    pub fn get(&self) -> Value {
        (self.read)()
    }

    /// Returns true if both handles point at the same reader.
    #[must_use]
    pub fn same_handle(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.read, &other.read)
    }
}

impl fmt::Debug for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Observable(<opaque>)")
    }
}

// ============================================================================
// HOST CAPABILITY
// ============================================================================

/// Host capability for recognizing and unwrapping observable values.
///
/// The matcher consults this on every `observable` type check. Installing a
/// host is a one-time construction concern; matching itself never mutates
/// the capability.
pub trait ObservableHost: Send + Sync {
    /// Returns true if the host recognizes `value` as an observable wrapper.
    fn is_observable(&self, value: &Value) -> bool;

    /// Unwraps the current content of an observable value.
    ///
    /// Returns `None` when `value` is not recognized; callers are expected
    /// to check [`ObservableHost::is_observable`] first.
    fn read(&self, value: &Value) -> Option<Value>;
}

/// The built-in host: recognizes [`Value::Observable`] handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Handles;

impl ObservableHost for Handles {
    fn is_observable(&self, value: &Value) -> bool {
        value.is_observable()
    }

    fn read(&self, value: &Value) -> Option<Value> {
        value.as_observable().map(Observable::get)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn of_returns_the_held_content() {
        let obs = Observable::of(Value::text("hi"));
        assert_eq!(obs.get(), Value::text("hi"));
        assert_eq!(obs.get(), Value::text("hi"));
    }

    #[test]
    fn handles_host_recognizes_only_observable_values() {
        let host = Handles;
        assert!(host.is_observable(&Value::observable(Value::integer(1))));
        assert!(!host.is_observable(&Value::integer(1)));
        assert_eq!(host.read(&Value::integer(1)), None);
    }

    #[test]
    fn handles_host_reads_through_the_wrapper() {
        let host = Handles;
        let v = Value::observable(Value::text("inner"));
        assert_eq!(host.read(&v), Some(Value::text("inner")));
    }
}
