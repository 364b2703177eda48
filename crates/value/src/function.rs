//! Opaque callable handles.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

type Callable = dyn Fn(&[Value]) -> Value + Send + Sync;

/// An opaque callable carried inside a [`Value`](crate::Value).
///
/// The validator only ever asks "is this a function?"; it never calls the
/// handle. The call surface exists so hosts can round-trip their callbacks
/// through a validated configuration object.
///
/// Two handles are equal only if they are the same handle
/// (see [`Function::same_handle`]).
#[derive(Clone)]
pub struct Function {
    inner: Arc<Callable>,
}

impl Function {
    /// Wraps a closure into a function handle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapecheck_value::{Function, Value};
    ///
    /// let f = Function::new(|args| Value::integer(args.len() as i64));
    /// assert_eq!(f.call(&[Value::null()]), Value::integer(1));
    /// ```
    pub fn new(f: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Self { inner: Arc::new(f) }
    }

    /// A no-op function handle, convenient in tests.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|_| Value::Null)
    }

    /// Invokes the underlying callable.
    #[must_use]
    pub fn call(&self, args: &[Value]) -> Value {
        (self.inner)(args)
    }

    /// Returns true if both handles point at the same callable.
    #[must_use]
    pub fn same_handle(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function(<opaque>)")
    }
}
