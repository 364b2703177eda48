//! Accumulated value paths for error messages.
//!
//! A [`ValuePath`] is the human-readable locator of the sub-value currently
//! being matched: descending into an object property appends `.prop`, into
//! an array element `[index]`, and through an observable's content `()`.
//! Paths are purely presentational — they carry no matching state.

use std::fmt;

/// The root name used when the caller does not supply one.
pub const DEFAULT_ROOT: &str = "configObject";

/// An accumulated, human-readable path to a sub-value.
///
/// # Examples
///
/// ```rust
/// use shapecheck_validator::path::ValuePath;
///
/// let path = ValuePath::root("configObject").child("d").index(1);
/// assert_eq!(path.as_str(), "configObject.d[1]");
///
/// let path = ValuePath::root("configObject").child("f").unwrapped();
/// assert_eq!(path.as_str(), "configObject.f()");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuePath(String);

impl ValuePath {
    /// Starts a path at the given root name.
    pub fn root(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Appends an object property segment (`.prop`).
    #[must_use]
    pub fn child(&self, prop: &str) -> Self {
        Self(format!("{}.{prop}", self.0))
    }

    /// Appends an array element segment (`[index]`).
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    /// Appends the observable unwrap marker (`()`).
    #[must_use]
    pub fn unwrapped(&self) -> Self {
        Self(format!("{}()", self.0))
    }

    /// The path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ValuePath {
    fn default() -> Self {
        Self::root(DEFAULT_ROOT)
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn segments_accumulate_in_order() {
        let path = ValuePath::root("cfg")
            .child("g")
            .child("g2")
            .index(0)
            .unwrapped();
        assert_eq!(path.as_str(), "cfg.g.g2[0]()");
    }

    #[test]
    fn default_root_name() {
        assert_eq!(ValuePath::default().as_str(), "configObject");
    }
}
