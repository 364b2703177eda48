//! Value kinds.
//!
//! [`ValueKind`] is a lightweight classification for [`Value`](crate::Value),
//! used by the validator's type registry and in error messages.

use std::fmt;
use std::str::FromStr;

/// The kind/type of a [`Value`](crate::Value).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    Array,
    Object,
    Date,
    Function,
    Observable,
}

impl ValueKind {
    /// Returns all kinds.
    #[must_use]
    pub const fn all() -> [Self; 10] {
        [
            Self::Null,
            Self::Boolean,
            Self::Integer,
            Self::Float,
            Self::Text,
            Self::Array,
            Self::Object,
            Self::Date,
            Self::Function,
            Self::Observable,
        ]
    }

    /// Returns true if this kind is numeric.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Returns true if this kind is a collection.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Returns the canonical lowercase name of this kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Date => "date",
            Self::Function => "function",
            Self::Observable => "observable",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(Self::Null),
            "bool" | "boolean" => Ok(Self::Boolean),
            "int" | "integer" => Ok(Self::Integer),
            "float" | "double" => Ok(Self::Float),
            "string" | "text" => Ok(Self::Text),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            "date" => Ok(Self::Date),
            "function" => Ok(Self::Function),
            "observable" => Ok(Self::Observable),
            _ => Err(()),
        }
    }
}
