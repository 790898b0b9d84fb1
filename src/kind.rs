use core::fmt;

use serde_json::Value;

/// The runtime shape of a dynamic JSON value.
///
/// Numbers are split by representation: a number that serde_json holds as an `i64` or `u64` is an
/// [`ValueKind::Integer`], anything else (including `1.0`) is a [`ValueKind::Float`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `null`.
    Null,
    /// `true` / `false`.
    Bool,
    /// A number held as `i64` or `u64`.
    Integer,
    /// A number held as `f64`.
    Float,
    /// A text string.
    String,
    /// An ordered sequence of values.
    Array,
    /// A string-keyed mapping of values.
    Object,
}

impl ValueKind {
    /// Classify `value`.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) => {
                if n.is_f64() {
                    Self::Float
                } else {
                    Self::Integer
                }
            }
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Short lowercase name, as used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
