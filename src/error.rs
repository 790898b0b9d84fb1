use core::fmt;

use serde_json::Value;

use crate::kind::ValueKind;

/// One step of the location at which a decode error was detected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key.
    Key(String),
    /// An array index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => write!(f, ".{k}"),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// The reason a value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The value's runtime shape is not compatible with the target type.
    TypeMismatch {
        /// Name of the expected shape or type.
        expected: &'static str,
        /// Shape that was actually found.
        actual: ValueKind,
    },
    /// A required object key was absent.
    MissingKey {
        /// The missing key.
        key: String,
    },
    /// An array had the wrong number of elements for a fixed-arity target.
    LengthMismatch {
        /// Required length.
        expected: usize,
        /// Length found.
        actual: usize,
    },
    /// A string did not name any variant of a raw-value enum.
    UnknownVariant {
        /// The unrecognised string.
        value: String,
    },
    /// An integer did not fit the target type.
    OutOfRange {
        /// Name of the target type.
        expected: &'static str,
        /// The offending number, as written.
        value: String,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, actual } => {
                write!(f, "type mismatch: expected {expected}, found {actual}")
            }
            Self::MissingKey { key } => write!(f, "missing key `{key}`"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected array of length {expected}, found length {actual}")
            }
            Self::UnknownVariant { value } => write!(f, "unknown variant `{value}`"),
            Self::OutOfRange { expected, value } => {
                write!(f, "number {value} out of range for {expected}")
            }
        }
    }
}

/// Error returned when a dynamic value cannot be decoded into the requested type.
///
/// Errors are created at the leaf that failed with an empty path; container decoders prepend
/// the key or index they were visiting as the error propagates outwards, so [`DecodeError::path`]
/// reads from the root of the input down to the offending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    kind: ErrorKind,
    path: Vec<PathSegment>,
}

impl DecodeError {
    /// Construct an error of `kind` at the root.
    #[inline]
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    /// `TypeMismatch` between `expected` and the runtime shape of `found`.
    #[must_use]
    pub fn type_mismatch(expected: &'static str, found: &Value) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            expected,
            actual: ValueKind::of(found),
        })
    }

    /// `MissingKey` for `key`.
    #[must_use]
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingKey { key: key.into() })
    }

    /// `LengthMismatch` for a fixed-arity array.
    #[inline]
    #[must_use]
    pub const fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::LengthMismatch { expected, actual })
    }

    /// `UnknownVariant` for a raw-value enum.
    #[must_use]
    pub fn unknown_variant(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownVariant {
            value: value.into(),
        })
    }

    /// `OutOfRange` for an integer that does not fit `expected`.
    #[must_use]
    pub fn out_of_range(expected: &'static str, value: impl fmt::Display) -> Self {
        Self::new(ErrorKind::OutOfRange {
            expected,
            value: value.to_string(),
        })
    }

    /// Prepend an object key to the error path.
    #[must_use]
    pub fn at_key(mut self, key: impl Into<String>) -> Self {
        self.path.insert(0, PathSegment::Key(key.into()));
        self
    }

    /// Prepend an array index to the error path.
    #[must_use]
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.insert(0, PathSegment::Index(index));
        self
    }

    /// The reason for the failure.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Location of the offending value, from the root of the input.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Returns true iff this is a `TypeMismatch`.
    #[inline]
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeMismatch { .. })
    }

    /// Returns true iff this is a `MissingKey`.
    #[inline]
    #[must_use]
    pub const fn is_missing_key(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingKey { .. })
    }
}

impl From<ErrorKind> for DecodeError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decode failed: {}", self.kind)?;
        if !self.path.is_empty() {
            f.write_str(" at $")?;
            for seg in &self.path {
                write!(f, "{seg}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for DecodeError {}
