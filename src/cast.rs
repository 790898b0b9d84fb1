//! The dynamic cast primitive.
//!
//! A cast narrows a `&Value` to one concrete variant without copying: on success the result
//! borrows the exact data held by the input. Casts never bridge between variants, so a number is
//! never accepted where a string is expected and vice versa.

use serde_json::{Map, Number, Value};

use crate::DecodeError;

/// A variant-level view of a dynamic value.
pub trait Cast<'a>: Sized {
    /// Name of the accepted shape, reported in `TypeMismatch` errors.
    const EXPECTED: &'static str;

    /// Returns the narrowed view, or `None` if `value` has a different variant.
    fn try_cast(value: &'a Value) -> Option<Self>;
}

/// Narrow `value` to `T`.
///
/// # Errors
///
/// Returns `TypeMismatch` carrying `T::EXPECTED` and the runtime shape of `value`.
#[inline]
pub fn cast<'a, T: Cast<'a>>(value: &'a Value) -> Result<T, DecodeError> {
    T::try_cast(value).ok_or_else(|| DecodeError::type_mismatch(T::EXPECTED, value))
}

impl<'a> Cast<'a> for () {
    const EXPECTED: &'static str = "null";

    fn try_cast(value: &'a Value) -> Option<Self> {
        value.is_null().then_some(())
    }
}

impl<'a> Cast<'a> for bool {
    const EXPECTED: &'static str = "bool";

    fn try_cast(value: &'a Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> Cast<'a> for &'a Number {
    const EXPECTED: &'static str = "number";

    fn try_cast(value: &'a Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl<'a> Cast<'a> for &'a str {
    const EXPECTED: &'static str = "string";

    fn try_cast(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> Cast<'a> for &'a String {
    const EXPECTED: &'static str = "string";

    fn try_cast(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> Cast<'a> for &'a [Value] {
    const EXPECTED: &'static str = "array";

    fn try_cast(value: &'a Value) -> Option<Self> {
        value.as_array().map(Vec::as_slice)
    }
}

impl<'a> Cast<'a> for &'a Vec<Value> {
    const EXPECTED: &'static str = "array";

    fn try_cast(value: &'a Value) -> Option<Self> {
        value.as_array()
    }
}

impl<'a> Cast<'a> for &'a Map<String, Value> {
    const EXPECTED: &'static str = "object";

    fn try_cast(value: &'a Value) -> Option<Self> {
        value.as_object()
    }
}

impl<'a> Cast<'a> for &'a Value {
    const EXPECTED: &'static str = "any value";

    fn try_cast(value: &'a Value) -> Option<Self> {
        Some(value)
    }
}
