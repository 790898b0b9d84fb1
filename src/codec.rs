use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde_json::{Number, Value};

use crate::cast::cast;
use crate::container::{decode_array_with, decode_map_with, ArrayOptions, DecodeKey};
use crate::{DecodeError, ValueKind};

/// Types that can be constructed from a dynamic JSON value.
///
/// Implementations must be pure: decoding the same input twice yields equal results, and the
/// input is never modified. The `'de` lifetime lets implementations borrow from the input
/// (`&'de str`, `&'de Value`).
pub trait Decode<'de>: Sized {
    /// Decode `value` into `Self`.
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` describing the expected and actual shape, located by path.
    fn decode(value: &'de Value) -> Result<Self, DecodeError>;
}

/// Decode `value` into `T`.
///
/// # Errors
///
/// Returns the error produced by `T::decode`.
#[inline]
pub fn decode<'de, T: Decode<'de>>(value: &'de Value) -> Result<T, DecodeError> {
    T::decode(value)
}

impl<'de> Decode<'de> for () {
    fn decode(value: &'de Value) -> Result<Self, DecodeError> {
        cast(value)
    }
}

impl<'de> Decode<'de> for bool {
    fn decode(value: &'de Value) -> Result<Self, DecodeError> {
        cast(value)
    }
}

fn integer<'de>(value: &'de Value, expected: &'static str) -> Result<&'de Number, DecodeError> {
    let n: &Number = cast(value)?;
    if n.is_f64() {
        return Err(DecodeError::type_mismatch(expected, value));
    }
    Ok(n)
}

macro_rules! decode_signed {
    ($($ty:ty),*) => {$(
        impl<'de> Decode<'de> for $ty {
            fn decode(value: &'de Value) -> Result<Self, DecodeError> {
                let n = integer(value, stringify!($ty))?;
                n.as_i64()
                    .and_then(|v| Self::try_from(v).ok())
                    .ok_or_else(|| DecodeError::out_of_range(stringify!($ty), n))
            }
        }
    )*};
}

macro_rules! decode_unsigned {
    ($($ty:ty),*) => {$(
        impl<'de> Decode<'de> for $ty {
            fn decode(value: &'de Value) -> Result<Self, DecodeError> {
                let n = integer(value, stringify!($ty))?;
                n.as_u64()
                    .and_then(|v| Self::try_from(v).ok())
                    .ok_or_else(|| DecodeError::out_of_range(stringify!($ty), n))
            }
        }
    )*};
}

decode_signed!(i8, i16, i32, i64, isize);
decode_unsigned!(u8, u16, u32, u64, usize);

impl<'de> Decode<'de> for f64 {
    fn decode(value: &'de Value) -> Result<Self, DecodeError> {
        let n: &Number = cast(value)?;
        n.as_f64()
            .ok_or_else(|| DecodeError::out_of_range("f64", n))
    }
}

impl<'de> Decode<'de> for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn decode(value: &'de Value) -> Result<Self, DecodeError> {
        let n: &Number = cast(value)?;
        let narrowed = n.as_f64().map(|v| v as Self);
        narrowed
            .filter(|v| v.is_finite())
            .ok_or_else(|| DecodeError::out_of_range("f32", n))
    }
}

impl<'de> Decode<'de> for &'de str {
    fn decode(value: &'de Value) -> Result<Self, DecodeError> {
        cast(value)
    }
}

impl Decode<'_> for String {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        cast::<&str>(value).map(str::to_string)
    }
}

impl Decode<'_> for char {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let s: &str = cast(value)?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(DecodeError::type_mismatch("single-character string", value)),
        }
    }
}

impl<'de> Decode<'de> for &'de Value {
    fn decode(value: &'de Value) -> Result<Self, DecodeError> {
        Ok(value)
    }
}

impl Decode<'_> for Value {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        Ok(value.clone())
    }
}

impl<'de, T: Decode<'de>> Decode<'de> for Option<T> {
    fn decode(value: &'de Value) -> Result<Self, DecodeError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::decode(value).map(Some)
        }
    }
}

impl<'de, T: Decode<'de>> Decode<'de> for Box<T> {
    fn decode(value: &'de Value) -> Result<Self, DecodeError> {
        T::decode(value).map(Self::new)
    }
}

impl<'de, T: Decode<'de>> Decode<'de> for Vec<T> {
    fn decode(value: &'de Value) -> Result<Self, DecodeError> {
        decode_array_with(value, T::decode, ArrayOptions::default())
    }
}

impl<'de, K, V, S> Decode<'de> for HashMap<K, V, S>
where
    K: DecodeKey<'de> + Eq + Hash,
    V: Decode<'de>,
    S: BuildHasher + Default,
{
    fn decode(value: &'de Value) -> Result<Self, DecodeError> {
        decode_map_with(value, K::decode_key, V::decode)
    }
}

impl<'de, K, V> Decode<'de> for BTreeMap<K, V>
where
    K: DecodeKey<'de> + Ord,
    V: Decode<'de>,
{
    fn decode(value: &'de Value) -> Result<Self, DecodeError> {
        decode_map_with(value, K::decode_key, V::decode)
    }
}

impl Decode<'_> for ValueKind {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        Ok(Self::of(value))
    }
}
