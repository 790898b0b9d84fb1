//! Sequence and mapping decoders derived from element decoders.

use core::ops::Deref;

use serde_json::{Map, Value};

use crate::cast::cast;
use crate::{Decode, DecodeError, ErrorKind, ValueKind};

/// Sequence decoding options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrayOptions {
    /// Drop elements that fail to decode instead of failing the whole sequence.
    pub ignore_invalid_objects: bool,
}

impl ArrayOptions {
    /// Options that drop undecodable elements.
    #[must_use]
    pub const fn lossy() -> Self {
        Self {
            ignore_invalid_objects: true,
        }
    }
}

/// Decode an array, decoding each element with `decode_elem` in input order.
///
/// With `ignore_invalid_objects` unset, the first element failure is returned with its index
/// prepended to the error path and no partial result is produced. With it set, failing elements
/// are dropped and the result keeps the remaining elements in their original order.
///
/// # Errors
///
/// Returns `TypeMismatch` if `value` is not an array, or the first element error in strict mode.
pub fn decode_array_with<'de, E, F>(
    value: &'de Value,
    mut decode_elem: F,
    options: ArrayOptions,
) -> Result<Vec<E>, DecodeError>
where
    F: FnMut(&'de Value) -> Result<E, DecodeError>,
{
    let items: &'de [Value] = cast(value)?;
    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        match decode_elem(item) {
            Ok(v) => out.push(v),
            Err(err) if options.ignore_invalid_objects => {
                tracing::debug!(index = idx, error = %err, "dropping undecodable array element");
            }
            Err(err) => return Err(err.at_index(idx)),
        }
    }
    Ok(out)
}

/// Build a reusable sequence decoder from an element decoder.
pub fn array_decoder<'de, E, F>(
    decode_elem: F,
    options: ArrayOptions,
) -> impl Fn(&'de Value) -> Result<Vec<E>, DecodeError>
where
    F: Fn(&'de Value) -> Result<E, DecodeError>,
{
    move |value| decode_array_with(value, &decode_elem, options)
}

/// Object keys that can be decoded from their text form.
pub trait DecodeKey<'de>: Sized {
    /// Decode an object key.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` (actual `string`) if the key text does not parse. Integer keys
    /// must be canonical decimal text, so `"+1"` and `"01"` are rejected.
    fn decode_key(key: &'de str) -> Result<Self, DecodeError>;
}

fn key_mismatch(expected: &'static str) -> DecodeError {
    DecodeError::new(ErrorKind::TypeMismatch {
        expected,
        actual: ValueKind::String,
    })
}

impl<'de> DecodeKey<'de> for &'de str {
    fn decode_key(key: &'de str) -> Result<Self, DecodeError> {
        Ok(key)
    }
}

impl DecodeKey<'_> for String {
    fn decode_key(key: &str) -> Result<Self, DecodeError> {
        Ok(key.to_string())
    }
}

impl DecodeKey<'_> for char {
    fn decode_key(key: &str) -> Result<Self, DecodeError> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(key_mismatch("single-character key")),
        }
    }
}

impl DecodeKey<'_> for bool {
    fn decode_key(key: &str) -> Result<Self, DecodeError> {
        match key {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(key_mismatch("bool key")),
        }
    }
}

macro_rules! decode_int_key {
    ($($ty:ty),*) => {$(
        impl DecodeKey<'_> for $ty {
            fn decode_key(key: &str) -> Result<Self, DecodeError> {
                let mismatch = || key_mismatch(concat!(stringify!($ty), " key"));
                let n: $ty = key.parse().map_err(|_| mismatch())?;
                // Only canonical decimal text: no `+`, no leading zeros, no `-0`.
                if n.to_string() == key {
                    Ok(n)
                } else {
                    Err(mismatch())
                }
            }
        }
    )*};
}

decode_int_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Decode an object, decoding every key and every value independently.
///
/// Entries are visited in document order. If two keys decode to equal values the later entry
/// replaces the earlier one. There is no lossy mode: the first key or value failure is returned
/// with the offending key prepended to its path.
///
/// # Errors
///
/// Returns `TypeMismatch` if `value` is not an object, or the first key/value error.
pub fn decode_map_with<'de, K, V, M, FK, FV>(
    value: &'de Value,
    mut decode_key: FK,
    mut decode_value: FV,
) -> Result<M, DecodeError>
where
    M: Default + Extend<(K, V)>,
    FK: FnMut(&'de str) -> Result<K, DecodeError>,
    FV: FnMut(&'de Value) -> Result<V, DecodeError>,
{
    let object: &'de Map<String, Value> = cast(value)?;
    let mut out = M::default();
    for (key, item) in object {
        let k = decode_key(key.as_str()).map_err(|err| err.at_key(key.as_str()))?;
        let v = decode_value(item).map_err(|err| err.at_key(key.as_str()))?;
        out.extend(core::iter::once((k, v)));
    }
    Ok(out)
}

/// Build a reusable mapping decoder from a key decoder and a value decoder.
pub fn map_decoder<'de, K, V, M, FK, FV>(
    decode_key: FK,
    decode_value: FV,
) -> impl Fn(&'de Value) -> Result<M, DecodeError>
where
    M: Default + Extend<(K, V)>,
    FK: Fn(&'de str) -> Result<K, DecodeError>,
    FV: Fn(&'de Value) -> Result<V, DecodeError>,
{
    move |value| decode_map_with(value, &decode_key, &decode_value)
}

/// A sequence that silently drops elements failing to decode.
///
/// Usable wherever a `Decode` type is expected, e.g. as a struct field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LossyVec<T>(pub Vec<T>);

impl<T> LossyVec<T> {
    /// Unwrap into the decoded elements.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for LossyVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<LossyVec<T>> for Vec<T> {
    fn from(value: LossyVec<T>) -> Self {
        value.0
    }
}

impl<'de, T: Decode<'de>> Decode<'de> for LossyVec<T> {
    fn decode(value: &'de Value) -> Result<Self, DecodeError> {
        decode_array_with(value, T::decode, ArrayOptions::lossy()).map(Self)
    }
}
