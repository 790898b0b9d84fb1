//! Keyed and path-based access into dynamic values.
//!
//! Paths are slices of [`PathElem`], usually built with the [`path!`](crate::path) macro:
//!
//! ```
//! use jsonbind::{decode_at, path};
//! use serde_json::json;
//!
//! let doc = json!({"user": {"tags": ["a", "b"]}});
//! let tag: String = decode_at(&doc, path!["user", "tags", 1]).unwrap();
//! assert_eq!(tag, "b");
//! ```

use serde_json::{Map, Value};

use crate::cast::cast;
use crate::{Decode, DecodeError};

/// A path element for navigating inside a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathElem<'p> {
    /// Select a key from an object.
    Key(&'p str),
    /// Select an index from an array.
    Index(usize),
}

impl<'p> From<&'p str> for PathElem<'p> {
    fn from(key: &'p str) -> Self {
        Self::Key(key)
    }
}

impl<'p> From<&'p String> for PathElem<'p> {
    fn from(key: &'p String) -> Self {
        Self::Key(key.as_str())
    }
}

impl From<usize> for PathElem<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

fn locate(err: DecodeError, walked: &[PathElem<'_>]) -> DecodeError {
    walked.iter().rev().fold(err, |err, pe| match *pe {
        PathElem::Key(k) => err.at_key(k),
        PathElem::Index(i) => err.at_index(i),
    })
}

/// Traverse `path` inside `value`.
///
/// Returns `Ok(None)` if a key is absent or an index is out of bounds.
///
/// # Errors
///
/// Returns `TypeMismatch` when a key is applied to a non-object or an index to a non-array; the
/// error path names the container that had the wrong shape.
pub fn at<'a>(value: &'a Value, path: &[PathElem<'_>]) -> Result<Option<&'a Value>, DecodeError> {
    let mut cur = value;
    for (depth, pe) in path.iter().enumerate() {
        let next = match *pe {
            PathElem::Key(k) => {
                let object: &Map<String, Value> =
                    cast(cur).map_err(|err| locate(err, &path[..depth]))?;
                object.get(k)
            }
            PathElem::Index(i) => {
                let items: &[Value] = cast(cur).map_err(|err| locate(err, &path[..depth]))?;
                items.get(i)
            }
        };
        match next {
            Some(v) => cur = v,
            None => return Ok(None),
        }
    }
    Ok(Some(cur))
}

/// Decode the value at `path`.
///
/// # Errors
///
/// Returns `MissingKey` (located at the parent) if the path does not resolve, or the decode
/// error of `T` located at `path`.
pub fn decode_at<'de, T: Decode<'de>>(
    value: &'de Value,
    path: &[PathElem<'_>],
) -> Result<T, DecodeError> {
    match at(value, path)? {
        Some(v) => T::decode(v).map_err(|err| locate(err, path)),
        None => Err(missing(path)),
    }
}

/// Decode the value at `path`, treating an absent path or `null` as `None`.
///
/// # Errors
///
/// Returns shape errors from traversal or the decode error of `T` located at `path`.
pub fn decode_opt_at<'de, T: Decode<'de>>(
    value: &'de Value,
    path: &[PathElem<'_>],
) -> Result<Option<T>, DecodeError> {
    match at(value, path)? {
        Some(v) if !v.is_null() => T::decode(v).map(Some).map_err(|err| locate(err, path)),
        _ => Ok(None),
    }
}

fn missing(path: &[PathElem<'_>]) -> DecodeError {
    let Some((last, parent)) = path.split_last() else {
        // An empty path always resolves.
        return DecodeError::missing_key("");
    };
    let err = match *last {
        PathElem::Key(k) => DecodeError::missing_key(k),
        PathElem::Index(i) => DecodeError::missing_key(i.to_string()),
    };
    locate(err, parent)
}

/// Decode the required field `key` of an object.
///
/// # Errors
///
/// `TypeMismatch` if `value` is not an object, `MissingKey` if `key` is absent, or the field's
/// decode error located at `key`.
pub fn field<'de, T: Decode<'de>>(value: &'de Value, key: &str) -> Result<T, DecodeError> {
    let object: &'de Map<String, Value> = cast(value)?;
    let item = object
        .get(key)
        .ok_or_else(|| DecodeError::missing_key(key))?;
    T::decode(item).map_err(|err| err.at_key(key))
}

/// Decode the optional field `key` of an object; absent or `null` yields `None`.
///
/// # Errors
///
/// `TypeMismatch` if `value` is not an object, or the field's decode error located at `key`.
pub fn opt_field<'de, T: Decode<'de>>(
    value: &'de Value,
    key: &str,
) -> Result<Option<T>, DecodeError> {
    let object: &'de Map<String, Value> = cast(value)?;
    match object.get(key) {
        Some(item) if !item.is_null() => T::decode(item).map(Some).map_err(|err| err.at_key(key)),
        _ => Ok(None),
    }
}
