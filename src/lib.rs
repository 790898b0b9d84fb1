//! # jsonbind
//!
//! Typed decoding of already-parsed JSON (`serde_json::Value`) into application types.
//!
//! ## Design principles
//!
//! - **One contract.** A type becomes decodable by implementing [`Decode`], a single pure
//!   function from `&Value` to `Result<Self, DecodeError>`. Most application types get it from
//!   `#[derive(Decode)]`.
//! - **Casts never bridge.** The leaf primitive [`cast`] narrows a value to exactly one variant
//!   and borrows the input unchanged; numbers are never strings and strings are never numbers.
//! - **Containers recurse.** `Vec<T>`, maps, and `Option<T>` decode element-wise through their
//!   element types. Sequences can drop undecodable elements ([`ArrayOptions`], [`LossyVec`]);
//!   mappings always fail on the first bad entry.
//! - **Errors are located.** Every [`DecodeError`] carries the path from the root of the input to
//!   the offending value.
//!
//! ## Shape compatibility
//!
//! | Target                                 | Accepted input                              |
//! |----------------------------------------|---------------------------------------------|
//! | `()`                                   | `null`                                      |
//! | `bool`                                 | `true` / `false`                            |
//! | `i8`..`i64`, `u8`..`u64`, `(i/u)size`  | integer numbers that fit (`1.0` is rejected) |
//! | `f64`, `f32`                           | any number (`f32` must stay finite)         |
//! | `String`, `&str`                       | strings                                     |
//! | `char`                                 | one-character strings                       |
//! | `Vec<T>`, `LossyVec<T>`                | arrays                                      |
//! | `HashMap<K, V>`, `BTreeMap<K, V>`      | objects (keys via [`DecodeKey`])            |
//! | `Option<T>`                            | `null` or whatever `T` accepts              |
//! | `Value`, `&Value`                      | anything                                    |
//! | `time::OffsetDateTime`                 | `YYYY-MM-DDTHH:MM:SS(Z\|±HH:MM)` strings     |
//!
//! ## Example
//!
//! ```
//! use jsonbind::{decode, Decode, LossyVec};
//! use serde_json::json;
//!
//! #[derive(Decode, Debug, PartialEq)]
//! struct User {
//!     id: u64,
//!     #[decode(rename = "displayName")]
//!     name: String,
//!     email: Option<String>,
//!     tags: LossyVec<String>,
//! }
//!
//! let doc = json!({"id": 7, "displayName": "ana", "tags": ["a", 1, "b"]});
//! let user: User = decode(&doc).unwrap();
//! assert_eq!(user.name, "ana");
//! assert_eq!(user.email, None);
//! assert_eq!(&*user.tags, ["a", "b"]);
//! ```
//!
//! ## Feature flags
//!
//! - `time` *(default)*: implements [`Decode`] for `time::OffsetDateTime`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod cast;
mod codec;
mod container;
#[cfg(feature = "time")]
mod date;
mod error;
mod kind;
mod query;

pub use crate::cast::{cast, Cast};
pub use crate::codec::{decode, Decode};
pub use crate::container::{
    array_decoder, decode_array_with, decode_map_with, map_decoder, ArrayOptions, DecodeKey,
    LossyVec,
};
pub use crate::error::{DecodeError, ErrorKind, PathSegment};
pub use crate::kind::ValueKind;
pub use crate::query::{at, decode_at, decode_opt_at, field, opt_field, PathElem};

pub use jsonbind_derive::Decode;

/// Re-exports used by `#[derive(Decode)]` expansions.
#[doc(hidden)]
pub mod __private {
    pub use serde_json::{Map, Value};
}

/// Construct a path slice for [`at`], [`decode_at`], and [`decode_opt_at`].
#[macro_export]
macro_rules! path {
    ($($seg:expr),* $(,)?) => {
        &[$($crate::__path_elem!($seg)),*]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __path_elem {
    ($seg:expr) => {
        $crate::PathElem::from($seg)
    };
}
