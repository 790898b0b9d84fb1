//! `#[derive(Decode)]` for the `jsonbind` crate.
//!
//! - Named-field structs decode from objects; `Option` and `#[decode(default)]` fields tolerate
//!   absent keys, `#[decode(skip)]` fields are always defaulted, `#[decode(rename = "..")]`
//!   changes the key. Unknown keys are ignored.
//! - Newtype structs decode transparently from their inner value.
//! - Tuple structs decode from arrays of exactly their arity.
//! - Unit structs decode from `null`.
//! - Enums with only unit variants decode from their variant name as a string.

extern crate proc_macro;

mod attrs;
mod decode;
mod types;

use proc_macro::TokenStream;
use syn::{parse_macro_input, Data, DeriveInput};

use crate::decode::{decode_enum, decode_struct};

#[proc_macro_derive(Decode, attributes(decode))]
pub fn derive_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let out = match &input.data {
        Data::Struct(data) => decode_struct(&input.ident, &input.generics, data),
        Data::Enum(data) => decode_enum(&input.ident, &input.generics, data),
        Data::Union(u) => Err(syn::Error::new(
            u.union_token.span,
            "Decode not supported for unions",
        )),
    };
    TokenStream::from(out.unwrap_or_else(syn::Error::into_compile_error))
}
