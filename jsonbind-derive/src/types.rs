use proc_macro2::{TokenStream, TokenTree};
use quote::ToTokens;
use syn::{Ident, Type};

/// Whether `ty` is spelled `Option<..>` (by last path segment).
pub(crate) fn is_option_type(ty: &Type) -> bool {
    let Type::Path(tp) = ty else { return false };
    tp.path
        .segments
        .last()
        .is_some_and(|seg| seg.ident == "Option")
}

fn tokens_mention(tokens: TokenStream, ident: &Ident) -> bool {
    tokens.into_iter().any(|tt| match tt {
        TokenTree::Ident(i) => i == *ident || i == "Self",
        TokenTree::Group(g) => tokens_mention(g.stream(), ident),
        TokenTree::Punct(_) | TokenTree::Literal(_) => false,
    })
}

/// Whether `ty` mentions the type being derived anywhere in its spelling.
///
/// Such fields get no `Decode` where-bound, otherwise recursive types like
/// `struct Node { children: Vec<Node> }` would require their own impl to hold.
pub(crate) fn type_mentions_self(ty: &Type, self_ident: &Ident) -> bool {
    tokens_mention(ty.to_token_stream(), self_ident)
}
