use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse_quote, spanned::Spanned, DataEnum, DataStruct, Fields, FieldsNamed, FieldsUnnamed,
    GenericParam, Generics, Ident, Lifetime, LifetimeParam, LitStr, Type, WhereClause,
};

use crate::attrs::{options, Site};
use crate::types::{is_option_type, type_mentions_self};

fn add_where_bound(wc: &mut WhereClause, ty: &Type, bound: TokenStream) {
    wc.predicates.push(parse_quote!(#ty: #bound));
}

/// Prepend a fresh `'__de` lifetime, outliving every lifetime the type already declares.
fn decode_lifetime(generics: &Generics) -> (Generics, Lifetime) {
    let mut out = generics.clone();
    let mut name = "__de".to_string();
    let mut counter = 0usize;
    while out
        .lifetimes()
        .any(|lt| lt.lifetime.ident == name.as_str())
    {
        counter += 1;
        name = format!("__de{counter}");
    }
    let lt = Lifetime::new(&format!("'{name}"), proc_macro2::Span::call_site());
    out.params
        .insert(0, GenericParam::Lifetime(LifetimeParam::new(lt.clone())));

    let wc = out.make_where_clause();
    for lifetime in generics.lifetimes() {
        let lt_ident = &lifetime.lifetime;
        wc.predicates.push(parse_quote!(#lt: #lt_ident));
    }

    (out, lt)
}

fn wrap_impl(
    name: &Ident,
    generics: &Generics,
    body: TokenStream,
    bounds: WhereBounds,
) -> TokenStream {
    let WhereBounds {
        generics: impl_generics2,
        lifetime: decode_lt,
        clause,
    } = bounds;
    let (impl_generics, _, _) = impl_generics2.split_for_impl();
    let (_, ty_generics, _) = generics.split_for_impl();
    quote! {
        impl #impl_generics ::jsonbind::Decode<#decode_lt> for #name #ty_generics #clause {
            fn decode(
                value: &#decode_lt ::jsonbind::__private::Value,
            ) -> ::core::result::Result<Self, ::jsonbind::DecodeError> {
                #body
            }
        }
    }
}

struct WhereBounds {
    generics: Generics,
    lifetime: Lifetime,
    clause: WhereClause,
}

impl WhereBounds {
    fn new(generics: &Generics) -> Self {
        let (generics, lifetime) = decode_lifetime(generics);
        let clause = generics.where_clause.clone().unwrap_or_else(|| WhereClause {
            where_token: Default::default(),
            predicates: Default::default(),
        });
        Self {
            generics,
            lifetime,
            clause,
        }
    }

    fn require_decode(&mut self, name: &Ident, ty: &Type) {
        if !type_mentions_self(ty, name) {
            let lt = &self.lifetime;
            add_where_bound(&mut self.clause, ty, quote!(::jsonbind::Decode<#lt>));
        }
    }

    fn require_default(&mut self, ty: &Type) {
        add_where_bound(&mut self.clause, ty, quote!(::core::default::Default));
    }
}

fn decode_named_fields(
    name: &Ident,
    fields: &FieldsNamed,
    bounds: &mut WhereBounds,
) -> syn::Result<TokenStream> {
    let decode_lt = bounds.lifetime.clone();
    let mut inits = Vec::new();

    for field in &fields.named {
        let attr = options(&field.attrs, Site::NamedField)?;
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new(field.span(), "expected a named field"));
        };
        let ty = &field.ty;

        if attr.skip {
            if attr.rename.is_some() || attr.default {
                return Err(syn::Error::new(
                    ident.span(),
                    "a skipped field is never read, so `rename` and `default` do not apply",
                ));
            }
            bounds.require_default(ty);
            inits.push(quote! { #ident: ::core::default::Default::default(), });
            continue;
        }

        bounds.require_decode(name, ty);
        let key = attr
            .rename
            .unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));

        let on_missing = if attr.default || is_option_type(ty) {
            bounds.require_default(ty);
            quote! { ::core::default::Default::default() }
        } else {
            quote! { return ::core::result::Result::Err(::jsonbind::DecodeError::missing_key(#key)) }
        };

        inits.push(quote! {
            #ident: match object.get(#key) {
                ::core::option::Option::Some(item) => {
                    <#ty as ::jsonbind::Decode<#decode_lt>>::decode(item)
                        .map_err(|err| err.at_key(#key))?
                }
                ::core::option::Option::None => #on_missing,
            },
        });
    }

    Ok(quote! {
        let object: &#decode_lt ::jsonbind::__private::Map<
            ::std::string::String,
            ::jsonbind::__private::Value,
        > = ::jsonbind::cast(value)?;
        ::core::result::Result::Ok(Self { #(#inits)* })
    })
}

fn decode_tuple_fields(
    name: &Ident,
    fields: &FieldsUnnamed,
    bounds: &mut WhereBounds,
) -> syn::Result<TokenStream> {
    for field in &fields.unnamed {
        options(&field.attrs, Site::TupleField)?;
        bounds.require_decode(name, &field.ty);
    }

    // Newtypes are transparent.
    if fields.unnamed.len() == 1 {
        return Ok(quote! {
            ::jsonbind::Decode::decode(value).map(Self)
        });
    }

    let expected = fields.unnamed.len();
    let vars: Vec<Ident> = (0..expected).map(|idx| format_ident!("v{idx}")).collect();
    let decodes = vars.iter().enumerate().map(|(idx, var)| {
        quote! {
            let #var = ::jsonbind::Decode::decode(&items[#idx])
                .map_err(|err| err.at_index(#idx))?;
        }
    });

    Ok(quote! {
        let items: &[::jsonbind::__private::Value] = ::jsonbind::cast(value)?;
        if items.len() != #expected {
            return ::core::result::Result::Err(
                ::jsonbind::DecodeError::length_mismatch(#expected, items.len()),
            );
        }
        #(#decodes)*
        ::core::result::Result::Ok(Self(#(#vars),*))
    })
}

pub(crate) fn decode_struct(
    name: &Ident,
    generics: &Generics,
    data: &DataStruct,
) -> syn::Result<TokenStream> {
    let mut bounds = WhereBounds::new(generics);
    let body = match &data.fields {
        Fields::Named(fields) => decode_named_fields(name, fields, &mut bounds)?,
        Fields::Unnamed(fields) => decode_tuple_fields(name, fields, &mut bounds)?,
        Fields::Unit => quote! {
            let () = ::jsonbind::cast(value)?;
            ::core::result::Result::Ok(Self)
        },
    };
    Ok(wrap_impl(name, generics, body, bounds))
}

/// Unit-only enums decode from their raw string value.
pub(crate) fn decode_enum(
    name: &Ident,
    generics: &Generics,
    data: &DataEnum,
) -> syn::Result<TokenStream> {
    let mut arms = Vec::new();

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "Decode can only be derived for enums whose variants are all unit variants",
            ));
        }
        let raw = options(&variant.attrs, Site::Variant)?
            .rename
            .unwrap_or_else(|| LitStr::new(&variant.ident.to_string(), variant.ident.span()));
        let ident = &variant.ident;
        arms.push(quote! { #raw => ::core::result::Result::Ok(Self::#ident), });
    }

    let body = quote! {
        let raw: &str = ::jsonbind::cast(value)?;
        match raw {
            #(#arms)*
            other => ::core::result::Result::Err(::jsonbind::DecodeError::unknown_variant(other)),
        }
    };
    Ok(wrap_impl(name, generics, body, WhereBounds::new(generics)))
}
