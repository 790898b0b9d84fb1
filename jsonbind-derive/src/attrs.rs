//! `#[decode(..)]` options.

use syn::{Attribute, LitStr};

/// Where a `#[decode(..)]` attribute was written. Each site accepts its own set of options.
#[derive(Clone, Copy)]
pub(crate) enum Site {
    NamedField,
    TupleField,
    Variant,
}

impl Site {
    fn accepts(self, option: &str) -> bool {
        match self {
            Self::NamedField => matches!(option, "rename" | "default" | "skip"),
            Self::Variant => option == "rename",
            Self::TupleField => false,
        }
    }

    const fn noun(self) -> &'static str {
        match self {
            Self::NamedField => "named fields",
            Self::TupleField => "tuple struct fields",
            Self::Variant => "enum variants",
        }
    }
}

#[derive(Default)]
pub(crate) struct Options {
    pub(crate) rename: Option<LitStr>,
    pub(crate) default: bool,
    pub(crate) skip: bool,
}

/// Collect every `#[decode(..)]` option on one item, rejecting options the site does not take
/// and options given more than once.
pub(crate) fn options(attrs: &[Attribute], site: Site) -> syn::Result<Options> {
    let mut out = Options::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("decode")) {
        attr.parse_nested_meta(|meta| {
            let Some(name) = meta.path.get_ident().map(ToString::to_string) else {
                return Err(meta.error("expected a bare option name"));
            };
            if !site.accepts(&name) {
                return Err(meta.error(format!(
                    "`{name}` is not a decode option for {}",
                    site.noun()
                )));
            }
            let first = match name.as_str() {
                "rename" => out.rename.replace(meta.value()?.parse()?).is_none(),
                "default" => !std::mem::replace(&mut out.default, true),
                _ => !std::mem::replace(&mut out.skip, true),
            };
            if first {
                Ok(())
            } else {
                Err(meta.error(format!("`{name}` given twice")))
            }
        })?;
    }
    Ok(out)
}
