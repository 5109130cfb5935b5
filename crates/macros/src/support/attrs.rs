use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Ident, Meta, Token};

use crate::support::diag;

/// Parsed `#[builder(...)]` field configuration.
#[derive(Default)]
pub struct BuilderAttr {
    pub default: Option<DefaultValue>,
}

/// How an optional field obtains its value when the pack omits it.
pub enum DefaultValue {
    /// `#[builder(default)]` — `Default::default()`.
    Flag,
    /// `#[builder(default = "...")]` — the literal, converted via `Into`.
    Str(syn::LitStr),
    /// `#[builder(default = <expr>)]` — the expression, spliced as-is.
    Expr(syn::Expr),
}

/// Parse and merge every `#[builder(...)]` attribute on a field.
pub fn parse_builder_attrs(attrs: &[Attribute]) -> syn::Result<BuilderAttr> {
    let mut parsed = BuilderAttr::default();

    for attr in attrs {
        if !attr.path().is_ident("builder") {
            continue;
        }
        let Meta::List(list) = &attr.meta else {
            return Err(diag::error_spanned(
                attr,
                "#[builder] must take arguments: #[builder(default)] or #[builder(default = <expr>)]",
            ));
        };
        let items = syn::parse2::<AttrItems>(list.tokens.clone())?;
        for item in items.0 {
            match item {
                AttrItem::Default(key, value) => {
                    if parsed.default.is_some() {
                        return Err(diag::error_spanned(&key, "duplicate `default`"));
                    }
                    parsed.default = Some(value);
                }
            }
        }
    }

    Ok(parsed)
}

enum AttrItem {
    Default(Ident, DefaultValue),
}

struct AttrItems(Vec<AttrItem>);

impl Parse for AttrItems {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let items = Punctuated::<AttrItem, Token![,]>::parse_terminated(input)?;
        Ok(Self(items.into_iter().collect()))
    }
}

impl Parse for AttrItem {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "default" {
            return Err(diag::error_spanned(
                &key,
                format!("unknown `#[builder]` argument `{key}`; expected `default` or `default = <expr>`"),
            ));
        }

        if !input.peek(Token![=]) {
            return Ok(Self::Default(key, DefaultValue::Flag));
        }
        input.parse::<Token![=]>()?;

        // A string literal converts via `Into` so `default = "text"` fills a
        // `String` field; anything else is spliced verbatim.
        if input.peek(syn::LitStr) {
            let lit: syn::LitStr = input.parse()?;
            return Ok(Self::Default(key, DefaultValue::Str(lit)));
        }
        let expr: syn::Expr = input.parse()?;
        Ok(Self::Default(key, DefaultValue::Expr(expr)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn field_attrs(tokens: Attribute) -> Vec<Attribute> {
        vec![tokens]
    }

    #[test]
    fn bare_default_parses_as_flag() {
        let attrs = field_attrs(parse_quote!(#[builder(default)]));
        let parsed = parse_builder_attrs(&attrs).unwrap();
        assert!(matches!(parsed.default, Some(DefaultValue::Flag)));
    }

    #[test]
    fn string_default_keeps_the_literal() {
        let attrs = field_attrs(parse_quote!(#[builder(default = "auto")]));
        let parsed = parse_builder_attrs(&attrs).unwrap();
        assert!(matches!(parsed.default, Some(DefaultValue::Str(_))));
    }

    #[test]
    fn expression_default_parses_up_to_the_comma() {
        let attrs = field_attrs(parse_quote!(#[builder(default = Vec::new())]));
        let parsed = parse_builder_attrs(&attrs).unwrap();
        assert!(matches!(parsed.default, Some(DefaultValue::Expr(_))));
    }

    #[test]
    fn unknown_argument_is_rejected() {
        let attrs = field_attrs(parse_quote!(#[builder(rename = "x")]));
        assert!(parse_builder_attrs(&attrs).is_err());
    }

    #[test]
    fn duplicate_default_is_rejected() {
        let attrs = field_attrs(parse_quote!(#[builder(default, default = 1)]));
        assert!(parse_builder_attrs(&attrs).is_err());
    }

    #[test]
    fn bare_attribute_is_rejected() {
        let attrs = field_attrs(parse_quote!(#[builder]));
        assert!(parse_builder_attrs(&attrs).is_err());
    }
}
