use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_macro_input};

use crate::support::{attrs, diag, utils};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts,
        Err(e) => diag::to_compile_error(e),
    }
}

struct BuilderField {
    ident: syn::Ident,
    ty: syn::Type,
    /// Expression filling the field when the pack omits it; `None` means
    /// the field is required.
    default: Option<TokenStream2>,
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;
    let vis = &input.vis;
    utils::require_non_generic(&input)?;
    let named = utils::require_named_fields(&input)?;

    let mut fields = Vec::new();
    for field in &named.named {
        let ident = field.ident.clone().expect("named field");
        let parsed = attrs::parse_builder_attrs(&field.attrs)?;

        let default = match parsed.default {
            Some(attrs::DefaultValue::Flag) => {
                Some(quote!(::core::default::Default::default()))
            }
            Some(attrs::DefaultValue::Str(lit)) => {
                Some(quote!(::core::convert::Into::into(#lit)))
            }
            Some(attrs::DefaultValue::Expr(expr)) => Some(quote!(#expr)),
            None if utils::is_option(&field.ty) => {
                Some(quote!(::core::default::Default::default()))
            }
            None => None,
        };

        fields.push(BuilderField {
            ident,
            ty: field.ty.clone(),
            default,
        });
    }

    let builder_name = format_ident!("{}Builder", struct_name);
    let target_literal = struct_name.to_string();

    let field_specs = fields.iter().map(|field| {
        let name = field.ident.to_string();
        if field.default.is_none() {
            quote!(::knack_builder::FieldSpec::required(#name))
        } else {
            quote!(::knack_builder::FieldSpec::optional(#name))
        }
    });

    // Required fields report absence right here, inside the take, so a
    // value that fails to deserialize yields one problem, not two.
    let takes = fields.iter().map(|field| {
        let ident = &field.ident;
        let name = ident.to_string();
        let ty = &field.ty;
        if field.default.is_none() {
            quote! {
                let #ident = match __pack.take_as::<#ty>(#name) {
                    ::core::result::Result::Ok(::core::option::Option::Some(value)) => {
                        ::core::option::Option::Some(value)
                    }
                    ::core::result::Result::Ok(::core::option::Option::None) => {
                        __problems.push(::knack_builder::BuildProblem::missing(#name));
                        ::core::option::Option::None
                    }
                    ::core::result::Result::Err(problem) => {
                        __problems.push(problem);
                        ::core::option::Option::None
                    }
                };
            }
        } else {
            quote! {
                let #ident = match __pack.take_as::<#ty>(#name) {
                    ::core::result::Result::Ok(value) => value,
                    ::core::result::Result::Err(problem) => {
                        __problems.push(problem);
                        ::core::option::Option::None
                    }
                };
            }
        }
    });

    let resolutions = fields.iter().filter_map(|field| {
        let ident = &field.ident;
        field.default.as_ref().map(|default| {
            quote! {
                let #ident = #ident.unwrap_or_else(|| #default);
            }
        })
    });

    let all_idents: Vec<&syn::Ident> = fields.iter().map(|field| &field.ident).collect();
    let required_idents: Vec<&syn::Ident> = fields
        .iter()
        .filter(|field| field.default.is_none())
        .map(|field| &field.ident)
        .collect();

    let finalize = if required_idents.is_empty() {
        quote! {
            if __problems.is_empty() {
                ::core::result::Result::Ok(Self { #(#all_idents),* })
            } else {
                ::core::result::Result::Err(
                    ::knack_builder::BuildError::construction(#target_literal, __problems),
                )
            }
        }
    } else {
        quote! {
            match (#(#required_idents,)*) {
                (#(::core::option::Option::Some(#required_idents),)*) if __problems.is_empty() => {
                    ::core::result::Result::Ok(Self { #(#all_idents),* })
                }
                _ => ::core::result::Result::Err(
                    ::knack_builder::BuildError::construction(#target_literal, __problems),
                ),
            }
        }
    };

    // An empty struct never touches the pack mutably.
    let pack_pat = if fields.is_empty() {
        quote!(__pack)
    } else {
        quote!(mut __pack)
    };

    let setters = fields.iter().map(|field| {
        let ident = &field.ident;
        let name = ident.to_string();
        let ty = &field.ty;
        let method = format_ident!("with_{}", ident);
        let doc = format!("Sets `{name}`, overwriting any prior value.");
        quote! {
            #[doc = #doc]
            pub fn #method(mut self, value: impl ::core::convert::Into<#ty>) -> Self {
                self.inner = self
                    .inner
                    .set(#name, ::core::convert::Into::<#ty>::into(value));
                self
            }
        }
    });

    let builder_doc =
        format!("Fluent builder for [`{struct_name}`], generated by `#[derive(Buildable)]`.");

    let expanded = quote! {
        impl ::knack_builder::Buildable for #struct_name {
            type Builder = #builder_name;

            const FIELDS: &'static [::knack_builder::FieldSpec] = &[
                #(#field_specs),*
            ];

            fn from_pack(
                #pack_pat: ::knack_builder::ArgumentPack,
            ) -> ::core::result::Result<Self, ::knack_builder::BuildError> {
                let mut __problems: ::std::vec::Vec<::knack_builder::BuildProblem> =
                    ::std::vec::Vec::new();
                #(#takes)*
                for name in __pack.names() {
                    __problems.push(::knack_builder::BuildProblem::unknown(name));
                }
                #(#resolutions)*
                #finalize
            }
        }

        #[doc = #builder_doc]
        #[derive(Clone, Debug)]
        #vis struct #builder_name {
            inner: ::knack_builder::Builder<#struct_name>,
        }

        impl #builder_name {
            /// Creates a builder with no arguments set.
            #[must_use]
            pub fn new() -> Self {
                Self {
                    inner: ::knack_builder::Builder::new(),
                }
            }

            #(#setters)*

            /// Sets an argument by name, bypassing the typed setters.
            ///
            /// Unknown names are reported when `build` runs.
            pub fn set(
                mut self,
                name: impl ::core::convert::Into<::std::string::String>,
                value: impl ::knack_builder::serde::Serialize,
            ) -> Self {
                self.inner = self.inner.set(name, value);
                self
            }

            /// Constructs the target from the accumulated arguments.
            ///
            /// The builder stays usable afterwards.
            pub fn build(
                &self,
            ) -> ::core::result::Result<#struct_name, ::knack_builder::BuildError> {
                self.inner.build()
            }
        }

        impl ::core::default::Default for #builder_name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl #struct_name {
            /// Creates a fluent builder for this type.
            #[must_use]
            #vis fn builder() -> #builder_name {
                #builder_name::new()
            }
        }
    };

    Ok(expanded.into())
}
