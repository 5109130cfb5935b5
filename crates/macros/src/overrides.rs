use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::ImplItemFn;

use crate::support::diag;

pub fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    match expand_inner(attr.into(), item.into()) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

fn expand_inner(attr: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    if attr.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            "`#[overrides(...)]` must name the reference type, e.g. `#[overrides(Base)]`",
        ));
    }
    let reference: syn::Path = syn::parse2(attr)
        .map_err(|e| syn::Error::new(e.span(), "`#[overrides(...)]` expects a type path"))?;

    let mut method: ImplItemFn = syn::parse2(item)
        .map_err(|e| syn::Error::new(e.span(), "`#[overrides]` can only be applied to a method"))?;
    let method_name = method.sig.ident.clone();

    // Referencing the function item is enough: if the reference type has no
    // callable with this name, the nested fn fails to resolve it and the
    // build breaks at the annotation site. Nothing survives to runtime.
    let check: syn::Stmt = syn::parse_quote! {
        const _: () = {
            #[allow(dead_code)]
            fn method_exists_on_reference_type() {
                let _ = <#reference>::#method_name;
            }
        };
    };
    method.block.stmts.insert(0, check);

    Ok(quote! { #method })
}
