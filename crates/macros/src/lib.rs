//! # knack-macros
//!
//! Proc-macros for the knack utility crates.
//!
//! | Macro | Description |
//! |-------|-------------|
//! | [`Buildable`](derive@Buildable) | Implements `Buildable` and generates a fluent builder |
//! | [`overrides`](macro@overrides) | Asserts a method exists on a reference type |
//!
//! Both macros are normally consumed through their host crates
//! (`knack-builder` and `knack-overrides`), which re-export them behind a
//! default-on `derive` feature.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod builder;
mod overrides;
mod support;

/// Derive macro for the `Buildable` trait.
///
/// Generates, for a non-generic struct with named fields:
///
/// - the `Buildable` impl: the field schema and a `from_pack` constructor
///   that aggregates every argument problem into one error;
/// - a `<Name>Builder` with one `with_<field>` setter per field, a generic
///   `set(name, value)` passthrough, and a reusable `build(&self)`;
/// - an inherent `<Name>::builder()`.
///
/// # Field attributes
///
/// - `#[builder(default)]` — field is optional, defaults via
///   `Default::default()`
/// - `#[builder(default = <expr>)]` — field is optional with the given
///   default; string literals convert via `Into`
/// - `Option<T>` fields are implicitly optional and default to `None`
///
/// Every field type must implement `Serialize` and `DeserializeOwned`.
///
/// # Example
///
/// ```ignore
/// use knack_builder::prelude::*;
///
/// #[derive(Buildable)]
/// struct Server {
///     host: String,
///     #[builder(default = 8080)]
///     port: u16,
/// }
///
/// let server = Server::builder().with_host("localhost").build()?;
/// ```
#[proc_macro_derive(Buildable, attributes(builder))]
pub fn derive_buildable(input: TokenStream) -> TokenStream {
    builder::derive(input)
}

/// Marks a method as overriding a method of the given reference type.
///
/// The method is emitted unchanged; alongside it the macro plants a const
/// assertion that `<ReferenceType>::method_name` names a callable item, so
/// a rename on either side breaks the build instead of silently forking the
/// two implementations. There is no runtime cost.
///
/// The check confirms name and callability only — it does not verify that
/// the annotated impl participates in any trait relationship with the
/// reference type. The reference type must be concrete: type parameters of
/// the surrounding impl are not visible to the assertion.
///
/// # Example
///
/// ```ignore
/// use knack_overrides::overrides;
///
/// struct Engine;
/// impl Engine {
///     fn start(&self) {}
/// }
///
/// struct TurboEngine;
/// impl TurboEngine {
///     #[overrides(Engine)]
///     fn start(&self) {}
/// }
/// ```
#[proc_macro_attribute]
pub fn overrides(attr: TokenStream, item: TokenStream) -> TokenStream {
    overrides::expand(attr, item)
}
