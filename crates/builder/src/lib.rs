//! # knack-builder
//!
//! Fluent object construction from an accumulated argument pack.
//!
//! A [`Builder`] collects named arguments into an [`ArgumentPack`] and, on
//! [`build`](Builder::build), hands the pack to the target type's
//! [`Buildable::from_pack`] constructor. Re-setting a name overwrites the
//! prior value; nothing is validated until `build`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use knack_builder::prelude::*;
//!
//! #[derive(Buildable)]
//! struct Server {
//!     host: String,
//!     #[builder(default = 8080)]
//!     port: u16,
//! }
//!
//! let server = Server::builder()
//!     .with_host("localhost")
//!     .build()?;
//! ```
//!
//! ## Two surfaces
//!
//! - **Typed setters**: `#[derive(Buildable)]` generates a `<Name>Builder`
//!   with one `with_<field>` method per field. Misspelled setters are
//!   compile errors:
//!
//!   ```compile_fail
//!   use knack_builder::prelude::*;
//!
//!   #[derive(Buildable)]
//!   struct Server {
//!       host: String,
//!   }
//!
//!   let _ = Server::builder().with_host_name("localhost");
//!   ```
//! - **Dynamic `set`**: both the generic [`Builder`] and every generated
//!   builder accept `set(name, value)` for names decided at runtime.
//!   Unknown names surface at `build` time as part of a single aggregated
//!   [`BuildError::Construction`].

pub mod builder;
pub mod error;
pub mod pack;
pub mod prelude;

pub use builder::{Buildable, Builder, FieldSpec};
pub use error::{BuildError, BuildProblem};
pub use pack::ArgumentPack;

/// The dynamic value representation stored in an [`ArgumentPack`].
pub use serde_json::Value;

// Generated code refers to serde through this path so dependents don't need
// their own `serde` dependency for the builder surface.
#[doc(hidden)]
pub use serde;

#[cfg(feature = "derive")]
pub use knack_macros::Buildable;
