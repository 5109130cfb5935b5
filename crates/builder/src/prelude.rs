//! Common imports for fluent building.
//!
//! ```rust,ignore
//! use knack_builder::prelude::*;
//!
//! #[derive(Buildable)]
//! struct Job {
//!     name: String,
//! }
//!
//! let job = Job::builder().with_name("sync").build()?;
//! ```

// `Buildable` carries both the trait and, with the `derive` feature, the
// derive macro re-exported at the crate root.
pub use crate::{ArgumentPack, BuildError, BuildProblem, Buildable, Builder, FieldSpec, Value};
