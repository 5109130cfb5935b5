//! # knack-overrides
//!
//! Compile-time checked "this method overrides that one" annotations.
//!
//! An override relationship that lives only in a comment rots silently: the
//! base method gets renamed and the copy keeps shipping. Annotating the
//! copy makes the link load-bearing — if the reference type stops exposing
//! a callable with the same name, the build breaks at the annotation site.
//!
//! Two spellings:
//!
//! - [`assert_overrides!`] — standalone assertion, usable anywhere an item
//!   is allowed;
//! - `#[overrides(ReferenceType)]` — attribute form for methods in impl
//!   blocks (feature `derive`, on by default).
//!
//! ```rust
//! use knack_overrides::{assert_overrides, overrides};
//!
//! struct Engine;
//! impl Engine {
//!     fn start(&self) {}
//! }
//!
//! struct TurboEngine;
//! impl TurboEngine {
//!     #[overrides(Engine)]
//!     fn start(&self) {}
//! }
//!
//! // Equivalent standalone spelling:
//! assert_overrides!(Engine, start);
//! ```
//!
//! ## What the check does and does not prove
//!
//! The assertion confirms that the reference type exposes a *callable item*
//! with the given name — a method, an associated function, or a trait
//! method in scope. It does not prove that the annotated impl participates
//! in any trait relationship with the reference type; two unrelated types
//! with same-named methods pass. That keeps the annotation free of
//! ceremony, at the cost of only checking name and callability.
//!
//! The reference type must be concrete; type parameters of a surrounding
//! impl are not visible to the assertion.

/// Asserts at compile time that `$reference` exposes a callable named
/// `$method`.
///
/// Expands to a const item referencing `<$reference>::$method` as a
/// function item, so the check costs nothing at runtime.
///
/// ```rust
/// struct Base;
/// impl Base {
///     fn refresh(&self) {}
/// }
///
/// knack_overrides::assert_overrides!(Base, refresh);
/// ```
///
/// A missing method fails the build:
///
/// ```compile_fail
/// struct Base;
///
/// knack_overrides::assert_overrides!(Base, refresh);
/// ```
///
/// So does a same-named field, because a field is not callable:
///
/// ```compile_fail
/// struct Base {
///     speed: u32,
/// }
///
/// knack_overrides::assert_overrides!(Base, speed);
/// ```
///
/// And the reference must be a type:
///
/// ```compile_fail
/// knack_overrides::assert_overrides!(42, refresh);
/// ```
#[macro_export]
macro_rules! assert_overrides {
    ($reference:ty, $method:ident) => {
        const _: () = {
            #[allow(dead_code)]
            fn method_exists_on_reference_type() {
                let _ = <$reference>::$method;
            }
        };
    };
}

/// Attribute form of [`assert_overrides!`] for methods in impl blocks.
///
/// ```rust
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
///
/// A method the reference type lacks fails the build:
///
/// ```compile_fail
/// use knack_overrides::overrides;
///
/// struct Engine;
///
/// struct TurboEngine;
/// impl TurboEngine {
///     #[overrides(Engine)]
///     fn start(&self) {}
/// }
/// ```
///
/// So does forgetting the reference type:
///
/// ```compile_fail
/// use knack_overrides::overrides;
///
/// struct Engine;
/// impl Engine {
///     #[overrides]
///     fn start(&self) {}
/// }
/// ```
#[cfg(feature = "derive")]
pub use knack_macros::overrides;
