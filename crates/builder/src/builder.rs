//! The generic builder and the contract constructible targets implement.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use crate::error::BuildError;
use crate::pack::ArgumentPack;

/// One entry of a target's field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Argument name, equal to the field identifier.
    pub name: &'static str,
    /// Whether `from_pack` fails when the name is absent.
    pub required: bool,
}

impl FieldSpec {
    /// A field `from_pack` insists on.
    #[must_use]
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    /// A field with a declared default.
    #[must_use]
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// A type that can be constructed from an [`ArgumentPack`].
///
/// Usually implemented via `#[derive(Buildable)]`, which also generates a
/// fluent `<Name>Builder` with typed `with_<field>` setters. Implementing by
/// hand is supported; [`ArgumentPack::take_as`] does the per-field lifting.
pub trait Buildable: Sized {
    /// The fluent builder for this type.
    type Builder: Default;

    /// Field schema: one entry per constructor argument.
    const FIELDS: &'static [FieldSpec];

    /// Constructs an instance from an argument pack.
    ///
    /// Implementations aggregate every defect (missing required argument,
    /// unknown name, value of the wrong shape) into a single
    /// [`BuildError::Construction`] rather than failing on the first.
    fn from_pack(pack: ArgumentPack) -> Result<Self, BuildError>;

    /// Creates a fluent builder for this type.
    #[must_use]
    fn builder() -> Self::Builder {
        Self::Builder::default()
    }
}

/// Accumulates named arguments for a `T` and finalizes them into an
/// instance.
///
/// `set` serializes eagerly and defers any serialization failure to
/// [`build`](Self::build), so the chain never breaks mid-expression. The
/// builder is reusable: `build` borrows, constructing each instance from a
/// copy of the pack, and later `set` calls keep accumulating on top of the
/// state `build` saw.
pub struct Builder<T: Buildable> {
    pack: ArgumentPack,
    poisoned: Option<BuildError>,
    _target: PhantomData<fn() -> T>,
}

impl<T: Buildable> Builder<T> {
    /// Creates a builder with an empty argument pack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pack: ArgumentPack::new(),
            poisoned: None,
            _target: PhantomData,
        }
    }

    /// Stores `value` under `name`, overwriting any prior value.
    ///
    /// A value that fails to serialize poisons the builder; the first such
    /// failure is what `build` returns.
    pub fn set(mut self, name: impl Into<String>, value: impl Serialize) -> Self {
        let name = name.into();
        match serde_json::to_value(value) {
            Ok(value) => {
                self.pack.insert(name, value);
            }
            Err(err) => {
                if self.poisoned.is_none() {
                    self.poisoned = Some(BuildError::serialize(name, &err));
                }
            }
        }
        self
    }

    /// Constructs a `T` from the current pack.
    ///
    /// Does not consume or clear the builder; calling `build` again yields
    /// another independent instance from the same arguments.
    pub fn build(&self) -> Result<T, BuildError> {
        if let Some(poisoned) = &self.poisoned {
            return Err(poisoned.clone());
        }
        T::from_pack(self.pack.clone())
    }
}

impl<T: Buildable> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Buildable> Clone for Builder<T> {
    fn clone(&self) -> Self {
        Self {
            pack: self.pack.clone(),
            poisoned: self.poisoned.clone(),
            _target: PhantomData,
        }
    }
}

// No argument-inspection surface: Debug names the target and stops there.
impl<T: Buildable> fmt::Debug for Builder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("target", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
