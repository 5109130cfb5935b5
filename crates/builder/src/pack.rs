//! The accumulated argument pack a builder assembles before finalization.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::BuildProblem;

/// A mapping from argument name to value, keys unique, last write wins.
///
/// The pack is the single piece of state a [`Builder`](crate::Builder) owns.
/// Keys are kept sorted so error listings and iteration order are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentPack {
    values: BTreeMap<String, Value>,
}

impl ArgumentPack {
    /// Creates an empty pack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Stores `value` under `name`, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(name.into(), value)
    }

    /// Removes and returns the value stored under `name`.
    pub fn take(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    /// Removes the value stored under `name` and deserializes it.
    ///
    /// Returns `Ok(None)` when the name is absent, so callers can apply
    /// their own defaulting. A value of the wrong shape becomes a
    /// [`BuildProblem::InvalidValue`] carrying the deserializer's message.
    pub fn take_as<T>(&mut self, name: &'static str) -> Result<Option<T>, BuildProblem>
    where
        T: DeserializeOwned,
    {
        match self.take(name) {
            Some(value) => match serde_json::from_value(value) {
                Ok(value) => Ok(Some(value)),
                Err(err) => Err(BuildProblem::invalid_value(name, &err)),
            },
            None => Ok(None),
        }
    }

    /// Returns the value stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether a value is stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of stored arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the pack holds no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored argument names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
