//! Errors surfaced when a builder cannot finalize its target.
//!
//! Construction failures aggregate: every problem with the argument pack
//! (missing required arguments, unknown names, values of the wrong shape)
//! is collected into one [`BuildError::Construction`] instead of failing on
//! the first, so a caller sees the full distance between the pack and the
//! target's constructor in a single error.

use thiserror::Error;

/// A single defect found while matching an argument pack against a target's
/// field schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BuildProblem {
    /// A required field was never set.
    #[error("missing required argument `{name}`")]
    MissingArgument {
        /// Schema name of the absent field.
        name: &'static str,
    },

    /// The pack holds a name the target's schema does not declare.
    #[error("unknown argument `{name}`")]
    UnknownArgument {
        /// The undeclared name.
        name: String,
    },

    /// A value was present but did not deserialize into the field's type.
    #[error("invalid value for argument `{name}`: {message}")]
    InvalidValue {
        /// Schema name of the field.
        name: &'static str,
        /// The deserializer's message.
        message: String,
    },
}

impl BuildProblem {
    /// A required field was never set.
    #[must_use]
    pub const fn missing(name: &'static str) -> Self {
        Self::MissingArgument { name }
    }

    /// The pack holds an undeclared name.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownArgument { name: name.into() }
    }

    /// A value did not deserialize into the field's type.
    pub fn invalid_value(name: &'static str, source: &dyn std::fmt::Display) -> Self {
        Self::InvalidValue {
            name,
            message: source.to_string(),
        }
    }
}

/// Error returned by [`Builder::build`](crate::Builder::build).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A value handed to `set` could not be serialized into the pack.
    ///
    /// The failure is recorded when `set` is called and surfaced at `build`
    /// so the setter chain stays fluent.
    #[error("cannot serialize argument `{name}`: {message}")]
    Serialize {
        /// Name the value was being stored under.
        name: String,
        /// The serializer's message.
        message: String,
    },

    /// The argument pack does not satisfy the target's constructor.
    #[error("cannot construct `{target}`: {}", join_problems(problems))]
    Construction {
        /// Type name of the target.
        target: &'static str,
        /// Field problems in declaration order, then unknown names in
        /// sorted order.
        problems: Vec<BuildProblem>,
    },
}

impl BuildError {
    /// A value handed to `set` could not be serialized.
    pub fn serialize(name: impl Into<String>, source: &dyn std::fmt::Display) -> Self {
        Self::Serialize {
            name: name.into(),
            message: source.to_string(),
        }
    }

    /// The pack does not satisfy the target's constructor.
    #[must_use]
    pub const fn construction(target: &'static str, problems: Vec<BuildProblem>) -> Self {
        Self::Construction { target, problems }
    }

    /// The individual problems behind a construction failure.
    ///
    /// Empty for non-construction errors.
    #[must_use]
    pub fn problems(&self) -> &[BuildProblem] {
        match self {
            Self::Construction { problems, .. } => problems,
            _ => &[],
        }
    }
}

fn join_problems(problems: &[BuildProblem]) -> String {
    match problems {
        [single] => single.to_string(),
        many => format!(
            "{} argument errors: {}",
            many.len(),
            many.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        ),
    }
}
