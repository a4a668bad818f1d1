//! Resolution outcomes and advisory diagnostics.
//!
//! Resolvers never print. Anything the caller should see besides the result
//! itself travels in [`Resolved::warnings`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Candidate, EnvironmentDescriptor};

/// Whether a hint is a hard constraint or a soft preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Mismatch or absence is an error.
    Required,
    /// Used for ordering only; dropped silently when unusable.
    #[default]
    Preferred,
}

impl Requirement {
    /// Map the boolean `required` flag used by command layers.
    pub const fn from_flag(required: bool) -> Self {
        if required {
            Self::Required
        } else {
            Self::Preferred
        }
    }

    pub const fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }
}

/// Non-fatal diagnostic produced alongside a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolveWarning {
    /// Several catalog rows share the requested name; the first was taken.
    AmbiguousEnvironment {
        name: String,
        chosen: Candidate,
        matches: Vec<EnvironmentDescriptor>,
    },
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousEnvironment {
                name,
                chosen,
                matches,
            } => {
                write!(
                    f,
                    "{} environments are named '{name}'; using {chosen}",
                    matches.len()
                )?;
                for env in matches {
                    write!(f, "\n  - {} ({})", env.python, env.prefix.display())?;
                }
                Ok(())
            }
        }
    }
}

/// A value together with the warnings collected while producing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolved<T> {
    pub value: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ResolveWarning>,
}

impl<T> Resolved<T> {
    /// A result with no warnings.
    pub const fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_warning(mut self, warning: ResolveWarning) -> Self {
        self.warnings.push(warning);
        self
    }

    /// Transform the value, keeping the warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    pub fn into_parts(self) -> (T, Vec<ResolveWarning>) {
        (self.value, self.warnings)
    }
}
