//! Environment catalog types.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Candidate;

/// A catalog row mapping an environment name to its interpreter.
///
/// Names are not unique: two prefixes in different directories can share a
/// basename, and the catalog reports both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentDescriptor {
    /// Environment name as reported by the manager.
    pub name: String,
    /// Installation prefix of the environment.
    pub prefix: PathBuf,
    /// Interpreter inside the prefix.
    pub python: Candidate,
}

impl EnvironmentDescriptor {
    pub fn new(name: impl Into<String>, prefix: impl Into<PathBuf>, python: Candidate) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            python,
        }
    }
}

/// Which kind of isolated environment a path was expected to be.
///
/// Only virtualenvs are validated by path; named conda environments are
/// checked against the manager's listing and fail with `EnvironmentNotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentKind {
    Virtualenv,
}

impl fmt::Display for EnvironmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Virtualenv => write!(f, "virtualenv"),
        }
    }
}

/// How the catalog adapter should reach the environment manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManagerHandle {
    /// Let the adapter locate the manager (settings, then `PATH`).
    #[default]
    Discover,
    /// Use this manager executable.
    Executable(PathBuf),
}

impl fmt::Display for ManagerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discover => write!(f, "<discovered conda>"),
            Self::Executable(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_kind_only_names_virtualenvs() {
        assert_eq!(EnvironmentKind::Virtualenv.to_string(), "virtualenv");
        assert_eq!(
            serde_json::to_string(&EnvironmentKind::Virtualenv).unwrap(),
            "\"virtualenv\""
        );
        assert!(serde_json::from_str::<EnvironmentKind>("\"conda\"").is_err());
    }
}
