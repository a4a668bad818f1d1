//! Intent-based selection requests built by command layers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Requirement;

/// What the user pointed at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTarget {
    /// An interpreter binary, or an installation prefix containing one.
    Python(PathBuf),
    /// A virtualenv directory or name; `None` means the default virtualenv.
    Virtualenv(Option<String>),
    /// A conda environment name or prefix path.
    CondaEnv {
        selector: Option<String>,
        conda: Option<PathBuf>,
    },
    /// An environment of the managed Miniconda distribution.
    Managed(Option<String>),
}

/// A single selection request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub target: SelectionTarget,
    pub requirement: Requirement,
}

impl SelectionRequest {
    pub const fn new(target: SelectionTarget, requirement: Requirement) -> Self {
        Self {
            target,
            requirement,
        }
    }

    pub const fn required(target: SelectionTarget) -> Self {
        Self::new(target, Requirement::Required)
    }

    pub const fn preferred(target: SelectionTarget) -> Self {
        Self::new(target, Requirement::Preferred)
    }
}
