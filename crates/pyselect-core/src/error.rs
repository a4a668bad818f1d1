//! Resolution error types.
//!
//! Every variant carries the structured data an adapter needs to render a
//! precise diagnostic. Adapters should map this to their own error types
//! (CLI exit codes, serialized errors).

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{Candidate, EnvironmentDescriptor, EnvironmentKind};
use crate::ports::CatalogError;

/// Fatal errors of a required resolution.
///
/// Preferred hints never produce these; they degrade to "nothing registered".
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A required interpreter path does not exist.
    #[error("Specified Python '{}' does not exist", .path.display())]
    InvalidPath { path: PathBuf },

    /// A different interpreter is already active in this process.
    #[error(
        "Required Python '{requested}' conflicts with the already active Python '{active}'"
    )]
    RuntimeConflict {
        requested: Candidate,
        active: Candidate,
    },

    /// A required environment directory failed validation.
    #[error("Directory '{}' is not a {kind}", .path.display())]
    NotAnEnvironment { path: PathBuf, kind: EnvironmentKind },

    /// A required named environment has no catalog entry.
    #[error("Unable to locate conda environment '{name}' (requested as '{selector}')")]
    EnvironmentNotFound {
        selector: String,
        name: String,
        catalog: Vec<EnvironmentDescriptor>,
    },

    /// The managed distribution was requested but is not installed.
    #[error(
        "Miniconda is not installed{}",
        .root.as_ref().map(|r| format!(" at '{}'", r.display())).unwrap_or_default()
    )]
    ManagedDistributionMissing { root: Option<PathBuf> },

    /// The environment catalog could not be listed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
