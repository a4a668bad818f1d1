//! Environment catalog port.
//!
//! The catalog is read-only from the resolver's perspective: resolving a
//! name never creates, renames or removes environments.

use thiserror::Error;

use crate::domain::{EnvironmentDescriptor, ManagerHandle};

/// Errors raised while listing environments.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No environment manager executable could be located.
    #[error("Unable to find a conda executable (searched {searched})")]
    ManagerNotFound { searched: String },

    /// The manager ran but reported failure.
    #[error("'{command}' failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// The manager's output was not in the expected format.
    #[error("Unexpected output from '{command}': {reason}")]
    Parse { command: String, reason: String },
}

/// Enumerates environments known to an environment manager.
pub trait EnvironmentCatalogPort: Send + Sync {
    /// List every environment in the manager's own order.
    ///
    /// Name disambiguation picks the first matching row, so implementations
    /// must return rows in a stable order for a given manager state.
    fn enumerate(
        &self,
        manager: &ManagerHandle,
    ) -> Result<Vec<EnvironmentDescriptor>, CatalogError>;

    /// Normalize a user-supplied selector to a catalog name.
    fn canonicalize(&self, raw: &str) -> String;
}
