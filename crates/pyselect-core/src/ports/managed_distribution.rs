//! Managed distribution port.

use std::path::PathBuf;

use crate::domain::ManagerHandle;

/// A tool-installed Python distribution with its own environment catalog.
pub trait ManagedDistributionPort: Send + Sync {
    /// Installation root, whether or not anything is installed there.
    ///
    /// `None` when no location can be determined; such a distribution is
    /// never installed.
    fn root(&self) -> Option<PathBuf>;

    fn is_installed(&self) -> bool;

    /// Handle to the distribution's own environment manager.
    fn manager_handle(&self) -> ManagerHandle;
}
