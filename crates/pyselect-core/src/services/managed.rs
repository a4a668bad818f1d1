//! Managed Miniconda distribution resolution.

use tracing::debug;

use super::RuntimeSelector;
use crate::domain::{Candidate, ManagerHandle, Requirement, Resolved};
use crate::error::ResolveError;

impl RuntimeSelector {
    /// Resolve an environment of the managed distribution.
    ///
    /// The distribution must be installed regardless of `requirement`; there
    /// is no fallback to other conda installations. `None` selects the
    /// configured default environment.
    pub fn resolve_managed(
        &self,
        selector: Option<&str>,
        requirement: Requirement,
    ) -> Result<Resolved<Option<Candidate>>, ResolveError> {
        let manager = self.managed_manager()?;
        self.resolve_named_env(selector.unwrap_or_default(), &manager, requirement)
    }

    pub fn require_managed(
        &self,
        selector: Option<&str>,
    ) -> Result<Resolved<Candidate>, ResolveError> {
        let manager = self.managed_manager()?;
        self.require_named_env(selector.unwrap_or_default(), &manager)
    }

    pub fn prefer_managed(
        &self,
        selector: Option<&str>,
    ) -> Result<Resolved<Option<Candidate>>, ResolveError> {
        let manager = self.managed_manager()?;
        Ok(self.prefer_named_env(selector.unwrap_or_default(), &manager))
    }

    fn managed_manager(&self) -> Result<ManagerHandle, ResolveError> {
        let managed = self.ports.managed.as_ref();
        if !managed.is_installed() {
            return Err(ResolveError::ManagedDistributionMissing {
                root: managed.root(),
            });
        }
        let manager = managed.manager_handle();
        debug!(manager = %manager, "Using managed Miniconda");
        Ok(manager)
    }
}
