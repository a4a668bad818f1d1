//! Named conda environment resolution.
//!
//! A selector is either a prefix path (checked directly, no catalog lookup)
//! or a name looked up in the manager's catalog. Several rows may share a
//! name; the first one in catalog order is used and the ambiguity is
//! reported as a [`ResolveWarning::AmbiguousEnvironment`].

use std::path::Path;

use tracing::{debug, warn};

use super::RuntimeSelector;
use super::runtime_selector::expand_selector_path;
use crate::domain::{
    Candidate, EnvironmentDescriptor, ManagerHandle, Requirement, ResolveWarning, Resolved,
};
use crate::error::ResolveError;
use crate::paths::looks_like_path;
use crate::ports::CatalogError;

/// Outcome of looking a selector up, before any registration.
enum Lookup {
    Found(Resolved<Candidate>),
    Missing {
        name: String,
        catalog: Vec<EnvironmentDescriptor>,
    },
}

impl RuntimeSelector {
    /// Resolve a named environment with the requirement level chosen at
    /// runtime.
    ///
    /// `Ok(Resolved { value: None, .. })` is the soft skip: nothing matched
    /// and nothing was registered.
    pub fn resolve_named_env(
        &self,
        selector: &str,
        manager: &ManagerHandle,
        requirement: Requirement,
    ) -> Result<Resolved<Option<Candidate>>, ResolveError> {
        match requirement {
            Requirement::Required => self
                .require_named_env(selector, manager)
                .map(|resolved| resolved.map(Some)),
            Requirement::Preferred => Ok(self.prefer_named_env(selector, manager)),
        }
    }

    /// Register a named environment's interpreter as required.
    pub fn require_named_env(
        &self,
        selector: &str,
        manager: &ManagerHandle,
    ) -> Result<Resolved<Candidate>, ResolveError> {
        match self.lookup_named_env(selector, manager)? {
            Lookup::Found(resolved) => {
                let (candidate, warnings) = resolved.into_parts();
                let candidate = self.register_required(candidate)?;
                Ok(Resolved {
                    value: candidate,
                    warnings,
                })
            }
            Lookup::Missing { name, catalog } => Err(ResolveError::EnvironmentNotFound {
                selector: selector.to_string(),
                name,
                catalog,
            }),
        }
    }

    /// Register a named environment's interpreter as a soft hint.
    ///
    /// No match, or a catalog that cannot be listed, leaves the registry
    /// untouched and returns `None`.
    pub fn prefer_named_env(
        &self,
        selector: &str,
        manager: &ManagerHandle,
    ) -> Resolved<Option<Candidate>> {
        match self.lookup_named_env(selector, manager) {
            Ok(Lookup::Found(resolved)) => {
                resolved.map(|candidate| Some(self.register_preferred(candidate)))
            }
            Ok(Lookup::Missing { name, .. }) => {
                debug!(selector, name = %name, "No conda environment matches; skipping hint");
                Resolved::clean(None)
            }
            Err(e) => {
                warn!(selector, manager = %manager, error = %e, "Skipping conda environment hint");
                Resolved::clean(None)
            }
        }
    }

    fn lookup_named_env(
        &self,
        selector: &str,
        manager: &ManagerHandle,
    ) -> Result<Lookup, CatalogError> {
        if looks_like_path(selector) {
            let prefix = expand_selector_path(Path::new(selector.trim()));
            if self.ports.probe.is_conda_environment(&prefix) {
                debug!(prefix = %prefix.display(), "Using conda prefix directly");
                let python = Candidate::new(self.layout.conda_python(&prefix));
                return Ok(Lookup::Found(Resolved::clean(python)));
            }
        }

        let name = self.ports.catalog.canonicalize(selector);
        let catalog = self.ports.catalog.enumerate(manager)?;
        let matches: Vec<EnvironmentDescriptor> = catalog
            .iter()
            .filter(|env| env.name == name)
            .cloned()
            .collect();

        let Some(first) = matches.first() else {
            return Ok(Lookup::Missing { name, catalog });
        };

        let chosen = first.python.clone();
        let mut resolved = Resolved::clean(chosen.clone());
        if matches.len() > 1 {
            debug!(name = %name, count = matches.len(), python = %chosen, "Ambiguous environment name");
            resolved = resolved.with_warning(ResolveWarning::AmbiguousEnvironment {
                name,
                chosen,
                matches,
            });
        }
        Ok(Lookup::Found(resolved))
    }
}
