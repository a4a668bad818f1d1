//! Virtualenv resolution.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::RuntimeSelector;
use crate::domain::{Candidate, EnvironmentKind, Resolved};
use crate::error::ResolveError;
use crate::paths::{expand_user, looks_like_path};

impl RuntimeSelector {
    /// Register the interpreter of a virtualenv as required.
    ///
    /// `selector` is a directory, a name under the virtualenv home, or `None`
    /// for the default virtualenv. The directory must pass the virtualenv
    /// check; there is no fallback.
    pub fn require_virtualenv(
        &self,
        selector: Option<&str>,
    ) -> Result<Resolved<Candidate>, ResolveError> {
        let root = self.virtualenv_root(selector);
        if !self.ports.probe.is_virtualenv(&root) {
            return Err(ResolveError::NotAnEnvironment {
                path: root,
                kind: EnvironmentKind::Virtualenv,
            });
        }

        let python = Candidate::new(self.layout.virtualenv_python(&root));
        self.register_required(python).map(Resolved::clean)
    }

    /// Register the interpreter of a virtualenv as a soft hint.
    ///
    /// The directory is not validated, but a missing interpreter is dropped.
    pub fn prefer_virtualenv(&self, selector: Option<&str>) -> Resolved<Option<Candidate>> {
        let root = self.virtualenv_root(selector);
        let python = self.layout.virtualenv_python(&root);
        if !self.ports.fs.exists(&python) {
            debug!(root = %root.display(), "Ignoring virtualenv hint without an interpreter");
            return Resolved::clean(None);
        }
        Resolved::clean(Some(self.register_preferred(Candidate::new(python))))
    }

    /// Map a virtualenv selector to its root directory.
    ///
    /// Resolution order:
    /// 1. No selector (or a blank one): the probe's default virtualenv
    /// 2. Anything path-shaped: that path, with `~` expanded
    /// 3. A bare name that is itself a virtualenv in the working directory
    /// 4. A bare name under the virtualenv home
    pub fn virtualenv_root(&self, selector: Option<&str>) -> PathBuf {
        let Some(raw) = selector.map(str::trim).filter(|s| !s.is_empty()) else {
            return self.ports.probe.default_virtualenv();
        };

        if looks_like_path(raw) {
            return expand_user(raw).unwrap_or_else(|_| PathBuf::from(raw));
        }

        if self.ports.probe.is_virtualenv(Path::new(raw)) {
            return PathBuf::from(raw);
        }

        match self.settings.effective_virtualenv_home() {
            Ok(home) => home.join(raw),
            Err(e) => {
                warn!(name = raw, error = %e, "No virtualenv home; treating name as a path");
                PathBuf::from(raw)
            }
        }
    }
}
