//! The runtime selection facade.
//!
//! `RuntimeSelector` owns the ports, the shared [`HintRegistry`] and the
//! settings, and exposes one pair of operations per kind of selector:
//!
//! - `require_*` returns `Result<Resolved<Candidate>, ResolveError>`; any
//!   problem is fatal to the call.
//! - `prefer_*` returns `Resolved<Option<Candidate>>`; an unusable hint is
//!   simply not registered.
//!
//! Each resolver only computes a candidate. Registration always goes through
//! [`RuntimeSelector::register_required`] or
//! [`RuntimeSelector::register_preferred`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::ConflictValidator;
use crate::domain::{
    Candidate, ManagerHandle, Requirement, Resolved, SelectionRequest, SelectionTarget,
};
use crate::error::ResolveError;
use crate::paths::{Layout, expand_user};
use crate::ports::Ports;
use crate::registry::HintRegistry;
use crate::settings::Settings;

/// Resolves user selectors into registered interpreter candidates.
pub struct RuntimeSelector {
    pub(super) ports: Ports,
    pub(super) registry: Arc<HintRegistry>,
    pub(super) settings: Settings,
    pub(super) layout: Layout,
    validator: ConflictValidator,
}

impl RuntimeSelector {
    /// Create a selector for the current platform layout.
    pub fn new(ports: Ports, registry: Arc<HintRegistry>, settings: Settings) -> Self {
        let validator = ConflictValidator::new(ports.runtime.clone(), ports.fs.clone());
        Self {
            ports,
            registry,
            settings,
            layout: Layout::current(),
            validator,
        }
    }

    /// Override the platform layout (useful for testing other platforms).
    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub const fn registry(&self) -> &Arc<HintRegistry> {
        &self.registry
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Validate `candidate` against the active runtime, then record it as
    /// required.
    pub fn register_required(&self, candidate: Candidate) -> Result<Candidate, ResolveError> {
        self.validator.validate_required(&candidate)?;
        self.registry
            .set_required(candidate.clone(), self.ports.fs.as_ref());
        Ok(candidate)
    }

    /// Record `candidate` as a soft hint.
    pub fn register_preferred(&self, candidate: Candidate) -> Candidate {
        self.registry
            .add_hint(candidate.clone(), self.ports.fs.as_ref());
        candidate
    }

    /// Register an explicit interpreter path as required.
    ///
    /// A directory is treated as an installation prefix and mapped to the
    /// interpreter inside it.
    pub fn require_python(&self, python: &Path) -> Result<Resolved<Candidate>, ResolveError> {
        let path = expand_selector_path(python);
        let Some(candidate) = self.python_candidate(&path) else {
            return Err(ResolveError::InvalidPath { path });
        };
        self.register_required(candidate).map(Resolved::clean)
    }

    /// Register an explicit interpreter path as a soft hint.
    ///
    /// Paths that exist as neither file nor directory are dropped.
    pub fn prefer_python(&self, python: &Path) -> Resolved<Option<Candidate>> {
        let path = expand_selector_path(python);
        let Some(candidate) = self.python_candidate(&path) else {
            debug!(path = %path.display(), "Ignoring Python hint that does not exist");
            return Resolved::clean(None);
        };
        Resolved::clean(Some(self.register_preferred(candidate)))
    }

    fn python_candidate(&self, path: &Path) -> Option<Candidate> {
        let fs = self.ports.fs.as_ref();
        if fs.is_file(path) {
            Some(Candidate::from(path))
        } else if fs.is_dir(path) {
            Some(Candidate::new(self.layout.virtualenv_python(path)))
        } else {
            None
        }
    }

    /// Dispatch a command-layer request to the matching resolver.
    pub fn resolve(
        &self,
        request: &SelectionRequest,
    ) -> Result<Resolved<Option<Candidate>>, ResolveError> {
        let required = request.requirement.is_required();
        match &request.target {
            SelectionTarget::Python(path) if required => {
                self.require_python(path).map(|r| r.map(Some))
            }
            SelectionTarget::Python(path) => Ok(self.prefer_python(path)),
            SelectionTarget::Virtualenv(selector) if required => self
                .require_virtualenv(selector.as_deref())
                .map(|r| r.map(Some)),
            SelectionTarget::Virtualenv(selector) => {
                Ok(self.prefer_virtualenv(selector.as_deref()))
            }
            SelectionTarget::CondaEnv { selector, conda } => {
                let manager = conda
                    .clone()
                    .map_or(ManagerHandle::Discover, ManagerHandle::Executable);
                self.resolve_named_env(
                    selector.as_deref().unwrap_or_default(),
                    &manager,
                    request.requirement,
                )
            }
            SelectionTarget::Managed(selector) => {
                self.resolve_managed(selector.as_deref(), request.requirement)
            }
        }
    }

    /// Resolve every request in order, stopping at the first fatal error.
    pub fn resolve_all(
        &self,
        requests: &[SelectionRequest],
    ) -> Result<Resolved<Vec<Candidate>>, ResolveError> {
        let mut registered = Vec::new();
        let mut warnings = Vec::new();
        for request in requests {
            let (candidate, mut extra) = self.resolve(request)?.into_parts();
            registered.extend(candidate);
            warnings.append(&mut extra);
        }
        Ok(Resolved {
            value: registered,
            warnings,
        })
    }
}

/// Expand `~` in a path-shaped selector; anything else is used verbatim.
pub(super) fn expand_selector_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) if raw.trim_start().starts_with('~') => {
            expand_user(raw).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

/// Shorthand used by the resolver tests.
#[cfg(test)]
pub(super) fn selector_for(fakes: &crate::testing::FakePorts) -> RuntimeSelector {
    RuntimeSelector::new(
        fakes.ports(),
        Arc::new(HintRegistry::new()),
        Settings::with_defaults(),
    )
    .with_layout(Layout::Posix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeFileSystem, FakePorts, FakeRuntime};

    fn fakes(fs: FakeFileSystem, runtime: FakeRuntime) -> FakePorts {
        let mut fakes = FakePorts::empty();
        fakes.fs = Arc::new(fs);
        fakes.runtime = Arc::new(runtime);
        fakes
    }

    #[test]
    fn required_missing_path_is_invalid() {
        let fakes = FakePorts::empty();
        let selector = selector_for(&fakes);

        let err = selector
            .require_python(Path::new("/opt/py/bin/python"))
            .unwrap_err();

        assert!(matches!(
            err,
            ResolveError::InvalidPath { ref path } if path == Path::new("/opt/py/bin/python")
        ));
        assert!(selector.registry().is_empty());
    }

    #[test]
    fn required_alias_of_active_runtime_is_accepted() {
        let fs = FakeFileSystem::new()
            .with_file("/usr/bin/python3")
            .with_alias("/usr/local/bin/python3", "/usr/bin/python3");
        let fakes = fakes(fs, FakeRuntime::active("/usr/bin/python3"));
        let selector = selector_for(&fakes);

        let resolved = selector
            .require_python(Path::new("/usr/local/bin/python3"))
            .unwrap();

        assert_eq!(resolved.value, Candidate::from("/usr/local/bin/python3"));
        assert_eq!(
            selector.registry().required(),
            Some(Candidate::from("/usr/local/bin/python3"))
        );
    }

    #[test]
    fn required_different_interpreter_conflicts_and_leaves_registry_alone() {
        let fs = FakeFileSystem::new().with_file("/opt/py/bin/python");
        let fakes = fakes(fs, FakeRuntime::active("/usr/bin/python3"));
        let selector = selector_for(&fakes);

        let err = selector
            .require_python(Path::new("/opt/py/bin/python"))
            .unwrap_err();

        assert!(matches!(err, ResolveError::RuntimeConflict { .. }));
        assert!(selector.registry().is_empty());
    }

    #[test]
    fn preferred_missing_path_is_dropped() {
        let fakes = FakePorts::empty();
        let selector = selector_for(&fakes);

        let resolved = selector.prefer_python(Path::new("/nowhere/python"));

        assert_eq!(resolved.value, None);
        assert!(resolved.warnings.is_empty());
        assert!(selector.registry().is_empty());
    }

    #[test]
    fn preferred_never_checks_active_runtime() {
        let fs = FakeFileSystem::new().with_file("/opt/py/bin/python");
        let fakes = fakes(fs, FakeRuntime::active("/usr/bin/python3"));
        let selector = selector_for(&fakes);

        let resolved = selector.prefer_python(Path::new("/opt/py/bin/python"));

        assert_eq!(resolved.value, Some(Candidate::from("/opt/py/bin/python")));
        assert_eq!(selector.registry().required(), None);
    }

    #[test]
    fn runtime_started_after_preferred_hint_rejects_conflicting_requirement() {
        let fs = FakeFileSystem::new()
            .with_file("/opt/py/bin/python")
            .with_file("/usr/bin/python3");
        let fakes = fakes(fs, FakeRuntime::new());
        let selector = selector_for(&fakes);

        let preferred = selector.prefer_python(Path::new("/usr/bin/python3"));
        assert_eq!(preferred.value, Some(Candidate::from("/usr/bin/python3")));

        fakes.runtime.activate(Candidate::from("/usr/bin/python3"));

        let err = selector
            .require_python(Path::new("/opt/py/bin/python"))
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::RuntimeConflict { ref active, .. }
                if *active == Candidate::from("/usr/bin/python3")
        ));

        let snapshot = selector.registry().snapshot();
        assert_eq!(snapshot.required, None);
        assert_eq!(snapshot.hints, vec![Candidate::from("/usr/bin/python3")]);
    }

    #[test]
    fn directory_maps_to_interpreter_inside() {
        let fs = FakeFileSystem::new().with_dir("/opt/py");
        let fakes = fakes(fs, FakeRuntime::new());
        let selector = selector_for(&fakes);

        let resolved = selector.require_python(Path::new("/opt/py")).unwrap();

        assert_eq!(resolved.value, Candidate::from("/opt/py/bin/python"));
    }

    #[test]
    fn resolve_all_collects_in_order() {
        let fs = FakeFileSystem::new()
            .with_file("/a/python")
            .with_file("/b/python");
        let fakes = fakes(fs, FakeRuntime::new());
        let selector = selector_for(&fakes);

        let requests = [
            SelectionRequest::preferred(SelectionTarget::Python("/b/python".into())),
            SelectionRequest::preferred(SelectionTarget::Python("/missing".into())),
            SelectionRequest::required(SelectionTarget::Python("/a/python".into())),
        ];
        let resolved = selector.resolve_all(&requests).unwrap();

        assert_eq!(
            resolved.value,
            vec![Candidate::from("/b/python"), Candidate::from("/a/python")]
        );
        let snapshot = selector.registry().snapshot();
        assert_eq!(snapshot.required, Some(Candidate::from("/a/python")));
        assert_eq!(snapshot.hints, resolved.value);
    }

    #[test]
    fn resolve_all_stops_at_first_error() {
        let fs = FakeFileSystem::new().with_file("/b/python");
        let fakes = fakes(fs, FakeRuntime::new());
        let selector = selector_for(&fakes);

        let requests = [
            SelectionRequest::required(SelectionTarget::Python("/missing".into())),
            SelectionRequest::preferred(SelectionTarget::Python("/b/python".into())),
        ];

        assert!(selector.resolve_all(&requests).is_err());
        assert!(selector.registry().is_empty());
    }

    #[test]
    fn tilde_paths_are_expanded() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(
            expand_selector_path(Path::new("~/py/bin/python")),
            home.join("py/bin/python")
        );
        assert_eq!(
            expand_selector_path(Path::new("rel/python")),
            PathBuf::from("rel/python")
        );
    }
}
