//! In-memory port fakes for unit and downstream integration tests.
//!
//! Enabled for this crate's own tests and, for other crates, through the
//! `test-utils` feature.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{Candidate, EnvironmentDescriptor, ManagerHandle};
use crate::paths::Layout;
use crate::ports::{
    CatalogError, EnvironmentCatalogPort, EnvironmentProbePort, FileSystemPort,
    ManagedDistributionPort, Ports, RuntimeStatePort,
};
use crate::settings::{DEFAULT_ENV_NAME, canonicalize_env_name};

/// Filesystem fake with explicit files, directories and same-file aliases.
#[derive(Debug, Default, Clone)]
pub struct FakeFileSystem {
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
    aliases: HashMap<PathBuf, PathBuf>,
}

impl FakeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    /// Make `alias` resolve to `target`, like a symlink. The alias exists
    /// whenever the target does.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        self.aliases.insert(alias.into(), target.into());
        self
    }

    fn resolve<'a>(&'a self, path: &'a Path) -> &'a Path {
        self.aliases.get(path).map_or(path, PathBuf::as_path)
    }
}

impl FileSystemPort for FakeFileSystem {
    fn same_file(&self, a: &Path, b: &Path) -> bool {
        self.resolve(a) == self.resolve(b)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(self.resolve(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(self.resolve(path))
    }
}

/// Active-runtime fake that can be activated mid-test.
#[derive(Debug, Default)]
pub struct FakeRuntime {
    active: Mutex<Option<Candidate>>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(path: impl Into<PathBuf>) -> Self {
        Self {
            active: Mutex::new(Some(Candidate::new(path))),
        }
    }

    pub fn activate(&self, candidate: Candidate) {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = Some(candidate);
    }
}

impl RuntimeStatePort for FakeRuntime {
    fn active_runtime(&self) -> Option<Candidate> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

/// Environment probe fake backed by explicit sets of environment roots.
#[derive(Debug, Clone)]
pub struct FakeProbe {
    virtualenvs: HashSet<PathBuf>,
    conda_envs: HashSet<PathBuf>,
    default_virtualenv: PathBuf,
}

impl Default for FakeProbe {
    fn default() -> Self {
        Self {
            virtualenvs: HashSet::new(),
            conda_envs: HashSet::new(),
            default_virtualenv: PathBuf::from("/home/user/.virtualenvs").join(DEFAULT_ENV_NAME),
        }
    }
}

impl FakeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_virtualenv(mut self, root: impl Into<PathBuf>) -> Self {
        self.virtualenvs.insert(root.into());
        self
    }

    #[must_use]
    pub fn with_conda_env(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.conda_envs.insert(prefix.into());
        self
    }

    #[must_use]
    pub fn with_default_virtualenv(mut self, root: impl Into<PathBuf>) -> Self {
        self.default_virtualenv = root.into();
        self
    }
}

impl EnvironmentProbePort for FakeProbe {
    fn is_virtualenv(&self, root: &Path) -> bool {
        self.virtualenvs.contains(root)
    }

    fn is_conda_environment(&self, prefix: &Path) -> bool {
        self.conda_envs.contains(prefix)
    }

    fn default_virtualenv(&self) -> PathBuf {
        self.default_virtualenv.clone()
    }
}

/// Catalog fake returning a fixed list and recording every lookup.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    rows: Vec<EnvironmentDescriptor>,
    fail: bool,
    calls: Mutex<Vec<ManagerHandle>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog rows named after `(name, prefix)` pairs, in order.
    pub fn with_envs(envs: &[(&str, &str)]) -> Self {
        let rows = envs
            .iter()
            .map(|(name, prefix)| {
                let prefix = PathBuf::from(prefix);
                let python = Candidate::new(Layout::current().conda_python(&prefix));
                EnvironmentDescriptor::new(*name, prefix, python)
            })
            .collect();
        Self::with_rows(rows)
    }

    pub fn with_rows(rows: Vec<EnvironmentDescriptor>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// A catalog whose manager cannot be found.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Every manager handle `enumerate` was called with.
    pub fn calls(&self) -> Vec<ManagerHandle> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl EnvironmentCatalogPort for FakeCatalog {
    fn enumerate(
        &self,
        manager: &ManagerHandle,
    ) -> Result<Vec<EnvironmentDescriptor>, CatalogError> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(manager.clone());
        if self.fail {
            return Err(CatalogError::ManagerNotFound {
                searched: "fake".to_string(),
            });
        }
        Ok(self.rows.clone())
    }

    fn canonicalize(&self, raw: &str) -> String {
        canonicalize_env_name(raw, DEFAULT_ENV_NAME)
    }
}

/// Managed distribution fake.
#[derive(Debug, Clone)]
pub struct FakeManaged {
    root: PathBuf,
    installed: bool,
}

impl FakeManaged {
    pub fn installed(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            installed: true,
        }
    }

    pub fn missing(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            installed: false,
        }
    }
}

impl ManagedDistributionPort for FakeManaged {
    fn root(&self) -> Option<PathBuf> {
        Some(self.root.clone())
    }

    fn is_installed(&self) -> bool {
        self.installed
    }

    fn manager_handle(&self) -> ManagerHandle {
        ManagerHandle::Executable(Layout::current().conda_executable(&self.root))
    }
}

/// Typed handles to every fake, for assertions after wiring.
pub struct FakePorts {
    pub fs: Arc<FakeFileSystem>,
    pub runtime: Arc<FakeRuntime>,
    pub probe: Arc<FakeProbe>,
    pub catalog: Arc<FakeCatalog>,
    pub managed: Arc<FakeManaged>,
}

impl FakePorts {
    pub fn new(
        fs: FakeFileSystem,
        runtime: FakeRuntime,
        probe: FakeProbe,
        catalog: FakeCatalog,
        managed: FakeManaged,
    ) -> Self {
        Self {
            fs: Arc::new(fs),
            runtime: Arc::new(runtime),
            probe: Arc::new(probe),
            catalog: Arc::new(catalog),
            managed: Arc::new(managed),
        }
    }

    /// Everything empty: no runtime, no environments, Miniconda missing.
    pub fn empty() -> Self {
        Self::new(
            FakeFileSystem::new(),
            FakeRuntime::new(),
            FakeProbe::new(),
            FakeCatalog::new(),
            FakeManaged::missing("/opt/miniconda"),
        )
    }

    pub fn ports(&self) -> Ports {
        Ports::new(
            self.fs.clone(),
            self.runtime.clone(),
            self.probe.clone(),
            self.catalog.clone(),
            self.managed.clone(),
        )
    }
}
