//! The managed Miniconda distribution.

use std::path::PathBuf;

use pyselect_core::paths::default_data_dir;
use pyselect_core::{Layout, ManagedDistributionPort, ManagerHandle, Settings};
use tracing::debug;

/// Miniconda installed under a pyselect-owned root.
///
/// Installation itself is out of scope; this only reports where the
/// distribution lives and whether its conda executable is present. Without a
/// root the distribution is simply not installed.
#[derive(Debug, Clone)]
pub struct MinicondaDistribution {
    root: Option<PathBuf>,
    layout: Layout,
}

impl MinicondaDistribution {
    pub const fn new(root: Option<PathBuf>) -> Self {
        Self {
            root,
            layout: Layout::current(),
        }
    }

    /// Root from `PYSELECT_MINICONDA_PATH`, else the per-user data directory.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::from_settings_in(settings, default_data_dir())
    }

    /// Like [`from_settings`](Self::from_settings) with an explicit data
    /// directory.
    pub fn from_settings_in(settings: &Settings, data_dir: Option<PathBuf>) -> Self {
        let root = match settings.effective_managed_root_in(data_dir) {
            Ok(root) => Some(root),
            Err(e) => {
                debug!(error = %e, "No Miniconda location; managed environments unavailable");
                None
            }
        };
        Self::new(root)
    }

    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    fn conda_executable(&self) -> Option<PathBuf> {
        self.root
            .as_deref()
            .map(|root| self.layout.conda_executable(root))
    }
}

impl ManagedDistributionPort for MinicondaDistribution {
    fn root(&self) -> Option<PathBuf> {
        self.root.clone()
    }

    fn is_installed(&self) -> bool {
        self.conda_executable().is_some_and(|exe| exe.is_file())
    }

    fn manager_handle(&self) -> ManagerHandle {
        self.conda_executable()
            .map_or(ManagerHandle::Discover, ManagerHandle::Executable)
    }
}
