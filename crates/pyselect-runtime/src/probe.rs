//! Marker-file based environment detection.

use std::env;
use std::path::{Path, PathBuf};

use pyselect_core::{EnvironmentProbePort, Settings};
use tracing::warn;

/// Marker written by `python -m venv` and modern `virtualenv`.
const PYVENV_CFG: &str = "pyvenv.cfg";

/// Marker written by legacy `virtualenv`.
const ACTIVATE_THIS: &str = "activate_this.py";

/// Directory present in every conda environment prefix.
const CONDA_META: &str = "conda-meta";

/// Variable set by `activate` scripts of virtualenvs.
const VIRTUAL_ENV: &str = "VIRTUAL_ENV";

/// `EnvironmentProbePort` that inspects marker files on disk.
#[derive(Debug, Clone)]
pub struct OsEnvironmentProbe {
    /// Virtualenv activated in the calling shell, if any.
    activated: Option<PathBuf>,
    /// Default virtualenv when none is activated.
    fallback: PathBuf,
}

impl OsEnvironmentProbe {
    pub const fn new(activated: Option<PathBuf>, fallback: PathBuf) -> Self {
        Self {
            activated,
            fallback,
        }
    }

    /// Build from settings and the `VIRTUAL_ENV` variable.
    ///
    /// The fallback default is `<virtualenv home>/<default env name>`.
    pub fn from_settings(settings: &Settings) -> Self {
        let name = settings.effective_default_env_name();
        let fallback = match settings.effective_virtualenv_home() {
            Ok(home) => home.join(name),
            Err(e) => {
                warn!(error = %e, "No virtualenv home; default virtualenv is relative");
                PathBuf::from(name)
            }
        };
        let activated = env::var_os(VIRTUAL_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::new(activated, fallback)
    }
}

impl EnvironmentProbePort for OsEnvironmentProbe {
    fn is_virtualenv(&self, root: &Path) -> bool {
        root.join(PYVENV_CFG).is_file()
            || root.join("bin").join(ACTIVATE_THIS).is_file()
            || root.join("Scripts").join(ACTIVATE_THIS).is_file()
    }

    fn is_conda_environment(&self, prefix: &Path) -> bool {
        prefix.join(CONDA_META).is_dir()
    }

    fn default_virtualenv(&self) -> PathBuf {
        self.activated
            .clone()
            .unwrap_or_else(|| self.fallback.clone())
    }
}
