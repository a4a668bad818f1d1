//! `EnvironmentCatalogPort` backed by `conda env list --json`.

use std::path::{Path, PathBuf};
use std::process::Command;

use pyselect_core::{
    CatalogError, Candidate, EnvironmentCatalogPort, EnvironmentDescriptor, Layout,
    ManagerHandle, Settings, canonicalize_env_name,
};
use serde::Deserialize;
use tracing::{debug, info};

use super::locate::{install_root, locate_conda};

/// Name conda gives its installation root environment.
pub const BASE_ENV_NAME: &str = "base";

/// Shape of `conda env list --json`; extra keys are ignored.
#[derive(Debug, Deserialize)]
struct EnvList {
    envs: Vec<PathBuf>,
}

/// Conda-backed environment catalog.
#[derive(Debug, Clone)]
pub struct CondaCatalog {
    configured: Option<PathBuf>,
    default_env_name: String,
    layout: Layout,
}

impl CondaCatalog {
    pub fn new(configured: Option<PathBuf>, default_env_name: impl Into<String>) -> Self {
        Self {
            configured,
            default_env_name: default_env_name.into(),
            layout: Layout::current(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.conda_executable.clone(),
            settings.effective_default_env_name(),
        )
    }

    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    fn run_env_list(conda: &Path) -> Result<String, CatalogError> {
        let command = format!("{} env list --json", conda.display());
        debug!(command = %command, "Listing conda environments");

        let output = Command::new(conda)
            .args(["env", "list", "--json"])
            .output()
            .map_err(|e| CatalogError::CommandFailed {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CatalogError::CommandFailed {
                command,
                reason: format!("{} ({})", stderr.trim(), output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl EnvironmentCatalogPort for CondaCatalog {
    fn enumerate(
        &self,
        manager: &ManagerHandle,
    ) -> Result<Vec<EnvironmentDescriptor>, CatalogError> {
        let conda = locate_conda(manager, self.configured.as_deref(), self.layout)?;
        let stdout = Self::run_env_list(&conda)?;
        let envs = parse_env_list(&stdout, &conda, self.layout).map_err(|e| {
            CatalogError::Parse {
                command: format!("{} env list --json", conda.display()),
                reason: e.to_string(),
            }
        })?;
        info!(conda = %conda.display(), count = envs.len(), "Enumerated conda environments");
        Ok(envs)
    }

    fn canonicalize(&self, raw: &str) -> String {
        canonicalize_env_name(raw, &self.default_env_name)
    }
}

/// Turn `conda env list --json` output into catalog rows, preserving conda's
/// order.
///
/// The prefix owning `conda` is named [`BASE_ENV_NAME`]; every other prefix
/// is named by its final path component.
pub fn parse_env_list(
    json: &str,
    conda: &Path,
    layout: Layout,
) -> Result<Vec<EnvironmentDescriptor>, serde_json::Error> {
    let list: EnvList = serde_json::from_str(json)?;
    let root = install_root(conda);

    Ok(list
        .envs
        .into_iter()
        .map(|prefix| {
            let name = if root.as_deref() == Some(prefix.as_path()) {
                BASE_ENV_NAME.to_string()
            } else {
                prefix
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            };
            let python = Candidate::new(layout.conda_python(&prefix));
            EnvironmentDescriptor::new(name, prefix, python)
        })
        .collect())
}
