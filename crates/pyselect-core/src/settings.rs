//! Settings domain types and validation.
//!
//! Settings come from the environment, optionally seeded from a `.env` file
//! by the CLI.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::paths::{PathError, default_virtualenv_home, managed_root_under};

/// Environment name used when a selector is empty or `"default"`.
pub const DEFAULT_ENV_NAME: &str = "pyselect";

/// Overrides the default environment name.
pub const ENV_DEFAULT_ENV: &str = "PYSELECT_DEFAULT_ENV";
/// Directory holding named virtualenvs (virtualenvwrapper convention).
pub const ENV_WORKON_HOME: &str = "WORKON_HOME";
/// Explicit conda executable.
pub const ENV_CONDA: &str = "PYSELECT_CONDA";
/// Install root of the managed Miniconda distribution.
pub const ENV_MINICONDA_PATH: &str = "PYSELECT_MINICONDA_PATH";
/// Interpreter that must be used, overriding every other hint.
pub const ENV_PYTHON: &str = "PYSELECT_PYTHON";

/// Application settings structure.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Name substituted for empty or `"default"` environment selectors.
    pub default_env_name: Option<String>,

    /// Directory holding named virtualenvs.
    pub virtualenv_home: Option<PathBuf>,

    /// Conda executable used when no manager is given explicitly.
    pub conda_executable: Option<PathBuf>,

    /// Install root of the managed Miniconda distribution.
    pub managed_root: Option<PathBuf>,

    /// Interpreter forced as a required hint.
    pub required_python: Option<PathBuf>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            default_env_name: Some(DEFAULT_ENV_NAME.to_string()),
            ..Self::default()
        }
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut settings = Self::with_defaults();
        if let Some(name) = get(ENV_DEFAULT_ENV) {
            settings.default_env_name = Some(name.trim().to_string());
        }
        settings.virtualenv_home = get(ENV_WORKON_HOME).map(PathBuf::from);
        settings.conda_executable = get(ENV_CONDA).map(PathBuf::from);
        settings.managed_root = get(ENV_MINICONDA_PATH).map(PathBuf::from);
        settings.required_python = get(ENV_PYTHON).map(PathBuf::from);
        settings
    }

    /// Get the effective default environment name (with default fallback).
    pub fn effective_default_env_name(&self) -> &str {
        self.default_env_name
            .as_deref()
            .unwrap_or(DEFAULT_ENV_NAME)
    }

    /// Get the effective virtualenv home (`~/.virtualenvs` fallback).
    pub fn effective_virtualenv_home(&self) -> Result<PathBuf, PathError> {
        match self.virtualenv_home {
            Some(ref home) => Ok(home.clone()),
            None => default_virtualenv_home(),
        }
    }

    /// Get the effective managed distribution root, defaulting to a
    /// directory under `data_dir`.
    pub fn effective_managed_root_in(
        &self,
        data_dir: Option<PathBuf>,
    ) -> Result<PathBuf, PathError> {
        match self.managed_root {
            Some(ref root) => Ok(root.clone()),
            None => managed_root_under(data_dir),
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Default environment name cannot be empty")]
    EmptyEnvName,

    #[error("Default environment name '{0}' must be a name, not a path")]
    EnvNameIsPath(String),

    #[error("{field} cannot be an empty path")]
    EmptyPath { field: &'static str },
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(ref name) = settings.default_env_name {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SettingsError::EmptyEnvName);
        }
        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(SettingsError::EnvNameIsPath(trimmed.to_string()));
        }
    }

    let paths = [
        ("virtualenv_home", &settings.virtualenv_home),
        ("conda_executable", &settings.conda_executable),
        ("managed_root", &settings.managed_root),
        ("required_python", &settings.required_python),
    ];
    for (field, value) in paths {
        if value.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(SettingsError::EmptyPath { field });
        }
    }

    Ok(())
}

/// Normalize an environment selector to a catalog name.
///
/// Trims whitespace and maps the empty selector and the `"default"`
/// placeholder to `default_name`.
pub fn canonicalize_env_name(raw: &str, default_name: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("default") {
        default_name.to_string()
    } else {
        trimmed.to_string()
    }
}
