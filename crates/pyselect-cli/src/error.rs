//! CLI-specific error types and mappings.
//!
//! Maps core and runtime errors to exit codes and user-facing messages.

use pyselect_core::{ResolveError, SettingsError};
use pyselect_runtime::InitError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A requested interpreter or environment does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A different interpreter is already active.
    #[error("{0}\nA Python interpreter can only be chosen once per process; start a new process to switch.")]
    Conflict(String),

    /// Output could not be written.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The environment manager could not be run or understood.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 66: `EX_NOINPUT`
    /// - 70: `EX_SOFTWARE`
    /// - 71: `EX_OSERR`
    /// - 74: `EX_IOERR`
    /// - 78: `EX_CONFIG`
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) => 66,
            Self::Conflict(_) => 70,
            Self::Process(_) => 71,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
        }
    }
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::RuntimeConflict { .. } => Self::Conflict(err.to_string()),
            ResolveError::ManagedDistributionMissing { root: Some(_) } => Self::NotFound(format!(
                "{err}\nInstall Miniconda there first, or set PYSELECT_MINICONDA_PATH."
            )),
            ResolveError::ManagedDistributionMissing { root: None } => Self::NotFound(format!(
                "{err}\nNo data directory is available; set PYSELECT_MINICONDA_PATH."
            )),
            ResolveError::EnvironmentNotFound { ref catalog, .. } => {
                let mut msg = err.to_string();
                if !catalog.is_empty() {
                    msg.push_str("\nKnown environments:");
                    for env in catalog {
                        msg.push_str(&format!("\n  {} ({})", env.name, env.prefix.display()));
                    }
                }
                Self::NotFound(msg)
            }
            ResolveError::InvalidPath { .. } | ResolveError::NotAnEnvironment { .. } => {
                Self::NotFound(err.to_string())
            }
            ResolveError::Catalog(catalog_err) => Self::Process(catalog_err.to_string()),
        }
    }
}

impl From<InitError> for CliError {
    fn from(err: InitError) -> Self {
        Self::NotFound(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyselect_core::{Candidate, CatalogError, EnvironmentDescriptor};
    use std::path::PathBuf;

    #[test]
    fn test_conflict_exits_70_and_explains_restart() {
        let err: CliError = ResolveError::RuntimeConflict {
            requested: Candidate::from("/opt/py/bin/python"),
            active: Candidate::from("/usr/bin/python3"),
        }
        .into();
        assert_eq!(err.exit_code(), 70);
        assert!(err.to_string().contains("start a new process"));
    }

    #[test]
    fn test_not_found_lists_catalog() {
        let err: CliError = ResolveError::EnvironmentNotFound {
            selector: "bar".to_string(),
            name: "bar".to_string(),
            catalog: vec![EnvironmentDescriptor::new(
                "foo",
                "/envs/foo",
                Candidate::from("/envs/foo/bin/python"),
            )],
        }
        .into();
        assert_eq!(err.exit_code(), 66);
        assert!(err.to_string().contains("foo (/envs/foo)"));
    }

    #[test]
    fn test_catalog_failure_is_process_error() {
        let err: CliError = ResolveError::Catalog(CatalogError::ManagerNotFound {
            searched: "PATH".to_string(),
        })
        .into();
        assert_eq!(err.exit_code(), 71);
    }

    #[test]
    fn test_missing_distribution_is_not_found() {
        let err: CliError = ResolveError::ManagedDistributionMissing {
            root: Some(PathBuf::from("/data/miniconda")),
        }
        .into();
        assert_eq!(err.exit_code(), 66);
        assert!(err.to_string().contains("Install Miniconda"));
    }

    #[test]
    fn test_settings_error_is_config() {
        let err: CliError = SettingsError::EmptyEnvName.into();
        assert_eq!(err.exit_code(), 78);
    }
}
