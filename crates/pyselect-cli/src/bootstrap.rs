//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where adapters are wired together for the
//! CLI. Command handlers receive the composed [`CliContext`].

use std::path::PathBuf;
use std::sync::Arc;

use pyselect_core::paths::default_data_dir;
use pyselect_core::{Candidate, HintRegistry, Ports, RuntimeSelector, Settings, validate_settings};
use pyselect_runtime::{ActiveRuntime, os_ports_in};
use tracing::debug;

use crate::error::CliError;

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Effective settings for this invocation.
    pub settings: Settings,
    /// Adapters, shared with the selector.
    pub ports: Ports,
    /// Hint registry for this process.
    pub registry: Arc<HintRegistry>,
    /// The interpreter started by `--activate`, if any.
    pub runtime: Arc<ActiveRuntime>,
    /// Resolution entry point.
    pub selector: RuntimeSelector,
}

impl CliContext {
    /// Register `PYSELECT_PYTHON`, if set, as the required interpreter.
    pub fn apply_required_python(&self) -> Result<Option<Candidate>, CliError> {
        let Some(python) = &self.settings.required_python else {
            return Ok(None);
        };
        debug!(python = %python.display(), "Applying PYSELECT_PYTHON");
        let resolved = self.selector.require_python(python)?;
        Ok(Some(resolved.value))
    }
}

/// Validate settings and compose the context.
pub fn bootstrap(settings: Settings) -> Result<CliContext, CliError> {
    bootstrap_in(settings, default_data_dir())
}

/// Like [`bootstrap`], with the per-user data directory supplied by the
/// caller. Only the managed Miniconda location depends on it.
pub fn bootstrap_in(settings: Settings, data_dir: Option<PathBuf>) -> Result<CliContext, CliError> {
    validate_settings(&settings)?;

    let runtime = Arc::new(ActiveRuntime::new());
    let ports = os_ports_in(&settings, Arc::clone(&runtime), data_dir);
    let registry = Arc::new(HintRegistry::new());
    let selector = RuntimeSelector::new(ports.clone(), Arc::clone(&registry), settings.clone());

    Ok(CliContext {
        settings,
        ports,
        registry,
        runtime,
        selector,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_in(dir: &std::path::Path) -> Settings {
        Settings {
            virtualenv_home: Some(dir.join("venvs")),
            managed_root: Some(dir.join("miniconda")),
            ..Settings::with_defaults()
        }
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            default_env_name: Some("a/b".to_string()),
            ..Settings::with_defaults()
        };
        let err = bootstrap(settings).err().unwrap();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_required_python_applied_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let python = dir.path().join("python3");
        std::fs::write(&python, "").unwrap();

        let mut settings = settings_in(dir.path());
        settings.required_python = Some(python.clone());
        let ctx = bootstrap(settings).unwrap();

        let applied = ctx.apply_required_python().unwrap();
        assert_eq!(applied, Some(Candidate::new(python.clone())));
        assert_eq!(ctx.registry.required(), Some(Candidate::new(python)));
    }

    #[test]
    fn test_no_data_dir_only_affects_managed_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let python = dir.path().join("python3");
        std::fs::write(&python, "").unwrap();
        let settings = Settings {
            virtualenv_home: Some(dir.path().join("venvs")),
            ..Settings::with_defaults()
        };

        let ctx = bootstrap_in(settings, None).unwrap();
        assert_eq!(ctx.ports.managed.root(), None);

        let resolved = ctx.selector.require_python(&python).unwrap();
        assert_eq!(resolved.value, Candidate::new(python));

        let err: CliError = ctx.selector.require_managed(None).unwrap_err().into();
        assert_eq!(err.exit_code(), 66);
    }

    #[test]
    fn test_missing_required_python_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings_in(dir.path());
        settings.required_python = Some(PathBuf::from("/nonexistent/python"));
        let ctx = bootstrap(settings).unwrap();

        let err = ctx.apply_required_python().unwrap_err();
        assert_eq!(err.exit_code(), 66);
    }
}
