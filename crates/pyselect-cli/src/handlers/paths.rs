//! Paths command handler.
//!
//! Displays the effective configuration and default locations in
//! `key = value` form, for diagnosing why a selector resolved where it did.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Effective configuration after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub default_env_name: String,
    pub virtualenv_home: Option<PathBuf>,
    pub default_virtualenv: PathBuf,
    pub conda_executable: Option<PathBuf>,
    pub managed_root: Option<PathBuf>,
    pub managed_installed: bool,
    pub required_python: Option<PathBuf>,
}

impl ResolvedConfig {
    pub fn from_context(ctx: &CliContext) -> Self {
        let settings = &ctx.settings;
        Self {
            default_env_name: settings.effective_default_env_name().to_string(),
            virtualenv_home: settings.effective_virtualenv_home().ok(),
            default_virtualenv: ctx.ports.probe.default_virtualenv(),
            conda_executable: settings.conda_executable.clone(),
            managed_root: ctx.ports.managed.root(),
            managed_installed: ctx.ports.managed.is_installed(),
            required_python: settings.required_python.clone(),
        }
    }
}

fn optional(path: Option<&PathBuf>) -> String {
    path.map_or_else(|| "(unset)".to_string(), |p| p.display().to_string())
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "default_env_name = {}", self.default_env_name)?;
        writeln!(
            f,
            "virtualenv_home = {}",
            optional(self.virtualenv_home.as_ref())
        )?;
        writeln!(
            f,
            "default_virtualenv = {}",
            self.default_virtualenv.display()
        )?;
        writeln!(
            f,
            "conda_executable = {}",
            optional(self.conda_executable.as_ref())
        )?;
        writeln!(f, "managed_root = {}", optional(self.managed_root.as_ref()))?;
        writeln!(f, "managed_installed = {}", self.managed_installed)?;
        write!(
            f,
            "required_python = {}",
            optional(self.required_python.as_ref())
        )
    }
}

/// Execute the paths command.
pub fn execute(ctx: &CliContext, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{}", ResolvedConfig::from_context(ctx))?;
    Ok(())
}
