//! Environment detection port.

use std::path::{Path, PathBuf};

/// Answers "is this directory really an environment of kind X".
///
/// Implementations inspect marker files only; they never create, modify or
/// activate anything.
pub trait EnvironmentProbePort: Send + Sync {
    /// Whether `root` is a virtualenv / venv.
    fn is_virtualenv(&self, root: &Path) -> bool;

    /// Whether `prefix` is a conda environment.
    fn is_conda_environment(&self, prefix: &Path) -> bool;

    /// Root of the virtualenv to use when the caller named none.
    fn default_virtualenv(&self) -> PathBuf;
}
