//! Platform layout conventions for interpreter locations.
//!
//! Which suffix is used is a pure function of the target platform, never of
//! the environment's contents, so both layouts are testable on every host.

use std::path::{Path, PathBuf};

/// Directory layout of Python installations on a platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `Scripts\python.exe` in virtualenvs, `python.exe` at conda prefixes.
    Windows,
    /// `bin/python` everywhere.
    Posix,
}

impl Layout {
    /// Layout of the platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Interpreter inside a virtualenv root.
    pub fn virtualenv_python(self, root: &Path) -> PathBuf {
        match self {
            Self::Windows => root.join("Scripts").join("python.exe"),
            Self::Posix => root.join("bin").join("python"),
        }
    }

    /// Interpreter inside a conda environment prefix.
    pub fn conda_python(self, prefix: &Path) -> PathBuf {
        match self {
            Self::Windows => prefix.join("python.exe"),
            Self::Posix => prefix.join("bin").join("python"),
        }
    }

    /// The conda executable shipped with a conda installation root.
    pub fn conda_executable(self, root: &Path) -> PathBuf {
        match self {
            Self::Windows => root.join("condabin").join("conda.bat"),
            Self::Posix => root.join("bin").join("conda"),
        }
    }
}

/// Whether a selector string should be treated as a filesystem path rather
/// than an environment name.
pub fn looks_like_path(selector: &str) -> bool {
    let trimmed = selector.trim();
    trimmed == "~"
        || trimmed.starts_with("~/")
        || (cfg!(windows) && trimmed.starts_with("~\\"))
        || trimmed.contains('/')
        || (cfg!(windows) && trimmed.contains('\\'))
}
