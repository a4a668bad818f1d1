//! Interpreter candidate type.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A filesystem path believed to point at a Python interpreter.
///
/// The derived `PartialEq` compares the literal path. Two different strings
/// can name the same binary (symlinks, relative forms, case-insensitive
/// filesystems), so anything that decides whether two candidates are "the
/// same interpreter" must go through
/// [`FileSystemPort::same_file`](crate::ports::FileSystemPort::same_file).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate(PathBuf);

impl Candidate {
    /// Wrap a path as a candidate.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// The path exactly as it was supplied.
    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for Candidate {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for Candidate {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for Candidate {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl From<&str> for Candidate {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
