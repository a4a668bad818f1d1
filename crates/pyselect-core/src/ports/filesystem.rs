//! Filesystem query port.
//!
//! All "is this the same interpreter" decisions go through
//! [`FileSystemPort::same_file`] so that symlinks, relative paths and
//! case-insensitive filesystems are handled in exactly one place.

use std::path::Path;

/// Read-only filesystem queries used by the resolvers.
///
/// # Platform semantics of `same_file`
///
/// Implementations must treat two paths as the same file when they resolve to
/// the same on-disk object: symlinks are followed, relative paths are resolved
/// against the working directory, and on case-insensitive filesystems
/// (Windows, default macOS) paths differing only in case are equal.
pub trait FileSystemPort: Send + Sync {
    /// Whether `a` and `b` denote the same underlying file.
    fn same_file(&self, a: &Path, b: &Path) -> bool;

    /// Whether `path` exists and is a regular file (after following symlinks).
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` exists as either a file or a directory.
    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }
}
