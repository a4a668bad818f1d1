//! Real filesystem adapter.

use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

use pyselect_core::FileSystemPort;

/// `FileSystemPort` backed by `std::fs`.
///
/// `same_file` follows symlinks via canonicalization and, on Unix, also
/// compares device and inode numbers (hard links). When either path does not
/// exist, the paths are compared lexically after making them absolute, and
/// case-folded on Windows and macOS.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl OsFileSystem {
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystemPort for OsFileSystem {
    fn same_file(&self, a: &Path, b: &Path) -> bool {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(ca), Ok(cb)) => ca == cb || same_inode(&ca, &cb),
            _ => lexical_key(a) == lexical_key(b),
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(unix)]
fn same_inode(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_inode(_a: &Path, _b: &Path) -> bool {
    false
}

/// Absolute, lexically normalized comparison key for a path that may not
/// exist.
fn lexical_key(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    if cfg!(any(windows, target_os = "macos")) {
        PathBuf::from(normalized.to_string_lossy().to_lowercase())
    } else {
        normalized
    }
}
