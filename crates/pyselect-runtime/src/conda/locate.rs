//! Locating the conda executable.

use std::path::{Path, PathBuf};

use pyselect_core::{CatalogError, Layout, ManagerHandle};
use tracing::debug;

/// Install roots probed when conda is neither configured nor on `PATH`.
const COMMON_HOME_ROOTS: &[&str] = &["miniconda3", "anaconda3", "miniforge3"];

#[cfg(not(target_os = "windows"))]
const COMMON_SYSTEM_ROOTS: &[&str] = &["/opt/conda", "/opt/miniconda3"];

#[cfg(target_os = "windows")]
const COMMON_SYSTEM_ROOTS: &[&str] = &[];

/// Resolve the conda executable for a catalog query.
///
/// Order: the handle's explicit executable, the configured executable, `conda`
/// on `PATH`, then well-known install roots. An explicit executable is used
/// as given even if it does not exist, so that the failure names it.
pub fn locate_conda(
    handle: &ManagerHandle,
    configured: Option<&Path>,
    layout: Layout,
) -> Result<PathBuf, CatalogError> {
    if let ManagerHandle::Executable(exe) = handle {
        return Ok(exe.clone());
    }
    if let Some(exe) = configured {
        return Ok(exe.to_path_buf());
    }
    if let Ok(exe) = which::which("conda") {
        debug!(conda = %exe.display(), "Found conda on PATH");
        return Ok(exe);
    }

    let roots = common_roots();
    for root in &roots {
        let exe = layout.conda_executable(root);
        if exe.is_file() {
            debug!(conda = %exe.display(), "Found conda in common install root");
            return Ok(exe);
        }
    }

    let mut searched = vec!["PATH".to_string()];
    searched.extend(roots.iter().map(|r| r.display().to_string()));
    Err(CatalogError::ManagerNotFound {
        searched: searched.join(", "),
    })
}

fn common_roots() -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = dirs::home_dir()
        .map(|home| COMMON_HOME_ROOTS.iter().map(|r| home.join(r)).collect())
        .unwrap_or_default();
    roots.extend(COMMON_SYSTEM_ROOTS.iter().map(PathBuf::from));
    roots
}

/// The installation root owning a conda executable.
///
/// `<root>/bin/conda`, `<root>/condabin/conda` and `<root>/Scripts/conda.exe`
/// all map to `<root>`. Anything else has no known root.
pub fn install_root(conda: &Path) -> Option<PathBuf> {
    let dir = conda.parent()?;
    let dir_name = dir.file_name()?.to_str()?;
    if ["bin", "condabin", "Scripts"]
        .iter()
        .any(|known| dir_name.eq_ignore_ascii_case(known))
    {
        dir.parent().map(Path::to_path_buf)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_handle_wins_over_configuration() {
        let handle = ManagerHandle::Executable(PathBuf::from("/opt/mc/bin/conda"));
        let exe = locate_conda(&handle, Some(Path::new("/other/conda")), Layout::Posix).unwrap();
        assert_eq!(exe, PathBuf::from("/opt/mc/bin/conda"));
    }

    #[test]
    fn test_configured_executable_used_for_discovery() {
        let exe = locate_conda(
            &ManagerHandle::Discover,
            Some(Path::new("/srv/conda/bin/conda")),
            Layout::Posix,
        )
        .unwrap();
        assert_eq!(exe, PathBuf::from("/srv/conda/bin/conda"));
    }

    #[test]
    fn test_install_root_of_known_layouts() {
        assert_eq!(
            install_root(Path::new("/opt/conda/bin/conda")),
            Some(PathBuf::from("/opt/conda"))
        );
        assert_eq!(
            install_root(Path::new("/opt/conda/condabin/conda")),
            Some(PathBuf::from("/opt/conda"))
        );
        assert_eq!(install_root(Path::new("/usr/local/conda")), None);
    }
}
