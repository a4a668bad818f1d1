//! User-supplied path normalization and default locations.

use std::path::PathBuf;

use super::error::PathError;

/// Expand a leading `~` in a user-provided path.
///
/// Relative paths stay relative: a candidate keeps the form the user gave it,
/// and same-file comparison resolves it later.
pub fn expand_user(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    if trimmed == "~" {
        return dirs::home_dir().ok_or(PathError::NoHomeDir);
    }

    if let Some(rest) = trimmed
        .strip_prefix("~/")
        .or_else(|| trimmed.strip_prefix("~\\"))
    {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(trimmed))
}

/// Default directory holding named virtualenvs (`~/.virtualenvs`).
pub fn default_virtualenv_home() -> Result<PathBuf, PathError> {
    let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
    Ok(home.join(".virtualenvs"))
}

/// The per-user data directory, if the platform has one.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir()
}

/// Install root of the managed Miniconda distribution under `data_dir`.
///
/// e.g. `~/.local/share/pyselect/miniconda` on Linux.
pub fn managed_root_under(data_dir: Option<PathBuf>) -> Result<PathBuf, PathError> {
    let data_dir = data_dir.ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("pyselect").join("miniconda"))
}
