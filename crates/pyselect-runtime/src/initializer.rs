//! Runtime start: the consumer of the hint registry.
//!
//! The first start reads the registry once and fixes the active interpreter
//! for the rest of the process; hints registered afterwards only matter for
//! conflict checks.

use std::path::PathBuf;

use pyselect_core::{Candidate, FileSystemPort, HintRegistry, RuntimeStatePort};
use thiserror::Error;
use tracing::{debug, info};

use crate::active::ActiveRuntime;

#[cfg(target_os = "windows")]
const PYTHON_CANDIDATES: &[&str] = &["python"];

#[cfg(not(target_os = "windows"))]
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Errors raised when no interpreter can be started.
#[derive(Debug, Error)]
pub enum InitError {
    /// The required interpreter is not a file.
    #[error("Required Python interpreter {} does not exist", path.display())]
    RequiredMissing { path: PathBuf },

    /// No hint exists and nothing usable is on `PATH`.
    #[error("No Python interpreter found (hints: {hints}; PATH tried: {tried})")]
    NoInterpreter { hints: String, tried: String },
}

/// Pick the interpreter to start from the registry contents.
///
/// Required wins; otherwise the first hint that exists as a file; otherwise
/// the first of `python3`/`python` that `path_lookup` finds.
pub fn select_interpreter_with(
    registry: &HintRegistry,
    fs: &dyn FileSystemPort,
    path_lookup: impl Fn(&str) -> Option<PathBuf>,
) -> Result<Candidate, InitError> {
    let snapshot = registry.snapshot();

    if let Some(required) = snapshot.required {
        if fs.is_file(required.path()) {
            return Ok(required);
        }
        return Err(InitError::RequiredMissing {
            path: required.into_path_buf(),
        });
    }

    for hint in &snapshot.hints {
        if fs.is_file(hint.path()) {
            return Ok(hint.clone());
        }
        debug!(hint = %hint, "Skipping hint that does not exist");
    }

    if let Some(found) = PYTHON_CANDIDATES.iter().find_map(|name| path_lookup(name)) {
        debug!(python = %found.display(), "Falling back to PATH interpreter");
        return Ok(Candidate::new(found));
    }

    Err(InitError::NoInterpreter {
        hints: if snapshot.hints.is_empty() {
            "none".to_string()
        } else {
            snapshot
                .hints
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        },
        tried: PYTHON_CANDIDATES.join(", "),
    })
}

/// Start the runtime once: select an interpreter and mark it active.
///
/// If a runtime is already active it is returned unchanged.
pub fn start_runtime(
    registry: &HintRegistry,
    state: &ActiveRuntime,
    fs: &dyn FileSystemPort,
) -> Result<Candidate, InitError> {
    if let Some(active) = state.active_runtime() {
        return Ok(active);
    }
    let chosen = select_interpreter_with(registry, fs, |name| which::which(name).ok())?;
    let active = state.activate(chosen).clone();
    info!(python = %active, "Activated Python runtime");
    Ok(active)
}
