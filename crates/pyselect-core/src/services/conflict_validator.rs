//! Conflict check between a required interpreter and the active one.

use std::sync::Arc;

use tracing::debug;

use crate::domain::Candidate;
use crate::error::ResolveError;
use crate::ports::{FileSystemPort, RuntimeStatePort};

/// Rejects a required interpreter that differs from the one already running.
///
/// Once an interpreter is active in the process it cannot be swapped; the
/// only remedy is a fresh process. The check therefore runs at the moment a
/// requirement is stated, not when the runtime is later initialized.
#[derive(Clone)]
pub struct ConflictValidator {
    runtime: Arc<dyn RuntimeStatePort>,
    fs: Arc<dyn FileSystemPort>,
}

impl ConflictValidator {
    pub fn new(runtime: Arc<dyn RuntimeStatePort>, fs: Arc<dyn FileSystemPort>) -> Self {
        Self { runtime, fs }
    }

    /// Succeeds when no interpreter is active, or when the active one is the
    /// same file as `candidate`.
    pub fn validate_required(&self, candidate: &Candidate) -> Result<(), ResolveError> {
        let Some(active) = self.runtime.active_runtime() else {
            return Ok(());
        };

        if self.fs.same_file(active.path(), candidate.path()) {
            debug!(python = %candidate, active = %active, "Required Python matches active runtime");
            return Ok(());
        }

        Err(ResolveError::RuntimeConflict {
            requested: candidate.clone(),
            active,
        })
    }
}
