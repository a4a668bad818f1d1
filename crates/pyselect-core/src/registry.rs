//! Process-wide interpreter hint registry.
//!
//! Holds the ordered preference list and at most one required interpreter.
//! The runtime initializer reads it once, when the first interpreter starts.
//!
//! The registry never validates on its own. Callers that set a required
//! candidate must run the conflict check first
//! (see [`ConflictValidator`](crate::services::ConflictValidator)); the lock
//! is only taken for the read-modify-write of a single registration.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Candidate;
use crate::ports::FileSystemPort;

/// Point-in-time copy of the registry contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// The required interpreter, if one was set.
    pub required: Option<Candidate>,
    /// Preference-ordered hints, unique by same-file identity.
    pub hints: Vec<Candidate>,
}

#[derive(Debug, Default)]
struct RegistryState {
    hints: Vec<Candidate>,
    required: Option<Candidate>,
}

/// Ordered, same-file-unique collection of interpreter hints.
///
/// Construct one per process (or per test) and share it by reference or
/// `Arc`.
#[derive(Debug, Default)]
pub struct HintRegistry {
    state: Mutex<RegistryState>,
}

impl HintRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        // No invariant spans both fields, so a poisoned guard is still usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record `candidate` as a hint and, when `required`, as the required
    /// interpreter.
    ///
    /// The hint is appended only if no existing hint is the same file; the
    /// first-seen spelling is kept. Returns `true` when a hint was appended.
    pub fn register(&self, candidate: Candidate, required: bool, fs: &dyn FileSystemPort) -> bool {
        let mut state = self.lock();

        let duplicate = state
            .hints
            .iter()
            .any(|existing| fs.same_file(existing.path(), candidate.path()));

        if required {
            debug!(python = %candidate, "Setting required Python");
            state.required = Some(candidate.clone());
        }

        if duplicate {
            debug!(python = %candidate, "Hint already registered");
            return false;
        }

        debug!(python = %candidate, position = state.hints.len(), "Registered Python hint");
        state.hints.push(candidate);
        true
    }

    /// Record a soft hint.
    pub fn add_hint(&self, candidate: Candidate, fs: &dyn FileSystemPort) -> bool {
        self.register(candidate, false, fs)
    }

    /// Record a required interpreter. The caller must have validated it.
    pub fn set_required(&self, candidate: Candidate, fs: &dyn FileSystemPort) {
        self.register(candidate, true, fs);
    }

    pub fn required(&self) -> Option<Candidate> {
        self.lock().required.clone()
    }

    pub fn hints(&self) -> Vec<Candidate> {
        self.lock().hints.clone()
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        let state = self.lock();
        RegistrySnapshot {
            required: state.required.clone(),
            hints: state.hints.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        let state = self.lock();
        state.hints.is_empty() && state.required.is_none()
    }
}
