//! Active-runtime observation port.

use crate::domain::Candidate;

/// Read-only view of the interpreter already started in this process.
///
/// Once an implementation reports an active runtime, the reported path must
/// never change for the rest of the process lifetime.
pub trait RuntimeStatePort: Send + Sync {
    /// The interpreter that is active, if any.
    fn active_runtime(&self) -> Option<Candidate>;

    fn is_active(&self) -> bool {
        self.active_runtime().is_some()
    }
}
