//! Process-wide record of the started interpreter.

use std::sync::OnceLock;

use pyselect_core::{Candidate, RuntimeStatePort};

/// Write-once active runtime.
///
/// The first [`activate`](Self::activate) wins; later calls return the
/// interpreter already recorded.
#[derive(Debug, Default)]
pub struct ActiveRuntime {
    active: OnceLock<Candidate>,
}

impl ActiveRuntime {
    pub const fn new() -> Self {
        Self {
            active: OnceLock::new(),
        }
    }

    /// Record `candidate` as active unless one already is.
    pub fn activate(&self, candidate: Candidate) -> &Candidate {
        self.active.get_or_init(|| candidate)
    }
}

impl RuntimeStatePort for ActiveRuntime {
    fn active_runtime(&self) -> Option<Candidate> {
        self.active.get().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_activation_is_permanent() {
        let runtime = ActiveRuntime::new();
        assert!(!runtime.is_active());

        let first = runtime.activate(Candidate::from("/usr/bin/python3")).clone();
        let second = runtime.activate(Candidate::from("/opt/py/bin/python")).clone();

        assert_eq!(first, Candidate::from("/usr/bin/python3"));
        assert_eq!(second, first);
        assert_eq!(runtime.active_runtime(), Some(first));
    }
}
