//! Domain types for interpreter selection.
//!
//! These are pure data types with no infrastructure dependencies.

mod candidate;
mod environment;
mod outcome;
mod request;

pub use candidate::Candidate;
pub use environment::{EnvironmentDescriptor, EnvironmentKind, ManagerHandle};
pub use outcome::{Requirement, ResolveWarning, Resolved};
pub use request::{SelectionRequest, SelectionTarget};
