//! Resolution services.
//!
//! `RuntimeSelector` is the single entry point; its operations are split by
//! selector kind across the submodules.

mod conflict_validator;
mod managed;
mod named_env;
mod runtime_selector;
mod virtualenv;

pub use conflict_validator::ConflictValidator;
pub use runtime_selector::RuntimeSelector;
