//! Path utilities for interpreter and environment locations.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Platform layout rules are pure functions of the target (`Layout`)
//! - No filesystem probing here; that belongs to adapters

mod error;
mod platform;
mod user;

pub use error::PathError;
pub use platform::{Layout, looks_like_path};
pub use user::{default_data_dir, default_virtualenv_home, expand_user, managed_root_under};
