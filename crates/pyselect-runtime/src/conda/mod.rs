//! Conda environment manager adapter.

mod catalog;
mod locate;

pub use catalog::{BASE_ENV_NAME, CondaCatalog, parse_env_list};
pub use locate::{install_root, locate_conda};
