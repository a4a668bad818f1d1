//! Command-line adapter for pyselect.
//!
//! `main.rs` is the composition root; this library holds the parser,
//! bootstrap and command handlers so they can be tested without spawning the
//! binary.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary target.
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap, bootstrap_in};
pub use commands::{Commands, EnvsArgs, ResolveArgs};
pub use error::CliError;
pub use parser::Cli;
