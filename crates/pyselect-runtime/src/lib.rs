//! OS adapters for pyselect.
//!
//! Implements the `pyselect-core` ports against the real filesystem, the
//! `conda` command line and the process environment, and provides the runtime
//! initializer that consumes the hint registry.

#![deny(unsafe_code)]

mod active;
pub mod conda;
mod fs;
pub mod initializer;
mod managed;
pub mod ports_impl;
mod probe;

pub use active::ActiveRuntime;
pub use conda::CondaCatalog;
pub use fs::OsFileSystem;
pub use initializer::{InitError, select_interpreter_with, start_runtime};
pub use managed::MinicondaDistribution;
pub use ports_impl::{os_ports, os_ports_in};
pub use probe::OsEnvironmentProbe;
