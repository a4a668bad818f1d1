//! Command handlers.
//!
//! Each handler takes the composed context and writes its report to the
//! given writer.

pub mod envs;
pub mod paths;
pub mod resolve;
