//! Core domain types, ports and resolution policy for pyselect.
//!
//! pyselect decides which Python interpreter a process should use. Callers
//! state hints (an interpreter path, a virtualenv, a conda environment, or an
//! environment of the managed Miniconda distribution), each either
//! *required* or *preferred*. The core turns them into candidates, checks
//! required ones against any interpreter already active in the process, and
//! records them in a [`HintRegistry`] that the runtime initializer reads.
//!
//! The crate performs no I/O of its own: filesystem, catalog and runtime
//! queries go through the traits in [`ports`].

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod paths;
pub mod ports;
pub mod registry;
pub mod services;
pub mod settings;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use domain::{
    Candidate, EnvironmentDescriptor, EnvironmentKind, ManagerHandle, Requirement,
    ResolveWarning, Resolved, SelectionRequest, SelectionTarget,
};
pub use error::ResolveError;
pub use paths::{Layout, PathError};
pub use ports::{
    CatalogError, EnvironmentCatalogPort, EnvironmentProbePort, FileSystemPort,
    ManagedDistributionPort, Ports, RuntimeStatePort,
};
pub use registry::{HintRegistry, RegistrySnapshot};
pub use services::{ConflictValidator, RuntimeSelector};
pub use settings::{
    DEFAULT_ENV_NAME, Settings, SettingsError, canonicalize_env_name, validate_settings,
};
