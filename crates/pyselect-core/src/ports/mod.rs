//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the queries the resolution policy needs from the outside
//! world. They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - Every port is a read-only query; nothing here mutates the system
//! - No process or filesystem implementation details in signatures
//! - Adapters live in `pyselect-runtime`; test fakes live in `crate::testing`

pub mod environment_catalog;
pub mod environment_probe;
pub mod filesystem;
pub mod managed_distribution;
pub mod runtime_state;

use std::sync::Arc;

pub use environment_catalog::{CatalogError, EnvironmentCatalogPort};
pub use environment_probe::EnvironmentProbePort;
pub use filesystem::FileSystemPort;
pub use managed_distribution::ManagedDistributionPort;
pub use runtime_state::RuntimeStatePort;

/// Container for all port trait objects.
///
/// Wires adapters into [`RuntimeSelector`](crate::services::RuntimeSelector)
/// without coupling the core to concrete implementations.
#[derive(Clone)]
pub struct Ports {
    /// Filesystem queries and same-file comparison.
    pub fs: Arc<dyn FileSystemPort>,
    /// The interpreter already active in this process, if any.
    pub runtime: Arc<dyn RuntimeStatePort>,
    /// Virtualenv / conda environment detection.
    pub probe: Arc<dyn EnvironmentProbePort>,
    /// Environment manager catalog.
    pub catalog: Arc<dyn EnvironmentCatalogPort>,
    /// Managed Miniconda distribution.
    pub managed: Arc<dyn ManagedDistributionPort>,
}

impl Ports {
    /// Create a new Ports container.
    pub fn new(
        fs: Arc<dyn FileSystemPort>,
        runtime: Arc<dyn RuntimeStatePort>,
        probe: Arc<dyn EnvironmentProbePort>,
        catalog: Arc<dyn EnvironmentCatalogPort>,
        managed: Arc<dyn ManagedDistributionPort>,
    ) -> Self {
        Self {
            fs,
            runtime,
            probe,
            catalog,
            managed,
        }
    }
}
