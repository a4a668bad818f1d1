//! Wiring of the OS adapters into the core `Ports` container.

use std::path::PathBuf;
use std::sync::Arc;

use pyselect_core::paths::default_data_dir;
use pyselect_core::{Ports, Settings};

use crate::active::ActiveRuntime;
use crate::conda::CondaCatalog;
use crate::fs::OsFileSystem;
use crate::managed::MinicondaDistribution;
use crate::probe::OsEnvironmentProbe;

/// Build the production ports for `settings`.
///
/// `runtime` is shared with the caller so the same instance can later be
/// handed to [`start_runtime`](crate::start_runtime).
pub fn os_ports(settings: &Settings, runtime: Arc<ActiveRuntime>) -> Ports {
    os_ports_in(settings, runtime, default_data_dir())
}

/// Like [`os_ports`], with the per-user data directory supplied by the
/// caller.
pub fn os_ports_in(
    settings: &Settings,
    runtime: Arc<ActiveRuntime>,
    data_dir: Option<PathBuf>,
) -> Ports {
    Ports::new(
        Arc::new(OsFileSystem::new()),
        runtime,
        Arc::new(OsEnvironmentProbe::from_settings(settings)),
        Arc::new(CondaCatalog::from_settings(settings)),
        Arc::new(MinicondaDistribution::from_settings_in(settings, data_dir)),
    )
}
