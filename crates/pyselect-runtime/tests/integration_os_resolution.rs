//! End-to-end resolution against real directories and a scripted `conda`.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pyselect_core::{
    Candidate, EnvironmentCatalogPort, HintRegistry, ManagerHandle, ResolveError,
    RuntimeSelector, RuntimeStatePort, Settings,
};
use pyselect_runtime::{ActiveRuntime, CondaCatalog, OsFileSystem, os_ports, start_runtime};
use tempfile::TempDir;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn make_virtualenv(root: &Path) -> PathBuf {
    fs::create_dir_all(root).unwrap();
    fs::write(root.join("pyvenv.cfg"), "home = /usr/bin\n").unwrap();
    let python = root.join("bin").join("python");
    touch(&python);
    python
}

fn make_conda_env(prefix: &Path) -> PathBuf {
    fs::create_dir_all(prefix.join("conda-meta")).unwrap();
    let python = prefix.join("bin").join("python");
    touch(&python);
    python
}

/// A conda install whose `conda env list --json` reports `envs`.
fn make_conda(root: &Path, envs: &[&Path]) -> PathBuf {
    let listed: Vec<String> = envs.iter().map(|p| format!("\"{}\"", p.display())).collect();
    let conda = root.join("bin").join("conda");
    fs::create_dir_all(conda.parent().unwrap()).unwrap();
    fs::write(
        &conda,
        format!(
            "#!/bin/sh\ncat <<'JSON'\n{{\"envs\": [{}]}}\nJSON\n",
            listed.join(", ")
        ),
    )
    .unwrap();
    fs::set_permissions(&conda, fs::Permissions::from_mode(0o755)).unwrap();
    conda
}

struct Harness {
    _dir: TempDir,
    root: PathBuf,
    runtime: Arc<ActiveRuntime>,
    registry: Arc<HintRegistry>,
    selector: RuntimeSelector,
}

fn harness() -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();
    let settings = Settings {
        virtualenv_home: Some(root.join("venvs")),
        managed_root: Some(root.join("miniconda")),
        ..Settings::with_defaults()
    };

    let runtime = Arc::new(ActiveRuntime::new());
    let ports = os_ports(&settings, Arc::clone(&runtime));
    let registry = Arc::new(HintRegistry::new());
    let selector = RuntimeSelector::new(ports, Arc::clone(&registry), settings);
    Harness {
        _dir: dir,
        root,
        runtime,
        registry,
        selector,
    }
}

#[test]
fn named_virtualenv_resolves_under_home() {
    let h = harness();
    let python = make_virtualenv(&h.root.join("venvs").join("web"));

    let resolved = h.selector.require_virtualenv(Some("web")).unwrap();
    assert_eq!(resolved.value, Candidate::new(python));
    assert_eq!(h.registry.required(), Some(resolved.value));
}

#[test]
fn directory_without_markers_is_not_a_virtualenv() {
    let h = harness();
    let plain = h.root.join("plain");
    touch(&plain.join("bin").join("python"));

    let err = h
        .selector
        .require_virtualenv(Some(plain.to_str().unwrap()))
        .unwrap_err();
    assert!(matches!(err, ResolveError::NotAnEnvironment { .. }));
    assert!(h.registry.is_empty());
}

#[test]
fn symlinked_interpreter_matches_active_runtime() {
    let h = harness();
    let real = h.root.join("py").join("python3.12");
    touch(&real);
    let link = h.root.join("py").join("python3");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    h.runtime.activate(Candidate::new(real.clone()));
    let resolved = h.selector.require_python(&link).unwrap();
    assert_eq!(resolved.value, Candidate::new(link));

    let other = h.root.join("other").join("python");
    touch(&other);
    let err = h.selector.require_python(&other).unwrap_err();
    assert!(matches!(err, ResolveError::RuntimeConflict { .. }));
}

#[test]
fn conda_catalog_reads_scripted_env_list() {
    let dir = tempfile::tempdir().unwrap();
    let install = dir.path().join("conda");
    let analysis = install.join("envs").join("analysis");
    let conda = make_conda(&install, &[&install, &analysis]);

    let catalog = CondaCatalog::new(None, "pyselect");
    let envs = catalog.enumerate(&ManagerHandle::Executable(conda)).unwrap();

    let names: Vec<_> = envs.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["base", "analysis"]);
    assert_eq!(envs[1].python.path(), analysis.join("bin").join("python"));
}

#[test]
fn duplicate_conda_names_pick_first_and_warn() {
    let h = harness();
    let first = make_conda_env(&h.root.join("a").join("envs").join("dup"));
    let second = make_conda_env(&h.root.join("b").join("envs").join("dup"));
    let conda = make_conda(
        &h.root.join("conda"),
        &[&h.root.join("a/envs/dup"), &h.root.join("b/envs/dup")],
    );

    let resolved = h
        .selector
        .require_named_env("dup", &ManagerHandle::Executable(conda))
        .unwrap();
    assert_eq!(resolved.value, Candidate::new(first));
    assert_eq!(resolved.warnings.len(), 1);
    assert!(resolved.warnings[0].to_string().contains(&second.display().to_string()));
}

#[test]
fn managed_distribution_must_be_installed() {
    let h = harness();
    let err = h.selector.require_managed(None).unwrap_err();
    assert!(matches!(err, ResolveError::ManagedDistributionMissing { .. }));

    let soft = h.selector.prefer_managed(Some("analysis"));
    assert!(matches!(soft, Err(ResolveError::ManagedDistributionMissing { .. })));
    assert!(h.registry.is_empty());
}

#[test]
fn managed_distribution_resolves_through_bundled_conda() {
    let h = harness();
    let install = h.root.join("miniconda");
    let ml = install.join("envs").join("ml");
    let python = make_conda_env(&ml);
    make_conda(&install, &[&install, &ml]);

    let resolved = h.selector.require_managed(Some("ml")).unwrap();
    assert_eq!(resolved.value, Candidate::new(python));
}

#[test]
fn initializer_starts_first_registered_hint() {
    let h = harness();
    let python = make_virtualenv(&h.root.join("venvs").join("web"));
    h.selector.prefer_virtualenv(Some("missing"));
    h.selector.prefer_virtualenv(Some("web"));

    let started = start_runtime(&h.registry, &h.runtime, &OsFileSystem::new()).unwrap();
    assert_eq!(started, Candidate::new(python));
    assert_eq!(h.runtime.active_runtime(), Some(started));
}
