//! Resolve command handler.

use std::io::Write;

use pyselect_core::{Candidate, RegistrySnapshot, ResolveWarning};
use pyselect_runtime::start_runtime;
use serde::Serialize;
use tracing::warn;

use crate::bootstrap::CliContext;
use crate::commands::ResolveArgs;
use crate::error::CliError;

/// Machine-readable result of `pyselect resolve --json`.
#[derive(Debug, Serialize)]
pub struct ResolveReport {
    /// Candidates registered by this invocation, in order.
    pub registered: Vec<Candidate>,
    pub warnings: Vec<ResolveWarning>,
    /// Registry contents after all selectors were applied.
    pub registry: RegistrySnapshot,
    /// Interpreter started with `--activate`.
    pub active: Option<Candidate>,
}

/// Register every selector, then report the registry.
///
/// Fatal resolution errors abort before anything is printed.
pub fn execute(ctx: &CliContext, args: &ResolveArgs, out: &mut impl Write) -> Result<(), CliError> {
    let mut registered: Vec<Candidate> = ctx.apply_required_python()?.into_iter().collect();

    let resolved = ctx.selector.resolve_all(&args.requests())?;
    let (candidates, warnings) = resolved.into_parts();
    registered.extend(candidates);

    for warning in &warnings {
        warn!(warning = %warning, "Resolution warning");
    }

    let active = if args.activate {
        Some(start_runtime(&ctx.registry, &ctx.runtime, ctx.ports.fs.as_ref())?)
    } else {
        None
    };

    let report = ResolveReport {
        registered,
        warnings,
        registry: ctx.registry.snapshot(),
        active,
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write_text(&report, out)?;
    }
    Ok(())
}

fn write_text(report: &ResolveReport, out: &mut impl Write) -> std::io::Result<()> {
    for warning in &report.warnings {
        writeln!(out, "warning: {warning}")?;
    }
    match &report.registry.required {
        Some(required) => writeln!(out, "required = {required}")?,
        None => writeln!(out, "required = (none)")?,
    }
    if report.registry.hints.is_empty() {
        writeln!(out, "hints = (none)")?;
    } else {
        writeln!(out, "hints =")?;
        for (index, hint) in report.registry.hints.iter().enumerate() {
            writeln!(out, "  {}. {hint}", index + 1)?;
        }
    }
    if let Some(active) = &report.active {
        writeln!(out, "active = {active}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap;
    use pyselect_core::Settings;
    use std::fs;
    use std::path::Path;

    fn make_virtualenv(root: &Path) {
        fs::create_dir_all(root.join("bin")).unwrap();
        fs::write(root.join("pyvenv.cfg"), "").unwrap();
        fs::write(root.join("bin").join("python"), "").unwrap();
    }

    fn context(dir: &Path) -> CliContext {
        bootstrap(Settings {
            virtualenv_home: Some(dir.join("venvs")),
            managed_root: Some(dir.join("miniconda")),
            ..Settings::with_defaults()
        })
        .unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn test_text_report_lists_hints_and_active() {
        let dir = tempfile::tempdir().unwrap();
        make_virtualenv(&dir.path().join("venvs").join("web"));
        let ctx = context(dir.path());
        let args = ResolveArgs {
            virtualenv: Some("web".to_string()),
            activate: true,
            ..ResolveArgs::default()
        };

        let mut out = Vec::new();
        execute(&ctx, &args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("required = (none)"));
        assert!(text.contains("1. "));
        assert!(text.contains("active = "));
    }

    #[test]
    fn test_missing_required_python_fails() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let args = ResolveArgs {
            python: Some(dir.path().join("missing").join("python")),
            required: true,
            ..ResolveArgs::default()
        };

        let err = execute(&ctx, &args, &mut Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), 66);
        assert!(ctx.registry.is_empty());
    }

    #[test]
    fn test_soft_missing_managed_still_fails() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let args = ResolveArgs {
            miniconda: Some(String::new()),
            ..ResolveArgs::default()
        };

        let err = execute(&ctx, &args, &mut Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), 66);
    }

    #[test]
    fn test_json_report_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let python = dir.path().join("python3");
        fs::write(&python, "").unwrap();
        let ctx = context(dir.path());
        let args = ResolveArgs {
            python: Some(python),
            json: true,
            ..ResolveArgs::default()
        };

        let mut out = Vec::new();
        execute(&ctx, &args, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["registered"].as_array().unwrap().len(), 1);
        assert!(value["registry"]["required"].is_null());
        assert!(value["active"].is_null());
    }
}
