//! Envs command handler.

use std::io::Write;

use pyselect_core::{ManagerHandle, ResolveError};

use crate::bootstrap::CliContext;
use crate::commands::EnvsArgs;
use crate::error::CliError;

/// List the environments of the selected conda installation.
pub fn execute(ctx: &CliContext, args: &EnvsArgs, out: &mut impl Write) -> Result<(), CliError> {
    let manager = if args.miniconda {
        if !ctx.ports.managed.is_installed() {
            return Err(ResolveError::ManagedDistributionMissing {
                root: ctx.ports.managed.root(),
            }
            .into());
        }
        ctx.ports.managed.manager_handle()
    } else {
        args.conda
            .clone()
            .map_or(ManagerHandle::Discover, ManagerHandle::Executable)
    };

    let envs = ctx
        .ports
        .catalog
        .enumerate(&manager)
        .map_err(ResolveError::from)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &envs)?;
        writeln!(out)?;
        return Ok(());
    }

    let width = envs.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for env in &envs {
        writeln!(out, "{:<width$}  {}", env.name, env.prefix.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap;
    use pyselect_core::Settings;

    #[test]
    fn test_missing_miniconda_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = bootstrap(Settings {
            managed_root: Some(dir.path().join("miniconda")),
            ..Settings::with_defaults()
        })
        .unwrap();
        let args = EnvsArgs {
            miniconda: true,
            ..EnvsArgs::default()
        };

        let err = execute(&ctx, &args, &mut Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), 66);
    }

    #[test]
    fn test_unrunnable_conda_is_process_error() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = bootstrap(Settings {
            managed_root: Some(dir.path().join("miniconda")),
            ..Settings::with_defaults()
        })
        .unwrap();
        let args = EnvsArgs {
            conda: Some(dir.path().join("no-such-conda")),
            ..EnvsArgs::default()
        };

        let err = execute(&ctx, &args, &mut Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), 71);
    }
}
