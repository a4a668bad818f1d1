//! Subcommand definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use pyselect_core::{Requirement, SelectionRequest, SelectionTarget};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register interpreter hints and show what would be used
    Resolve(ResolveArgs),
    /// List conda environments
    Envs(EnvsArgs),
    /// Show resolved configuration and default locations
    Paths,
}

/// Selectors for `pyselect resolve`.
///
/// Selectors are registered in a fixed order: `--python`, `--virtualenv`,
/// `--condaenv`, `--miniconda`.
#[derive(Args, Debug, Default)]
pub struct ResolveArgs {
    /// Python interpreter, or a directory containing one
    #[arg(long, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Virtualenv directory or name; the default virtualenv if no value
    #[arg(long, value_name = "ENV", num_args = 0..=1, default_missing_value = "")]
    pub virtualenv: Option<String>,

    /// Conda environment name or prefix
    #[arg(long, value_name = "NAME")]
    pub condaenv: Option<String>,

    /// Conda executable used for --condaenv
    #[arg(long, value_name = "EXE")]
    pub conda: Option<PathBuf>,

    /// Environment of the managed Miniconda; the default environment if no value
    #[arg(long, value_name = "NAME", num_args = 0..=1, default_missing_value = "")]
    pub miniconda: Option<String>,

    /// Treat every selector as required instead of preferred
    #[arg(long)]
    pub required: bool,

    /// Also start the runtime and report the interpreter it picks
    #[arg(long)]
    pub activate: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ResolveArgs {
    /// Turn the flags into selection requests in registration order.
    pub fn requests(&self) -> Vec<SelectionRequest> {
        let requirement = Requirement::from_flag(self.required);
        let mut targets = Vec::new();

        if let Some(python) = &self.python {
            targets.push(SelectionTarget::Python(python.clone()));
        }
        if let Some(virtualenv) = &self.virtualenv {
            targets.push(SelectionTarget::Virtualenv(non_empty(virtualenv)));
        }
        if let Some(condaenv) = &self.condaenv {
            targets.push(SelectionTarget::CondaEnv {
                selector: non_empty(condaenv),
                conda: self.conda.clone(),
            });
        }
        if let Some(miniconda) = &self.miniconda {
            targets.push(SelectionTarget::Managed(non_empty(miniconda)));
        }

        targets
            .into_iter()
            .map(|target| SelectionRequest::new(target, requirement))
            .collect()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Options for `pyselect envs`.
#[derive(Args, Debug, Default)]
pub struct EnvsArgs {
    /// Conda executable to query
    #[arg(long, value_name = "EXE", conflicts_with = "miniconda")]
    pub conda: Option<PathBuf>,

    /// Query the managed Miniconda instead of the system conda
    #[arg(long)]
    pub miniconda: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}
