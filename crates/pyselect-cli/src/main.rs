//! CLI entry point - the composition root.
//!
//! Settings come from the environment (seeded from `.env`), adapters are
//! wired in `bootstrap`, and each command is routed to its handler.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use pyselect_cli::{Cli, CliError, Commands, bootstrap, handlers};
use pyselect_core::Settings;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(Settings::from_env())?;
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Resolve(args) => handlers::resolve::execute(&ctx, &args, &mut stdout)?,
        Commands::Envs(args) => handlers::envs::execute(&ctx, &args, &mut stdout)?,
        Commands::Paths => handlers::paths::execute(&ctx, &mut stdout)
            .context("Failed to print configuration")?,
    }

    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<CliError>())
                .map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
