//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Choose and validate the Python interpreter for a process.
#[derive(Parser, Debug)]
#[command(name = "pyselect")]
#[command(about = "Resolve which Python interpreter to use")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_verbose_after_subcommand() {
        let cli = Cli::parse_from(["pyselect", "paths", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Paths)));
    }

    #[test]
    fn test_no_command_is_allowed() {
        let cli = Cli::parse_from(["pyselect"]);
        assert!(cli.command.is_none());
    }
}
