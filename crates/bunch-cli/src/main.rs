//! bunch: branch-variant switcher
//!
//! The command-line interface for promoting branch patches in a bunch tree.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    commands::run_switch(&cli.switch_config(), cli.json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bunch_test_utils::repo::TestRepo;

    #[test]
    fn test_cli_error_user() {
        let error = CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_switch_dry_run_with_temp_repo() {
        let repo = TestRepo::new();
        repo.write("a.txt", "a");
        repo.write("a.txt.prod", "prod");

        let config = bunch_core::SwitchConfig::new(repo.root(), "dev_prod").with_dry_run(true);
        let result = commands::run_switch(&config, false);

        assert!(result.is_ok());
        assert_eq!(repo.read("a.txt"), "a");
    }

    #[test]
    fn test_core_error_is_wrapped() {
        let repo = TestRepo::new();
        let config = bunch_core::SwitchConfig::new(repo.path("missing"), "dev_prod");

        let err = commands::run_switch(&config, true).unwrap_err();
        assert!(matches!(err, CliError::Core(bunch_core::Error::RepositoryPath { .. })));
    }
}
