//! # Zingers Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Zingers CLI: tell it your
//! age, get a snarky reply picked at random from your age bracket's pool.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Examples
//!
//! ```bash
//! # One submission
//! zingers respond 45
//!
//! # Interactive form with debug logging
//! zingers -vv form
//!
//! # Use a custom catalog and config file
//! zingers --config ./zingers.toml --catalog ./my-catalog.toml respond 70
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the command handler
//! 4. Format and display any errors that occur
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (respond, form, catalog)
mod common; // Shared utilities (fs, ui)
mod core; // Catalog, selector, config, errors

use crate::core::config::Overrides;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "zingers",
    about = "Tell us your age. We'll tell you what we think of your complaint.",
    long_about = "Submit an age and receive a randomly chosen snarky response from the\n\
                  pool for your age bracket (young < 25 <= adult < 60 <= senior).",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load only this configuration file instead of discovering one.
    #[arg(long, env = "ZINGERS_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Catalog file to use instead of the configured or built-in one.
    #[arg(long, env = "ZINGERS_CATALOG", global = true)]
    catalog: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer a single age submission.
    #[command(alias = "r")]
    Respond(commands::respond::RespondArgs),
    /// Interactive form: one age per line, until EOF, `quit` or Ctrl+C.
    #[command(alias = "f")]
    Form(commands::form::FormArgs),
    /// Inspect, validate and create message catalogs.
    #[command(alias = "c")]
    Catalog(commands::catalog::CatalogArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let overrides = Overrides {
        config_file: cli.config,
        catalog_file: cli.catalog,
    };

    let command_result = match cli.command {
        Commands::Respond(args) => commands::respond::handle_respond(args, &overrides).await,
        Commands::Form(args) => commands::form::handle_form(args, &overrides).await,
        Commands::Catalog(args) => commands::catalog::handle_catalog(args, &overrides).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn zingers_cmd() -> Command {
        Command::cargo_bin("zingers").expect("Failed to find zingers binary for testing")
    }

    #[test]
    fn test_main_help_flag() {
        zingers_cmd().arg("--help").assert().success();
    }

    #[test]
    fn test_main_version_flag() {
        zingers_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "zingers",
            "respond",
            "30",
            "-vv",
            "--catalog",
            "mine.toml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.catalog, Some(PathBuf::from("mine.toml")));
        assert!(matches!(cli.command, Commands::Respond(_)));
    }

    #[test]
    fn test_cli_aliases() {
        assert!(matches!(
            Cli::try_parse_from(["zingers", "f"]).unwrap().command,
            Commands::Form(_)
        ));
        assert!(matches!(
            Cli::try_parse_from(["zingers", "c", "list"]).unwrap().command,
            Commands::Catalog(_)
        ));
    }
}
