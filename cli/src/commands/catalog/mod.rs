//! # Zingers Catalog Command Group
//!
//! File: cli/src/commands/catalog/mod.rs
//!
//! ## Overview
//!
//! Router for `zingers catalog`, the commands for inspecting and authoring
//! message catalogs:
//!
//! ```bash
//! # Show every list of the active catalog
//! zingers catalog list
//!
//! # Show the effective pool for one bucket (default + bucket messages)
//! zingers catalog list --bucket senior
//!
//! # Validate a catalog file before pointing the config at it
//! zingers catalog check ./my-zingers.toml
//!
//! # Write the built-in messages out as a starting point
//! zingers catalog init --output ./my-zingers.toml
//! ```
//!
use crate::core::config::Overrides;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

mod check;
mod init;
mod list;

/// Arguments for the `zingers catalog` command group.
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    command: CatalogCommand,
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Show the messages of the active catalog.
    #[command(alias = "ls")]
    List(list::ListArgs),
    /// Validate a catalog file (or the active catalog).
    Check(check::CheckArgs),
    /// Write the built-in catalog to a file for editing.
    Init(init::InitArgs),
}

/// Dispatches `zingers catalog <subcommand>`.
pub async fn handle_catalog(args: CatalogArgs, overrides: &Overrides) -> Result<()> {
    match args.command {
        CatalogCommand::List(args) => list::handle_list(args, overrides).await,
        CatalogCommand::Check(args) => check::handle_check(args, overrides).await,
        CatalogCommand::Init(args) => init::handle_init(args).await,
    }
}
