//! # Zingers Catalog Init Command
//!
//! File: cli/src/commands/catalog/init.rs
//!
//! ## Overview
//!
//! `zingers catalog init` writes the built-in messages to a TOML catalog file
//! so they can be edited and then used via `--catalog` or `catalog.file` in
//! the configuration. An existing file is only replaced with `--force`.
//!
use crate::common::fs::io;
use crate::core::catalog::{self, MessageCatalog};
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

const CATALOG_HEADER: &str = "\
# Zingers message catalog.
# `default` messages can be drawn for every age; each bucket list adds to them.
# young: under 25, adult: 25 to 59, senior: 60 and over.
# Point `catalog.file` in .zingers.toml (or --catalog) at this file to use it.

";

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the catalog.
    #[arg(short, long, default_value = "zingers-catalog.toml")]
    pub output: PathBuf,

    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

pub async fn handle_init(args: InitArgs) -> Result<()> {
    info!("Handling catalog init command...");
    let content = starter_catalog()?;
    io::write_new_file(&args.output, &content, args.force)?;
    println!("Wrote starter catalog to {}", args.output.display());
    Ok(())
}

fn starter_catalog() -> Result<String> {
    let body = catalog::render_catalog_toml(&MessageCatalog::builtin())?;
    Ok(format!("{}{}", CATALOG_HEADER, body))
}
