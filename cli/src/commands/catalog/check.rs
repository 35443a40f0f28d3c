//! # Zingers Catalog Check Command
//!
//! File: cli/src/commands/catalog/check.rs
//!
//! ## Overview
//!
//! `zingers catalog check [FILE]` loads and validates a catalog without
//! answering any submission. With no `FILE` it checks whatever catalog the
//! other commands would use. A catalog with an empty `default` list, blank
//! messages or unknown keys fails with a non-zero exit status.
//!
use crate::core::catalog::{self, AgeBucket, MessageCatalog};
use crate::core::config::{self, Overrides};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Catalog file to validate. Defaults to the active catalog.
    pub file: Option<PathBuf>,
}

pub async fn handle_check(args: CheckArgs, overrides: &Overrides) -> Result<()> {
    info!("Handling catalog check command...");
    let (label, catalog) = match args.file {
        Some(path) => {
            let catalog = catalog::load_catalog_file(&path)?;
            (format!("'{}'", path.display()), catalog)
        }
        None => {
            let cfg = config::load_config(overrides.config_file.as_deref())
                .context("Failed to load Zingers configuration")?;
            let source = overrides
                .catalog_file
                .clone()
                .or_else(|| cfg.catalog.file.as_ref().map(PathBuf::from));
            let catalog = catalog::resolve_catalog(overrides.catalog_file.as_deref(), &cfg)?;
            let label = match source {
                Some(path) => format!("'{}'", path.display()),
                None => "Built-in catalog".to_string(),
            };
            (label, catalog)
        }
    };
    println!("{} OK: {}", label, summarize(&catalog));
    Ok(())
}

fn summarize(catalog: &MessageCatalog) -> String {
    let mut parts = vec![format!("{} default", catalog.default_pool().len())];
    for bucket in AgeBucket::ALL {
        parts.push(format!("{} {}", catalog.bucket_pool(bucket).len(), bucket));
    }
    format!("{} messages", parts.join(", "))
}
