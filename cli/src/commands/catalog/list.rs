//! # Zingers Catalog List Command
//!
//! File: cli/src/commands/catalog/list.rs
//!
//! ## Overview
//!
//! `zingers catalog list` prints the active catalog (after `--catalog` and
//! configuration are applied). Without `--bucket` it shows each list on its
//! own followed by the effective pool size of every bucket:
//!
//! ```
//! default (10)
//!    1. Noted. Now get over it.
//!   ...
//! young (2)
//!   ...
//!
//! Effective pools: young 12, adult 12, senior 12
//! ```
//!
//! With `--bucket` it prints that bucket's effective pool, i.e. exactly the
//! messages a submission in that bucket can receive.
//!
use crate::core::catalog::{self, AgeBucket, MessageCatalog};
use crate::core::config::{self, Overrides};
use crate::core::error::Result;
use crate::core::selector::build_pool;
use anyhow::Context;
use clap::Parser;
use std::fmt::Write as _;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only show the pool a submission in this bucket draws from.
    #[arg(long, value_enum)]
    pub bucket: Option<AgeBucket>,
}

pub async fn handle_list(args: ListArgs, overrides: &Overrides) -> Result<()> {
    info!("Handling catalog list command...");
    let cfg = config::load_config(overrides.config_file.as_deref())
        .context("Failed to load Zingers configuration")?;
    let catalog = catalog::resolve_catalog(overrides.catalog_file.as_deref(), &cfg)
        .context("Failed to load message catalog")?;

    let rendered = match args.bucket {
        Some(bucket) => render_bucket_pool(&catalog, bucket),
        None => render_catalog(&catalog),
    };
    print!("{}", rendered);
    Ok(())
}

fn render_list(out: &mut String, title: &str, messages: &[&str]) {
    let _ = writeln!(out, "{} ({})", title, messages.len());
    for (i, message) in messages.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}", i + 1, message);
    }
}

fn render_catalog(catalog: &MessageCatalog) -> String {
    let mut out = String::new();
    let default: Vec<&str> = catalog.default_pool().iter().map(String::as_str).collect();
    render_list(&mut out, "default", &default);
    for bucket in AgeBucket::ALL {
        let messages: Vec<&str> = catalog
            .bucket_pool(bucket)
            .iter()
            .map(String::as_str)
            .collect();
        render_list(&mut out, bucket.as_str(), &messages);
    }
    let sizes: Vec<String> = AgeBucket::ALL
        .iter()
        .map(|b| format!("{} {}", b, build_pool(*b, catalog).len()))
        .collect();
    let _ = writeln!(out, "\nEffective pools: {}", sizes.join(", "));
    out
}

fn render_bucket_pool(catalog: &MessageCatalog, bucket: AgeBucket) -> String {
    let mut out = String::new();
    let pool = build_pool(bucket, catalog);
    render_list(&mut out, &format!("{} pool", bucket), &pool);
    out
}
