//! # Zingers Submission Session
//!
//! File: cli/src/commands/submit.rs
//!
//! ## Overview
//!
//! Shared setup for the two commands that accept age submissions (`respond`
//! and `form`). `SubmitArgs` holds the flags they have in common, and
//! `Session` bundles what a run needs: the catalog (loaded once), the invalid
//! input policy after applying CLI overrides, and the random generator.
//!
use crate::core::catalog::{self, AgeBucket, MessageCatalog};
use crate::core::config::{self, InvalidInputPolicy, Overrides};
use crate::core::error::{Result, ZingerError};
use crate::core::selector::{DisplayedResponse, ResponseSelector};
use anyhow::Context;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Flags shared by `respond` and `form`.
#[derive(Args, Debug, Clone, Default)]
pub struct SubmitArgs {
    /// Seed the random generator so the same input gives the same response.
    #[arg(long)]
    pub seed: Option<u64>,

    /// What to do when the age is not a number (overrides `input.on_invalid`).
    #[arg(long, value_enum)]
    pub on_invalid: Option<InvalidInputPolicy>,

    /// Prefix each response with the age bucket it was drawn from.
    #[arg(long)]
    pub show_bucket: bool,
}

/// Everything needed to answer submissions for the lifetime of one command.
pub struct Session {
    catalog: MessageCatalog,
    policy: InvalidInputPolicy,
    fallback_bucket: AgeBucket,
    rng: StdRng,
}

impl Session {
    /// Loads configuration and the catalog, then applies command-line overrides.
    pub fn load(args: &SubmitArgs, overrides: &Overrides) -> Result<Self> {
        let cfg = config::load_config(overrides.config_file.as_deref())
            .context("Failed to load Zingers configuration")?;
        let catalog = catalog::resolve_catalog(overrides.catalog_file.as_deref(), &cfg)
            .context("Failed to load message catalog")?;
        let policy = args.on_invalid.unwrap_or(cfg.input.on_invalid());
        info!(
            "Catalog ready with {} messages; invalid input policy: {:?}",
            catalog.message_count(),
            policy
        );
        Ok(Session::new(
            catalog,
            policy,
            cfg.input.fallback_bucket(),
            args.seed,
        ))
    }

    pub fn new(
        catalog: MessageCatalog,
        policy: InvalidInputPolicy,
        fallback_bucket: AgeBucket,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => {
                debug!("Using fixed random seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Session {
            catalog,
            policy,
            fallback_bucket,
            rng,
        }
    }

    /// Answers one submission of the age field.
    pub fn submit(&mut self, raw_age: &str) -> std::result::Result<DisplayedResponse, ZingerError> {
        let selector = ResponseSelector::new(&self.catalog, self.policy, self.fallback_bucket);
        selector.on_submit(raw_age, &mut self.rng)
    }
}
