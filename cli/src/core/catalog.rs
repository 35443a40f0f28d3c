//! # Zingers Message Catalog
//!
//! File: cli/src/core/catalog.rs
//!
//! ## Overview
//!
//! This module owns the data side of Zingers: the `AgeBucket` enum and the
//! `MessageCatalog` that maps each bucket to its list of responses, plus the
//! distinguished `default` list that every bucket's pool starts with.
//!
//! The catalog is built once at startup (either the built-in messages or a TOML
//! catalog file) and then only ever borrowed. Construction is where validation
//! happens: a catalog whose `default` list is empty is refused with
//! `ZingerError::EmptyPool`, so selection never sees an empty pool.
//!
//! ## Catalog File Format
//!
//! ```toml
//! default = ["Noted. Now get over it.", "Logged and immediately forgotten."]
//! young = ["Gen Z? Complain harder. The AI will still out-hustle you."]
//! adult = ["Still writing think pieces? We’re writing code."]
//! senior = ["Relax. AI isn’t coming for bingo night."]   # `boomer` also accepted
//! ```
//!
//! A catalog file replaces the built-in catalog entirely. Keys it omits are
//! treated as empty lists.
//!
use crate::common::fs::io;
use crate::core::config::Config;
use crate::core::error::{Result, ZingerError};
use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Age range used to pick the bucket-specific part of the pool.
///
/// Ranges are half-open: `Young` is below 25, `Adult` is 25 up to (not
/// including) 60, `Senior` is 60 and above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgeBucket {
    Young,
    Adult,
    #[serde(alias = "boomer")]
    #[value(alias = "boomer")]
    Senior,
}

impl AgeBucket {
    /// All buckets, in age order.
    pub const ALL: [AgeBucket; 3] = [AgeBucket::Young, AgeBucket::Adult, AgeBucket::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBucket::Young => "young",
            AgeBucket::Adult => "adult",
            AgeBucket::Senior => "senior",
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Built-in messages ---

const DEFAULT_MESSAGES: &[&str] = &[
    "Noted. Now get over it.",
    "Another one for the crypile.",
    "Interesting. We still don't care.",
    "Logged and immediately forgotten.",
    "Wow. Sounds like a you problem.",
    "Try turning it off and touching grass.",
    "AI is not the enemy. Your attitude is.",
    "Complaint received. Reality unchanged.",
    "We're feeding this to a bot that will mock you.",
    "This will be used against you in future simulations.",
];

const YOUNG_MESSAGES: &[&str] = &[
    "Gen Z? Complain harder. The AI will still out-hustle you.",
    "Your TikTok algorithm is more dangerous than GPT.",
];

const ADULT_MESSAGES: &[&str] = &[
    "You grew up on Google. Now you're afraid of search 2.0?",
    "Still writing think pieces? We’re writing code.",
];

const SENIOR_MESSAGES: &[&str] = &[
    "Boomer panic detected. Consider unplugging your router.",
    "Relax. AI isn’t coming for bingo night.",
];

fn to_owned_list(messages: &[&str]) -> Vec<String> {
    messages.iter().map(|m| m.to_string()).collect()
}

/// The full set of response lists: one `default` list plus one list per bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    default: Vec<String>,
    young: Vec<String>,
    adult: Vec<String>,
    senior: Vec<String>,
}

impl MessageCatalog {
    /// Builds a catalog, refusing one whose `default` list is empty or which
    /// contains blank messages.
    pub fn new(
        default: Vec<String>,
        young: Vec<String>,
        adult: Vec<String>,
        senior: Vec<String>,
    ) -> std::result::Result<Self, ZingerError> {
        if default.is_empty() {
            return Err(ZingerError::EmptyPool {
                pool: "default".to_string(),
            });
        }
        let catalog = MessageCatalog {
            default,
            young,
            adult,
            senior,
        };
        for (name, list) in catalog.named_lists() {
            if list.iter().any(|m| m.trim().is_empty()) {
                return Err(ZingerError::Config(format!(
                    "Catalog list '{}' contains an empty message.",
                    name
                )));
            }
        }
        for bucket in AgeBucket::ALL {
            if catalog.bucket_pool(bucket).is_empty() {
                warn!(
                    "Catalog has no '{}' messages; that bucket will only draw from the default list.",
                    bucket
                );
            }
        }
        Ok(catalog)
    }

    /// The messages this tool ships with.
    pub fn builtin() -> Self {
        MessageCatalog {
            default: to_owned_list(DEFAULT_MESSAGES),
            young: to_owned_list(YOUNG_MESSAGES),
            adult: to_owned_list(ADULT_MESSAGES),
            senior: to_owned_list(SENIOR_MESSAGES),
        }
    }

    /// Messages included in every bucket's pool.
    pub fn default_pool(&self) -> &[String] {
        &self.default
    }

    /// Messages specific to `bucket`, without the default list.
    pub fn bucket_pool(&self, bucket: AgeBucket) -> &[String] {
        match bucket {
            AgeBucket::Young => &self.young,
            AgeBucket::Adult => &self.adult,
            AgeBucket::Senior => &self.senior,
        }
    }

    /// Total number of messages across all lists.
    pub fn message_count(&self) -> usize {
        self.named_lists().iter().map(|(_, l)| l.len()).sum()
    }

    fn named_lists(&self) -> [(&'static str, &[String]); 4] {
        [
            ("default", self.default.as_slice()),
            ("young", self.young.as_slice()),
            ("adult", self.adult.as_slice()),
            ("senior", self.senior.as_slice()),
        ]
    }
}

/// On-disk shape of a catalog file.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    default: Vec<String>,
    #[serde(default)]
    young: Vec<String>,
    #[serde(default)]
    adult: Vec<String>,
    #[serde(default, alias = "boomer")]
    senior: Vec<String>,
}

/// Parses and validates a catalog from TOML text.
pub fn parse_catalog(content: &str) -> Result<MessageCatalog> {
    let file: CatalogFile = toml::from_str(content).context("Failed to parse catalog TOML")?;
    let catalog = MessageCatalog::new(file.default, file.young, file.adult, file.senior)?;
    Ok(catalog)
}

/// Reads, parses and validates a catalog file.
pub fn load_catalog_file(path: &Path) -> Result<MessageCatalog> {
    if !path.is_file() {
        return Err(ZingerError::FileSystem(format!(
            "Catalog file '{}' does not exist or is not a file.",
            path.display()
        ))
        .into());
    }
    let content = io::read_file_to_string(path)?;
    let catalog = parse_catalog(&content)
        .with_context(|| format!("Invalid catalog file: {}", path.display()))?;
    debug!(
        "Loaded {} messages from catalog {}",
        catalog.message_count(),
        path.display()
    );
    Ok(catalog)
}

/// Picks the catalog for this run: an explicit path first, then the file named
/// in configuration, then the built-in messages.
pub fn resolve_catalog(override_path: Option<&Path>, config: &Config) -> Result<MessageCatalog> {
    let configured = config.catalog.file.as_ref().map(PathBuf::from);
    match override_path.map(Path::to_path_buf).or(configured) {
        Some(path) => {
            info!("Using catalog file: {}", path.display());
            load_catalog_file(&path)
        }
        None => {
            debug!("No catalog file configured, using built-in messages.");
            Ok(MessageCatalog::builtin())
        }
    }
}

/// Renders a catalog in the catalog file format.
pub fn render_catalog_toml(catalog: &MessageCatalog) -> Result<String> {
    let file = CatalogFile {
        default: catalog.default.clone(),
        young: catalog.young.clone(),
        adult: catalog.adult.clone(),
        senior: catalog.senior.clone(),
    };
    toml::to_string_pretty(&file).context("Failed to serialize catalog to TOML")
}
