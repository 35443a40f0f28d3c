//! # Zingers Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements loading, merging and validation of the Zingers
//! configuration. It controls which catalog file is used and what happens
//! when a submitted age does not parse.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.zingers.toml` in current directory or ancestors
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/zingers/config.toml`)
//! 3. Default values defined in the code
//!
//! When an explicit file is given (`--config` / `ZINGERS_CONFIG`), only that
//! file is read and discovery is skipped. Command-line flags are applied on
//! top of the loaded configuration by the command handlers.
//!
//! ## Examples
//!
//! ```toml
//! [catalog]
//! file = "~/my-zingers.toml"
//!
//! [input]
//! on_invalid = "reject"      # or "fallback" (default)
//! fallback_bucket = "adult"  # default "senior"
//! ```
//!
//! A relative `catalog.file` is resolved against the directory of the config
//! file that names it, so a project file keeps working from subdirectories.
//!
//! ```ignore
//! let cfg = config::load_config(overrides.config_file.as_deref())?;
//! let policy = cfg.input.on_invalid();
//! ```
//!
use crate::common::fs::io;
use crate::core::catalog::AgeBucket;
use crate::core::error::{Result, ZingerError};
use anyhow::{anyhow, Context};
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub input: InputConfig,
}

/// Where the message catalog comes from.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Catalog file path (can use ~). Built-in messages are used when unset.
    pub file: Option<String>,
}

/// How submitted ages are handled. Unset keys fall back to the defaults only
/// after all files are merged.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub on_invalid: Option<InvalidInputPolicy>,
    /// Bucket used for unparseable ages under the `fallback` policy.
    pub fallback_bucket: Option<AgeBucket>,
}

impl InputConfig {
    pub fn on_invalid(&self) -> InvalidInputPolicy {
        self.on_invalid.unwrap_or_default()
    }

    pub fn fallback_bucket(&self) -> AgeBucket {
        self.fallback_bucket.unwrap_or_else(default_fallback_bucket)
    }
}

/// What to do with an age field that holds no number.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InvalidInputPolicy {
    /// Use the fallback bucket and log a warning.
    #[default]
    Fallback,
    /// Refuse the submission with an `InvalidInput` error.
    Reject,
}

fn default_fallback_bucket() -> AgeBucket {
    AgeBucket::Senior
}

/// Settings given on the command line that affect configuration loading.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    /// Load exactly this config file instead of discovering one.
    pub config_file: Option<PathBuf>,
    /// Catalog file taking precedence over `catalog.file`.
    pub catalog_file: Option<PathBuf>,
}

const PROJECT_CONFIG_FILENAME: &str = ".zingers.toml";

/// Loads, merges, expands and validates the configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Zingers", "zingers") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(path) = find_project_config_path(&current_dir) {
        info!("Loading project configuration from: {}", path.display());
        load_config_from_path(&path).map(Some)
    } else {
        debug!("No project configuration file ({PROJECT_CONFIG_FILENAME}) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.zingers.toml`, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = io::read_file_to_string(path)?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    expand_config_paths(&mut config, base_dir);
    Ok(config)
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        catalog: CatalogConfig {
            file: project_cfg.catalog.file.or(user.catalog.file),
        },
        input: InputConfig {
            on_invalid: project_cfg.input.on_invalid.or(user.input.on_invalid),
            fallback_bucket: project_cfg
                .input
                .fallback_bucket
                .or(user.input.fallback_bucket),
        },
    }
}

/// Expands `~` in the catalog path and anchors a relative one at `base_dir`,
/// the directory of the config file it came from.
fn expand_config_paths(config: &mut Config, base_dir: &Path) {
    if let Some(file) = config.catalog.file.as_mut() {
        if file.trim().is_empty() {
            return;
        }
        let expanded = PathBuf::from(shellexpand::tilde(file.as_str()).as_ref());
        let resolved = if expanded.is_relative() {
            base_dir.join(expanded)
        } else {
            expanded
        };
        *file = resolved.to_string_lossy().into_owned();
        debug!("Expanded catalog file path: {}", file);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(file) = &config.catalog.file {
        if file.trim().is_empty() {
            return Err(anyhow!(ZingerError::Config(
                "catalog.file cannot be empty; remove the key to use the built-in catalog."
                    .to_string()
            )));
        }
        let path = Path::new(file);
        if path.is_dir() {
            return Err(anyhow!(ZingerError::Config(format!(
                "Configured catalog path '{}' is a directory, not a file.",
                path.display()
            ))));
        }
        if !path.exists() {
            warn!("Configured catalog file '{}' does not exist.", path.display());
        }
    }
    if config.input.on_invalid() == InvalidInputPolicy::Reject
        && config.input.fallback_bucket.is_some()
    {
        warn!("input.fallback_bucket has no effect while input.on_invalid = \"reject\".");
    }
    Ok(())
}
