//! # Zingers Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Zingers application.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ZingerError`: A custom error enum using `thiserror` for the typed failures
//!   the selector and catalog can produce.
//! - `Result<T>`: A type alias for `anyhow::Result<T>` used by command handlers,
//!   configuration loading and anything else that benefits from context chaining.
//!
//! The selector functions return `std::result::Result<T, ZingerError>` directly so
//! callers can branch on the variant (e.g. the form loop turns `InvalidInput`
//! into a hint instead of exiting).
//!
//! ## Examples
//!
//! ```ignore
//! // Typed failure from the core
//! let age = selector::parse_age("abc"); // Err(ZingerError::InvalidInput { .. })
//!
//! // Add context at command level
//! let catalog = catalog::load_catalog_file(&path)
//!     .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the Zingers application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ZingerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Invalid input: '{input}' is not a whole number")]
    InvalidInput { input: String },

    #[error("Message pool '{pool}' is empty")]
    EmptyPool { pool: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
