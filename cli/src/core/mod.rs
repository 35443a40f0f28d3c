//! # Zingers Core
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! The domain core and the infrastructure it needs:
//! - `catalog`: `AgeBucket`, `MessageCatalog`, catalog files
//! - `selector`: parsing, classification, pool building and random selection
//! - `config`: configuration loading, merging, and validation
//! - `error`: error types and the `Result` alias
//!
//! ```ignore
//! use crate::core::catalog::{self, MessageCatalog};
//! use crate::core::config;
//! use crate::core::error::{Result, ZingerError};
//! use crate::core::selector::ResponseSelector;
//! ```
//!
pub mod catalog;
pub mod config;
pub mod error;
pub mod selector;
