//! # Zingers Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers, kept apart from command
//! logic (`commands::`) and the domain core (`core::`).
//!
//! - **`fs`**: file reading and writing with error context.
//! - **`ui`**: the terminal response box and input prompt.
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Terminal output surface for responses.
pub mod ui;
