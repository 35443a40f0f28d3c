//! # Zingers Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by configuration loading and the `catalog`
//! commands. Import the submodule directly:
//!
//! ```ignore
//! use crate::common::fs::io;
//!
//! let content = io::read_file_to_string(path)?;
//! io::write_new_file(output, &content, false)?;
//! ```
//!

/// File reading and writing with error context (`read_file_to_string`, `write_new_file`, ...).
pub mod io;
