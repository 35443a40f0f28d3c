//! # Zingers Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Aggregates the command handlers routed to from `main.rs`. Each command
//! defines its own clap arguments struct and an async `handle_*` function.
//!
//! ## Commands
//!
//! - `respond`: answer a single age submission
//! - `form`: interactive form, one submission per input line
//! - `catalog`: inspect, validate and create message catalogs
//!

/// Command group for message catalogs. Includes subcommands `list`, `check`, `init`.
pub mod catalog;
/// Interactive form loop over stdin.
pub mod form;
/// One-shot age submission.
pub mod respond;
/// Shared flags and session setup for `respond` and `form`.
pub mod submit;
