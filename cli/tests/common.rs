//! # Zingers CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command is
//! run from a fresh temporary directory with an explicit (empty) config file,
//! so user and project configuration on the test machine cannot leak in.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The built-in `young` messages.
pub const YOUNG: &[&str] = &[
    "Gen Z? Complain harder. The AI will still out-hustle you.",
    "Your TikTok algorithm is more dangerous than GPT.",
];

/// The built-in `adult` messages.
pub const ADULT: &[&str] = &[
    "You grew up on Google. Now you're afraid of search 2.0?",
    "Still writing think pieces? We’re writing code.",
];

/// The built-in `senior` messages.
pub const SENIOR: &[&str] = &[
    "Boomer panic detected. Consider unplugging your router.",
    "Relax. AI isn’t coming for bingo night.",
];

/// The built-in `default` messages.
pub const DEFAULT: &[&str] = &[
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

/// A temporary working directory holding the config file the command will use.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    /// Creates a sandbox with an empty `config.toml`.
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// Creates a sandbox whose `config.toml` has the given content.
    pub fn with_config(config: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("config.toml"), config).expect("Failed to write config");
        Sandbox { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file inside the sandbox and returns its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write sandbox file");
        path
    }

    /// A `zingers` command running inside the sandbox with its config file.
    pub fn cmd(&self) -> Command {
        let mut cmd = zingers_cmd();
        cmd.current_dir(self.dir.path())
            .env("ZINGERS_CONFIG", self.dir.path().join("config.toml"))
            .env_remove("ZINGERS_CATALOG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// A `zingers` command that discovers its configuration from `subdir`.
    ///
    /// The sandbox root is made a repository root so the project search stays
    /// inside it, and the user config directory points into the sandbox.
    pub fn discovering_cmd(&self, subdir: &str) -> Command {
        let cwd = self.dir.path().join(subdir);
        fs::create_dir_all(&cwd).expect("Failed to create sandbox subdir");
        fs::create_dir_all(self.dir.path().join(".git")).expect("Failed to create .git");
        let home = self.dir.path().join("home");
        let mut cmd = zingers_cmd();
        cmd.current_dir(cwd)
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("ZINGERS_CONFIG")
            .env_remove("ZINGERS_CATALOG")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Helper to create an `assert_cmd::Command` for the compiled `zingers` binary.
pub fn zingers_cmd() -> Command {
    Command::cargo_bin("zingers").expect("Failed to find zingers binary for testing")
}

/// The single response line printed by `zingers respond`.
pub fn response_line(stdout: &[u8]) -> String {
    let text = String::from_utf8(stdout.to_vec()).expect("stdout is not UTF-8");
    let mut lines = text.lines();
    let line = lines.next().expect("no response printed").to_string();
    assert_eq!(lines.next(), None, "expected exactly one line, got {:?}", text);
    line
}

/// True if `line` is one of `messages` or one of the default messages.
pub fn in_pool(line: &str, messages: &[&str]) -> bool {
    DEFAULT.contains(&line) || messages.contains(&line)
}
