//! # Zingers Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that attach the offending path to any error.
//! Config and catalog loading read through `read_file_to_string`; `catalog init`
//! writes through `write_new_file`.
//!
//! - **`ensure_dir_exists`**: `mkdir -p`, failing if the path is a file.
//! - **`read_file_to_string`**: `fs::read_to_string` with context.
//! - **`write_string_to_file`**: creates the parent directory, then writes (overwriting).
//! - **`write_new_file`**: like `write_string_to_file`, but refuses to replace an
//!   existing file unless `overwrite` is set.
//!
use crate::core::error::{Result, ZingerError};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at `path`, creating parents as needed.
///
/// # Errors
///
/// Returns `ZingerError::FileSystem` if `path` exists but is not a directory,
/// or the underlying I/O error if creation fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
        info!("Created directory: {}", path.display());
    } else if !path.is_dir() {
        anyhow::bail!(ZingerError::FileSystem(format!(
            "Path exists but is not a directory: {}",
            path.display()
        )));
    } else {
        debug!("Directory already exists: {}", path.display());
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Writes `content` to `path`, creating the parent directory first.
/// An existing file is overwritten.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write to file {}", path.display()))?;
    info!("Wrote content to file: {}", path.display());
    Ok(())
}

/// Writes a new file, refusing to clobber an existing one unless `overwrite` is set.
pub fn write_new_file(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        anyhow::bail!(ZingerError::FileSystem(format!(
            "'{}' already exists. Use --force to overwrite it.",
            path.display()
        )));
    }
    write_string_to_file(path, content)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("new/subdir");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        // Second call is a no-op.
        ensure_dir_exists(&new_dir)?;
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    #[test]
    fn test_read_write_string_to_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("nested/catalog.toml");
        write_string_to_file(&file_path, "default = [\"hi\"]")?;
        assert_eq!(read_file_to_string(&file_path)?, "default = [\"hi\"]");
        Ok(())
    }

    #[test]
    fn test_read_file_not_found() -> Result<()> {
        let base_dir = tempdir()?;
        let result = read_file_to_string(&base_dir.path().join("nonexistent.txt"));
        assert!(result.unwrap_err().to_string().contains("Failed to read file"));
        Ok(())
    }

    #[test]
    fn test_write_new_file_respects_overwrite() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("catalog.toml");
        write_new_file(&file_path, "first", false)?;

        let refused = write_new_file(&file_path, "second", false);
        assert!(refused.unwrap_err().to_string().contains("already exists"));
        assert_eq!(read_file_to_string(&file_path)?, "first");

        write_new_file(&file_path, "third", true)?;
        assert_eq!(read_file_to_string(&file_path)?, "third");
        Ok(())
    }
}
