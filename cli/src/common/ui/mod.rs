//! # Zingers UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! The terminal stand-in for the form's response box. A `ResponseBox` owns an
//! output writer (stdout in the binary, a `Vec<u8>` in tests) and remembers
//! only the text it displayed last: each call to `show` replaces the previous
//! response, and no history is kept.
//!
//! ```ignore
//! let mut response_box = ResponseBox::new(std::io::stdout(), false);
//! response_box.prompt("Age: ")?;
//! response_box.show(&response)?;
//! ```
//!
use crate::core::error::Result;
use crate::core::selector::DisplayedResponse;
use anyhow::Context;
use std::io::Write;

/// Output surface for submission responses.
pub struct ResponseBox<W: Write> {
    out: W,
    current: Option<String>,
    show_bucket: bool,
}

impl<W: Write> ResponseBox<W> {
    /// `show_bucket` prefixes each response with the bucket it came from, e.g. `[adult]`.
    pub fn new(out: W, show_bucket: bool) -> Self {
        ResponseBox {
            out,
            current: None,
            show_bucket,
        }
    }

    /// Displays a selected response, replacing whatever was shown before.
    pub fn show(&mut self, response: &DisplayedResponse) -> Result<()> {
        let line = if self.show_bucket {
            format!("[{}] {}", response.bucket, response.text)
        } else {
            response.text.clone()
        };
        self.display(line)
    }

    /// Displays a plain message (e.g. an input hint) in place of a response.
    pub fn show_notice(&mut self, message: &str) -> Result<()> {
        self.display(message.to_string())
    }

    /// Writes an input prompt without a trailing newline.
    pub fn prompt(&mut self, label: &str) -> Result<()> {
        write!(self.out, "{}", label).context("Failed to write prompt")?;
        self.out.flush().context("Failed to flush output")
    }

    /// The text currently on display, if anything has been shown.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Gives back the writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn display(&mut self, line: String) -> Result<()> {
        writeln!(self.out, "{}", line).context("Failed to write response")?;
        self.out.flush().context("Failed to flush output")?;
        self.current = Some(line);
        Ok(())
    }
}
