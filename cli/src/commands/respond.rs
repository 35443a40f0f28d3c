//! # Zingers Respond Command
//!
//! File: cli/src/commands/respond.rs
//!
//! ## Overview
//!
//! `zingers respond <AGE>` is a single form submission: the age is parsed,
//! classified, a response is drawn from that bucket's pool and printed on
//! stdout.
//!
//! ```bash
//! zingers respond 17
//! zingers respond 70 --show-bucket       # [senior] Relax. AI isn’t coming for bingo night.
//! zingers respond forty --on-invalid reject   # exits with status 1
//! ```
//!
//! With no age at all the submission counts as invalid input, same as an
//! empty form field.
//!
use crate::commands::submit::{Session, SubmitArgs};
use crate::common::ui::ResponseBox;
use crate::core::config::Overrides;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

/// Arguments for `zingers respond`.
#[derive(Parser, Debug)]
pub struct RespondArgs {
    /// The submitted age. Parsed leniently: "17abc" is 17, "4.9" is 4.
    #[arg(allow_negative_numbers = true)]
    pub age: Option<String>,

    #[command(flatten)]
    pub submit: SubmitArgs,
}

/// Handles `zingers respond`.
pub async fn handle_respond(args: RespondArgs, overrides: &Overrides) -> Result<()> {
    let raw_age = args.age.as_deref().unwrap_or("");
    info!("Handling respond command for input {:?}", raw_age);

    let mut session = Session::load(&args.submit, overrides)?;
    let response = session.submit(raw_age)?;

    let mut response_box = ResponseBox::new(std::io::stdout(), args.submit.show_bucket);
    response_box.show(&response)?;
    Ok(())
}
