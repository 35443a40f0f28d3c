//! # Zingers Form Command
//!
//! File: cli/src/commands/form.rs
//!
//! ## Overview
//!
//! `zingers form` is the interactive version of the complaint form. Each line
//! read from stdin is one submission of the age field; the response replaces
//! the previous one in the response box (stdout).
//!
//! The form ends at end of input, on a line reading `quit` or `exit`, or on
//! Ctrl+C. A blank line is still a submission (an empty age field).
//!
//! ## Architecture
//!
//! Stdin is read on a dedicated thread and forwarded line by line over a
//! `tokio::sync::mpsc` channel, so a pending read never keeps the runtime from
//! shutting down. `run_form` consumes the channel and handles each line to
//! completion before taking the next; `handle_form` races it against Ctrl+C
//! with `tokio::select!`.
//!
//! ```bash
//! $ zingers form --show-bucket
//! Age: 17
//! [young] Your TikTok algorithm is more dangerous than GPT.
//! Age: 64
//! [senior] Complaint received. Reality unchanged.
//! Age: quit
//! ```
//!
use crate::commands::submit::{Session, SubmitArgs};
use crate::common::ui::ResponseBox;
use crate::core::config::Overrides;
use crate::core::error::{Result, ZingerError};
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

const PROMPT: &str = "Age: ";
const INVALID_AGE_HINT: &str = "Please enter your age as a whole number.";

/// Arguments for `zingers form`.
#[derive(Parser, Debug)]
pub struct FormArgs {
    #[command(flatten)]
    pub submit: SubmitArgs,
}

/// Handles `zingers form`.
pub async fn handle_form(args: FormArgs, overrides: &Overrides) -> Result<()> {
    info!("Handling form command...");
    let mut session = Session::load(&args.submit, overrides)?;
    let mut response_box = ResponseBox::new(io::stdout(), args.submit.show_bucket);
    let lines = spawn_stdin_reader();

    tokio::select! {
        result = run_form(lines, &mut response_box, &mut session) => {
            let submissions = result?;
            info!("Form closed after {} submission(s).", submissions);
            debug!("Last response shown: {:?}", response_box.current());
        }
        _ = interrupt_signal() => {
            // Leave the prompt line before exiting.
            println!();
            info!("Received Ctrl+C, closing the form.");
        }
    }
    Ok(())
}

/// Reads stdin on its own thread and forwards each line.
fn spawn_stdin_reader() -> mpsc::Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        forward_lines(io::stdin().lock(), tx);
        debug!("Stdin reader finished.");
    });
    rx
}

/// Sends each line of `reader` without its line ending. Bytes that are not
/// UTF-8 are replaced, so such a line still arrives as an (invalid) age.
fn forward_lines<R: BufRead>(mut reader: R, tx: mpsc::Sender<io::Result<String>>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let line = match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return,
            Ok(_) => {
                if buf.ends_with(b"\n") {
                    buf.pop();
                    if buf.ends_with(b"\r") {
                        buf.pop();
                    }
                }
                Ok(String::from_utf8_lossy(&buf).into_owned())
            }
            Err(e) => Err(e),
        };
        let failed = line.is_err();
        if tx.blocking_send(line).is_err() || failed {
            return;
        }
    }
}

/// Resolves on Ctrl+C. Never resolves if the handler cannot be installed.
async fn interrupt_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Runs the form until the input ends or the user quits.
///
/// Returns the number of submissions handled. Invalid ages rejected by the
/// `reject` policy show a hint and do not stop the form.
pub async fn run_form<W: Write>(
    mut lines: mpsc::Receiver<io::Result<String>>,
    response_box: &mut ResponseBox<W>,
    session: &mut Session,
) -> Result<usize> {
    let mut submissions = 0;
    loop {
        response_box.prompt(PROMPT)?;
        let line = match lines.recv().await {
            Some(line) => line.context("Failed to read from stdin")?,
            None => break,
        };
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }
        submissions += 1;
        match session.submit(input) {
            Ok(response) => response_box.show(&response)?,
            Err(err @ ZingerError::InvalidInput { .. }) => {
                warn!("{}", err);
                response_box.show_notice(INVALID_AGE_HINT)?;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(submissions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{AgeBucket, MessageCatalog};
    use crate::core::config::InvalidInputPolicy;

    /// Feeds `input` through a closed channel, as if stdin hit end of file after it.
    fn lines_of(input: &[&str]) -> mpsc::Receiver<io::Result<String>> {
        let (tx, rx) = mpsc::channel(input.len().max(1));
        for line in input {
            tx.try_send(Ok(line.to_string())).unwrap();
        }
        rx
    }

    fn session(policy: InvalidInputPolicy) -> Session {
        let catalog = MessageCatalog::new(
            vec!["default".into()],
            vec!["young".into()],
            vec!["adult".into()],
            vec!["senior".into()],
        )
        .unwrap();
        Session::new(catalog, policy, AgeBucket::Senior, Some(5))
    }

    fn output(response_box: ResponseBox<Vec<u8>>) -> String {
        String::from_utf8(response_box.into_inner()).unwrap()
    }

    #[test]
    fn test_parses_form_flags() {
        let args = FormArgs::try_parse_from(["form", "--seed", "3", "--show-bucket"]).unwrap();
        assert_eq!(args.submit.seed, Some(3));
        assert!(args.submit.show_bucket);
    }

    #[tokio::test]
    async fn test_form_answers_each_line_until_eof() {
        let mut session = session(InvalidInputPolicy::Fallback);
        let mut response_box = ResponseBox::new(Vec::new(), true);
        let count = run_form(lines_of(&["17", "45", "70"]), &mut response_box, &mut session)
            .await
            .unwrap();
        assert_eq!(count, 3);

        let written = output(response_box);
        let responses: Vec<&str> = written
            .split(PROMPT)
            .filter(|chunk| !chunk.is_empty())
            .collect();
        assert_eq!(responses.len(), 3);
        assert!(responses[0].starts_with("[young] "));
        assert!(responses[1].starts_with("[adult] "));
        assert!(responses[2].starts_with("[senior] "));
    }

    #[tokio::test]
    async fn test_form_stops_at_quit() {
        let mut session = session(InvalidInputPolicy::Fallback);
        let mut response_box = ResponseBox::new(Vec::new(), false);
        let count = run_form(
            lines_of(&["30", "QUIT", "40"]),
            &mut response_box,
            &mut session,
        )
        .await
        .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_form_reject_policy_shows_hint_and_continues() {
        let mut session = session(InvalidInputPolicy::Reject);
        let mut response_box = ResponseBox::new(Vec::new(), true);
        let count = run_form(
            lines_of(&["abc", "", "12"]),
            &mut response_box,
            &mut session,
        )
        .await
        .unwrap();
        assert_eq!(count, 3);
        assert!(response_box.current().unwrap().starts_with("[young] "));

        let written = output(response_box);
        assert_eq!(written.matches(INVALID_AGE_HINT).count(), 2);
    }

    #[tokio::test]
    async fn test_form_fallback_policy_answers_blank_line() {
        let mut session = session(InvalidInputPolicy::Fallback);
        let mut response_box = ResponseBox::new(Vec::new(), true);
        run_form(lines_of(&[""]), &mut response_box, &mut session)
            .await
            .unwrap();
        assert!(response_box.current().unwrap().starts_with("[senior] "));
    }

    #[tokio::test]
    async fn test_form_survives_non_utf8_line() {
        let (tx, rx) = mpsc::channel(4);
        let input: &'static [u8] = b"\xff\xfe\r\n33\n";
        let reader = tokio::task::spawn_blocking(move || forward_lines(input, tx));

        let mut session = session(InvalidInputPolicy::Reject);
        let mut response_box = ResponseBox::new(Vec::new(), true);
        let count = run_form(rx, &mut response_box, &mut session)
            .await
            .unwrap();
        reader.await.unwrap();
        assert_eq!(count, 2);
        assert!(response_box.current().unwrap().starts_with("[adult] "));
        assert_eq!(output(response_box).matches(INVALID_AGE_HINT).count(), 1);
    }

    #[tokio::test]
    async fn test_forward_lines_strips_line_endings() {
        let (tx, mut rx) = mpsc::channel(4);
        let input: &'static [u8] = b"17\r\n 45 \nlast";
        tokio::task::spawn_blocking(move || forward_lines(input, tx))
            .await
            .unwrap();
        let mut lines = Vec::new();
        while let Some(line) = rx.recv().await {
            lines.push(line.unwrap());
        }
        assert_eq!(lines, vec!["17", " 45 ", "last"]);
    }

    #[tokio::test]
    async fn test_form_read_error_is_reported() {
        let (tx, rx) = mpsc::channel(1);
        tx.try_send(Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed")))
            .unwrap();
        let mut session = session(InvalidInputPolicy::Fallback);
        let mut response_box = ResponseBox::new(Vec::new(), false);
        let err = run_form(rx, &mut response_box, &mut session)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read from stdin"));
    }
}
