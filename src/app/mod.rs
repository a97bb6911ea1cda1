//! Interactive session and one-shot runs.
//!
//! Each search line is spawned as its own task so a new query can be entered
//! while an earlier one is still in flight; the session discards the stale
//! result. `:open` first waits for pending searches so the card numbers refer
//! to what is on screen.

pub mod command;

use std::io::Write;

use anyhow::{Context, Result};
use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;

use crate::api::CountrySource;
use crate::comments::{CommentBoard, CommentForm};
use crate::pipeline::{SearchOutcome, SearchSession};
use crate::render::CountryView;

pub use command::{Command, CommandError, HELP};

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Searches started (including card clicks)
    pub searches: usize,
    /// Searches that displayed a country
    pub displayed: usize,
    /// Searches that ended with an error message
    pub failed: usize,
    /// Searches overtaken by a newer one
    pub superseded: usize,
    /// Outcome of the most recently started search that was awaited, if any
    pub last_outcome: Option<SearchOutcome>,
}

impl SessionReport {
    fn from_session<S, V>(session: &SearchSession<S, V>, last_outcome: Option<SearchOutcome>) -> Self
    where
        S: CountrySource,
        V: CountryView,
    {
        let stats = session.stats();
        Self {
            searches: stats.started(),
            displayed: stats.displayed(),
            failed: stats.total_failures(),
            superseded: stats.superseded(),
            last_outcome,
        }
    }
}

/// Runs a single search and reports its outcome.
pub async fn run_once<S, V>(session: &SearchSession<S, V>, query: &str) -> SessionReport
where
    S: CountrySource,
    V: CountryView,
{
    let outcome = session.search(query).await;
    SessionReport::from_session(session, Some(outcome))
}

/// Reads commands from `input` until EOF or `:quit`.
///
/// Everything that is not a search result (help, comments, command errors)
/// is written to `out`.
pub async fn run_interactive<S, V, R, W>(
    mut session: SearchSession<S, V>,
    input: R,
    out: &mut W,
) -> Result<SessionReport>
where
    S: CountrySource + 'static,
    V: CountryView + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut pending: Vec<JoinHandle<SearchOutcome>> = Vec::new();
    let mut last_outcome = None;
    let mut board = CommentBoard::new();
    let mut form = CommentForm::default();

    writeln!(out, "{}", HELP).context("Failed to write help")?;

    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from input")?
    {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}").context("Failed to write output")?;
                continue;
            }
        };
        debug!("Command: {:?}", command);

        match command {
            Command::Search(query) => {
                let session = session.clone();
                pending.push(tokio::spawn(async move { session.search(&query).await }));
            }
            Command::Open(position) => {
                if let Some(outcome) = drain(&mut pending).await? {
                    last_outcome = Some(outcome);
                }
                match session.open_card(position).await {
                    Some(outcome) => last_outcome = Some(outcome),
                    None => writeln!(out, "No country card #{position}")
                        .context("Failed to write output")?,
                }
            }
            Command::Mode(mode) => {
                if let Some(outcome) = drain(&mut pending).await? {
                    last_outcome = Some(outcome);
                }
                session.set_mode(mode);
                info!("Switched to {} mode", mode);
                writeln!(out, "Search mode: {mode}").context("Failed to write output")?;
            }
            Command::Comment { name, text } => {
                form.name = name;
                form.text = text;
                if board.submit(&mut form) {
                    if let Some(block) = board.blocks().last() {
                        writeln!(out, "{block}").context("Failed to write output")?;
                    }
                } else {
                    writeln!(out, "Both a name and a comment are required")
                        .context("Failed to write output")?;
                }
            }
            Command::Sort(order) => {
                board.sort(order);
                write_board(out, &board)?;
            }
            Command::ListComments => write_board(out, &board)?,
            Command::Help => writeln!(out, "{}", HELP).context("Failed to write help")?,
            Command::Quit => break,
        }
    }

    if let Some(outcome) = drain(&mut pending).await? {
        last_outcome = Some(outcome);
    }
    Ok(SessionReport::from_session(&session, last_outcome))
}

/// Waits for all pending searches; returns the last one's outcome.
async fn drain(pending: &mut Vec<JoinHandle<SearchOutcome>>) -> Result<Option<SearchOutcome>> {
    let mut last = None;
    for handle in pending.drain(..) {
        last = Some(handle.await.context("Search task panicked")?);
    }
    Ok(last)
}

fn write_board<W: Write>(out: &mut W, board: &CommentBoard) -> Result<()> {
    if board.is_empty() {
        writeln!(out, "No comments yet").context("Failed to write output")?;
    }
    for block in board.blocks() {
        writeln!(out, "{block}").context("Failed to write output")?;
    }
    Ok(())
}
