//! # Script Executor
//!
//! Runs a whole `.sql` file against a session: split the text, execute each
//! statement in order, report a per-statement outcome, and keep going past
//! individual failures. The summary accumulates over the statement sequence
//! as an explicit fold, so partial-failure behavior is data, not control
//! flow.
//!
//! A statement failure never aborts the file; this is a teaching tool, and
//! later statements frequently stand alone. Only problems that prevent the
//! run from starting at all (missing file, unreadable file) surface as
//! errors.

use crate::config::{FILE_RUN_MAX_ROWS, STATEMENT_PREVIEW_LEN};
use crate::format;
use crate::session::{Outcome, Session};
use crate::split::split_statements;
use eyre::{bail, Result, WrapErr};
use std::fs;
use std::path::Path;

/// Aggregate outcome of one file run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// (statement ordinal, verbatim engine message) per failure.
    pub failures: Vec<(usize, String)>,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Executes every statement in the file at `path`, printing per-statement
/// outcomes and a closing count line. A missing file is an error before any
/// statement runs; an empty file is a clean zero/zero summary.
pub fn run_file(session: &Session, path: &Path) -> Result<RunSummary> {
    if !path.is_file() {
        bail!("file not found: {}", path.display());
    }
    let source = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    println!("Running {}", path.display());
    let summary = run_script(session, &source);
    println!(
        "{} statement{} succeeded, {} failed",
        summary.succeeded,
        if summary.succeeded == 1 { "" } else { "s" },
        summary.failed
    );
    Ok(summary)
}

/// Runs raw script text, statement by statement, continuing past failures.
pub fn run_script(session: &Session, source: &str) -> RunSummary {
    split_statements(source)
        .iter()
        .fold(RunSummary::default(), |mut summary, stmt| {
            match session.execute(&stmt.text) {
                Outcome::Rows(result) => {
                    println!("Statement {}:", stmt.ordinal);
                    print!("{}", format::render_table(&result, FILE_RUN_MAX_ROWS));
                    summary.succeeded += 1;
                }
                Outcome::Done { rows_affected } => {
                    println!("{}", format::status_line(stmt.ordinal, rows_affected));
                    summary.succeeded += 1;
                }
                Outcome::Failure(message) => {
                    eprintln!("Statement {} failed: {}", stmt.ordinal, message);
                    eprintln!("  {}", preview(&stmt.text));
                    summary.failures.push((stmt.ordinal, message));
                    summary.failed += 1;
                }
            }
            summary
        })
}

/// Single-line, length-capped echo of a statement for error reports.
fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.len() <= STATEMENT_PREVIEW_LEN {
        flat
    } else {
        let mut cut: String = flat.chars().take(STATEMENT_PREVIEW_LEN - 3).collect();
        cut.push_str("...");
        cut
    }
}
