//! # sqlrun - SQL Exercise Runner
//!
//! A small command-line runner for a SQL learning corpus. It discovers
//! `.sql` exercise files, splits multi-statement scripts, executes them
//! against an embedded SQLite database, and prints results as ASCII tables.
//! All SQL parsing, planning, and execution belong to the engine; this crate
//! only drives it.
//!
//! ## Pipeline
//!
//! ```text
//! shell / one-shot CLI
//!        │
//!        ▼
//! ┌──────────────────┐   ┌──────────────────┐
//! │ runner           │──▶│ split            │  script text → statements
//! │ (per-file fold,  │   └──────────────────┘
//! │  continue on     │   ┌──────────────────┐
//! │  failure)        │──▶│ session          │  statement → rows | error
//! └──────────────────┘   └──────────────────┘
//!        │               ┌──────────────────┐
//!        └──────────────▶│ format           │  rows → ASCII table
//!                        └──────────────────┘
//! ```
//!
//! A statement failure is recorded and the run continues; scripts here are
//! teaching material, not transactions, so partial progress stays visible.
//!
//! ## Module Overview
//!
//! - [`split`]: lexical statement splitting (`--` comments, `;` terminator)
//! - [`session`]: the one live engine connection and its execute contract
//! - [`discover`]: deterministic `.sql` file listing
//! - [`format`]: ASCII table rendering with row caps
//! - [`runner`]: whole-file execution and run summaries
//! - [`cli`]: the interactive shell
//! - [`config`]: centralized constants

pub mod cli;
pub mod config;
pub mod discover;
pub mod format;
pub mod runner;
pub mod session;
pub mod split;

pub use runner::{run_file, run_script, RunSummary};
pub use session::{Outcome, ResultSet, Session, Value};
pub use split::{split_statements, Statement};
