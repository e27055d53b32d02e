//! # Runner Configuration Constants
//!
//! Centralizes the runner's tunable values so interdependent settings live in
//! one place. Display caps in particular relate to each other:
//!
//! ```text
//! FILE_RUN_MAX_ROWS (10)
//!       │
//!       └─> rows shown per SELECT while running a script; scripts often
//!           contain many queries, so the cap keeps output scannable.
//!
//! QUERY_MAX_ROWS (100)
//!       │
//!       └─> rows shown for an interactive `query`; a single ad-hoc query
//!           warrants more screen space than a script statement.
//! ```
//!
//! The formatter always reports how many rows a cap omitted, so neither cap
//! hides data silently.

/// Default database file, created on first connect.
pub const DEFAULT_DB_PATH: &str = "data/exercises.db";

/// Bootstrap script executed by the `setup` command and the `--setup` flag.
pub const BOOTSTRAP_SCRIPT: &str = "sql/bootstrap.sql";

/// File extension collected by discovery (without the dot).
pub const SQL_EXTENSION: &str = "sql";

/// Rows displayed per row-returning statement during a script run.
pub const FILE_RUN_MAX_ROWS: usize = 10;

/// Rows displayed for a one-shot or interactive `query`.
pub const QUERY_MAX_ROWS: usize = 100;

/// Widest a rendered table column may grow before values are truncated.
pub const MAX_COLUMN_WIDTH: usize = 50;

/// Length cap when echoing an offending statement in an error report.
pub const STATEMENT_PREVIEW_LEN: usize = 60;
