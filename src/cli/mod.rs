//! # Interactive Shell Module
//!
//! The shell reads one command per line, dispatches it synchronously, and
//! prompts again:
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                 CLI Entry Point                 │
//! │                (bin/sqlrun.rs)                  │
//! ├────────────────────────────────────────────────┤
//! │                   REPL Loop                     │
//! │  - Reads input via rustyline                    │
//! │  - Parses the fixed command vocabulary          │
//! │  - Dispatches to runner / session / discovery   │
//! ├────────────────────────────────────────────────┤
//! │    Commands       │   Runner    │   History     │
//! │  (closed enum)    │ (script     │  Persistent   │
//! │                   │  executor)  │  ~/.sqlrun_*  │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! Command errors never terminate the loop; only `quit`/`exit` or end of
//! input do, and both close the database session on the way out.
//!
//! - `repl`: the loop itself, with rustyline line editing
//! - `commands`: command parsing and help text
//! - `history`: history file path resolution (`SQLRUN_HISTORY` override)

pub mod commands;
pub mod history;
pub mod repl;

pub use commands::Command;
pub use repl::Shell;
