//! # Shell Command Vocabulary
//!
//! The shell's fixed command set, parsed into a closed enum so every command
//! has a compile-time-checked handler arm instead of stringly dispatch.
//!
//! | Command       | Description                                   |
//! |---------------|-----------------------------------------------|
//! | `setup`       | Run the bootstrap script                      |
//! | `tables`      | List user tables and views                    |
//! | `files [sub]` | List `.sql` files, optionally filtered        |
//! | `run <path>`  | Execute one SQL file                          |
//! | `query <sql>` | Execute a single SQL statement                |
//! | `clean`       | Drop every user table and view                |
//! | `help`        | Show this command list                        |
//! | `quit`/`exit` | Close the session and leave                   |
//!
//! Parsing never touches the session; unknown input becomes an `Err` with a
//! usage hint and the shell state stays unchanged.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Setup,
    Tables,
    Files(Option<String>),
    Run(PathBuf),
    Query(String),
    Clean,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. The first token selects the command; the rest
    /// of the line is the argument where one is expected.
    pub fn parse(input: &str) -> Result<Command, String> {
        let trimmed = input.trim();
        let (name, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (trimmed, ""),
        };

        match name {
            "setup" => Ok(Command::Setup),
            "tables" => Ok(Command::Tables),
            "files" => Ok(Command::Files(if rest.is_empty() {
                None
            } else {
                Some(rest.to_string())
            })),
            "run" => {
                if rest.is_empty() {
                    Err("usage: run <path>".to_string())
                } else {
                    Ok(Command::Run(PathBuf::from(rest)))
                }
            }
            "query" => {
                if rest.is_empty() {
                    Err("usage: query <sql>".to_string())
                } else {
                    Ok(Command::Query(rest.to_string()))
                }
            }
            "clean" => Ok(Command::Clean),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!(
                "unknown command: {}. Type help for available commands.",
                other
            )),
        }
    }
}

pub fn help_text() -> String {
    r#"Commands:

  setup          Run the bootstrap script against the current database
  tables         List all tables and views
  files [text]   List SQL files, optionally only paths containing text
  run <path>     Execute a SQL file, statement by statement
  query <sql>    Execute a single SQL statement
  clean          Drop every table and view
  help           Show this message
  quit, exit     Close the session and leave"#
        .to_string()
}
