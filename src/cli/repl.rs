//! # Interactive Shell
//!
//! Single-threaded read-eval-print loop over the fixed command vocabulary.
//! Each line is parsed into a [`Command`] and dispatched synchronously; the
//! loop blocks until the command finishes, then prompts again. Errors local
//! to one command are printed and the loop keeps going.
//!
//! The shell owns the session for its lifetime and closes it on every exit
//! path (`quit`, `exit`, Ctrl+D). Ctrl+C cancels the current line and
//! returns to the prompt.

use crate::cli::commands::{help_text, Command};
use crate::cli::history::history_path;
use crate::config::{BOOTSTRAP_SCRIPT, QUERY_MAX_ROWS};
use crate::discover::sql_files;
use crate::format;
use crate::runner::run_file;
use crate::session::{Outcome, Session};
use eyre::{Result, WrapErr};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::{Path, PathBuf};

const PROMPT: &str = "sql> ";

pub struct Shell {
    session: Session,
    /// Root directory for the `files` listing.
    root: PathBuf,
    editor: DefaultEditor,
}

impl Shell {
    pub fn new(session: Session) -> Result<Self> {
        let mut editor = DefaultEditor::new().wrap_err("failed to initialize line editor")?;

        if let Some(history_file) = history_path() {
            let _ = editor.load_history(&history_file);
        }

        Ok(Self {
            session,
            root: PathBuf::from("."),
            editor,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.print_welcome();

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(trimmed).ok();

                    match Command::parse(trimmed) {
                        Ok(command) => {
                            if !self.dispatch(command) {
                                break;
                            }
                        }
                        Err(hint) => eprintln!("{}", hint),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye");
                    break;
                }
                Err(err) => {
                    eprintln!("Error reading input: {}", err);
                    break;
                }
            }
        }

        self.save_history();
        self.session.close()?;
        Ok(())
    }

    /// Runs one command; returns false when the loop should end.
    fn dispatch(&mut self, command: Command) -> bool {
        match command {
            Command::Setup => {
                self.run_script_file(Path::new(BOOTSTRAP_SCRIPT));
            }
            Command::Tables => match self.session.list_tables() {
                Ok(tables) if tables.is_empty() => println!("No tables found."),
                Ok(tables) => {
                    for table in tables {
                        println!("  {}", table);
                    }
                }
                Err(err) => eprintln!("Error: {:#}", err),
            },
            Command::Files(filter) => {
                let files = sql_files(&self.root, filter.as_deref());
                if files.is_empty() {
                    println!("No SQL files found.");
                } else {
                    for (i, file) in files.iter().enumerate() {
                        println!("  {}. {}", i + 1, file.display());
                    }
                }
            }
            Command::Run(path) => {
                self.run_script_file(&path);
            }
            Command::Query(sql) => match self.session.execute_query(&sql) {
                Outcome::Rows(result) => {
                    print!("{}", format::render_table(&result, QUERY_MAX_ROWS));
                    println!(
                        "{} row{} in set",
                        result.row_count(),
                        if result.row_count() == 1 { "" } else { "s" }
                    );
                }
                Outcome::Done { rows_affected } => {
                    println!(
                        "OK ({} row{} affected)",
                        rows_affected,
                        if rows_affected == 1 { "" } else { "s" }
                    );
                }
                Outcome::Failure(message) => eprintln!("Error: {}", message),
            },
            Command::Clean => match self.session.drop_all_tables() {
                Ok(dropped) if dropped.is_empty() => println!("Nothing to drop."),
                Ok(dropped) => {
                    for name in &dropped {
                        println!("  dropped {}", name);
                    }
                }
                Err(err) => eprintln!("Error: {:#}", err),
            },
            Command::Help => println!("{}", help_text()),
            Command::Quit => return false,
        }
        true
    }

    fn run_script_file(&self, path: &Path) {
        if let Err(err) = run_file(&self.session, path) {
            eprintln!("Error: {:#}", err);
        }
    }

    fn print_welcome(&self) {
        println!("sqlrun {}", env!("CARGO_PKG_VERSION"));
        println!("Connected to: {}", self.session.path().display());
        println!("Type help for commands, quit to leave.");
        println!();
    }

    fn save_history(&mut self) {
        if let Some(history_file) = history_path() {
            if let Err(err) = self.editor.save_history(&history_file) {
                eprintln!("Warning: could not save history: {}", err);
            }
        }
    }
}
