//! # sqlrun CLI Entry Point
//!
//! One-shot flags run and exit; with no action flags (or with `-i`) the
//! interactive shell starts. The process exits non-zero when any statement
//! in a `--file` run failed or a one-shot operation errored.
//!
//! ```bash
//! # Bootstrap the default database, then explore interactively
//! sqlrun --setup -i
//!
//! # Run one exercise file
//! sqlrun --file exercises/section-1-basics/01-select.sql
//!
//! # One-off query against a specific database
//! sqlrun --db data/scratch.db --query "SELECT count(*) FROM orders"
//! ```

use eyre::{bail, Result};
use sqlrun::cli::Shell;
use sqlrun::config::{BOOTSTRAP_SCRIPT, DEFAULT_DB_PATH, QUERY_MAX_ROWS};
use sqlrun::{format, run_file, Outcome, Session};
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every requested operation completed without failures.
fn run() -> Result<bool> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = PathBuf::from(DEFAULT_DB_PATH);
    let mut setup = false;
    let mut file: Option<PathBuf> = None;
    let mut query: Option<String> = None;
    let mut interactive = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(true);
            }
            "--version" | "-v" => {
                println!("sqlrun {}", env!("CARGO_PKG_VERSION"));
                return Ok(true);
            }
            "--db" => {
                i += 1;
                match args.get(i) {
                    Some(path) => db_path = PathBuf::from(path),
                    None => bail!("--db requires a path"),
                }
            }
            "--setup" => setup = true,
            "--file" => {
                i += 1;
                match args.get(i) {
                    Some(path) => file = Some(PathBuf::from(path)),
                    None => bail!("--file requires a path"),
                }
            }
            "--query" => {
                i += 1;
                match args.get(i) {
                    Some(sql) => query = Some(sql.clone()),
                    None => bail!("--query requires a SQL string"),
                }
            }
            "--interactive" | "-i" => interactive = true,
            arg => bail!("unknown option: {}", arg),
        }
        i += 1;
    }

    let mut session = Session::connect(&db_path)?;
    let mut clean = true;

    if setup {
        clean &= run_file(&session, Path::new(BOOTSTRAP_SCRIPT))?.is_clean();
    }

    if let Some(path) = &file {
        clean &= run_file(&session, path)?.is_clean();
    }

    if let Some(sql) = &query {
        match session.execute_query(sql) {
            Outcome::Rows(result) => {
                print!("{}", format::render_table(&result, QUERY_MAX_ROWS));
            }
            Outcome::Done { rows_affected } => {
                println!(
                    "OK ({} row{} affected)",
                    rows_affected,
                    if rows_affected == 1 { "" } else { "s" }
                );
            }
            Outcome::Failure(message) => {
                eprintln!("Error: {}", message);
                clean = false;
            }
        }
    }

    let no_action = !setup && file.is_none() && query.is_none();
    if interactive || no_action {
        // The shell owns the session from here and closes it on exit.
        let mut shell = Shell::new(session)?;
        shell.run()?;
    } else {
        session.close()?;
    }

    Ok(clean)
}

fn print_usage() {
    println!("sqlrun - interactive runner for the SQL exercise corpus");
    println!();
    println!("USAGE:");
    println!("    sqlrun [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --db <path>        Database file (default: {})", DEFAULT_DB_PATH);
    println!("    --setup            Run the bootstrap script ({})", BOOTSTRAP_SCRIPT);
    println!("    --file <path>      Execute one SQL file and exit");
    println!("    --query <sql>      Execute one SQL statement and exit");
    println!("    -i, --interactive  Start the interactive shell");
    println!("    -h, --help         Print help information");
    println!("    -v, --version      Print version information");
    println!();
    println!("With no options, sqlrun starts the interactive shell.");
}
