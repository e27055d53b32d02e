//! # Database Session
//!
//! Owns the single live connection to the embedded engine and exposes the
//! narrow surface the runner needs: execute one statement, list tables,
//! close. Everything else (parsing, planning, execution, the type system)
//! belongs to the engine.
//!
//! ## Execution Contract
//!
//! `execute` never returns `Err` for a bad statement: engine failures are
//! data, captured verbatim in [`Outcome::Failure`] so the script executor can
//! record them and keep going. Only resource-level problems (cannot open the
//! database file) surface as `eyre` errors.
//!
//! Rows are materialized eagerly into owned values so results outlive the
//! prepared statement that produced them.
//!
//! ## Lifecycle
//!
//! The connection lives behind an `Option`, so [`Session::close`] is a
//! re-entrant no-op once the handle is gone. Statements run with full effect
//! and no implicit transaction wrapping: a failing statement does not roll
//! back earlier ones in the same script.

use eyre::{eyre, Result, WrapErr};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

/// An owned cell value fetched from the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

const BLOB_PREVIEW_BYTES: usize = 16;

impl Value {
    /// Renders the value for terminal display. NULL is the literal `NULL`,
    /// distinguishable from an empty string.
    pub fn render(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Real(f) => format!("{:.6}", f)
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string(),
            Value::Text(s) => s.clone(),
            Value::Blob(b) => render_blob(b),
        }
    }
}

fn render_blob(bytes: &[u8]) -> String {
    if bytes.len() <= BLOB_PREVIEW_BYTES {
        let hex: String = bytes.iter().map(|b| format!("{:02X}", b)).collect();
        format!("x'{}'", hex)
    } else {
        let hex: String = bytes[..BLOB_PREVIEW_BYTES]
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect();
        format!("x'{}'... ({} bytes)", hex, bytes.len())
    }
}

impl From<ValueRef<'_>> for Value {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(f) => Value::Real(f),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Value::Blob(b.to_vec()),
        }
    }
}

/// Columns plus row tuples for a row-returning statement.
///
/// Invariant: every row has exactly `columns.len()` values.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Result of running one statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The statement returned rows (SELECT, PRAGMA, ...).
    Rows(ResultSet),
    /// The statement ran without returning rows (DDL/DML).
    Done { rows_affected: usize },
    /// The engine rejected the statement; message is verbatim engine text.
    Failure(String),
}

/// One open connection to the embedded engine.
pub struct Session {
    conn: Option<Connection>,
    path: PathBuf,
}

impl Session {
    /// Opens (or creates) the database file at `path`, creating the parent
    /// directory if it does not exist yet.
    pub fn connect(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).wrap_err_with(|| {
                    format!("failed to create directory {}", parent.display())
                })?;
            }
        }
        let conn = Connection::open(path)
            .wrap_err_with(|| format!("failed to open database at {}", path.display()))?;
        Ok(Self {
            conn: Some(conn),
            path: path.to_path_buf(),
        })
    }

    /// Opens a session against a throwaway in-memory database.
    pub fn connect_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().wrap_err("failed to open in-memory database")?;
        Ok(Self {
            conn: Some(conn),
            path: PathBuf::from(":memory:"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Executes one statement. Row-returning statements yield a fully
    /// materialized [`ResultSet`]; others yield the affected-row count.
    /// Engine errors come back as [`Outcome::Failure`] with the engine's
    /// message untouched.
    pub fn execute(&self, sql: &str) -> Outcome {
        let conn = match &self.conn {
            Some(conn) => conn,
            None => return Outcome::Failure("session is closed".to_string()),
        };

        let mut stmt = match conn.prepare(sql) {
            Ok(stmt) => stmt,
            Err(err) => return Outcome::Failure(err.to_string()),
        };

        if stmt.column_count() == 0 {
            // The engine's per-statement change counter is sticky: DDL leaves
            // the previous DML's count in place. The cumulative counter only
            // moves when rows actually change, so report its delta.
            let changes_before = conn.total_changes();
            return match stmt.execute([]) {
                Ok(_) => Outcome::Done {
                    rows_affected: conn.total_changes().saturating_sub(changes_before) as usize,
                },
                Err(err) => Outcome::Failure(err.to_string()),
            };
        }

        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let width = columns.len();

        let mut rows = match stmt.query([]) {
            Ok(rows) => rows,
            Err(err) => return Outcome::Failure(err.to_string()),
        };

        let mut fetched: Vec<Vec<Value>> = Vec::new();
        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut tuple = Vec::with_capacity(width);
                    for i in 0..width {
                        match row.get_ref(i) {
                            Ok(value) => tuple.push(Value::from(value)),
                            Err(err) => return Outcome::Failure(err.to_string()),
                        }
                    }
                    fetched.push(tuple);
                }
                Ok(None) => break,
                // Runtime evaluation errors (e.g. from a CAST) arrive here,
                // after some rows may already have been fetched.
                Err(err) => return Outcome::Failure(err.to_string()),
            }
        }

        Outcome::Rows(ResultSet {
            columns,
            rows: fetched,
        })
    }

    /// Runs a single freeform statement, the `query` command path. Same
    /// contract as [`Session::execute`].
    pub fn execute_query(&self, sql: &str) -> Outcome {
        self.execute(sql.trim())
    }

    /// Names of user tables and views, sorted, excluding engine internals.
    pub fn list_tables(&self) -> Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master \
             WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite_%' \
             ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(names)
    }

    /// Drops every user table and view. Returns the names dropped.
    pub fn drop_all_tables(&self) -> Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT name, type FROM sqlite_master \
             WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite_%' \
             ORDER BY type DESC, name",
        )?;
        let objects = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        drop(stmt);

        let mut dropped = Vec::with_capacity(objects.len());
        for (name, kind) in objects {
            let quoted = name.replace('"', "\"\"");
            let sql = if kind == "view" {
                format!("DROP VIEW IF EXISTS \"{}\"", quoted)
            } else {
                format!("DROP TABLE IF EXISTS \"{}\"", quoted)
            };
            conn.execute_batch(&sql)
                .wrap_err_with(|| format!("failed to drop {}", name))?;
            dropped.push(name);
        }
        Ok(dropped)
    }

    /// Releases the connection. Safe to call more than once.
    pub fn close(&mut self) -> Result<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, err)| err)?;
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }

    fn conn(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or_else(|| eyre!("session is closed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_and_dml_return_done() {
        let session = Session::connect_in_memory().unwrap();

        let created = session.execute("CREATE TABLE t (a INT)");
        assert!(matches!(created, Outcome::Done { .. }));

        let inserted = session.execute("INSERT INTO t VALUES (1), (2)");
        assert_eq!(inserted, Outcome::Done { rows_affected: 2 });
    }

    #[test]
    fn ddl_after_dml_reports_zero_rows_affected() {
        let session = Session::connect_in_memory().unwrap();
        session.execute("CREATE TABLE t (a INT)");

        let inserted = session.execute("INSERT INTO t VALUES (1), (2), (3)");
        assert_eq!(inserted, Outcome::Done { rows_affected: 3 });

        // A stale per-statement counter would report 3 here.
        let created = session.execute("CREATE TABLE u (b INT)");
        assert_eq!(created, Outcome::Done { rows_affected: 0 });

        let deleted = session.execute("DELETE FROM t WHERE a > 1");
        assert_eq!(deleted, Outcome::Done { rows_affected: 2 });
    }

    #[test]
    fn select_returns_rows_with_columns() {
        let session = Session::connect_in_memory().unwrap();
        session.execute("CREATE TABLE t (a INT, b TEXT)");
        session.execute("INSERT INTO t VALUES (1, 'one')");

        match session.execute("SELECT a, b FROM t") {
            Outcome::Rows(result) => {
                assert_eq!(result.columns, vec!["a", "b"]);
                assert_eq!(
                    result.rows,
                    vec![vec![Value::Integer(1), Value::Text("one".to_string())]]
                );
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn engine_error_text_is_surfaced_verbatim() {
        let session = Session::connect_in_memory().unwrap();

        match session.execute("SELECT * FROM no_such_table") {
            Outcome::Failure(message) => {
                assert!(
                    message.contains("no_such_table"),
                    "engine message should name the missing table, got: {}",
                    message
                );
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn session_survives_a_failed_statement() {
        let session = Session::connect_in_memory().unwrap();

        let failed = session.execute("SELEKT 1");
        assert!(matches!(failed, Outcome::Failure(_)));

        let ok = session.execute("SELECT 1");
        assert!(matches!(ok, Outcome::Rows(_)), "session must stay usable");
    }

    #[test]
    fn null_values_come_back_as_null() {
        let session = Session::connect_in_memory().unwrap();

        match session.execute("SELECT NULL AS n") {
            Outcome::Rows(result) => assert_eq!(result.rows[0][0], Value::Null),
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn list_tables_excludes_internals_and_sorts() {
        let session = Session::connect_in_memory().unwrap();
        session.execute("CREATE TABLE zebra (a INT)");
        session.execute("CREATE TABLE apple (a INT)");
        session.execute("CREATE VIEW fruit AS SELECT * FROM apple");

        let tables = session.list_tables().unwrap();
        assert_eq!(tables, vec!["apple", "fruit", "zebra"]);
    }

    #[test]
    fn drop_all_tables_empties_the_catalog() {
        let session = Session::connect_in_memory().unwrap();
        session.execute("CREATE TABLE a (x INT)");
        session.execute("CREATE VIEW v AS SELECT * FROM a");

        let dropped = session.drop_all_tables().unwrap();
        assert_eq!(dropped.len(), 2);
        assert!(session.list_tables().unwrap().is_empty());
    }

    #[test]
    fn close_is_reentrant() {
        let mut session = Session::connect_in_memory().unwrap();

        session.close().unwrap();
        session.close().unwrap();
        assert!(session.is_closed());

        match session.execute("SELECT 1") {
            Outcome::Failure(message) => assert!(message.contains("closed")),
            other => panic!("expected failure after close, got {:?}", other),
        }
    }

    #[test]
    fn value_rendering() {
        assert_eq!(Value::Null.render(), "NULL");
        assert_eq!(Value::Integer(42).render(), "42");
        assert_eq!(Value::Real(3.5).render(), "3.5");
        assert_eq!(Value::Real(3.0).render(), "3");
        assert_eq!(Value::Text(String::new()).render(), "");
        assert_eq!(Value::Blob(vec![0xDE, 0xAD]).render(), "x'DEAD'");
    }

    #[test]
    fn long_blob_render_is_truncated() {
        let rendered = Value::Blob((0..32).collect()).render();
        assert!(rendered.contains("..."));
        assert!(rendered.contains("32 bytes"));
    }
}
