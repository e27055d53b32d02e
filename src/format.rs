//! # Result Formatter
//!
//! Renders a [`ResultSet`] as an ASCII box table:
//!
//! ```text
//! +----+-------+
//! | id | name  |
//! +----+-------+
//! |  1 | Alice |
//! |  2 | Bob   |
//! +----+-------+
//! ```
//!
//! Column widths are the larger of the header and the widest rendered value
//! among the displayed rows, capped at [`MAX_COLUMN_WIDTH`] with `...`
//! truncation. At most `max_rows` rows are shown; when rows are omitted a
//! trailing note says how many. Rendering is a pure function of the result
//! set and the cap, so repeated calls produce identical output.

use crate::config::MAX_COLUMN_WIDTH;
use crate::session::ResultSet;
use std::fmt::Write;

pub struct TableFormatter {
    headers: Vec<String>,
    widths: Vec<usize>,
    rows: Vec<Vec<String>>,
    omitted: usize,
}

impl TableFormatter {
    pub fn new(result: &ResultSet, max_rows: usize) -> Self {
        let headers = result.columns.clone();
        let mut widths: Vec<usize> = headers.iter().map(|h| h.len().max(1)).collect();

        let shown = result.rows.len().min(max_rows);
        let rows: Vec<Vec<String>> = result.rows[..shown]
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, value)| {
                        let rendered = value.render();
                        if i < widths.len() {
                            widths[i] = widths[i].max(rendered.len()).min(MAX_COLUMN_WIDTH);
                        }
                        rendered
                    })
                    .collect()
            })
            .collect();

        Self {
            headers,
            widths,
            rows,
            omitted: result.rows.len() - shown,
        }
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        self.write_separator(&mut output);
        self.write_row(&mut output, &self.headers);
        self.write_separator(&mut output);
        for row in &self.rows {
            self.write_row(&mut output, row);
        }
        self.write_separator(&mut output);

        if self.omitted > 0 {
            let _ = writeln!(output, "... ({} more rows)", self.omitted);
        }
        output
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn write_separator(&self, output: &mut String) {
        output.push('+');
        for width in &self.widths {
            for _ in 0..(*width + 2) {
                output.push('-');
            }
            output.push('+');
        }
        output.push('\n');
    }

    fn write_row(&self, output: &mut String, cells: &[String]) {
        output.push('|');
        for (i, cell) in cells.iter().enumerate() {
            let width = self.widths.get(i).copied().unwrap_or(1);
            let _ = write!(output, " {:<width$} |", truncate(cell, width), width = width);
        }
        output.push('\n');
    }
}

/// Renders up to `max_rows` rows of `result` as an ASCII table.
pub fn render_table(result: &ResultSet, max_rows: usize) -> String {
    TableFormatter::new(result, max_rows).render()
}

/// Status line for a statement that produced no rows.
pub fn status_line(ordinal: usize, rows_affected: usize) -> String {
    format!(
        "Statement {}: OK ({} row{} affected)",
        ordinal,
        rows_affected,
        if rows_affected == 1 { "" } else { "s" }
    )
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let mut result: String = s.chars().take(max_len - 3).collect();
        result.push_str("...");
        result
    }
}
