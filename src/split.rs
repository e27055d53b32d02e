//! # Statement Splitter
//!
//! Turns raw script text into an ordered sequence of executable statements.
//! Line comments (`--`) are stripped first, then the remaining text is split
//! on `;` and trimmed. Empty fragments are dropped, so a trailing terminator
//! or a comment-only file produces no statements.
//!
//! Splitting is purely lexical. A `;` inside a string literal mis-splits the
//! statement; the engine then rejects the fragments with a syntax error, which
//! is the accepted failure mode. The splitter never parses SQL.

/// One executable statement extracted from a script.
///
/// Ordinals are 1-based and contiguous within a file, numbering only the
/// non-empty statements that survive comment stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub ordinal: usize,
    pub text: String,
}

/// Splits script text into trimmed, ordered statements.
///
/// Input with no terminator yields a single statement equal to the trimmed
/// whole text. Comment-only or blank input yields an empty vec.
pub fn split_statements(source: &str) -> Vec<Statement> {
    let mut cleaned = String::with_capacity(source.len());
    for line in source.lines() {
        // Everything from `--` to end of line is comment. This also chops a
        // `--` that sits inside a string literal, same as the `;` limitation.
        let code = match line.find("--") {
            Some(idx) => &line[..idx],
            None => line,
        };
        if code.trim().is_empty() {
            continue;
        }
        cleaned.push_str(code);
        cleaned.push('\n');
    }

    cleaned
        .split(';')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .enumerate()
        .map(|(i, text)| Statement {
            ordinal: i + 1,
            text: text.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_statements_in_order() {
        let source = "CREATE TABLE t (a INT); INSERT INTO t VALUES (1); SELECT * FROM t;";
        let statements = split_statements(source);

        assert_eq!(statements.len(), 3);
        assert_eq!(statements[0].ordinal, 1);
        assert_eq!(statements[0].text, "CREATE TABLE t (a INT)");
        assert_eq!(statements[1].ordinal, 2);
        assert_eq!(statements[1].text, "INSERT INTO t VALUES (1)");
        assert_eq!(statements[2].ordinal, 3);
        assert_eq!(statements[2].text, "SELECT * FROM t");
    }

    #[test]
    fn missing_terminator_yields_single_statement() {
        let statements = split_statements("  SELECT 1  ");

        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].text, "SELECT 1");
        assert_eq!(statements[0].ordinal, 1);
    }

    #[test]
    fn comment_only_lines_are_dropped() {
        let source = "-- heading\n-- another comment\nSELECT 1;\n-- trailing\n";
        let statements = split_statements(source);

        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].text, "SELECT 1");
    }

    #[test]
    fn inline_comments_are_stripped() {
        let source = "SELECT 1; -- the answer\nSELECT 2 -- half the answer\n;";
        let statements = split_statements(source);

        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].text, "SELECT 1");
        assert_eq!(statements[1].text, "SELECT 2");
    }

    #[test]
    fn blank_and_empty_fragments_are_skipped() {
        let statements = split_statements(";;  ;\n;SELECT 1;;");

        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].ordinal, 1, "ordinals number kept statements only");
    }

    #[test]
    fn empty_input_yields_no_statements() {
        assert!(split_statements("").is_empty());
        assert!(split_statements("   \n\n  ").is_empty());
        assert!(split_statements("-- nothing but comments\n").is_empty());
    }

    #[test]
    fn multiline_statement_stays_intact() {
        let source = "SELECT a,\n       b\nFROM t\nWHERE a > 1;";
        let statements = split_statements(source);

        assert_eq!(statements.len(), 1);
        assert!(statements[0].text.contains("WHERE a > 1"));
    }

    #[test]
    fn terminator_inside_literal_mis_splits() {
        // Known lexical limitation: the split does not honor string literals.
        let statements = split_statements("SELECT 'a;b';");

        assert_eq!(statements.len(), 2);
    }
}
