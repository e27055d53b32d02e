//! # SQL File Discovery
//!
//! Walks a directory tree for `.sql` files and returns them in lexicographic
//! path order, so repeated listings of an unchanged tree are identical. A
//! missing or empty root is an empty listing, not an error. Symlinked
//! directories are not followed.

use crate::config::SQL_EXTENSION;
use std::fs;
use std::path::{Path, PathBuf};

/// Collects `.sql` files under `root`, sorted by full path. When `filter` is
/// given, only paths containing that substring (case-sensitive) are kept.
pub fn sql_files(root: &Path, filter: Option<&str>) -> Vec<PathBuf> {
    let mut found = Vec::new();
    walk(root, &mut found);
    found.sort();

    if let Some(fragment) = filter {
        found.retain(|path| path.to_string_lossy().contains(fragment));
    }
    found
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        // file_type() does not follow symlinks.
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(_) => continue,
        };
        let path = entry.path();
        if file_type.is_dir() {
            walk(&path, out);
        } else if file_type.is_file()
            && path.extension().map_or(false, |ext| ext == SQL_EXTENSION)
        {
            out.push(path);
        }
    }
}
