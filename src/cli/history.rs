//! Shell history persistence.
//!
//! The history file lives at `~/.sqlrun_history` unless `SQLRUN_HISTORY`
//! points elsewhere; an empty `SQLRUN_HISTORY` turns persistence off.
//! Resolution is separated from the environment read so the precedence
//! rules are testable without touching process state. rustyline does the
//! actual file I/O.

use std::env;
use std::path::PathBuf;

const DEFAULT_HISTORY_FILE: &str = ".sqlrun_history";
const HISTORY_ENV_VAR: &str = "SQLRUN_HISTORY";

pub fn history_path() -> Option<PathBuf> {
    resolve(
        env::var(HISTORY_ENV_VAR).ok().as_deref(),
        env::var("HOME").ok().as_deref(),
    )
}

fn resolve(custom: Option<&str>, home: Option<&str>) -> Option<PathBuf> {
    match custom {
        Some("") => None,
        Some(path) => Some(PathBuf::from(path)),
        None => home.map(|h| PathBuf::from(h).join(DEFAULT_HISTORY_FILE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_beats_home() {
        let path = resolve(Some("/custom/history"), Some("/home/me"));
        assert_eq!(path, Some(PathBuf::from("/custom/history")));
    }

    #[test]
    fn empty_override_disables_persistence() {
        assert_eq!(resolve(Some(""), Some("/home/me")), None);
    }

    #[test]
    fn default_lands_in_home() {
        let path = resolve(None, Some("/home/me"));
        assert_eq!(path, Some(PathBuf::from("/home/me/.sqlrun_history")));
    }

    #[test]
    fn no_home_means_no_history() {
        assert_eq!(resolve(None, None), None);
    }
}
