//! Path utilities for data locations and user-supplied file arguments.
//!
//! This module resolves the application's data directory (log files live
//! there) and expands tilde-prefixed paths from configuration values.

use std::path::PathBuf;

/// Returns the data directory for Bookcase files.
///
/// Respects `XDG_DATA_HOME` when set, otherwise falls back to
/// `~/.local/share`, always with a `bookcase` component appended. The log
/// file is located within this directory.
///
/// When neither variable is available the directory degrades to a relative
/// `.bookcase` path, keeping startup working in stripped-down environments.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("bookcase");
        }
    }

    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => PathBuf::from(home).join(".local/share/bookcase"),
        _ => PathBuf::from(".bookcase"),
    }
}

/// Expands a leading tilde in user-supplied paths.
///
/// Configuration values like `catalog=~/books.json` are expanded against
/// `$HOME`. Paths without a tilde prefix pass through unchanged, as does
/// everything when `$HOME` is unset.
///
/// # Examples
///
/// ```
/// use bookcase::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/path"), "relative/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Ok(home) = std::env::var("HOME") else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home
    } else {
        path.to_string()
    }
}
