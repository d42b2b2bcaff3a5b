//! Terminal environment inspection.
//!
//! This module reads the conventional `COLORFGBG` environment variable to
//! guess whether the terminal uses a dark background. The read happens once
//! at startup to pick the initial theme; the preference is never re-checked
//! mid-session.

/// Background color codes `COLORFGBG` treats as dark.
///
/// The variable's last `;`-separated field is the background color index;
/// 0 through 6 and 8 are the dark half of the classic 16-color palette.
const DARK_BACKGROUND_CODES: [&str; 8] = ["0", "1", "2", "3", "4", "5", "6", "8"];

/// Whether the terminal reports a dark background.
///
/// Parses the `COLORFGBG` convention (`"<fg>;<bg>"`, set by several terminal
/// emulators). Returns `None` when the variable is unset or unparseable, so
/// the caller can fall back to its own default.
///
/// # Examples
///
/// ```
/// use bookcase::infrastructure::prefers_dark;
///
/// // Depends on the environment; only the type is stable here.
/// let _: Option<bool> = prefers_dark();
/// ```
#[must_use]
pub fn prefers_dark() -> Option<bool> {
    let value = std::env::var("COLORFGBG").ok()?;
    let background = value.rsplit(';').next()?.trim();

    if background.is_empty() || background.parse::<u8>().is_err() {
        return None;
    }

    Some(DARK_BACKGROUND_CODES.contains(&background))
}
