//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color palette system for the browser, supporting the
//! two built-in day/night themes and custom themes loaded from TOML files. It
//! provides utilities for converting hex colors to ANSI escape sequences.
//!
//! Switching between day and night swaps the entire palette; every component
//! reads its colors from the active [`Theme`], so the swap is the only visible
//! effect.
//!
//! # Built-in Themes
//!
//! - `day`: light palette (default)
//! - `night`: dark palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "day"
//!
//! [colors]
//! header_fg = "#0a0a14"
//! selection_fg = "#ffffff"
//! selection_bg = "#0a0a14"
//! text_normal = "#0a0a14"
//! text_dim = "#6b6b76"
//! border = "#c9c9d1"
//! overlay_border = "#0a0a14"
//! match_highlight_fg = "#ffffff"
//! match_highlight_bg = "#3a5fcd"
//! empty_state_fg = "#3a5fcd"
//! show_more_fg = "#3a5fcd"
//! show_more_disabled_fg = "#a0a0aa"
//! ```
//!
//! # Example
//!
//! ```
//! use bookcase::ui::Theme;
//!
//! let theme = Theme::from_name("night").unwrap();
//! let styled = format!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert!(styled.contains("Bold"));
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color palette configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Loaded from the built-in
/// day/night palettes or from a custom TOML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#0a0a14"). Optional fields
/// default to `None`, allowing themes to opt out of certain styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card foreground color.
    pub selection_fg: String,
    /// Selected card background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Overlay (search/settings/detail) box border color.
    pub overlay_border: String,

    /// Title match highlight foreground.
    pub match_highlight_fg: String,
    /// Title match highlight background.
    pub match_highlight_bg: String,

    /// "No results" message color.
    pub empty_state_fg: String,

    /// "Show more" control color while enabled.
    pub show_more_fg: String,
    /// "Show more" control color while disabled.
    pub show_more_disabled_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `day`, `night`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```
    /// use bookcase::ui::Theme;
    ///
    /// let theme = Theme::from_name("day").unwrap();
    /// assert_eq!(theme.name, "day");
    /// assert!(Theme::from_name("sepia").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "day" => include_str!("../../themes/day.toml"),
            "night" => include_str!("../../themes/night.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, missing fields)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read theme file: {e}"))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse theme TOML: {e}"))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips the `#` prefix if present, validates length, and parses hex
    /// digits. Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[38;2;r;g;bm`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[48;2;r;g;bm`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (day).
    ///
    /// # Panics
    ///
    /// Panics if the built-in day theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("day").expect("Built-in day theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::from_name("day").unwrap().name, "day");
        assert_eq!(Theme::from_name("night").unwrap().name, "night");
        assert!(Theme::from_name("catppuccin-mocha").is_none());
    }

    #[test]
    fn day_and_night_differ() {
        let day = Theme::from_name("day").unwrap();
        let night = Theme::from_name("night").unwrap();
        assert_ne!(day.colors.text_normal, night.colors.text_normal);
    }

    #[test]
    fn loads_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"
name = "custom"

[colors]
header_fg = "#111111"
selection_fg = "#222222"
selection_bg = "#333333"
text_normal = "#444444"
text_dim = "#555555"
border = "#666666"
overlay_border = "#777777"
match_highlight_fg = "#888888"
match_highlight_bg = "#999999"
empty_state_fg = "#aaaaaa"
show_more_fg = "#bbbbbb"
show_more_disabled_fg = "#cccccc"
"##
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.colors.border, "#666666");
        assert!(theme.colors.header_bg.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = ").unwrap();
        assert!(Theme::from_file(file.path()).is_err());
    }

    #[test]
    fn hex_colors_become_ansi_sequences() {
        assert_eq!(Theme::fg("#ffffff"), "\u{001b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("000000"), "\u{001b}[48;2;0;0;0m");
        // Malformed input falls back to white rather than corrupting output.
        assert_eq!(Theme::fg("#123"), "\u{001b}[38;2;255;255;255m");
    }
}
