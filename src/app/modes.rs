//! Overlay and theme mode state types for the application.
//!
//! This module defines the state machine enums that control which UI region is
//! open and which palette is active. These types determine which keybindings
//! are live, how input is routed, and what the renderer draws on top of the
//! card list.
//!
//! # State Machine
//!
//! At most one overlay is open at a time:
//! - **Browse**: no overlay; keys navigate and activate cards
//! - **Search**: the filter form is open; keys edit the form
//! - **Settings**: the theme form is open; keys cycle the choice
//! - **Detail**: a selected book's detail view is open
//!
//! # Example
//!
//! ```
//! use bookcase::app::modes::{Overlay, SearchField, ThemeMode};
//!
//! let overlay = Overlay::Search;
//! let focus = SearchField::Title;
//! let mode = ThemeMode::Night;
//! assert_eq!(mode.as_str(), "night");
//! ```

/// Which overlay region is currently open.
///
/// Overlays are boolean-open UI regions layered over the card list; the
/// controller opens and closes them, the renderer draws whichever is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// No overlay; the card list has focus.
    ///
    /// Available keybindings: j/k (move selection), Enter (open detail),
    /// m (show more), / (search), s (settings), q (quit).
    Browse,

    /// The search form is open.
    ///
    /// Tab cycles field focus, typing edits the title field, h/l cycle the
    /// author and genre selects, Enter submits, Esc cancels.
    Search,

    /// The settings form is open.
    ///
    /// j/k cycle the day/night choice, Enter applies, Esc cancels.
    Settings,

    /// A book's detail view is open.
    ///
    /// Esc (or Enter) closes it.
    Detail,
}

/// Focus state within the search form.
///
/// Determines which of the three filter fields receives edits. Cycled with
/// Tab in display order: title, then author, then genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// The free-text title substring field.
    Title,

    /// The author select ("any" + name-sorted authors).
    Author,

    /// The genre select ("any" + name-sorted genres).
    Genre,
}

impl SearchField {
    /// The next field in display order, wrapping from genre back to title.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Genre,
            Self::Genre => Self::Title,
        }
    }
}

/// Active color palette.
///
/// The sole externally visible effect of switching modes is swapping the
/// palette used by all rendering. The initial mode comes from configuration
/// or a one-time startup read of the terminal environment; it is never
/// re-detected mid-session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light palette.
    #[default]
    Day,

    /// Dark palette.
    Night,
}

impl ThemeMode {
    /// The built-in theme name for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    /// Parses a configured mode name.
    ///
    /// Accepts exactly `"day"` and `"night"`; anything else is `None` so the
    /// caller can fall back to its default.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "day" => Some(Self::Day),
            "night" => Some(Self::Night),
            _ => None,
        }
    }
}
