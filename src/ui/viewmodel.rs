//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information: resolved author names, title match highlight ranges, the
//! "show more" control state, and the open overlay's display text.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data, which
//! keeps the controller testable without a live terminal.

/// Complete UI view model for one frame.
///
/// Contains everything needed to render the browser: the windowed card list,
/// the selection position within that window, header/footer chrome, the
/// "show more" control, the optional "no results" state, and whichever overlay
/// is open (at most one).
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Preview cards inside the visible window.
    pub cards: Vec<CardItem>,

    /// Index of the selected card within `cards`.
    pub selected_index: usize,

    /// Header information (title, match count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// The "show more" pagination control.
    pub show_more: ShowMoreInfo,

    /// "No results" message, present iff the match set is empty.
    pub empty_state: Option<EmptyState>,

    /// Search form overlay, present while it is open.
    pub search_overlay: Option<SearchOverlayInfo>,

    /// Settings form overlay, present while it is open.
    pub settings_overlay: Option<SettingsOverlayInfo>,

    /// Book detail overlay, present while it is open.
    pub detail_overlay: Option<DetailInfo>,
}

/// Display information for a single preview card.
///
/// Represents one row in the card list, with the author id already resolved
/// to a display name and title match ranges pre-computed.
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Book id, surfaced back to the controller on activation.
    pub id: String,

    /// Book title, truncated for the title column if necessary.
    pub title: String,

    /// Author display name.
    pub author: String,

    /// Whether this card is currently selected.
    pub is_selected: bool,

    /// Character ranges of the title matching the active title filter.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices,
    /// exclusive end. Empty when no title filter is active.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header bar.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// State of the "show more" pagination control.
///
/// Enabled exactly while unrevealed matches remain; the label carries the
/// remaining count, e.g. "Show more (5)".
#[derive(Debug, Clone)]
pub struct ShowMoreInfo {
    /// How many matched books are not yet revealed.
    pub remaining: usize,

    /// Whether the control accepts activation.
    pub enabled: bool,
}

/// "No results" display information.
///
/// Shown when the active filter matches zero books. A persistent UI state,
/// not an error.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search form overlay display information.
///
/// Field values are already display text: select fields show "All Authors" /
/// "All Genres" or the chosen name, never raw ids.
#[derive(Debug, Clone)]
pub struct SearchOverlayInfo {
    /// Current text of the title field.
    pub title_text: String,

    /// Display label of the chosen author option.
    pub author_label: String,

    /// Display label of the chosen genre option.
    pub genre_label: String,

    /// Which field currently has focus.
    pub focus: FieldFocus,
}

/// Which search form row is focused, for rendering the focus marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFocus {
    /// The title text field.
    Title,
    /// The author select.
    Author,
    /// The genre select.
    Genre,
}

/// Settings form overlay display information.
#[derive(Debug, Clone)]
pub struct SettingsOverlayInfo {
    /// Display label of the drafted theme choice ("Day" or "Night").
    pub theme_label: String,
}

/// Book detail overlay display information.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    /// Book title.
    pub title: String,

    /// Author display name and publication year, e.g. "Frank Herbert (1969)".
    pub subtitle: String,

    /// Back-cover description, wrapped by the renderer.
    pub description: String,

    /// Comma-separated genre display names.
    pub genres: String,

    /// Cover image URL.
    pub image: String,
}
