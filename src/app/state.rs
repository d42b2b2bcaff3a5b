//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! browser, along with the operations the event handler drives: filter
//! application, pagination, card selection, overlay control, and theme
//! switching. It serves as the single source of truth for all transient UI
//! state.
//!
//! # Architecture
//!
//! `AppState` separates the immutable catalog from derived state (the match
//! set, the page cursor, the card selection) to keep the three consistent:
//! replacing the match set always resets the cursor and selection, and the
//! "show more" control state is recomputed from the cursor on every frame.
//! View models are computed on-demand from state snapshots, so the controller
//! is testable without a live terminal.
//!
//! # State Components
//!
//! - **Catalog**: Immutable books, name maps, page size
//! - **Query / Matches**: Last applied filter and its ordered match set
//! - **Cursor**: How many pages of the match set are revealed
//! - **Selection**: Highlighted card within the revealed slice
//! - **Overlay**: Which UI region (search/settings/detail) is open
//! - **Theme**: Active palette and day/night mode
//!
//! # Example
//!
//! ```
//! use bookcase::app::{AppState, FilterQuery};
//! use bookcase::app::modes::ThemeMode;
//! use bookcase::catalog::{CatalogSource, JsonCatalog};
//! use bookcase::ui::Theme;
//!
//! let catalog = JsonCatalog::builtin().load()?;
//! let mut state = AppState::new(catalog, Theme::default(), ThemeMode::Day);
//! state.apply_filter(FilterQuery::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! # Ok::<(), bookcase::domain::BookcaseError>(())
//! ```

use crate::app::filter::{self, Choice, FilterQuery};
use crate::app::modes::{Overlay, SearchField, ThemeMode};
use crate::app::pager::PageCursor;
use crate::catalog::Catalog;
use crate::domain::Book;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, DetailInfo, EmptyState, FieldFocus, FooterInfo, HeaderInfo, SearchOverlayInfo,
    SettingsOverlayInfo, ShowMoreInfo, UIViewModel,
};

/// Transient contents of the search form while it is open.
///
/// Select fields are stored as indices into "any" + the catalog's name-sorted
/// option lists, with slot 0 meaning "any". The draft is seeded from the last
/// applied query when the form opens and discarded on cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDraft {
    /// Text of the title field.
    pub title: String,

    /// Chosen slot in the author select (0 = "any").
    pub author_index: usize,

    /// Chosen slot in the genre select (0 = "any").
    pub genre_index: usize,

    /// Which field receives edits.
    pub focus: SearchField,
}

impl Default for SearchDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            author_index: 0,
            genre_index: 0,
            focus: SearchField::Title,
        }
    }
}

/// Central application state container.
///
/// Holds the catalog plus all transient UI state. Mutated only by the event
/// handler in response to user input; every mutation runs to completion before
/// the next event is processed.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The immutable source dataset.
    pub catalog: Catalog,

    /// Last applied filter. Matches everything initially.
    pub query: FilterQuery,

    /// Ordered match set produced by `query`. Recomputed wholesale on every
    /// filter submission, never diffed incrementally.
    pub matches: Vec<Book>,

    /// How many pages of `matches` are revealed.
    pub cursor: PageCursor,

    /// Index of the highlighted card within the revealed slice.
    pub selected_index: usize,

    /// Which overlay is open, if any.
    pub overlay: Overlay,

    /// Search form contents while the search overlay is open.
    pub search_draft: SearchDraft,

    /// Theme choice while the settings overlay is open.
    pub settings_draft: ThemeMode,

    /// Book shown by the detail overlay.
    pub detail: Option<Book>,

    /// Active color palette.
    pub theme: Theme,

    /// Active day/night mode.
    pub theme_mode: ThemeMode,

    /// Author `(id, name)` options sorted by name, computed once.
    author_options: Vec<(String, String)>,

    /// Genre `(id, name)` options sorted by name, computed once.
    genre_options: Vec<(String, String)>,
}

impl AppState {
    /// Creates the initial application state.
    ///
    /// The implicit initial query matches everything, so the match set starts
    /// as the full catalog with the first page revealed.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme, theme_mode: ThemeMode) -> Self {
        let matches = catalog.books().to_vec();
        let cursor = PageCursor::new(catalog.page_size());
        let author_options = catalog.author_options();
        let genre_options = catalog.genre_options();

        Self {
            catalog,
            query: FilterQuery::default(),
            matches,
            cursor,
            selected_index: 0,
            overlay: Overlay::Browse,
            search_draft: SearchDraft::default(),
            settings_draft: theme_mode,
            detail: None,
            theme,
            theme_mode,
            author_options,
            genre_options,
        }
    }

    /// The revealed slice of the match set.
    #[must_use]
    pub fn visible_books(&self) -> &[Book] {
        &self.matches[..self.cursor.visible_count(self.matches.len())]
    }

    /// How many matched books are not yet revealed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cursor.remaining(self.matches.len())
    }

    /// Whether the "show more" control accepts activation.
    #[must_use]
    pub fn show_more_enabled(&self) -> bool {
        self.remaining() > 0
    }

    /// Returns the currently highlighted book, if any card is visible.
    #[must_use]
    pub fn selected_book(&self) -> Option<&Book> {
        self.visible_books().get(self.selected_index)
    }

    /// Moves the card selection down by one, wrapping to the top.
    ///
    /// No-op while no cards are visible.
    pub fn move_selection_down(&mut self) {
        let visible = self.visible_books().len();
        if visible == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % visible;
    }

    /// Moves the card selection up by one, wrapping to the bottom.
    ///
    /// No-op while no cards are visible.
    pub fn move_selection_up(&mut self) {
        let visible = self.visible_books().len();
        if visible == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = visible - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Applies a filter query, replacing the match set.
    ///
    /// Runs the filter evaluator over the full catalog, resets the page cursor
    /// to the first page, and moves the selection back to the top. The next
    /// render shows the first page of results, the "no results" indicator iff
    /// the match set is empty, and the updated remaining count.
    pub fn apply_filter(&mut self, query: FilterQuery) {
        let _span = tracing::debug_span!("apply_filter",
            total_books = self.catalog.books().len(),
            title_len = query.title.trim().len()
        )
        .entered();

        self.matches = filter::evaluate(&query, self.catalog.books());
        self.query = query;
        self.cursor.reset();
        self.selected_index = 0;

        tracing::debug!(
            match_count = self.matches.len(),
            remaining = self.remaining(),
            "filter applied"
        );
    }

    /// Reveals the next page of the match set.
    ///
    /// Precondition: unrevealed matches remain. The control is disabled once
    /// `remaining` hits zero, so a call in that state is a guarded no-op
    /// rather than an error.
    pub fn load_more(&mut self) {
        if self.remaining() == 0 {
            tracing::debug!("load_more with nothing remaining, ignoring");
            return;
        }

        self.cursor.advance();

        tracing::debug!(
            page = self.cursor.page(),
            visible = self.visible_books().len(),
            remaining = self.remaining(),
            "page revealed"
        );
    }

    /// Opens the detail overlay for a book id.
    ///
    /// The id is resolved against the full catalog, not the match set, so a
    /// card stays selectable even after the filter that revealed it changed.
    /// An id that does not resolve is silently ignored: cards only ever carry
    /// catalog ids, so a miss is a precondition violation, not an error to
    /// surface.
    pub fn select_book(&mut self, id: &str) {
        match self.catalog.find_book(id) {
            Some(book) => {
                tracing::debug!(book_id = %id, title = %book.title, "opening detail");
                self.detail = Some(book.clone());
                self.overlay = Overlay::Detail;
            }
            None => {
                tracing::debug!(book_id = %id, "selection did not resolve, ignoring");
            }
        }
    }

    /// Closes the detail overlay.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.overlay = Overlay::Browse;
    }

    /// Opens the search overlay with the form seeded from the last applied query.
    pub fn open_search(&mut self) {
        self.search_draft = self.seeded_draft();
        self.overlay = Overlay::Search;
    }

    /// Closes the search overlay, discarding the draft.
    pub fn cancel_search(&mut self) {
        self.search_draft = SearchDraft::default();
        self.overlay = Overlay::Browse;
    }

    /// Applies the drafted filter and closes the search overlay.
    pub fn submit_search(&mut self) {
        let query = self.draft_query();
        self.apply_filter(query);
        self.overlay = Overlay::Browse;
    }

    /// Moves search form focus to the next field.
    pub fn focus_next_field(&mut self) {
        self.search_draft.focus = self.search_draft.focus.next();
    }

    /// Appends a character to the title field.
    ///
    /// Only meaningful while the title field has focus; the handler guards
    /// the call.
    pub fn push_title_char(&mut self, c: char) {
        self.search_draft.title.push(c);
    }

    /// Removes the last character from the title field.
    pub fn pop_title_char(&mut self) {
        self.search_draft.title.pop();
    }

    /// Steps the focused select field through its options.
    ///
    /// Slot 0 is "any"; the remaining slots are the catalog's name-sorted
    /// options. Cycling wraps in both directions. No-op while the title
    /// field has focus.
    pub fn cycle_option(&mut self, forward: bool) {
        let (index, option_count) = match self.search_draft.focus {
            SearchField::Author => (&mut self.search_draft.author_index, self.author_options.len()),
            SearchField::Genre => (&mut self.search_draft.genre_index, self.genre_options.len()),
            SearchField::Title => return,
        };

        let total = option_count + 1;
        *index = if forward {
            (*index + 1) % total
        } else {
            (*index + total - 1) % total
        };
    }

    /// Opens the settings overlay seeded with the active theme mode.
    pub fn open_settings(&mut self) {
        self.settings_draft = self.theme_mode;
        self.overlay = Overlay::Settings;
    }

    /// Closes the settings overlay, discarding the draft.
    pub fn cancel_settings(&mut self) {
        self.overlay = Overlay::Browse;
    }

    /// Applies the drafted theme choice and closes the settings overlay.
    pub fn submit_settings(&mut self) {
        self.set_theme(self.settings_draft);
        self.overlay = Overlay::Browse;
    }

    /// Toggles the drafted theme choice between day and night.
    pub fn cycle_settings_choice(&mut self) {
        self.settings_draft = self.settings_draft.toggled();
    }

    /// Swaps the active palette.
    ///
    /// The only externally visible effect is that all subsequent rendering
    /// uses the other palette.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        match Theme::from_name(mode.as_str()) {
            Some(theme) => {
                tracing::debug!(theme = mode.as_str(), "switching theme");
                self.theme = theme;
                self.theme_mode = mode;
            }
            None => {
                tracing::debug!(theme = mode.as_str(), "built-in theme missing, keeping current");
            }
        }
    }

    /// Builds a search draft reflecting the last applied query.
    fn seeded_draft(&self) -> SearchDraft {
        SearchDraft {
            title: self.query.title.clone(),
            author_index: Self::choice_slot(&self.query.author, &self.author_options),
            genre_index: Self::choice_slot(&self.query.genre, &self.genre_options),
            focus: SearchField::Title,
        }
    }

    /// Builds a filter query from the current draft.
    fn draft_query(&self) -> FilterQuery {
        FilterQuery {
            title: self.search_draft.title.clone(),
            author: Self::slot_choice(self.search_draft.author_index, &self.author_options),
            genre: Self::slot_choice(self.search_draft.genre_index, &self.genre_options),
        }
    }

    fn choice_slot(choice: &Choice, options: &[(String, String)]) -> usize {
        match choice {
            Choice::Any => 0,
            Choice::Id(id) => options
                .iter()
                .position(|(option_id, _)| option_id == id)
                .map_or(0, |i| i + 1),
        }
    }

    fn slot_choice(slot: usize, options: &[(String, String)]) -> Choice {
        if slot == 0 {
            Choice::Any
        } else {
            options
                .get(slot - 1)
                .map_or(Choice::Any, |(id, _)| Choice::Id(id.clone()))
        }
    }

    /// Computes a renderable UI view model from current state and terminal size.
    ///
    /// Handles windowing (the revealed slice is usually taller than the
    /// terminal), title match highlighting, the "show more" control state, the
    /// "no results" state, and whichever overlay is open.
    ///
    /// # Windowing
    ///
    /// The window is centered on the selected card, pulled back when near the
    /// start or end so the terminal stays full whenever enough cards exist.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let header = self.compute_header();
        let footer = self.compute_footer();
        let remaining = self.remaining();
        let show_more = ShowMoreInfo {
            remaining,
            enabled: remaining > 0,
        };
        let search_overlay = self.compute_search_overlay();
        let settings_overlay = self.compute_settings_overlay();
        let detail_overlay = self.compute_detail_overlay();

        if self.matches.is_empty() {
            return UIViewModel {
                cards: vec![],
                selected_index: 0,
                header,
                footer,
                show_more,
                empty_state: Some(EmptyState {
                    message: "No results found".to_string(),
                    subtitle: "Your filters returned no books. Try broadening the search."
                        .to_string(),
                }),
                search_overlay,
                settings_overlay,
                detail_overlay,
            };
        }

        let visible = self.visible_books();
        let available_rows = Self::calculate_available_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(visible.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let needle = self.query.title.trim();

        let cards: Vec<CardItem> = visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, book)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_card(book, absolute_idx, needle)
            })
            .collect();

        UIViewModel {
            cards,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header,
            footer,
            show_more,
            empty_state: None,
            search_overlay,
            settings_overlay,
            detail_overlay,
        }
    }

    /// Computes a preview card for a single book within the visible window.
    fn compute_card(&self, book: &Book, absolute_idx: usize, needle: &str) -> CardItem {
        const TITLE_DISPLAY_MAX: usize = 35;

        let title = if book.title.chars().count() > TITLE_DISPLAY_MAX {
            let kept: String = book.title.chars().take(TITLE_DISPLAY_MAX - 3).collect();
            format!("{kept}...")
        } else {
            book.title.clone()
        };

        let author = self
            .catalog
            .author_name(&book.author)
            .unwrap_or("Unknown")
            .to_string();

        CardItem {
            id: book.id.clone(),
            highlight_ranges: title_match_ranges(&title, needle),
            title,
            author,
            is_selected: absolute_idx == self.selected_index,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Bookcase ({} books) ", self.matches.len()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.overlay {
            Overlay::Browse => {
                "j/k: navigate  Enter: details  m: show more  /: search  s: settings  q: quit"
                    .to_string()
            }
            Overlay::Search => {
                "Tab: next field  type / h/l: edit  Enter: apply filters  Esc: cancel".to_string()
            }
            Overlay::Settings => "j/k: choose theme  Enter: apply  Esc: cancel".to_string(),
            Overlay::Detail => "Esc: close".to_string(),
        };

        FooterInfo { keybindings }
    }

    fn compute_search_overlay(&self) -> Option<SearchOverlayInfo> {
        if self.overlay != Overlay::Search {
            return None;
        }

        Some(SearchOverlayInfo {
            title_text: self.search_draft.title.clone(),
            author_label: Self::option_label(
                self.search_draft.author_index,
                &self.author_options,
                "All Authors",
            ),
            genre_label: Self::option_label(
                self.search_draft.genre_index,
                &self.genre_options,
                "All Genres",
            ),
            focus: match self.search_draft.focus {
                SearchField::Title => FieldFocus::Title,
                SearchField::Author => FieldFocus::Author,
                SearchField::Genre => FieldFocus::Genre,
            },
        })
    }

    fn compute_settings_overlay(&self) -> Option<SettingsOverlayInfo> {
        if self.overlay != Overlay::Settings {
            return None;
        }

        Some(SettingsOverlayInfo {
            theme_label: match self.settings_draft {
                ThemeMode::Day => "Day".to_string(),
                ThemeMode::Night => "Night".to_string(),
            },
        })
    }

    fn compute_detail_overlay(&self) -> Option<DetailInfo> {
        if self.overlay != Overlay::Detail {
            return None;
        }

        self.detail.as_ref().map(|book| {
            let author = self.catalog.author_name(&book.author).unwrap_or("Unknown");
            let genres: Vec<&str> = book
                .genres
                .iter()
                .filter_map(|id| self.catalog.genre_name(id))
                .collect();

            DetailInfo {
                title: book.title.clone(),
                subtitle: format!("{author} ({})", book.publication_year()),
                description: book.description.clone(),
                genres: genres.join(", "),
                image: book.image.clone(),
            }
        })
    }

    fn option_label(slot: usize, options: &[(String, String)], any_label: &str) -> String {
        if slot == 0 {
            any_label.to_string()
        } else {
            options
                .get(slot - 1)
                .map_or_else(|| any_label.to_string(), |(_, name)| name.clone())
        }
    }

    /// Rows left for cards after subtracting chrome.
    ///
    /// Chrome: top blank line, header, border, column headers, "show more"
    /// line, border, footer, plus the gap above the "show more" line.
    const fn calculate_available_rows(total_rows: usize) -> usize {
        total_rows.saturating_sub(8)
    }
}

/// Character ranges where `needle` occurs in `text`, case-insensitively.
///
/// Occurrences are non-overlapping and scanned left to right. Ranges are
/// `(start, end)` character indices with exclusive end, matching what the
/// highlight renderer consumes. An empty needle produces no ranges.
fn title_match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    if needle.is_empty() {
        return vec![];
    }

    // Simple one-to-one lowercase mapping keeps display indices aligned.
    let haystack: Vec<char> = text
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();
    let needle_chars: Vec<char> = needle
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();

    if needle_chars.len() > haystack.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut start = 0;

    while start + needle_chars.len() <= haystack.len() {
        if haystack[start..start + needle_chars.len()] == needle_chars[..] {
            ranges.push((start, start + needle_chars.len()));
            start += needle_chars.len();
        } else {
            start += 1;
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;

    fn test_book(n: usize) -> Book {
        Book {
            id: format!("book-{n}"),
            title: format!("Book Number {n}"),
            author: "au1".to_string(),
            image: format!("https://covers.example/{n}.jpg"),
            description: "A description.".to_string(),
            published: Utc.with_ymd_and_hms(1980, 1, 1, 0, 0, 0).unwrap(),
            genres: vec!["g1".to_string()],
        }
    }

    fn test_catalog(book_count: usize, page_size: usize) -> Catalog {
        let books = (0..book_count).map(test_book).collect();
        let authors: HashMap<String, String> =
            [("au1".to_string(), "Author One".to_string())].into();
        let genres: HashMap<String, String> = [("g1".to_string(), "Fantasy".to_string())].into();
        Catalog::new(books, authors, genres, page_size).unwrap()
    }

    fn test_state(book_count: usize, page_size: usize) -> AppState {
        AppState::new(
            test_catalog(book_count, page_size),
            Theme::default(),
            ThemeMode::Day,
        )
    }

    #[test]
    fn initial_state_reveals_the_first_page_of_everything() {
        let state = test_state(25, 20);
        assert_eq!(state.matches.len(), 25);
        assert_eq!(state.visible_books().len(), 20);
        assert_eq!(state.remaining(), 5);
        assert!(state.show_more_enabled());
    }

    #[test]
    fn load_more_appends_the_remaining_chunk_then_disables() {
        // 25 books, page size 20: one load reveals the last 5.
        let mut state = test_state(25, 20);
        state.load_more();
        assert_eq!(state.visible_books().len(), 25);
        assert_eq!(state.remaining(), 0);
        assert!(!state.show_more_enabled());

        // Exhausted: further requests are guarded no-ops.
        state.load_more();
        assert_eq!(state.cursor.page(), 2);
    }

    #[test]
    fn apply_filter_resets_cursor_and_selection() {
        let mut state = test_state(25, 10);
        state.load_more();
        state.selected_index = 14;

        state.apply_filter(FilterQuery {
            title: "Number 1".to_string(),
            ..FilterQuery::default()
        });

        assert_eq!(state.cursor.page(), 1);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn zero_match_filter_shows_empty_state_and_no_cards() {
        let mut state = test_state(5, 10);
        state.apply_filter(FilterQuery {
            title: "no such title".to_string(),
            ..FilterQuery::default()
        });

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.cards.is_empty());
        assert!(vm.empty_state.is_some());
        assert!(!vm.show_more.enabled);
    }

    #[test]
    fn select_book_resolves_from_the_full_catalog() {
        let mut state = test_state(5, 10);
        // Filter the book out of the match set first.
        state.apply_filter(FilterQuery {
            title: "Number 1".to_string(),
            ..FilterQuery::default()
        });

        state.select_book("book-3");
        assert_eq!(state.overlay, Overlay::Detail);
        assert_eq!(state.detail.as_ref().map(|b| b.id.as_str()), Some("book-3"));
    }

    #[test]
    fn selection_miss_is_a_silent_no_op() {
        let mut state = test_state(5, 10);
        state.select_book("nonexistent-id");
        assert_eq!(state.overlay, Overlay::Browse);
        assert!(state.detail.is_none());
    }

    #[test]
    fn selection_wraps_within_the_revealed_slice() {
        let mut state = test_state(5, 10);
        state.move_selection_up();
        assert_eq!(state.selected_index, 4);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn search_draft_seeds_from_the_applied_query() {
        let mut state = test_state(5, 10);
        state.apply_filter(FilterQuery {
            title: "number".to_string(),
            author: Choice::Id("au1".to_string()),
            genre: Choice::Any,
        });

        state.open_search();
        assert_eq!(state.search_draft.title, "number");
        assert_eq!(state.search_draft.author_index, 1);
        assert_eq!(state.search_draft.genre_index, 0);
    }

    #[test]
    fn option_cycling_wraps_through_any() {
        let mut state = test_state(5, 10);
        state.open_search();
        state.focus_next_field();
        assert_eq!(state.search_draft.focus, SearchField::Author);

        // One author option: any -> au1 -> any.
        state.cycle_option(true);
        assert_eq!(state.search_draft.author_index, 1);
        state.cycle_option(true);
        assert_eq!(state.search_draft.author_index, 0);
        state.cycle_option(false);
        assert_eq!(state.search_draft.author_index, 1);
    }

    #[test]
    fn submit_search_applies_the_drafted_query() {
        let mut state = test_state(12, 10);
        state.open_search();
        for c in "Number 3".chars() {
            state.push_title_char(c);
        }

        state.submit_search();
        assert_eq!(state.overlay, Overlay::Browse);
        assert_eq!(state.matches.len(), 1);
        assert_eq!(state.matches[0].id, "book-3");
    }

    #[test]
    fn cancel_search_keeps_the_previous_matches() {
        let mut state = test_state(12, 10);
        state.open_search();
        state.push_title_char('x');
        state.cancel_search();

        assert_eq!(state.overlay, Overlay::Browse);
        assert_eq!(state.matches.len(), 12);
        // Reopening seeds from the applied query, not the discarded draft.
        state.open_search();
        assert_eq!(state.search_draft.title, "");
    }

    #[test]
    fn settings_submit_swaps_the_palette() {
        let mut state = test_state(3, 10);
        state.open_settings();
        state.cycle_settings_choice();
        state.submit_settings();

        assert_eq!(state.theme_mode, ThemeMode::Night);
        assert_eq!(state.theme.name, "night");
        assert_eq!(state.overlay, Overlay::Browse);
    }

    #[test]
    fn settings_cancel_leaves_the_theme_alone() {
        let mut state = test_state(3, 10);
        state.open_settings();
        state.cycle_settings_choice();
        state.cancel_settings();

        assert_eq!(state.theme_mode, ThemeMode::Day);
        assert_eq!(state.theme.name, "day");
    }

    #[test]
    fn viewmodel_windows_around_the_selection() {
        let mut state = test_state(30, 30);
        state.selected_index = 20;

        // 24 rows leaves 16 card rows; the window centers on the selection.
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.cards.len(), 16);
        assert!(vm.cards[vm.selected_index].is_selected);
        assert_eq!(vm.cards[vm.selected_index].id, "book-20");
    }

    #[test]
    fn viewmodel_carries_show_more_state() {
        let state = test_state(25, 20);
        let vm = state.compute_viewmodel(40, 80);
        assert_eq!(vm.show_more.remaining, 5);
        assert!(vm.show_more.enabled);
    }

    #[test]
    fn detail_overlay_resolves_names_and_year() {
        let mut state = test_state(3, 10);
        state.select_book("book-1");

        let vm = state.compute_viewmodel(24, 80);
        let detail = vm.detail_overlay.unwrap();
        assert_eq!(detail.title, "Book Number 1");
        assert_eq!(detail.subtitle, "Author One (1980)");
        assert_eq!(detail.genres, "Fantasy");
    }

    #[test]
    fn title_match_ranges_finds_case_insensitive_occurrences() {
        assert_eq!(title_match_ranges("Dune Messiah", "dune"), vec![(0, 4)]);
        assert_eq!(title_match_ranges("banana", "an"), vec![(1, 3), (3, 5)]);
        assert_eq!(title_match_ranges("The Hobbit", "dune"), vec![]);
        assert_eq!(title_match_ranges("anything", ""), vec![]);
    }

    #[test]
    fn cards_carry_highlight_ranges_for_the_active_title_filter() {
        let mut state = test_state(12, 10);
        state.apply_filter(FilterQuery {
            title: "number 1".to_string(),
            ..FilterQuery::default()
        });

        let vm = state.compute_viewmodel(24, 80);
        // "Book Number 1", "Book Number 10", "Book Number 11"
        assert_eq!(vm.cards.len(), 3);
        for card in &vm.cards {
            assert_eq!(card.highlight_ranges, vec![(5, 13)]);
        }
    }
}
