//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! translating it into state changes and action sequences. It is the primary
//! control flow coordinator: every externally triggered operation (filter
//! submission, "show more", card selection, theme change) passes through
//! [`handle_event`].
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The terminal host maps key presses to [`Event`]s
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. A render flag and actions are returned for the host to execute
//!
//! Events run as discrete, non-overlapping handlers: each is processed to
//! completion before the next is read, so derived state (matches, cursor,
//! selection) is never mutated concurrently.
//!
//! # Event Types
//!
//! - **Navigation**: `CardDown`, `CardUp`, `SelectCard`, `LoadMore`
//! - **Search form**: `OpenSearch`, `NextField`, `Char`, `Backspace`,
//!   `CycleForward`, `CycleBack`, `SubmitSearch`, `CancelSearch`
//! - **Settings form**: `OpenSettings`, `CycleTheme`, `SubmitSettings`,
//!   `CancelSettings`
//! - **Detail**: `CloseDetail`
//! - **Lifecycle**: `Quit`

use crate::app::modes::{Overlay, SearchField};
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes these sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves the card selection down by one position (wraps to top).
    CardDown,
    /// Moves the card selection up by one position (wraps to bottom).
    CardUp,
    /// Opens the detail overlay for the highlighted card.
    SelectCard,
    /// Reveals the next page of the match set.
    ///
    /// Only effective while the "show more" control is enabled; otherwise a
    /// guarded no-op.
    LoadMore,

    /// Opens the search overlay, seeding the form from the applied query.
    OpenSearch,
    /// Applies the drafted filter and closes the search overlay.
    SubmitSearch,
    /// Closes the search overlay, discarding the draft.
    CancelSearch,
    /// Moves search form focus to the next field.
    NextField,
    /// Appends a character to the title field.
    Char(char),
    /// Removes the last character from the title field.
    Backspace,
    /// Steps the focused select field forward through its options.
    CycleForward,
    /// Steps the focused select field backward through its options.
    CycleBack,

    /// Opens the settings overlay, seeding the form from the active theme.
    OpenSettings,
    /// Applies the drafted theme and closes the settings overlay.
    SubmitSettings,
    /// Closes the settings overlay, discarding the draft.
    CancelSettings,
    /// Toggles the drafted theme choice between day and night.
    CycleTheme,

    /// Closes the detail overlay.
    CloseDetail,

    /// Leaves the application.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler coordinating all state transitions. It
/// pattern-matches on event types, calls state mutation methods, and collects
/// actions to be executed by the terminal host.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`: the flag is `true` when the UI changed and a
/// re-render is needed; the actions are host side effects to run in order.
///
/// # Errors
///
/// Currently infallible over well-formed in-memory data; the `Result` return
/// keeps the signature stable for the host.
///
/// # Example
///
/// ```
/// use bookcase::app::{handle_event, AppState, Event};
/// use bookcase::app::modes::ThemeMode;
/// use bookcase::catalog::{CatalogSource, JsonCatalog};
/// use bookcase::ui::Theme;
///
/// let catalog = JsonCatalog::builtin().load()?;
/// let mut state = AppState::new(catalog, Theme::default(), ThemeMode::Day);
/// let (should_render, actions) = handle_event(&mut state, &Event::CardDown)?;
/// assert!(should_render);
/// assert!(actions.is_empty());
/// # Ok::<(), bookcase::domain::BookcaseError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CardDown => {
            if state.overlay != Overlay::Browse {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::CardUp => {
            if state.overlay != Overlay::Browse {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::SelectCard => {
            if state.overlay != Overlay::Browse {
                return Ok((false, vec![]));
            }

            let Some(id) = state.selected_book().map(|book| book.id.clone()) else {
                tracing::debug!("no card selected");
                return Ok((false, vec![]));
            };

            state.select_book(&id);
            Ok((true, vec![]))
        }
        Event::LoadMore => {
            if state.overlay != Overlay::Browse || !state.show_more_enabled() {
                tracing::debug!("show more disabled, ignoring");
                return Ok((false, vec![]));
            }
            state.load_more();
            Ok((true, vec![]))
        }
        Event::OpenSearch => {
            if state.overlay != Overlay::Browse {
                return Ok((false, vec![]));
            }
            tracing::debug!("opening search overlay");
            state.open_search();
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            if state.overlay != Overlay::Search {
                return Ok((false, vec![]));
            }
            tracing::debug!(title = %state.search_draft.title, "submitting search");
            state.submit_search();
            Ok((true, vec![]))
        }
        Event::CancelSearch => {
            if state.overlay != Overlay::Search {
                return Ok((false, vec![]));
            }
            state.cancel_search();
            Ok((true, vec![]))
        }
        Event::NextField => {
            if state.overlay != Overlay::Search {
                return Ok((false, vec![]));
            }
            state.focus_next_field();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.overlay != Overlay::Search || state.search_draft.focus != SearchField::Title {
                return Ok((false, vec![]));
            }
            state.push_title_char(*c);
            tracing::trace!(title = %state.search_draft.title, "title draft updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.overlay != Overlay::Search || state.search_draft.focus != SearchField::Title {
                return Ok((false, vec![]));
            }
            state.pop_title_char();
            Ok((true, vec![]))
        }
        Event::CycleForward => {
            if state.overlay != Overlay::Search {
                return Ok((false, vec![]));
            }
            state.cycle_option(true);
            Ok((true, vec![]))
        }
        Event::CycleBack => {
            if state.overlay != Overlay::Search {
                return Ok((false, vec![]));
            }
            state.cycle_option(false);
            Ok((true, vec![]))
        }
        Event::OpenSettings => {
            if state.overlay != Overlay::Browse {
                return Ok((false, vec![]));
            }
            tracing::debug!("opening settings overlay");
            state.open_settings();
            Ok((true, vec![]))
        }
        Event::SubmitSettings => {
            if state.overlay != Overlay::Settings {
                return Ok((false, vec![]));
            }
            tracing::debug!(choice = state.settings_draft.as_str(), "applying settings");
            state.submit_settings();
            Ok((true, vec![]))
        }
        Event::CancelSettings => {
            if state.overlay != Overlay::Settings {
                return Ok((false, vec![]));
            }
            state.cancel_settings();
            Ok((true, vec![]))
        }
        Event::CycleTheme => {
            if state.overlay != Overlay::Settings {
                return Ok((false, vec![]));
            }
            state.cycle_settings_choice();
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            if state.overlay != Overlay::Detail {
                return Ok((false, vec![]));
            }
            state.close_detail();
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::ThemeMode;
    use crate::catalog::Catalog;
    use crate::domain::Book;
    use crate::ui::theme::Theme;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;

    fn state_with(book_count: usize, page_size: usize) -> AppState {
        let books: Vec<Book> = (0..book_count)
            .map(|n| Book {
                id: format!("book-{n}"),
                title: format!("Book Number {n}"),
                author: "au1".to_string(),
                image: format!("https://covers.example/{n}.jpg"),
                description: "A description.".to_string(),
                published: Utc.with_ymd_and_hms(1980, 1, 1, 0, 0, 0).unwrap(),
                genres: vec!["g1".to_string()],
            })
            .collect();
        let authors: HashMap<String, String> =
            [("au1".to_string(), "Author One".to_string())].into();
        let genres: HashMap<String, String> = [("g1".to_string(), "Fantasy".to_string())].into();
        let catalog = Catalog::new(books, authors, genres, page_size).unwrap();
        AppState::new(catalog, Theme::default(), ThemeMode::Day)
    }

    #[test]
    fn quit_emits_the_quit_action_without_rendering() {
        let mut state = state_with(3, 10);
        let (should_render, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert!(!should_render);
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn load_more_is_ignored_once_exhausted() {
        let mut state = state_with(25, 20);

        let (rendered, _) = handle_event(&mut state, &Event::LoadMore).unwrap();
        assert!(rendered);
        assert_eq!(state.visible_books().len(), 25);

        let (rendered, _) = handle_event(&mut state, &Event::LoadMore).unwrap();
        assert!(!rendered);
        assert_eq!(state.cursor.page(), 2);
    }

    #[test]
    fn characters_only_reach_the_title_field_in_search_mode() {
        let mut state = state_with(3, 10);

        // Browse mode: character input is ignored.
        let (rendered, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!rendered);

        handle_event(&mut state, &Event::OpenSearch).unwrap();
        handle_event(&mut state, &Event::Char('x')).unwrap();
        assert_eq!(state.search_draft.title, "x");

        // Select field focus: character input is ignored again.
        handle_event(&mut state, &Event::NextField).unwrap();
        let (rendered, _) = handle_event(&mut state, &Event::Char('y')).unwrap();
        assert!(!rendered);
        assert_eq!(state.search_draft.title, "x");
    }

    #[test]
    fn full_search_round_trip_filters_and_closes() {
        let mut state = state_with(12, 10);

        handle_event(&mut state, &Event::OpenSearch).unwrap();
        for c in "Number 3".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        handle_event(&mut state, &Event::SubmitSearch).unwrap();

        assert_eq!(state.overlay, Overlay::Browse);
        assert_eq!(state.matches.len(), 1);
        assert_eq!(state.cursor.page(), 1);
    }

    #[test]
    fn select_card_opens_detail_and_close_detail_returns() {
        let mut state = state_with(3, 10);

        handle_event(&mut state, &Event::SelectCard).unwrap();
        assert_eq!(state.overlay, Overlay::Detail);
        assert!(state.detail.is_some());

        handle_event(&mut state, &Event::CloseDetail).unwrap();
        assert_eq!(state.overlay, Overlay::Browse);
        assert!(state.detail.is_none());
    }

    #[test]
    fn select_card_with_no_visible_cards_is_ignored() {
        let mut state = state_with(3, 10);
        state.apply_filter(crate::app::FilterQuery {
            title: "nothing matches this".to_string(),
            ..Default::default()
        });

        let (rendered, actions) = handle_event(&mut state, &Event::SelectCard).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.overlay, Overlay::Browse);
    }

    #[test]
    fn settings_round_trip_switches_the_theme() {
        let mut state = state_with(3, 10);

        handle_event(&mut state, &Event::OpenSettings).unwrap();
        handle_event(&mut state, &Event::CycleTheme).unwrap();
        handle_event(&mut state, &Event::SubmitSettings).unwrap();

        assert_eq!(state.theme_mode, ThemeMode::Night);
        assert_eq!(state.overlay, Overlay::Browse);
    }

    #[test]
    fn navigation_is_suppressed_while_an_overlay_is_open() {
        let mut state = state_with(3, 10);
        handle_event(&mut state, &Event::OpenSearch).unwrap();

        let (rendered, _) = handle_event(&mut state, &Event::CardDown).unwrap();
        assert!(!rendered);
        assert_eq!(state.selected_index, 0);
    }
}
