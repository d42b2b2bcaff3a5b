//! Application layer coordinating state, events, and actions.
//!
//! This module defines the view-state controller: the layer between the
//! terminal host (main.rs) and the catalog/ui layers. It implements the
//! event-driven architecture that keeps the match set, page cursor, and
//! rendered view consistent.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key Input → Events → Event Handler → State Mutations → Render Flag + Actions
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Filter query types and the pure filter evaluator
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Overlay and theme mode state machine types
//! - [`pager`]: Pagination cursor over the current match set
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```
//! use bookcase::app::{handle_event, AppState, Event};
//! use bookcase::app::modes::ThemeMode;
//! use bookcase::catalog::{CatalogSource, JsonCatalog};
//! use bookcase::ui::Theme;
//!
//! let catalog = JsonCatalog::builtin().load()?;
//! let mut state = AppState::new(catalog, Theme::default(), ThemeMode::Day);
//! let (should_render, _actions) = handle_event(&mut state, &Event::CardDown)?;
//! # Ok::<(), bookcase::domain::BookcaseError>(())
//! ```

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod pager;
pub mod state;

pub use actions::Action;
pub use filter::{evaluate, Choice, FilterQuery};
pub use handler::{handle_event, Event};
pub use modes::{Overlay, SearchField, ThemeMode};
pub use pager::PageCursor;
pub use state::{AppState, SearchDraft};
