//! Bookcase: a terminal book catalog browser.
//!
//! Bookcase renders a paginated list of book preview cards over an immutable
//! in-memory catalog and provides:
//! - Filtering by title substring, author, and genre via a search overlay
//! - "Show more" pagination that reveals the match set page by page
//! - A detail overlay for a selected book (author, year, description, genres)
//! - Day/night themes with a one-time startup read of the terminal background
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Host (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Filtering
//! │  - Pagination cursor                                │  ← Pagination
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │
//! │ (ui/)         │   │ (catalog/)    │
//! │ - Rendering   │   │ - JSON load   │
//! │ - Theming     │   │ - Validation  │
//! │ - Components  │   │ - Source API  │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data paths, environment (infrastructure/)        │
//! │  - Error types (domain/error)                       │
//! │  - Book model (domain/book)                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Immutable dataset and its loaders
//! - [`domain`]: Core domain types (Book, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths, environment)
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: File-backed tracing setup
//!
//! # Configuration
//!
//! The binary is configured via `key=value` command-line arguments:
//!
//! ```text
//! bookcase catalog=~/books.json theme=night log_level=debug
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Parse configuration from the command line
//!    - Initialize tracing (optional, file-backed)
//!    - Load and validate the catalog, load the theme
//!    - Enter the raw-mode alternate screen
//! 2. **Event Loop**:
//!    - Map key presses to events, one at a time
//!    - [`handle_event`] mutates state and reports whether to re-render
//! 3. **Rendering**:
//!    - Compute a view model from state
//!    - Render components (header, cards, show-more, footer, overlays)
//!
//! # Example
//!
//! ```
//! use bookcase::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config)?;
//!
//! let (should_render, actions) = handle_event(&mut state, &Event::CardDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), bookcase::domain::BookcaseError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Wholesale Match Sets
//!
//! Filter submission recomputes the match set from the full catalog each
//! time. The catalog is small and in-memory, so linear evaluation keeps the
//! controller trivially consistent: replacing the match set always resets
//! pagination and selection together.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - The controller is testable without a live terminal
//! - Pre-computes display work (name resolution, match highlighting)

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FilterQuery, Overlay, ThemeMode};
pub use catalog::{Catalog, CatalogSource, JsonCatalog};
pub use domain::{Book, BookcaseError, Result};
pub use ui::Theme;

use std::path::PathBuf;

/// Application configuration parsed from command-line arguments.
///
/// Every option is optional; the defaults browse the embedded catalog with
/// the theme picked from the terminal environment.
///
/// # Example
///
/// ```text
/// bookcase catalog=~/books.json theme=night theme_file=/path/to/theme.toml
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to a catalog JSON file.
    ///
    /// Uses the embedded dataset when unset. Tilde paths are expanded.
    pub catalog_file: Option<String>,

    /// Built-in theme name to use: `day` or `night`.
    ///
    /// When unset, the initial mode comes from a one-time read of the
    /// terminal background convention, defaulting to day.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Log level directive for the file-backed subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub log_level: Option<String>,
}

impl Config {
    /// Parses configuration from `key=value` command-line arguments.
    ///
    /// Recognized keys: `catalog`, `theme`, `theme_file`, `log_level`.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::Config`] for arguments without a `=` or with
    /// an unrecognized key.
    ///
    /// # Example
    ///
    /// ```
    /// use bookcase::Config;
    ///
    /// let config = Config::from_args(["theme=night".to_string()]).unwrap();
    /// assert_eq!(config.theme_name.as_deref(), Some("night"));
    /// assert!(config.catalog_file.is_none());
    /// ```
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();

        for arg in args {
            let Some((key, value)) = arg.split_once('=') else {
                return Err(BookcaseError::Config(format!(
                    "expected key=value, got: {arg}"
                )));
            };

            match key {
                "catalog" => config.catalog_file = Some(value.to_string()),
                "theme" => config.theme_name = Some(value.to_string()),
                "theme_file" => config.theme_file = Some(value.to_string()),
                "log_level" => config.log_level = Some(value.to_string()),
                _ => {
                    return Err(BookcaseError::Config(format!("unknown option: {key}")));
                }
            }
        }

        Ok(config)
    }
}

/// Initializes the application with configuration.
///
/// Loads and validates the catalog (embedded or from `catalog_file`),
/// resolves the theme (file, name, or environment detection), and builds the
/// initial [`AppState`] with the full catalog revealed one page at a time.
///
/// # Theme Resolution
///
/// 1. `theme_file` if set (falls back to the default palette on load errors)
/// 2. `theme` name if set and recognized
/// 3. A one-time read of the terminal background, defaulting to day
///
/// The environment read happens only here; a terminal background change
/// mid-session is never picked up.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read, parsed, or validated.
///
/// # Example
///
/// ```
/// use bookcase::{initialize, Config};
///
/// let state = initialize(&Config::default())?;
/// assert!(!state.catalog.books().is_empty());
/// # Ok::<(), bookcase::domain::BookcaseError>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing bookcase");

    let theme_mode = match config.theme_name.as_deref() {
        Some(name) => ThemeMode::from_name(name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %name, "unknown theme name, detecting from environment");
            detect_theme_mode()
        }),
        None => detect_theme_mode(),
    };

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            Theme::from_name(theme_mode.as_str()).unwrap_or_else(|| {
                tracing::debug!(theme = theme_mode.as_str(), "built-in theme missing, using default");
                Theme::default()
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    let catalog = match &config.catalog_file {
        Some(path) => {
            let path = PathBuf::from(infrastructure::expand_tilde(path));
            JsonCatalog::from_file(path).load()?
        }
        None => JsonCatalog::builtin().load()?,
    };

    tracing::debug!(
        book_count = catalog.books().len(),
        page_size = catalog.page_size(),
        theme = theme_mode.as_str(),
        "bookcase initialized"
    );

    Ok(AppState::new(catalog, theme, theme_mode))
}

/// Initial theme mode from a one-time terminal background read.
fn detect_theme_mode() -> ThemeMode {
    match infrastructure::prefers_dark() {
        Some(true) => ThemeMode::Night,
        _ => ThemeMode::Day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_args_parses_known_keys() {
        let config = Config::from_args([
            "catalog=/tmp/books.json".to_string(),
            "theme=night".to_string(),
            "log_level=debug".to_string(),
        ])
        .unwrap();

        assert_eq!(config.catalog_file.as_deref(), Some("/tmp/books.json"));
        assert_eq!(config.theme_name.as_deref(), Some("night"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.theme_file.is_none());
    }

    #[test]
    fn from_args_rejects_unknown_keys() {
        let err = Config::from_args(["pages=3".to_string()]).unwrap_err();
        assert!(err.to_string().contains("unknown option"));
    }

    #[test]
    fn from_args_rejects_bare_tokens() {
        let err = Config::from_args(["night".to_string()]).unwrap_err();
        assert!(err.to_string().contains("key=value"));
    }

    #[test]
    fn initialize_loads_the_embedded_catalog() {
        let state = initialize(&Config {
            theme_name: Some("night".to_string()),
            ..Config::default()
        })
        .unwrap();

        assert!(!state.catalog.books().is_empty());
        assert_eq!(state.theme_mode, ThemeMode::Night);
        assert_eq!(state.matches.len(), state.catalog.books().len());
    }

    #[test]
    fn initialize_fails_on_a_missing_catalog_file() {
        let err = initialize(&Config {
            catalog_file: Some("/nonexistent/books.json".to_string()),
            ..Config::default()
        })
        .unwrap_err();

        assert!(matches!(err, BookcaseError::Io(_)));
    }
}
