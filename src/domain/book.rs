//! Book domain model and operations.
//!
//! This module defines the core `Book` type representing a single catalog entry.
//! Books are immutable once loaded: they are deserialized from the catalog data
//! source at startup and only ever read afterwards. Author and genre fields hold
//! ids that resolve against the catalog's display-name maps.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A single book in the catalog.
///
/// Carries everything a preview card and the detail overlay need: identity,
/// display text, the cover image URL, and the author/genre references. The
/// `author` field and every entry of `genres` are ids into the catalog's
/// author and genre maps; validation at load time guarantees they resolve.
///
/// # Fields
///
/// - `id`: Unique identifier within the catalog
/// - `title`: Display title
/// - `author`: Author id reference
/// - `image`: Cover image URL (shown as a link in the detail overlay)
/// - `description`: Back-cover blurb for the detail overlay
/// - `published`: Publication timestamp; only the year is displayed
/// - `genres`: Genre id references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub description: String,
    pub published: DateTime<Utc>,
    pub genres: Vec<String>,
}

impl Book {
    /// Returns the publication year for display in the detail subtitle.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookcase::domain::Book;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let book = Book {
    ///     id: "dune-messiah".to_string(),
    ///     title: "Dune Messiah".to_string(),
    ///     author: "frank-herbert".to_string(),
    ///     image: "https://covers.example/dune-messiah.jpg".to_string(),
    ///     description: "Twelve years after his victory...".to_string(),
    ///     published: Utc.with_ymd_and_hms(1969, 10, 15, 0, 0, 0).unwrap(),
    ///     genres: vec!["science-fiction".to_string()],
    /// };
    /// assert_eq!(book.publication_year(), 1969);
    /// ```
    #[must_use]
    pub fn publication_year(&self) -> i32 {
        self.published.year()
    }
}
