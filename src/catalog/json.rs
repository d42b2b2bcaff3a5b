//! JSON catalog source.
//!
//! This module loads the catalog dataset from JSON: either the dataset compiled
//! into the binary (the default) or a user-supplied file with the same shape.
//! Parsing is followed by the referential validation in
//! [`Catalog::new`](crate::catalog::Catalog::new), so a malformed dataset fails
//! at startup rather than mid-session.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "page_size": 12,
//!   "authors": { "frank-herbert": "Frank Herbert" },
//!   "genres": { "science-fiction": "Science Fiction" },
//!   "books": [
//!     {
//!       "id": "dune-messiah",
//!       "title": "Dune Messiah",
//!       "author": "frank-herbert",
//!       "image": "https://covers.example/dune-messiah.jpg",
//!       "description": "Twelve years after his victory...",
//!       "published": "1969-10-15T00:00:00Z",
//!       "genres": ["science-fiction"]
//!     }
//!   ]
//! }
//! ```

use crate::catalog::source::CatalogSource;
use crate::catalog::store::Catalog;
use crate::domain::error::{BookcaseError, Result};
use crate::domain::Book;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Dataset shipped with the binary.
const BUILTIN_DATASET: &str = include_str!("../../data/catalog.json");

/// JSON catalog container format.
///
/// This is the top-level structure parsed from disk or from the embedded
/// dataset. The version field exists for future format migrations.
#[derive(Debug, Clone, Deserialize)]
struct CatalogData {
    /// Version of the catalog format.
    version: u32,

    /// Number of preview cards revealed per page.
    page_size: usize,

    /// Author id to display name.
    #[serde(default)]
    authors: HashMap<String, String>,

    /// Genre id to display name.
    #[serde(default)]
    genres: HashMap<String, String>,

    /// Ordered book list.
    #[serde(default)]
    books: Vec<Book>,
}

/// JSON-backed catalog source.
///
/// Reads either the embedded dataset or a file at a configured path. The
/// loaded catalog is immutable; this source performs no writes.
pub struct JsonCatalog {
    /// Path to a catalog file, or `None` for the embedded dataset.
    path: Option<PathBuf>,
}

impl JsonCatalog {
    /// A source for the dataset compiled into the binary.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { path: None }
    }

    /// A source reading the given JSON file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bookcase::catalog::{CatalogSource, JsonCatalog};
    /// use std::path::PathBuf;
    ///
    /// let catalog = JsonCatalog::from_file(PathBuf::from("/tmp/catalog.json")).load()?;
    /// # Ok::<(), bookcase::domain::BookcaseError>(())
    /// ```
    #[must_use]
    pub const fn from_file(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    fn parse(contents: &str) -> Result<Catalog> {
        let data: CatalogData = serde_json::from_str(contents)
            .map_err(|e| BookcaseError::Catalog(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            books = data.books.len(),
            "parsed catalog data"
        );

        Catalog::new(data.books, data.authors, data.genres, data.page_size)
    }
}

impl CatalogSource for JsonCatalog {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("load_catalog", path = ?self.path).entered();

        match &self.path {
            Some(path) => {
                tracing::debug!("loading catalog from file");
                let contents = std::fs::read_to_string(path)?;
                Self::parse(&contents)
            }
            None => {
                tracing::debug!("loading embedded catalog");
                Self::parse(BUILTIN_DATASET)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_dataset_loads_and_validates() {
        let catalog = JsonCatalog::builtin().load().unwrap();

        assert!(!catalog.books().is_empty());
        assert!(catalog.page_size() >= 1);

        // Every reference in the shipped dataset must resolve.
        for book in catalog.books() {
            assert!(catalog.author_name(&book.author).is_some());
            for genre in &book.genres {
                assert!(catalog.genre_name(genre).is_some());
            }
        }
    }

    #[test]
    fn loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "version": 1,
                "page_size": 2,
                "authors": {{ "au1": "Author One" }},
                "genres": {{ "g1": "Fantasy" }},
                "books": [
                    {{
                        "id": "a",
                        "title": "A Book",
                        "author": "au1",
                        "image": "https://covers.example/a.jpg",
                        "description": "Short.",
                        "published": "1990-01-01T00:00:00Z",
                        "genres": ["g1"]
                    }}
                ]
            }}"#
        )
        .unwrap();

        let catalog = JsonCatalog::from_file(file.path().to_path_buf()).load().unwrap();
        assert_eq!(catalog.books().len(), 1);
        assert_eq!(catalog.page_size(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = JsonCatalog::from_file(PathBuf::from("/nonexistent/catalog.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, BookcaseError::Io(_)));
    }

    #[test]
    fn invalid_json_is_a_catalog_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = JsonCatalog::from_file(file.path().to_path_buf()).load().unwrap_err();
        assert!(matches!(err, BookcaseError::Catalog(_)));
    }
}
