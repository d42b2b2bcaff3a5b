//! The immutable in-memory catalog.
//!
//! This module defines [`Catalog`], the read-only dataset the rest of the
//! application browses: the ordered book list, the author and genre display-name
//! maps, and the page-size constant used by pagination. A catalog is constructed
//! once at startup by a [`CatalogSource`](crate::catalog::CatalogSource) and never
//! mutated afterwards.
//!
//! # Validation
//!
//! Construction validates referential integrity up front so that every runtime
//! lookup is total: duplicate book ids, author ids or genre ids that do not
//! resolve, and a zero page size are all rejected with
//! [`BookcaseError::Catalog`](crate::domain::BookcaseError).

use crate::domain::error::{BookcaseError, Result};
use crate::domain::Book;
use std::collections::{HashMap, HashSet};

/// The immutable source dataset: books, author/genre names, page size.
///
/// Read-only for the rest of the system. Match sets produced by filtering are
/// order-preserving subsets of [`Catalog::books`]; card selection resolves ids
/// through [`Catalog::find_book`].
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Ordered book list. Filtering preserves this order.
    books: Vec<Book>,

    /// Author id to display name.
    authors: HashMap<String, String>,

    /// Genre id to display name.
    genres: HashMap<String, String>,

    /// Number of preview cards revealed per "show more" step.
    page_size: usize,
}

impl Catalog {
    /// Builds a catalog after validating referential integrity.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::Catalog`] if:
    /// - `page_size` is zero
    /// - two books share an id
    /// - a book references an author id absent from `authors`
    /// - a book references a genre id absent from `genres`
    pub fn new(
        books: Vec<Book>,
        authors: HashMap<String, String>,
        genres: HashMap<String, String>,
        page_size: usize,
    ) -> Result<Self> {
        if page_size == 0 {
            return Err(BookcaseError::Catalog("page size must be at least 1".to_string()));
        }

        let mut seen_ids = HashSet::new();
        for book in &books {
            if !seen_ids.insert(book.id.as_str()) {
                return Err(BookcaseError::Catalog(format!(
                    "duplicate book id: {}",
                    book.id
                )));
            }
            if !authors.contains_key(&book.author) {
                return Err(BookcaseError::Catalog(format!(
                    "book {} references unknown author: {}",
                    book.id, book.author
                )));
            }
            for genre in &book.genres {
                if !genres.contains_key(genre) {
                    return Err(BookcaseError::Catalog(format!(
                        "book {} references unknown genre: {}",
                        book.id, genre
                    )));
                }
            }
        }

        tracing::debug!(
            book_count = books.len(),
            author_count = authors.len(),
            genre_count = genres.len(),
            page_size = page_size,
            "catalog validated"
        );

        Ok(Self {
            books,
            authors,
            genres,
            page_size,
        })
    }

    /// The full ordered book list.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of preview cards per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Looks up a book by id in the full catalog.
    ///
    /// Selection always resolves through the full catalog, not the current
    /// match set, so a card stays selectable after the filter that revealed
    /// it has been replaced.
    #[must_use]
    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Resolves an author id to its display name.
    #[must_use]
    pub fn author_name(&self, id: &str) -> Option<&str> {
        self.authors.get(id).map(String::as_str)
    }

    /// Resolves a genre id to its display name.
    #[must_use]
    pub fn genre_name(&self, id: &str) -> Option<&str> {
        self.genres.get(id).map(String::as_str)
    }

    /// Author `(id, name)` options sorted by display name.
    ///
    /// Used to populate the author select in the search overlay; the "any"
    /// entry is prepended by the form, not stored here.
    #[must_use]
    pub fn author_options(&self) -> Vec<(String, String)> {
        Self::sorted_options(&self.authors)
    }

    /// Genre `(id, name)` options sorted by display name.
    #[must_use]
    pub fn genre_options(&self) -> Vec<(String, String)> {
        Self::sorted_options(&self.genres)
    }

    fn sorted_options(map: &HashMap<String, String>) -> Vec<(String, String)> {
        let mut options: Vec<(String, String)> = map
            .iter()
            .map(|(id, name)| (id.clone(), name.clone()))
            .collect();
        options.sort_by(|a, b| a.1.cmp(&b.1));
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn book(id: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: format!("Title of {id}"),
            author: author.to_string(),
            image: format!("https://covers.example/{id}.jpg"),
            description: "A description.".to_string(),
            published: Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap(),
            genres: genres.iter().map(ToString::to_string).collect(),
        }
    }

    fn names(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect()
    }

    #[test]
    fn valid_catalog_builds() {
        let catalog = Catalog::new(
            vec![book("a", "au1", &["g1"]), book("b", "au2", &["g1", "g2"])],
            names(&[("au1", "Author One"), ("au2", "Author Two")]),
            names(&[("g1", "Fantasy"), ("g2", "Horror")]),
            12,
        )
        .unwrap();

        assert_eq!(catalog.books().len(), 2);
        assert_eq!(catalog.page_size(), 12);
        assert_eq!(catalog.author_name("au2"), Some("Author Two"));
        assert_eq!(catalog.genre_name("g1"), Some("Fantasy"));
    }

    #[test]
    fn rejects_duplicate_book_ids() {
        let err = Catalog::new(
            vec![book("a", "au1", &[]), book("a", "au1", &[])],
            names(&[("au1", "Author One")]),
            HashMap::new(),
            12,
        )
        .unwrap_err();

        assert!(err.to_string().contains("duplicate book id"));
    }

    #[test]
    fn rejects_unknown_author_reference() {
        let err = Catalog::new(
            vec![book("a", "missing", &[])],
            names(&[("au1", "Author One")]),
            HashMap::new(),
            12,
        )
        .unwrap_err();

        assert!(err.to_string().contains("unknown author"));
    }

    #[test]
    fn rejects_unknown_genre_reference() {
        let err = Catalog::new(
            vec![book("a", "au1", &["nope"])],
            names(&[("au1", "Author One")]),
            names(&[("g1", "Fantasy")]),
            12,
        )
        .unwrap_err();

        assert!(err.to_string().contains("unknown genre"));
    }

    #[test]
    fn rejects_zero_page_size() {
        let err = Catalog::new(vec![], HashMap::new(), HashMap::new(), 0).unwrap_err();
        assert!(err.to_string().contains("page size"));
    }

    #[test]
    fn options_are_sorted_by_display_name() {
        let catalog = Catalog::new(
            vec![],
            names(&[("z", "Aldous Huxley"), ("a", "Ursula K. Le Guin")]),
            HashMap::new(),
            12,
        )
        .unwrap();

        let options = catalog.author_options();
        assert_eq!(options[0].1, "Aldous Huxley");
        assert_eq!(options[1].1, "Ursula K. Le Guin");
    }

    #[test]
    fn find_book_misses_return_none() {
        let catalog = Catalog::new(
            vec![book("a", "au1", &[])],
            names(&[("au1", "Author One")]),
            HashMap::new(),
            12,
        )
        .unwrap();

        assert!(catalog.find_book("a").is_some());
        assert!(catalog.find_book("nonexistent-id").is_none());
    }
}
