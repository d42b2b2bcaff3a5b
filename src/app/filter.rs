//! Filter query types and the pure filter evaluator.
//!
//! This module defines [`FilterQuery`], the three-field search criteria object,
//! and [`evaluate`], the pure function that applies a query to the full catalog
//! and produces an ordered match set. Evaluation is deterministic, has no side
//! effects, and preserves catalog order, so the match set is always an
//! order-preserving subset of the source list.

use crate::domain::Book;

/// A select-field filter value: either "any" or a specific id.
///
/// Used for both the author and genre filters. `Any` matches every book,
/// mirroring the "All Authors" / "All Genres" default options of the search
/// form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice {
    /// No restriction.
    #[default]
    Any,

    /// Restrict to the given author or genre id.
    Id(String),
}

impl Choice {
    /// Whether this choice permits the given id.
    #[must_use]
    pub fn allows(&self, id: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Id(wanted) => wanted == id,
        }
    }
}

/// The three-field search criteria: title substring, author, genre.
///
/// The default query matches everything, which is also the implicit query
/// before the first search submission. Title matching is case-insensitive
/// substring containment after trimming; a whitespace-only title imposes no
/// restriction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    /// Case-insensitive title substring; empty or whitespace means "any".
    pub title: String,

    /// Author restriction.
    pub author: Choice,

    /// Genre restriction.
    pub genre: Choice,
}

impl FilterQuery {
    /// Whether a single book satisfies all three predicate clauses.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        let genre_match = match &self.genre {
            Choice::Any => true,
            Choice::Id(id) => book.genres.iter().any(|g| g == id),
        };

        let needle = self.title.trim();
        let title_match =
            needle.is_empty() || book.title.to_lowercase().contains(&needle.to_lowercase());

        let author_match = self.author.allows(&book.author);

        genre_match && title_match && author_match
    }
}

/// Applies a filter query to the full catalog.
///
/// Returns the ordered sequence of matching books: every book that satisfies
/// all three clauses of the query, in catalog order. The match set is
/// recomputed wholesale on every submission; there is no incremental diffing.
///
/// # Properties
///
/// - An all-default query returns the input unchanged.
/// - Idempotent: evaluating an already-evaluated result with the same query
///   returns the same sequence.
///
/// # Examples
///
/// ```
/// use bookcase::app::filter::{evaluate, FilterQuery};
///
/// let query = FilterQuery::default();
/// assert!(evaluate(&query, &[]).is_empty());
/// ```
#[must_use]
pub fn evaluate(query: &FilterQuery, books: &[Book]) -> Vec<Book> {
    let _span = tracing::debug_span!(
        "evaluate_filter",
        total_books = books.len(),
        title_len = query.title.trim().len()
    )
    .entered();

    let matches: Vec<Book> = books
        .iter()
        .filter(|book| query.matches(book))
        .cloned()
        .collect();

    tracing::debug!(match_count = matches.len(), "filter evaluated");

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            image: format!("https://covers.example/{id}.jpg"),
            description: "A description.".to_string(),
            published: Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap(),
            genres: genres.iter().map(ToString::to_string).collect(),
        }
    }

    fn catalog() -> Vec<Book> {
        vec![
            book("dune-messiah", "Dune Messiah", "frank-herbert", &["science-fiction"]),
            book("the-hobbit", "The Hobbit", "jrr-tolkien", &["fantasy", "adventure"]),
            book("earthsea", "A Wizard of Earthsea", "ursula-le-guin", &["fantasy"]),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let books = catalog();
        let result = evaluate(&FilterQuery::default(), &books);
        assert_eq!(result, books);
    }

    #[test]
    fn whitespace_title_imposes_no_restriction() {
        let books = catalog();
        let query = FilterQuery {
            title: "   ".to_string(),
            ..FilterQuery::default()
        };
        assert_eq!(evaluate(&query, &books), books);
    }

    #[test]
    fn title_match_is_case_insensitive_substring() {
        let books = catalog();
        let query = FilterQuery {
            title: "dune".to_string(),
            ..FilterQuery::default()
        };

        let result = evaluate(&query, &books);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Dune Messiah");
    }

    #[test]
    fn author_filter_restricts_to_id() {
        let books = catalog();
        let query = FilterQuery {
            author: Choice::Id("jrr-tolkien".to_string()),
            ..FilterQuery::default()
        };

        let result = evaluate(&query, &books);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "the-hobbit");
    }

    #[test]
    fn genre_filter_matches_any_of_the_books_genres() {
        let books = catalog();
        let query = FilterQuery {
            genre: Choice::Id("fantasy".to_string()),
            ..FilterQuery::default()
        };

        let result = evaluate(&query, &books);
        let ids: Vec<&str> = result.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["the-hobbit", "earthsea"]);
    }

    #[test]
    fn clauses_combine_conjunctively() {
        let books = catalog();
        let query = FilterQuery {
            title: "wizard".to_string(),
            author: Choice::Id("ursula-le-guin".to_string()),
            genre: Choice::Id("fantasy".to_string()),
        };

        let result = evaluate(&query, &books);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "earthsea");

        // Same title, wrong author: no match.
        let query = FilterQuery {
            author: Choice::Id("frank-herbert".to_string()),
            ..query
        };
        assert!(evaluate(&query, &books).is_empty());
    }

    #[test]
    fn every_match_satisfies_all_clauses() {
        let books = catalog();
        let query = FilterQuery {
            title: "e".to_string(),
            genre: Choice::Id("fantasy".to_string()),
            author: Choice::Any,
        };

        for book in evaluate(&query, &books) {
            assert!(query.matches(&book));
        }
    }

    #[test]
    fn evaluate_is_idempotent() {
        let books = catalog();
        let query = FilterQuery {
            genre: Choice::Id("fantasy".to_string()),
            ..FilterQuery::default()
        };

        let once = evaluate(&query, &books);
        let twice = evaluate(&query, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn order_is_preserved() {
        let books = catalog();
        let query = FilterQuery {
            title: "HOBBIT".to_string(),
            ..FilterQuery::default()
        };

        // The single match keeps its catalog identity.
        let result = evaluate(&query, &books);
        assert_eq!(result[0], books[1]);
    }
}
