//! Catalog data source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where the
//! catalog dataset comes from. The application loads the catalog exactly once at
//! startup and never refreshes it, so the trait has a single operation.
//!
//! # Design Philosophy
//!
//! The trait is deliberately minimal: it exists so the view-state controller and
//! its tests can be fed a catalog without caring whether it came from the
//! embedded dataset, a file, or a test fixture built in memory.

use crate::catalog::store::Catalog;
use crate::domain::error::Result;

/// Abstraction over catalog dataset providers.
///
/// Implementations produce a validated, immutable [`Catalog`]. Loading happens
/// once; there is no refresh or invalidation operation.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::catalog::JsonCatalog): embedded dataset or JSON file (default)
///
/// # Examples
///
/// ```
/// use bookcase::catalog::{CatalogSource, JsonCatalog};
///
/// let catalog = JsonCatalog::builtin().load()?;
/// assert!(!catalog.books().is_empty());
/// # Ok::<(), bookcase::domain::BookcaseError>(())
/// ```
pub trait CatalogSource {
    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be read, cannot be parsed, or
    /// fails referential validation.
    fn load(&self) -> Result<Catalog>;
}
