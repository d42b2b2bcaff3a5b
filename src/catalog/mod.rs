//! Catalog layer: the immutable dataset and its loaders.
//!
//! This module provides the read-only book dataset the application browses.
//! The catalog is loaded exactly once at startup through a [`CatalogSource`]
//! and never refreshed; all derived state (match sets, pagination) is computed
//! from it elsewhere.
//!
//! # Modules
//!
//! - `store`: The validated in-memory [`Catalog`] (books, name maps, page size)
//! - `source`: [`CatalogSource`] trait abstraction for dataset providers
//! - `json`: JSON implementation reading the embedded dataset or a file

pub mod json;
pub mod source;
pub mod store;

pub use json::JsonCatalog;
pub use source::CatalogSource;
pub use store::Catalog;
