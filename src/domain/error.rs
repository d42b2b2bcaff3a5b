//! Error types for the Bookcase browser.
//!
//! This module defines the centralized error type [`BookcaseError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Bookcase operations.
///
/// This enum consolidates all error conditions that can occur while loading the
/// catalog, themes, or configuration. Every variant is a startup-time condition:
/// once the catalog and theme are loaded, all browsing operations are total
/// functions over well-formed in-memory data and cannot fail.
///
/// # Examples
///
/// ```
/// use bookcase::domain::BookcaseError;
///
/// fn validate_config() -> Result<(), BookcaseError> {
///     Err(BookcaseError::Config("unknown option: pages".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum BookcaseError {
    /// Catalog loading or validation failed.
    ///
    /// Occurs when the catalog JSON cannot be parsed, or when validation finds
    /// a duplicate book id, a dangling author/genre reference, or a zero page
    /// size. The string contains a description of what went wrong.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme TOML file cannot be read or parsed. The string
    /// contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or malformed.
    ///
    /// Occurs when a command-line option is unknown or its value cannot be
    /// parsed. The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Bookcase operations.
///
/// This is a type alias for `std::result::Result<T, BookcaseError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use bookcase::domain::Result;
///
/// fn load_something() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, BookcaseError>;
