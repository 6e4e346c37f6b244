//! Error types for the realm status scraper
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for realm status operations
#[derive(Error, Debug)]
pub enum RealmStatusError {
    /// HTTP request failed (transport error or non-success status)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    /// One of the per-field queries disagreed with the name-cell query on
    /// how many realms the page contains, so positional alignment of the
    /// columns cannot be trusted
    #[error("Malformed status page: expected {expected} {field} cells, found {found}")]
    MalformedDocument {
        /// The field whose query count disagreed
        field: &'static str,
        /// Number of name cells found
        expected: usize,
        /// Number of cells the field query found
        found: usize,
    },
}

/// Result type alias for realm status operations
pub type Result<T> = std::result::Result<T, RealmStatusError>;
