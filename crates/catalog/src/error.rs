//! Error types for the catalog crate.
//!
//! Every error here is raised while a value is being constructed, so a
//! `Book` or `Rating` that exists is always valid.

use thiserror::Error;

/// Errors that can occur while building catalog values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A rating fell outside the 1..=5 scale
    #[error("Rating must be between 1 and 5, got {value}")]
    InvalidRating { value: i64 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
