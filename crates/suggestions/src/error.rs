//! Error types for the suggestions crate.
//!
//! A query either returns its complete result set or one of these errors.
//! Nothing is raised in the middle of a scan: rating validation happens
//! before the catalog is touched, and an unwired query is refused before
//! any filter runs.

use catalog::CatalogError;
use thiserror::Error;

/// Errors returned by recommendation queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuggestionError {
    /// An argument or value failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] CatalogError),

    /// The query has no predicates wired up
    ///
    /// Returning an empty set here would look exactly like "no matches".
    #[error("Query not implemented: {query}")]
    NotImplemented { query: String },
}

impl SuggestionError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SuggestionError::Validation(_))
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SuggestionError>;
