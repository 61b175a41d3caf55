//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable predicates
//! to be applied to the candidate books of a query.

use crate::error::Result;
use crate::reader_context::ReaderContext;
use catalog::Book;

/// Core trait for filtering candidate books.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the candidate list and return the survivors,
///   borrowing the books from the catalog rather than cloning them
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidate books.
    ///
    /// # Arguments
    /// * `books` - The candidates to filter (takes ownership)
    /// * `context` - Snapshot of the reader being served
    ///
    /// # Returns
    /// * `Ok(Vec<&Book>)` - The candidates that satisfy this predicate
    /// * `Err` - If filtering fails
    fn apply<'a>(&self, books: Vec<&'a Book>, context: &ReaderContext) -> Result<Vec<&'a Book>>;
}
