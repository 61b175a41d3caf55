//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::error::{Result, SuggestionError};
use crate::reader_context::ReaderContext;
use crate::traits::Filter;
use catalog::Book;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new("recommend")
///     .add_filter(MinimumRatingFilter::new(Rating::DEFAULT))
///     .add_filter(FavouriteGenreFilter)
///     .add_filter(PeerAgreementFilter);
///
/// let matches = pipeline.apply(catalog.books().iter().collect(), &context)?;
/// ```
pub struct FilterPipeline {
    query: String,
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline for the named query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the candidate books.
    ///
    /// ## Algorithm
    /// 1. Refuse to run without filters
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the books that passed every filter
    ///
    /// An empty candidate list short-circuits the remaining filters.
    ///
    /// # Errors
    /// * `SuggestionError::NotImplemented` - the pipeline has no filters
    /// * any error a filter returns
    pub fn apply<'a>(&self, books: Vec<&'a Book>, context: &ReaderContext) -> Result<Vec<&'a Book>> {
        if self.filters.is_empty() {
            return Err(SuggestionError::NotImplemented {
                query: self.query.clone(),
            });
        }

        let mut current = books;
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context)?;
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}
