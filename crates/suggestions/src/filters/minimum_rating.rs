//! Filter to ensure a minimum quality threshold.
//!
//! Used by the default and author queries, which only suggest books rated
//! at or above the default rating.

use crate::error::Result;
use crate::reader_context::ReaderContext;
use crate::traits::Filter;
use catalog::{Book, Rating};

/// Removes books rated below `min_rating`.
pub struct MinimumRatingFilter {
    min_rating: Rating,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Lowest rating kept (typically `Rating::DEFAULT`)
    pub fn new(min_rating: Rating) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply<'a>(&self, books: Vec<&'a Book>, _context: &ReaderContext) -> Result<Vec<&'a Book>> {
        let filtered: Vec<&Book> = books
            .into_iter()
            .filter(|book| book.rating() >= self.min_rating)
            .collect();

        Ok(filtered)
    }
}
