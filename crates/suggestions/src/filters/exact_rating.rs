//! Filter for the rating-constrained query.
//!
//! Unlike MinimumRatingFilter this is an exact match: asking for 4 does
//! not return books rated 5.

use crate::error::Result;
use crate::reader_context::ReaderContext;
use crate::traits::Filter;
use catalog::{Book, Rating};

/// Keeps only books rated exactly `rating`.
pub struct ExactRatingFilter {
    rating: Rating,
}

impl ExactRatingFilter {
    /// The rating is already validated by construction.
    pub fn new(rating: Rating) -> Self {
        Self { rating }
    }
}

impl Filter for ExactRatingFilter {
    fn name(&self) -> &str {
        "ExactRatingFilter"
    }

    fn apply<'a>(&self, books: Vec<&'a Book>, _context: &ReaderContext) -> Result<Vec<&'a Book>> {
        Ok(books
            .into_iter()
            .filter(|book| book.rating() == self.rating)
            .collect())
    }
}
