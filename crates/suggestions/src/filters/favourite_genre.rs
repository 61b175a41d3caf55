//! Filter to keep only books in the reader's favourite genres.

use crate::error::Result;
use crate::reader_context::ReaderContext;
use crate::traits::Filter;
use catalog::Book;

/// Keeps only books whose genre the reader has marked as a favourite.
///
/// A reader with no favourite genres gets nothing through this filter.
pub struct FavouriteGenreFilter;

impl Filter for FavouriteGenreFilter {
    fn name(&self) -> &str {
        "FavouriteGenreFilter"
    }

    fn apply<'a>(&self, books: Vec<&'a Book>, context: &ReaderContext) -> Result<Vec<&'a Book>> {
        let filtered: Vec<&Book> = books
            .into_iter()
            .filter(|book| context.likes_genre(book.genre()))
            .collect();
        Ok(filtered)
    }
}
