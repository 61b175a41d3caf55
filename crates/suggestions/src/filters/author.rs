//! Filter for the author-constrained query.

use crate::error::Result;
use crate::reader_context::ReaderContext;
use crate::traits::Filter;
use catalog::{Author, Book};

/// Keeps only books written by `author` (both names must match).
pub struct AuthorFilter {
    author: Author,
}

impl AuthorFilter {
    pub fn new(author: Author) -> Self {
        Self { author }
    }
}

impl Filter for AuthorFilter {
    fn name(&self) -> &str {
        "AuthorFilter"
    }

    fn apply<'a>(&self, books: Vec<&'a Book>, _context: &ReaderContext) -> Result<Vec<&'a Book>> {
        Ok(books
            .into_iter()
            .filter(|book| *book.author() == self.author)
            .collect())
    }
}
