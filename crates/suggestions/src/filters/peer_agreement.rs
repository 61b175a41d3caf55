//! Filter requiring that someone the reader's age already likes the book.
//!
//! "Peers" are the other readers in the catalog whose age matches the
//! reader's exactly. The peers' favourite books are gathered once into the
//! ReaderContext, so this filter is a set lookup per book.

use crate::error::Result;
use crate::reader_context::ReaderContext;
use crate::traits::Filter;
use catalog::Book;

/// Keeps only books that at least one peer has favourited.
///
/// ## Algorithm
/// 1. `build_reader_context` collects the favourite books of every reader
///    with the same age and a different id
/// 2. A book survives iff it is in that set
///
/// A reader without peers gets an empty result.
pub struct PeerAgreementFilter;

impl Filter for PeerAgreementFilter {
    fn name(&self) -> &str {
        "PeerAgreementFilter"
    }

    fn apply<'a>(&self, books: Vec<&'a Book>, context: &ReaderContext) -> Result<Vec<&'a Book>> {
        if context.peer_count == 0 {
            return Ok(Vec::new());
        }

        let filtered: Vec<&Book> = books
            .into_iter()
            .filter(|book| context.peers_agree_on(book))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader_context::build_reader_context;
    use catalog::{Author, Catalog, Genre, ReaderHandle};

    fn book(title: &str) -> Book {
        Book::new(Author::new("Toni", "Morrison"), title, title, Genre::Drama, 5).unwrap()
    }

    #[test]
    fn test_peer_agreement_filter() {
        let target = ReaderHandle::new(45);
        let peer = ReaderHandle::new(45);
        let stranger = ReaderHandle::new(70);
        peer.add_favourite_book(book("Beloved"));
        stranger.add_favourite_book(book("Sula"));

        let books = vec![book("Beloved"), book("Sula"), book("Jazz")];
        let catalog = Catalog::from_parts(books.clone(), vec![target.clone(), peer, stranger]);
        let context = build_reader_context(&catalog, &target);

        let filtered = PeerAgreementFilter.apply(books.iter().collect(), &context).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title(), "Beloved");
    }

    #[test]
    fn test_without_peers_nothing_passes() {
        let target = ReaderHandle::new(45);
        target.add_favourite_book(book("Beloved"));
        let books = vec![book("Beloved")];

        let context = ReaderContext::new(&target);
        let filtered = PeerAgreementFilter.apply(books.iter().collect(), &context).unwrap();

        assert!(filtered.is_empty());
    }
}
