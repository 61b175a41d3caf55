//! The in-memory catalog of books and readers.
//!
//! Books are held in a `HashSet` (uniqueness by value) and readers in a
//! `HashMap` keyed by `ReaderId` (uniqueness by identity). Membership is
//! fixed once the catalog is handed to the recommendation engine, but the
//! readers are live `ReaderHandle`s: favourites added by a collaborator are
//! seen by the next query.

use crate::types::{Book, ReaderHandle, ReaderId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Every book and every reader known to the system
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) books: HashSet<Book>,
    pub(crate) readers: HashMap<ReaderId, ReaderHandle>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            books: HashSet::new(),
            readers: HashMap::new(),
        }
    }

    /// Build a catalog from already validated collections.
    ///
    /// Duplicate books (by value) and duplicate readers (by id) collapse.
    pub fn from_parts(
        books: impl IntoIterator<Item = Book>,
        readers: impl IntoIterator<Item = ReaderHandle>,
    ) -> Self {
        let mut catalog = Self::new();
        for book in books {
            catalog.insert_book(book);
        }
        for reader in readers {
            catalog.insert_reader(reader);
        }

        let (books, readers) = catalog.counts();
        debug!("Built catalog with {} books and {} readers", books, readers);
        catalog
    }

    pub fn books(&self) -> &HashSet<Book> {
        &self.books
    }

    pub fn readers(&self) -> impl Iterator<Item = &ReaderHandle> {
        self.readers.values()
    }

    /// Get a reader by id
    pub fn get_reader(&self, id: ReaderId) -> Option<&ReaderHandle> {
        self.readers.get(&id)
    }

    /// Readers of exactly the same age as `reader`, excluding `reader` itself.
    ///
    /// `reader` does not have to be part of the catalog.
    pub fn peers_of<'a>(
        &'a self,
        reader: &'a ReaderHandle,
    ) -> impl Iterator<Item = &'a ReaderHandle> + 'a {
        self.readers
            .values()
            .filter(move |candidate| candidate.is_peer_of(reader))
    }

    /// Insert a book; returns false if an equal book was already present
    pub fn insert_book(&mut self, book: Book) -> bool {
        self.books.insert(book)
    }

    /// Insert a reader; a second handle to the same reader is a no-op
    pub fn insert_reader(&mut self, reader: ReaderHandle) {
        self.readers.entry(reader.id()).or_insert(reader);
    }

    /// (books, readers)
    pub fn counts(&self) -> (usize, usize) {
        (self.books.len(), self.readers.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Author, Genre};

    fn book(title: &str, isbn: &str, rating: i64) -> Book {
        Book::new(Author::new("Stephen", "King"), title, isbn, Genre::Horror, rating).unwrap()
    }

    #[test]
    fn test_from_parts_collapses_duplicates() {
        let reader = ReaderHandle::new(40);
        let catalog = Catalog::from_parts(
            vec![book("It", "1", 5), book("It", "1", 5), book("It", "2", 5)],
            vec![reader.clone(), reader, ReaderHandle::new(40)],
        );

        // Books by value, readers by identity
        assert_eq!(catalog.counts(), (2, 2));
    }

    #[test]
    fn test_peers_of() {
        let target = ReaderHandle::new(25);
        let same_age = ReaderHandle::new(25);
        let older = ReaderHandle::new(26);

        let catalog = Catalog::from_parts(
            Vec::new(),
            vec![target.clone(), same_age.clone(), older],
        );

        let peers: Vec<ReaderId> = catalog.peers_of(&target).map(|r| r.id()).collect();
        assert_eq!(peers, vec![same_age.id()]);
    }

    #[test]
    fn test_peers_of_reader_outside_catalog() {
        let outsider = ReaderHandle::new(25);
        let catalog = Catalog::from_parts(
            Vec::new(),
            vec![ReaderHandle::new(25), ReaderHandle::new(25)],
        );

        assert_eq!(catalog.peers_of(&outsider).count(), 2);
    }

    #[test]
    fn test_get_reader() {
        let reader = ReaderHandle::new(30);
        let id = reader.id();
        let mut catalog = Catalog::new();
        catalog.insert_reader(reader);

        assert_eq!(catalog.get_reader(id).map(ReaderHandle::age), Some(30));
        assert!(catalog.get_reader(ReaderHandle::new(30).id()).is_none());
    }

    #[test]
    fn test_catalog_sees_favourites_added_later() {
        let reader = ReaderHandle::new(30);
        let catalog = Catalog::from_parts(Vec::new(), vec![reader.clone()]);

        reader.add_favourite_book(book("It", "1", 5));

        let stored = catalog.get_reader(reader.id()).unwrap();
        assert!(stored.has_favourite(&book("It", "1", 5)));
    }
}
