//! Core domain types for the book catalog.
//!
//! Value types (`Author`, `Genre`, `Rating`, `Book`) compare by value.
//! `Reader` is an entity: it compares by its `ReaderId`, never by its
//! attributes, so two readers of the same age with the same favourites
//! are still two different readers. `ReaderHandle` shares one live reader
//! between the collaborator that grows its favourites and the catalog.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// =============================================================================
// Author
// =============================================================================

/// The author of a book. Two authors are equal iff both names match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Genre
// =============================================================================

/// Book genres. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Horror,
    Drama,
    Fiction,
    Romantic,
}

// =============================================================================
// Rating
// =============================================================================

/// A rating on the 1..=5 scale.
///
/// The only way to obtain a `Rating` is through [`Rating::new`] (or
/// deserialization, which goes through the same check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    /// Threshold used when a query does not ask for a specific rating
    pub const DEFAULT: Rating = Rating(4);

    /// Validate a raw rating value.
    ///
    /// # Errors
    /// `CatalogError::InvalidRating` if `value` is outside 1..=5
    pub fn new(value: i64) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(CatalogError::InvalidRating { value });
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = CatalogError;

    fn try_from(value: i64) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        rating.0 as i64
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Book
// =============================================================================

/// An immutable catalog entry.
///
/// Equality and hashing cover every field, so two books that differ only
/// in their isbn are different books even when they share a title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    author: Author,
    title: String,
    /// Catalog identifier; not checked for global uniqueness
    isbn: String,
    genre: Genre,
    rating: Rating,
}

impl Book {
    /// Build a book, rejecting ratings outside 1..=5.
    pub fn new(
        author: Author,
        title: impl Into<String>,
        isbn: impl Into<String>,
        genre: Genre,
        rating: i64,
    ) -> Result<Self> {
        Ok(Self {
            author,
            title: title.into(),
            isbn: isbn.into(),
            genre,
            rating: Rating::new(rating)?,
        })
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }
}

// =============================================================================
// Reader
// =============================================================================

static NEXT_READER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity handle for a reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReaderId(u64);

impl ReaderId {
    fn next() -> Self {
        Self(NEXT_READER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ReaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reader-{}", self.0)
    }
}

/// A reader and the favourites they have collected so far.
///
/// Favourites only ever grow: there is an `add_*` method for each set and
/// no way to remove or replace entries. A `Reader` is not `Clone`; share it
/// through a [`ReaderHandle`] so every holder sees the same favourites.
#[derive(Debug)]
pub struct Reader {
    id: ReaderId,
    age: u32,
    favourite_genres: HashSet<Genre>,
    favourite_books: HashSet<Book>,
}

impl Reader {
    /// Create a reader with a fresh identity and no favourites
    pub fn new(age: u32) -> Self {
        Self {
            id: ReaderId::next(),
            age,
            favourite_genres: HashSet::new(),
            favourite_books: HashSet::new(),
        }
    }

    pub fn id(&self) -> ReaderId {
        self.id
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn favourite_genres(&self) -> &HashSet<Genre> {
        &self.favourite_genres
    }

    pub fn favourite_books(&self) -> &HashSet<Book> {
        &self.favourite_books
    }

    pub fn add_favourite_genre(&mut self, genre: Genre) {
        self.favourite_genres.insert(genre);
    }

    pub fn add_favourite_book(&mut self, book: Book) {
        self.favourite_books.insert(book);
    }

    pub fn likes_genre(&self, genre: Genre) -> bool {
        self.favourite_genres.contains(&genre)
    }

    pub fn has_favourite(&self, book: &Book) -> bool {
        self.favourite_books.contains(book)
    }
}

impl PartialEq for Reader {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Reader {}

impl Hash for Reader {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// =============================================================================
// ReaderHandle
// =============================================================================

/// Shared, live reference to a reader.
///
/// Cloning a handle does not copy the reader: every clone points at the same
/// favourites, so a book added through one handle is visible through all of
/// them (and to the catalog holding one). Id and age never change and are
/// read without locking.
#[derive(Debug, Clone)]
pub struct ReaderHandle {
    id: ReaderId,
    age: u32,
    inner: Arc<RwLock<Reader>>,
}

impl ReaderHandle {
    /// Create a new reader with no favourites and return a handle to it
    pub fn new(age: u32) -> Self {
        Self::from(Reader::new(age))
    }

    pub fn id(&self) -> ReaderId {
        self.id
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Borrow the reader as it is right now.
    ///
    /// Writers block while the guard is alive, so keep it short.
    pub fn read(&self) -> RwLockReadGuard<'_, Reader> {
        // Inserts are single set operations, so a poisoned lock still
        // holds a consistent reader
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Reader> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_favourite_genre(&self, genre: Genre) {
        self.write().add_favourite_genre(genre);
    }

    pub fn add_favourite_book(&self, book: Book) {
        self.write().add_favourite_book(book);
    }

    /// Copy of the current favourite genres
    pub fn favourite_genres(&self) -> HashSet<Genre> {
        self.read().favourite_genres().clone()
    }

    /// Copy of the current favourite books
    pub fn favourite_books(&self) -> HashSet<Book> {
        self.read().favourite_books().clone()
    }

    pub fn likes_genre(&self, genre: Genre) -> bool {
        self.read().likes_genre(genre)
    }

    pub fn has_favourite(&self, book: &Book) -> bool {
        self.read().has_favourite(book)
    }

    /// Same age, different reader
    pub fn is_peer_of(&self, other: &ReaderHandle) -> bool {
        self.id != other.id && self.age == other.age
    }
}

impl From<Reader> for ReaderHandle {
    fn from(reader: Reader) -> Self {
        Self {
            id: reader.id(),
            age: reader.age(),
            inner: Arc::new(RwLock::new(reader)),
        }
    }
}

impl PartialEq for ReaderHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ReaderHandle {}

impl Hash for ReaderHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
