//! # Catalog Crate
//!
//! The value model for book suggestions and the in-memory catalog that
//! holds it.
//!
//! ## Main Components
//!
//! - **types**: Author, Genre, Rating, Book, Reader, ReaderHandle
//! - **index**: `Catalog`, every book and a shared handle to every reader
//! - **error**: Validation errors raised while building values
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Author, Book, Catalog, Genre, ReaderHandle};
//!
//! let author = Author::new("Mary", "Shelley");
//! let book = Book::new(author, "Frankenstein", "978-0486282114", Genre::Horror, 5)?;
//!
//! let reader = ReaderHandle::new(31);
//! reader.add_favourite_genre(Genre::Horror);
//!
//! let catalog = Catalog::from_parts(vec![book.clone()], vec![reader.clone()]);
//!
//! // The catalog shares the reader, so later favourites are visible to it
//! reader.add_favourite_book(book);
//! ```

pub mod error;
pub mod types;
pub mod index;

pub use error::{CatalogError, Result};
pub use index::Catalog;
pub use types::{Author, Book, Genre, Rating, Reader, ReaderHandle, ReaderId};
