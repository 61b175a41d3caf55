//! Per-query snapshot of the target reader and their peers.
//!
//! Peer agreement asks, for every candidate book, whether some other reader
//! of the same age already favourited it. Rather than rescanning the reader
//! set once per book, the context gathers the peers' favourite books once and
//! the filter becomes a set lookup.
//!
//! Readers are live handles, so the context is rebuilt for every query and
//! always reflects the favourites recorded before the query started.

use catalog::{Book, Catalog, Genre, ReaderHandle, ReaderId};
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::debug;

/// Everything the filters need to know about the reader being served
#[derive(Debug, Clone)]
pub struct ReaderContext {
    pub reader_id: ReaderId,
    pub favourite_genres: HashSet<Genre>,
    /// Number of same-age readers other than this one
    pub peer_count: usize,
    /// Union of the favourite books of every peer
    pub peer_favourites: HashSet<Book>,
}

impl ReaderContext {
    /// Context for `reader` with no peers yet
    pub fn new(reader: &ReaderHandle) -> Self {
        Self {
            reader_id: reader.id(),
            favourite_genres: reader.favourite_genres(),
            peer_count: 0,
            peer_favourites: HashSet::new(),
        }
    }

    pub fn likes_genre(&self, genre: Genre) -> bool {
        self.favourite_genres.contains(&genre)
    }

    /// Some other reader of the same age has `book` among their favourites
    pub fn peers_agree_on(&self, book: &Book) -> bool {
        self.peer_favourites.contains(book)
    }
}

/// Build a ReaderContext for `reader` from the catalog's current readers.
///
/// The reader's own favourite books are never consulted: only peers count.
pub fn build_reader_context(catalog: &Catalog, reader: &ReaderHandle) -> ReaderContext {
    let mut context = ReaderContext::new(reader);

    let peers: Vec<&ReaderHandle> = catalog.peers_of(reader).collect();
    context.peer_count = peers.len();

    if peers.is_empty() {
        debug!("Reader {} has no peers aged {}", reader.id(), reader.age());
        return context;
    }

    // Each peer is read-locked only while its favourites are copied out
    context.peer_favourites = peers
        .par_iter()
        .flat_map_iter(|peer| peer.favourite_books())
        .collect();

    debug!(
        "Reader {} has {} peers sharing {} favourite books",
        reader.id(),
        context.peer_count,
        context.peer_favourites.len()
    );
    context
}
