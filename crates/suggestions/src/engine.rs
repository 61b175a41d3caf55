//! # Recommendation Engine
//!
//! Answers the three suggestion queries against the shared catalog:
//! 1. Validate the query arguments
//! 2. Build the reader context (reader preferences + peer favourites)
//! 3. Run the query's filter pipeline over every book
//! 4. Project the survivors to their titles
//!
//! | query                   | rating            | genre      | peers | author |
//! |-------------------------|-------------------|------------|-------|--------|
//! | `recommend`             | >= default rating | favourite  | yes   | -      |
//! | `recommend_with_rating` | == rating         | favourite  | yes   | -      |
//! | `recommend_by_author`   | >= default rating | favourite  | yes   | ==     |

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, instrument};

use catalog::{Author, Book, Catalog, Rating, ReaderHandle};

use crate::error::Result;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{
    AuthorFilter, ExactRatingFilter, FavouriteGenreFilter, MinimumRatingFilter,
    PeerAgreementFilter,
};
use crate::reader_context::build_reader_context;

/// Rating threshold used when a query does not name one
pub const DEFAULT_RATING: Rating = Rating::DEFAULT;

/// Suggests book titles to readers from a catalog of fixed membership.
///
/// The catalog is shared behind an `Arc` and readers are live handles, so
/// the engine is cheap to clone, safe to query from several threads at once
/// and sees favourites recorded after it was built.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<Catalog>,
    default_rating: Rating,
}

impl RecommendationEngine {
    /// Create an engine over `catalog`
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            default_rating: DEFAULT_RATING,
        }
    }

    /// Configure the threshold of the default and author queries (default: 4)
    pub fn with_default_rating(mut self, rating: Rating) -> Self {
        self.default_rating = rating;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn default_rating(&self) -> Rating {
        self.default_rating
    }

    /// Titles of well-rated books in the reader's favourite genres that a
    /// same-age peer already likes.
    #[instrument(skip(self, reader), fields(reader_id = %reader.id()))]
    pub fn recommend(&self, reader: &ReaderHandle) -> Result<HashSet<String>> {
        let pipeline = FilterPipeline::new("recommend")
            .add_filter(MinimumRatingFilter::new(self.default_rating))
            .add_filter(FavouriteGenreFilter)
            .add_filter(PeerAgreementFilter);

        self.run(&pipeline, reader)
    }

    /// Like [`recommend`](Self::recommend) but only books rated exactly
    /// `rating`.
    ///
    /// # Errors
    /// `SuggestionError::Validation` if `rating` is outside 1..=5. The check
    /// happens before the catalog is read.
    #[instrument(skip(self, reader), fields(reader_id = %reader.id()))]
    pub fn recommend_with_rating(&self, reader: &ReaderHandle, rating: i64) -> Result<HashSet<String>> {
        let rating = Rating::new(rating)?;

        let pipeline = FilterPipeline::new("recommend_with_rating")
            .add_filter(ExactRatingFilter::new(rating))
            .add_filter(FavouriteGenreFilter)
            .add_filter(PeerAgreementFilter);

        self.run(&pipeline, reader)
    }

    /// Like [`recommend`](Self::recommend) restricted to books by `author`.
    #[instrument(skip(self, reader, author), fields(reader_id = %reader.id(), author = %author))]
    pub fn recommend_by_author(&self, reader: &ReaderHandle, author: &Author) -> Result<HashSet<String>> {
        let pipeline = FilterPipeline::new("recommend_by_author")
            .add_filter(MinimumRatingFilter::new(self.default_rating))
            .add_filter(FavouriteGenreFilter)
            .add_filter(PeerAgreementFilter)
            .add_filter(AuthorFilter::new(author.clone()));

        self.run(&pipeline, reader)
    }

    fn run(&self, pipeline: &FilterPipeline, reader: &ReaderHandle) -> Result<HashSet<String>> {
        let start_time = Instant::now();

        let context = build_reader_context(&self.catalog, reader);
        let candidates: Vec<&Book> = self.catalog.books().iter().collect();
        let total = candidates.len();

        let matches = pipeline.apply(candidates, &context)?;
        let matched = matches.len();

        // Title is the projection key: equal titles collapse
        let titles: HashSet<String> = matches
            .into_iter()
            .map(|book| book.title().to_string())
            .collect();

        debug!(
            "{}: {} of {} books matched, {} titles in {:?}",
            pipeline.query(),
            matched,
            total,
            titles.len(),
            start_time.elapsed()
        );
        Ok(titles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SuggestionError;
    use catalog::{CatalogError, Genre};

    fn author() -> Author {
        Author::new("Bram", "Stoker")
    }

    fn book(title: &str, isbn: &str, genre: Genre, rating: i64) -> Book {
        Book::new(author(), title, isbn, genre, rating).unwrap()
    }

    /// Target likes Horror; one same-age peer likes every book.
    fn create_test_engine(books: Vec<Book>) -> (RecommendationEngine, ReaderHandle) {
        let target = ReaderHandle::new(35);
        target.add_favourite_genre(Genre::Horror);

        let peer = ReaderHandle::new(35);
        for book in &books {
            peer.add_favourite_book(book.clone());
        }

        let catalog = Catalog::from_parts(books, vec![target.clone(), peer]);
        (RecommendationEngine::new(Arc::new(catalog)), target)
    }

    #[test]
    fn test_recommend_threshold() {
        let (engine, reader) = create_test_engine(vec![
            book("Dracula", "1", Genre::Horror, 5),
            book("The Jewel", "2", Genre::Horror, 4),
            book("The Lair", "3", Genre::Horror, 3),
        ]);

        let titles = engine.recommend(&reader).unwrap();

        assert_eq!(
            titles,
            HashSet::from(["Dracula".to_string(), "The Jewel".to_string()])
        );
    }

    #[test]
    fn test_titles_collapse() {
        let (engine, reader) = create_test_engine(vec![
            book("Dracula", "first-edition", Genre::Horror, 5),
            book("Dracula", "reprint", Genre::Horror, 4),
        ]);

        assert_eq!(engine.catalog().counts().0, 2);
        assert_eq!(engine.recommend(&reader).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_rating_is_validation_error() {
        let (engine, reader) = create_test_engine(vec![book("Dracula", "1", Genre::Horror, 5)]);

        for rating in [-1, 0, 6, 10] {
            let err = engine.recommend_with_rating(&reader, rating).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(
                err,
                SuggestionError::Validation(CatalogError::InvalidRating { value: rating })
            );
        }
    }

    #[test]
    fn test_custom_default_rating() {
        let (engine, reader) = create_test_engine(vec![
            book("Dracula", "1", Genre::Horror, 5),
            book("The Lair", "3", Genre::Horror, 3),
        ]);
        let engine = engine.with_default_rating(Rating::new(3).unwrap());

        assert_eq!(engine.default_rating().value(), 3);
        assert_eq!(engine.recommend(&reader).unwrap().len(), 2);
    }

    #[test]
    fn test_recommend_sees_genres_added_later() {
        let (engine, reader) = create_test_engine(vec![
            book("Dracula", "1", Genre::Horror, 5),
            book("Lady Athlyne", "2", Genre::Romantic, 5),
        ]);
        assert_eq!(engine.recommend(&reader).unwrap().len(), 1);

        reader.add_favourite_genre(Genre::Romantic);

        assert_eq!(engine.recommend(&reader).unwrap().len(), 2);
    }

    #[test]
    fn test_default_rating_constant() {
        assert_eq!(DEFAULT_RATING.value(), 4);
    }
}
