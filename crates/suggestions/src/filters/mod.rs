//! Filter implementations for the suggestion pipeline.
//!
//! Each filter is one predicate of the recommendation conjunction; the
//! engine composes them into a FilterPipeline per query.

pub mod author;
pub mod exact_rating;
pub mod favourite_genre;
pub mod minimum_rating;
pub mod peer_agreement;

// Re-export for convenience
pub use author::AuthorFilter;
pub use exact_rating::ExactRatingFilter;
pub use favourite_genre::FavouriteGenreFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use peer_agreement::PeerAgreementFilter;
