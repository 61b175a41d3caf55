//! Book suggestions for readers.
//!
//! This crate provides:
//! - Filter trait and implementations, one per recommendation predicate
//! - FilterPipeline for composing filters
//! - ReaderContext, the per-query snapshot of a reader and their peers
//! - RecommendationEngine, the three suggestion queries
//!
//! ## Architecture
//! Every query runs the same stages:
//! 1. Validate arguments (the rating query rejects ratings outside 1..=5)
//! 2. Build the reader context from the catalog
//! 3. Filters remove books (rating, favourite genre, peer agreement, author)
//! 4. Surviving books are projected to a set of titles
//!
//! ## Example Usage
//! ```ignore
//! use std::sync::Arc;
//! use catalog::Catalog;
//! use suggestions::RecommendationEngine;
//!
//! let engine = RecommendationEngine::new(Arc::new(Catalog::from_parts(books, readers)));
//!
//! let titles = engine.recommend(&reader)?;
//! let exact = engine.recommend_with_rating(&reader, 5)?;
//! let by_author = engine.recommend_by_author(&reader, &author)?;
//! ```

pub mod error;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod reader_context;
pub mod engine;

// Re-export main types
pub use engine::{DEFAULT_RATING, RecommendationEngine};
pub use error::{Result, SuggestionError};
pub use filter_pipeline::FilterPipeline;
pub use reader_context::{ReaderContext, build_reader_context};
pub use traits::Filter;
