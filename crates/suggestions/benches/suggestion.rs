//! Benchmarks for the suggestion queries
//!
//! Run with: cargo bench --package suggestions
//!
//! Builds a synthetic catalog of 10k books and 2k readers spread over
//! 60 ages, so every reader has a few dozen peers.

use catalog::{Author, Book, Catalog, Genre, ReaderHandle};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;
use suggestions::{RecommendationEngine, build_reader_context};

const GENRES: [Genre; 4] = [Genre::Horror, Genre::Drama, Genre::Fiction, Genre::Romantic];

fn build_test_catalog() -> (Arc<Catalog>, ReaderHandle, Author) {
    let authors: Vec<Author> = (0..200)
        .map(|i| Author::new(format!("First{}", i), format!("Last{}", i)))
        .collect();

    let books: Vec<Book> = (0..10_000)
        .map(|i| {
            Book::new(
                authors[i % authors.len()].clone(),
                format!("Title {}", i),
                format!("isbn-{}", i),
                GENRES[i % GENRES.len()],
                (i % 5 + 1) as i64,
            )
            .expect("rating is in range")
        })
        .collect();

    let readers: Vec<ReaderHandle> = (0..2_000)
        .map(|i| {
            let reader = ReaderHandle::new(18 + (i % 60) as u32);
            reader.add_favourite_genre(GENRES[i % GENRES.len()]);
            for offset in 0..25 {
                reader.add_favourite_book(books[(i * 37 + offset * 101) % books.len()].clone());
            }
            reader
        })
        .collect();

    let target = readers[0].clone();
    target.add_favourite_genre(Genre::Horror);
    target.add_favourite_genre(Genre::Fiction);

    let catalog = Catalog::from_parts(books, readers);
    (Arc::new(catalog), target, authors[0].clone())
}

fn bench_reader_context(c: &mut Criterion) {
    let (catalog, reader, _) = build_test_catalog();

    c.bench_function("build_reader_context", |b| {
        b.iter(|| {
            let context = build_reader_context(&catalog, black_box(&reader));
            black_box(context)
        })
    });
}

fn bench_queries(c: &mut Criterion) {
    let (catalog, reader, author) = build_test_catalog();
    let engine = RecommendationEngine::new(catalog);

    c.bench_function("recommend", |b| {
        b.iter(|| black_box(engine.recommend(black_box(&reader)).unwrap()))
    });

    c.bench_function("recommend_with_rating", |b| {
        b.iter(|| black_box(engine.recommend_with_rating(black_box(&reader), 5).unwrap()))
    });

    c.bench_function("recommend_by_author", |b| {
        b.iter(|| black_box(engine.recommend_by_author(black_box(&reader), &author).unwrap()))
    });
}

criterion_group!(benches, bench_reader_context, bench_queries);
criterion_main!(benches);
