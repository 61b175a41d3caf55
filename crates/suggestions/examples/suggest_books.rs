//! Example: Suggest books to a reader
//!
//! Run with: RUST_LOG=debug cargo run --package suggestions --example suggest_books
//!
//! This example shows how to:
//! 1. Build books and readers
//! 2. Share them through a Catalog
//! 3. Run the three suggestion queries
//! 4. Record a new favourite and query again
//! 5. Handle a rejected rating

use anyhow::{Context, Result};
use catalog::{Author, Book, Catalog, Genre, ReaderHandle};
use std::sync::Arc;
use suggestions::RecommendationEngine;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Book Suggestions Example ===\n");

    let shelley = Author::new("Mary", "Shelley");
    let austen = Author::new("Jane", "Austen");

    let frankenstein = Book::new(shelley.clone(), "Frankenstein", "978-0486282114", Genre::Horror, 5)?;
    let last_man = Book::new(shelley.clone(), "The Last Man", "978-0199552351", Genre::Fiction, 4)?;
    let persuasion = Book::new(austen.clone(), "Persuasion", "978-0141439686", Genre::Romantic, 4)?;
    let emma = Book::new(austen, "Emma", "978-0141439587", Genre::Romantic, 3)?;

    let alice = ReaderHandle::new(34);
    alice.add_favourite_genre(Genre::Horror);
    alice.add_favourite_genre(Genre::Romantic);

    let bob = ReaderHandle::new(34);
    bob.add_favourite_book(frankenstein.clone());
    bob.add_favourite_book(persuasion.clone());
    bob.add_favourite_book(emma.clone());

    let carol = ReaderHandle::new(58);
    carol.add_favourite_book(last_man.clone());

    let catalog = Catalog::from_parts(
        vec![frankenstein, last_man.clone(), persuasion, emma],
        vec![alice.clone(), bob.clone(), carol],
    );
    let (books, readers) = catalog.counts();
    println!("Catalog: {} books, {} readers\n", books, readers);

    let engine = RecommendationEngine::new(Arc::new(catalog));

    let suggested = engine.recommend(&alice).context("default query failed")?;
    println!("Suggested for {} (rating >= {}):", alice.id(), engine.default_rating());
    print_titles(&suggested);

    let suggested = engine
        .recommend_with_rating(&alice, 4)
        .context("rating query failed")?;
    println!("Suggested for {} (rating == 4):", alice.id());
    print_titles(&suggested);

    let suggested = engine
        .recommend_by_author(&alice, &shelley)
        .context("author query failed")?;
    println!("Suggested for {} (by {}):", alice.id(), shelley);
    print_titles(&suggested);

    // bob is looked up through the engine's catalog; the handle is shared
    // with the one above, so the new favourite counts from the next query on
    let peer = engine
        .catalog()
        .get_reader(bob.id())
        .context("bob is not in the catalog")?;
    peer.add_favourite_book(last_man);
    alice.add_favourite_genre(Genre::Fiction);

    let suggested = engine.recommend(&alice).context("default query failed")?;
    println!("Suggested for {} after {} liked The Last Man:", alice.id(), peer.id());
    print_titles(&suggested);

    match engine.recommend_with_rating(&alice, 7) {
        Ok(_) => println!("Rating 7 was unexpectedly accepted"),
        Err(e) => println!("Rating 7 rejected: {}", e),
    }

    Ok(())
}

fn print_titles(titles: &std::collections::HashSet<String>) {
    let mut titles: Vec<&String> = titles.iter().collect();
    titles.sort();
    if titles.is_empty() {
        println!("  (nothing)");
    }
    for title in titles {
        println!("  - {}", title);
    }
    println!();
}
