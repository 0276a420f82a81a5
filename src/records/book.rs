// Book records and queries
// Author: Gabriel Demetrios Lafis

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::query::{average, filter_map_sorted, group_and_aggregate, max_by_key, CountAggregator};

/// A book in the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub pages: i64,
    pub price: f64,
}

impl Book {
    /// Create a new book
    pub fn new(title: &str, author: &str, pages: i64, price: f64) -> Self {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            pages,
            price,
        }
    }
}

/// Titles of books with strictly more than `min_pages` pages, sorted ascending
pub fn long_book_titles(books: &[Book], min_pages: i64) -> Vec<String> {
    filter_map_sorted(books, |b| b.pages > min_pages, |b| b.title.clone(), false)
}

/// Mean page count, or `None` when there are no books
pub fn average_pages(books: &[Book]) -> Option<f64> {
    average(books, |b| b.pages as f64)
}

/// Number of books per author
pub fn books_per_author(books: &[Book]) -> HashMap<String, u64> {
    group_and_aggregate(books, |b| b.author.clone(), &CountAggregator)
}

/// The most expensive book, or `None` when there are no books
///
/// Price ties resolve to the book appearing first in the input.
pub fn most_expensive(books: &[Book]) -> Option<&Book> {
    max_by_key(books, |b| b.price)
}

/// Fixed sample data for the demo driver
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("El Quijote", "Cervantes", 500, 25.0),
        Book::new("Cien Años de Soledad", "García Márquez", 350, 30.0),
        Book::new("Rebelión en la Granja", "Orwell", 150, 15.0),
        Book::new("Rayuela", "Cortázar", 400, 28.0),
        Book::new("1984", "Orwell", 320, 20.0),
    ]
}
