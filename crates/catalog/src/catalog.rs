//! In-memory catalog mirroring the store

use crate::error::Result;
use booknest_core::Book;
use booknest_database::{queries::books, DbPool};
use log::debug;

/// A cached, ordered mirror of the store's book records
///
/// The catalog holds the snapshot taken at the last `refresh()`. Search
/// filters that snapshot; it never reaches the store, and mutating the
/// store does not change the cache until the next refresh.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached contents with the store's current records
    pub async fn refresh(&mut self, pool: &DbPool) -> Result<()> {
        self.books = books::list_books(pool).await?;
        debug!("Catalog refreshed: {} books", self.books.len());
        Ok(())
    }

    /// Returns the books whose title or author contains the query
    ///
    /// Matching is case-insensitive. An empty query matches everything.
    /// Operates on the cached snapshot only.
    pub fn search(&self, query: &str) -> Vec<Book> {
        if query.is_empty() {
            return self.books.clone();
        }

        let query = query.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&query)
                    || book
                        .author
                        .as_ref()
                        .is_some_and(|author| author.to_lowercase().contains(&query))
            })
            .cloned()
            .collect()
    }

    /// Returns the cached snapshot
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the cached book at the given index
    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    /// Returns the number of cached books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
