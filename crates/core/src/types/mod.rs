//! Domain types for BookNest
//!
//! This module contains the domain models:
//! - `book`: Book records, ids, and reading status
//! - `common`: Shared traits and utilities

mod book;
mod common;

// Re-export all public types
pub use book::{Book, BookId, BookStatus, NewBook};
pub use common::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_types_are_exported() {
        let _id: BookId = BookId::from_i64(1);
        let _status: BookStatus = BookStatus::Reading;
        let _book: NewBook = NewBook::new("x", BookStatus::Reading);
    }
}
