//! Book domain models

use crate::types::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a book
///
/// Ids are assigned by the store (SQLite rowid) and are monotonically
/// increasing. An id is never reused, even after the record is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookId(i64);

impl BookId {
    /// Creates a BookId from a raw store rowid
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Creates a BookId from its decimal string form
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.trim().parse()?))
    }

    /// Returns the id as a raw i64
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reading status of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    Reading,
    Finished,
}

impl BookStatus {
    /// Returns all statuses in display order
    pub fn all() -> [BookStatus; 2] {
        [BookStatus::Reading, BookStatus::Finished]
    }

    /// Returns the status as the text persisted in the store
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Reading => "Reading",
            BookStatus::Finished => "Finished",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reading" => Ok(BookStatus::Reading),
            "finished" => Ok(BookStatus::Finished),
            other => Err(format!("unknown book status '{}'", other)),
        }
    }
}

/// A tracked book as stored in the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub status: BookStatus,
}

impl Book {
    /// Returns true if the book has been marked finished
    pub fn is_finished(&self) -> bool {
        self.status == BookStatus::Finished
    }

    /// Marks the book as finished; all other fields are untouched
    pub fn mark_finished(&mut self) {
        self.status = BookStatus::Finished;
    }
}

/// A book not yet persisted; the store assigns the id on insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub status: BookStatus,
}

impl NewBook {
    /// Creates a new book with the required fields
    pub fn new(title: impl Into<String>, status: BookStatus) -> Self {
        Self {
            title: title.into(),
            author: None,
            genre: None,
            status,
        }
    }
}

impl Validator for NewBook {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_roundtrip() {
        let id = BookId::from_i64(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(BookId::parse("42").unwrap(), id);
    }

    #[test]
    fn test_book_id_parse_rejects_garbage() {
        assert!(BookId::parse("not-a-number").is_err());
    }

    #[test]
    fn test_book_id_display() {
        let id = BookId::from_i64(7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_status_as_str_matches_store_text() {
        assert_eq!(BookStatus::Reading.as_str(), "Reading");
        assert_eq!(BookStatus::Finished.as_str(), "Finished");
    }

    #[test]
    fn test_status_from_str_case_insensitive() {
        assert_eq!("reading".parse::<BookStatus>().unwrap(), BookStatus::Reading);
        assert_eq!("Finished".parse::<BookStatus>().unwrap(), BookStatus::Finished);
        assert_eq!(" FINISHED ".parse::<BookStatus>().unwrap(), BookStatus::Finished);
    }

    #[test]
    fn test_status_from_str_rejects_unknown() {
        assert!("abandoned".parse::<BookStatus>().is_err());
    }

    #[test]
    fn test_new_book_defaults() {
        let book = NewBook::new("Dune", BookStatus::Reading);
        assert_eq!(book.title, "Dune");
        assert!(book.author.is_none());
        assert!(book.genre.is_none());
        assert_eq!(book.status, BookStatus::Reading);
    }

    #[test]
    fn test_new_book_validation_success() {
        let book = NewBook::new("Dune", BookStatus::Reading);
        assert!(book.is_valid());
    }

    #[test]
    fn test_new_book_validation_empty_title() {
        let book = NewBook::new("", BookStatus::Reading);
        assert!(!book.is_valid());
    }

    #[test]
    fn test_new_book_validation_whitespace_title() {
        let book = NewBook::new("   ", BookStatus::Reading);
        assert!(!book.is_valid());
    }

    #[test]
    fn test_mark_finished() {
        let mut book = Book {
            id: BookId::from_i64(1),
            title: "Dune".to_string(),
            author: Some("Frank Herbert".to_string()),
            genre: Some("Sci-Fi".to_string()),
            status: BookStatus::Reading,
        };

        assert!(!book.is_finished());
        book.mark_finished();
        assert!(book.is_finished());

        // Idempotent
        book.mark_finished();
        assert!(book.is_finished());
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author.as_deref(), Some("Frank Herbert"));
    }
}
