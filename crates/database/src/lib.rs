//! BookNest Database Layer
//!
//! This crate is the store of record for book entries. It uses SQLite with
//! sqlx and exposes the insert/delete/mark-finished/list operations the
//! rest of the application is built on.

pub mod connection;
pub mod migrations;
pub mod queries;

pub use connection::{connect, DatabaseConfig, DbPool};
pub use migrations::{current_version, run_migrations, verify_integrity};

#[cfg(test)]
mod tests {
    use crate::connection::create_test_db;
    use crate::migrations::run_migrations;
    use crate::queries::books::{delete_book, get_book, insert_book, list_books, mark_finished};
    use booknest_core::{AppError, BookStatus, NewBook};

    #[tokio::test]
    async fn test_database_migrations() -> Result<(), AppError> {
        let pool = create_test_db().await?;
        run_migrations(&pool).await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations")
            .fetch_one(&pool)
            .await
            .map_err(|e| AppError::database("Failed to count migrations", e))?;

        assert!(count > 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_full_database_workflow() -> Result<(), AppError> {
        let pool = create_test_db().await?;
        run_migrations(&pool).await?;

        // Insert
        let mut book = NewBook::new("Dune", BookStatus::Reading);
        book.author = Some("Frank Herbert".to_string());
        book.genre = Some("Sci-Fi".to_string());

        let id = insert_book(&pool, &book).await?;

        let books = list_books(&pool).await?;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].author.as_deref(), Some("Frank Herbert"));
        assert_eq!(books[0].genre.as_deref(), Some("Sci-Fi"));
        assert_eq!(books[0].status, BookStatus::Reading);

        // Mark finished
        assert!(mark_finished(&pool, id).await?);
        let finished = get_book(&pool, id).await?;
        assert_eq!(finished.status, BookStatus::Finished);

        // Delete
        assert!(delete_book(&pool, id).await?);
        let books = list_books(&pool).await?;
        assert!(books.is_empty());

        Ok(())
    }
}
