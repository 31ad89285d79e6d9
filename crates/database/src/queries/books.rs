//! Book database operations

use crate::DbPool;
use booknest_core::{AppError, Book, BookId, BookStatus, NewBook, Validator};

/// Inserts a new book and returns the store-assigned id
///
/// The book is validated first; an invalid book (empty title) is rejected
/// without touching the store.
pub async fn insert_book(pool: &DbPool, book: &NewBook) -> Result<BookId, AppError> {
    if let Err(errors) = book.validate() {
        return Err(AppError::validation("Title", errors.join("; ")));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO books (title, author, genre, status)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&book.title)
    .bind(&book.author)
    .bind(&book.genre)
    .bind(book.status.as_str())
    .execute(pool)
    .await
    .map_err(|e| AppError::database("Failed to insert book", e))?;

    Ok(BookId::from_i64(result.last_insert_rowid()))
}

/// Gets a book by id
pub async fn get_book(pool: &DbPool, id: BookId) -> Result<Book, AppError> {
    let row = sqlx::query(
        r#"
        SELECT id, title, author, genre, status
        FROM books WHERE id = ?
        "#,
    )
    .bind(id.as_i64())
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::database("Failed to fetch book", e))?
    .ok_or_else(|| AppError::RecordNotFound {
        entity: "Book".to_string(),
        identifier: id.to_string(),
    })?;

    row_to_book(row)
}

/// Deletes the book with the given id
///
/// Returns false when no such id exists; a missing id is not an error.
pub async fn delete_book(pool: &DbPool, id: BookId) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM books WHERE id = ?")
        .bind(id.as_i64())
        .execute(pool)
        .await
        .map_err(|e| AppError::database("Failed to delete book", e))?;

    if result.rows_affected() == 0 {
        log::debug!("delete_book: no record with id {}", id);
        return Ok(false);
    }

    Ok(true)
}

/// Sets the status of the book with the given id to Finished
///
/// Touches no other column. Returns false when no such id exists;
/// repeated calls on the same id are idempotent.
pub async fn mark_finished(pool: &DbPool, id: BookId) -> Result<bool, AppError> {
    let result = sqlx::query("UPDATE books SET status = ? WHERE id = ?")
        .bind(BookStatus::Finished.as_str())
        .bind(id.as_i64())
        .execute(pool)
        .await
        .map_err(|e| AppError::database("Failed to mark book finished", e))?;

    if result.rows_affected() == 0 {
        log::debug!("mark_finished: no record with id {}", id);
        return Ok(false);
    }

    Ok(true)
}

/// Lists all books, ordered by id ascending
pub async fn list_books(pool: &DbPool) -> Result<Vec<Book>, AppError> {
    let rows = sqlx::query(
        r#"
        SELECT id, title, author, genre, status
        FROM books
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::database("Failed to list books", e))?;

    rows.into_iter().map(row_to_book).collect()
}

/// Converts a database row to a Book
pub(crate) fn row_to_book(row: sqlx::sqlite::SqliteRow) -> Result<Book, AppError> {
    use sqlx::Row;

    let id: i64 = row
        .try_get("id")
        .map_err(|e| AppError::database("Missing book id", e))?;

    let status_str: String = row
        .try_get("status")
        .map_err(|e| AppError::database("Missing status", e))?;
    let status: BookStatus = status_str
        .parse()
        .map_err(|e: String| AppError::DatabaseError {
            message: e,
            source: None,
        })?;

    Ok(Book {
        id: BookId::from_i64(id),
        title: row
            .try_get("title")
            .map_err(|e| AppError::database("Missing title", e))?,
        author: row.try_get("author").ok(),
        genre: row.try_get("genre").ok(),
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::create_test_db;
    use crate::migrations::run_migrations;

    async fn setup() -> Result<DbPool, AppError> {
        let pool = create_test_db().await?;
        run_migrations(&pool).await?;
        Ok(pool)
    }

    fn test_book(title: &str) -> NewBook {
        NewBook::new(title, BookStatus::Reading)
    }

    #[tokio::test]
    async fn test_insert_and_get_book() {
        let pool = setup().await.expect("Failed to setup database");

        let mut book = test_book("The Left Hand of Darkness");
        book.author = Some("Ursula K. Le Guin".to_string());
        book.genre = Some("Sci-Fi".to_string());

        let id = insert_book(&pool, &book).await.expect("Failed to insert");

        let retrieved = get_book(&pool, id).await.expect("Failed to get book");
        assert_eq!(retrieved.id, id);
        assert_eq!(retrieved.title, "The Left Hand of Darkness");
        assert_eq!(retrieved.author.as_deref(), Some("Ursula K. Le Guin"));
        assert_eq!(retrieved.genre.as_deref(), Some("Sci-Fi"));
        assert_eq!(retrieved.status, BookStatus::Reading);
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_title() {
        let pool = setup().await.expect("Failed to setup database");

        let result = insert_book(&pool, &test_book("")).await;
        assert!(matches!(result, Err(AppError::ValidationFailed { .. })));

        let books = list_books(&pool).await.expect("Failed to list");
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_insert_rejects_whitespace_title() {
        let pool = setup().await.expect("Failed to setup database");

        let result = insert_book(&pool, &test_book("   ")).await;
        assert!(matches!(result, Err(AppError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let pool = setup().await.expect("Failed to setup database");

        let id1 = insert_book(&pool, &test_book("First")).await.unwrap();
        let id2 = insert_book(&pool, &test_book("Second")).await.unwrap();
        assert!(id2 > id1);

        // Ids are not reused after a delete
        assert!(delete_book(&pool, id2).await.unwrap());
        let id3 = insert_book(&pool, &test_book("Third")).await.unwrap();
        assert!(id3 > id2);
    }

    #[tokio::test]
    async fn test_delete_book() {
        let pool = setup().await.expect("Failed to setup database");

        let id = insert_book(&pool, &test_book("Ephemeral")).await.unwrap();
        let keep = insert_book(&pool, &test_book("Keeper")).await.unwrap();

        assert!(delete_book(&pool, id).await.expect("Failed to delete"));

        let books = list_books(&pool).await.expect("Failed to list");
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, keep);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let pool = setup().await.expect("Failed to setup database");

        insert_book(&pool, &test_book("Survivor")).await.unwrap();

        let deleted = delete_book(&pool, BookId::from_i64(9999)).await.unwrap();
        assert!(!deleted);

        let books = list_books(&pool).await.expect("Failed to list");
        assert_eq!(books.len(), 1);
    }

    #[tokio::test]
    async fn test_mark_finished_changes_only_status() {
        let pool = setup().await.expect("Failed to setup database");

        let mut book = test_book("Dune");
        book.author = Some("Frank Herbert".to_string());
        book.genre = Some("Sci-Fi".to_string());
        let id = insert_book(&pool, &book).await.unwrap();

        assert!(mark_finished(&pool, id).await.expect("Failed to mark"));

        let updated = get_book(&pool, id).await.unwrap();
        assert_eq!(updated.status, BookStatus::Finished);
        assert_eq!(updated.title, "Dune");
        assert_eq!(updated.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(updated.genre.as_deref(), Some("Sci-Fi"));
    }

    #[tokio::test]
    async fn test_mark_finished_is_idempotent() {
        let pool = setup().await.expect("Failed to setup database");

        let id = insert_book(&pool, &test_book("Dune")).await.unwrap();

        assert!(mark_finished(&pool, id).await.unwrap());
        assert!(mark_finished(&pool, id).await.unwrap());

        let book = get_book(&pool, id).await.unwrap();
        assert_eq!(book.status, BookStatus::Finished);
    }

    #[tokio::test]
    async fn test_mark_finished_missing_id_is_noop() {
        let pool = setup().await.expect("Failed to setup database");

        let marked = mark_finished(&pool, BookId::from_i64(9999)).await.unwrap();
        assert!(!marked);
    }

    #[tokio::test]
    async fn test_list_books_ordered_by_id() {
        let pool = setup().await.expect("Failed to setup database");

        let id_b = insert_book(&pool, &test_book("Beta")).await.unwrap();
        let id_a = insert_book(&pool, &test_book("Alpha")).await.unwrap();

        let books = list_books(&pool).await.expect("Failed to list");
        assert_eq!(books.len(), 2);
        // Insertion order, not title order
        assert_eq!(books[0].id, id_b);
        assert_eq!(books[1].id, id_a);
    }

    #[tokio::test]
    async fn test_get_missing_book_is_not_found() {
        let pool = setup().await.expect("Failed to setup database");

        let result = get_book(&pool, BookId::from_i64(1)).await;
        assert!(matches!(result, Err(AppError::RecordNotFound { .. })));
    }
}
