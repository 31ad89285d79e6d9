use anyhow::{Context, Result};
use booknest_catalog::Catalog;
use booknest_core::{Book, BookId, BookStatus, NewBook};
use booknest_database::{connect, queries::books, verify_integrity, DatabaseConfig, DbPool};
use clap::ArgMatches;
use console::style;
use std::io::Write;

async fn connect_db(db_path: &str) -> Result<DbPool> {
    connect(DatabaseConfig::new(db_path))
        .await
        .context("Failed to connect to database")
}

/// Checks store integrity; used by `init`
pub async fn verify_store(db_path: &str) -> Result<()> {
    let pool = connect_db(db_path).await?;
    verify_integrity(&pool)
        .await
        .context("Database integrity check failed")?;
    Ok(())
}

/// List all books in the library
pub async fn list_books(db_path: &str) -> Result<()> {
    let pool = connect_db(db_path).await?;
    let books = books::list_books(&pool)
        .await
        .context("Failed to list books")?;

    if books.is_empty() {
        println!("No books tracked yet. Use 'add' to start your shelf.");
        return Ok(());
    }

    println!("\n{} Books", style(books.len()).bold().cyan());
    println!("{}", "=".repeat(72));

    for book in books {
        print_book_summary(&book);
    }

    Ok(())
}

/// Add a book to the library
pub async fn add_book(db_path: &str, matches: &ArgMatches) -> Result<()> {
    let title = matches
        .get_one::<String>("title")
        .ok_or_else(|| anyhow::anyhow!("Title is required"))?;
    let status: BookStatus = matches
        .get_one::<String>("status")
        .map(|s| s.as_str())
        .unwrap_or("reading")
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let mut book = NewBook::new(title.clone(), status);
    book.author = matches.get_one::<String>("author").cloned();
    book.genre = matches.get_one::<String>("genre").cloned();

    let pool = connect_db(db_path).await?;
    let id = books::insert_book(&pool, &book)
        .await
        .context("Failed to add book")?;

    println!("{} Book added", style("✓").green().bold());
    println!("  Id: {}", id);
    println!("  Title: {}", book.title);
    if let Some(author) = &book.author {
        println!("  Author: {}", author);
    }
    if let Some(genre) = &book.genre {
        println!("  Genre: {}", genre);
    }
    println!("  Status: {}", book.status);

    Ok(())
}

/// Search books by title or author substring
///
/// The query runs against the in-memory catalog, not the store.
pub async fn search_books(db_path: &str, matches: &ArgMatches) -> Result<()> {
    let query = matches
        .get_one::<String>("query")
        .ok_or_else(|| anyhow::anyhow!("Search query is required"))?;

    let pool = connect_db(db_path).await?;
    let mut catalog = Catalog::new();
    catalog
        .refresh(&pool)
        .await
        .context("Failed to load catalog")?;

    let results = catalog.search(query);

    if results.is_empty() {
        println!("No books found matching '{}'", query);
        return Ok(());
    }

    println!(
        "\n{} Results for '{}'",
        style(results.len()).bold().cyan(),
        query
    );
    println!("{}", "=".repeat(72));

    for book in results {
        print_book_summary(&book);
    }

    Ok(())
}

/// Mark a book as finished
pub async fn finish_book(db_path: &str, matches: &ArgMatches) -> Result<()> {
    let id = parse_id(matches)?;

    let pool = connect_db(db_path).await?;
    let existed = books::mark_finished(&pool, id)
        .await
        .context("Failed to mark book finished")?;

    if existed {
        println!("{} Marked book {} as finished", style("✓").green().bold(), id);
    } else {
        println!("No book with id {}", id);
    }

    Ok(())
}

/// Delete a book from the library
pub async fn delete_book(db_path: &str, matches: &ArgMatches) -> Result<()> {
    let id = parse_id(matches)?;
    let pool = connect_db(db_path).await?;

    let book = match books::get_book(&pool, id).await {
        Ok(book) => book,
        Err(booknest_core::AppError::RecordNotFound { .. }) => {
            println!("No book with id {}", id);
            return Ok(());
        }
        Err(err) => return Err(err).context("Failed to look up book"),
    };

    if !matches.get_flag("yes") && !confirm(&format!("Delete \"{}\"?", book.title))? {
        println!("Cancelled");
        return Ok(());
    }

    books::delete_book(&pool, id)
        .await
        .context("Failed to delete book")?;

    println!("{} Deleted \"{}\"", style("✓").green().bold(), book.title);
    Ok(())
}

/// Show detailed information about a book
pub async fn show_book_info(db_path: &str, matches: &ArgMatches) -> Result<()> {
    let id = parse_id(matches)?;

    let pool = connect_db(db_path).await?;
    let book = books::get_book(&pool, id)
        .await
        .context("Failed to get book")?;

    println!("\n{}", style("Book Information").bold().cyan());
    println!("{}", "=".repeat(72));
    println!("Id: {}", book.id);
    println!("Title: {}", style(&book.title).bold());
    if let Some(author) = &book.author {
        println!("Author: {}", author);
    }
    if let Some(genre) = &book.genre {
        println!("Genre: {}", genre);
    }
    println!("Status: {}", styled_status(&book));

    Ok(())
}

fn parse_id(matches: &ArgMatches) -> Result<BookId> {
    let id_str = matches
        .get_one::<String>("id")
        .ok_or_else(|| anyhow::anyhow!("Book id is required"))?;
    BookId::parse(id_str).with_context(|| format!("Invalid book id '{}'", id_str))
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn styled_status(book: &Book) -> String {
    if book.is_finished() {
        style(book.status.to_string()).green().to_string()
    } else {
        style(book.status.to_string()).cyan().to_string()
    }
}

fn print_book_summary(book: &Book) {
    println!(
        "{:>4}  {}  {} {} [{}]",
        style(book.id).dim(),
        style(&book.title).bold(),
        book.author.as_deref().unwrap_or("—"),
        book.genre
            .as_deref()
            .map(|g| format!("({})", g))
            .unwrap_or_default(),
        styled_status(book),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use booknest_database::run_migrations;
    use tempfile::NamedTempFile;

    async fn setup() -> (DbPool, NamedTempFile) {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_str().expect("Invalid path encoding");

        let pool = connect_db(db_path).await.expect("Failed to connect");
        run_migrations(&pool).await.expect("Failed to migrate");
        (pool, temp_file)
    }

    #[tokio::test]
    async fn test_connect_db_creates_file() {
        let (_pool, temp) = setup().await;
        assert!(temp.path().exists());
    }

    #[tokio::test]
    async fn test_verify_store_on_fresh_database() {
        let (_pool, temp) = setup().await;
        let db_path = temp.path().to_str().unwrap();
        verify_store(db_path).await.expect("Integrity check failed");
    }

    #[tokio::test]
    async fn test_add_command_matches() {
        let matches = crate::build_cli().get_matches_from([
            "booknest", "add", "Dune", "-a", "Frank Herbert", "-g", "Sci-Fi", "-s", "finished",
        ]);
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("title").unwrap(), "Dune");
        assert_eq!(sub.get_one::<String>("status").unwrap(), "finished");
    }

    #[tokio::test]
    async fn test_add_command_default_status_is_reading() {
        let matches = crate::build_cli().get_matches_from(["booknest", "add", "Dune"]);
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("status").unwrap(), "reading");
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        let matches = crate::build_cli().get_matches_from(["booknest", "finish", "abc"]);
        let (_, sub) = matches.subcommand().unwrap();
        assert!(parse_id(sub).is_err());
    }
}
