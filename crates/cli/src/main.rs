use anyhow::{Context, Result};
use booknest_config::ConfigManager;
use clap::{Arg, Command};

mod commands;
mod tui_mode;

fn build_cli() -> Command {
    Command::new("booknest")
        .version("0.1.0")
        .about("Personal book tracker")
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .value_name("PATH")
                .help("Path to the database file (overrides the config file)")
                .global(true),
        )
        .subcommand(Command::new("init").about("Initialize the database and create tables"))
        .subcommand(Command::new("list").about("List all books in the library"))
        .subcommand(
            Command::new("add")
                .about("Add a book to the library")
                .arg(Arg::new("title").required(true).value_name("TITLE").help("Book title"))
                .arg(Arg::new("author").short('a').long("author").value_name("AUTHOR").help("Book author (optional)"))
                .arg(Arg::new("genre").short('g').long("genre").value_name("GENRE").help("Book genre (optional)"))
                .arg(
                    Arg::new("status")
                        .short('s')
                        .long("status")
                        .value_name("STATUS")
                        .help("Reading status")
                        .value_parser(["reading", "finished"])
                        .default_value("reading"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Search books by title or author substring")
                .arg(Arg::new("query").required(true).value_name("QUERY").help("Search query")),
        )
        .subcommand(
            Command::new("finish")
                .about("Mark a book as finished")
                .arg(Arg::new("id").required(true).value_name("BOOK_ID").help("Book id")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a book from the library")
                .arg(Arg::new("id").required(true).value_name("BOOK_ID").help("Book id"))
                .arg(Arg::new("yes").short('y').long("yes").help("Skip confirmation prompt").action(clap::ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("info")
                .about("Show detailed information about a book")
                .arg(Arg::new("id").required(true).value_name("BOOK_ID").help("Book id")),
        )
}

async fn ensure_database_ready(db_path: &str) -> Result<()> {
    use booknest_database::{connect, run_migrations, DatabaseConfig};
    let pool = connect(DatabaseConfig::new(db_path))
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to apply database migrations")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let config = match ConfigManager::new() {
        Ok(manager) => manager.load_or_default(),
        Err(err) => {
            eprintln!("Warning: {}; using default settings", err);
            booknest_config::AppConfig::default()
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.to_string()),
    )
    .init();

    let db_path = matches
        .get_one::<String>("database")
        .cloned()
        .unwrap_or_else(|| config.database_path.display().to_string());

    ensure_database_ready(&db_path)
        .await
        .context("Failed to initialize database")?;

    match matches.subcommand() {
        Some(("init", _)) => {
            commands::verify_store(&db_path).await?;
            println!(
                "Database initialized at {} (schema v{})",
                db_path,
                booknest_database::current_version()
            );
            Ok(())
        }
        Some(("list", _)) => commands::list_books(&db_path).await,
        Some(("add", sub_matches)) => commands::add_book(&db_path, sub_matches).await,
        Some(("search", sub_matches)) => commands::search_books(&db_path, sub_matches).await,
        Some(("finish", sub_matches)) => commands::finish_book(&db_path, sub_matches).await,
        Some(("delete", sub_matches)) => commands::delete_book(&db_path, sub_matches).await,
        Some(("info", sub_matches)) => commands::show_book_info(&db_path, sub_matches).await,
        _ => tui_mode::run_tui(&db_path, config.theme.into()).await,
    }
}
