//! TUI launch mode

use anyhow::{Context, Result};
use booknest_database::{connect, run_migrations, DatabaseConfig};
use booknest_tui::{ThemeType, TuiApp};

/// Runs the terminal UI against the given database
pub async fn run_tui(db_path: &str, theme: ThemeType) -> Result<()> {
    let pool = connect(DatabaseConfig::new(db_path))
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to apply database migrations")?;

    log::info!("Starting TUI with database {}", db_path);

    let mut app = TuiApp::new(pool, theme).context("Failed to initialize terminal")?;
    app.run().await.context("TUI exited with an error")?;

    Ok(())
}
