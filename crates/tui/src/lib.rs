//! Terminal User Interface for BookNest

mod app;
mod error;
mod events;
mod state;
mod theme;
pub mod ui;

pub use app::App;
pub use error::{TuiError, TuiResult};
pub use state::{AddForm, AppState, DisplayState, FormField, View};
pub use theme::{Theme, ThemeType};

use booknest_database::DbPool;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Main TUI application wrapper
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl TuiApp {
    /// Creates and initializes a new TUI application
    ///
    /// The pool must already be migrated; the terminal is switched into
    /// raw mode and the alternate screen.
    pub fn new(pool: DbPool, theme: ThemeType) -> TuiResult<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: App::new(pool, theme),
        })
    }

    /// Runs the TUI application
    pub async fn run(&mut self) -> TuiResult<()> {
        let result = self.app.run(&mut self.terminal).await;
        self.cleanup()?;
        result
    }

    /// Cleans up terminal state
    fn cleanup(&mut self) -> TuiResult<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
