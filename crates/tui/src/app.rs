//! Main application logic
//!
//! Commands flow one way: a handler mutates the store, refreshes the
//! catalog, and installs the new snapshot in the state; the renderer only
//! ever reads the state.

use crate::{
    error::TuiResult,
    events::{AppEvent, EventHandler},
    state::{AppState, DisplayState, View},
    theme::{Theme, ThemeType},
    ui,
};
use booknest_catalog::Catalog;
use booknest_database::{queries::books, DbPool};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

/// The main TUI application
pub struct App {
    pool: DbPool,
    catalog: Catalog,
    state: AppState,
    event_handler: EventHandler,
    theme: Theme,
}

impl App {
    /// Creates a new application over an initialized database pool
    pub fn new(pool: DbPool, theme: ThemeType) -> Self {
        let mut state = AppState::new();
        state.theme = theme;
        Self {
            pool,
            catalog: Catalog::new(),
            state,
            event_handler: EventHandler::new(Duration::from_millis(250)),
            theme: Theme::new(theme),
        }
    }

    /// Runs the application
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> TuiResult<()> {
        self.reload().await;

        while !self.state.should_quit {
            terminal.draw(|frame| ui::render(frame, &self.state, &self.theme))?;

            match self.event_handler.next()? {
                AppEvent::Key(key) => self.handle_key(key.code, key.modifiers).await?,
                AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
                AppEvent::Tick => {}
                AppEvent::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        Ok(())
    }

    /// Handles mouse events
    fn handle_mouse(&mut self, mouse: crossterm::event::MouseEvent) {
        use crossterm::event::MouseEventKind;

        if self.state.view != View::Library {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => self.state.select_next(),
            MouseEventKind::ScrollUp => self.state.select_previous(),
            _ => {}
        }
    }

    /// Handles key events
    async fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> TuiResult<()> {
        // Ctrl+C quits from anywhere, even mid-input
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.state.quit();
            return Ok(());
        }

        match self.state.view {
            View::Library => self.handle_library_keys(code).await?,
            View::Add => self.handle_add_keys(code).await?,
            View::Help => self.handle_help_keys(code),
        }

        Ok(())
    }

    /// Handles library view keys
    async fn handle_library_keys(&mut self, code: KeyCode) -> TuiResult<()> {
        // The search bar captures text input while focused
        if self.state.search_active {
            match code {
                KeyCode::Char(c) => self.state.search_query.push(c),
                KeyCode::Backspace => {
                    self.state.search_query.pop();
                }
                KeyCode::Enter => {
                    self.state.end_search();
                    self.apply_search();
                }
                KeyCode::Esc => {
                    self.state.clear_search();
                    self.reload().await;
                }
                _ => {}
            }
            return Ok(());
        }

        match code {
            KeyCode::Char('q') => self.state.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Char('a') => {
                self.state.clear_status();
                self.state.set_view(View::Add);
            }
            KeyCode::Char('d') => self.delete_selected().await,
            KeyCode::Char('f') | KeyCode::Enter => self.mark_finished_selected().await,
            KeyCode::Char('/') => self.state.begin_search(),
            KeyCode::Char('t') => {
                self.state.next_theme();
                self.theme = Theme::new(self.state.theme);
                self.state
                    .set_status(format!("Theme: {}", self.state.theme.name()));
            }
            KeyCode::Char('h') => self.state.set_view(View::Help),
            KeyCode::Esc => {
                if self.state.display == DisplayState::Filtered {
                    self.state.clear_search();
                    self.reload().await;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handles add view keys
    async fn handle_add_keys(&mut self, code: KeyCode) -> TuiResult<()> {
        use crate::state::FormField;

        match code {
            KeyCode::Esc => self.state.set_view(View::Library),
            KeyCode::Tab => self.state.form.focus_next(),
            KeyCode::BackTab => self.state.form.focus_previous(),
            KeyCode::Enter => self.submit_add().await,
            KeyCode::Backspace => self.state.form.pop_char(),
            KeyCode::Left | KeyCode::Right => {
                if self.state.form.focus == FormField::Status {
                    self.state.form.cycle_status();
                }
            }
            KeyCode::Char(' ') if self.state.form.focus == FormField::Status => {
                self.state.form.cycle_status();
            }
            KeyCode::Char(c) => self.state.form.push_char(c),
            _ => {}
        }
        Ok(())
    }

    /// Handles help view keys
    fn handle_help_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.state.quit(),
            KeyCode::Char('h') | KeyCode::Esc => self.state.set_view(View::Library),
            _ => {}
        }
    }

    /// Adds the book described by the form
    async fn submit_add(&mut self) {
        let book = match self.state.form.new_book() {
            Ok(book) => book,
            Err(reason) => {
                log::warn!("Add declined: {}", reason);
                self.state.set_status(reason);
                return;
            }
        };

        match books::insert_book(&self.pool, &book).await {
            Ok(id) => {
                log::info!("Added book {} ({})", id, book.title);
                self.state.form.clear();
                self.state.set_view(View::Library);
                self.reload().await;
                self.state.set_status(format!("Added \"{}\"", book.title));
            }
            Err(err) => {
                log::error!("Failed to add book: {}", err);
                self.state.set_status(err.user_message());
            }
        }
    }

    /// Deletes the selected book
    async fn delete_selected(&mut self) {
        let (id, title) = match self.state.selected_book() {
            Some(book) => (book.id, book.title.clone()),
            None => {
                self.state.set_status("No book selected");
                return;
            }
        };

        match books::delete_book(&self.pool, id).await {
            Ok(existed) => {
                if !existed {
                    log::debug!("Delete of {} found nothing", id);
                }
                self.reload().await;
                self.state.set_status(format!("Deleted \"{}\"", title));
            }
            Err(err) => {
                log::error!("Failed to delete book {}: {}", id, err);
                self.state.set_status(err.user_message());
            }
        }
    }

    /// Marks the selected book finished
    async fn mark_finished_selected(&mut self) {
        let (id, title) = match self.state.selected_book() {
            Some(book) => (book.id, book.title.clone()),
            None => {
                self.state.set_status("No book selected");
                return;
            }
        };

        match books::mark_finished(&self.pool, id).await {
            Ok(existed) => {
                if !existed {
                    log::debug!("Mark finished of {} found nothing", id);
                }
                self.reload().await;
                self.state.set_status(format!("Finished \"{}\"", title));
            }
            Err(err) => {
                log::error!("Failed to mark book {} finished: {}", id, err);
                self.state.set_status(err.user_message());
            }
        }
    }

    /// Filters the rendered snapshot from the catalog cache
    fn apply_search(&mut self) {
        let results = self.catalog.search(&self.state.search_query);
        let count = results.len();
        self.state.set_books(results, DisplayState::Filtered);
        self.state.set_status(format!("{} match(es)", count));
    }

    /// Refreshes the catalog from the store and shows the full list
    async fn reload(&mut self) {
        if let Err(err) = self.catalog.refresh(&self.pool).await {
            log::error!("Catalog refresh failed: {}", err);
            self.state.set_status(err.user_message());
            return;
        }
        self.state
            .set_books(self.catalog.books().to_vec(), DisplayState::Full);
    }
}
