//! Application state management
//!
//! The state holds the snapshot the renderer draws from. Command handlers
//! mutate the store, refresh the catalog, and install a fresh snapshot
//! here; rendering never reaches the store.

use booknest_core::{Book, BookStatus, NewBook};

/// Available views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Library,
    Add,
    Help,
}

impl Default for View {
    fn default() -> Self {
        Self::Library
    }
}

/// Whether the library shows the whole catalog or a search subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Full,
    Filtered,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::Full
    }
}

/// Fields of the add form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Author,
    Genre,
    Status,
}

impl FormField {
    /// Returns the next field in focus order, wrapping around
    pub fn next(&self) -> FormField {
        match self {
            FormField::Title => FormField::Author,
            FormField::Author => FormField::Genre,
            FormField::Genre => FormField::Status,
            FormField::Status => FormField::Title,
        }
    }

    /// Returns the previous field in focus order, wrapping around
    pub fn previous(&self) -> FormField {
        match self {
            FormField::Title => FormField::Status,
            FormField::Author => FormField::Title,
            FormField::Genre => FormField::Author,
            FormField::Status => FormField::Genre,
        }
    }

}

impl Default for FormField {
    fn default() -> Self {
        Self::Title
    }
}

/// The add-book input form
#[derive(Debug, Clone, Default)]
pub struct AddForm {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub status: Option<BookStatus>,
    pub focus: FormField,
}

impl AddForm {
    /// Creates an empty form focused on the title field
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves focus to the next field
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Appends a character to the focused text field
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Author => self.author.push(c),
            FormField::Genre => self.genre.push(c),
            FormField::Status => {}
        }
    }

    /// Removes the last character from the focused text field
    pub fn pop_char(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Author => {
                self.author.pop();
            }
            FormField::Genre => {
                self.genre.pop();
            }
            FormField::Status => {}
        }
    }

    /// Cycles the status selection
    pub fn cycle_status(&mut self) {
        self.status = match self.status {
            None => Some(BookStatus::Reading),
            Some(BookStatus::Reading) => Some(BookStatus::Finished),
            Some(BookStatus::Finished) => Some(BookStatus::Reading),
        };
    }

    /// Clears all fields and resets focus
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builds the book to insert, checking the add preconditions
    ///
    /// Requires a non-empty title and a selected status; blank author and
    /// genre become absent rather than empty strings.
    pub fn new_book(&self) -> Result<NewBook, String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }
        let status = self.status.ok_or_else(|| "Select a status".to_string())?;

        let mut book = NewBook::new(self.title.trim(), status);
        if !self.author.trim().is_empty() {
            book.author = Some(self.author.trim().to_string());
        }
        if !self.genre.trim().is_empty() {
            book.genre = Some(self.genre.trim().to_string());
        }
        Ok(book)
    }
}

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current view
    pub view: View,
    /// Should quit
    pub should_quit: bool,
    /// The snapshot currently rendered in the library table
    books: Vec<Book>,
    /// Selected row in the snapshot
    pub selected: Option<usize>,
    /// Whether the snapshot is the full catalog or a search subset
    pub display: DisplayState,
    /// Search query
    pub search_query: String,
    /// True while the search bar has input focus
    pub search_active: bool,
    /// The add-book form
    pub form: AddForm,
    /// Status message
    pub status_message: Option<String>,
    /// Theme type
    pub theme: crate::theme::ThemeType,
}

impl AppState {
    /// Creates a new application state
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current view
    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Requests quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Sets a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clears the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Installs a new snapshot and display-state, keeping the selection in
    /// bounds
    pub fn set_books(&mut self, books: Vec<Book>, display: DisplayState) {
        self.books = books;
        self.display = display;
        self.selected = match self.selected {
            _ if self.books.is_empty() => None,
            Some(i) => Some(i.min(self.books.len() - 1)),
            None => Some(0),
        };
    }

    /// Returns the rendered snapshot
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the currently selected book
    pub fn selected_book(&self) -> Option<&Book> {
        self.selected.and_then(|i| self.books.get(i))
    }

    /// Selects the next row
    pub fn select_next(&mut self) {
        if self.books.is_empty() {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.books.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    /// Selects the previous row
    pub fn select_previous(&mut self) {
        if self.books.is_empty() {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i > 0 => i - 1,
            Some(i) => i,
            None => 0,
        });
    }

    /// Gives the search bar input focus
    pub fn begin_search(&mut self) {
        self.search_active = true;
    }

    /// Drops search input focus without touching the query
    pub fn end_search(&mut self) {
        self.search_active = false;
    }

    /// Clears the search query and focus
    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_active = false;
    }

    /// Cycles to the next theme
    pub fn next_theme(&mut self) {
        self.theme = self.theme.next();
    }
}
