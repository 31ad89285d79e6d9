//! Library view rendering

use crate::state::{AppState, DisplayState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Column widths for author, genre, and status; title gets the rest
const AUTHOR_WIDTH: usize = 24;
const GENRE_WIDTH: usize = 14;
const STATUS_WIDTH: usize = 10;

/// Renders the library view
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &crate::theme::Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Column header
            Constraint::Min(0),    // Book list
            Constraint::Length(3), // Info
        ])
        .split(area);

    render_search_bar(frame, chunks[0], state, theme);
    render_header(frame, chunks[1], theme);
    render_book_list(frame, chunks[2], state, theme);
    render_library_info(frame, chunks[3], state, theme);
}

/// Renders the search input
fn render_search_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &crate::theme::Theme) {
    let text = if state.search_active {
        format!("🔍 {}_", state.search_query)
    } else {
        format!("🔍 {}", state.search_query)
    };

    let border = if state.search_active {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border_color())
    };

    let input = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title("Search (title or author)"),
        )
        .style(theme.text_style());

    frame.render_widget(input, area);
}

/// Renders the column header
fn render_header(frame: &mut Frame, area: Rect, theme: &crate::theme::Theme) {
    let title_width = title_column_width(area.width);
    let header = Paragraph::new(Line::from(Span::styled(
        format!(
            "  {} {} {} {}",
            fit("Title", title_width),
            fit("Author", AUTHOR_WIDTH),
            fit("Genre", GENRE_WIDTH),
            fit("Status", STATUS_WIDTH),
        ),
        theme.text_secondary_style(),
    )));

    frame.render_widget(header, area);
}

/// Renders the book table
fn render_book_list(frame: &mut Frame, area: Rect, state: &AppState, theme: &crate::theme::Theme) {
    let title_width = title_column_width(area.width);

    let items: Vec<ListItem> = state
        .books()
        .iter()
        .enumerate()
        .map(|(i, book)| {
            let row_style = if Some(i) == state.selected {
                theme.highlight_style()
            } else {
                theme.text_style()
            };
            let status_style = if Some(i) == state.selected {
                theme.highlight_style()
            } else if book.is_finished() {
                Style::default().fg(theme.finished)
            } else {
                Style::default().fg(theme.reading)
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(
                        "  {} {} {} ",
                        fit(&book.title, title_width),
                        fit(book.author.as_deref().unwrap_or("—"), AUTHOR_WIDTH),
                        fit(book.genre.as_deref().unwrap_or("—"), GENRE_WIDTH),
                    ),
                    row_style,
                ),
                Span::styled(book.status.to_string(), status_style),
            ]))
        })
        .collect();

    let title = match state.display {
        DisplayState::Full => format!("📖 Books ({})", state.books().len()),
        DisplayState::Filtered => format!(
            "📖 Books ({} matching \"{}\")",
            state.books().len(),
            state.search_query
        ),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color()))
                .title(title),
        )
        .style(theme.text_style());

    frame.render_widget(list, area);
}

/// Renders library information
fn render_library_info(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    theme: &crate::theme::Theme,
) {
    let finished = state.books().iter().filter(|b| b.is_finished()).count();
    let reading = state.books().len() - finished;

    let info = Paragraph::new(vec![Line::from(vec![
        Span::styled("Reading: ", theme.text_secondary_style()),
        Span::styled(reading.to_string(), theme.accent_style()),
        Span::raw("  |  "),
        Span::styled("Finished: ", theme.text_secondary_style()),
        Span::styled(finished.to_string(), theme.success_style()),
        Span::raw("  |  "),
        Span::styled("View: ", theme.text_secondary_style()),
        Span::styled(
            match state.display {
                DisplayState::Full => "all books",
                DisplayState::Filtered => "search results",
            },
            theme.text_style(),
        ),
    ])])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color()))
            .title("Info"),
    )
    .style(theme.text_style());

    frame.render_widget(info, area);
}

/// Width left for the title column after the fixed columns
fn title_column_width(total: u16) -> usize {
    let fixed = AUTHOR_WIDTH + GENRE_WIDTH + STATUS_WIDTH + 6;
    (total as usize).saturating_sub(fixed).max(12)
}

/// Pads or truncates text to exactly the given display width
fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        let mut out = text.to_string();
        out.extend(std::iter::repeat(' ').take(width - text_width));
        return out;
    }

    // Truncate, leaving room for the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.to_string().width();
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    while used < width {
        out.push(' ');
        used += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_short_text() {
        assert_eq!(fit("ab", 5), "ab   ");
    }

    #[test]
    fn test_fit_truncates_long_text() {
        let out = fit("a very long book title", 8);
        assert_eq!(out.width(), 8);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_fit_exact_width() {
        assert_eq!(fit("abcde", 5), "abcde");
    }

    #[test]
    fn test_title_column_width_has_floor() {
        assert!(title_column_width(10) >= 12);
    }
}
