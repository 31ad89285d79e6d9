//! Add-book form rendering

use crate::state::{AppState, FormField};
use booknest_core::BookStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the add view
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &crate::theme::Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Author
            Constraint::Length(3), // Genre
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
            Constraint::Min(0),
        ])
        .split(area);

    render_text_field(
        frame,
        chunks[0],
        FormField::Title,
        &state.form.title,
        state,
        theme,
    );
    render_text_field(
        frame,
        chunks[1],
        FormField::Author,
        &state.form.author,
        state,
        theme,
    );
    render_text_field(
        frame,
        chunks[2],
        FormField::Genre,
        &state.form.genre,
        state,
        theme,
    );
    render_status_field(frame, chunks[3], state, theme);
    render_form_help(frame, chunks[4], theme);
}

/// Renders one text input field
fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    field: FormField,
    value: &str,
    state: &AppState,
    theme: &crate::theme::Theme,
) {
    let focused = state.form.focus == field;
    let text = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };

    let title = match field {
        FormField::Title => "Title (required)",
        FormField::Author => "Author",
        FormField::Genre => "Genre",
        FormField::Status => "Status",
    };

    let input = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_border(focused, theme))
                .title(title),
        )
        .style(theme.text_style());

    frame.render_widget(input, area);
}

/// Renders the status selector
fn render_status_field(frame: &mut Frame, area: Rect, state: &AppState, theme: &crate::theme::Theme) {
    let focused = state.form.focus == FormField::Status;

    let mut spans = Vec::new();
    for status in BookStatus::all() {
        let style = if state.form.status == Some(status) {
            theme.highlight_style()
        } else {
            theme.text_secondary_style()
        };
        let marker = if state.form.status == Some(status) {
            "(•) "
        } else {
            "( ) "
        };
        spans.push(Span::styled(format!("{}{}", marker, status), style));
        spans.push(Span::raw("   "));
    }
    if state.form.status.is_none() {
        spans.push(Span::styled("— select one", theme.text_secondary_style()));
    }

    let selector = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_border(focused, theme))
                .title("Status (required, Space to change)"),
        )
        .style(theme.text_style());

    frame.render_widget(selector, area);
}

/// Renders the form key help
fn render_form_help(frame: &mut Frame, area: Rect, theme: &crate::theme::Theme) {
    let help = Paragraph::new("Tab: Next field | Shift+Tab: Previous | Enter: Save | Esc: Back")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color())),
        )
        .style(theme.text_secondary_style());

    frame.render_widget(help, area);
}

fn field_border(focused: bool, theme: &crate::theme::Theme) -> Style {
    if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border_color())
    }
}
