//! Help view rendering

use crate::state::AppState;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the help view
pub fn render(frame: &mut Frame, area: Rect, _state: &AppState, theme: &crate::theme::Theme) {
    let entry = |key: &str, action: &str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", key), theme.highlight_style()),
            Span::styled(action.to_string(), theme.text_style()),
        ])
    };

    let content = vec![
        Line::from(Span::styled("Library", theme.accent_style())),
        entry("↑/↓, j/k", "Move the selection"),
        entry("a", "Open the add-book form"),
        entry("d", "Delete the selected book"),
        entry("f, Enter", "Mark the selected book finished"),
        entry("/", "Focus the search bar"),
        entry("Esc", "Clear the search and show all books"),
        entry("t", "Cycle the color theme"),
        Line::from(""),
        Line::from(Span::styled("Search", theme.accent_style())),
        entry("Enter", "Apply the query (matches title or author)"),
        entry("Esc", "Cancel and show all books"),
        Line::from(""),
        Line::from(Span::styled("Add form", theme.accent_style())),
        entry("Tab", "Next field"),
        entry("Shift+Tab", "Previous field"),
        entry("Space", "Change the status selection"),
        entry("Enter", "Save the book"),
        entry("Esc", "Back to the library"),
        Line::from(""),
        Line::from(Span::styled("Anywhere", theme.accent_style())),
        entry("q", "Quit (outside text input)"),
        entry("Ctrl+C", "Quit"),
    ];

    let help = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color()))
                .title("Help"),
        )
        .style(theme.text_style());

    frame.render_widget(help, area);
}
