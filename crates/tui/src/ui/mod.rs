//! UI rendering modules

pub mod add;
pub mod help;
pub mod library;

use crate::{
    state::{AppState, DisplayState, View},
    theme::Theme,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Renders the main UI
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, chunks[0], state, theme);
    render_content(frame, chunks[1], state, theme);
    render_status_bar(frame, chunks[2], state, theme);
}

/// Renders the tab bar
fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let titles = vec!["Library", "Add", "Help"];
    let index = match state.view {
        View::Library => 0,
        View::Add => 1,
        View::Help => 2,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color()))
                .title("📚 BookNest"),
        )
        .select(index)
        .style(theme.text_style())
        .highlight_style(theme.highlight_style());

    frame.render_widget(tabs, area);
}

/// Renders the current view content
fn render_content(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    match state.view {
        View::Library => library::render(frame, area, state, theme),
        View::Add => add::render(frame, area, state, theme),
        View::Help => help::render(frame, area, state, theme),
    }
}

/// Renders the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let status_text = if let Some(ref msg) = state.status_message {
        msg.clone()
    } else {
        match state.view {
            View::Library => {
                "q: Quit | a: Add | d: Delete | f: Finish | /: Search | t: Theme | h: Help"
                    .to_string()
            }
            View::Add => "Tab: Next field | Enter: Save | Esc: Back".to_string(),
            View::Help => "Esc: Back".to_string(),
        }
    };

    let indicator = Style::default().fg(match state.display {
        DisplayState::Filtered => theme.accent,
        DisplayState::Full => theme.text_secondary,
    });

    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ● ", indicator),
        Span::styled(status_text, theme.text_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color())),
    );

    frame.render_widget(status, area);
}
