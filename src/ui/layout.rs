//! Layout components (content area, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom status bar line, returning the content area
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar with key hints and any transient message
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }
    let bar = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };

    let hint = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::styled("Tab", hint),
        Span::raw(": next field  "),
        Span::styled("Ctrl+S", hint),
        Span::raw(": submit  "),
        Span::styled("Ctrl+V", hint),
        Span::raw(": show/hide password  "),
        Span::styled("Esc", hint),
        Span::raw(": quit"),
    ];

    if let Some(ref message) = app.state.status_message {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, bar);
}
