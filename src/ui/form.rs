//! Registration form rendering (fields, messages, buttons)

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{FieldKind, Form, FormField, BUTTON_RESET, BUTTON_SUBMIT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered input box plus one message line
const FIELD_HEIGHT: u16 = 4;

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Registration Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let form = &app.state.form;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // firstName / lastName
            Constraint::Length(FIELD_HEIGHT), // email / username
            Constraint::Length(FIELD_HEIGHT), // password / phoneNumber
            Constraint::Length(FIELD_HEIGHT), // panNumber / aadharNumber
            Constraint::Length(FIELD_HEIGHT), // country / city
            Constraint::Length(BUTTON_HEIGHT), // buttons row
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    for row in 0..5 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row]);

        for col in 0..2 {
            let index = row * 2 + col;
            if let Some(field) = form.get_field(index) {
                draw_field(
                    frame,
                    cols[col],
                    field,
                    form.active_field_index == index,
                    form.show_password,
                );
            }
        }
    }

    draw_buttons(frame, rows[5], app);
}

/// Draw one field: bordered value box with its validation message below
fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    reveal_secret: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let accent = Style::default().fg(Color::Cyan);

    let display_value = field.display_value(reveal_secret);

    let content = if field.kind == FieldKind::Select {
        let shown = if display_value.is_empty() {
            format!("Select {}", field.label())
        } else {
            display_value
        };
        if is_active {
            Line::from(vec![
                Span::styled("◂ ", accent),
                Span::styled(shown, style),
                Span::styled(" ▸", accent),
            ])
        } else {
            Line::from(Span::styled(shown, style))
        }
    } else {
        let shown = if display_value.is_empty() && !is_active {
            "(empty)".to_string()
        } else {
            display_value
        };
        let cursor = if is_active { "▌" } else { "" };
        Line::from(vec![
            Span::styled(shown, style),
            Span::styled(cursor, accent),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(style);
    frame.render_widget(Paragraph::new(content).block(block), chunks[0]);

    if !field.message.is_empty() {
        let message = Paragraph::new(Span::styled(
            field.message.clone(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(message, chunks[1]);
    }
}

/// Draw the centered Reset / Submit buttons
fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let on_buttons = form.is_buttons_row_active();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(11), // Reset
            Constraint::Length(2),
            Constraint::Length(12), // Submit
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        chunks[1],
        "Reset",
        on_buttons && form.selected_button == BUTTON_RESET,
    );
    render_button(
        frame,
        chunks[3],
        "Submit",
        on_buttons && form.selected_button == BUTTON_SUBMIT,
    );
}
