//! Rendering for the registration form

use crate::app::App;
use crate::state::{FieldKey, FormRow, ServerOutcome, LANGUAGE_CHOICES};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Create an Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Server banner
            Constraint::Length(3), // Username
            Constraint::Length(1), // Username error
            Constraint::Length(3), // Favorite language
            Constraint::Length(1), // Favorite language error
            Constraint::Length(3), // Favorite food
            Constraint::Length(1), // Favorite food error
            Constraint::Length(1), // Agreement
            Constraint::Length(1), // Agreement error
            Constraint::Length(3), // Submit
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let state = &app.state;
    let active = state.active_row;

    draw_banner(frame, chunks[0], &state.outcome);

    draw_text_field(
        frame,
        chunks[1],
        FieldKey::Username.label(),
        &state.fields.username,
        active == FormRow::Username,
    );
    draw_error(frame, chunks[2], state.errors.get(FieldKey::Username));

    draw_radio_field(
        frame,
        chunks[3],
        FieldKey::FavLanguage.label(),
        &state.fields.fav_language,
        active == FormRow::FavLanguage,
    );
    draw_error(frame, chunks[4], state.errors.get(FieldKey::FavLanguage));

    draw_select_field(
        frame,
        chunks[5],
        FieldKey::FavFood.label(),
        &state.fields.fav_food,
        active == FormRow::FavFood,
    );
    draw_error(frame, chunks[6], state.errors.get(FieldKey::FavFood));

    draw_checkbox(
        frame,
        chunks[7],
        "Agree to our terms",
        state.fields.agreement,
        active == FormRow::Agreement,
    );
    draw_error(frame, chunks[8], state.errors.get(FieldKey::Agreement));

    draw_submit(
        frame,
        chunks[9],
        state.submit_enabled,
        active == FormRow::Submit,
    );
}

/// Success or failure banner from the last submission attempt
fn draw_banner(frame: &mut Frame, area: Rect, outcome: &ServerOutcome) {
    let line = if let Some(message) = outcome.success_message() {
        Line::from(Span::styled(
            format!("✔ {message}"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    } else if let Some(message) = outcome.failure_message() {
        Line::from(Span::styled(
            format!("✘ {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        return;
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn value_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn draw_text_field(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    let cursor = if is_active { "▌" } else { "" };
    let display_value = if value.is_empty() && !is_active {
        Span::styled("Type Username", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(value, value_style(is_active))
    };

    let content = Paragraph::new(Line::from(vec![
        display_value,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(content.block(block), area);
}

fn draw_radio_field(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    let mut spans = vec![];
    for choice in LANGUAGE_CHOICES {
        let marker = if choice == value { "(•) " } else { "( ) " };
        let style = if choice == value {
            value_style(is_active).add_modifier(Modifier::BOLD)
        } else {
            value_style(is_active)
        };
        spans.push(Span::styled(format!("{marker}{choice}   "), style));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_select_field(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    let display = if value.is_empty() {
        Span::styled(
            "-- Select Favorite Food --",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(value, value_style(is_active))
    };

    let arrows = if is_active {
        Span::styled("  ◂ ▸", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("")
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(
        Paragraph::new(Line::from(vec![display, arrows])).block(block),
        area,
    );
}

fn draw_checkbox(frame: &mut Frame, area: Rect, label: &str, checked: bool, is_active: bool) {
    let marker = if checked { "[x] " } else { "[ ] " };
    let content = Paragraph::new(Line::from(Span::styled(
        format!("{marker}{label}"),
        value_style(is_active),
    )));
    frame.render_widget(content, area);
}

fn draw_submit(frame: &mut Frame, area: Rect, is_enabled: bool, is_active: bool) {
    let label_style = match (is_enabled, is_active) {
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Cyan),
        (false, _) => Style::default().fg(Color::DarkGray),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_active && is_enabled));

    let content = Paragraph::new(Line::from(Span::styled(" Submit ", label_style)))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(content, area);
}

/// Inline validation message under a field
fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    if message.is_empty() {
        return;
    }
    let content = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(Color::Red),
    )));
    frame.render_widget(content, area);
}
