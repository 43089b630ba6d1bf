//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::FormRow;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form gets on large terminals
const FORM_MAX_WIDTH: u16 = 64;

/// Carve out the form area, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    center_horizontally(chunks[0], FORM_MAX_WIDTH)
}

fn center_horizontally(area: Rect, max_width: u16) -> Rect {
    if area.width <= max_width {
        return area;
    }
    let padding = (area.width - max_width) / 2;
    Rect {
        x: area.x + padding,
        width: max_width,
        ..area
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Form validity indicator
    let validity = if app.state.submit_enabled {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(validity);

    // Row-specific hints
    let hints = get_row_hints(&app.state.active_row);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused row
fn get_row_hints(row: &FormRow) -> &'static str {
    match row {
        FormRow::Username => "Type your username  Tab:next  Shift+Tab:prev",
        FormRow::FavLanguage | FormRow::FavFood => {
            "←/→:choose  Tab:next  Shift+Tab:prev"
        }
        FormRow::Agreement => "Space:toggle  Tab:next  Shift+Tab:prev",
        FormRow::Submit => "Enter:submit  Shift+Tab:prev",
    }
}
