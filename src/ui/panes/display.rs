//! Calculator display pane

use crate::calculator::{format_number, PendingOperation, ERROR_TEXT};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the display: the pending operation on the first line, the display
/// text right-aligned below it.
pub fn render_display_pane(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    pending: Option<PendingOperation>,
) {
    let block = Block::default()
        .title(" Display ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::horizontal(1));

    let indicator = match pending {
        Some(op) => format!("{} {}", format_number(op.lhs), op.operator),
        None => String::new(),
    };

    let value_style = if text == ERROR_TEXT {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::styled(indicator, Style::default().fg(DEFAULT_THEME.comment)),
        Line::styled(text.to_string(), value_style),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Right)
        .style(Style::default().bg(DEFAULT_THEME.bg));
    frame.render_widget(paragraph, area);
}
