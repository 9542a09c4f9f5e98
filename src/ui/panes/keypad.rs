//! Keypad pane rendering and hit-testing
//!
//! The keypad is laid out from [`KEYPAD_ROWS`]: rows share the height evenly
//! and each row shares its width evenly between its buttons, so a short row
//! gets wider buttons. [`layout`] is used both for drawing and for mapping a
//! mouse click back to a button identifier.

use crate::input::buttons::{BACKSPACE_KEY, CLEAR_KEY, KEYPAD_ROWS};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// A button identifier and the screen area it occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub key: &'static str,
    pub area: Rect,
}

impl KeypadButton {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }
}

/// Compute the area of every keypad button inside `area`
pub fn layout(area: Rect) -> Vec<KeypadButton> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, KEYPAD_ROWS.len() as u32); KEYPAD_ROWS.len()])
        .split(area);

    let mut buttons = Vec::new();
    for (row_area, keys) in rows.iter().zip(KEYPAD_ROWS.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, keys.len() as u32); keys.len()])
            .split(*row_area);
        for (cell, key) in cells.iter().zip(keys.iter()) {
            buttons.push(KeypadButton {
                key: *key,
                area: *cell,
            });
        }
    }
    buttons
}

/// Find the button under a terminal cell
pub fn hit_test(buttons: &[KeypadButton], column: u16, row: u16) -> Option<&'static str> {
    buttons
        .iter()
        .find(|button| button.contains(column, row))
        .map(|button| button.key)
}

fn key_color(key: &str) -> Color {
    match key {
        CLEAR_KEY | BACKSPACE_KEY => DEFAULT_THEME.control,
        "=" => DEFAULT_THEME.secondary,
        "+" | "-" | "*" | "/" => DEFAULT_THEME.operator,
        _ => DEFAULT_THEME.digit,
    }
}

/// Render the keypad and return the button areas for hit-testing.
///
/// `pressed` highlights the button with that identifier.
pub fn render_keypad_pane(
    frame: &mut Frame,
    area: Rect,
    pressed: Option<&str>,
) -> Vec<KeypadButton> {
    let outer = Block::default()
        .title(" Keypad ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let buttons = layout(inner);
    for button in &buttons {
        let is_pressed = pressed == Some(button.key);
        let border_style = if is_pressed {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.border_normal)
        };
        let bg = if is_pressed {
            DEFAULT_THEME.pressed_bg
        } else {
            DEFAULT_THEME.bg
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        // Center the label vertically inside the button border
        let label_row = button.area.height.saturating_sub(2) / 2;
        let mut lines = vec![Line::raw(""); label_row as usize];
        lines.push(Line::styled(
            button.key,
            Style::default()
                .fg(key_color(button.key))
                .add_modifier(Modifier::BOLD),
        ));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().bg(bg));
        frame.render_widget(paragraph, button.area);
    }

    buttons
}
