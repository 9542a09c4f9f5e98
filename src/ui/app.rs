//! Main TUI application state and logic

use crate::calculator::{CalculatorEngine, DisplayBuffer, Outcome, ERROR_TEXT};
use crate::input::{self, ButtonInputAdapter, KeyboardInputAdapter, Token};
use crate::ui::panes::{self, keypad, KeypadButton};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// How long a pressed button stays highlighted
const PRESS_FLASH: Duration = Duration::from_millis(150);

/// The main application state
pub struct App {
    /// The calculator, rendering into an in-memory display
    pub engine: CalculatorEngine<DisplayBuffer>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Button areas from the last draw, used for mouse hit-testing
    pub keypad: Vec<KeypadButton>,

    /// Last pressed button and when it was pressed
    pub pressed: Option<(&'static str, Instant)>,
}

impl App {
    pub fn new() -> Self {
        App {
            engine: CalculatorEngine::new(DisplayBuffer::new()),
            should_quit: false,
            status_message: String::from("Ready!"),
            keypad: Vec::new(),
            pressed: None,
        }
    }

    /// Text currently shown on the display
    pub fn display(&self) -> &str {
        self.engine.sink().text()
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so the press highlight can expire
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Display on top, keypad below, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        panes::render_display_pane(frame, chunks[0], self.display(), self.engine.pending());

        let pressed = self
            .pressed
            .filter(|(_, at)| at.elapsed() < PRESS_FLASH)
            .map(|(key, _)| key);
        self.keypad = panes::render_keypad_pane(frame, chunks[1], pressed);

        panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.display() == ERROR_TEXT,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            code => {
                if let Some(token) = KeyboardInputAdapter::from_key_code(code) {
                    self.press(token);
                }
            }
        }
    }

    /// Handle mouse events; only left clicks on keypad buttons do anything
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let token = keypad::hit_test(&self.keypad, mouse.column, mouse.row)
            .and_then(ButtonInputAdapter::translate);
        if let Some(token) = token {
            self.press(token);
        }
    }

    /// Feed one token to the engine and update the status line
    pub fn press(&mut self, token: Token) {
        let outcome = input::dispatch(&mut self.engine, token);
        self.pressed = Some((token.button_key(), Instant::now()));

        self.status_message = match (token, outcome) {
            (Token::Equals, Some(Outcome::DivisionByZeroError)) => "Division by zero".to_string(),
            (Token::Equals, Some(Outcome::Numeric(_))) => "Calculated".to_string(),
            (Token::Equals, None) => "Nothing to calculate".to_string(),
            (Token::Clear, _) => "Cleared".to_string(),
            (Token::Backspace, _) => "Deleted".to_string(),
            (Token::Operator(op), _) => format!("Operator {}", op),
            (Token::Digit(_) | Token::Point, _) => format!("Pressed {}", token.button_key()),
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
