// Rendering and event handling tests for the terminal UI

use calctty::ui::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn draw(app: &mut App) -> Buffer {
    let backend = TestBackend::new(80, 30);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    let mut text = String::new();
    for row in buffer.content.chunks(width) {
        for cell in row {
            text.push_str(cell.symbol());
        }
        text.push('\n');
    }
    text
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_keyboard_drives_the_display() {
    let mut app = App::new();
    for code in [
        KeyCode::Char('4'),
        KeyCode::Char('*'),
        KeyCode::Char('2'),
        KeyCode::Enter,
    ] {
        app.handle_key_event(key(code));
    }
    assert_eq!(app.display(), "8");

    let text = buffer_text(&draw(&mut app));
    assert!(text.contains("Display"));
    assert!(text.contains("Calculated"));
}

#[test]
fn test_pending_operation_is_shown() {
    let mut app = App::new();
    app.handle_key_event(key(KeyCode::Char('7')));
    app.handle_key_event(key(KeyCode::Char('-')));

    let text = buffer_text(&draw(&mut app));
    assert!(text.contains("7 −"), "screen:\n{}", text);
}

#[test]
fn test_quit_keys() {
    let mut app = App::new();
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit);

    let mut app = App::new();
    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn test_mouse_clicks_press_keypad_buttons() {
    let mut app = App::new();
    draw(&mut app);

    let center = |key: &str| {
        let button = app
            .keypad
            .iter()
            .find(|b| b.key == key)
            .unwrap_or_else(|| panic!("button {} not laid out", key));
        (
            button.area.x + button.area.width / 2,
            button.area.y + button.area.height / 2,
        )
    };
    let presses: Vec<(u16, u16)> = ["9", "/", "0", "="].iter().map(|&k| center(k)).collect();

    for (column, row) in presses {
        app.handle_mouse_event(click(column, row));
    }
    assert_eq!(app.display(), "Error");

    let text = buffer_text(&draw(&mut app));
    assert!(text.contains("ERROR"));
    assert!(text.contains("Division by zero"));
}

#[test]
fn test_clicks_outside_the_keypad_are_ignored() {
    let mut app = App::new();
    draw(&mut app);
    app.handle_mouse_event(click(0, 0));
    assert_eq!(app.display(), "");
    assert_eq!(app.engine.sink().render_count(), 0);
}

#[test]
fn test_equals_with_nothing_pending_is_not_reported_as_a_calculation() {
    let mut app = App::new();
    app.handle_key_event(key(KeyCode::Char('5')));
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.display(), "5");
    assert_eq!(app.status_message, "Nothing to calculate");
}

#[test]
fn test_repeated_equals_after_division_by_zero() {
    let mut app = App::new();
    for c in ['9', '/', '0'] {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.status_message, "Division by zero");

    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.display(), "Error");
    assert_eq!(app.status_message, "Nothing to calculate");
}
