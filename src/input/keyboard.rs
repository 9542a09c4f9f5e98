//! Physical keyboard mapping

use super::Token;
use crate::calculator::Operator;
use crossterm::event::KeyCode;

/// Maps key names to tokens
///
/// Key names follow the usual keydown naming: single characters for printable
/// keys, `Enter`, `Backspace` and `Escape` for the rest. A `,` is accepted as
/// a decimal separator.
pub struct KeyboardInputAdapter;

impl KeyboardInputAdapter {
    pub fn translate(key: &str) -> Option<Token> {
        match key {
            "Enter" | "=" => return Some(Token::Equals),
            "Backspace" => return Some(Token::Backspace),
            "Escape" => return Some(Token::Clear),
            _ => {}
        }

        let mut chars = key.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        match c {
            '0'..='9' => Some(Token::Digit(c)),
            '.' | ',' => Some(Token::Point),
            _ => Operator::from_symbol(c).map(Token::Operator),
        }
    }

    /// Translate a crossterm key code
    pub fn from_key_code(code: KeyCode) -> Option<Token> {
        match code {
            KeyCode::Enter => Self::translate("Enter"),
            KeyCode::Backspace => Self::translate("Backspace"),
            KeyCode::Esc => Self::translate("Escape"),
            KeyCode::Char(c) => {
                let mut buf = [0u8; 4];
                Self::translate(c.encode_utf8(&mut buf))
            }
            _ => None,
        }
    }
}
