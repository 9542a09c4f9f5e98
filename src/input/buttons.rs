//! Keypad button identifiers

use super::Token;
use crate::calculator::Operator;

pub const CLEAR_KEY: &str = "C";
pub const BACKSPACE_KEY: &str = "←";

/// Keypad rows, top to bottom, as button identifiers
pub const KEYPAD_ROWS: [&[&str]; 5] = [
    &[CLEAR_KEY, BACKSPACE_KEY, "/", "*"],
    &["7", "8", "9", "-"],
    &["4", "5", "6", "+"],
    &["1", "2", "3", "="],
    &["0", "."],
];

/// Maps keypad button identifiers to tokens
pub struct ButtonInputAdapter;

impl ButtonInputAdapter {
    pub fn translate(key: &str) -> Option<Token> {
        let mut chars = key.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        match c {
            '0'..='9' => Some(Token::Digit(c)),
            '.' => Some(Token::Point),
            '=' => Some(Token::Equals),
            'C' => Some(Token::Clear),
            '←' => Some(Token::Backspace),
            _ => Operator::from_symbol(c).map(Token::Operator),
        }
    }
}
