//! Input translation
//!
//! Two stateless adapters turn raw input into [`Token`]s:
//!
//! - [`buttons`]: keypad button identifiers (mouse clicks on the keypad)
//! - [`keyboard`]: physical key names and crossterm key codes
//!
//! [`dispatch`] routes a token to the matching engine operation. Input that
//! neither adapter recognizes produces no token and is ignored.

pub mod buttons;
pub mod keyboard;

pub use buttons::ButtonInputAdapter;
pub use keyboard::KeyboardInputAdapter;

use crate::calculator::{CalculatorEngine, DisplaySink, Operator, Outcome};

const DIGIT_KEYS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A normalized unit of calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// An ASCII digit `0`-`9`
    Digit(char),
    Point,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

impl Token {
    /// Identifier of the keypad button that produces this token
    pub fn button_key(self) -> &'static str {
        match self {
            Token::Digit(d) => DIGIT_KEYS[d.to_digit(10).unwrap_or(0) as usize],
            Token::Point => ".",
            Token::Operator(Operator::Add) => "+",
            Token::Operator(Operator::Sub) => "-",
            Token::Operator(Operator::Mul) => "*",
            Token::Operator(Operator::Div) => "/",
            Token::Equals => "=",
            Token::Clear => buttons::CLEAR_KEY,
            Token::Backspace => buttons::BACKSPACE_KEY,
        }
    }
}

/// Run the engine operation a token stands for.
///
/// Returns the outcome when the token was `=` and a calculation took place.
pub fn dispatch<S: DisplaySink>(
    engine: &mut CalculatorEngine<S>,
    token: Token,
) -> Option<Outcome> {
    let outcome = match token {
        Token::Digit(d) => {
            engine.append(d);
            None
        }
        Token::Point => {
            engine.append('.');
            None
        }
        Token::Operator(op) => {
            engine.set_operator(op);
            None
        }
        Token::Equals => engine.calculate(),
        Token::Clear => {
            engine.clear();
            None
        }
        Token::Backspace => {
            engine.backspace();
            None
        }
    };
    if outcome.is_some_and(|o| o.is_error()) {
        tracing::warn!("division by zero");
    }
    tracing::debug!(?token, display = engine.display(), "dispatched");
    outcome
}

/// Translate a typed key sequence into tokens.
///
/// Each character goes through the keyboard adapter first; `C` and `←`, which
/// only exist on the keypad, fall back to the button adapter. Unknown
/// characters are skipped.
pub fn parse_script(script: &str) -> Vec<Token> {
    let mut buf = [0u8; 4];
    script
        .chars()
        .filter_map(|c| {
            let name: &str = c.encode_utf8(&mut buf);
            KeyboardInputAdapter::translate(name).or_else(|| ButtonInputAdapter::translate(name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_key_maps_back_to_the_same_token() {
        let tokens = [
            Token::Digit('0'),
            Token::Digit('9'),
            Token::Point,
            Token::Operator(Operator::Div),
            Token::Equals,
            Token::Clear,
            Token::Backspace,
        ];
        for token in tokens {
            assert_eq!(ButtonInputAdapter::translate(token.button_key()), Some(token));
        }
    }

    #[test]
    fn test_parse_script_mixes_keyboard_and_keypad_symbols() {
        assert_eq!(
            parse_script("1,5C←x="),
            vec![
                Token::Digit('1'),
                Token::Point,
                Token::Digit('5'),
                Token::Clear,
                Token::Backspace,
                Token::Equals,
            ]
        );
    }
}
