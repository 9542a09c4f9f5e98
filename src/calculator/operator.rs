//! Binary operators

use super::outcome::Outcome;
use std::fmt;

/// A binary operator awaiting its second operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// The ASCII symbol used on the keypad and keyboard
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Apply the operator as `lhs <op> rhs`.
    ///
    /// Dividing by exactly zero yields [`Outcome::DivisionByZeroError`]; every
    /// other combination (NaN operands included) is numeric.
    pub fn apply(self, lhs: f64, rhs: f64) -> Outcome {
        match self {
            Operator::Add => Outcome::Numeric(lhs + rhs),
            Operator::Sub => Outcome::Numeric(lhs - rhs),
            Operator::Mul => Outcome::Numeric(lhs * rhs),
            Operator::Div if rhs == 0.0 => Outcome::DivisionByZeroError,
            Operator::Div => Outcome::Numeric(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Operator::Add => '+',
            Operator::Sub => '−',
            Operator::Mul => '×',
            Operator::Div => '÷',
        };
        write!(f, "{}", glyph)
    }
}
