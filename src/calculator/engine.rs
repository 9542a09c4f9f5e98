//! Calculator state machine
//!
//! [`CalculatorEngine`] accumulates operand text one keystroke at a time and
//! folds it into a running computation. The engine owns its [`DisplaySink`]
//! and pushes the current display text into it after each operation. A
//! [`CalculatorEngine::calculate`] with nothing to compute does not render.

use super::display::DisplaySink;
use super::operator::Operator;
use super::outcome::{parse_operand, Outcome};

/// Mutable state of a calculator session
#[derive(Debug, Clone, Default, PartialEq)]
struct CalculatorState {
    /// Text of the operand being typed (or the last result)
    current_input: String,
    /// Operand captured when the operator was set
    previous_value: Option<f64>,
    pending_operator: Option<Operator>,
    /// Next digit starts a new operand instead of extending this one
    awaiting_fresh_input: bool,
}

/// A captured left operand and the operator waiting for its right operand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    pub lhs: f64,
    pub operator: Operator,
}

/// Left-to-right calculator over two operands and one pending operator
#[derive(Debug)]
pub struct CalculatorEngine<S: DisplaySink> {
    state: CalculatorState,
    sink: S,
}

impl<S: DisplaySink> CalculatorEngine<S> {
    /// Create an engine in the cleared state rendering into `sink`.
    ///
    /// Nothing is rendered until the first operation.
    pub fn new(sink: S) -> Self {
        CalculatorEngine {
            state: CalculatorState::default(),
            sink,
        }
    }

    /// Current display text
    pub fn display(&self) -> &str {
        &self.state.current_input
    }

    pub fn is_awaiting_fresh_input(&self) -> bool {
        self.state.awaiting_fresh_input
    }

    /// The operation waiting for its second operand.
    ///
    /// `None` when no operator is pending, or when an operator was pressed
    /// before any operand was captured.
    pub fn pending(&self) -> Option<PendingOperation> {
        match (self.state.previous_value, self.state.pending_operator) {
            (Some(lhs), Some(operator)) => Some(PendingOperation { lhs, operator }),
            _ => None,
        }
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.pending_operator
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Append a digit or `.` to the operand being typed.
    ///
    /// A second `0` after a lone `0` and a second `.` are rejected; a nonzero
    /// digit after a lone `0` replaces it, so typing `0` `5` shows `5` rather
    /// than `05`. Rejected input still re-renders.
    /// Characters other than ASCII digits and `.` are ignored.
    pub fn append(&mut self, input: char) {
        if !input.is_ascii_digit() && input != '.' {
            return;
        }

        let state = &mut self.state;
        if state.awaiting_fresh_input {
            state.current_input.clear();
            state.awaiting_fresh_input = false;
        }

        let rejected = match input {
            '.' => state.current_input.contains('.'),
            '0' => state.current_input == "0",
            _ => false,
        };

        if !rejected {
            if state.current_input == "0" && input != '.' {
                state.current_input.clear();
            }
            state.current_input.push(input);
        }

        self.render();
    }

    /// Select the operator for the next calculation.
    ///
    /// If an operation is already pending and an operand has been typed, it is
    /// evaluated first and its result becomes the new left operand. With no
    /// operand text at all, the previously captured operand is kept.
    pub fn set_operator(&mut self, operator: Operator) {
        if self.state.pending_operator.is_some()
            && self.state.previous_value.is_some()
            && !self.state.current_input.is_empty()
        {
            self.calculate();
        }

        if !self.state.current_input.is_empty() {
            self.state.previous_value = Some(parse_operand(&self.state.current_input));
        }
        self.state.pending_operator = Some(operator);
        self.state.awaiting_fresh_input = true;

        self.render();
    }

    /// Apply the pending operator to the captured and current operands.
    ///
    /// Does nothing (and does not render) unless an operator, a captured
    /// operand and operand text are all present. Returns the outcome when a
    /// calculation took place.
    pub fn calculate(&mut self) -> Option<Outcome> {
        let state = &mut self.state;
        let (Some(operator), Some(lhs)) = (state.pending_operator, state.previous_value) else {
            return None;
        };
        if state.current_input.is_empty() {
            return None;
        }

        let rhs = parse_operand(&state.current_input);
        let outcome = operator.apply(lhs, rhs);

        state.current_input = outcome.to_string();
        state.previous_value = None;
        state.pending_operator = None;
        state.awaiting_fresh_input = true;

        self.render();
        Some(outcome)
    }

    /// Reset to the initial empty state
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
        self.render();
    }

    /// Delete the last character of the operand.
    ///
    /// Right after an operator or a result this clears the display instead,
    /// so the shown value is discarded rather than edited.
    pub fn backspace(&mut self) {
        if self.state.awaiting_fresh_input {
            self.state.current_input.clear();
            self.state.awaiting_fresh_input = false;
        } else {
            self.state.current_input.pop();
        }
        self.render();
    }

    fn render(&mut self) {
        self.sink.render(&self.state.current_input);
    }
}

impl<S: DisplaySink + Default> Default for CalculatorEngine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::display::DisplayBuffer;

    fn engine() -> CalculatorEngine<DisplayBuffer> {
        CalculatorEngine::new(DisplayBuffer::new())
    }

    #[test]
    fn test_operator_before_any_operand_captures_nothing() {
        let mut calc = engine();
        calc.set_operator(Operator::Add);
        assert_eq!(calc.pending_operator(), Some(Operator::Add));
        assert_eq!(calc.pending(), None);
        assert_eq!(calc.state.previous_value, None);
    }

    #[test]
    fn test_repeated_operator_keeps_first_operand() {
        let mut calc = engine();
        calc.append('7');
        calc.set_operator(Operator::Add);
        calc.backspace(); // clears the fresh-input operand text
        calc.set_operator(Operator::Mul);
        assert_eq!(
            calc.pending(),
            Some(PendingOperation {
                lhs: 7.0,
                operator: Operator::Mul
            })
        );
    }

    #[test]
    fn test_rejected_append_still_renders() {
        let mut calc = engine();
        calc.append('0');
        calc.append('0');
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.sink().render_count(), 2);
    }

    #[test]
    fn test_calculate_noop_does_not_render() {
        let mut calc = engine();
        calc.append('4');
        let before = calc.sink().render_count();
        assert_eq!(calc.calculate(), None);
        assert_eq!(calc.sink().render_count(), before);
    }

    #[test]
    fn test_non_digit_append_is_ignored() {
        let mut calc = engine();
        calc.append('x');
        assert_eq!(calc.display(), "");
        assert_eq!(calc.sink().render_count(), 0);
    }
}
