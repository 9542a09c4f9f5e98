//! The calculator core: a small state machine over two operands and one
//! pending binary operator.
//!
//! - [`engine`]: [`CalculatorEngine`] and the operations that mutate it
//! - [`operator`]: the closed set of binary operators
//! - [`outcome`]: tagged evaluation results and number formatting
//! - [`display`]: the [`DisplaySink`] capability the engine renders into
//!
//! Evaluation is strictly left to right. There is no precedence and no
//! grouping: setting a second operator first folds the pending one.

pub mod display;
pub mod engine;
pub mod operator;
pub mod outcome;

pub use display::{DisplayBuffer, DisplaySink};
pub use engine::{CalculatorEngine, PendingOperation};
pub use operator::Operator;
pub use outcome::{format_number, parse_operand, Outcome, ERROR_TEXT};
