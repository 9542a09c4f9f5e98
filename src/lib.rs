//! # Introduction
//!
//! calctty is a keypad calculator for the terminal. Keystrokes and mouse clicks
//! on the keypad are translated into tokens and fed into a small state machine
//! that keeps two operands and one pending operator, evaluating strictly left
//! to right. The display is drawn with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Key / click → Input adapter → Token → CalculatorEngine → DisplaySink → TUI
//! ```
//!
//! 1. [`input`] — stateless adapters from key names, crossterm key codes and
//!    keypad button identifiers to [`input::Token`]s.
//! 2. [`calculator`] — the [`calculator::CalculatorEngine`] state machine, its
//!    operators, results and the [`calculator::DisplaySink`] it renders into.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use calctty::calculator::{CalculatorEngine, DisplayBuffer};
//! use calctty::input::{dispatch, parse_script};
//!
//! let mut engine = CalculatorEngine::new(DisplayBuffer::new());
//! for token in parse_script("6-2+1=") {
//!     dispatch(&mut engine, token);
//! }
//! assert_eq!(engine.sink().text(), "5");
//! ```

pub mod calculator;
pub mod error;
pub mod input;
pub mod ui;
