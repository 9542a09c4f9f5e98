//! TUI pane rendering modules
//!
//! - [`display`]: the calculator display with the pending-operation indicator
//! - [`keypad`]: the clickable button grid and its hit-testing layout
//! - [`status`]: status bar with keybindings and the last action

pub mod display;
pub mod keypad;
pub mod status;

pub use display::render_display_pane;
pub use keypad::{render_keypad_pane, KeypadButton};
pub use status::render_status_bar;
