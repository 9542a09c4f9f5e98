//! Process-level errors
//!
//! Calculator operations never fail; division by zero is a display value.
//! What can fail is the host around the engine: the terminal and the log file.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Terminal setup, drawing or event reading failed
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    /// The log file could not be opened for appending
    #[error("cannot open log file '{}': {source}", .path.display())]
    LogFile { path: PathBuf, source: io::Error },

    /// A global tracing subscriber was already installed
    #[error("cannot install log subscriber: {0}")]
    Logging(String),
}
