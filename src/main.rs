// calctty: keypad calculator for the terminal

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use calctty::calculator::{CalculatorEngine, DisplayBuffer};
use calctty::error::AppError;
use calctty::input;
use calctty::ui::App;

/// Keypad calculator for the terminal
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Feed this key sequence without opening the UI and print the final display
    /// (e.g. "12*3=", use C to clear and ← to delete)
    #[arg(long, value_name = "SEQUENCE", allow_hyphen_values = true)]
    keys: Option<String>,

    /// Append logs to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Do not capture mouse events (keypad clicks are ignored)
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.keys {
        Some(ref keys) => {
            init_logging(cli.log_file.as_ref(), true)?;
            run_headless(keys);
            Ok(())
        }
        None => {
            init_logging(cli.log_file.as_ref(), false)?;
            run_tui(!cli.no_mouse)
        }
    }
}

/// Install the tracing subscriber.
///
/// The UI owns the terminal, so without a log file nothing is installed there.
/// Headless runs log to stderr by default.
fn init_logging(log_file: Option<&PathBuf>, headless: bool) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| AppError::LogFile {
                    path: path.clone(),
                    source,
                })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if headless => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
        None => return Ok(()),
    };

    result.map_err(|e| AppError::Logging(e.to_string()))
}

fn run_headless(keys: &str) {
    let mut engine = CalculatorEngine::new(DisplayBuffer::new());
    for token in input::parse_script(keys) {
        input::dispatch(&mut engine, token);
    }
    println!("{}", engine.sink().text());
}

fn run_tui(mouse: bool) -> Result<(), AppError> {
    tracing::info!(mouse, "starting terminal UI");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = res {
        tracing::error!(error = %err, "event loop failed");
    }
    res.map_err(AppError::from)
}
