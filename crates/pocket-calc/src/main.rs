//! pocket-calc: immediate-execution calculator
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc run "2 × 5 = + 1 ="   # 11.00
//! pocket-calc tui                  # clickable keypad
//! ```

use std::process::ExitCode;

use clap::Parser;
use pocket_calc::cli::{run_keys, show_config, Cli, CliResult, Commands};
use pocket_calc::config::CalculatorConfig;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // stderr logging would draw over the TUI
    if !matches!(cli.command, Commands::Tui) {
        init_tracing(cli.log_level());
    }

    let config = cli.build_config()?;
    tracing::debug!(?config, "effective configuration");

    match &cli.command {
        Commands::Run(args) => run_keys(config, args, &mut std::io::stdout().lock()),
        Commands::Config => show_config(&config, &mut std::io::stdout().lock()),
        Commands::Tui => run_tui(config),
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "tui")]
fn run_tui(config: CalculatorConfig) -> CliResult<()> {
    use crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use pocket_calc::tui::{render, CalculatorApp, InputHandler};
    use ratatui::{backend::CrosstermBackend, Terminal};

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = CalculatorApp::with_config(config);
    let input_handler = InputHandler::new();
    let result = (|| -> CliResult<()> {
        while !app.should_quit() {
            terminal.draw(|f| render(&app, f))?;
            let event = event::read()?;
            let size = terminal.size()?;
            let frame_area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
            app.apply(input_handler.handle_event(&event), frame_area);
        }
        Ok(())
    })();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

#[cfg(not(feature = "tui"))]
fn run_tui(_config: CalculatorConfig) -> CliResult<()> {
    Err(pocket_calc::cli::CliError::invalid_argument(
        "TUI not enabled. Rebuild with --features tui",
    ))
}
