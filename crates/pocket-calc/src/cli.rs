//! Command-line interface
//!
//! ```bash
//! pocket-calc run "7 + 3 ="           # prints 10.00
//! pocket-calc --strict-division run 6/0=
//! pocket-calc --config calc.json tui  # clickable keypad
//! pocket-calc config                  # effective configuration as JSON
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::{CalculatorConfig, DecimalEntry, DivisionPolicy};
use crate::core::{parse_keys, CalcError, Calculator};

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Calculator error
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Immediate-execution four-function calculator
#[derive(Parser, Debug)]
#[command(name = "pocket-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Report division by zero instead of showing 0
    #[arg(long, global = true)]
    pub strict_division: bool,

    /// Type digits after the decimal point into fractional places
    #[arg(long, global = true)]
    pub positional_decimal: bool,

    /// Digits after the decimal point on the display
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of buttons and print the display
    Run(RunArgs),

    /// Open the clickable terminal keypad
    Tui,

    /// Print the effective configuration
    Config,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Buttons to press: 0-9 . + - * / = (also × ÷ x); whitespace is ignored
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the display after every press
    #[arg(long)]
    pub steps: bool,
}

impl Cli {
    /// Returns the tracing filter directive for the chosen verbosity
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Builds the configuration: file first, then flag overrides
    pub fn build_config(&self) -> CliResult<CalculatorConfig> {
        let mut config = match &self.config {
            Some(path) => CalculatorConfig::load(path)?,
            None => CalculatorConfig::default(),
        };
        if self.strict_division {
            config = config.with_division(DivisionPolicy::Error);
        }
        if self.positional_decimal {
            config = config.with_decimal_entry(DecimalEntry::Positional);
        }
        if let Some(precision) = self.precision {
            config = config.with_precision(precision);
        }
        config
            .validate()
            .map_err(|e| CliError::invalid_argument(e.to_string()))?;
        Ok(config)
    }
}

/// Presses `args.keys` on a fresh calculator and writes the display to `out`
pub fn run_keys(config: CalculatorConfig, args: &RunArgs, out: &mut impl Write) -> CliResult<()> {
    let keys = args.keys.join(" ");
    let events = parse_keys(&keys)?;
    let mut calc = Calculator::with_config(config);
    for event in events {
        calc.handle(event)?;
        if args.steps {
            writeln!(out, "{:>3}  {}", event.label(), calc.display())?;
        }
    }
    if !args.steps {
        writeln!(out, "{}", calc.display())?;
    }
    Ok(())
}

/// Writes the configuration as pretty JSON to `out`
pub fn show_config(config: &CalculatorConfig, out: &mut impl Write) -> CliResult<()> {
    let json = serde_json::to_string_pretty(config)?;
    writeln!(out, "{json}")?;
    Ok(())
}
