//! Core calculator: button events in, display value out
//!
//! The state machine in [`machine`] is the only stateful piece. Everything
//! else in the crate (drivers, TUI, CLI) feeds it [`InputEvent`]s and reads
//! back [`Calculator::display`].

pub mod display;
pub mod event;
pub mod machine;
mod operations;

pub use display::format_display;
pub use event::{parse_keys, Digit, InputEvent};
pub use machine::{Calculator, EntryState};
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero, only reported under `DivisionPolicy::Error`
    #[error("Division by zero")]
    DivisionByZero,
    /// A digit button outside 0-9
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),
    /// A key script character with no matching button
    #[error("Unknown key: {0:?}")]
    UnknownKey(char),
    /// A driver could not click the keypad button for an event
    #[error("No clickable keypad button for {0:?}")]
    MissedClick(String),
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CalcError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
