//! Pocket Calculator - immediate-execution four-function calculator
//!
//! A numeric display and a grid of buttons. Each press is handled to
//! completion by a small state machine; there is no expression parsing and
//! no operator precedence. In `7 + 3 × 2 =` the `×` press replaces the
//! pending `+` and takes `3` as its left operand, so the result is `6`.
//!
//! The state machine ([`core::Calculator`]) is pure: events in, display
//! string out. The [`tui`] module renders it with a clickable keypad and the
//! [`driver`] module lets the same scenarios run against either.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for event in parse_keys("7 + 3 =").unwrap() {
//!     calc.handle(event).unwrap();
//! }
//! assert_eq!(calc.display(), "10.00");
//!
//! // Division by zero is silently 0 unless configured otherwise
//! let strict = CalculatorConfig::new().with_division(DivisionPolicy::Error);
//! let mut calc = Calculator::with_config(strict);
//! for event in parse_keys("6 ÷ 0").unwrap() {
//!     calc.handle(event).unwrap();
//! }
//! assert_eq!(calc.handle(InputEvent::Equals), Err(CalcError::DivisionByZero));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, DecimalEntry, DivisionPolicy};
    pub use crate::core::{
        format_display, parse_keys, CalcError, CalcResult, Calculator, Digit, EntryState,
        InputEvent, Operation,
    };
    pub use crate::driver::{CalculatorDriver, MachineDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
