//! Immediate-execution calculator state machine
//!
//! Four cells of state and four button handlers. There is no expression
//! tree and no precedence: an operator press captures the displayed value
//! as the left operand, and equals applies the pending operator to it and
//! whatever has been typed since.
//!
//! ```text
//!           digit / decimal*
//!   Idle ───────────────────▶ Entering ──┐ digit / decimal
//!    ▲                           │  ◀────┘
//!    └──── operator / equals ────┘
//! ```
//! (*) a legacy decimal press never leaves Idle.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::{format_display, CalcError, CalcResult, Digit, InputEvent, Operation};
use crate::config::{CalculatorConfig, DecimalEntry, DivisionPolicy, MAX_PRECISION};

/// Fractional digits kept by positional entry; further digits are ignored
const MAX_FRACTION_DIGITS: u32 = 15;

/// Whether the next digit extends the current operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryState {
    /// Next digit starts a fresh number
    Idle,
    /// Next digit is appended to the current number
    Entering,
}

/// The calculator state machine
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    current: f64,
    stored: f64,
    pending: Option<Operation>,
    entering: bool,
    /// Digits typed after the point; positional entry only
    fraction_digits: Option<u32>,
    config: CalculatorConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with the default policies
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator with custom policies.
    ///
    /// A precision above [`MAX_PRECISION`] is clamped to it.
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        let config = config.with_precision(config.precision.min(MAX_PRECISION));
        Self {
            current: 0.0,
            stored: 0.0,
            pending: None,
            entering: false,
            fraction_digits: None,
            config,
        }
    }

    /// Returns the operand being typed or displayed
    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Returns the left operand captured by the last operator press
    #[must_use]
    pub fn stored(&self) -> f64 {
        self.stored
    }

    /// Returns the operator awaiting equals, if any
    #[must_use]
    pub fn pending(&self) -> Option<Operation> {
        self.pending
    }

    /// Returns the entry state
    #[must_use]
    pub fn state(&self) -> EntryState {
        if self.entering {
            EntryState::Entering
        } else {
            EntryState::Idle
        }
    }

    /// Returns the active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the current operand formatted for the display
    #[must_use]
    pub fn display(&self) -> String {
        format_display(self.current, self.config.precision)
    }

    /// Restores every cell to its default, keeping the configuration
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
        trace!("calculator reset");
    }

    /// Dispatches a button event.
    ///
    /// Only equals can fail, and only under `DivisionPolicy::Error`.
    pub fn handle(&mut self, event: InputEvent) -> CalcResult<()> {
        match event {
            InputEvent::Digit(d) => self.press_digit(d),
            InputEvent::Decimal => self.press_decimal(),
            InputEvent::Operator(op) => self.press_operator(op),
            InputEvent::Equals => self.press_equals()?,
        }
        trace!(
            ?event,
            current = self.current,
            stored = self.stored,
            pending = ?self.pending,
            entering = self.entering,
            "handled event"
        );
        Ok(())
    }

    /// Digit button
    pub fn press_digit(&mut self, digit: Digit) {
        let d = digit.as_f64();
        if !self.entering {
            self.current = d;
            self.entering = true;
            self.fraction_digits = None;
            return;
        }

        match self.fraction_digits {
            Some(k) if k < MAX_FRACTION_DIGITS => {
                let k = k + 1;
                let scale = 10f64.powi(k as i32);
                self.current = (self.current * scale + d).round() / scale;
                self.fraction_digits = Some(k);
            }
            Some(_) => {}
            None => self.current = self.current * 10.0 + d,
        }
    }

    /// Decimal point button
    pub fn press_decimal(&mut self) {
        match self.config.decimal_entry {
            DecimalEntry::Legacy => {
                // `Debug` keeps the `.0` on integral values, so this only
                // fires for exponent forms like `1e16`
                if format!("{:?}", self.current).contains('.') {
                    return;
                }
                self.current = self.current * 10.0 + 0.1;
            }
            DecimalEntry::Positional => {
                if self.fraction_digits.is_some() {
                    return;
                }
                if !self.entering {
                    self.current = 0.0;
                    self.entering = true;
                }
                self.fraction_digits = Some(0);
            }
        }
    }

    /// Operator button
    pub fn press_operator(&mut self, op: Operation) {
        self.stored = self.current;
        self.current = 0.0;
        self.pending = Some(op);
        self.entering = false;
        self.fraction_digits = None;
    }

    /// Equals button; a no-op when no operator is pending
    pub fn press_equals(&mut self) -> CalcResult<()> {
        let Some(op) = self.pending.take() else {
            return Ok(());
        };
        self.entering = false;
        self.fraction_digits = None;

        let (lhs, rhs) = (self.stored, self.current);
        if let Some(result) = op.apply(lhs, rhs) {
            debug!(lhs, %op, rhs, result, "evaluated");
            self.current = result;
            return Ok(());
        }

        self.current = 0.0;
        match self.config.division {
            DivisionPolicy::Suppress => {
                warn!(lhs, "division by zero suppressed to 0");
                Ok(())
            }
            DivisionPolicy::Error => {
                warn!(lhs, "division by zero");
                Err(CalcError::DivisionByZero)
            }
        }
    }
}
