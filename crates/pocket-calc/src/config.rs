//! Calculator configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::display::DEFAULT_PRECISION;
use crate::core::{CalcError, CalcResult};

/// Largest precision accepted from a config file
pub const MAX_PRECISION: usize = 15;

/// What the equals button does with a zero divisor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionPolicy {
    /// Result silently becomes 0
    #[default]
    Suppress,
    /// Equals reports `CalcError::DivisionByZero`
    Error,
}

/// How the decimal button builds fractional values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecimalEntry {
    /// `current * 10 + 0.1`, applied only when the operand prints without a
    /// `.` in its debug form. Every ordinary value prints as `5.0`, so the
    /// press does nothing and `1 . 2` shows `12.00`.
    #[default]
    Legacy,
    /// Digits after the point fill successive fractional places
    Positional,
}

/// Calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Division-by-zero policy
    pub division: DivisionPolicy,
    /// Decimal entry scheme
    pub decimal_entry: DecimalEntry,
    /// Digits after the decimal point on the display
    pub precision: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            division: DivisionPolicy::Suppress,
            decimal_entry: DecimalEntry::Legacy,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set division policy
    #[must_use]
    pub const fn with_division(mut self, division: DivisionPolicy) -> Self {
        self.division = division;
        self
    }

    /// Set decimal entry scheme
    #[must_use]
    pub const fn with_decimal_entry(mut self, decimal_entry: DecimalEntry) -> Self {
        self.decimal_entry = decimal_entry;
        self
    }

    /// Set display precision
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Checks value ranges serde cannot express
    pub fn validate(&self) -> CalcResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(CalcError::config(format!(
                "precision {} exceeds maximum of {MAX_PRECISION}",
                self.precision
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CalcError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CalcError::config(format!("{}: {e}", path.display())))?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?config, "loaded calculator config");
        Ok(config)
    }
}
