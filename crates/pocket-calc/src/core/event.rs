//! Button events accepted by the calculator

use serde::{Deserialize, Serialize};

use super::{CalcError, CalcResult, Operation};

/// A validated digit button (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Every digit, in value order
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, rejecting values above 9
    pub fn new(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::InvalidDigit(value))
        }
    }

    /// Returns the digit value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the digit as an `f64` operand
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Returns the button label character
    #[must_use]
    pub fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// The four kinds of button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    /// Digit button
    Digit(Digit),
    /// Decimal point button
    Decimal,
    /// Operator button
    Operator(Operation),
    /// Equals button
    Equals,
}

impl InputEvent {
    /// Shorthand for a digit event
    pub fn digit(value: u8) -> CalcResult<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// Maps a key script character to its event.
    ///
    /// Accepts both ASCII and keypad glyphs for the operators.
    pub fn from_key(key: char) -> CalcResult<Self> {
        let event = match key {
            '0'..='9' => Self::Digit(Digit(key as u8 - b'0')),
            '.' => Self::Decimal,
            '+' => Self::Operator(Operation::Add),
            '-' | '−' => Self::Operator(Operation::Subtract),
            '*' | 'x' | '×' => Self::Operator(Operation::Multiply),
            '/' | '÷' => Self::Operator(Operation::Divide),
            '=' => Self::Equals,
            other => return Err(CalcError::UnknownKey(other)),
        };
        Ok(event)
    }

    /// Returns the keypad label for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_char().to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

/// Parses a key script such as `"7 + 3 ="` into events.
///
/// Whitespace is ignored; the first unknown character aborts the parse.
pub fn parse_keys(keys: &str) -> CalcResult<Vec<InputEvent>> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .map(InputEvent::from_key)
        .collect()
}
