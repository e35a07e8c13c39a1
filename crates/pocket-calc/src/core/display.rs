//! Display formatting for the operand shown on screen

/// Digits after the decimal point on the display
pub const DEFAULT_PRECISION: usize = 2;

/// Formats `value` with exactly `precision` fractional digits
#[must_use]
pub fn format_display(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}
