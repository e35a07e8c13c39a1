//! Unified calculator drivers
//!
//! **Write the scenario once, run it against every front end.** A driver is
//! anything that accepts button presses and shows a display string. The
//! `verify_*` functions below are the shared scenarios; the headless driver
//! and the TUI driver must agree on all of them.

use crate::config::CalculatorConfig;
use crate::core::{parse_keys, CalcError, CalcResult, Calculator, InputEvent};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocket_calc::driver::{CalculatorDriver, MachineDriver};
///
/// let mut driver = MachineDriver::new();
/// driver.enter_keys("7 + 3 =").unwrap();
/// assert_eq!(driver.display(), "10.00");
/// ```
pub trait CalculatorDriver {
    /// Presses a single button
    fn press(&mut self, event: InputEvent) -> CalcResult<()>;

    /// Returns the display string
    fn display(&self) -> String;

    /// Returns the calculator to its initial state
    fn reset(&mut self);

    /// Presses every button in a key script, stopping at the first error
    fn enter_keys(&mut self, keys: &str) -> CalcResult<()> {
        for event in parse_keys(keys)? {
            self.press(event)?;
        }
        Ok(())
    }
}

/// Headless driver over the bare state machine
#[derive(Debug, Default)]
pub struct MachineDriver {
    calculator: Calculator,
}

impl MachineDriver {
    /// Creates a headless driver with default policies
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a headless driver with custom policies
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config),
        }
    }

    /// Returns the underlying state machine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for MachineDriver {
    fn press(&mut self, event: InputEvent) -> CalcResult<()> {
        self.calculator.handle(event)
    }

    fn display(&self) -> String {
        self.calculator.display()
    }

    fn reset(&mut self) {
        self.calculator.reset();
    }
}

/// TUI driver: presses are mouse clicks on the rendered keypad
#[cfg(feature = "tui")]
pub mod tui_driver {
    use ratatui::layout::Rect;

    use super::{CalcError, CalcResult, CalculatorDriver, InputEvent};
    use crate::config::CalculatorConfig;
    use crate::tui::{keypad_area, CalculatorApp};

    /// Frame size the driver clicks into
    const FRAME: Rect = Rect {
        x: 0,
        y: 0,
        width: 40,
        height: 30,
    };

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug)]
    pub struct TuiDriver {
        app: CalculatorApp,
        frame: Rect,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::with_app(CalculatorApp::default())
        }
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with custom policies
        #[must_use]
        pub fn with_config(config: CalculatorConfig) -> Self {
            Self::with_app(CalculatorApp::with_config(config))
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app, frame: FRAME }
        }

        /// Clicks into a frame of a different size
        #[must_use]
        pub const fn with_frame(mut self, frame: Rect) -> Self {
            self.frame = frame;
            self
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, event: InputEvent) -> CalcResult<()> {
            let keypad = self.app.keypad();
            let target = keypad
                .find_button(event)
                .and_then(|index| keypad.button_center(keypad_area(self.frame), index));
            target
                .and_then(|(x, y)| self.app.click(self.frame, x, y))
                .unwrap_or_else(|| Err(CalcError::MissedClick(event.label())))
        }

        fn display(&self) -> String {
            self.app.display()
        }

        fn reset(&mut self) {
            self.app.reset();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Scenarios =====
// These work with ANY CalculatorDriver implementation

/// Digits typed from idle concatenate into an integer
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.enter_keys("123"), Ok(()));
    assert_eq!(driver.display(), "123.00");

    driver.reset();
    assert_eq!(driver.enter_keys("9087"), Ok(()));
    assert_eq!(driver.display(), "9087.00");
}

/// One scenario per operator
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [
        ("7+3=", "10.00"),
        ("10-4=", "6.00"),
        ("3-5=", "-2.00"),
        ("6×7=", "42.00"),
        ("20÷8=", "2.50"),
    ] {
        driver.reset();
        assert_eq!(driver.enter_keys(keys), Ok(()), "keys {keys}");
        assert_eq!(driver.display(), expected, "keys {keys}");
    }
}

/// Division by zero shows 0 under the default policy
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.enter_keys("6÷0="), Ok(()));
    assert_eq!(driver.display(), "0.00");

    // nothing typed after the operator
    driver.reset();
    assert_eq!(driver.enter_keys("6÷="), Ok(()));
    assert_eq!(driver.display(), "0.00");
}

/// Division by zero is reported under the error policy
pub fn verify_division_by_zero_reported<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.enter_keys("6÷0="), Err(CalcError::DivisionByZero));
    assert_eq!(driver.display(), "0.00");
}

/// An operator after equals continues from the result
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.enter_keys("2×5="), Ok(()));
    assert_eq!(driver.display(), "10.00");
    assert_eq!(driver.enter_keys("+1="), Ok(()));
    assert_eq!(driver.display(), "11.00");
}

/// A second equals with nothing pending changes nothing
pub fn verify_equals_idempotent<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.enter_keys("9-4="), Ok(()));
    let first = driver.display();
    assert_eq!(driver.enter_keys("="), Ok(()));
    assert_eq!(driver.display(), first);
    assert_eq!(driver.enter_keys("=="), Ok(()));
    assert_eq!(driver.display(), "5.00");
}

/// Runs every scenario that holds under the default configuration
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_basic_arithmetic(driver);
    verify_division_by_zero(driver);
    verify_chaining(driver);
    verify_equals_idempotent(driver);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DecimalEntry, DivisionPolicy};

    #[test]
    fn test_machine_driver_enter_keys() {
        let mut driver = MachineDriver::new();
        driver.enter_keys("4 × 4 =").unwrap();
        assert_eq!(driver.display(), "16.00");
        assert_eq!(driver.calculator().pending(), None);
    }

    #[test]
    fn test_enter_keys_unknown_key() {
        let mut driver = MachineDriver::new();
        assert_eq!(driver.enter_keys("1+(2)"), Err(CalcError::UnknownKey('(')));
        // nothing pressed when the script fails to parse
        assert_eq!(driver.display(), "0.00");
    }

    #[test]
    fn test_machine_driver_reset() {
        let mut driver = MachineDriver::new();
        driver.enter_keys("8+").unwrap();
        driver.reset();
        assert_eq!(driver.calculator().pending(), None);
        assert_eq!(driver.display(), "0.00");
    }

    #[test]
    fn test_machine_all_scenarios() {
        run_all_scenarios(&mut MachineDriver::new());
    }

    #[test]
    fn test_machine_division_reported() {
        let config = CalculatorConfig::new().with_division(DivisionPolicy::Error);
        verify_division_by_zero_reported(&mut MachineDriver::with_config(config));
    }

    #[test]
    fn test_machine_positional_decimal() {
        let config = CalculatorConfig::new().with_decimal_entry(DecimalEntry::Positional);
        let mut driver = MachineDriver::with_config(config);
        driver.enter_keys("1.25×4=").unwrap();
        assert_eq!(driver.display(), "5.00");
    }

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;

        #[test]
        fn test_tui_driver_new() {
            let driver = TuiDriver::new();
            assert_eq!(driver.display(), "0.00");
        }

        #[test]
        fn test_tui_driver_highlights_last_button() {
            let mut driver = TuiDriver::new();
            driver.enter_keys("7+").unwrap();
            let pressed = driver.app().keypad().pressed_index();
            assert_eq!(pressed, Some(15));
        }

        #[test]
        fn test_tui_driver_reports_missed_click() {
            let tiny = ratatui::layout::Rect::new(0, 0, 6, 6);
            let mut driver = TuiDriver::new().with_frame(tiny);
            assert_eq!(
                driver.enter_keys("7"),
                Err(CalcError::MissedClick("7".to_string()))
            );
            assert_eq!(driver.display(), "0.00");
            assert_eq!(driver.app().keypad().pressed_index(), None);
        }

        #[test]
        fn test_tui_driver_clicks_every_button() {
            let mut driver = TuiDriver::new();
            for index in 0..16 {
                let event = driver.app().keypad().get_button(index).unwrap().action;
                driver.press(event).unwrap();
                assert_eq!(driver.app().keypad().pressed_index(), Some(index));
            }
        }

        #[test]
        fn test_tui_driver_with_app() {
            let driver = TuiDriver::with_app(crate::tui::CalculatorApp::new());
            assert!(driver.app().last_error().is_none());
        }

        #[test]
        fn test_tui_all_scenarios() {
            run_all_scenarios(&mut TuiDriver::new());
        }

        #[test]
        fn test_tui_division_reported() {
            let config = CalculatorConfig::new().with_division(DivisionPolicy::Error);
            let mut driver = TuiDriver::with_config(config);
            verify_division_by_zero_reported(&mut driver);
            assert_eq!(driver.app().last_error(), Some(&CalcError::DivisionByZero));
        }

        #[test]
        fn test_drivers_agree_on_legacy_decimal() {
            let mut machine = MachineDriver::new();
            let mut tui = TuiDriver::new();
            for (keys, shown) in [
                ("5.", "5.00"),
                ("1.2", "12.00"),
                (".", "0.00"),
                ("3+.4=", "7.00"),
                ("12..3", "123.00"),
            ] {
                machine.reset();
                tui.reset();
                machine.enter_keys(keys).unwrap();
                tui.enter_keys(keys).unwrap();
                assert_eq!(machine.display(), shown, "keys {keys}");
                assert_eq!(tui.display(), shown, "keys {keys}");
            }
        }
    }
}
