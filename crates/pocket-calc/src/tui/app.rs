//! TUI application state

use ratatui::layout::Rect;

use super::input::AppAction;
use super::keypad::Keypad;
use super::ui;
use crate::config::CalculatorConfig;
use crate::core::{format_display, CalcError, CalcResult, Calculator, InputEvent};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    calculator: Calculator,
    keypad: Keypad,
    /// Error from the most recent press, cleared by the next successful one
    last_error: Option<CalcError>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator app with custom policies
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config),
            keypad: Keypad::new(),
            last_error: None,
            should_quit: false,
        }
    }

    /// Returns the state machine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the display string
    #[must_use]
    pub fn display(&self) -> String {
        self.calculator.display()
    }

    /// Returns the pending operation as `"<stored> <op>"`, if any
    #[must_use]
    pub fn pending_display(&self) -> Option<String> {
        self.calculator.pending().map(|op| {
            let precision = self.calculator.config().precision;
            let stored = format_display(self.calculator.stored(), precision);
            format!("{stored} {op}")
        })
    }

    /// Returns the error from the most recent press
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses the button that sends `event`
    pub fn press(&mut self, event: InputEvent) -> CalcResult<()> {
        if let Some(index) = self.keypad.find_button(event) {
            self.keypad.highlight(index);
        }
        let result = self.calculator.handle(event);
        self.last_error = result.as_ref().err().cloned();
        result
    }

    /// Presses button `index`; `None` if there is no such button
    pub fn press_button(&mut self, index: usize) -> Option<CalcResult<()>> {
        let event = self.keypad.get_button(index)?.action;
        Some(self.press(event))
    }

    /// Handles a click at (x, y) on a frame of size `frame_area`
    pub fn click(&mut self, frame_area: Rect, x: u16, y: u16) -> Option<CalcResult<()>> {
        let keypad_area = ui::keypad_area(frame_area);
        let index = self.keypad.hit_test(keypad_area, x, y)?;
        self.press_button(index)
    }

    /// Applies a mapped terminal action
    pub fn apply(&mut self, action: AppAction, frame_area: Rect) {
        match action {
            AppAction::Click(x, y) => {
                // errors are kept in `last_error` and rendered
                let _ = self.click(frame_area, x, y);
            }
            AppAction::Release => self.keypad.release_all(),
            AppAction::Quit => self.quit(),
            AppAction::None => {}
        }
    }

    /// Returns the machine and keypad to their initial state
    pub fn reset(&mut self) {
        self.calculator.reset();
        self.keypad.release_all();
        self.last_error = None;
    }
}
