//! Terminal front end: a display panel over a clickable keypad

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{AppAction, InputHandler};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI};
