//! Clickable keypad for the TUI calculator
//!
//! Buttons sit in the usual pocket-calculator order:
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ ÷ ]
//! [ 4 ] [ 5 ] [ 6 ] [ × ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ 0 ] [ . ] [ = ] [ + ]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::core::{Digit, InputEvent, Operation};

/// Hint shown under the keypad
pub const HELP: &str = " click a button · q quits ";

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text printed on the button
    pub label: String,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// Event sent to the calculator when clicked
    pub action: InputEvent,
}

impl KeypadButton {
    /// Creates a button for `action`, labelled like the keypad glyph
    #[must_use]
    pub fn new(action: InputEvent) -> Self {
        Self {
            label: action.label(),
            pressed: false,
            action,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

fn digit(d: usize) -> KeypadButton {
    KeypadButton::new(InputEvent::Digit(Digit::ALL[d]))
}

fn operator(op: Operation) -> KeypadButton {
    KeypadButton::new(InputEvent::Operator(op))
}

/// Buttons per keypad row
const COLS: usize = 4;
/// Keypad rows
const ROWS: usize = 4;

/// The 4x4 keypad grid
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the buttons go inside a bordered keypad area
#[derive(Debug, Clone, Copy)]
struct Grid {
    inner: Rect,
    cell_width: u16,
    cell_height: u16,
}

impl Grid {
    /// `None` when the area is too small to give every button a cell
    fn within(area: Rect) -> Option<Self> {
        let inner = area.inner(Margin::new(1, 1));
        let cell_width = inner.width / COLS as u16;
        let cell_height = inner.height / ROWS as u16;
        (cell_width > 0 && cell_height > 0).then_some(Self {
            inner,
            cell_width,
            cell_height,
        })
    }

    fn cell(&self, index: usize) -> Rect {
        let (row, col) = ((index / COLS) as u16, (index % COLS) as u16);
        Rect::new(
            self.inner.x + col * self.cell_width,
            self.inner.y + row * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    fn index_at(&self, x: u16, y: u16) -> Option<usize> {
        if !self.inner.contains(Position::new(x, y)) {
            return None;
        }
        let col = usize::from((x - self.inner.x) / self.cell_width);
        let row = usize::from((y - self.inner.y) / self.cell_height);
        // the remainder strip right of and below the last cells
        (row < ROWS && col < COLS).then_some(row * COLS + col)
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            digit(7),
            digit(8),
            digit(9),
            operator(Operation::Divide),
            digit(4),
            digit(5),
            digit(6),
            operator(Operation::Multiply),
            digit(1),
            digit(2),
            digit(3),
            operator(Operation::Subtract),
            digit(0),
            KeypadButton::new(InputEvent::Decimal),
            KeypadButton::new(InputEvent::Equals),
            operator(Operation::Add),
        ];
        Self { buttons }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid size as (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    /// Button at `index` in row-major order
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Button at a grid position
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        (row < ROWS && col < COLS)
            .then(|| self.get_button(row * COLS + col))
            .flatten()
    }

    /// Finds the button that sends `event`
    #[must_use]
    pub fn find_button(&self, event: InputEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == event)
    }

    /// Highlights one button and releases the rest
    pub fn highlight(&mut self, index: usize) {
        for (i, btn) in self.buttons.iter_mut().enumerate() {
            btn.set_pressed(i == index);
        }
    }

    /// Clears every highlight
    pub fn release_all(&mut self) {
        self.buttons.iter_mut().for_each(|b| b.set_pressed(false));
    }

    /// Index of the highlighted button, if any
    #[must_use]
    pub fn pressed_index(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// All buttons in row-major order
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Maps a click to a button index.
    ///
    /// `area` is the whole widget area, border included; clicks on the
    /// border or on leftover cells past the grid return `None`.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        Grid::within(area)?.index_at(x, y)
    }

    /// Screen cell at the centre of button `index`
    #[must_use]
    pub fn button_center(&self, area: Rect, index: usize) -> Option<(u16, u16)> {
        if index >= self.buttons.len() {
            return None;
        }
        let cell = Grid::within(area)?.cell(index);
        Some((cell.x + cell.width / 2, cell.y + cell.height / 2))
    }
}

/// Renders a [`Keypad`] inside a bordered block
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget borrowing `keypad`
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD);
        }
        match btn.action {
            InputEvent::Digit(_) | InputEvent::Decimal => {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            }
            InputEvent::Operator(_) | InputEvent::Equals => Style::default()
                .fg(Color::White)
                .bg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title_bottom(Line::from(HELP).centered())
            .render(area, buf);

        let Some(grid) = Grid::within(area) else {
            return;
        };

        for (index, btn) in self.keypad.buttons().enumerate() {
            let cell = grid.cell(index);
            let label = format!("[{}]", btn.label);
            let label_width = label.chars().count() as u16;
            if cell.width < label_width {
                continue;
            }
            let x = cell.x + (cell.width - label_width) / 2;
            let y = cell.y + cell.height / 2;
            buf.set_span(x, y, &Span::styled(label, Self::button_style(btn)), cell.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 16);
        assert_eq!(keypad.dimensions(), (4, 4));
    }

    #[test]
    fn test_keypad_layout() {
        let keypad = Keypad::new();
        let rows: Vec<String> = (0..4)
            .map(|row| {
                (0..4)
                    .map(|col| keypad.get_button_at(row, col).unwrap().label.clone())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        assert_eq!(rows, vec!["7 8 9 ÷", "4 5 6 ×", "1 2 3 -", "0 . = +"]);
    }

    #[test]
    fn test_get_button_at_out_of_range() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(4, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_every_event_has_a_button() {
        let keypad = Keypad::new();
        for d in 0..=9 {
            assert!(keypad.find_button(InputEvent::digit(d).unwrap()).is_some());
        }
        for op in Operation::ALL {
            assert!(keypad.find_button(InputEvent::Operator(op)).is_some());
        }
        assert_eq!(keypad.find_button(InputEvent::Decimal), Some(13));
        assert_eq!(keypad.find_button(InputEvent::Equals), Some(14));
    }

    #[test]
    fn test_highlight_is_exclusive() {
        let mut keypad = Keypad::new();
        keypad.highlight(3);
        keypad.highlight(5);
        assert_eq!(keypad.pressed_index(), Some(5));
        assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 1);
        keypad.release_all();
        assert_eq!(keypad.pressed_index(), None);
    }

    #[test]
    fn test_highlight_out_of_range_releases() {
        let mut keypad = Keypad::new();
        keypad.highlight(0);
        keypad.highlight(99);
        assert_eq!(keypad.pressed_index(), None);
    }

    #[test]
    fn test_hit_test_outside_area() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 10, 26, 18);
        assert_eq!(keypad.hit_test(area, 0, 0), None);
        assert_eq!(keypad.hit_test(area, 40, 12), None);
    }

    #[test]
    fn test_hit_test_border() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 18);
        assert_eq!(keypad.hit_test(area, 0, 5), None);
        assert_eq!(keypad.hit_test(area, 5, 0), None);
        assert_eq!(keypad.hit_test(area, 25, 5), None);
        assert_eq!(keypad.hit_test(area, 5, 17), None);
    }

    #[test]
    fn test_hit_test_corners() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 18);
        // inner 24x16, buttons 6x4
        assert_eq!(keypad.hit_test(area, 1, 1), Some(0));
        assert_eq!(keypad.hit_test(area, 24, 16), Some(15));
    }

    #[test]
    fn test_hit_test_too_small() {
        let keypad = Keypad::new();
        assert_eq!(keypad.hit_test(Rect::new(0, 0, 5, 5), 2, 2), None);
    }

    #[test]
    fn test_button_center_roundtrips_through_hit_test() {
        let keypad = Keypad::new();
        let area = Rect::new(3, 2, 30, 20);
        for index in 0..keypad.button_count() {
            let (x, y) = keypad.button_center(area, index).unwrap();
            assert_eq!(keypad.hit_test(area, x, y), Some(index));
        }
    }

    #[test]
    fn test_button_center_invalid_index() {
        let keypad = Keypad::new();
        assert!(keypad.button_center(Rect::new(0, 0, 30, 20), 16).is_none());
    }

    #[test]
    fn test_widget_renders_labels() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 30, 18);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        for label in ["[7]", "[÷]", "[=]", "[+]", "[.]"] {
            assert!(content.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_widget_too_small_draws_border_only() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(!content.contains('7'));
    }
}
