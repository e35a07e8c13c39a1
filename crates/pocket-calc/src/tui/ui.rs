//! TUI rendering: display panel above the keypad

use std::rc::Rc;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Title shown on the display panel
pub const TITLE: &str = " pocket-calc ";

/// Height of the display panel, border included
const DISPLAY_HEIGHT: u16 = 5;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Splits the frame into display and keypad rows
fn layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(DISPLAY_HEIGHT), Constraint::Min(6)])
        .split(area)
}

/// Returns where the keypad is drawn inside a frame of size `area`
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    layout(area)[1]
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let pending = self.app.pending_display().unwrap_or_default();
        let mut lines = vec![
            Line::from(Span::styled(pending, Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                self.app.display(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(err) = self.app.last_error() {
            lines.push(Line::from(Span::styled(
                format!("Error: {err}"),
                Style::default().fg(Color::Red),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(TITLE)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::LightRed)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = layout(area);
        self.render_display(chunks[0], buf);
        KeypadWidget::new(self.app.keypad()).render(chunks[1], buf);
    }
}
