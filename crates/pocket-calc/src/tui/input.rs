//! Terminal event mapping
//!
//! Buttons are pressed with the mouse. The keyboard only closes the app.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// Actions the TUI reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Left click at a screen cell (column, row)
    Click(u16, u16),
    /// Mouse released; drops the button highlight
    Release,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> AppAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    AppAction::Click(mouse.column, mouse.row)
                }
                MouseEventKind::Up(MouseButton::Left) => AppAction::Release,
                _ => AppAction::None,
            },
            _ => AppAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> AppAction {
        if event.kind != KeyEventKind::Press {
            return AppAction::None;
        }
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'q') => AppAction::Quit,
                _ => AppAction::None,
            };
        }
        match event.code {
            KeyCode::Char('q') | KeyCode::Esc => AppAction::Quit,
            _ => AppAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('q'))), AppAction::Quit);
        assert_eq!(handler.handle_key(key_event(KeyCode::Esc)), AppAction::Quit);
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            AppAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            AppAction::Quit
        );
    }

    #[test]
    fn test_digit_keys_are_ignored() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            assert_eq!(handler.handle_key(key_event(KeyCode::Char(c))), AppAction::None);
        }
        assert_eq!(handler.handle_key(key_event(KeyCode::Enter)), AppAction::None);
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            AppAction::None
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = InputHandler::new();
        let event = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handler.handle_key(event), AppAction::None);
    }

    #[test]
    fn test_left_click() {
        let handler = InputHandler::new();
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 12, 7);
        assert_eq!(handler.handle_event(&event), AppAction::Click(12, 7));
    }

    #[test]
    fn test_left_release() {
        let handler = InputHandler::new();
        let event = mouse(MouseEventKind::Up(MouseButton::Left), 12, 7);
        assert_eq!(handler.handle_event(&event), AppAction::Release);
    }

    #[test]
    fn test_other_mouse_ignored() {
        let handler = InputHandler::new();
        let event = mouse(MouseEventKind::Down(MouseButton::Right), 1, 1);
        assert_eq!(handler.handle_event(&event), AppAction::None);
        let event = mouse(MouseEventKind::Moved, 1, 1);
        assert_eq!(handler.handle_event(&event), AppAction::None);
    }

    #[test]
    fn test_key_event_routed() {
        let handler = InputHandler::new();
        let event = Event::Key(key_event(KeyCode::Esc));
        assert_eq!(handler.handle_event(&event), AppAction::Quit);
        assert_eq!(handler.handle_event(&Event::Resize(80, 24)), AppAction::None);
    }
}
