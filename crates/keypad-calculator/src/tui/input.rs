//! Terminal event handling
//!
//! Error prevention: crossterm events are reduced to a small closed set of
//! actions before they touch the app.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::Input;
use crate::keyboard::{Key, KeyboardAdapter};

/// Actions that terminal events can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send an input to the calculator
    Calc(Input),
    /// Left click at a terminal cell
    Click {
        /// Terminal column
        column: u16,
        /// Terminal row
        row: u16,
    },
    /// Terminal gained (true) or lost (false) focus
    Focus(bool),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Maps crossterm events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event, keyboard: &KeyboardAdapter) -> KeyAction {
        match event {
            Event::Key(key) => self.handle_key(*key, keyboard),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse),
            Event::FocusGained => KeyAction::Focus(true),
            Event::FocusLost => KeyAction::Focus(false),
            _ => KeyAction::None,
        }
    }

    /// Maps a key event to an action
    ///
    /// Quit shortcuts work regardless of focus; calculator keys go through
    /// the keyboard adapter's focus gate.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent, keyboard: &KeyboardAdapter) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        keyboard
            .handle(Self::to_key(code))
            .input()
            .map_or(KeyAction::None, KeyAction::Calc)
    }

    /// Converts a crossterm key code to a platform-neutral key
    #[must_use]
    pub fn to_key(code: KeyCode) -> Key {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            _ => Key::Other,
        }
    }

    fn handle_mouse(event: MouseEvent) -> KeyAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => KeyAction::Click {
                column: event.column,
                row: event.row,
            },
            _ => KeyAction::None,
        }
    }
}
