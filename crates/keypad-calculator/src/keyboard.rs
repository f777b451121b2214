//! Keyboard adapter with focus gating
//!
//! Maps platform-neutral keys to engine inputs. While the calculator is not
//! focused every key passes through untouched, so the host keeps its
//! default handling.

use crate::core::{CalcError, CalcResult, Digit, Input, Operator};

/// A key press, independent of any terminal or browser event type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Char(char),
    /// Enter / Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Any other key
    Other,
}

impl Key {
    /// Reads one character of a key script
    ///
    /// Scripts spell the non-printing keys as `E` (Enter), `C` (Escape) and
    /// `<` (Backspace); the control characters themselves are accepted too.
    #[must_use]
    pub fn from_script(c: char) -> Self {
        match c {
            'E' | '\n' | '\r' => Self::Enter,
            'C' | '\x1b' => Self::Escape,
            '<' | '\x08' | '\x7f' => Self::Backspace,
            c => Self::Char(c),
        }
    }
}

/// Parses a key script such as `"12+3E"` into engine inputs
///
/// Spaces and tabs are skipped. Any other character that does not map to an
/// input is an error, so typos do not silently vanish.
pub fn parse_script(script: &str) -> CalcResult<Vec<Input>> {
    script
        .chars()
        .filter(|c| !matches!(*c, ' ' | '\t'))
        .map(|c| KeyboardAdapter::map_key(Key::from_script(c)).ok_or(CalcError::UnknownKey(c)))
        .collect()
}

/// What the adapter did with a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The key maps to an engine input and was consumed
    Handled(Input),
    /// The key is not ours; the host should handle it as usual
    Ignored,
}

impl KeyDisposition {
    /// Returns the input if the key was handled
    #[must_use]
    pub fn input(self) -> Option<Input> {
        match self {
            Self::Handled(input) => Some(input),
            Self::Ignored => None,
        }
    }
}

/// Keyboard adapter: key map plus the focus flag that gates it
#[derive(Debug, Clone, Default)]
pub struct KeyboardAdapter {
    focused: bool,
}

impl KeyboardAdapter {
    /// Creates an unfocused adapter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter that already has focus
    #[must_use]
    pub fn focused() -> Self {
        Self { focused: true }
    }

    /// Returns whether keys are currently accepted
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Updates the focus flag
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            tracing::debug!(focused, "keyboard focus changed");
        }
        self.focused = focused;
    }

    /// Handles a key press, honouring focus
    #[must_use]
    pub fn handle(&self, key: Key) -> KeyDisposition {
        if !self.focused {
            return KeyDisposition::Ignored;
        }
        Self::map_key(key).map_or(KeyDisposition::Ignored, KeyDisposition::Handled)
    }

    /// Maps a key to an engine input, ignoring focus
    #[must_use]
    pub fn map_key(key: Key) -> Option<Input> {
        match key {
            Key::Char(c) => Self::map_char(c),
            Key::Enter => Some(Input::Equals),
            Key::Escape => Some(Input::Clear),
            Key::Backspace => Some(Input::Backspace),
            Key::Other => None,
        }
    }

    /// Maps a printable character to an engine input
    #[must_use]
    pub fn map_char(c: char) -> Option<Input> {
        if let Some(digit) = Digit::from_char(c) {
            return Some(Input::Digit(digit));
        }
        if let Some(op) = Operator::from_key(c) {
            return Some(Input::Operator(op));
        }
        match c {
            '.' => Some(Input::Decimal),
            '=' => Some(Input::Equals),
            _ => None,
        }
    }
}
