//! TUI application state
//!
//! Error prevention: every path into the engine (keys, clicks, drivers)
//! goes through `dispatch`, so the terminal can never bypass the state
//! machine.

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::KeypadWidget;
use super::ui::CalculatorLayout;
use crate::core::{CalculatorEngine, CalculatorState, Input};
use crate::keyboard::KeyboardAdapter;
use crate::keypad::Keypad;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Arithmetic and display state
    engine: CalculatorEngine,
    /// Focus-gated keyboard map
    keyboard: KeyboardAdapter,
    /// Button grid
    keypad: Keypad,
    /// Index of the last pressed button, for a press flash
    pressed: Option<usize>,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a focused calculator app in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(CalculatorEngine::new())
    }

    /// Creates an app around an existing engine (and its subscribers)
    #[must_use]
    pub fn with_engine(engine: CalculatorEngine) -> Self {
        Self {
            engine,
            keyboard: KeyboardAdapter::focused(),
            keypad: Keypad::new(),
            pressed: None,
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the engine mutably, e.g. to subscribe
    pub fn engine_mut(&mut self) -> &mut CalculatorEngine {
        &mut self.engine
    }

    /// Returns the keyboard adapter
    #[must_use]
    pub fn keyboard(&self) -> &KeyboardAdapter {
        &self.keyboard
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the last pressed button index
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
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

    /// Updates keyboard focus
    pub fn set_focused(&mut self, focused: bool) {
        self.keyboard.set_focused(focused);
    }

    /// Sends an input to the engine and flashes its button
    pub fn dispatch(&mut self, input: Input) -> &CalculatorState {
        self.pressed = self.keypad.find(input);
        self.engine.dispatch(input)
    }

    /// Presses a keypad button by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(input) = self.keypad.get_button(index).map(|b| b.input) {
            self.engine.dispatch(input);
            self.pressed = Some(index);
        }
    }

    /// Handles a click at a terminal cell
    ///
    /// Clicking anywhere focuses the calculator; clicking a button presses it.
    pub fn click(&mut self, terminal_area: Rect, column: u16, row: u16) {
        self.set_focused(true);
        let keypad_area = CalculatorLayout::new(terminal_area).keypad;
        if let Some(index) = KeypadWidget::hit_test(&self.keypad, keypad_area, column, row) {
            self.press_button(index);
        }
    }

    /// Applies an action produced by the input handler
    pub fn handle_action(&mut self, action: KeyAction, terminal_area: Rect) {
        match action {
            KeyAction::Calc(input) => {
                self.dispatch(input);
            }
            KeyAction::Click { column, row } => self.click(terminal_area, column, row),
            KeyAction::Focus(focused) => self.set_focused(focused),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }
}
