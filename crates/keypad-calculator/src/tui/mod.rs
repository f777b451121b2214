//! Terminal frontend for the keypad calculator
//!
//! Visual feedback through the terminal: ratatui widgets over crossterm.

mod app;
mod input;
mod keypad;
mod session;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::KeypadWidget;
pub use session::{run, run_in_terminal, terminal_events, TerminalSession};
pub use ui::{render, CalculatorLayout, CalculatorUI, HELP_SHORTCUTS, TITLE};
