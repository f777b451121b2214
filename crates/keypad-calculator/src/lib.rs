//! Keypad Calculator
//!
//! A four-function keypad calculator: digits, decimal point, `+ - × ÷`,
//! equals, backspace and clear, evaluated strictly left to right with an
//! equation trace above the display.
//!
//! # Testing Principles
//!
//! - **Error prevention**: inputs are a closed enum and digits a validated
//!   newtype, so invalid key presses cannot reach the state machine
//! - **Visual feedback**: the equation trace and operator highlight make
//!   every pending operation visible
//! - **Balanced testing**: the same scenarios run against the bare engine
//!   and the terminal frontend
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.input_digit(Digit::new(1).unwrap());
//! engine.input_digit(Digit::new(2).unwrap());
//! engine.perform_operation(Operator::Add);
//! engine.input_digit(Digit::new(3).unwrap());
//!
//! let state = engine.handle_equals();
//! assert_eq!(state.equation(), "12 + 3 = ");
//! assert_eq!(state.display(), "15");
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keyboard;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_number, parse_display, CalcError, CalcResult, CalculatorEngine, CalculatorState,
        Digit, Input, Operator, SubscriptionId, ERROR_MARKER,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::keyboard::{parse_script, Key, KeyDisposition, KeyboardAdapter};
    pub use crate::keypad::{Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, TerminalSession};
}
