//! Button grid shared by every frontend
//!
//! ```text
//! [  C  ] [     ⌫     ] [ ÷ ]
//! [  7  ] [  8  ] [  9  ] [ × ]
//! [  4  ] [  5  ] [  6  ] [ - ]
//! [  1  ] [  2  ] [  3  ] [ + ]
//! [     0     ] [  .  ] [ = ]
//! ```

use crate::core::{CalculatorState, Digit, Input, Operator};

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text printed on the button
    pub label: &'static str,
    /// Input sent to the engine when pressed
    pub input: Input,
    /// Grid row (0 = top)
    pub row: usize,
    /// First grid column covered
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
}

impl KeypadButton {
    const fn new(label: &'static str, input: Input, row: usize, col: usize, span: usize) -> Self {
        Self {
            label,
            input,
            row,
            col,
            span,
        }
    }

    fn digit(digit: Digit, row: usize, col: usize, span: usize) -> Self {
        let label = DIGIT_LABELS[usize::from(digit.value())];
        Self::new(label, Input::Digit(digit), row, col, span)
    }

    fn operator(op: Operator, row: usize) -> Self {
        Self::new(op.label(), Input::Operator(op), row, 3, 1)
    }

    /// Returns true if this button covers the given cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }

    /// Returns the operator this button selects, if any
    #[must_use]
    pub fn operator_input(&self) -> Option<Operator> {
        match self.input {
            Input::Operator(op) => Some(op),
            _ => None,
        }
    }
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// The calculator keypad: 5 rows by 4 columns
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Number of grid rows
    pub const ROWS: usize = 5;
    /// Number of grid columns
    pub const COLS: usize = 4;

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let d: Vec<Digit> = Digit::all().collect();
        let buttons = vec![
            // Row 0: C ⌫⌫ ÷
            KeypadButton::new("C", Input::Clear, 0, 0, 1),
            KeypadButton::new("⌫", Input::Backspace, 0, 1, 2),
            KeypadButton::operator(Operator::Divide, 0),
            // Row 1: 7 8 9 ×
            KeypadButton::digit(d[7], 1, 0, 1),
            KeypadButton::digit(d[8], 1, 1, 1),
            KeypadButton::digit(d[9], 1, 2, 1),
            KeypadButton::operator(Operator::Multiply, 1),
            // Row 2: 4 5 6 -
            KeypadButton::digit(d[4], 2, 0, 1),
            KeypadButton::digit(d[5], 2, 1, 1),
            KeypadButton::digit(d[6], 2, 2, 1),
            KeypadButton::operator(Operator::Subtract, 2),
            // Row 3: 1 2 3 +
            KeypadButton::digit(d[1], 3, 0, 1),
            KeypadButton::digit(d[2], 3, 1, 1),
            KeypadButton::digit(d[3], 3, 2, 1),
            KeypadButton::operator(Operator::Add, 3),
            // Row 4: 00 . =
            KeypadButton::digit(d[0], 4, 0, 2),
            KeypadButton::new(".", Input::Decimal, 4, 2, 1),
            KeypadButton::new("=", Input::Equals, 4, 3, 1),
        ];

        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (Self::ROWS, Self::COLS)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Finds the button index covering a grid cell
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds the button that sends an input
    #[must_use]
    pub fn find(&self, input: Input) -> Option<usize> {
        self.buttons.iter().position(|b| b.input == input)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns whether a button should be drawn highlighted
    ///
    /// Only the pending operator is highlighted, and only once its second
    /// operand is being typed.
    #[must_use]
    pub fn is_highlighted(button: &KeypadButton, state: &CalculatorState) -> bool {
        button
            .operator_input()
            .is_some_and(|op| state.is_operator_active(op))
    }
}
