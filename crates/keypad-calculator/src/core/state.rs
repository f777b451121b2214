//! Calculator display state and its pure transitions
//!
//! Each transition consumes a state and returns the next one. The engine
//! swaps states whole, so a half-applied update is never observable.
//!
//! Once the display shows [`ERROR_MARKER`] the chain is over:
//! - digit, decimal and backspace start again from a cleared state
//! - operators and equals are ignored until a fresh number or a clear
//!
//! A failed chain keeps its first operand so an operator is never pending
//! without one.

use serde::{Deserialize, Serialize};

use super::operations::{Digit, Input, Operator};
use super::{format_number, parse_display};

/// Text shown in place of a number after a failed computation
pub const ERROR_MARKER: &str = "Error";

const INITIAL_DISPLAY: &str = "0";

/// Everything the calculator shows or remembers between key presses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    display: String,
    first_operand: Option<f64>,
    operator: Option<Operator>,
    waiting_for_second_operand: bool,
    equation: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the initial state: display `0`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            first_operand: None,
            operator: None,
            waiting_for_second_operand: false,
            equation: String::new(),
        }
    }

    /// Currently shown operand or result
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left-hand value of the pending operation
    #[must_use]
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// Operator awaiting its second operand
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// True right after an operator press, before any digit
    #[must_use]
    pub fn is_waiting_for_second_operand(&self) -> bool {
        self.waiting_for_second_operand
    }

    /// Trace of the expression being built or just completed
    #[must_use]
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// True when the display holds the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }

    /// True for the operator that is pending with a second operand under way
    ///
    /// This drives operator button highlighting.
    #[must_use]
    pub fn is_operator_active(&self, op: Operator) -> bool {
        self.operator == Some(op) && !self.waiting_for_second_operand
    }

    /// Applies any input
    #[must_use]
    pub fn apply(self, input: Input) -> Self {
        match input {
            Input::Digit(d) => self.input_digit(d),
            Input::Decimal => self.input_decimal(),
            Input::Operator(op) => self.perform_operation(op),
            Input::Equals => self.handle_equals(),
            Input::Backspace => self.handle_backspace(),
            Input::Clear => self.clear_display(),
        }
    }

    /// Enters a digit, replacing the display when a fresh operand starts
    #[must_use]
    pub fn input_digit(self, digit: Digit) -> Self {
        let mut next = self.recover();
        if next.waiting_for_second_operand {
            next.display = digit.to_string();
            next.waiting_for_second_operand = false;
        } else if next.display == INITIAL_DISPLAY {
            next.display = digit.to_string();
        } else {
            next.display.push(digit.as_char());
        }
        next
    }

    /// Enters a decimal point; a second point in the same operand is ignored
    #[must_use]
    pub fn input_decimal(self) -> Self {
        let mut next = self.recover();
        if next.waiting_for_second_operand {
            next.display = "0.".to_string();
            next.waiting_for_second_operand = false;
        } else if !next.display.contains('.') {
            next.display.push('.');
        }
        next
    }

    /// Chooses an operator, finishing any pending one first
    ///
    /// Pressing a second operator before any digit swaps the pending one
    /// and rewrites the equation as `first` followed by the new symbol.
    /// After equals the shown result stays the first operand and the
    /// equation keeps the completed trace.
    #[must_use]
    pub fn perform_operation(mut self, op: Operator) -> Self {
        if self.is_error() {
            return self;
        }

        match (self.first_operand, self.operator) {
            (None, _) => {
                self.first_operand = Some(parse_display(&self.display));
                self.equation = format!("{}{}", self.display, op.symbol());
            }
            // Operator pressed twice in a row: swap it, compute nothing
            (Some(first), Some(_)) if self.waiting_for_second_operand => {
                self.equation = format!("{}{}", format_number(first), op.symbol());
            }
            (Some(first), Some(pending)) => {
                let input_value = parse_display(&self.display);
                match pending.apply(first, input_value) {
                    Ok(result) => {
                        let text = format_number(result);
                        self.equation = format!("{text}{}", op.symbol());
                        self.display = text;
                        self.first_operand = Some(result);
                    }
                    Err(error) => {
                        tracing::warn!(%error, "chained computation failed, showing error marker");
                        self.display = ERROR_MARKER.to_string();
                        self.equation = format!("{ERROR_MARKER}{}", op.symbol());
                    }
                }
            }
            (Some(_), None) => {}
        }

        self.operator = Some(op);
        self.waiting_for_second_operand = true;
        self
    }

    /// Finishes the pending operation
    ///
    /// No-op without a pending operator or before its second operand.
    #[must_use]
    pub fn handle_equals(mut self) -> Self {
        let (Some(first), Some(pending)) = (self.first_operand, self.operator) else {
            return self;
        };
        if self.waiting_for_second_operand {
            return self;
        }

        let input_value = parse_display(&self.display);
        let trace = self.pending_trace(first, pending);
        match pending.apply(first, input_value) {
            Ok(result) => {
                self.equation = trace;
                self.display = format_number(result);
                self.first_operand = Some(result);
                self.operator = None;
                self.waiting_for_second_operand = false;
                self
            }
            Err(_) => self.into_error(trace),
        }
    }

    /// Drops the last displayed character, never leaving the display empty
    #[must_use]
    pub fn handle_backspace(self) -> Self {
        let mut next = self.recover();
        if next.display.chars().count() > 1 {
            next.display.pop();
        } else {
            next.display = INITIAL_DISPLAY.to_string();
        }
        next
    }

    /// Resets everything to the initial state
    #[must_use]
    pub fn clear_display(self) -> Self {
        Self::new()
    }

    /// Serializes the state to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a state from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn pending_trace(&self, first: f64, pending: Operator) -> String {
        format!(
            "{}{}{} = ",
            format_number(first),
            pending.symbol(),
            self.display
        )
    }

    fn into_error(self, equation: String) -> Self {
        tracing::warn!(%equation, "computation failed, showing error marker");
        Self {
            display: ERROR_MARKER.to_string(),
            operator: None,
            waiting_for_second_operand: false,
            equation,
            ..self
        }
    }

    fn recover(self) -> Self {
        if self.is_error() {
            Self::new()
        } else {
            self
        }
    }
}
