//! Calculator core: keypad inputs, arithmetic, and the display state machine
//!
//! Invariants:
//! - `display` is either the error marker or text that reads as a finite number
//! - No input panics; failed arithmetic is a display state, not a fault

mod engine;
mod operations;
mod state;

pub use engine::{CalculatorEngine, SubscriptionId};
pub use operations::{Digit, Input, Operator};
pub use state::{CalculatorState, ERROR_MARKER};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is not a finite number
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Digit outside 0-9
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),
    /// Character with no keypad meaning in a key script
    #[error("Unknown key: {0:?}")]
    UnknownKey(char),
}

/// Formats a number the way the display shows it
///
/// Uses the shortest text that reads back as the same `f64`, so results are
/// shown at full precision. Negative zero is shown as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Reads display text as a number
///
/// Partial entries are accepted: a trailing `.` reads as the integer part.
/// Text that is not a number at all (a lone `-`, the error marker) reads as 0.
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    text.trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        assert_eq!(
            CalcError::Overflow.to_string(),
            "Overflow: result exceeds maximum value"
        );
    }

    #[test]
    fn test_calc_error_display_invalid_digit() {
        assert_eq!(
            CalcError::InvalidDigit(12).to_string(),
            "Invalid digit: 12 (expected 0-9)"
        );
    }

    #[test]
    fn test_calc_error_display_unknown_key() {
        assert_eq!(CalcError::UnknownKey('x').to_string(), "Unknown key: 'x'");
    }

    // ===== format_number tests =====

    #[test]
    fn test_format_integer() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(-42.0), "-42");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_full_precision() {
        let third = format_number(1.0 / 3.0);
        assert_eq!(third, "0.3333333333333333");
        assert_eq!(third.parse::<f64>().unwrap(), 1.0 / 3.0);
    }

    // ===== parse_display tests =====

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_display("12"), 12.0);
        assert_eq!(parse_display("-3.5"), -3.5);
    }

    #[test]
    fn test_parse_trailing_decimal() {
        assert_eq!(parse_display("12."), 12.0);
        assert_eq!(parse_display("0."), 0.0);
    }

    #[test]
    fn test_parse_garbage_reads_as_zero() {
        assert_eq!(parse_display("-"), 0.0);
        assert_eq!(parse_display(ERROR_MARKER), 0.0);
        assert_eq!(parse_display(""), 0.0);
    }

    #[test]
    fn test_parse_rejects_non_finite_spellings() {
        assert_eq!(parse_display("inf"), 0.0);
        assert_eq!(parse_display("NaN"), 0.0);
    }
}
