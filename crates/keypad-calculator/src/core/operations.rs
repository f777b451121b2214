//! Keypad inputs and four-function arithmetic
//!
//! Error prevention: digits and operators are closed types, so an
//! out-of-range key can never reach the state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CalcError, CalcResult};

/// A single decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, rejecting values above 9
    pub fn new(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::InvalidDigit(value))
        }
    }

    /// Creates a digit from an ASCII digit character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// All ten digits in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=9).map(Self)
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary operators on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad column order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Text used between operands in the equation trace
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => " + ",
            Self::Subtract => " - ",
            Self::Multiply => " × ",
            Self::Divide => " ÷ ",
        }
    }

    /// Glyph printed on the keypad button
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Keyboard character that selects this operator
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Parses a keyboard character into an operator
    #[must_use]
    pub const fn from_key(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    ///
    /// Division by zero and non-finite results are errors; the state machine
    /// turns them into the error marker.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a keypad or keyboard can ask of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "value")]
pub enum Input {
    /// Enter a digit
    Digit(Digit),
    /// Enter a decimal point
    Decimal,
    /// Choose a binary operator
    Operator(Operator),
    /// Finish the pending operation
    Equals,
    /// Drop the last displayed character
    Backspace,
    /// Reset everything
    Clear,
}

impl From<Digit> for Input {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Input {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Digit tests =====

    #[test]
    fn test_digit_new_valid() {
        for d in 0..=9 {
            assert_eq!(Digit::new(d).unwrap().value(), d);
        }
    }

    #[test]
    fn test_digit_new_invalid() {
        assert_eq!(Digit::new(10), Err(CalcError::InvalidDigit(10)));
        assert_eq!(Digit::try_from(255), Err(CalcError::InvalidDigit(255)));
    }

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::from_char('7'), Some(Digit(7)));
        assert_eq!(Digit::from_char('a'), None);
        assert_eq!(Digit::from_char('+'), None);
    }

    #[test]
    fn test_digit_as_char() {
        for digit in Digit::all() {
            assert_eq!(Digit::from_char(digit.as_char()), Some(digit));
        }
    }

    #[test]
    fn test_digit_all_count() {
        assert_eq!(Digit::all().count(), 10);
    }

    #[test]
    fn test_digit_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Digit>("12").is_err());
        assert_eq!(serde_json::from_str::<Digit>("4").unwrap(), Digit(4));
    }

    // ===== Operator tests =====

    #[test]
    fn test_apply_add() {
        assert_eq!(Operator::Add.apply(7.0, 3.0), Ok(10.0));
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operator::Subtract.apply(9.0, 4.0), Ok(5.0));
        assert_eq!(Operator::Subtract.apply(4.0, 9.0), Ok(-5.0));
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operator::Multiply.apply(6.0, 7.0), Ok(42.0));
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operator::Divide.apply(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn test_apply_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(0.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_overflow() {
        assert_eq!(
            Operator::Multiply.apply(f64::MAX, 2.0),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Operator::Add.symbol(), " + ");
        assert_eq!(Operator::Subtract.symbol(), " - ");
        assert_eq!(Operator::Multiply.symbol(), " × ");
        assert_eq!(Operator::Divide.symbol(), " ÷ ");
    }

    #[test]
    fn test_key_roundtrip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_key(op.key()), Some(op));
        }
        assert_eq!(Operator::from_key('x'), None);
        assert_eq!(Operator::from_key('^'), None);
    }

    #[test]
    fn test_operator_display_uses_label() {
        assert_eq!(Operator::Multiply.to_string(), "×");
        assert_eq!(Operator::Divide.to_string(), "÷");
    }

    // ===== Input tests =====

    #[test]
    fn test_input_from_digit_and_operator() {
        assert_eq!(Input::from(Digit(3)), Input::Digit(Digit(3)));
        assert_eq!(Input::from(Operator::Add), Input::Operator(Operator::Add));
    }

    #[test]
    fn test_input_json_shape() {
        let json = serde_json::to_string(&Input::Operator(Operator::Divide)).unwrap();
        assert_eq!(json, r#"{"type":"operator","value":"divide"}"#);
        let json = serde_json::to_string(&Input::Equals).unwrap();
        assert_eq!(json, r#"{"type":"equals"}"#);
    }
}
