//! # Error reporting
//!
//! Arithmetic on sparse vectors is total except for a few conditions that the number types can't
//! represent. Those are collected here, together with the error for reading a metric name.
use core::fmt::Display;
use std::error::Error;
use std::fmt;

/// An `ArithmeticError` is created when an operation on vector values has no representable result.
///
/// Floating point types never produce this error for division: they follow IEEE 754 and yield an
/// infinity or NaN instead.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ArithmeticError {
    /// A value of a type without infinities (an integer or a rational) was divided by zero.
    DivisionByZero,
    /// The result of an integer division doesn't fit the type, e.g. `i32::MIN / -1`.
    Overflow,
    /// A value has no exact rational representation.
    ///
    /// The contained `String` is the offending value, formatted for the end user.
    NotFinite(String),
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => write!(f, "ArithmeticError: division by zero"),
            ArithmeticError::Overflow => write!(f, "ArithmeticError: division overflowed"),
            ArithmeticError::NotFinite(value) => {
                write!(f, "ArithmeticError: {} has no exact rational representation", value)
            },
        }
    }
}

impl Error for ArithmeticError {}

/// A `ParseMetricError` is created when a string doesn't name any known distance metric.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseMetricError {
    name: String,
}

impl ParseMetricError {
    /// Wrap the unrecognized name.
    ///
    /// # Arguments
    ///
    /// * `name`: The text that was read, as provided by the user.
    pub fn new(name: impl Into<String>) -> ParseMetricError {
        ParseMetricError { name: name.into(), }
    }
}

impl Display for ParseMetricError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseMetricError: unknown metric \"{}\"", self.name)
    }
}

impl Error for ParseMetricError {}
