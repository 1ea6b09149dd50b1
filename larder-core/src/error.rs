//! Quantity errors
//!
//! Errors are plain values returned to the caller. Nothing here is retried:
//! the same input always produces the same error.

use crate::NumberError;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INCOMPLETE_QUANTITY: &str = "INCOMPLETE_QUANTITY";
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const NEGATIVE_QUANTITY: &str = "NEGATIVE_QUANTITY";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INVALID_SERVINGS: &str = "INVALID_SERVINGS";
}

/// Why a raw (value, unit) pair could not become a quantity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// One of value/unit was supplied without the other
    #[error("quantity needs both a value and a unit")]
    IncompleteQuantity,

    /// The value is not a finite decimal or fraction
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("quantity cannot be negative")]
    NegativeQuantity,

    /// Token as the user typed it, trimmed
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Serving counts used for scaling must be positive
    #[error("servings must be positive, got {0}")]
    InvalidServings(String),
}

impl QuantityError {
    /// Machine-readable code, stable across releases
    pub fn code(&self) -> &'static str {
        match self {
            QuantityError::IncompleteQuantity => codes::INCOMPLETE_QUANTITY,
            QuantityError::InvalidNumber(_) => codes::INVALID_NUMBER,
            QuantityError::NegativeQuantity => codes::NEGATIVE_QUANTITY,
            QuantityError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            QuantityError::InvalidServings(_) => codes::INVALID_SERVINGS,
        }
    }

    /// Hint for whoever shows the error to an end user
    pub fn suggestion(&self) -> &'static str {
        match self {
            QuantityError::IncompleteQuantity => "Provide both an amount and a unit, or neither",
            QuantityError::InvalidNumber(_) => "Use a decimal like 1.5 or a fraction like 1 1/2",
            QuantityError::NegativeQuantity => "Use zero or a positive amount",
            QuantityError::UnknownUnit(_) => "Use a kitchen unit such as cup, tbsp, g or piece",
            QuantityError::InvalidServings(_) => "Serving counts must be greater than zero",
        }
    }
}

impl From<NumberError> for QuantityError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => QuantityError::InvalidNumber(s),
            NumberError::DivisionByZero => QuantityError::InvalidNumber("division by zero".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(QuantityError::IncompleteQuantity.code(), codes::INCOMPLETE_QUANTITY);
        assert_eq!(QuantityError::UnknownUnit("x".into()).code(), codes::UNKNOWN_UNIT);
        assert_eq!(QuantityError::InvalidServings("0".into()).code(), codes::INVALID_SERVINGS);
    }

    #[test]
    fn test_display() {
        let err = QuantityError::UnknownUnit("bogus".to_string());
        assert_eq!(err.to_string(), "unknown unit: bogus");
    }

    #[test]
    fn test_from_number_error() {
        let err: QuantityError = NumberError::ParseError("1.2.3".to_string()).into();
        assert_eq!(err, QuantityError::InvalidNumber("1.2.3".to_string()));
    }
}
