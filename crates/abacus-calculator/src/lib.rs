//! The arithmetic core of the Abacus service.
//!
//! This crate provides the `ArithmeticOperation` trait, one built-in
//! implementation per `Operation`, and the `Calculator` facade through which
//! both the JSON API and the interactive page run every calculation.
//!
//! All operations are pure: no shared state, no I/O, safe to call from any
//! number of threads at once.

use thiserror::Error;

pub mod built_in;
pub mod calculator;
pub mod operation;

pub use abacus_types::{Number, OperandPair, Operation};
pub use calculator::Calculator;
pub use operation::ArithmeticOperation;

/// Message carried by every division-by-zero failure.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Cannot divide by zero!";

/// Message carried by every out-of-range failure.
pub const OVERFLOW_MESSAGE: &str = "Result is out of range!";

/// Failures detected while an operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// The divisor was `0`, `0.0` or `-0.0`.
    #[error("{}", DIVISION_BY_ZERO_MESSAGE)]
    DivisionByZero,

    /// Finite operands produced a non-finite float.
    #[error("{}", OVERFLOW_MESSAGE)]
    Overflow,
}

pub type CalculationResult = Result<Number, CalculationError>;

/// `a + b`
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> CalculationResult {
    Calculator::new().calculate(Operation::Add, &OperandPair::new(a, b))
}

/// `a - b`
pub fn subtract(a: impl Into<Number>, b: impl Into<Number>) -> CalculationResult {
    Calculator::new().calculate(Operation::Subtract, &OperandPair::new(a, b))
}

/// `a * b`
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> CalculationResult {
    Calculator::new().calculate(Operation::Multiply, &OperandPair::new(a, b))
}

/// `a / b`; fails with [`CalculationError::DivisionByZero`] for any zero divisor.
pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> CalculationResult {
    Calculator::new().calculate(Operation::Divide, &OperandPair::new(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_fixed_text() {
        assert_eq!(CalculationError::DivisionByZero.to_string(), "Cannot divide by zero!");
        assert_eq!(CalculationError::Overflow.to_string(), "Result is out of range!");
    }

    #[test]
    fn free_functions_route_through_calculator() {
        assert_eq!(add(10_i64, 5_i64), Ok(Number::Integer(15)));
        assert_eq!(subtract(20_i64, 8_i64), Ok(Number::Integer(12)));
        assert_eq!(multiply(6_i64, 7_i64), Ok(Number::Integer(42)));
        assert_eq!(divide(20_i64, 4_i64), Ok(Number::Float(5.0)));
        assert_eq!(divide(10_i64, 0_i64), Err(CalculationError::DivisionByZero));
    }
}
