//! Built-in operations provided by the Abacus calculator.

use abacus_types::Number;

use crate::{CalculationError, CalculationResult};

pub mod add;
pub mod divide;
pub mod multiply;
pub mod subtract;

/// Shared evaluation rule for add, subtract and multiply.
///
/// Two integers use the checked integer operation; if that overflows `i64`
/// the float operation is used instead. Any float operand goes straight to
/// the float operation.
pub(crate) fn integer_or_float(
    a: Number,
    b: Number,
    checked: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> CalculationResult {
    if let (Number::Integer(x), Number::Integer(y)) = (a, b) {
        if let Some(exact) = checked(x, y) {
            return Ok(Number::Integer(exact));
        }
    }
    finite(float(a.as_f64(), b.as_f64()))
}

/// Wraps a float result, refusing infinities and NaN.
pub(crate) fn finite(value: f64) -> CalculationResult {
    if value.is_finite() {
        Ok(Number::Float(value))
    } else {
        Err(CalculationError::Overflow)
    }
}
