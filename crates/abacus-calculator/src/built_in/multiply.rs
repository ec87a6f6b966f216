//! Operation for multiplying two numeric values

use abacus_types::{Number, Operation};

use super::integer_or_float;
use crate::{ArithmeticOperation, CalculationResult};

/// Multiplication
///
/// # Arguments
/// * `a` - First factor
/// * `b` - Second factor
///
/// # Returns
/// The product of `a` and `b`; `Integer` when both are integers and the
/// product fits `i64`, `Float` otherwise. Fails with `Overflow` when float
/// multiplication leaves the finite range.
#[derive(Debug, Default)]
pub struct MultiplyOperation;

impl ArithmeticOperation for MultiplyOperation {
    fn operation(&self) -> Operation {
        Operation::Multiply
    }

    fn apply(&self, a: Number, b: Number) -> CalculationResult {
        integer_or_float(a, b, i64::checked_mul, |x, y| x * y)
    }
}
