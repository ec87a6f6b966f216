use abacus_types::{Number, Operation};

use super::integer_or_float;
use crate::{ArithmeticOperation, CalculationResult};

/// Subtracts `b` from `a`.
#[derive(Debug, Default)]
pub struct SubtractOperation;

impl ArithmeticOperation for SubtractOperation {
    fn operation(&self) -> Operation {
        Operation::Subtract
    }

    fn apply(&self, a: Number, b: Number) -> CalculationResult {
        integer_or_float(a, b, i64::checked_sub, |x, y| x - y)
    }
}
