//! Divide Operation
//!
//! Always produces a float. The divisor is checked for zero (including
//! `-0.0`) before dividing, so infinity and NaN never come out of here.

use abacus_types::{Number, Operation};

use super::finite;
use crate::{ArithmeticOperation, CalculationError, CalculationResult};

#[derive(Debug, Default)]
pub struct DivideOperation;

impl ArithmeticOperation for DivideOperation {
    fn operation(&self) -> Operation {
        Operation::Divide
    }

    fn apply(&self, a: Number, b: Number) -> CalculationResult {
        if b.is_zero() {
            return Err(CalculationError::DivisionByZero);
        }
        finite(a.as_f64() / b.as_f64())
    }
}
