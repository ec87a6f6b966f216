//! Add Operation
//!
//! Integer + integer stays an integer unless it overflows `i64`.

use abacus_types::{Number, Operation};

use super::integer_or_float;
use crate::{ArithmeticOperation, CalculationResult};

#[derive(Debug, Default)]
pub struct AddOperation;

impl ArithmeticOperation for AddOperation {
    fn operation(&self) -> Operation {
        Operation::Add
    }

    fn apply(&self, a: Number, b: Number) -> CalculationResult {
        integer_or_float(a, b, i64::checked_add, |x, y| x + y)
    }
}
