use abacus_types::{OperandPair, Operation};
use tracing::debug;

use crate::CalculationResult;
use crate::built_in::{
    add::AddOperation, divide::DivideOperation, multiply::MultiplyOperation,
    subtract::SubtractOperation,
};
use crate::operation::ArithmeticOperation;

/// The single entry point for arithmetic.
///
/// Zero-sized and `Copy`; clone it into request handlers freely.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    pub const fn new() -> Self {
        Self
    }

    pub fn operation(&self, op: Operation) -> &'static dyn ArithmeticOperation {
        match op {
            Operation::Add => &AddOperation,
            Operation::Subtract => &SubtractOperation,
            Operation::Multiply => &MultiplyOperation,
            Operation::Divide => &DivideOperation,
        }
    }

    pub fn calculate(&self, op: Operation, operands: &OperandPair) -> CalculationResult {
        let outcome = self.operation(op).apply(operands.a, operands.b);
        debug!(
            operation = op.name(),
            a = %operands.a,
            b = %operands.b,
            ?outcome,
            "calculated {} {} {}",
            operands.a,
            op.symbol(),
            operands.b
        );
        outcome
    }
}
