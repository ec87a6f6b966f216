use abacus_types::{Number, Operation};

use crate::CalculationResult;

/// A single arithmetic operation.
/// Implementations are stateless and thread-safe.
pub trait ArithmeticOperation: Send + Sync {
    /// Which operation this implements.
    fn operation(&self) -> Operation;

    /// Applies the operation to `a` and `b`.
    fn apply(&self, a: Number, b: Number) -> CalculationResult;
}
