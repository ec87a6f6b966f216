//! Abacus Types
//!
//! This crate defines the values shared by every Abacus crate: the `Number`
//! operand/result type, the closed `Operation` set, and the validated
//! `OperandPair` that both request boundaries build before any arithmetic runs.

#![warn(missing_docs)]

mod number;
mod operands;
mod operation;

pub use number::Number;
pub use operands::{FieldIssue, IssueKind, OperandPair, ValidationError};
pub use operation::{Operation, ParseOperationError};
