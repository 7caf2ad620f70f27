use thiserror::Error;

use crate::ast::OperatorTag;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// An operator received the wrong number of operands.
    #[error("Operator '{op}' expects {expected} operand(s), but found {found}.")]
    InvalidOperatorArity {
        /// The operator that was misused.
        op:       OperatorTag,
        /// The number of operands the operator takes.
        expected: usize,
        /// The number of operands that were supplied.
        found:    usize,
    },
}
