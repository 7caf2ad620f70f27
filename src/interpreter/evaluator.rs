/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations: arithmetic with string
/// concatenation, loose and strict equality, ordering comparisons, and the
/// short-circuit logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical NOT, numeric negation and conversion, `typeof` and
/// `void`.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the engine entry points `evaluate` and `evaluate_lazy`, operand
/// count checking, and the walk over expression trees.
pub mod core;
