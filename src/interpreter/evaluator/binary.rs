/// Dispatch of binary operators to their handlers.
pub mod core;

/// Arithmetic operators: `+`, `-`, `*`, `/`, `%` and `**`.
///
/// `+` concatenates when either operand is a string; every other operator
/// converts both operands to numbers and follows IEEE-754.
pub mod arithmetic;

/// Equality and ordering comparisons.
///
/// Covers loose (`==`, `!=`) and strict (`===`, `!==`) equality as well as
/// `<`, `>`, `<=` and `>=`.
pub mod comparison;

/// Short-circuit logical operators `&&` and `||`.
pub mod logic;
