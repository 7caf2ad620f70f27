/// Core parsing entry points.
///
/// Contains the result type, expression and statement entry points, and the
/// conditional (`?:`) level, which has the lowest precedence.
pub mod core;

/// Binary operator parsing.
///
/// Implements one precedence level per group of binary operators, from
/// logical OR down to exponentiation.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals and parenthesized expressions.
pub mod unary;
