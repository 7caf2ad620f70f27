/// The evaluator module applies operators to values and walks expression
/// trees.
///
/// The evaluator is the coercion engine itself. It converts operands between
/// numbers, strings and booleans as each operator requires, and it decides
/// which operands of the logical and conditional operators are evaluated at
/// all.
///
/// # Responsibilities
/// - Implements every operator over [`DynamicValue`](value::core::DynamicValue)
///   operands.
/// - Enforces short-circuit evaluation for `&&`, `||` and `?:`.
/// - Reports operators given the wrong number of operands.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a literal, keyword, operator or separator.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Resolves numeric literals and string escapes.
/// - Skips comments and white space.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST following the usual precedence of the operators, from `?:` at the
/// bottom to prefix operators at the top.
///
/// # Responsibilities
/// - Converts tokens into expression nodes.
/// - Validates grammar, reporting errors with line information.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares [`DynamicValue`](value::core::DynamicValue), the
/// tagged union of number, string, boolean, `null` and `undefined`, along
/// with the conversions between them.
///
/// # Responsibilities
/// - Defines the value variants.
/// - Converts values to numbers, strings and booleans.
/// - Renders values for display.
pub mod value;
