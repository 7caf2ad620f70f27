/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// text. Parse errors include unexpected tokens, unterminated strings, unknown
/// identifiers and any other issue detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error type raised by the coercion engine. Type mismatches are
/// never errors: coercion always produces a value. The only failure is
/// structural misuse, such as handing a unary operator two operands.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
