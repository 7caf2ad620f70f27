use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of an expression unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `:` of a conditional expression was expected but not found.
    #[error("Error on line {line}: Expected ':' in conditional expression but none found.")]
    ExpectedColon {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was opened but never closed on the same line.
    #[error("Error on line {line}: Unterminated string literal.")]
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An identifier that names no literal or operator.
    #[error("Error on line {line}: Unknown identifier '{name}'. Only literal values are supported.")]
    UnknownIdentifier {
        /// The identifier as written.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator was applied directly to the base of `**`.
    #[error("Error on line {line}: Unary operator used immediately before '**'. Add parentheses to \
             disambiguate.")]
    AmbiguousExponent {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after an expression should have ended.
    #[error("Error on line {line}: Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}
