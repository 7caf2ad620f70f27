use std::iter::Peekable;

use crate::{
    ast::{Expr, OperatorTag},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
        value::core::DynamicValue,
    },
};

/// Maps a token to the unary operator it introduces in prefix position.
///
/// # Example
/// ```
/// use loosetype::{
///     ast::OperatorTag,
///     interpreter::{lexer::Token, parser::unary::token_to_unary_operator},
/// };
///
/// assert_eq!(token_to_unary_operator(&Token::Minus), Some(OperatorTag::Neg));
/// assert_eq!(token_to_unary_operator(&Token::TypeOf), Some(OperatorTag::TypeOf));
/// assert_eq!(token_to_unary_operator(&Token::Star), None);
/// ```
#[must_use]
pub const fn token_to_unary_operator(token: &Token) -> Option<OperatorTag> {
    match token {
        Token::Bang => Some(OperatorTag::Not),
        Token::Minus => Some(OperatorTag::Neg),
        Token::Plus => Some(OperatorTag::Plus),
        Token::TypeOf => Some(OperatorTag::TypeOf),
        Token::Void => Some(OperatorTag::Void),
        _ => None,
    }
}

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `!`  (logical not)
/// - `-`  (numeric negation)
/// - `+`  (numeric conversion)
/// - `typeof`
/// - `void`
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`, and `typeof typeof 1` yields `"string"`.
///
/// Grammar:
/// ```text
///     unary := ("!" | "-" | "+" | "typeof" | "void") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((token, line)) = tokens.peek()
       && let Some(op) = token_to_unary_operator(token)
    {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        return Ok(Expr::UnaryOp { op,
                                  expr: Box::new(expr),
                                  line });
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - number and string literals
/// - `true`, `false`, `null`, `undefined`, `NaN` and `Infinity`
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | "(" expression ")"
/// ```
/// # Errors
/// - `UnexpectedEndOfInput` if the expression stops at a separator or the end
///   of the input.
/// - `UnknownIdentifier` for any name that is not a literal keyword.
/// - `ExpectedClosingParen` if a group is not closed.
/// - `UnexpectedToken` for anything else.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    let value = match token {
        Token::Number(n) => DynamicValue::Number(*n),
        Token::Str(s) => DynamicValue::from(s.as_str()),
        Token::Bool(b) => DynamicValue::Boolean(*b),
        Token::Null => DynamicValue::Null,
        Token::Undefined => DynamicValue::Undefined,
        Token::NaN => DynamicValue::Number(f64::NAN),
        Token::Infinity => DynamicValue::Number(f64::INFINITY),
        Token::LParen => return parse_grouping(tokens, line),
        Token::Identifier(name) => {
            return Err(ParseError::UnknownIdentifier { name: name.clone(),
                                                       line });
        },
        tok if tok.is_separator() => return Err(ParseError::UnexpectedEndOfInput { line }),
        tok => {
            return Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                     line });
        },
    };

    Ok(Expr::Literal { value, line })
}

/// Parses the inside of a parenthesized expression.
///
/// The opening `(` has already been consumed. Grouping only affects
/// precedence; no node is produced for the parentheses themselves.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// - `ExpectedClosingParen` if the next token after the expression is not
///   `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}
