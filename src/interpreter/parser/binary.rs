use std::iter::Peekable;

use crate::{
    ast::{Expr, OperatorTag},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_unary, token_to_unary_operator},
        },
    },
};

/// Parses one left-associative precedence level.
///
/// Parses an operand with `operand`, then keeps folding
/// `operator operand` pairs into `Expr::BinaryOp` nodes for as long as the
/// next token is a binary operator accepted by `accepts`.
///
/// Grammar: `level := operand (op operand)*`
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           operand: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                           accepts: fn(OperatorTag) -> bool)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = operand(tokens)?;

    while let Some((token, line)) = tokens.peek() {
        let op = match token_to_binary_operator(token) {
            Some(op) if accepts(op) => op,
            _ => break,
        };

        let line = *line;
        tokens.next(); // consume operator

        let right = operand(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||`.
/// Precedence is lower than AND.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `OperatorTag::Or`.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_logical_and, |op| op == OperatorTag::Or)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&`.
/// Precedence is higher than OR, so `a || b && c` parses as `a || (b && c)`.
///
/// Grammar: `logical_and := equality ("&&" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_equality, |op| op == OperatorTag::And)
}

/// Parses equality operators: `==`, `!=`, `===` and `!==`.
///
/// Grammar: `equality := relational (("==" | "!=" | "===" | "!==") relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_relational, is_equality_op)
}

/// Parses relational operators: `<`, `>`, `<=` and `>=`.
///
/// Grammar: `relational := additive (("<" | ">" | "<=" | ">=") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_additive, is_relational_op)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so
/// `1 + 2 + "3"` parses as `(1 + 2) + "3"` and yields `"33"`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_multiplicative, |op| {
        matches!(op, OperatorTag::Add | OperatorTag::Sub)
    })
}

/// Parses multiplication-level expressions: `*`, `/` and `%`.
///
/// Grammar: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, parse_exponent, |op| {
        matches!(op, OperatorTag::Mul | OperatorTag::Div | OperatorTag::Mod)
    })
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ** b ** c` parses as
/// `a ** (b ** c)`. The exponent may carry a unary operator (`2 ** -1`), but
/// the base may not: `-2 ** 2` is rejected because it reads both as
/// `(-2) ** 2` and `-(2 ** 2)`.
///
/// Grammar: `exponent := unary | primary "**" exponent`
///
/// # Errors
/// - `AmbiguousExponent` if a unary operator is applied directly to the
///   base.
/// - Propagates any errors from operand parsing.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let starts_with_unary =
        matches!(tokens.peek(), Some((tok, _)) if token_to_unary_operator(tok).is_some());

    let base = parse_unary(tokens)?;

    let Some((Token::StarStar, line)) = tokens.peek() else {
        return Ok(base);
    };
    let line = *line;

    if starts_with_unary {
        return Err(ParseError::AmbiguousExponent { line });
    }
    tokens.next();

    let exponent = parse_exponent(tokens)?;

    Ok(Expr::BinaryOp { left: Box::new(base),
                        op: OperatorTag::Pow,
                        right: Box::new(exponent),
                        line })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(OperatorTag)` when the token represents a binary operator
/// (arithmetic, equality, ordering or logical). Returns `None` for all
/// other tokens, including `-` and `+` in their unary role; the caller's
/// position decides which role a token plays.
///
/// # Example
/// ```
/// use loosetype::{
///     ast::OperatorTag,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(OperatorTag::Add));
/// assert_eq!(token_to_binary_operator(&Token::EqualEqualEqual),
///            Some(OperatorTag::StrictEq));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<OperatorTag> {
    match token {
        Token::Plus => Some(OperatorTag::Add),
        Token::Minus => Some(OperatorTag::Sub),
        Token::Star => Some(OperatorTag::Mul),
        Token::Slash => Some(OperatorTag::Div),
        Token::Percent => Some(OperatorTag::Mod),
        Token::StarStar => Some(OperatorTag::Pow),
        Token::EqualEqual => Some(OperatorTag::Eq),
        Token::BangEqual => Some(OperatorTag::NotEq),
        Token::EqualEqualEqual => Some(OperatorTag::StrictEq),
        Token::BangEqualEqual => Some(OperatorTag::StrictNotEq),
        Token::Less => Some(OperatorTag::Lt),
        Token::Greater => Some(OperatorTag::Gt),
        Token::LessEqual => Some(OperatorTag::Lte),
        Token::GreaterEqual => Some(OperatorTag::Gte),
        Token::AmpAmp => Some(OperatorTag::And),
        Token::PipePipe => Some(OperatorTag::Or),
        _ => None,
    }
}

/// Determines whether a binary operator is an equality test.
///
/// # Example
/// ```
/// use loosetype::{ast::OperatorTag, interpreter::parser::binary::is_equality_op};
///
/// assert!(is_equality_op(OperatorTag::StrictNotEq));
/// assert!(!is_equality_op(OperatorTag::Lt));
/// ```
#[must_use]
pub const fn is_equality_op(op: OperatorTag) -> bool {
    matches!(op,
             OperatorTag::Eq
             | OperatorTag::NotEq
             | OperatorTag::StrictEq
             | OperatorTag::StrictNotEq)
}

/// Determines whether a binary operator is an ordering comparison.
///
/// # Example
/// ```
/// use loosetype::{ast::OperatorTag, interpreter::parser::binary::is_relational_op};
///
/// assert!(is_relational_op(OperatorTag::Lte));
/// assert!(!is_relational_op(OperatorTag::Eq));
/// ```
#[must_use]
pub const fn is_relational_op(op: OperatorTag) -> bool {
    matches!(op,
             OperatorTag::Lt | OperatorTag::Gt | OperatorTag::Lte | OperatorTag::Gte)
}
