use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_logical_or},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the conditional operator, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := conditional`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_conditional(tokens)
}

/// Parses a conditional expression.
///
/// Syntax:
/// ```text
///     <condition> ? <then_expr> : <else_expr>
/// ```
/// The operator is right-associative, so `a ? b : c ? d : e` parses as
/// `a ? b : (c ? d : e)`. Both branches may themselves be conditionals.
///
/// Grammar: `conditional := logical_or ("?" conditional ":" conditional)?`
///
/// # Errors
/// - `ExpectedColon` if the `:` separating the branches is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_conditional<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_logical_or(tokens)?;

    let Some((Token::Question, line)) = tokens.peek() else {
        return Ok(condition);
    };
    let line = *line;
    tokens.next();

    let then_branch = parse_conditional(tokens)?;

    match tokens.peek() {
        Some((Token::Colon, _)) => {
            tokens.next();
        },
        _ => return Err(ParseError::ExpectedColon { line }),
    }

    let else_branch = parse_conditional(tokens)?;

    Ok(Expr::Conditional { condition: Box::new(condition),
                           then_branch: Box::new(then_branch),
                           else_branch: Box::new(else_branch),
                           line })
}

/// Parses one statement: an expression followed by a separator.
///
/// A statement ends at `;`, at a line break, or at the end of the input. The
/// separator itself is left in the stream for the caller to skip.
///
/// # Errors
/// - `UnexpectedTrailingTokens` if anything other than a separator follows
///   the expression.
/// - Propagates any errors from expression parsing.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;

    match tokens.peek() {
        None => Ok(expr),
        Some((tok, _)) if tok.is_separator() => Ok(expr),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                       line:  *line, })
        },
    }
}
