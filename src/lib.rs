//! # loosetype
//!
//! loosetype is a coercion engine for loosely typed primitive values written
//! in Rust. It applies arithmetic, comparison and logical operators to
//! numbers, strings, booleans, `null` and `undefined` the way JavaScript
//! does: numeric strings take part in arithmetic, `+` concatenates, `null`
//! loosely equals `undefined`, `NaN` equals nothing, and `&&`/`||` return one
//! of their operands without evaluating the other when they can.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;
use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::eval_expr,
        lexer::{LexerExtras, Token},
        parser::core::parse_statement,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the `OperatorTag` enum shared by
/// the parser and the coercion engine. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for literals, unary, binary and
///   conditional operators.
/// - Assigns every operator its arity.
/// - Attaches source lines to AST nodes for diagnostics.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating expressions. Coercion itself never fails; only malformed
/// source text and misused operators produce errors.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation and value
/// representation. The coercion engine's entry points live in
/// [`interpreter::evaluator::core`].
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric text conversion.
///
/// This module provides the conversions between `f64` and text used by both
/// the lexer (numeric literals) and the evaluator (numeric strings and string
/// concatenation).
///
/// # Responsibilities
/// - Read strings as numbers, yielding `NaN` for non-numeric text.
/// - Print numbers in shortest round-trip decimal form.
pub mod util;

pub use ast::OperatorTag;
pub use error::RuntimeError;
pub use interpreter::{
    evaluator::core::{evaluate, evaluate_lazy},
    value::core::DynamicValue,
};

/// Evaluates every expression in `source` and returns the last value.
///
/// Expressions are separated by `;` or line breaks. Blank lines and comments
/// are ignored; a source with no expressions yields `Ok(None)`. When
/// `auto_print` is set, the last value is printed to standard output in REPL
/// notation (strings quoted).
///
/// # Errors
/// Returns an error if lexing or parsing fails, or if an operator is misused.
///
/// # Examples
/// ```
/// use loosetype::{DynamicValue, get_result};
///
/// let result = get_result(r#""5" + 2"#, false).unwrap();
/// assert_eq!(result, Some(DynamicValue::from("52")));
///
/// // Only the last expression's value is returned.
/// let result = get_result("1 + 1; 0 || 'apple'", false).unwrap();
/// assert_eq!(result, Some(DynamicValue::from("apple")));
///
/// // Example with an intentional error (names are not bound to anything).
/// assert!(get_result("x + 1", false).is_err());
/// ```
pub fn get_result(source: &str,
                  auto_print: bool)
                  -> Result<Option<DynamicValue>, Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    loop {
        let line = lexer.extras.line;
        let Some(token) = lexer.next() else {
            break;
        };

        if let Ok(tok) = token {
            tokens.push((tok, line));
        } else {
            let slice = lexer.slice();
            if slice.starts_with(['"', '\'']) {
                return Err(Box::new(ParseError::UnterminatedString { line }));
            }
            return Err(Box::new(ParseError::UnexpectedToken { token: slice.to_string(),
                                                              line }));
        }
    }
    tokens.push((Token::NewLine, lexer.extras.line));

    let mut iter = tokens.iter().peekable();

    let mut result = None;

    loop {
        while let Some((tok, _)) = iter.peek()
              && tok.is_separator()
        {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }

        let expr = parse_statement(&mut iter)?;
        let value = eval_expr(&expr)?;
        debug!(line = expr.line_number(), value = %value.inspect(), "statement evaluated");
        result = Some(value);
    }

    if auto_print && let Some(v) = &result {
        println!("{}", v.inspect());
    }

    Ok(result)
}
