use logos::Logos;

use crate::util::num::string_to_number;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `1e3` or `0x1F`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+", parse_number)]
    Number(f64),
    /// String literal tokens in single or double quotes, such as `"apple"`.
    #[regex(r#""([^"\\\n]|\\.)*""#, unescape)]
    #[regex(r"'([^'\\\n]|\\.)*'", unescape)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// `null`
    #[token("null")]
    Null,
    /// `undefined`
    #[token("undefined")]
    Undefined,
    /// `NaN`
    #[token("NaN")]
    NaN,
    /// `Infinity`
    #[token("Infinity")]
    Infinity,
    /// `typeof`
    #[token("typeof")]
    TypeOf,
    /// `void`
    #[token("void")]
    Void,
    /// Any other name. No names are bound, so the parser rejects these.
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    }, allow_greedy = true)]
    MultiLineComment,
    /// `**`
    #[token("**")]
    StarStar,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `===`
    #[token("===")]
    EqualEqualEqual,
    /// `!==`
    #[token("!==")]
    BangEqualEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    AmpAmp,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `!`
    #[token("!")]
    Bang,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Line breaks end an expression, like `;`.
    #[token("\n", |lex| lex.extras.line += 1)]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` for the tokens that end an expression.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::NewLine | Self::Semicolon)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically resets or increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// The token regexes only admit well-formed literals, so this never yields
/// `NaN` in practice.
fn parse_number(lex: &logos::Lexer<Token>) -> f64 {
    string_to_number(lex.slice())
}

/// Strips the quotes from a string literal and resolves its escapes.
///
/// `\n`, `\t`, `\r` and `\0` map to their control characters. Any other
/// escaped character, including the quotes and the backslash, stands for
/// itself.
fn unescape(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];

    let mut text = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some('r') => text.push('\r'),
            Some('0') => text.push('\0'),
            Some(other) => text.push(other),
            None => {},
        }
    }

    text
}
