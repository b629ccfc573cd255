use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Operators are single characters, numbers are decimal literals and every
/// other run of non-whitespace characters is an identifier. There are no
/// keywords.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras, error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `1.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// Identifier tokens; any run of characters that are neither whitespace,
    /// digits nor operators, such as `x`, `pi`, `_tmp` or `μ`.
    #[regex(r"[^0-9+\-*/\^%=(),\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+", |lex| lex.slice().to_string())]
    Identifier(String),
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
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Spaces, tabs, newlines, no-break spaces and the byte order mark.
    /// Newlines advance the line counter.
    ///
    /// The callback always skips, so this variant never reaches the parser.
    /// It exists because logos only runs callbacks on token variants, and
    /// the line counter needs one.
    #[regex(r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+", |lex| {
        let newlines     = lex.slice().chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    Whitespace,
    /// End of input. Never produced by the logos lexer itself; [`tokenize`]
    /// appends exactly one after the last real token.
    End,
}

impl Token {
    /// The kind name used in diagnostics, e.g. `number`, `identifier`,
    /// `(end)` or the operator glyph itself.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Identifier(_) => "identifier",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::Percent => "%",
            Self::Equals => "=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Whitespace => "whitespace",
            Self::End => "(end)",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Errors raised from inside the logos callbacks.
///
/// Logos requires the error type to have a default, which is what it reports
/// for input it cannot match at all.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No token pattern matched the input.
    #[default]
    Unrecognized,
    /// A number literal parsed to an infinite value.
    NumericOverflow,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a number literal from the current token slice.
///
/// The literal grammar guarantees the slice is a valid `f64`; the only
/// failure left is overflow to infinity for very long digit runs.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    let value: f64 = lex.slice().parse().map_err(|_| LexError::Unrecognized)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LexError::NumericOverflow)
    }
}

/// Converts source text into a line-tagged token sequence.
///
/// The sequence always ends with exactly one [`Token::End`].
///
/// # Errors
/// - [`ParseError::NumericOverflow`] if a number literal is not finite.
/// - [`ParseError::UnrecognizedToken`] if some input matches no token.
///
/// # Example
/// ```
/// use tdcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 2.5").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|(tok, _)| tok.clone()).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".to_string()),
///                 Token::Equals,
///                 Token::Number(2.5),
///                 Token::End]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(LexError::NumericOverflow) => {
                return Err(ParseError::NumericOverflow { literal: lexer.slice().to_string(),
                                                         line:    lexer.extras.line, });
            },
            Err(LexError::Unrecognized) => {
                return Err(ParseError::UnrecognizedToken { token: lexer.slice().to_string(),
                                                           line:  lexer.extras.line, });
            },
        }
    }

    tokens.push((Token::End, lexer.extras.line));
    Ok(tokens)
}
