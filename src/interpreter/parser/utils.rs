use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Binding power used for function arguments and parenthesized groups.
///
/// It is one above `=`, so an assignment can never appear inside either.
pub const GROUP_BINDING_POWER: u8 = 2;

/// Stands in for the current token once the stream is exhausted.
static END_OF_INPUT: (Token, usize) = (Token::End, 0);

/// Returns the current token without consuming it.
///
/// Token sequences always end with [`Token::End`], so running off the end is
/// treated as sitting on that sentinel.
pub(in crate::interpreter::parser) fn current<'a, I>(tokens: &mut Peekable<I>) -> &'a (Token, usize)
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().copied().unwrap_or(&END_OF_INPUT)
}

/// Consumes and returns the current token.
pub(in crate::interpreter::parser) fn advance<'a, I>(tokens: &mut Peekable<I>) -> &'a (Token, usize)
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next().unwrap_or(&END_OF_INPUT)
}

/// Consumes a closing parenthesis, or fails with
/// [`ParseError::MissingClosingParen`] if the current token is anything else.
pub(in crate::interpreter::parser) fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>,
                                                                  line: usize)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let (Token::RParen, _) = current(tokens) {
        tokens.next();
        return Ok(());
    }
    Err(ParseError::MissingClosingParen { line })
}

/// Parses the argument list of a call, positioned just after the `(`.
///
/// An immediately encountered `)` produces an empty list. Otherwise arguments
/// are parsed at [`GROUP_BINDING_POWER`] for as long as each one is followed
/// by a comma, and the list must end with `)`.
///
/// Grammar (simplified): `arguments := ")" | expression ("," expression)* ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening parenthesis.
/// - `line`: Line of the call, used when the list is left open.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an argument fails to parse,
/// - the list is not closed by `)`.
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                                                             line: usize)
                                                             -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut arguments = Vec::new();
    if let (Token::RParen, _) = current(tokens) {
        tokens.next();
        return Ok(arguments);
    }
    loop {
        arguments.push(parse_expression(tokens, GROUP_BINDING_POWER)?);
        if let (Token::Comma, _) = current(tokens) {
            tokens.next();
            continue;
        }
        break;
    }
    expect_closing_paren(tokens, line)?;
    Ok(arguments)
}
