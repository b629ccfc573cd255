use std::iter::Peekable;

use log::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::{
                ADDITIVE_BINDING_POWER, MULTIPLICATIVE_BINDING_POWER, POWER_BINDING_POWER,
                binary_operator, parse_binary,
            },
            statement::{ASSIGNMENT_BINDING_POWER, parse_assignment},
            unary::{parse_group, parse_identifier, parse_negation},
            utils::{advance, current},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// A program is a sequence of statements, each parsed as one expression at
/// binding power `0`, until the end-of-input token is reached. Statements
/// need no separator: parsing stops wherever the next token cannot extend
/// the current expression, so `2 3` is two statements.
///
/// # Parameters
/// - `tokens`: The full token sequence produced by the lexer.
///
/// # Returns
/// The top-level expressions in source order.
///
/// # Example
/// ```
/// use tdcalc::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("x = 5\nx + 1").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Expr>> {
    let mut iter = tokens.iter().peekable();
    let mut program = Vec::new();

    while !matches!(current(&mut iter), (Token::End, _)) {
        let statement = parse_expression(&mut iter, 0)?;
        trace!("parsed statement: {statement:?}");
        program.push(statement);
    }

    Ok(program)
}

/// Parses one expression, binding operators more tightly than `rbp`.
///
/// This is the precedence-climbing loop. The current token is consumed and
/// its prefix handler builds the initial tree. Then, as long as the next
/// token's left binding power exceeds `rbp`, that token is consumed and its
/// infix handler extends the tree with it as the left operand.
///
/// Right associativity falls out of the binding powers: `^` parses its right
/// operand at a lower power than its own, so a following `^` is absorbed
/// into the right operand.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the
///   expression.
/// - `rbp`: Right binding power of the context the expression appears in.
///
/// # Errors
/// - `UnexpectedToken` if a token has no prefix handler, or no infix handler
///   where the loop needs one.
/// - Propagates any errors from the handlers.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, rbp: u8) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, line) = advance(tokens);
    let mut left = prefix(tokens, token, *line)?;

    while rbp < left_binding_power(&current(tokens).0) {
        let (token, line) = advance(tokens);
        left = infix(tokens, token, *line, left)?;
    }

    Ok(left)
}

/// Left binding power of each token kind; `0` for tokens that never continue
/// an expression.
///
/// | token           | lbp |
/// |-----------------|-----|
/// | `^`             | 6   |
/// | `*` `/` `%`     | 4   |
/// | `+` `-`         | 3   |
/// | `=`             | 1   |
/// | everything else | 0   |
#[must_use]
pub const fn left_binding_power(token: &Token) -> u8 {
    match token {
        Token::Caret => POWER_BINDING_POWER,
        Token::Star | Token::Slash | Token::Percent => MULTIPLICATIVE_BINDING_POWER,
        Token::Plus | Token::Minus => ADDITIVE_BINDING_POWER,
        Token::Equals => ASSIGNMENT_BINDING_POWER,
        Token::Number(_)
        | Token::Identifier(_)
        | Token::LParen
        | Token::RParen
        | Token::Comma
        | Token::Whitespace
        | Token::End => 0,
    }
}

/// Dispatches a token that starts an expression to its prefix handler.
fn prefix<'a, I>(tokens: &mut Peekable<I>, token: &Token, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match token {
        Token::Number(value) => Ok(Expr::Number { value: *value,
                                                  line }),
        Token::Identifier(name) => parse_identifier(tokens, name, line),
        Token::LParen => parse_group(tokens, line),
        Token::Minus => parse_negation(tokens, line),
        Token::Plus
        | Token::Star
        | Token::Slash
        | Token::Caret
        | Token::Percent
        | Token::Equals
        | Token::RParen
        | Token::Comma
        | Token::Whitespace
        | Token::End => Err(ParseError::UnexpectedToken { token: token.kind().to_string(),
                                                          line }),
    }
}

/// Dispatches a token that continues an expression to its infix handler.
fn infix<'a, I>(tokens: &mut Peekable<I>,
                token: &Token,
                line: usize,
                left: Expr)
                -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some(op) = binary_operator(token) {
        return parse_binary(tokens, left, op, line);
    }

    match token {
        Token::Equals => parse_assignment(tokens, left, line),
        _ => Err(ParseError::UnexpectedToken { token: token.kind().to_string(),
                                               line }),
    }
}
