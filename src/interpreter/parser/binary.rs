use std::iter::Peekable;

use log::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Left binding power of `^`.
pub const POWER_BINDING_POWER: u8 = 6;
/// Left binding power of `*`, `/` and `%`.
pub const MULTIPLICATIVE_BINDING_POWER: u8 = 4;
/// Left binding power of `+` and `-`.
pub const ADDITIVE_BINDING_POWER: u8 = 3;

/// Maps an operator token to the binary operator it denotes in infix
/// position.
#[must_use]
pub const fn binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Binding power used to parse the right operand of `op`.
///
/// Left-associative operators reuse their own left binding power, so an
/// operator of the same level ends the right operand. `^` uses one less,
/// which lets a following `^` bind into the right operand instead.
#[must_use]
pub const fn right_binding_power(op: BinaryOperator) -> u8 {
    match op {
        BinaryOperator::Pow => POWER_BINDING_POWER - 1,
        BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => {
            MULTIPLICATIVE_BINDING_POWER
        },
        BinaryOperator::Add | BinaryOperator::Sub => ADDITIVE_BINDING_POWER,
    }
}

/// Infix handler for the arithmetic operators.
///
/// The operator token has already been consumed; `left` is the tree built so
/// far. Parses the right operand and combines both into an
/// [`Expr::BinaryOp`].
///
/// `1 - 2 - 3` parses as `(1 - 2) - 3`, while `2 ^ 3 ^ 2` parses as
/// `2 ^ (3 ^ 2)`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the operator.
/// - `left`: Left operand.
/// - `op`: The operator.
/// - `line`: Line number of the operator token.
pub(in crate::interpreter::parser) fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                                                          left: Expr,
                                                          op: BinaryOperator,
                                                          line: usize)
                                                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let right = parse_expression(tokens, right_binding_power(op))?;
    trace!("line {line}: infix '{op}'");
    Ok(Expr::BinaryOp { left: Box::new(left),
                        op,
                        right: Box::new(right),
                        line })
}
