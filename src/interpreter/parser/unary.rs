use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{GROUP_BINDING_POWER, current, expect_closing_paren, parse_arguments},
        },
    },
};

/// Binding power of the operand of prefix `-`.
///
/// It is higher than that of `^`, so `-2^2` parses as `(-2)^2`.
pub const NEGATION_BINDING_POWER: u8 = 7;

/// Prefix handler for `-`.
///
/// Parses the operand at [`NEGATION_BINDING_POWER`] and wraps it in an
/// [`Expr::UnaryOp`]. The negated value still takes part in the surrounding
/// expression, so `-2^2` evaluates to `4` and `-2*3` to `-6`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `-`.
/// - `line`: Line number of the `-` token.
pub(in crate::interpreter::parser) fn parse_negation<'a, I>(tokens: &mut Peekable<I>,
                                                            line: usize)
                                                            -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, NEGATION_BINDING_POWER)?;
    Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                       expr: Box::new(expr),
                       line })
}

/// Prefix handler for `(`.
///
/// Parses the enclosed expression at [`GROUP_BINDING_POWER`] and consumes the
/// closing parenthesis. Grouping leaves no trace in the tree.
///
/// # Errors
/// - `MissingClosingParen` if the group is not closed.
/// - Propagates any errors from the inner expression.
pub(in crate::interpreter::parser) fn parse_group<'a, I>(tokens: &mut Peekable<I>,
                                                         line: usize)
                                                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let inner = parse_expression(tokens, GROUP_BINDING_POWER)?;
    expect_closing_paren(tokens, line)?;
    Ok(inner)
}

/// Prefix handler for identifiers.
///
/// Looks at the following token: an opening parenthesis makes this a call
/// such as `max(1, 2)` or `random()`, anything else leaves a bare
/// [`Expr::Identifier`].
///
/// # Parameters
/// - `tokens`: Token stream positioned after the identifier.
/// - `name`: The identifier text.
/// - `line`: Line number of the identifier token.
///
/// # Errors
/// - `MissingClosingParen` if an argument list is not closed.
/// - Propagates any errors from the argument expressions.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              name: &str,
                                                              line: usize)
                                                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let (Token::LParen, _) = current(tokens) {
        tokens.next();
        let arguments = parse_arguments(tokens, line)?;
        return Ok(Expr::Call { name: name.to_string(),
                               arguments,
                               line });
    }

    Ok(Expr::Identifier { name: name.to_string(),
                          line })
}
