use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::GROUP_BINDING_POWER,
        },
    },
};

/// Left binding power of `=`, the lowest of all operators.
pub const ASSIGNMENT_BINDING_POWER: u8 = 1;

/// Infix handler for `=`.
///
/// The shape of the already parsed left side decides what is built:
///
/// - a call such as `f(x, y)` declares a function whose parameters are the
///   call's arguments, which must all be bare names;
/// - a bare name such as `x` assigns a variable;
/// - anything else is rejected.
///
/// The right side is parsed at [`GROUP_BINDING_POWER`], one above `=`, so it
/// never swallows another `=`. This means `a = b = 1` does not chain: the
/// second `=` is applied to the finished assignment and fails with
/// `InvalidLvalue`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `=`.
/// - `left`: The left-hand side.
/// - `line`: Line number of the `=` token.
///
/// # Errors
/// - `InvalidArgumentName` if a declared parameter is not a bare name.
/// - `InvalidLvalue` if the left side is neither a call nor a name.
/// - Propagates any errors from the right-hand expression.
pub(in crate::interpreter::parser) fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                                                              left: Expr,
                                                              line: usize)
                                                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match left {
        Expr::Call { name, arguments, .. } => {
            let params = arguments.into_iter()
                                  .map(|argument| match argument {
                                      Expr::Identifier { name, .. } => Ok(name),
                                      _ => Err(ParseError::InvalidArgumentName { line }),
                                  })
                                  .collect::<ParseResult<Vec<_>>>()?;

            let body = parse_expression(tokens, GROUP_BINDING_POWER)?;
            Ok(Expr::FunctionDecl { name,
                                    params,
                                    body: Box::new(body),
                                    line })
        },
        Expr::Identifier { name, .. } => {
            let value = parse_expression(tokens, GROUP_BINDING_POWER)?;
            Ok(Expr::Assignment { name,
                                  value: Box::new(value),
                                  line })
        },
        _ => Err(ParseError::InvalidLvalue { line }),
    }
}
