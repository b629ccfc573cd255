use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer found input it could not classify.
    #[error("Error on line {line}: Unrecognized token '{token}'.")]
    UnrecognizedToken {
        /// The offending source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A number literal was too large for a 64-bit double.
    #[error("Error on line {line}: Number {literal} is too large or too small for a 64-bit double.")]
    NumericOverflow {
        /// The literal as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Found a token where no prefix or infix rule applies.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The kind of the token encountered, e.g. `)` or `(end)`.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')'.")]
    MissingClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function declaration had something other than a plain name in a
    /// parameter position, e.g. `f(2) = 3`.
    #[error("Error on line {line}: Invalid argument name. Example: f(x) = x * x")]
    InvalidArgumentName {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of `=` was neither a name nor a call shape.
    #[error("Error on line {line}: Invalid lvalue.")]
    InvalidLvalue {
        /// The source line where the error occurred.
        line: usize,
    },
}
