/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: characters the lexer cannot classify, number literals that overflow,
/// tokens in positions where no parse rule applies and malformed assignments.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// program, such as reading an undefined name.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that aborts a run.
///
/// The first error raised by any stage ends the whole pipeline; its message
/// is what [`crate::run`] returns.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source failed to tokenize or parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
