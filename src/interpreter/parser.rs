/// The parse loop and the token dispatch table.
///
/// Contains the top-level program parser, the binding-power driven
/// expression loop and the mapping from each token kind to its prefix and
/// infix handlers.
pub mod core;

/// Prefix handlers.
///
/// Builds the expressions that can start a sub-expression: number literals,
/// names and calls, parenthesized groups and unary minus.
pub mod unary;

/// Infix handlers for the arithmetic operators and their binding powers.
pub mod binary;

/// The `=` infix handler, producing assignments and function declarations.
pub mod statement;

/// Shared helpers for moving through the token stream.
pub mod utils;
