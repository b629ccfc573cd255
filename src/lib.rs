//! # tdcalc
//!
//! tdcalc is a small expression language written in Rust. It evaluates
//! numeric literals, the arithmetic operators `+ - * / % ^`, parenthesized
//! groups, the constants `pi` and `e`, common math functions, variables and
//! single-expression user-defined functions.
//!
//! ```
//! assert_eq!(tdcalc::run("f(x) = x * 2\nf(5)"), "10");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::time::Instant;

use log::debug;

use crate::interpreter::{
    evaluator::core::Context, lexer::tokenize, parser::core::parse_program,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator types that
/// represent a parsed program as a list of trees. The AST is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one node type per language construct.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Errors are structured values; their messages are only
/// rendered when a run returns.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and the offending token or name.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing and evaluation and holds the
/// per-run configuration.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities.
///
/// Currently the canonical rendering of numbers as decimal strings.
pub mod util;

pub use error::Error;
pub use interpreter::options::Options;

/// Tokenizes, parses and evaluates `source`, returning the program output.
///
/// The output is the concatenation of the values of every value-producing
/// statement.
///
/// # Errors
/// Returns the first error raised by any stage.
///
/// # Examples
/// ```
/// use tdcalc::{Options, get_result};
///
/// let output = get_result("2 + 3 * 4", &Options::default()).unwrap();
/// assert_eq!(output, "14");
///
/// // 'y' is not defined.
/// assert!(get_result("y + 1", &Options::default()).is_err());
/// ```
pub fn get_result(source: &str, options: &Options) -> Result<String, Error> {
    let tokens = tokenize(source)?;
    let program = parse_program(&tokens)?;

    let mut context = Context::new(*options);
    Ok(context.evaluate(&program)?)
}

/// Runs `source` with the given options and returns its output.
///
/// This never fails: if any stage raises an error, the error message becomes
/// the result instead. Elapsed time is reported through the `log` facade at
/// debug level.
///
/// # Examples
/// ```
/// use tdcalc::{Options, interpreter::options::FrameMode, run_with};
///
/// let options = Options::default().with_frame_mode(FrameMode::Nested);
/// assert_eq!(run_with("sq(x) = x * x\nsq(sq(2))", &options), "16");
/// ```
#[must_use]
pub fn run_with(source: &str, options: &Options) -> String {
    let start = Instant::now();

    let output = match get_result(source, options) {
        Ok(output) => output,
        Err(e) => {
            debug!("run failed: {e}");
            e.to_string()
        },
    };

    debug!("evaluated {} byte(s) in {:?}", source.len(), start.elapsed());
    output
}

/// Runs `source` with the default options and returns its output.
///
/// Each call starts from a fresh environment; nothing defined by one run is
/// visible to the next.
///
/// # Examples
/// ```
/// use tdcalc::run;
///
/// assert_eq!(run("x = 5\nx + 1"), "6");
/// assert_eq!(run("x + 1"), "Error on line 1: x is undefined.");
/// assert_eq!(run("(1 + 2"), "Error on line 1: Expected closing parenthesis ')'.");
/// ```
#[must_use]
pub fn run(source: &str) -> String {
    run_with(source, &Options::default())
}
