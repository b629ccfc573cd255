/// Binary operator evaluation logic.
///
/// Handles the arithmetic operators `+ - * / % ^` on `f64` values.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context and the
/// rendering of a program's output.
pub mod core;

/// Parameter frames of user-defined function calls.
///
/// Implements the shared and nested scoping modes for function parameters.
pub mod frame;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls and return value
/// computation.
pub mod function;
