/// Built-in function implementations.
///
/// Contains the math functions available by default in every run.
pub mod builtin;
/// Function values and call evaluation.
///
/// Defines the built-in table, user-defined functions, and how calls bind
/// their arguments.
pub mod core;
/// `min` and `max` function implementations.
///
/// Returns the minimum or maximum value from a list of arguments.
pub mod min_max;
