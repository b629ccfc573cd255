/// Numeric formatting helpers.
///
/// This module turns the `f64` results of evaluation into the canonical
/// decimal strings that make up a program's output.
pub mod num;
