use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Applies a binary arithmetic operator to two values.
    ///
    /// Plain IEEE-754 arithmetic: division by zero yields an infinity or NaN
    /// rather than an error, and `%` is the truncated remainder, which takes
    /// the sign of the dividend.
    ///
    /// Exponentiation follows the usual calculator conventions where they
    /// differ from [`f64::powf`]: a NaN exponent always gives NaN, and so does
    /// raising `1` or `-1` to an infinite power.
    ///
    /// # Example
    /// ```
    /// use tdcalc::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mod, -7.0, 3.0), -1.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
    /// assert!(Context::eval_binary(BinaryOperator::Pow, 1.0, f64::NAN).is_nan());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Mod => left % right,
            BinaryOperator::Pow => power(left, right),
        }
    }
}

fn power(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        return f64::NAN;
    }
    base.powf(exponent)
}
