/// Computes the minimum or maximum of any number of values.
///
/// The operation is selected by the `name` parameter, which must be `"min"`
/// or `"max"`. With no arguments the result is the identity of the
/// operation: `Infinity` for `min`, `-Infinity` for `max`. A NaN argument
/// makes the whole result NaN. `-0` orders below `0`, so the sign of a zero
/// result does not depend on argument order.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: The evaluated arguments.
///
/// # Example
/// ```
/// use tdcalc::interpreter::evaluator::function::min_max::min_max;
///
/// assert_eq!(min_max("min", &[3.0, 7.0, -1.0]), -1.0);
/// assert_eq!(min_max("max", &[2.5, 1.0]), 2.5);
/// assert_eq!(min_max("max", &[]), f64::NEG_INFINITY);
/// assert!(min_max("min", &[1.0, f64::NAN]).is_nan());
/// assert!(min_max("min", &[0.0, -0.0]).is_sign_negative());
/// assert!(min_max("max", &[-0.0, 0.0]).is_sign_positive());
/// ```
#[must_use]
pub fn min_max(name: &str, args: &[f64]) -> f64 {
    let (identity, pick): (f64, fn(f64, f64) -> f64) = if name == "min" {
        (f64::INFINITY, min)
    } else {
        (f64::NEG_INFINITY, max)
    };

    args.iter()
        .try_fold(identity, |acc, &value| (!value.is_nan()).then(|| pick(acc, value)))
        .unwrap_or(f64::NAN)
}

fn min(a: f64, b: f64) -> f64 {
    if a == b {
        if a.is_sign_negative() { a } else { b }
    } else {
        a.min(b)
    }
}

fn max(a: f64, b: f64) -> f64 {
    if a == b {
        if a.is_sign_positive() { a } else { b }
    } else {
        a.max(b)
    }
}
