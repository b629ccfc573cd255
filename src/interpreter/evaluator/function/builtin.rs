/// Returns the `index`-th argument, or NaN when it was not supplied.
///
/// Built-ins never fail on a short argument list; the missing values are
/// simply undefined and propagate as NaN.
///
/// # Example
/// ```
/// use tdcalc::interpreter::evaluator::function::builtin::arg;
///
/// assert_eq!(arg(&[1.0, 2.0], 1), 2.0);
/// assert!(arg(&[], 0).is_nan());
/// ```
#[must_use]
pub fn arg(args: &[f64], index: usize) -> f64 {
    args.get(index).copied().unwrap_or(f64::NAN)
}

/// Defines a one-argument builtin on top of an `f64` method.
///
/// Extra arguments are ignored and a missing argument is NaN.
///
/// # Example
/// ```
/// use tdcalc::interpreter::evaluator::function::builtin::sin;
///
/// let r = sin(&[std::f64::consts::PI / 2.0]);
/// assert_eq!(r, 1.0);
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[must_use]
        pub fn $fname(args: &[f64]) -> f64 {
            arg(args, 0).$real_fn()
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(asin, asin);
real_builtin!(acos, acos);
real_builtin!(atan, atan);
real_builtin!(abs, abs);
real_builtin!(ceil, ceil);
real_builtin!(floor, floor);
real_builtin!(exp, exp);
real_builtin!(sqrt, sqrt);
real_builtin!(log, ln);

/// Rounds to the nearest integer, with halves going toward positive
/// infinity.
///
/// This differs from [`f64::round`] for negative halves: `round(-2.5)` is
/// `-2`, not `-3`.
///
/// # Example
/// ```
/// use tdcalc::interpreter::evaluator::function::builtin::round;
///
/// assert_eq!(round(&[2.5]), 3.0);
/// assert_eq!(round(&[-2.5]), -2.0);
/// assert_eq!(round(&[-2.6]), -3.0);
/// assert!(round(&[-0.4]).is_sign_negative());
/// ```
#[must_use]
pub fn round(args: &[f64]) -> f64 {
    let x = arg(args, 0);
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    // -0.4 rounds to -0, not 0.
    if rounded == 0.0 { rounded.copysign(x) } else { rounded }
}

/// Returns a uniformly distributed value in `[0, 1)`. Arguments are ignored.
///
/// # Example
/// ```
/// use tdcalc::interpreter::evaluator::function::builtin::random;
///
/// let r = random(&[]);
/// assert!((0.0..1.0).contains(&r));
/// ```
#[must_use]
pub fn random(_args: &[f64]) -> f64 {
    rand::random::<f64>()
}
