/// Smallest magnitude printed in positional notation.
const MIN_POSITIONAL: f64 = 1e-6;
/// Magnitude from which exponent notation is used.
const MAX_POSITIONAL: f64 = 1e21;

/// Renders a number in its canonical decimal form.
///
/// The form is the shortest string that reads back as the same `f64`:
/// - integral values print without a fraction (`14`, not `14.0`);
/// - negative zero prints as `0`;
/// - non-finite values print as `NaN`, `Infinity` and `-Infinity`;
/// - magnitudes of at least `1e21` or below `1e-6` use exponent notation
///   with an explicit sign on the exponent (`1e+21`, `1.5e-7`).
///
/// ## Example
/// ```
/// use tdcalc::util::num::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// assert_eq!(format_number(0.000001), "0.000001");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let name = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return name.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (MIN_POSITIONAL..MAX_POSITIONAL).contains(&magnitude) {
        return value.to_string();
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        },
        _ => scientific,
    }
}
