/// Formats a value as decimal text with at most 15 significant digits.
///
/// The analog of C's `%.15G`: fixed notation when the decimal exponent
/// of the rounded value lies in `-4..15`, scientific notation otherwise,
/// with trailing zeros (and a dangling decimal point) trimmed in both
/// forms. Fifteen significant digits are enough to round-trip any value
/// the tokenizer can produce from decimal input while hiding the noise
/// of the last binary digits.
///
/// Non-finite values render through `f64`'s own `Display`.
///
/// # Parameters
/// - `value`: The value to render.
///
/// # Returns
/// The shortest 15-significant-digit representation of `value`.
///
/// # Example
/// ```
/// use rcalc::util::fmt::format_value;
///
/// assert_eq!(format_value(512.0), "512");
/// assert_eq!(format_value(0.1), "0.1");
/// assert_eq!(format_value(-2.5), "-2.5");
/// assert_eq!(format_value(1.0 / 3.0), "0.333333333333333");
/// assert_eq!(format_value(1e20), "1e20");
/// assert_eq!(format_value(2e-5), "2e-5");
/// assert_eq!(format_value(0.0), "0");
/// assert_eq!(format_value(1.0 / 0.0), "inf");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Round to 15 significant digits first; the exponent of the rounded
    // value decides the notation (999999999999999.9 becomes 1e15, not a
    // 16-digit fixed string).
    let scientific = format!("{value:.14e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if (-4..15).contains(&exponent) {
        let precision = usize::try_from(14 - exponent).unwrap_or(0);
        let fixed = format!("{value:.precision$}");
        if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            fixed
        }
    } else {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        format!("{mantissa}e{exponent}")
    }
}
