//! Number formatting with C `%g` semantics.
//!
//! Six significant digits, trailing zeros and a trailing decimal point
//! removed. Exponential form (`1.5e+07`, `2e-05`) is used when the decimal
//! exponent after rounding is below -4 or at least 6; the exponent always
//! carries a sign and at least two digits. NaN and infinities print as
//! `nan`, `-nan`, `inf` and `-inf`, following glibc.

/// Significant digits kept, the `%g` default.
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Formats `n` like `printf("%g", n)`.
///
/// ```
/// use chain_json::number::format_general;
///
/// assert_eq!(format_general(1.0), "1");
/// assert_eq!(format_general(1234567.0), "1.23457e+06");
/// assert_eq!(format_general(0.0001), "0.0001");
/// assert_eq!(format_general(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn format_general(n: f64) -> String {
    let sign = if n.is_sign_negative() { "-" } else { "" };
    if n.is_nan() {
        return format!("{sign}nan");
    }
    if n.is_infinite() {
        return format!("{sign}inf");
    }
    format_finite(n).unwrap_or_else(|| n.to_string())
}

fn format_finite(n: f64) -> Option<String> {
    // Rounds to the final digit count first, so the exponent that picks
    // the style is the post-rounding one.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, n);
    let (mantissa, exponent) = scientific.split_once('e')?;
    let exponent: i32 = exponent.parse().ok()?;

    let max_exponent = i32::try_from(SIGNIFICANT_DIGITS).ok()?;
    if exponent < -4 || exponent >= max_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        Some(format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        ))
    } else {
        let decimals = usize::try_from(max_exponent - 1 - exponent).ok()?;
        let fixed = format!("{n:.decimals$}");
        Some(trim_fraction(&fixed).to_owned())
    }
}

/// Strips trailing zeros after a decimal point, then the point itself.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
