//! Number formatting compatible with the Fortran reader of RADMC-3D.

/// Format like C's `%13.6e`: six decimals, signed two-digit-minimum
/// exponent, right-aligned in 13 columns.
pub fn format_sci(value: f64) -> String {
    if !value.is_finite() {
        let text = if value.is_nan() {
            "nan"
        } else if value > 0.0 {
            "inf"
        } else {
            "-inf"
        };
        return format!("{:>13}", text);
    }

    let raw = format!("{:.6e}", value);
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };

    format!("{:>13}", format!("{}e{}{:02}", mantissa, sign, exponent.abs()))
}

/// Format a value as a Fortran double literal, e.g. `5.d0` or `0.25d0`.
pub fn format_fortran_double(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}.d0", value as i64)
    } else {
        format!("{}d0", value)
    }
}
