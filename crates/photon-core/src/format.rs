//! `%g`-style general number formatting for console output.

/// Significant digits used by `%g` when no precision is given.
pub const GENERAL_PRECISION: usize = 6;

/// Format like C `printf("%g")`: 6 significant digits, fixed notation for
/// decimal exponents in `[-4, 6)`, scientific otherwise, trailing zeros
/// removed.
pub fn format_general(x: f64) -> String {
    format_general_with_precision(x, GENERAL_PRECISION)
}

fn format_general_with_precision(x: f64, precision: usize) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        let s = if x > 0.0 { "inf" } else { "-inf" };
        return s.to_string();
    }
    let precision = precision.max(1);
    if x == 0.0 {
        let s = if x.is_sign_negative() { "-0" } else { "0" };
        return s.to_string();
    }

    // Exponent after rounding to `precision` significant digits.
    let sci = format!("{:.*e}", precision - 1, x);
    let Some((mantissa, exp)) = sci
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
    else {
        return x.to_string();
    };

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_trailing_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        strip_trailing_zeros(&format!("{x:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
