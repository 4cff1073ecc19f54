//! Number formatting shared by cards and chart tooltips.
//!
//! The browser build prefers `Intl.NumberFormat`; these helpers produce the
//! same `en-US` output on the host and act as the fallback in the browser.

/// Insert `,` separators every three digits.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar currency string, e.g. `$46,123`.
#[must_use]
pub fn format_currency(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

/// Locale-style number: grouped integer part, at most three fraction digits.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let scaled = (value.abs() * 1000.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = scaled as u64;
    let whole = scaled / 1000;
    let frac = scaled % 1000;
    if frac == 0 {
        return format!("{sign}{}", group_thousands(whole));
    }
    let frac = format!("{frac:03}");
    format!(
        "{sign}{}.{}",
        group_thousands(whole),
        frac.trim_end_matches('0')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(39_768), "39,768");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn currency_prefixes_dollar_sign() {
        assert_eq!(format_currency(46_123), "$46,123");
        assert_eq!(format_currency(400), "$400");
    }

    #[test]
    fn numbers_trim_trailing_fraction_zeros() {
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(65_890.0), "65,890");
        assert_eq!(format_number(-1234.125), "-1,234.125");
        assert_eq!(format_number(f64::NAN), "0");
    }
}
