//! Number formatting for the price summary.

/// Formats like an en-US `Number.toLocaleString()`: comma thousands separators
/// and at most three fraction digits, trailing zeros dropped.
pub fn format_locale(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", round_half_away(value.abs(), 3));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Fixed two-decimal value with an explicit `+` for non-negative numbers.
/// Anything that rounds to zero, including `-0.0`, prints as `+0.00`.
pub fn format_signed(value: f64) -> String {
    let rounded = round_half_away(value, 2);
    if rounded < 0.0 {
        format!("{:.2}", rounded)
    } else {
        format!("+{:.2}", rounded.abs())
    }
}

/// Fixed two-decimal value, ties rounded away from zero.
pub fn format_fixed2(value: f64) -> String {
    let rounded = round_half_away(value, 2);
    // `{:.2}` would print "-0.00"
    if rounded == 0.0 {
        return "0.00".to_string();
    }
    format!("{:.2}", rounded)
}

/// Rounds to `decimals` places with ties going away from zero.
/// `{:.N}` alone rounds ties to even, so 0.125 would print as 0.12.
pub fn round_half_away(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Short `$` price for axis and hover labels.
pub fn format_axis_price(price: f64) -> String {
    let abs_price = price.abs();
    if abs_price >= 1.0 {
        format!("${:.2}", price)
    } else if abs_price >= 0.01 {
        format!("${:.4}", price)
    } else {
        // Sub-penny coins need the extra digits to show any movement
        format!("${:.8}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_trims_fraction() {
        assert_eq!(format_locale(1_234_567.891), "1,234,567.891");
        assert_eq!(format_locale(64_250.5), "64,250.5");
        assert_eq!(format_locale(999.0), "999");
        assert_eq!(format_locale(1000.0), "1,000");
        assert_eq!(format_locale(0.5), "0.5");
    }

    #[test]
    fn rounds_to_three_fraction_digits() {
        assert_eq!(format_locale(0.123456), "0.123");
        assert_eq!(format_locale(2.0004), "2");
        assert_eq!(format_locale(0.0), "0");
    }

    #[test]
    fn keeps_sign_for_negative_values() {
        assert_eq!(format_locale(-1234.5), "-1,234.5");
        assert_eq!(format_locale(-0.0001), "0");
    }

    #[test]
    fn signed_change_has_two_decimals() {
        assert_eq!(format_signed(20.0), "+20.00");
        assert_eq!(format_signed(0.0), "+0.00");
        assert_eq!(format_signed(-5.254), "-5.25");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_signed(0.125), "+0.13");
        assert_eq!(format_signed(-0.125), "-0.13");
        assert_eq!(format_locale(1.0625), "1.063");
        assert_eq!(format_fixed2(0.125), "0.13");
        assert_eq!(format_fixed2(-2.5), "-2.50");
    }

    #[test]
    fn negative_zero_is_not_signed_twice() {
        assert_eq!(format_signed(-0.0), "+0.00");
        assert_eq!(format_signed(-0.001), "+0.00");
        assert_eq!(format_fixed2(-0.0), "0.00");
        assert_eq!(format_fixed2(-0.004), "0.00");
    }

    #[test]
    fn axis_price_precision_depends_on_magnitude() {
        assert_eq!(format_axis_price(64_000.0), "$64000.00");
        assert_eq!(format_axis_price(0.0712), "$0.0712");
        assert_eq!(format_axis_price(0.00000231), "$0.00000231");
    }
}
