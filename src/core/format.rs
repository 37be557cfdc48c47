//! Display formatting for converted quantities.
//!
//! Rounding lives here and only here: results are carried and persisted at
//! full precision, so repeated conversions never accumulate rounding error.

/// Round to 2 decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format with max 2 decimals, trailing zeros stripped.
/// Examples: 1.0 -> "1", 236.588 -> "236.59", 12.5 -> "12.5"
pub fn format_quantity(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let formatted = format!("{:.2}", round2(value));
    match formatted.trim_end_matches('0').trim_end_matches('.') {
        // -0.001 rounds to "-0.00"; normalize to plain zero
        "-0" | "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero_at_two_decimals() {
        assert_eq!(round2(236.588), 236.59);
        assert_eq!(round2(108.69565), 108.7);
        assert_eq!(round2(1.005), 1.0); // 1.005 is stored below 1.005 in f64
        assert_eq!(round2(2.675000001), 2.68);
    }

    #[test]
    fn strips_trailing_zeros() {
        assert_eq!(format_quantity(1.0), "1");
        assert_eq!(format_quantity(12.5), "12.5");
        assert_eq!(format_quantity(12.567), "12.57");
        assert_eq!(format_quantity(257.5), "257.5");
    }

    #[test]
    fn zero_and_near_zero() {
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(0.001), "0");
        assert_eq!(format_quantity(-0.001), "0");
    }

    #[test]
    fn non_finite_inputs_do_not_panic() {
        assert_eq!(format_quantity(f64::NAN), "NaN");
        assert_eq!(format_quantity(f64::INFINITY), "inf");
        assert_eq!(format_quantity(f64::NEG_INFINITY), "-inf");
    }
}
