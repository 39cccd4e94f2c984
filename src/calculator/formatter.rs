// src/calculator/formatter.rs
// Canonical display-string rendering for calculation results

/// Raw numeric result paired with its canonical display string.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub value: f64,
    pub display: String,
}

/// Format a finite double for display.
///
/// Rules:
/// - whole numbers render without a decimal point (`8`, not `8.0`)
/// - fractional values render with up to 10 decimal digits, trailing zeros
///   stripped
/// - magnitudes >= 1e15 or < 1e-10 (excluding zero) use scientific notation
///   with a 10-digit mantissa, trailing zeros stripped
/// - `0` and `-0` both render as `"0"`
///
/// Pure function of `value`; never fails for a finite input.
pub fn format_value(value: f64) -> String {
    let abs = value.abs();
    if abs != 0.0 && (abs >= 1e15 || abs < 1e-10) {
        let rendered = format!("{value:.10e}");
        // Strip trailing zeros from the mantissa, keep the exponent as-is.
        match rendered.split_once('e') {
            Some((mantissa, exponent)) => {
                let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                format!("{mantissa}e{exponent}")
            }
            None => rendered,
        }
    } else if value == value.trunc() {
        if value == 0.0 {
            // Covers -0.0 as well.
            "0".to_string()
        } else {
            format!("{value}")
        }
    } else {
        let rendered = format!("{value:.10}");
        rendered.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Bundle a raw value with its display string.
pub fn format_result(value: f64) -> CalculationResult {
    CalculationResult {
        display: format_value(value),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_have_no_decimal_point() {
        assert_eq!(format_value(8.0), "8");
        assert_eq!(format_value(-5.0), "-5");
        assert_eq!(format_value(1_000_000.0), "1000000");
        assert_eq!(format_value(999_999_999_999_999.0), "999999999999999");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        assert_eq!(format_value(2.50), "2.5");
        assert_eq!(format_value(3.14), "3.14");
        assert_eq!(format_value(-3.14159), "-3.14159");
    }

    #[test]
    fn test_zero_and_negative_zero() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn test_scientific_notation_for_large_values() {
        assert!(format_value(1e20).contains('e'));
        assert_eq!(format_value(1e20), "1e20");
    }

    #[test]
    fn test_scientific_notation_for_small_values() {
        assert!(format_value(1e-15).contains('e'));
        assert_eq!(format_value(1e-15), "1e-15");
    }

    #[test]
    fn test_large_threshold_is_exactly_1e15() {
        assert!(format_value(1e15).contains('e'));
        assert!(!format_value(9.99e14).contains('e'));
    }

    #[test]
    fn test_small_threshold_is_exactly_1e_minus_10() {
        // 1e-10 sits on the boundary and renders fixed; anything smaller
        // switches to scientific notation.
        assert_eq!(format_value(1e-10), "0.0000000001");
        assert!(format_value(9.99e-11).contains('e'));
    }

    #[test]
    fn test_fractional_precision_capped_at_10_digits() {
        let display = format_value(1.123456789012345);
        if let Some((_, frac)) = display.split_once('.') {
            assert!(frac.len() <= 10, "got {display}");
        }
    }

    #[test]
    fn test_determinism() {
        for v in [0.1, -2.5, 1e16, 7.0, 1e-12, f64::MAX, f64::MIN_POSITIVE] {
            assert_eq!(format_value(v), format_value(v));
        }
    }

    #[test]
    fn test_format_result_bundles_raw_value() {
        let result = format_result(42.5);
        assert_eq!(result.value, 42.5);
        assert_eq!(result.display, "42.5");
    }
}
