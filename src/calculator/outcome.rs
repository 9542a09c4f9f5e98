//! Evaluation results and their textual form

use std::fmt;

/// Text shown in place of a result when dividing by zero
pub const ERROR_TEXT: &str = "Error";

/// Result of applying an operator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Numeric(f64),
    DivisionByZeroError,
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::DivisionByZeroError)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Numeric(value) => f.write_str(&format_number(*value)),
            Outcome::DivisionByZeroError => f.write_str(ERROR_TEXT),
        }
    }
}

/// Format a number the way a calculator display shows it.
///
/// Uses the shortest text that round-trips back to the same `f64`. Integral
/// values have no fraction, `-0` shows as `0`, and magnitudes of at least
/// `1e21` or below `1e-6` switch to exponent form (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else {
        value.to_string()
    }
}

/// Parse operand text into a number.
///
/// Anything that is not a decimal literal (the leftover [`ERROR_TEXT`], a lone
/// `.`) becomes NaN rather than failing.
pub fn parse_operand(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_have_no_fraction() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-4.0), "-4");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_fractions_use_shortest_form() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_error_outcome_renders_as_error_text() {
        assert_eq!(Outcome::DivisionByZeroError.to_string(), ERROR_TEXT);
        assert_eq!(Outcome::Numeric(5.0).to_string(), "5");
    }

    #[test]
    fn test_parse_operand_accepts_display_text() {
        assert_eq!(parse_operand("0.5"), 0.5);
        assert_eq!(parse_operand("5."), 5.0);
        assert_eq!(parse_operand("1e+21"), 1e21);
        assert!(parse_operand(ERROR_TEXT).is_nan());
        assert!(parse_operand(".").is_nan());
    }
}
