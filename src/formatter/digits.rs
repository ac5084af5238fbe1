//! Decimal digit rendering
//!
//! Produces the digit strings the NR2 and NR3 writers lay out. Rendering starts from the
//! standard library's shortest round-trip form and falls back to fixed-precision rounding
//! only when that form has more fraction digits than allowed.

use crate::types::all_zeros;

/// Digits of a non-negative value split at the decimal point
///
/// `fraction` never ends in `0`; it is empty when the value is integral at the
/// rendered precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Digits {
    pub integer: String,
    pub fraction: String,
}

impl Digits {
    fn from_rendered(rendered: &str) -> Self {
        let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered, ""));
        Digits {
            integer: integer.to_string(),
            fraction: fraction.trim_end_matches('0').to_string(),
        }
    }

    pub fn is_zero(&self) -> bool {
        all_zeros(&self.integer) && all_zeros(&self.fraction)
    }
}

fn fraction_len(rendered: &str) -> usize {
    rendered.split_once('.').map_or(0, |(_, fraction)| fraction.len())
}

/// Render `magnitude` in fixed notation with at most `max_fraction_digits` fraction digits
pub(super) fn fixed(magnitude: f64, max_fraction_digits: usize) -> Digits {
    let shortest = magnitude.to_string();
    if fraction_len(&shortest) > max_fraction_digits {
        Digits::from_rendered(&format!("{magnitude:.max_fraction_digits$}"))
    } else {
        Digits::from_rendered(&shortest)
    }
}

/// Render `magnitude` as one integer digit, fraction digits and a decimal exponent
pub(super) fn scientific(magnitude: f64, max_fraction_digits: usize) -> (Digits, i32) {
    let shortest = format!("{magnitude:e}");
    let rendered = match shortest.split_once('e') {
        Some((mantissa, _)) if fraction_len(mantissa) > max_fraction_digits => {
            format!("{magnitude:.max_fraction_digits$e}")
        }
        _ => shortest.clone(),
    };

    // LowerExp always writes an exponent.
    let (mantissa, exponent) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));
    let exponent = exponent.parse::<i32>().unwrap_or_default();
    (Digits::from_rendered(mantissa), exponent)
}

/// Render `magnitude` with no integer digit, so a non-zero significand lies in [0.1, 1)
pub(super) fn normalized(magnitude: f64, max_fraction_digits: usize) -> (Digits, i32) {
    // Shifting the mark moves the integer digit into the fraction.
    let (digits, exponent) = scientific(magnitude, max_fraction_digits.saturating_sub(1));
    if digits.is_zero() {
        return (digits, 0);
    }

    let mut fraction = digits.integer;
    fraction.push_str(&digits.fraction);
    (
        Digits {
            integer: "0".to_string(),
            fraction,
        },
        exponent + 1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_uses_shortest_form() {
        let digits = fixed(84561230.54679, 20);
        assert_eq!(digits.integer, "84561230");
        assert_eq!(digits.fraction, "54679");
    }

    #[test]
    fn test_fixed_rounds_past_budget() {
        let digits = fixed(0.123456, 3);
        assert_eq!(digits.integer, "0");
        assert_eq!(digits.fraction, "123");

        let digits = fixed(0.9996, 3);
        assert_eq!(digits.integer, "1");
        assert_eq!(digits.fraction, "");
    }

    #[test]
    fn test_scientific() {
        let (digits, exponent) = scientific(5600.0, 20);
        assert_eq!((digits.integer.as_str(), digits.fraction.as_str()), ("5", "6"));
        assert_eq!(exponent, 3);

        let (digits, exponent) = scientific(0.0, 20);
        assert!(digits.is_zero());
        assert_eq!(exponent, 0);
    }

    #[test]
    fn test_normalized() {
        let (digits, exponent) = normalized(5600.0, 20);
        assert_eq!((digits.integer.as_str(), digits.fraction.as_str()), ("0", "56"));
        assert_eq!(exponent, 4);

        let (digits, exponent) = normalized(0.001, 20);
        assert_eq!(digits.fraction, "1");
        assert_eq!(exponent, -2);
    }
}
