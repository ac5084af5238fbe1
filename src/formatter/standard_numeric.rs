use crate::formatter::digits::{self, Digits};
use crate::settings::FormatSettings;

/// Write a sign, the integer digits, the decimal mark and at least one fraction digit
///
/// A minus sign is written only when some rendered digit is non-zero.
pub(super) fn write_significand(
    result: &mut String,
    value: f64,
    digits: &Digits,
    settings: &FormatSettings,
) {
    if value.is_sign_negative() && !digits.is_zero() {
        result.push('-');
    }
    result.push_str(&digits.integer);
    result.push(settings.decimal_mark.as_char());
    if digits.fraction.is_empty() {
        result.push('0');
    } else {
        result.push_str(&digits.fraction);
    }
}

/// Format a finite value as an NR2 literal
pub(super) fn format_standard_numeric(value: f64, settings: &FormatSettings) -> String {
    let digits = digits::fixed(value.abs(), settings.max_fraction_digits);
    let mut result = String::with_capacity(digits.integer.len() + digits.fraction.len() + 3);
    write_significand(&mut result, value, &digits, settings);
    result
}
