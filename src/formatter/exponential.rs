use crate::formatter::digits;
use crate::formatter::standard_numeric::write_significand;
use crate::settings::FormatSettings;
use crate::types::SignificandStyle;

/// Format a finite value as an NR3 literal
///
/// The exponent is always written with a sign, `+` for zero and positive exponents.
pub(super) fn format_exponential(value: f64, settings: &FormatSettings) -> String {
    let magnitude = value.abs();
    let (digits, exponent) = match settings.nr3_significand {
        SignificandStyle::Scientific => digits::scientific(magnitude, settings.max_fraction_digits),
        SignificandStyle::Normalized => digits::normalized(magnitude, settings.max_fraction_digits),
    };

    let mut result = String::with_capacity(digits.integer.len() + digits.fraction.len() + 8);
    write_significand(&mut result, value, &digits, settings);

    result.push('E');
    result.push(if exponent < 0 { '-' } else { '+' });
    result.push_str(&exponent.unsigned_abs().to_string());
    result
}
