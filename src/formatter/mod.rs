//! ISO 6093 formatting module
//!
//! This module renders numbers as NR1, NR2 and NR3 literals.
//! Output is canonical: no padding, no plus sign on the value, no minus sign on zero,
//! and an explicit exponent sign in NR3. Every literal produced here is accepted by
//! the grammar of its representation.

mod digits;
mod exponential;
mod standard_numeric;

use crate::error::{Iso6093Error, Result};
use crate::settings::FormatSettings;
use crate::types::{DecimalMark, Representation};

use exponential::format_exponential;
use standard_numeric::format_standard_numeric;

fn ensure_finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Iso6093Error::NonFinite(value))
    }
}

/// Format an integer as an NR1 literal
///
/// # Examples
/// ```
/// use iso6093::format_nr1;
///
/// assert_eq!(format_nr1(1245), "1245");
/// assert_eq!(format_nr1(-7), "-7");
/// ```
pub fn format_nr1(value: i64) -> String {
    value.to_string()
}

/// Format a number as an NR2 literal with up to 20 fraction digits
///
/// # Examples
/// ```
/// use iso6093::{format_nr2, DecimalMark};
///
/// assert_eq!(format_nr2(84561230.54679, DecimalMark::Comma).unwrap(), "84561230,54679");
/// assert_eq!(format_nr2(1245.0, DecimalMark::FullStop).unwrap(), "1245.0");
/// ```
pub fn format_nr2(value: f64, decimal_mark: DecimalMark) -> Result<String> {
    format_nr2_with(value, &FormatSettings::default().with_decimal_mark(decimal_mark))
}

pub fn format_nr2_with(value: f64, settings: &FormatSettings) -> Result<String> {
    settings.validate()?;
    let value = ensure_finite(value)?;
    Ok(format_standard_numeric(value, settings))
}

/// Format a number as an NR3 literal with up to 20 fraction digits in the significand
///
/// # Examples
/// ```
/// use iso6093::{format_nr3, DecimalMark};
///
/// assert_eq!(format_nr3(5600.0, DecimalMark::Comma).unwrap(), "5,6E+3");
/// assert_eq!(format_nr3(0.0, DecimalMark::FullStop).unwrap(), "0.0E+0");
/// ```
pub fn format_nr3(value: f64, decimal_mark: DecimalMark) -> Result<String> {
    format_nr3_with(value, &FormatSettings::default().with_decimal_mark(decimal_mark))
}

pub fn format_nr3_with(value: f64, settings: &FormatSettings) -> Result<String> {
    settings.validate()?;
    let value = ensure_finite(value)?;
    Ok(format_exponential(value, settings))
}

/// Format a number in the given representation
///
/// For NR1 the value is truncated toward zero and must fit an `i64`.
pub fn format_value(
    value: f64,
    representation: Representation,
    settings: &FormatSettings,
) -> Result<String> {
    match representation {
        Representation::NR1 => {
            let truncated = ensure_finite(value)?.trunc();
            // i64::MAX as f64 rounds up to 2^63, which is already out of range.
            if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
                return Err(Iso6093Error::OutOfRange(value));
            }
            Ok(format_nr1(truncated as i64))
        }
        Representation::NR2 => format_nr2_with(value, settings),
        Representation::NR3 => format_nr3_with(value, settings),
    }
}
