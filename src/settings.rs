//! Formatter settings
//!
//! Settings can be built in code with the `with_*` methods or loaded from TOML:
//!
//! ```toml
//! decimal_mark = "comma"
//! max_fraction_digits = 6
//! nr3_significand = "normalized"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Iso6093Error, Result};
use crate::types::{DecimalMark, SignificandStyle};

/// Largest number of fraction digits the formatter writes
pub const MAX_FRACTION_DIGITS: usize = 20;

/// Options for rendering NR2 and NR3 literals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatSettings {
    /// Decimal mark written between integer and fraction digits
    pub decimal_mark: DecimalMark,
    /// Upper bound on written fraction digits, from 1 to 20
    pub max_fraction_digits: usize,
    /// Placement of the decimal mark in NR3 significands
    pub nr3_significand: SignificandStyle,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            decimal_mark: DecimalMark::FullStop,
            max_fraction_digits: MAX_FRACTION_DIGITS,
            nr3_significand: SignificandStyle::Scientific,
        }
    }
}

impl FormatSettings {
    /// Load settings from a TOML document; missing keys take their defaults
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let settings: FormatSettings = toml::from_str(toml_str)?;
        settings.validate()?;
        tracing::debug!(?settings, "loaded ISO 6093 format settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_FRACTION_DIGITS).contains(&self.max_fraction_digits) {
            return Err(Iso6093Error::Settings(format!(
                "max_fraction_digits must be between 1 and {MAX_FRACTION_DIGITS}, got {}",
                self.max_fraction_digits
            )));
        }
        Ok(())
    }

    pub fn with_decimal_mark(mut self, decimal_mark: DecimalMark) -> Self {
        self.decimal_mark = decimal_mark;
        self
    }

    /// Set the fraction digit bound, clamped to 1..=20
    pub fn with_max_fraction_digits(mut self, max_fraction_digits: usize) -> Self {
        self.max_fraction_digits = max_fraction_digits.clamp(1, MAX_FRACTION_DIGITS);
        self
    }

    pub fn with_nr3_significand(mut self, style: SignificandStyle) -> Self {
        self.nr3_significand = style;
        self
    }
}
