//! Type definitions for ISO 6093 numeric text
//!
//! This module defines the values shared by the grammar engine and the formatter:
//! the representation tags, the decimal mark, and the decomposed form of a matched literal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Iso6093Error, Result};

/// The three numeric representations defined by ISO 6093
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Representation {
    /// Implicit-point integer, e.g. `0004902`
    NR1,
    /// Explicit-point unscaled decimal, e.g. `-5,67800`
    NR2,
    /// Explicit-point scaled decimal, e.g. `+0,56E+4`
    NR3,
}

impl Representation {
    /// All representations, in the order the grammar engine tries them
    pub const ALL: [Representation; 3] = [Self::NR1, Self::NR2, Self::NR3];
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::NR1 => f.write_str("NR1"),
            Representation::NR2 => f.write_str("NR2"),
            Representation::NR3 => f.write_str("NR3"),
        }
    }
}

/// Character separating the integer and fraction digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecimalMark {
    /// Comma (,)
    Comma,
    /// Full stop (.)
    #[default]
    FullStop,
}

impl DecimalMark {
    pub fn as_char(self) -> char {
        match self {
            DecimalMark::Comma => ',',
            DecimalMark::FullStop => '.',
        }
    }
}

impl TryFrom<char> for DecimalMark {
    type Error = Iso6093Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            ',' => Ok(DecimalMark::Comma),
            '.' => Ok(DecimalMark::FullStop),
            other => Err(Iso6093Error::Settings(format!(
                "'{other}' is not an ISO 6093 decimal mark"
            ))),
        }
    }
}

impl fmt::Display for DecimalMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Sign slot of a signed literal or of an exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Plus sign (+)
    Plus,
    /// Minus sign (-)
    Minus,
    /// A space standing in for a plus sign
    Space,
}

/// How `format_nr3` places the decimal mark in the significand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignificandStyle {
    /// One integer digit, magnitude in [1, 10), e.g. `5.6E+3`
    #[default]
    Scientific,
    /// No integer digit, magnitude in [0.1, 1), e.g. `0.56E+4`
    Normalized,
}

/// Exponent part of an NR3 literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exponent<'s> {
    /// Explicit sign, absent when the exponent is written unsigned
    pub sign: Option<Sign>,
    /// Exponent digits, never empty
    pub digits: &'s str,
}

impl Exponent<'_> {
    /// The sign may be left out only on a positive exponent; zero must be written `+0`.
    pub fn has_permitted_sign(&self) -> bool {
        match self.sign {
            Some(Sign::Plus) => true,
            Some(Sign::Minus) | None => !all_zeros(self.digits),
            Some(Sign::Space) => false,
        }
    }
}

/// A valid literal split into its parts
///
/// All digit runs borrow from the text that was decomposed. Leading padding is not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'s> {
    /// Representation the literal was matched as
    pub representation: Representation,
    /// Sign slot, present only when the literal matched a signed form
    pub sign: Option<Sign>,
    /// Digits before the decimal mark; may be empty for NR2 and NR3
    pub integer: &'s str,
    /// Decimal mark, absent for NR1
    pub decimal_mark: Option<DecimalMark>,
    /// Digits after the decimal mark; empty for NR1
    pub fraction: &'s str,
    /// Exponent, present only for NR3
    pub exponent: Option<Exponent<'s>>,
}

impl Literal<'_> {
    pub fn is_signed(&self) -> bool {
        self.sign.is_some()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Some(Sign::Minus)
    }

    /// Checks if every significand digit is zero
    pub fn is_zero(&self) -> bool {
        all_zeros(self.integer) && all_zeros(self.fraction)
    }

    /// A zero may be signed with plus or space, never with minus.
    pub fn has_permitted_sign(&self) -> bool {
        !(self.is_negative() && self.is_zero())
    }

    /// Checks if this is an NR3 literal whose significand magnitude lies in [0.1, 1)
    pub fn is_normalized(&self) -> bool {
        self.exponent.is_some()
            && all_zeros(self.integer)
            && self.fraction.chars().next().is_some_and(|c| c != '0')
    }

    /// Converts the literal to a double
    ///
    /// The parts are reassembled as a Rust float literal so that either decimal mark,
    /// an empty digit run on one side of the mark, and an unsigned exponent are all
    /// handled before the standard parser sees the text.
    pub fn to_f64(&self) -> Result<f64> {
        let exponent_len = self.exponent.map_or(0, |exponent| exponent.digits.len());
        let mut canonical =
            String::with_capacity(self.integer.len() + self.fraction.len() + exponent_len + 8);
        if self.is_negative() {
            canonical.push('-');
        }
        if self.integer.is_empty() {
            canonical.push('0');
        } else {
            canonical.push_str(self.integer);
        }
        if !self.fraction.is_empty() {
            canonical.push('.');
            canonical.push_str(self.fraction);
        }
        if let Some(exponent) = self.exponent {
            canonical.push('e');
            if exponent.sign == Some(Sign::Minus) {
                canonical.push('-');
            }
            canonical.push_str(exponent.digits);
        }

        canonical
            .parse::<f64>()
            .map_err(|_| Iso6093Error::Format { text: canonical })
    }
}

pub(crate) fn all_zeros(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0')
}
