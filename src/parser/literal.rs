use winnow::{ModalResult, Parser};

use crate::error::{Iso6093Error, Result};
use crate::parser::combinators::*;
use crate::types::*;

type LiteralParser = for<'s> fn(&mut &'s str) -> ModalResult<Literal<'s>>;

/// Unsigned and signed grammar of each representation, unsigned first
fn grammars(representation: Representation) -> [LiteralParser; 2] {
    match representation {
        Representation::NR1 => [parse_nr1_unsigned, parse_nr1_signed],
        Representation::NR2 => [parse_nr2_unsigned, parse_nr2_signed],
        Representation::NR3 => [parse_nr3_unsigned, parse_nr3_signed],
    }
}

/// Run a grammar against the whole text; trailing input is a rejection
fn match_whole<'s>(mut grammar: LiteralParser, text: &'s str) -> Option<Literal<'s>> {
    grammar.parse(text).ok()
}

fn decompose_as(text: &str, representation: Representation) -> Option<Literal<'_>> {
    grammars(representation)
        .into_iter()
        .find_map(|grammar| match_whole(grammar, text))
}

/// Split a literal into sign, digit runs and exponent
///
/// Representations are tried in the order NR1, NR2, NR3, and within each the unsigned
/// form before the signed one. A literal such as `"  4902"` is valid in both NR1 forms
/// and is reported unsigned.
///
/// # Examples
/// ```
/// use iso6093::{decompose, Representation, Sign};
///
/// let literal = decompose("+0,56E+4").unwrap();
/// assert_eq!(literal.representation, Representation::NR3);
/// assert_eq!(literal.sign, Some(Sign::Plus));
/// assert_eq!(literal.fraction, "56");
/// ```
pub fn decompose(text: &str) -> Option<Literal<'_>> {
    let literal = Representation::ALL
        .into_iter()
        .find_map(|representation| decompose_as(text, representation))?;
    tracing::trace!(text, representation = %literal.representation, "classified numeric literal");
    Some(literal)
}

/// Return the representation a literal is written in, if any
pub fn classify(text: &str) -> Option<Representation> {
    decompose(text).map(|literal| literal.representation)
}

// Validation predicates
pub fn is_valid_nr1_unsigned(text: &str) -> bool {
    match_whole(parse_nr1_unsigned, text).is_some()
}

pub fn is_valid_nr1_signed(text: &str) -> bool {
    match_whole(parse_nr1_signed, text).is_some()
}

pub fn is_valid_nr2_unsigned(text: &str) -> bool {
    match_whole(parse_nr2_unsigned, text).is_some()
}

pub fn is_valid_nr2_signed(text: &str) -> bool {
    match_whole(parse_nr2_signed, text).is_some()
}

pub fn is_valid_nr3_unsigned(text: &str) -> bool {
    match_whole(parse_nr3_unsigned, text).is_some()
}

pub fn is_valid_nr3_signed(text: &str) -> bool {
    match_whole(parse_nr3_signed, text).is_some()
}

pub fn is_valid_nr1(text: &str) -> bool {
    is_valid_nr1_unsigned(text) || is_valid_nr1_signed(text)
}

pub fn is_valid_nr2(text: &str) -> bool {
    is_valid_nr2_unsigned(text) || is_valid_nr2_signed(text)
}

pub fn is_valid_nr3(text: &str) -> bool {
    is_valid_nr3_unsigned(text) || is_valid_nr3_signed(text)
}

/// Checks if the text is a literal of the given representation, signed or unsigned
pub fn is_valid_as(text: &str, representation: Representation) -> bool {
    decompose_as(text, representation).is_some()
}

/// Checks if the text is an NR1, NR2 or NR3 literal
pub fn is_valid(text: &str) -> bool {
    is_valid_nr1(text) || is_valid_nr2(text) || is_valid_nr3(text)
}

fn format_error(text: &str) -> Iso6093Error {
    Iso6093Error::Format {
        text: text.to_string(),
    }
}

/// Convert a decomposed literal, reporting failures against the text the caller passed
fn literal_value(literal: &Literal<'_>, text: &str) -> Result<f64> {
    literal.to_f64().map_err(|_| format_error(text))
}

/// Parse an ISO 6093 literal into a double
///
/// Either decimal mark is accepted. Text that matches none of the three representations
/// is rejected with [`Iso6093Error::Format`].
///
/// # Examples
/// ```
/// use iso6093::parse;
///
/// assert_eq!(parse("0004902").unwrap(), 4902.0);
/// assert_eq!(parse("-5,67800").unwrap(), -5.678);
/// assert!(parse("49 02").is_err());
/// ```
pub fn parse(text: &str) -> Result<f64> {
    let literal = decompose(text).ok_or_else(|| format_error(text))?;
    literal_value(&literal, text)
}

/// Parse a literal that must be written in the given representation
pub fn parse_as(text: &str, representation: Representation) -> Result<f64> {
    let literal = decompose_as(text, representation)
        .ok_or_else(|| Iso6093Error::Mismatch {
            text: text.to_string(),
            expected: representation,
        })?;
    literal_value(&literal, text)
}
