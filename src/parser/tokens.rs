use winnow::ascii::{Caseless, digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::error::{ContextError, ErrMode, ParserError};
use winnow::token::{literal, take_while};
use winnow::{ModalResult, Parser};

use crate::types::*;

// Digit runs
pub fn parse_digits0<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    digit0.parse_next(input)
}

pub fn parse_digits1<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    digit1.parse_next(input)
}

// Padding and signs
pub fn parse_padding<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(0.., ' ').parse_next(input)
}

pub fn parse_plus_or_minus(input: &mut &str) -> ModalResult<Sign> {
    alt(('+'.value(Sign::Plus), '-'.value(Sign::Minus))).parse_next(input)
}

/// Parse the padding and sign slot of a signed form
///
/// The padding run is taken greedily, so when no `+` or `-` follows it the last
/// padding space is the sign slot. A signed form with neither is rejected.
pub fn parse_signed_prefix(input: &mut &str) -> ModalResult<Sign> {
    let original_input_state = *input;
    let padding = parse_padding.parse_next(input)?;

    match opt(parse_plus_or_minus).parse_next(input)? {
        Some(sign) => Ok(sign),
        None if !padding.is_empty() => Ok(Sign::Space),
        None => {
            *input = original_input_state;
            Err(ErrMode::Backtrack(ContextError::from_input(
                &original_input_state,
            )))
        }
    }
}

// Decimal mark and exponent marker
pub fn parse_decimal_mark(input: &mut &str) -> ModalResult<DecimalMark> {
    alt((
        ','.value(DecimalMark::Comma),
        '.'.value(DecimalMark::FullStop),
    ))
    .parse_next(input)
}

pub fn parse_exponent_marker<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    literal(Caseless("E")).parse_next(input)
}
