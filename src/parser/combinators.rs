use winnow::combinator::{alt, opt, preceded};
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;
use crate::types::*;

/// Integer digits, decimal mark and fraction digits of an NR2 literal or NR3 significand
type Significand<'s> = (&'s str, DecimalMark, &'s str);

/// Parse digits around exactly one decimal mark
///
/// Either side of the mark may be empty, but not both: the first alternative requires a
/// digit before the mark, the second a digit after it.
pub fn parse_significand<'s>(input: &mut &'s str) -> ModalResult<Significand<'s>> {
    alt((
        (parse_digits1, parse_decimal_mark, parse_digits0),
        (parse_digits0, parse_decimal_mark, parse_digits1),
    ))
    .parse_next(input)
}

/// Parse the exponent marker and a possibly unsigned exponent
pub fn parse_exponent<'s>(input: &mut &'s str) -> ModalResult<Exponent<'s>> {
    preceded(
        parse_exponent_marker,
        (opt(parse_plus_or_minus), parse_digits1),
    )
    .map(|(sign, digits)| Exponent { sign, digits })
    .verify(|exponent: &Exponent<'_>| exponent.has_permitted_sign())
    .parse_next(input)
}

fn nr1<'s>(sign: Option<Sign>, integer: &'s str) -> Literal<'s> {
    Literal {
        representation: Representation::NR1,
        sign,
        integer,
        decimal_mark: None,
        fraction: "",
        exponent: None,
    }
}

fn nr2<'s>(sign: Option<Sign>, (integer, mark, fraction): Significand<'s>) -> Literal<'s> {
    Literal {
        representation: Representation::NR2,
        sign,
        integer,
        decimal_mark: Some(mark),
        fraction,
        exponent: None,
    }
}

fn nr3<'s>(
    sign: Option<Sign>,
    (integer, mark, fraction): Significand<'s>,
    exponent: Exponent<'s>,
) -> Literal<'s> {
    Literal {
        representation: Representation::NR3,
        sign,
        integer,
        decimal_mark: Some(mark),
        fraction,
        exponent: Some(exponent),
    }
}

// NR1 parsers
pub fn parse_nr1_unsigned<'s>(input: &mut &'s str) -> ModalResult<Literal<'s>> {
    preceded(parse_padding, parse_digits1)
        .map(|integer| nr1(None, integer))
        .parse_next(input)
}

pub fn parse_nr1_signed<'s>(input: &mut &'s str) -> ModalResult<Literal<'s>> {
    (parse_signed_prefix, parse_digits1)
        .map(|(sign, integer)| nr1(Some(sign), integer))
        .verify(|literal: &Literal<'_>| literal.has_permitted_sign())
        .parse_next(input)
}

// NR2 parsers
pub fn parse_nr2_unsigned<'s>(input: &mut &'s str) -> ModalResult<Literal<'s>> {
    preceded(parse_padding, parse_significand)
        .map(|significand| nr2(None, significand))
        .parse_next(input)
}

pub fn parse_nr2_signed<'s>(input: &mut &'s str) -> ModalResult<Literal<'s>> {
    (parse_signed_prefix, parse_significand)
        .map(|(sign, significand)| nr2(Some(sign), significand))
        .verify(|literal: &Literal<'_>| literal.has_permitted_sign())
        .parse_next(input)
}

// NR3 parsers
pub fn parse_nr3_unsigned<'s>(input: &mut &'s str) -> ModalResult<Literal<'s>> {
    (parse_padding, parse_significand, parse_exponent)
        .map(|(_, significand, exponent)| nr3(None, significand, exponent))
        .parse_next(input)
}

pub fn parse_nr3_signed<'s>(input: &mut &'s str) -> ModalResult<Literal<'s>> {
    (parse_signed_prefix, parse_significand, parse_exponent)
        .map(|(sign, significand, exponent)| nr3(Some(sign), significand, exponent))
        .verify(|literal: &Literal<'_>| literal.has_permitted_sign())
        .parse_next(input)
}
