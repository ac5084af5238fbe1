//! ISO 6093 grammar engine
//!
//! This module validates and decomposes NR1, NR2 and NR3 literals.
//! Each representation has an unsigned and a signed grammar built from winnow combinators;
//! a literal must be matched by a grammar in its entirety.

mod combinators;
mod literal;
mod tokens;

pub use literal::{
    classify, decompose, is_valid, is_valid_as, is_valid_nr1, is_valid_nr1_signed,
    is_valid_nr1_unsigned, is_valid_nr2, is_valid_nr2_signed, is_valid_nr2_unsigned,
    is_valid_nr3, is_valid_nr3_signed, is_valid_nr3_unsigned, parse, parse_as,
};
