//! Error type for ISO 6093 operations
//!
//! Validation never fails: a rejected literal is simply `false`. The variants here
//! cover parsing text that is not a literal, values with no ISO 6093 rendering, and
//! invalid formatter settings.

use thiserror::Error;

use crate::types::Representation;

#[derive(Error, Debug)]
pub enum Iso6093Error {
    /// The text matches none of NR1, NR2 or NR3
    #[error("'{text}' is not a valid NR1, NR2 or NR3 literal")]
    Format { text: String },

    /// The text is not valid in the requested representation
    #[error("'{text}' is not a valid {expected} literal")]
    Mismatch {
        text: String,
        expected: Representation,
    },

    /// NaN and infinities have no ISO 6093 form
    #[error("{0} cannot be written as an ISO 6093 literal")]
    NonFinite(f64),

    /// The value does not fit an NR1 integer rendering
    #[error("{0} is outside the NR1 integer range")]
    OutOfRange(f64),

    /// Formatter settings failed validation
    #[error("invalid format settings: {0}")]
    Settings(String),

    /// Formatter settings could not be deserialized
    #[error("error parsing format settings: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Iso6093Error>;
