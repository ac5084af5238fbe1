pub mod error;
pub mod formatter;
pub mod parser;
pub mod settings;
pub mod types;

// Main API
pub use error::{Iso6093Error, Result};
pub use formatter::{
    format_nr1, format_nr2, format_nr2_with, format_nr3, format_nr3_with, format_value,
};
pub use parser::{
    classify, decompose, is_valid, is_valid_as, is_valid_nr1, is_valid_nr1_signed,
    is_valid_nr1_unsigned, is_valid_nr2, is_valid_nr2_signed, is_valid_nr2_unsigned,
    is_valid_nr3, is_valid_nr3_signed, is_valid_nr3_unsigned, parse, parse_as,
};
pub use settings::FormatSettings;
pub use types::*;
