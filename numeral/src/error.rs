//! Error types for checked numeral operations

use thiserror::Error;

/// Error type for checked numeral operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("invalid digit: {0:#04x}")]
    InvalidDigit(u8),
    #[error("value overflows {0}")]
    Overflow(&'static str), // type name
    #[error("too many digits: more than {0}")]
    TooManyDigits(usize), // limit
    #[error("leading zero")]
    LeadingZero,
    #[error("negative value")]
    Negative,
    #[error("invalid length: {0}")]
    InvalidLength(usize),
}
