//! The bases a numeral can be written in.

use crate::{
    digits::{num_digits, two_power_num_digits},
    int::Integer,
};

/// A supported numeral base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 8 (`0-7`).
    Octal,
    /// Base 10 (`0-9`).
    Decimal,
    /// Base 16 (`0-9`, `a-f`, `A-F`). Always written in lowercase.
    Hexadecimal,
}

impl Radix {
    /// Returns the base as a number.
    #[inline]
    pub const fn base(self) -> u8 {
        match self {
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// Returns `p` if the base is `2^p`.
    #[inline]
    pub const fn shift(self) -> Option<u32> {
        match self {
            Self::Octal => Some(3),
            Self::Decimal => None,
            Self::Hexadecimal => Some(4),
        }
    }

    /// Returns the value of `byte` as a digit in this base, or `None` if it is not one.
    #[inline]
    pub const fn digit(self, byte: u8) -> Option<u8> {
        match (self, byte) {
            (Self::Octal, b'0'..=b'7') | (Self::Decimal | Self::Hexadecimal, b'0'..=b'9') => {
                Some(byte - b'0')
            }
            (Self::Hexadecimal, b'a'..=b'f') => Some(byte - b'a' + 10),
            (Self::Hexadecimal, b'A'..=b'F') => Some(byte - b'A' + 10),
            _ => None,
        }
    }

    /// Returns the exact number of digits needed to write `value`, or `None` if `value` is
    /// negative.
    pub fn size<T: Integer>(self, value: T) -> Option<usize> {
        let magnitude = value.magnitude()?;
        Some(match self.shift() {
            Some(p) => two_power_num_digits(p, magnitude),
            None => num_digits(u32::from(self.base()), magnitude),
        })
    }
}
