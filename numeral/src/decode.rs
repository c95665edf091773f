//! Parse the leading numeral of a byte sequence.
//!
//! Each decoder consumes the longest run of digits at the front of the input and returns the value
//! together with the unconsumed remainder. The remainder borrows from (or, for [read_bytes], shares
//! the allocation of) the input; nothing is copied.
//!
//! No sign or base prefix (like `-` or `0x`) is recognized.
//!
//! # Overflow
//!
//! [read], [read_decimal], [read_hexadecimal], and [read_octal] do not detect overflow: a numeral
//! that does not fit in `T` wraps around at the boundary of `T` (as if computed with
//! `wrapping_mul` and `wrapping_add`). Use [read_checked] (or [crate::buf::read]) when parsing
//! untrusted input.

use crate::{int::Integer, Config, Error, Radix};
use bytes::Bytes;
use tracing::debug;

/// Parses the leading decimal numeral of `input`.
///
/// Returns `None` if `input` does not start with a decimal digit.
///
/// # Examples
///
/// ```
/// use commonware_numeral::decode::read_decimal;
///
/// assert_eq!(read_decimal::<u32>(b"123abc"), Some((123, &b"abc"[..])));
/// assert_eq!(read_decimal::<u32>(b"xyz"), None);
/// ```
#[inline]
pub fn read_decimal<T: Integer>(input: &[u8]) -> Option<(T, &[u8])> {
    read(Radix::Decimal, input)
}

/// Parses the leading hexadecimal numeral of `input` (in either case).
///
/// Returns `None` if `input` does not start with a hexadecimal digit.
#[inline]
pub fn read_hexadecimal<T: Integer>(input: &[u8]) -> Option<(T, &[u8])> {
    read(Radix::Hexadecimal, input)
}

/// Parses the leading octal numeral of `input`.
///
/// Returns `None` if `input` does not start with an octal digit.
#[inline]
pub fn read_octal<T: Integer>(input: &[u8]) -> Option<(T, &[u8])> {
    read(Radix::Octal, input)
}

/// Parses the leading numeral of `input` in `radix`, wrapping on overflow.
///
/// Returns `None` if `input` is empty or does not start with a digit.
pub fn read<T: Integer>(radix: Radix, input: &[u8]) -> Option<(T, &[u8])> {
    let base = radix.base();
    let mut value = T::ZERO;
    let mut consumed = 0;
    for &byte in input {
        let Some(digit) = radix.digit(byte) else {
            break;
        };
        value = value.wrapping_accumulate(base, digit);
        consumed += 1;
    }
    if consumed == 0 {
        return None;
    }
    Some((value, &input[consumed..]))
}

/// Parses the leading numeral of `input` in `radix`, returning the remainder as a [Bytes] that
/// shares `input`'s allocation.
pub fn read_bytes<T: Integer>(radix: Radix, input: &Bytes) -> Option<(T, Bytes)> {
    let (value, rest) = read(radix, input)?;
    let consumed = input.len() - rest.len();
    Some((value, input.slice(consumed..)))
}

/// Parses the leading numeral of `input` in `radix`, enforcing the limits in `cfg`.
///
/// Unlike [read], a numeral that does not fit in `T` is an error.
pub fn read_checked<'a, T: Integer>(
    radix: Radix,
    input: &'a [u8],
    cfg: &Config,
) -> Result<(T, &'a [u8]), Error> {
    let mut acc = Accumulator::new(radix, cfg);
    for &byte in input {
        let Some(digit) = radix.digit(byte) else {
            break;
        };
        acc.push(digit)?;
    }
    let consumed = acc.digits();
    let value = acc.finish(input.get(consumed).copied())?;
    Ok((value, &input[consumed..]))
}

/// Accumulates digits with overflow and limit checks.
///
/// Shared by the slice and [bytes::Buf] decoders so both reject the same inputs.
pub(crate) struct Accumulator<'a, T: Integer> {
    radix: Radix,
    cfg: &'a Config,
    value: T,
    digits: usize,
    leading_zero: bool,
}

impl<'a, T: Integer> Accumulator<'a, T> {
    pub(crate) fn new(radix: Radix, cfg: &'a Config) -> Self {
        Self {
            radix,
            cfg,
            value: T::ZERO,
            digits: 0,
            leading_zero: false,
        }
    }

    /// Returns the number of digits accepted so far.
    pub(crate) fn digits(&self) -> usize {
        self.digits
    }

    /// Appends a digit (already classified as valid for the radix).
    pub(crate) fn push(&mut self, digit: u8) -> Result<(), Error> {
        if self.leading_zero && self.cfg.canonical {
            debug!(radix = ?self.radix, "rejecting numeral with leading zero");
            return Err(Error::LeadingZero);
        }
        if !self.cfg.allows(self.digits + 1) {
            debug!(radix = ?self.radix, digits = self.digits, "rejecting numeral over digit limit");
            return Err(Error::TooManyDigits(self.digits));
        }
        let Some(value) = self.value.checked_accumulate(self.radix.base(), digit) else {
            let ty = std::any::type_name::<T>();
            debug!(
                radix = ?self.radix,
                digits = self.digits,
                ty,
                "rejecting numeral that overflows"
            );
            return Err(Error::Overflow(ty));
        };
        self.leading_zero = self.digits == 0 && digit == 0;
        self.value = value;
        self.digits += 1;
        Ok(())
    }

    /// Returns the accumulated value, or an error describing why no digit was found.
    ///
    /// `next` is the byte that stopped the scan (if any).
    pub(crate) fn finish(self, next: Option<u8>) -> Result<T, Error> {
        if self.digits > 0 {
            return Ok(self.value);
        }
        match next {
            Some(byte) => Err(Error::InvalidDigit(byte)),
            None => Err(Error::EndOfBuffer),
        }
    }
}
