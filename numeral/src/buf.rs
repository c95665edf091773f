//! Read and write numerals through [Buf] and [BufMut].
//!
//! These are the streaming counterparts of [crate::decode] and [crate::encode]: [read] works across
//! non-contiguous buffers and [write] renders into caller-provided storage. Both report problems as
//! [Error] instead of returning `None`.

use crate::{decode::Accumulator, encode::fill, int::Integer, Config, Error, Radix};
use bytes::{Buf, BufMut};

/// The most digits any supported value can need (`u128::MAX` in octal).
const MAX_DIGITS: usize = 43;

/// Reads the leading numeral of `buf` in `radix`, enforcing the limits in `cfg`.
///
/// Consumes exactly the digits of the numeral: the first byte that is not a digit (if any) is left
/// in `buf`. A numeral that does not fit in `T` is an error.
pub fn read<T: Integer>(radix: Radix, buf: &mut impl Buf, cfg: &Config) -> Result<T, Error> {
    let mut acc = Accumulator::new(radix, cfg);
    while buf.has_remaining() {
        let byte = buf.chunk()[0];
        let Some(digit) = radix.digit(byte) else {
            return acc.finish(Some(byte));
        };
        acc.push(digit)?;
        buf.advance(1);
    }
    acc.finish(None)
}

/// Writes `value` in `radix` to `buf`, returning the number of bytes written.
///
/// Returns [Error::Negative] (and writes nothing) if `value` is negative.
///
/// # Panics
///
/// Panics if `buf` does not have enough remaining capacity.
pub fn write<T: Integer>(radix: Radix, value: T, buf: &mut impl BufMut) -> Result<usize, Error> {
    let magnitude = value.magnitude().ok_or(Error::Negative)?;
    let size = radix.size(magnitude).ok_or(Error::Negative)?;
    let mut scratch = [0u8; MAX_DIGITS];
    let digits = &mut scratch[..size];
    fill(radix, magnitude, digits);
    buf.put_slice(digits);
    Ok(size)
}
