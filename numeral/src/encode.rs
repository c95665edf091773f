//! Render values as numerals.
//!
//! Each encoder computes the exact digit count of the value before writing anything, allocates a
//! buffer of exactly that size, and fills it from the last (least significant) digit to the first.
//! The digits therefore never need to be reversed and the buffer is never resized.

use crate::{
    int::{Integer, Magnitude},
    Error, Radix,
};
use bytes::Bytes;

/// Lowercase ASCII hexadecimal digits, indexed by nibble.
pub const HEX_DIGITS: [u8; 16] = *b"0123456789abcdef";

/// Renders `value` in decimal.
///
/// Returns `None` if `value` is negative.
///
/// # Examples
///
/// ```
/// use commonware_numeral::encode::pack_decimal;
///
/// assert_eq!(pack_decimal(1234u32).as_deref(), Some(&b"1234"[..]));
/// assert_eq!(pack_decimal(-1i32), None);
/// ```
#[inline]
pub fn pack_decimal<T: Integer>(value: T) -> Option<Bytes> {
    pack(Radix::Decimal, value)
}

/// Renders `value` in lowercase hexadecimal (with no `0x` prefix).
///
/// Returns `None` if `value` is negative.
#[inline]
pub fn pack_hexadecimal<T: Integer>(value: T) -> Option<Bytes> {
    pack(Radix::Hexadecimal, value)
}

/// Renders `value` in octal (with no `0` or `0o` prefix).
///
/// Returns `None` if `value` is negative.
#[inline]
pub fn pack_octal<T: Integer>(value: T) -> Option<Bytes> {
    pack(Radix::Octal, value)
}

/// Renders `value` in `radix`.
///
/// Returns `None` if `value` is negative.
pub fn pack<T: Integer>(radix: Radix, value: T) -> Option<Bytes> {
    let magnitude = value.magnitude()?;
    let size = radix.size(magnitude)?;
    let mut buf = vec![0u8; size];
    fill(radix, magnitude, &mut buf);
    Some(Bytes::from(buf))
}

/// Writes the digits of `n` into `buf`, starting at the last index.
///
/// `buf` must be exactly as long as the digit count of `n` in `radix`.
pub(crate) fn fill<M: Magnitude>(radix: Radix, mut n: M, buf: &mut [u8]) {
    let mut pos = buf.len();
    loop {
        let (rest, digit) = match radix.shift() {
            Some(shift) => n.shr_low(shift),
            None => n.div_rem(radix.base()),
        };
        pos -= 1;
        buf[pos] = HEX_DIGITS[(digit & 0xF) as usize];
        if rest.is_zero() {
            break;
        }
        n = rest;
    }
    debug_assert_eq!(pos, 0, "buffer larger than digit count");
}

/// Renders each byte of `bytes` as two lowercase hexadecimal digits (high nibble first).
///
/// # Examples
///
/// ```
/// use commonware_numeral::encode::as_hexadecimal;
///
/// assert_eq!(as_hexadecimal(&[0x00, 0xFF, 0x1A]), &b"00ff1a"[..]);
/// ```
pub fn as_hexadecimal(bytes: &[u8]) -> Bytes {
    let mut hex = vec![0u8; bytes.len() * 2];
    for (byte, pair) in bytes.iter().zip(hex.chunks_exact_mut(2)) {
        pair[0] = HEX_DIGITS[((byte & 0xF0) >> 4) as usize];
        pair[1] = HEX_DIGITS[(byte & 0x0F) as usize];
    }
    Bytes::from(hex)
}

/// Converts a hexadecimal dump (as produced by [as_hexadecimal], in either case) back to bytes.
pub fn from_hexadecimal(hex: &[u8]) -> Result<Bytes, Error> {
    if hex.len() % 2 != 0 {
        return Err(Error::InvalidLength(hex.len()));
    }
    let nibble = |byte: u8| Radix::Hexadecimal.digit(byte).ok_or(Error::InvalidDigit(byte));
    let bytes = hex
        .chunks_exact(2)
        .map(|pair| Ok((nibble(pair[0])? << 4) | nibble(pair[1])?))
        .collect::<Result<Vec<u8>, Error>>()?;
    Ok(Bytes::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_decimal() {
        assert_eq!(pack_decimal(0u8).unwrap(), "0");
        assert_eq!(pack_decimal(9u8).unwrap(), "9");
        assert_eq!(pack_decimal(10u8).unwrap(), "10");
        assert_eq!(pack_decimal(255u8).unwrap(), "255");
        assert_eq!(pack_decimal(1000u32).unwrap(), "1000");
        assert_eq!(pack_decimal(u64::MAX).unwrap(), "18446744073709551615");
        assert_eq!(
            pack_decimal(u128::MAX).unwrap(),
            "340282366920938463463374607431768211455"
        );
        assert_eq!(pack_decimal(i32::MAX).unwrap(), "2147483647");
    }

    #[test]
    fn test_pack_hexadecimal() {
        assert_eq!(pack_hexadecimal(0u8).unwrap(), "0");
        assert_eq!(pack_hexadecimal(418u32).unwrap(), "1a2");
        assert_eq!(pack_hexadecimal(0xDEAD_BEEFu32).unwrap(), "deadbeef");
        assert_eq!(pack_hexadecimal(u128::MAX).unwrap(), "f".repeat(32));
        assert_eq!(pack_hexadecimal(i8::MAX).unwrap(), "7f");
    }

    #[test]
    fn test_pack_octal() {
        assert_eq!(pack_octal(0u8).unwrap(), "0");
        assert_eq!(pack_octal(7u8).unwrap(), "7");
        assert_eq!(pack_octal(8u8).unwrap(), "10");
        assert_eq!(pack_octal(511u16).unwrap(), "777");
        assert_eq!(pack_octal(u8::MAX).unwrap(), "377");
        assert_eq!(
            pack_octal(u64::MAX).unwrap(),
            "1777777777777777777777"
        );
    }

    #[test]
    fn test_pack_negative() {
        assert_eq!(pack_decimal(-1i32), None);
        assert_eq!(pack_hexadecimal(-1i32), None);
        assert_eq!(pack_octal(-1i32), None);
        assert_eq!(pack_decimal(i128::MIN), None);
    }

    #[test]
    fn test_pack_exact_size() {
        for value in [0u64, 1, 7, 8, 9, 10, 15, 16, 99, 100, 511, 512, u64::MAX] {
            for radix in [Radix::Octal, Radix::Decimal, Radix::Hexadecimal] {
                let packed = pack(radix, value).unwrap();
                assert_eq!(Some(packed.len()), radix.size(value));
            }
        }
    }

    #[test]
    fn test_as_hexadecimal() {
        // Test case 0: empty bytes
        assert_eq!(as_hexadecimal(&[]), "");

        // Test case 1: single byte
        assert_eq!(as_hexadecimal(&[0x01]), "01");

        // Test case 2: multiple bytes
        let hex = as_hexadecimal(&[0x00, 0xFF, 0x1A]);
        assert_eq!(hex, "00ff1a");
        assert_eq!(hex.len(), 6);

        // Test case 3: every byte
        let all: Vec<u8> = (0..=u8::MAX).collect();
        let hex = as_hexadecimal(&all);
        for (i, pair) in hex.chunks_exact(2).enumerate() {
            assert_eq!(pair, format!("{i:02x}").as_bytes());
        }
    }

    #[test]
    fn test_from_hexadecimal() {
        // Test case 0: empty bytes
        assert_eq!(from_hexadecimal(b"").unwrap(), Bytes::new());

        // Test case 1: multiple bytes, either case
        assert_eq!(from_hexadecimal(b"00ff1a").unwrap(), &[0x00u8, 0xFF, 0x1A][..]);
        assert_eq!(from_hexadecimal(b"00FF1A").unwrap(), &[0x00u8, 0xFF, 0x1A][..]);

        // Test case 2: odd number of characters
        assert_eq!(from_hexadecimal(b"0102030"), Err(Error::InvalidLength(7)));

        // Test case 3: invalid hexadecimal character
        assert_eq!(from_hexadecimal(b"01g3"), Err(Error::InvalidDigit(b'g')));
    }
}
