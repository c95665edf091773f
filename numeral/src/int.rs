//! Primitive integer widths that can be rendered as (and parsed from) numerals.
//!
//! Every primitive integer implements [Integer]. Unsigned types are their own [Magnitude]; signed
//! types map non-negative values onto the unsigned type of the same width.
//!
//! Parsing accumulates with explicit wrapping arithmetic, so the result for an over-long run of
//! digits is the same in every build profile (overflow checks included).

/// A non-negative quantity of some fixed width.
pub trait Magnitude: Integer<Magnitude = Self> + Ord {
    /// Widens the value to `u128` (lossless for every primitive width).
    fn widen(self) -> u128;

    /// Divides by `divisor`, returning the quotient and the remainder.
    ///
    /// `divisor` must be non-zero.
    fn div_rem(self, divisor: u8) -> (Self, u8);

    /// Shifts right by `shift` bits, returning the shifted value and the low `shift` bits that were
    /// shifted out.
    ///
    /// `shift` must be in `1..8`.
    fn shr_low(self, shift: u32) -> (Self, u8);

    /// Returns true if the value is zero.
    fn is_zero(self) -> bool;
}

/// A primitive integer that can be rendered as a numeral.
pub trait Integer: Copy + PartialOrd + Sized {
    /// The unsigned type that holds the magnitude of a non-negative value.
    type Magnitude: Magnitude;

    /// The zero value.
    const ZERO: Self;

    /// Returns the magnitude of the value, or `None` if the value is negative.
    fn magnitude(self) -> Option<Self::Magnitude>;

    /// Computes `self * base + digit`, wrapping at the boundary of the type.
    fn wrapping_accumulate(self, base: u8, digit: u8) -> Self;

    /// Computes `self * base + digit`, returning `None` on overflow.
    fn checked_accumulate(self, base: u8, digit: u8) -> Option<Self>;
}

// Implements `Integer` and `Magnitude` for an unsigned type.
macro_rules! impl_unsigned {
    ($type:ty) => {
        impl Integer for $type {
            type Magnitude = Self;

            const ZERO: Self = 0;

            #[inline]
            fn magnitude(self) -> Option<Self> {
                Some(self)
            }

            #[inline]
            fn wrapping_accumulate(self, base: u8, digit: u8) -> Self {
                self.wrapping_mul(base as $type)
                    .wrapping_add(digit as $type)
            }

            #[inline]
            fn checked_accumulate(self, base: u8, digit: u8) -> Option<Self> {
                self.checked_mul(base as $type)?.checked_add(digit as $type)
            }
        }

        impl Magnitude for $type {
            #[inline]
            fn widen(self) -> u128 {
                self as u128
            }

            #[inline]
            fn div_rem(self, divisor: u8) -> (Self, u8) {
                let divisor = divisor as $type;
                (self / divisor, (self % divisor) as u8)
            }

            #[inline]
            fn shr_low(self, shift: u32) -> (Self, u8) {
                let mask = (1u8 << shift) - 1;
                (self >> shift, (self as u8) & mask)
            }

            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }
        }
    };
}
impl_unsigned!(u8);
impl_unsigned!(u16);
impl_unsigned!(u32);
impl_unsigned!(u64);
impl_unsigned!(u128);
impl_unsigned!(usize);

// Implements `Integer` for a signed type, using the unsigned type of the same width as the
// magnitude.
//
// `base` and `digit` never exceed 16, so the casts below are lossless for every signed width.
macro_rules! impl_signed {
    ($type:ty, $utype:ty) => {
        impl Integer for $type {
            type Magnitude = $utype;

            const ZERO: Self = 0;

            #[inline]
            fn magnitude(self) -> Option<$utype> {
                if self < 0 {
                    return None;
                }
                Some(self.unsigned_abs())
            }

            #[inline]
            fn wrapping_accumulate(self, base: u8, digit: u8) -> Self {
                self.wrapping_mul(base as $type)
                    .wrapping_add(digit as $type)
            }

            #[inline]
            fn checked_accumulate(self, base: u8, digit: u8) -> Option<Self> {
                self.checked_mul(base as $type)?.checked_add(digit as $type)
            }
        }
    };
}
impl_signed!(i8, u8);
impl_signed!(i16, u16);
impl_signed!(i32, u32);
impl_signed!(i64, u64);
impl_signed!(i128, u128);
impl_signed!(isize, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        assert_eq!(0u8.magnitude(), Some(0));
        assert_eq!(u64::MAX.magnitude(), Some(u64::MAX));
        assert_eq!(i8::MAX.magnitude(), Some(127u8));
        assert_eq!(0i32.magnitude(), Some(0u32));
        assert_eq!((-1i32).magnitude(), None);
        assert_eq!(i128::MIN.magnitude(), None);
    }

    #[test]
    fn test_wrapping_accumulate() {
        assert_eq!(12u8.wrapping_accumulate(10, 3), 123);

        // 25 * 10 + 6 = 256
        assert_eq!(25u8.wrapping_accumulate(10, 6), 0);

        // 12 * 10 + 8 = 128
        assert_eq!(12i8.wrapping_accumulate(10, 8), i8::MIN);
        assert_eq!(0xFFFFu16.wrapping_accumulate(16, 0xF), 0xFFFF);
    }

    #[test]
    fn test_checked_accumulate() {
        assert_eq!(25u8.checked_accumulate(10, 5), Some(255));
        assert_eq!(25u8.checked_accumulate(10, 6), None);
        assert_eq!(12i8.checked_accumulate(10, 7), Some(127));
        assert_eq!(12i8.checked_accumulate(10, 8), None);
        assert_eq!(u128::MAX.checked_accumulate(8, 0), None);
    }

    #[test]
    fn test_div_rem() {
        assert_eq!(123u32.div_rem(10), (12, 3));
        assert_eq!(9u8.div_rem(10), (0, 9));
        assert_eq!(u128::MAX.div_rem(10), (u128::MAX / 10, 5));
    }

    #[test]
    fn test_shr_low() {
        assert_eq!(0x1A2u16.shr_low(4), (0x1A, 0x2));
        assert_eq!(0o777u16.shr_low(3), (0o77, 0o7));
        assert_eq!(0xFFu8.shr_low(4), (0xF, 0xF));
        assert_eq!(u128::MAX.shr_low(4), (u128::MAX >> 4, 0xF));
    }
}
