//! Limits applied when decoding untrusted numerals.

/// Configuration for the checked decoders ([crate::decode::read_checked] and [crate::buf::read]).
///
/// # Examples
///
/// ```
/// use commonware_numeral::{decode::read_checked, Config, Error, Radix};
///
/// // Accept at most 3 digits
/// let cfg = Config::default().with_max_digits(3);
/// assert_eq!(read_checked::<u32>(Radix::Decimal, b"123", &cfg), Ok((123, &b""[..])));
/// assert_eq!(
///     read_checked::<u32>(Radix::Decimal, b"1234", &cfg),
///     Err(Error::TooManyDigits(3))
/// );
///
/// // Reject leading zeros
/// let cfg = Config::default().with_canonical(true);
/// assert_eq!(read_checked::<u32>(Radix::Decimal, b"0", &cfg), Ok((0, &b""[..])));
/// assert_eq!(read_checked::<u32>(Radix::Decimal, b"01", &cfg), Err(Error::LeadingZero));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config {
    /// The maximum number of digits to accept (if any).
    pub max_digits: Option<usize>,

    /// Whether to reject leading zeros (other than the numeral `0` itself).
    pub canonical: bool,
}

impl Config {
    /// Creates a configuration that requires canonical numerals of at most `max_digits` digits.
    pub const fn strict(max_digits: usize) -> Self {
        Self {
            max_digits: Some(max_digits),
            canonical: true,
        }
    }

    /// Sets the maximum number of digits.
    pub const fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = Some(max_digits);
        self
    }

    /// Sets whether leading zeros are rejected.
    pub const fn with_canonical(mut self, canonical: bool) -> Self {
        self.canonical = canonical;
        self
    }

    /// Returns true if a numeral of `digits` digits is within the limit.
    #[inline]
    pub fn allows(&self, digits: usize) -> bool {
        self.max_digits.map_or(true, |max| digits <= max)
    }
}
