//! Count the digits needed to render a value in some base.
//!
//! The generic counter ([num_digits]) finds `floor(log_base(n))` by repeatedly squaring the base,
//! so it takes `O(log(digits))` steps rather than the `O(digits)` divisions of a naive loop. The
//! power-of-two counter ([two_power_num_digits]) only shifts, so it cannot overflow.
//!
//! Both functions panic on invalid arguments: these indicate a mistake at the call site, not bad
//! input.

use crate::int::{Integer, Magnitude};

/// Returns the number of digits needed to render `n` in `base` (with no leading zeros).
///
/// Zero has exactly one digit.
///
/// # Panics
///
/// Panics if `base <= 1` or if `n` is negative.
pub fn num_digits<T: Integer>(base: u32, n: T) -> usize {
    assert!(base > 1, "base must be greater than 1, got {base}");
    let Some(n) = n.magnitude() else {
        panic!("cannot count the digits of a negative value");
    };
    let (exponent, _) = ilog(u128::from(base), n.widen());
    exponent + 1
}

/// Returns the number of digits needed to render `n` in base `2^p` (with no leading zeros).
///
/// Zero has exactly one digit.
///
/// # Panics
///
/// Panics if `p == 0` or if `n` is negative.
pub fn two_power_num_digits<T: Integer>(p: u32, n: T) -> usize {
    assert!(p > 0, "power must be greater than 0, got {p}");
    let Some(n) = n.magnitude() else {
        panic!("cannot count the digits of a negative value");
    };
    let mut n = n.widen();
    if n == 0 {
        return 1;
    }
    let mut digits = 0;
    while n > 0 {
        digits += 1;
        n = n.checked_shr(p).unwrap_or(0);
    }
    digits
}

/// Returns `(e, n / base^e)` where `e = floor(log_base(n))`.
///
/// Recurses on `base^2`, so the depth is `O(log(log_base(n)))`. Once `base^2` no longer fits in a
/// `u128` it is larger than any `n`, which ends the recursion.
fn ilog(base: u128, n: u128) -> (usize, u128) {
    if n < base {
        return (0, n);
    }
    let (exponent, remainder) = match base.checked_mul(base) {
        Some(squared) => ilog(squared, n),
        None => (0, n),
    };
    if remainder < base {
        (2 * exponent, remainder)
    } else {
        (2 * exponent + 1, remainder / base)
    }
}
