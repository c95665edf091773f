//! Encode and decode integers as ASCII decimal, hexadecimal, and octal text.
//!
//! # Overview
//!
//! Converts between primitive integers and their textual form, operating directly on byte
//! buffers:
//! - Decoders ([decode]) parse the longest run of digits at the front of a byte sequence and return
//!   the value alongside the unconsumed remainder (borrowed from the input, never copied).
//! - Encoders ([encode]) compute the exact digit count of a value first, then fill a buffer of
//!   exactly that size from the least significant digit backward.
//! - Digit counters ([digits]) determine that size: in `O(log(digits))` steps for any base, and
//!   with shifts alone for power-of-two bases.
//!
//! All operations are pure and can be called concurrently without coordination.
//!
//! # Supported Types
//!
//! Every primitive integer (`u8` through `u128`, `i8` through `i128`, `usize`, and `isize`).
//! Only non-negative values can be encoded: negative values are rejected rather than rendered
//! with a sign. Callers that need signs or base prefixes (like `0x`) layer them on top.
//!
//! # Error Handling
//!
//! The core decoders and encoders return `None` for input they cannot handle (no leading digit,
//! negative value). The checked decoders ([decode::read_checked] and [buf::read]) report an
//! [Error] instead and enforce the limits of a [Config]. Invalid arguments to the digit counters
//! (a base below 2, a power of 0, a negative value) indicate a bug at the call site and panic.
//!
//! # Example
//!
//! ```
//! use commonware_numeral::{decode, encode};
//!
//! // Parse a hexadecimal numeral, keeping the rest of the input
//! let (value, rest) = decode::read_hexadecimal::<u32>(b"1A2z").unwrap();
//! assert_eq!(value, 0x1a2);
//! assert_eq!(rest, b"z");
//!
//! // Render it back (always lowercase)
//! assert_eq!(encode::pack_hexadecimal(value).unwrap(), "1a2");
//!
//! // Render it in other bases
//! assert_eq!(encode::pack_decimal(value).unwrap(), "418");
//! assert_eq!(encode::pack_octal(value).unwrap(), "642");
//! ```

pub mod buf;
pub mod config;
pub mod decode;
pub mod digits;
pub mod encode;
pub mod error;
pub mod int;
pub mod radix;

// Re-export main types and functions
pub use config::Config;
pub use decode::{read_decimal, read_hexadecimal, read_octal};
pub use digits::{num_digits, two_power_num_digits};
pub use encode::{as_hexadecimal, pack_decimal, pack_hexadecimal, pack_octal, HEX_DIGITS};
pub use error::Error;
pub use int::{Integer, Magnitude};
pub use radix::Radix;
