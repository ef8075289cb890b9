//! Integer and digit-string conversions used for schedule input and output.
//!
//! Widths are minimums: a value is zero-padded up to the requested number of
//! digits but never truncated, so round-tripping through either radix is
//! lossless for every representable value.

use crate::error::Error;

/// Formats `value` as uppercase hexadecimal, zero-padded to at least
/// `min_digits` digits.
pub fn to_hex(value: u128, min_digits: usize) -> String {
    format!("{:0width$X}", value, width = min_digits)
}

/// Formats `value` in binary, zero-padded to at least `min_digits` digits.
pub fn to_binary(value: u128, min_digits: usize) -> String {
    format!("{:0width$b}", value, width = min_digits)
}

/// Parses a hexadecimal digit string (either letter case, no prefix).
pub fn from_hex(text: &str) -> Result<u128, Error> {
    parse_digits(text, 16)
}

/// Parses a binary digit string (no prefix).
pub fn from_binary(text: &str) -> Result<u128, Error> {
    parse_digits(text, 2)
}

fn parse_digits(text: &str, radix: u32) -> Result<u128, Error> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    if let Some(digit) = text.chars().find(|c| !c.is_digit(radix)) {
        return Err(Error::InvalidDigit { digit, radix });
    }
    // Empty and non-digit inputs (signs included) are screened above, so the
    // only remaining failure is overflow past 128 bits.
    u128::from_str_radix(text, radix).map_err(|_| Error::ValueTooWide { bits: u128::BITS })
}
