//! Error type for schedule input parsing.

use thiserror::Error;

/// Error raised when textual schedule input is rejected.
///
/// All schedule arithmetic is infallible once inputs are in range; the only
/// fallible boundary is turning digit strings into integers, so every variant
/// here names a way that parse can fail. Sign characters are not digits,
/// which is how negative inputs are rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input string contained no digits at all.
    #[error("empty digit string")]
    EmptyInput,
    /// A character outside the digit set of the requested radix.
    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit {
        /// The first offending character.
        digit: char,
        /// The radix the input was parsed under.
        radix: u32,
    },
    /// The digits describe a value wider than the widest supported integer.
    #[error("value does not fit in {bits} bits")]
    ValueTooWide {
        /// Capacity of the target integer in bits.
        bits: u32,
    },
}
