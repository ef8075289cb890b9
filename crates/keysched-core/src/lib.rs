//! Rijndael-style key-schedule expansion.
//!
//! Given a 128-bit initial key, this crate derives an unbounded, strictly
//! ordered sequence of round keys from GF(2^8) round coefficients, the
//! standard substitution table, and the four-word XOR recurrence. It
//! provides:
//! - GF(2) polynomial division and the field's irreducible polynomial.
//! - The round-coefficient generator and the `g` word transform.
//! - The sequential key scheduler and its key and round-key types.
//! - Radix helpers for the hex and binary text forms of schedule values.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it derives key material only and performs no
//! block encryption, so it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod gf;
mod key;
mod radix;
mod rcon;
mod round;
mod sbox;
mod schedule;
mod word;

pub use crate::error::Error;
pub use crate::gf::{poly_div_rem, AES_POLYNOMIAL};
pub use crate::key::{Key, RoundKey, KEY_SIZE};
pub use crate::radix::{from_binary, from_hex, to_binary, to_hex};
pub use crate::rcon::Rcon;
pub use crate::round::GFunction;
pub use crate::sbox::sbox;
pub use crate::schedule::KeyScheduler;
pub use crate::word::{merge, split, Word, NUM_CHUNKS, WORD_SIZE};
