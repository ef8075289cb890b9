//! Round-coefficient sequence over GF(2^8).

use crate::gf::{poly_div_rem, AES_POLYNOMIAL};

/// Generator for the round-coefficient sequence `01, 02, 04, 08, ...`.
///
/// Each value is the previous one doubled as a polynomial and reduced modulo
/// [`AES_POLYNOMIAL`], so the n-th draw is the n-fold GF(2^8) doubling of 1.
/// The sequence is infinite and strictly ordered: every round-function
/// invocation consumes exactly one value, and drawing out of turn
/// desynchronizes all subsequent schedule output. Resetting means
/// constructing a fresh generator.
#[derive(Clone, Debug)]
pub struct Rcon {
    value: u8,
}

impl Rcon {
    /// Creates a generator positioned at the start of the sequence.
    pub fn new() -> Self {
        Self { value: 1 }
    }

    /// Returns the current coefficient, then advances one doubling step.
    pub fn next_value(&mut self) -> u8 {
        let current = self.value;
        let doubled = u64::from(self.value) << 1;
        let (_, remainder) = poly_div_rem(doubled, u64::from(AES_POLYNOMIAL));
        // The remainder's degree is below 8, so it always fits a byte.
        self.value = remainder as u8;
        current
    }
}

impl Default for Rcon {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Rcon {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.next_value())
    }
}
