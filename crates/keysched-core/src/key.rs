//! Key and round-key types.

use core::fmt;

use crate::radix;
use crate::word::{Word, NUM_CHUNKS, WORD_SIZE};

/// Width in bits of an initial key: [`NUM_CHUNKS`] words of
/// `NUM_CHUNKS * WORD_SIZE` bits each.
pub const KEY_SIZE: u32 = (NUM_CHUNKS * NUM_CHUNKS) as u32 * WORD_SIZE;

/// Initial 128-bit key for the schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Key(u128);

impl Key {
    /// Wraps a key value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the key as a wide integer.
    pub const fn value(self) -> u128 {
        self.0
    }

    /// Splits the key into its initial schedule words, most-significant
    /// first.
    pub fn to_words(self) -> [Word; NUM_CHUNKS] {
        let bytes = self.0.to_be_bytes();
        let mut words = [0; NUM_CHUNKS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(NUM_CHUNKS)) {
            *word = Word::from_be_bytes(chunk.try_into().expect("chunk length is four"));
        }
        words
    }
}

impl From<u128> for Key {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

/// One derived round key: [`NUM_CHUNKS`] consecutive schedule words packed
/// most-significant-word-first into a wide integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKey(u128);

impl RoundKey {
    /// Packs one round's words into a round key, most-significant first.
    pub(crate) fn from_words(words: [Word; NUM_CHUNKS]) -> Self {
        let mut value = 0u128;
        for word in words {
            value = (value << (NUM_CHUNKS as u32 * WORD_SIZE)) | u128::from(word);
        }
        Self(value)
    }

    /// Returns the round key as a wide integer.
    pub const fn value(self) -> u128 {
        self.0
    }

    /// Returns the round key bytes, most-significant first.
    pub const fn to_be_bytes(self) -> [u8; 16] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for RoundKey {
    /// Renders the full zero-padded uppercase hex form, e.g. 32 digits for a
    /// 128-bit key.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&radix::to_hex(self.0, (KEY_SIZE / 4) as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_splits_into_big_endian_words() {
        let key = Key::new(0x2B7E1516_28AED2A6_ABF71588_09CF4F3C);
        assert_eq!(
            key.to_words(),
            [0x2B7E_1516, 0x28AE_D2A6, 0xABF7_1588, 0x09CF_4F3C]
        );
    }

    #[test]
    fn zero_key_splits_into_zero_words() {
        assert_eq!(Key::new(0).to_words(), [0; NUM_CHUNKS]);
    }

    #[test]
    fn round_key_packs_words_most_significant_first() {
        let round_key = RoundKey::from_words([0xA0FA_FE17, 0x8854_2CB1, 0x23A3_3939, 0x2A6C_7605]);
        assert_eq!(round_key.value(), 0xA0FAFE17_88542CB1_23A33939_2A6C7605);
        assert_eq!(round_key.to_be_bytes()[0], 0xA0);
        assert_eq!(round_key.to_be_bytes()[15], 0x05);
    }

    #[test]
    fn display_is_zero_padded_to_the_key_width() {
        assert_eq!(
            RoundKey::from_words([0; NUM_CHUNKS]).to_string(),
            "00000000000000000000000000000000"
        );
        assert_eq!(
            RoundKey::from_words([0, 0, 0, 0x1B]).to_string(),
            "0000000000000000000000000000001B"
        );
    }
}
