//! Word layout shared by the round function and the scheduler.

/// Bits in one byte-sized chunk of a word.
pub const WORD_SIZE: u32 = 8;

/// Byte chunks in one schedule word.
pub const NUM_CHUNKS: usize = 4;

/// A schedule word: [`NUM_CHUNKS`] byte chunks packed most-significant first.
pub type Word = u32;

/// Splits a word into its byte chunks, most-significant first.
#[inline]
pub fn split(word: Word) -> [u8; NUM_CHUNKS] {
    word.to_be_bytes()
}

/// Packs byte chunks, most-significant first, back into a word.
#[inline]
pub fn merge(chunks: &[u8; NUM_CHUNKS]) -> Word {
    Word::from_be_bytes(*chunks)
}
