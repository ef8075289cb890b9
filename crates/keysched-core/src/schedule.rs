//! Sequential round-key expansion.

use crate::key::{Key, RoundKey};
use crate::round::GFunction;
use crate::word::{Word, NUM_CHUNKS};

/// Expands an initial key into an unbounded, strictly ordered sequence of
/// round keys.
///
/// The scheduler owns the growing word buffer and the round-coefficient
/// sequence (via its [`GFunction`]), so one instance yields exactly one
/// deterministic schedule. Round keys can only be drawn in order; there is
/// no random access, because every round's words depend on all previous
/// rounds' words and on the coefficient sequence position. Two schedulers
/// constructed from the same key produce identical output.
#[derive(Clone, Debug)]
pub struct KeyScheduler {
    words: Vec<Word>,
    round: usize,
    g: GFunction,
}

impl KeyScheduler {
    /// Creates a scheduler seeded with `key`, whose word decomposition forms
    /// round zero's words.
    pub fn new(key: Key) -> Self {
        Self {
            words: key.to_words().to_vec(),
            round: 0,
            g: GFunction::new(),
        }
    }

    /// Derives and returns the next round key in sequence.
    ///
    /// Round 0 is the initial key verbatim; the round function is not
    /// invoked. Every later round appends [`NUM_CHUNKS`] words via the
    /// expansion recurrence before packing them into the returned key. The
    /// round index advances on every call.
    pub fn next_round_key(&mut self) -> RoundKey {
        if self.round > 0 {
            self.extend_round();
        }
        let round_key = self.merged_round_key();
        self.round += 1;
        round_key
    }

    /// Appends this round's words:
    /// `W[4i] = W[4(i-1)] ^ g(W[4i-1])`, then
    /// `W[4i+j] = W[4i+j-1] ^ W[4(i-1)+j]` for `j` in `1..4`.
    fn extend_round(&mut self) {
        let i = self.round;
        let previous_last = self.words[NUM_CHUNKS * i - 1];
        let first = self.words[NUM_CHUNKS * (i - 1)] ^ self.g.apply(previous_last);
        self.words.push(first);
        for j in 1..NUM_CHUNKS {
            let word = self.words[NUM_CHUNKS * i + j - 1] ^ self.words[NUM_CHUNKS * (i - 1) + j];
            self.words.push(word);
        }
    }

    fn merged_round_key(&self) -> RoundKey {
        let start = NUM_CHUNKS * self.round;
        let words: [Word; NUM_CHUNKS] = self.words[start..start + NUM_CHUNKS]
            .try_into()
            .expect("current round's words are present");
        RoundKey::from_words(words)
    }

    /// Index of the next round to be produced.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Read-only view of the expanded word buffer, oldest first.
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl Iterator for KeyScheduler {
    type Item = RoundKey;

    /// Yields round keys forever; the sequence has no natural end.
    fn next(&mut self) -> Option<RoundKey> {
        Some(self.next_round_key())
    }
}
