//! A 256-bits bitset.

use super::{Bitset128, bitset_fixed::bitset_fixed};

bitset_fixed!(
    /// A fixed-size sequence of 256 bits, stored in four `u64`, composed of a low and a high `Bitset128` half.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_fixed::collections::{Bitset128, Bitset256};
    /// let mut bitset = Bitset256::default();
    ///
    /// bitset.set(128);
    ///
    /// assert_eq!(Bitset128::new(1, 0), bitset.high());
    /// assert_eq!(Bitset128::default(), bitset.low());
    /// ```
    Bitset256,
    u64,
    4,
    256
);

impl Bitset256 {
    /// Creates a bitset from its words, lowest first.
    pub const fn new(w0: u64, w1: u64, w2: u64, w3: u64) -> Self {
        Self::from_array([w0, w1, w2, w3])
    }

    /// Creates a bitset from its low and high halves.
    pub const fn from_halves(low: Bitset128, high: Bitset128) -> Self {
        Self::new(low.low(), low.high(), high.low(), high.high())
    }

    /// Returns the low half, that is bits 0 to 127.
    pub const fn low(&self) -> Bitset128 {
        let words = self.words();

        Bitset128::new(words[0], words[1])
    }

    /// Returns the high half, that is bits 128 to 255.
    pub const fn high(&self) -> Bitset128 {
        let words = self.words();

        Bitset128::new(words[2], words[3])
    }

    /// Sets the low half, that is bits 0 to 127.
    pub fn set_low(&mut self, low: Bitset128) {
        self.0.words_mut()[..2].copy_from_slice(low.words());
    }

    /// Sets the high half, that is bits 128 to 255.
    pub fn set_high(&mut self, high: Bitset128) {
        self.0.words_mut()[2..].copy_from_slice(high.words());
    }
}

impl From<[u64; 4]> for Bitset256 {
    fn from(words: [u64; 4]) -> Self {
        Self::from_array(words)
    }
}

impl From<Bitset256> for [u64; 4] {
    fn from(bitset: Bitset256) -> Self {
        *bitset.words()
    }
}

// mod tests
