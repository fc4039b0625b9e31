//! A 64-bits bitset.

use super::bitset_fixed::bitset_fixed;

bitset_fixed!(
    /// A fixed-size sequence of 64 bits, stored in a single `u64`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_fixed::collections::Bitset64;
    /// let bitset = Bitset64::new(1 << 40 | 1);
    ///
    /// assert_eq!(vec![0, 40], bitset.ones().collect::<Vec<_>>());
    /// assert_eq!(None, bitset.checked_to_u32());
    /// assert_eq!(Some(1 << 40 | 1), bitset.checked_to_u64());
    /// ```
    Bitset64,
    u64,
    1,
    64
);

impl Bitset64 {
    /// Creates a bitset from its word.
    pub const fn new(word: u64) -> Self {
        Self::from_array([word])
    }
}

impl From<u64> for Bitset64 {
    fn from(word: u64) -> Self {
        Self::new(word)
    }
}

impl From<Bitset64> for u64 {
    fn from(bitset: Bitset64) -> Self {
        bitset.words()[0]
    }
}

// mod tests
