//! Core implementation of a fixed-width bitset, generic over its words.

use core::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

use crate::utils::{BitChunkRaw, IndexInWord, ParseBitsetError, Word};

/// Core implementation of a fixed-width bitset.
///
/// The bits are stored in `N` words of type `W`, little-endian by position: word 0 holds bits 0 to `W::BITS - 1`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BitsetCore<W, const N: usize> {
    words: [W; N],
}

//
//  Constants.
//

impl<W, const N: usize> BitsetCore<W, N>
where
    W: Word,
{
    /// Number of bits in the bitset.
    pub const BITS: usize = W::BITS as usize * N;

    /// Number of chunks of 64 bits needed to hold the bitset.
    pub const CHUNKS: usize = BitChunkRaw::chunks_for(Self::BITS);

    //  Number of words per chunk.
    const WORDS_PER_CHUNK: usize = (BitChunkRaw::BITS / W::BITS) as usize;
}

//
//  Creation
//

impl<W, const N: usize> BitsetCore<W, N>
where
    W: Word,
{
    /// Creates a new bitset, with all bits reset.
    pub const fn new() -> Self {
        Self::from_array([W::ALL_ZEROS; N])
    }

    /// Creates a new bitset from its words.
    pub const fn from_array(words: [W; N]) -> Self {
        Self { words }
    }

    /// Creates a new bitset from its lowest words, the remaining words being all zeros.
    ///
    /// #   Panics
    ///
    /// In Debug, if more than `N` words are provided. In Release, the extra words are ignored.
    #[track_caller]
    pub fn from_words(words: &[W]) -> Self {
        debug_assert!(words.len() <= N, "Too many words: {} > {N}", words.len());

        let mut result = Self::new();

        for (word, value) in result.words.iter_mut().zip(words) {
            *word = *value;
        }

        result
    }

    /// Creates a new bitset from exactly one boolean per bit, position 0 first.
    ///
    /// #   Panics
    ///
    /// In Debug, if `bits` is not exactly `Self::BITS` long. In Release, the missing bits are reset, and the extra bits
    /// are ignored.
    #[track_caller]
    pub fn from_bools(bits: &[bool]) -> Self {
        debug_assert_eq!(Self::BITS, bits.len(), "Array length does not match bitset length");

        let mut result = Self::new();

        for (position, &bit) in bits.iter().take(Self::BITS).enumerate() {
            if bit {
                result.set(position);
            }
        }

        result
    }

    /// Creates a new bitset from exactly one byte per bit, position 0 first, any non-zero byte standing for a set bit.
    ///
    /// #   Panics
    ///
    /// In Debug, if `bytes` is not exactly `Self::BITS` long. In Release, the missing bits are reset, and the extra
    /// bits are ignored.
    #[track_caller]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        debug_assert_eq!(Self::BITS, bytes.len(), "Array length does not match bitset length");

        let mut result = Self::new();

        for (position, &byte) in bytes.iter().take(Self::BITS).enumerate() {
            if byte != 0 {
                result.set(position);
            }
        }

        result
    }

    /// Creates a new bitset from exactly one binary digit per bit, most significant first.
    ///
    /// The leftmost digit is the highest position, as in a binary literal, so that `from_digits` is the inverse of
    /// `write_digits`. Reading the digits left to right into positions 0, 1, ... would instead reverse the bitset.
    ///
    /// #   Panics
    ///
    /// In Debug, if `digits` is not exactly `Self::BITS` long, or contains anything but `0` and `1`. In Release, the
    /// rightmost `Self::BITS` digits are used, and any digit other than `1` is read as `0`.
    #[track_caller]
    pub fn from_digits(digits: &str) -> Self {
        debug_assert_eq!(Self::BITS, digits.len(), "String length does not match bitset length");

        let mut result = Self::new();

        for (position, digit) in digits.bytes().rev().take(Self::BITS).enumerate() {
            debug_assert!(digit == b'0' || digit == b'1', "Invalid binary digit: {:?}", digit as char);

            if digit == b'1' {
                result.set(position);
            }
        }

        result
    }

    /// Parses a bitset from exactly one binary digit per bit, most significant first.
    ///
    /// Returns an error if `digits` is not exactly `Self::BITS` characters long, or contains anything but `0` and `1`.
    pub fn parse_digits(digits: &str) -> Result<Self, ParseBitsetError> {
        let actual = digits.chars().count();

        if actual != Self::BITS {
            return Err(ParseBitsetError::InvalidLength { expected: Self::BITS, actual });
        }

        let mut result = Self::new();

        for (index, digit) in digits.chars().enumerate() {
            match digit {
                '0' => (),
                '1' => result.set(Self::BITS - 1 - index),
                _ => return Err(ParseBitsetError::InvalidDigit { index, digit }),
            }
        }

        Ok(result)
    }

    /// Creates a new bitset from its chunks of 64 bits.
    ///
    /// `chunks` is invoked once with the index of each chunk needed, in increasing order. Bits past `Self::BITS` are
    /// discarded.
    pub fn from_chunks<F>(mut chunks: F) -> Self
    where
        F: FnMut(usize) -> BitChunkRaw,
    {
        let mut result = Self::new();

        for (index, group) in result.words.chunks_mut(Self::WORDS_PER_CHUNK).enumerate() {
            let chunk = chunks(index).0;

            for (i, word) in group.iter_mut().enumerate() {
                *word = W::from_chunk(chunk >> (i * W::BITS as usize));
            }
        }

        result
    }
}

impl<W, const N: usize> Default for BitsetCore<W, N>
where
    W: Word,
{
    fn default() -> Self {
        Self::new()
    }
}

//
//  Words
//

impl<W, const N: usize> BitsetCore<W, N>
where
    W: Word,
{
    /// Returns the underlying words.
    pub const fn words(&self) -> &[W; N] {
        &self.words
    }

    /// Returns the underlying words, mutably.
    pub const fn words_mut(&mut self) -> &mut [W; N] {
        &mut self.words
    }

    /// Returns the `index`-th chunk of 64 bits, or `ALL_ZEROS` past the end of the bitset.
    pub fn chunk(&self, index: usize) -> BitChunkRaw {
        let first = index.saturating_mul(Self::WORDS_PER_CHUNK);

        let chunk = self
            .words
            .iter()
            .skip(first)
            .take(Self::WORDS_PER_CHUNK)
            .enumerate()
            .fold(0, |chunk, (i, word)| chunk | (word.into_chunk() << (i * W::BITS as usize)));

        BitChunkRaw(chunk)
    }
}

//
//  Bit operations.
//

impl<W, const N: usize> BitsetCore<W, N>
where
    W: Word,
{
    /// Returns whether the bit at `position` is set.
    ///
    /// #   Panics
    ///
    /// In Debug, if `position` is out of bounds. In Release, the position is masked.
    #[inline]
    #[track_caller]
    pub fn test(&self, position: usize) -> bool {
        let (of_word, in_word) = Self::locate(position);

        self.words[of_word].is_set(in_word)
    }

    /// Sets the bit at `position` to 1.
    ///
    /// #   Panics
    ///
    /// In Debug, if `position` is out of bounds. In Release, the position is masked.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, position: usize) {
        let (of_word, in_word) = Self::locate(position);

        self.words[of_word].set(in_word);
    }

    /// Resets the bit at `position` to 0.
    ///
    /// #   Panics
    ///
    /// In Debug, if `position` is out of bounds. In Release, the position is masked.
    #[inline]
    #[track_caller]
    pub fn reset(&mut self, position: usize) {
        let (of_word, in_word) = Self::locate(position);

        self.words[of_word].reset(in_word);
    }

    /// Flips the bit at `position`.
    ///
    /// #   Panics
    ///
    /// In Debug, if `position` is out of bounds. In Release, the position is masked.
    #[inline]
    #[track_caller]
    pub fn flip(&mut self, position: usize) {
        let (of_word, in_word) = Self::locate(position);

        self.words[of_word].flip(in_word);
    }
}

//
//  Query operations.
//

impl<W, const N: usize> BitsetCore<W, N>
where
    W: Word,
{
    /// Returns whether all bits are set.
    pub fn all(&self) -> bool {
        self.words.iter().all(|&word| word == W::ALL_ONES)
    }

    /// Returns whether at least one bit is set.
    pub fn any(&self) -> bool {
        self.words.iter().any(|&word| word != W::ALL_ZEROS)
    }

    /// Returns whether no bit is set.
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Returns the number of bits set.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|&word| word.count()).sum()
    }

    /// Returns the bitset as a `u32`, if no bit above position 31 is set.
    pub fn checked_to_u32(&self) -> Option<u32> {
        self.checked_to_u64().and_then(|value| value.try_into().ok())
    }

    /// Returns the bitset as a `u64`, if no bit above position 63 is set.
    pub fn checked_to_u64(&self) -> Option<u64> {
        let high = (1..Self::CHUNKS).any(|index| self.chunk(index) != BitChunkRaw::ALL_ZEROS);

        (!high).then(|| self.chunk(0).0)
    }

    /// Returns the bitset as a `u32`.
    ///
    /// #   Panics
    ///
    /// In Debug, if any bit above position 31 is set. In Release, such bits are discarded.
    #[track_caller]
    pub fn to_u32(&self) -> u32 {
        debug_assert!(self.checked_to_u32().is_some(), "Cannot convert to u32");

        self.chunk(0).0 as u32
    }

    /// Returns the bitset as a `u64`.
    ///
    /// #   Panics
    ///
    /// In Debug, if any bit above position 63 is set. In Release, such bits are discarded.
    #[track_caller]
    pub fn to_u64(&self) -> u64 {
        debug_assert!(self.checked_to_u64().is_some(), "Cannot convert to u64");

        self.chunk(0).0
    }

    /// Writes one byte per bit, 0 or 1, position 0 first.
    ///
    /// #   Panics
    ///
    /// In Debug, if `bytes` is not exactly `Self::BITS` long. In Release, only the common prefix is written.
    #[track_caller]
    pub fn write_bytes(&self, bytes: &mut [u8]) {
        debug_assert_eq!(Self::BITS, bytes.len(), "Array length does not match bitset length");

        for (position, byte) in bytes.iter_mut().take(Self::BITS).enumerate() {
            *byte = self.test(position).into();
        }
    }

    /// Writes the binary digits, most significant first.
    pub fn write_digits(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let width = W::BITS as usize;

        for word in self.words.iter().rev() {
            write!(f, "{word:0width$b}")?;
        }

        Ok(())
    }
}

// mod tests

//
//  Bitwise traits.
//

impl<W, const N: usize> BitAndAssign for BitsetCore<W, N>
where
    W: Word,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        for (word, rhs) in self.words.iter_mut().zip(rhs.words) {
            *word &= rhs;
        }
    }
}

impl<W, const N: usize> BitAnd for BitsetCore<W, N>
where
    W: Word,
{
    type Output = Self;

    #[inline]
    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl<W, const N: usize> BitOrAssign for BitsetCore<W, N>
where
    W: Word,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        for (word, rhs) in self.words.iter_mut().zip(rhs.words) {
            *word |= rhs;
        }
    }
}

impl<W, const N: usize> BitOr for BitsetCore<W, N>
where
    W: Word,
{
    type Output = Self;

    #[inline]
    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl<W, const N: usize> BitXorAssign for BitsetCore<W, N>
where
    W: Word,
{
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        for (word, rhs) in self.words.iter_mut().zip(rhs.words) {
            *word ^= rhs;
        }
    }
}

impl<W, const N: usize> BitXor for BitsetCore<W, N>
where
    W: Word,
{
    type Output = Self;

    #[inline]
    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl<W, const N: usize> Not for BitsetCore<W, N>
where
    W: Word,
{
    type Output = Self;

    #[inline]
    fn not(mut self) -> Self::Output {
        for word in &mut self.words {
            *word = !*word;
        }

        self
    }
}

#[cfg(test)]
mod bitwise_tests {
    use super::*;

    type Longs2 = BitsetCore<u64, 2>;

    const LEFT: [u64; 2] = [0b1001, 0b0001_1000];
    const RIGHT: [u64; 2] = [0b0001_1000, 0b1001];

    #[test]
    fn bit_and() {
        const RESULT: [u64; 2] = [0b1000, 0b1000];

        {
            let mut bitset = Longs2::from_array(LEFT);

            bitset &= Longs2::from_array(RIGHT);

            assert_eq!(&RESULT, bitset.words());
        }

        assert_eq!(&RESULT, (Longs2::from_array(LEFT) & Longs2::from_array(RIGHT)).words());
    }

    #[test]
    fn bit_or() {
        const RESULT: [u64; 2] = [0b0001_1001, 0b0001_1001];

        {
            let mut bitset = Longs2::from_array(LEFT);

            bitset |= Longs2::from_array(RIGHT);

            assert_eq!(&RESULT, bitset.words());
        }

        assert_eq!(&RESULT, (Longs2::from_array(LEFT) | Longs2::from_array(RIGHT)).words());
    }

    #[test]
    fn bit_xor() {
        const RESULT: [u64; 2] = [0b0001_0001, 0b0001_0001];

        {
            let mut bitset = Longs2::from_array(LEFT);

            bitset ^= Longs2::from_array(RIGHT);

            assert_eq!(&RESULT, bitset.words());
        }

        assert_eq!(&RESULT, (Longs2::from_array(LEFT) ^ Longs2::from_array(RIGHT)).words());
    }

    #[test]
    fn not() {
        assert_eq!(&[!0b1001, !0b0001_1000], (!Longs2::from_array(LEFT)).words());
    }
} // mod bitwise_tests

//
//  Implementation details
//

impl<W, const N: usize> BitsetCore<W, N>
where
    W: Word,
{
    //  Splits the position, masked in Release, into an index-of-word/index-in-word pair.
    #[inline]
    #[track_caller]
    fn locate(position: usize) -> (usize, IndexInWord) {
        debug_assert!(position < Self::BITS, "Index out of bounds: Bitset{}[{position}]", Self::BITS);

        let (of_word, in_word) = W::split(position % Self::BITS);

        (of_word.0, in_word)
    }
}
