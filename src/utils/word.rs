//  See `Word` trait.
//
//  #   Why a trait, rather than a single word type?
//
//  The narrow bitsets are stored in a single word of exactly their width: an 8-bits bitset in a `u8`, a 16-bits bitset
//  in a `u16`, etc... so that they are no larger than the integer they stand for. The wide bitsets are stored in arrays
//  of `u64`, the largest well supported type.
//
//  The trait abstracts over the word type, so that the bitset logic is written once, in `BitsetCore`.

use core::{
    fmt,
    hash::Hash,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

/// The index of a word, in an array of words.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IndexOfWord(pub usize);

/// The index of a bit in a word.
///
/// The index of a bit in a word is expected to always be strictly less than the number of bits of the word. No index
/// created by `Word::split` will ever violate this invariant.
///
/// #   Panics
///
/// In Debug, most operations taking an `IndexInWord` will panic if its value is out of bounds.
///
/// In Release, any high bit will be ignored (masked away).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IndexInWord(pub u32);

/// An unsigned integer used as storage for a contiguous range of bits.
///
/// The trait is implemented for `u8`, `u16`, `u32`, and `u64`.
pub trait Word:
    Copy
    + Default
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Binary
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
{
    /// Number of bits in a word.
    const BITS: u32;

    /// An all-zeros word.
    const ALL_ZEROS: Self;

    /// An all-ones word.
    const ALL_ONES: Self;

    /// Returns the low bits of `chunk`, truncated to the width of the word.
    fn from_chunk(chunk: u64) -> Self;

    /// Returns the word, zero-extended to 64 bits.
    fn into_chunk(self) -> u64;

    /// Returns the number of bits set.
    fn count(self) -> usize;

    /// Splits a position into an index-of-word/index-in-word pair.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_fixed::utils::Word;
    /// let (of_word, in_word) = u16::split(37);
    ///
    /// assert_eq!(2, of_word.0);
    /// assert_eq!(5, in_word.0);
    /// ```
    #[inline]
    fn split(position: usize) -> (IndexOfWord, IndexInWord) {
        //  Compute both / and % close together, so the optimizer fuses both in a single instruction.
        let of_word = position / Self::BITS as usize;
        let in_word = position % Self::BITS as usize;

        (IndexOfWord(of_word), IndexInWord(in_word as u32))
    }

    /// Returns whether the given bit is set.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    #[inline]
    fn is_set(self, bit: IndexInWord) -> bool {
        (self & Self::bit_mask(bit)) != Self::ALL_ZEROS
    }

    /// Sets a bit.
    ///
    /// Returns whether the bit is newly set, or not.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    #[inline]
    fn set(&mut self, bit: IndexInWord) -> bool {
        let mask = Self::bit_mask(bit);

        let result = (*self & mask) == Self::ALL_ZEROS;

        *self |= mask;

        result
    }

    /// Resets a bit.
    ///
    /// Returns whether the bit was set, or not.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    #[inline]
    fn reset(&mut self, bit: IndexInWord) -> bool {
        let mask = Self::bit_mask(bit);

        let result = (*self & mask) != Self::ALL_ZEROS;

        *self &= !mask;

        result
    }

    /// Flips a bit.
    ///
    /// Returns whether the bit is now set, or not.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    #[inline]
    fn flip(&mut self, bit: IndexInWord) -> bool {
        let mask = Self::bit_mask(bit);

        *self ^= mask;

        (*self & mask) != Self::ALL_ZEROS
    }

    /// Returns the mask of the bit.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    #[inline]
    fn bit_mask(bit: IndexInWord) -> Self {
        debug_assert!(bit.0 < Self::BITS);

        //  Mask to ensure the shift doesn't overflow.
        let shift = bit.0 % Self::BITS;

        Self::from_chunk(1 << shift)
    }
}

macro_rules! implement_word {
    ($word_type:ty) => {
        impl Word for $word_type {
            const BITS: u32 = <$word_type>::BITS;

            const ALL_ZEROS: Self = 0;

            const ALL_ONES: Self = !0;

            #[inline]
            fn from_chunk(chunk: u64) -> Self {
                chunk as Self
            }

            #[inline]
            fn into_chunk(self) -> u64 {
                self.into()
            }

            #[inline]
            fn count(self) -> usize {
                self.count_ones() as _
            }
        }
    };
}

implement_word!(u8);
implement_word!(u16);
implement_word!(u32);
implement_word!(u64);

// mod split_tests

#[cfg(test)]
mod bit_tests {
    use super::*;

    #[test]
    fn is_set_empty() {
        check_is_set_empty::<u8>();
        check_is_set_empty::<u16>();
        check_is_set_empty::<u32>();
        check_is_set_empty::<u64>();
    }

    #[test]
    fn is_set_full() {
        check_is_set_full::<u8>();
        check_is_set_full::<u16>();
        check_is_set_full::<u32>();
        check_is_set_full::<u64>();
    }

    #[test]
    fn set_reset() {
        check_set_reset::<u8>();
        check_set_reset::<u16>();
        check_set_reset::<u32>();
        check_set_reset::<u64>();
    }

    #[test]
    fn flip() {
        let mut word = 0b1001u8;

        assert!(word.flip(IndexInWord(1)));
        assert_eq!(0b1011, word);

        assert!(!word.flip(IndexInWord(0)));
        assert_eq!(0b1010, word);
    }

    #[test]
    fn chunk_truncation() {
        assert_eq!(0x21, u8::from_chunk(0x4321));
        assert_eq!(0x4321, u16::from_chunk(0x8765_4321));
        assert_eq!(0x8765_4321, u32::from_chunk(0xFEDC_BA98_8765_4321));
        assert_eq!(0xFEDC_BA98_8765_4321, u64::from_chunk(0xFEDC_BA98_8765_4321));

        assert_eq!(0xFF, u8::ALL_ONES.into_chunk());
        assert_eq!(u64::MAX, u64::ALL_ONES.into_chunk());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn bit_mask_overflow() {
        u8::bit_mask(IndexInWord(8));
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn bit_mask_overflow() {
        assert_eq!(1, u8::bit_mask(IndexInWord(8)));
        assert_eq!(2, u8::bit_mask(IndexInWord(9)));
        assert_eq!(1, u64::bit_mask(IndexInWord(64)));
    }

    fn check_is_set_empty<W: Word>() {
        for i in 0..W::BITS {
            assert!(!W::ALL_ZEROS.is_set(IndexInWord(i)), "{i}");
        }
    }

    fn check_is_set_full<W: Word>() {
        for i in 0..W::BITS {
            assert!(W::ALL_ONES.is_set(IndexInWord(i)), "{i}");
        }
    }

    fn check_set_reset<W: Word>() {
        for i in 0..W::BITS {
            let mut word = W::ALL_ZEROS;

            assert!(word.set(IndexInWord(i)), "{i}");
            assert!(!word.set(IndexInWord(i)), "{i}");
            assert!(word.is_set(IndexInWord(i)), "{i}");
            assert_eq!(1, word.count(), "{i}");

            assert!(word.reset(IndexInWord(i)), "{i}");
            assert!(!word.reset(IndexInWord(i)), "{i}");
            assert_eq!(W::ALL_ZEROS, word, "{i}");
        }
    }
} // mod bit_tests
