//  See `BitChunkRaw` type.
//
//  #   Why a dedicated type?
//
//  Bitsets of all widths exchange their bits as a sequence of 64-bits chunks, regardless of their own storage. A
//  dedicated type, on top of avoiding confusion with a numeric value, carries the scanning methods used by iterators.
//
//
//  #   Why `u64`?
//
//  It is the widest word used as storage, hence every word of every bitset fits in exactly one chunk, and no word is
//  ever split across two chunks.

use super::{IndexInWord, IndexOfWord, Word};

/// A chunk of 64 bits.
///
/// A chunk is the unit of exchange between bitsets of different widths: the `i`-th chunk of a bitset holds its bits
/// `64 * i` to `64 * i + 63`, the chunks past the end of the bitset being all zeros.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct BitChunkRaw(pub u64);

//
//  Constants.
//

impl BitChunkRaw {
    /// Number of bits in a chunk.
    pub const BITS: u32 = 64;

    /// An all-zeros bit chunk.
    pub const ALL_ZEROS: Self = Self(0);

    /// An all-ones bit chunk.
    pub const ALL_ONES: Self = Self(!0);

    /// Returns the number of chunks needed to hold `bits` bits.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_fixed::utils::BitChunkRaw;
    /// assert_eq!(1, BitChunkRaw::chunks_for(8));
    /// assert_eq!(1, BitChunkRaw::chunks_for(64));
    /// assert_eq!(4, BitChunkRaw::chunks_for(256));
    /// ```
    #[inline]
    pub const fn chunks_for(bits: usize) -> usize {
        bits.div_ceil(Self::BITS as usize)
    }

    /// Splits a position into an index-of-chunk/index-in-chunk pair.
    #[inline]
    pub fn split(position: usize) -> (IndexOfWord, IndexInWord) {
        u64::split(position)
    }

    /// Fuses an index-of-chunk/index-in-chunk pair into a position.
    #[inline]
    pub const fn fuse(of_chunk: IndexOfWord, in_chunk: IndexInWord) -> usize {
        debug_assert!(in_chunk.0 < Self::BITS);

        of_chunk.0 * Self::BITS as usize + (in_chunk.0 % Self::BITS) as usize
    }
}

//
//  Query operations.
//

impl BitChunkRaw {
    /// Returns the number of bits set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_fixed::utils::BitChunkRaw;
    /// assert_eq!(0, BitChunkRaw::ALL_ZEROS.count());
    /// assert_eq!(64, BitChunkRaw::ALL_ONES.count());
    /// ```
    #[inline]
    pub const fn count(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Returns the index of the next set bit that is at, or after, the given index, if any.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_fixed::utils::{BitChunkRaw, IndexInWord};
    /// assert_eq!(None, BitChunkRaw::ALL_ZEROS.next_after(IndexInWord(0)));
    ///
    /// assert_eq!(Some(IndexInWord(0)), BitChunkRaw::ALL_ONES.next_after(IndexInWord(0)));
    /// assert_eq!(Some(IndexInWord(4)), BitChunkRaw(0b1_0001).next_after(IndexInWord(1)));
    /// ```
    #[inline]
    pub const fn next_after(&self, bit: IndexInWord) -> Option<IndexInWord> {
        let mask = Self::mask_after(bit);

        let zeros = (self.0 & mask).trailing_zeros();

        //  FIXME: convert to `.then_some` when it is const.
        if zeros < Self::BITS {
            Some(IndexInWord(zeros))
        } else {
            None
        }
    }

    /// Returns the index of the next set bit that is at, or before, the given index, if any.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_fixed::utils::{BitChunkRaw, IndexInWord};
    /// assert_eq!(None, BitChunkRaw::ALL_ZEROS.next_before(IndexInWord(63)));
    ///
    /// assert_eq!(Some(IndexInWord(63)), BitChunkRaw::ALL_ONES.next_before(IndexInWord(63)));
    /// assert_eq!(Some(IndexInWord(0)), BitChunkRaw(0b1_0001).next_before(IndexInWord(3)));
    /// ```
    #[inline]
    pub const fn next_before(&self, bit: IndexInWord) -> Option<IndexInWord> {
        let mask = Self::mask_before(bit);

        let zeros = (self.0 & mask).leading_zeros();

        //  FIXME: convert to `.then_some` when it is const.
        if zeros < Self::BITS {
            Some(IndexInWord(Self::BITS - zeros - 1))
        } else {
            None
        }
    }
}

// mod query_tests

//
//  Implementation details
//

impl BitChunkRaw {
    //  Mask of the bit.
    #[inline]
    const fn bit_mask(bit: IndexInWord) -> u64 {
        debug_assert!(bit.0 < Self::BITS);

        //  Mask to ensure the shift doesn't overflow.
        let shift = bit.0 % Self::BITS;

        1 << shift
    }

    //  Mask including `bit` and all bits after.
    #[inline]
    const fn mask_after(bit: IndexInWord) -> u64 {
        let mask = Self::bit_mask(bit) - 1;

        !mask
    }

    //  Mask including `bit` and all bits before.
    #[inline]
    const fn mask_before(bit: IndexInWord) -> u64 {
        (Self::bit_mask(bit) << 1).wrapping_sub(1)
    }
}
