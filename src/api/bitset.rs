//! A fixed-width bitset.

use core::{
    fmt,
    hash::Hash,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
    str::FromStr,
};

use crate::{
    algorithm,
    utils::{BitChunkRaw, ParseBitsetError},
};

/// A fixed-width sequence of bits, indexed from 0 (least significant) to `BITS - 1` (most significant).
///
/// The width is part of the type, and never changes. Out of bounds positions are programming errors: they are caught
/// by debug assertions in Debug, and masked away in Release.
///
/// The trait allows writing width-agnostic algorithms once, see the `algorithm` module.
///
/// #   Examples
///
/// ```
/// #   use bit_fixed::{api::Bitset, collections::{Bitset8, Bitset128}};
/// fn lowest<B: Bitset>(bitset: &B) -> Option<usize> {
///     (0..B::BITS).find(|&position| bitset.test(position))
/// }
///
/// assert_eq!(Some(3), lowest(&Bitset8::new(0b1000)));
/// assert_eq!(Some(64), lowest(&Bitset128::new(0, 1)));
/// assert_eq!(None, lowest(&Bitset128::default()));
/// ```
pub trait Bitset:
    Copy
    + Default
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = ParseBitsetError>
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
{
    /// Number of bits in the bitset.
    const BITS: usize;

    /// Returns the number of bits in the bitset, that is `Self::BITS`.
    #[inline]
    fn count(&self) -> usize {
        Self::BITS
    }

    /// Returns whether the bit at `position` is set.
    fn test(&self, position: usize) -> bool;

    /// Sets the bit at `position` to 1.
    fn set(&mut self, position: usize);

    /// Sets the bit at `position` to 1 if `value` is true, and to 0 otherwise.
    #[inline]
    #[track_caller]
    fn set_value(&mut self, position: usize, value: bool) {
        if value {
            self.set(position);
        } else {
            self.reset(position);
        }
    }

    /// Resets the bit at `position` to 0.
    fn reset(&mut self, position: usize);

    /// Flips the bit at `position`.
    fn flip(&mut self, position: usize);

    /// Returns whether all bits are set.
    fn all(&self) -> bool;

    /// Returns whether at least one bit is set.
    fn any(&self) -> bool;

    /// Returns whether no bit is set.
    #[inline]
    fn none(&self) -> bool {
        !self.any()
    }

    /// Returns the bitset as a `u32`.
    ///
    /// #   Panics
    ///
    /// In Debug, if any bit above position 31 is set. In Release, such bits are discarded.
    fn to_u32(&self) -> u32;

    /// Returns the bitset as a `u64`.
    ///
    /// #   Panics
    ///
    /// In Debug, if any bit above position 63 is set. In Release, such bits are discarded.
    fn to_u64(&self) -> u64;

    /// Returns the bitset as a `u32`, if no bit above position 31 is set.
    fn checked_to_u32(&self) -> Option<u32>;

    /// Returns the bitset as a `u64`, if no bit above position 63 is set.
    fn checked_to_u64(&self) -> Option<u64>;

    /// Writes one byte per bit, 0 or 1, position 0 first.
    ///
    /// #   Panics
    ///
    /// In Debug, if `bytes` is not exactly `Self::BITS` long. In Release, only the common prefix is written.
    fn write_bytes(&self, bytes: &mut [u8]);

    /// Returns the `index`-th chunk of 64 bits, or `ALL_ZEROS` past the end of the bitset.
    fn chunk(&self, index: usize) -> BitChunkRaw;

    /// Creates a bitset from its chunks of 64 bits.
    ///
    /// `chunks` is invoked with the index of each chunk needed, in increasing order. Bits past the end of the bitset
    /// are discarded.
    fn from_chunks<F>(chunks: F) -> Self
    where
        F: FnMut(usize) -> BitChunkRaw;

    /// Converts to a narrower (or equal) width, keeping the low-order bits.
    ///
    /// #   Panics
    ///
    /// In Debug, if `T` is wider than `Self`.
    #[inline]
    #[track_caller]
    fn truncate<T>(&self) -> T
    where
        T: Bitset,
    {
        debug_assert!(T::BITS <= Self::BITS, "Cannot truncate {} bits to {} bits", Self::BITS, T::BITS);

        algorithm::resize(self)
    }

    /// Converts to a wider (or equal) width, zero-filling the high-order bits.
    ///
    /// #   Panics
    ///
    /// In Debug, if `T` is narrower than `Self`.
    #[inline]
    #[track_caller]
    fn zero_extend<T>(&self) -> T
    where
        T: Bitset,
    {
        debug_assert!(T::BITS >= Self::BITS, "Cannot zero-extend {} bits to {} bits", Self::BITS, T::BITS);

        algorithm::resize(self)
    }
}
