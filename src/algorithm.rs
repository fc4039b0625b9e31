//! Width-agnostic algorithms, written once against the `Bitset` trait.

use crate::{
    api::Bitset,
    utils::{BitChunkRaw, BitOnesIter, BitOnesIterRev},
};

/// Converts a bitset to another width.
///
/// The low-order bits are kept: narrowing discards the high-order bits of `source`, widening zero-fills the
/// high-order bits of the result.
///
/// #   Examples
///
/// ```
/// #   use bit_fixed::{algorithm, collections::{Bitset8, Bitset128}};
/// let wide: Bitset128 = algorithm::resize(&Bitset8::new(0xA5));
/// assert_eq!(Bitset128::new(0xA5, 0), wide);
///
/// let narrow: Bitset8 = algorithm::resize(&Bitset128::new(0x1234, 1));
/// assert_eq!(Bitset8::new(0x34), narrow);
/// ```
#[inline]
pub fn resize<S, T>(source: &S) -> T
where
    S: Bitset,
    T: Bitset,
{
    T::from_chunks(|index| source.chunk(index))
}

/// Returns the number of bits set.
///
/// #   Examples
///
/// ```
/// #   use bit_fixed::{algorithm, collections::Bitset256};
/// assert_eq!(0, algorithm::count_ones(&Bitset256::ALL_ZEROS));
/// assert_eq!(256, algorithm::count_ones(&Bitset256::ALL_ONES));
/// ```
pub fn count_ones<B>(bitset: &B) -> usize
where
    B: Bitset,
{
    (0..BitChunkRaw::chunks_for(B::BITS)).map(|index| bitset.chunk(index).count()).sum()
}

/// Returns the position of the lowest set bit, if any.
pub fn first_one<B>(bitset: &B) -> Option<usize>
where
    B: Bitset,
{
    ones(*bitset).next()
}

/// Returns the position of the highest set bit, if any.
pub fn last_one<B>(bitset: &B) -> Option<usize>
where
    B: Bitset,
{
    ones_rev(*bitset).next()
}

/// Returns an iterator over the positions of the set bits, in increasing order.
///
/// #   Examples
///
/// ```
/// #   use bit_fixed::{algorithm, collections::Bitset128};
/// let bitset = Bitset128::new(0b101, 1);
///
/// assert_eq!(vec![0, 2, 64], algorithm::ones(bitset).collect::<Vec<_>>());
/// assert_eq!(vec![64, 2, 0], algorithm::ones_rev(bitset).collect::<Vec<_>>());
/// ```
pub fn ones<B>(bitset: B) -> BitOnesIter<B>
where
    B: Bitset,
{
    BitOnesIter::new(bitset)
}

/// Returns an iterator over the positions of the set bits, in decreasing order.
pub fn ones_rev<B>(bitset: B) -> BitOnesIterRev<B>
where
    B: Bitset,
{
    BitOnesIterRev::new(bitset)
}

/// Returns an iterator over all bits, position 0 first.
pub fn bits<B>(bitset: &B) -> impl Iterator<Item = bool> + '_
where
    B: Bitset,
{
    (0..B::BITS).map(move |position| bitset.test(position))
}

// mod tests

// mod properties
