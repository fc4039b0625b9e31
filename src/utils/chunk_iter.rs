//  See structs.

use core::iter::FusedIterator;

use super::{BitChunkRaw, IndexInWord, IndexOfWord};
use crate::api::Bitset;

/// Forward iterator over the positions of the set bits of a bitset, in increasing order.
#[derive(Clone, Debug)]
pub struct BitOnesIter<B> {
    next: usize,
    bitset: B,
}

impl<B> BitOnesIter<B>
where
    B: Bitset,
{
    /// Creates a new iterator.
    pub const fn new(bitset: B) -> Self {
        Self { next: 0, bitset }
    }
}

impl<B> Iterator for BitOnesIter<B>
where
    B: Bitset,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < B::BITS {
            let (of_chunk, in_chunk) = BitChunkRaw::split(self.next);

            let chunk = self.bitset.chunk(of_chunk.0);

            match chunk.next_after(in_chunk) {
                Some(in_chunk) => {
                    let position = BitChunkRaw::fuse(of_chunk, in_chunk);

                    self.next = position + 1;

                    return Some(position);
                }
                None => self.next = BitChunkRaw::fuse(IndexOfWord(of_chunk.0 + 1), IndexInWord(0)),
            }
        }

        None
    }
}

impl<B> FusedIterator for BitOnesIter<B> where B: Bitset {}

/// Backward iterator over the positions of the set bits of a bitset, in decreasing order.
#[derive(Clone, Debug)]
pub struct BitOnesIterRev<B> {
    //  One past the next position to inspect.
    end: usize,
    bitset: B,
}

impl<B> BitOnesIterRev<B>
where
    B: Bitset,
{
    /// Creates a new iterator.
    pub const fn new(bitset: B) -> Self {
        Self { end: B::BITS, bitset }
    }
}

impl<B> Iterator for BitOnesIterRev<B>
where
    B: Bitset,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(last) = self.end.checked_sub(1) {
            let (of_chunk, in_chunk) = BitChunkRaw::split(last);

            let chunk = self.bitset.chunk(of_chunk.0);

            match chunk.next_before(in_chunk) {
                Some(in_chunk) => {
                    let position = BitChunkRaw::fuse(of_chunk, in_chunk);

                    self.end = position;

                    return Some(position);
                }
                None => self.end = BitChunkRaw::fuse(of_chunk, IndexInWord(0)),
            }
        }

        None
    }
}

impl<B> FusedIterator for BitOnesIterRev<B> where B: Bitset {}

// mod tests
