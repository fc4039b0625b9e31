//! Utilities for implementers of fixed-width bitsets.

mod chunk;
mod chunk_iter;
mod error;
mod word;

#[cfg(feature = "serde")]
mod serde_support;

pub use chunk::BitChunkRaw;
pub use chunk_iter::{BitOnesIter, BitOnesIterRev};
pub use error::ParseBitsetError;
pub use word::{IndexInWord, IndexOfWord, Word};

#[cfg(feature = "serde")]
pub use serde_support::BinaryStringVisitor;
