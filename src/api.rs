//! A set of high-level traits to abstract over the implementation details.

pub mod bitset;

pub use bitset::Bitset;

pub use crate::utils::ParseBitsetError;
