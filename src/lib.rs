//! Fixed-width bit vectors
//!
//! #   Organization
//!
//! This crate is composed of multiple top modules:
//!
//! -   The `api` top module contains a selection of vocabulary types and traits.
//! -   The `algorithm` module contains a selection of algorithms built atop this API.
//! -   The `collections` module contains the bitsets themselves, from `Bitset8` to `Bitset256`.
//! -   The `utils` module contains a selection of low-level types upon which the implementations, and algorithms, are
//!     built.
//!
//!
//! #   Widths
//!
//! Six widths are provided: 8, 16, 32, 64, 128, and 256 bits. The width of a bitset is part of its type, and never
//! changes.
//!
//! #### Why not a generic width?
//!
//! A bitset of `N` bits would require `N / 64` words, and computing an array length from a generic parameter is not
//! (yet) possible on stable. Instead, `BitsetCore` is generic over its word type and word count, and each width is a
//! dedicated type atop it.
//!
//! #### Why not always `u64`?
//!
//! A `Bitset8` stored in a `u64` would be 8 times larger than necessary. The narrow widths are therefore stored in a
//! single word of exactly their width, while the wide widths are stored in arrays of `u64`.
//!
//!
//! #   Conversions
//!
//! All widths convert to one another by keeping the low-order bits: narrowing discards the high-order bits, widening
//! zero-fills them. Widening is available through `From`, while narrowing requires an explicit `truncate`.
//!
//! ```
//! use bit_fixed::collections::{Bitset8, Bitset256};
//!
//! let wide = Bitset256::from(Bitset8::new(0b1010_0101));
//! assert_eq!(4, wide.count_ones());
//!
//! let narrow: Bitset8 = Bitset256::new(0x1FF, 0, 0, 1).truncate();
//! assert_eq!(Bitset8::ALL_ONES, narrow);
//! ```
//!
//!
//! #   Programming errors
//!
//! Out of bounds positions, mismatched input lengths, invalid digits, and integer conversions of too large values are
//! programming errors: they are caught by debug assertions, and are not checked in Release.

#![cfg_attr(not(test), no_std)]
//  Lints
#![deny(missing_docs)]
//  This author prefers to keep its test modules close to what they are testing.
#![allow(clippy::items_after_test_module)]

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

pub mod algorithm;
pub mod api;
pub mod collections;
pub mod utils;
