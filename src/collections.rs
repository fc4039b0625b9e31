//! Implementations of fixed-width bitsets.

//  Design considerations
//
//  #   Why not an alias?
//
//  Type aliases are cool... but they have the unfortunate tendency to _leak_. They leak when the IDE or debugger
//  displays the type, and before you know it the user is submerged with inscrutable `BitsetCore<u64, 4>`, and
//  despairing.
//
//  #   Why inherent?
//
//  The methods are doubly implemented (as inherent methods, and Bitset methods) so they can be called without importing
//  the trait.

mod bitset_fixed;
mod conversions;

pub mod bitset_core;
pub mod bitset8;
pub mod bitset16;
pub mod bitset32;
pub mod bitset64;
pub mod bitset128;
pub mod bitset256;

pub use bitset_core::BitsetCore;
pub use bitset8::Bitset8;
pub use bitset16::Bitset16;
pub use bitset32::Bitset32;
pub use bitset64::Bitset64;
pub use bitset128::Bitset128;
pub use bitset256::Bitset256;
