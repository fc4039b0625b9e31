//  Widening conversions between bitsets.
//
//  #   Why only widening?
//
//  `From` is meant for lossless conversions. Narrowing conversions discard the high-order bits, and are only available
//  through the explicit `truncate` (or `resize`) method.

use super::{Bitset8, Bitset16, Bitset32, Bitset64, Bitset128, Bitset256};

macro_rules! implement_widening {
    ($narrow:ty => $($wide:ty),+) => {
        $(
            impl From<$narrow> for $wide {
                #[inline]
                fn from(narrow: $narrow) -> Self {
                    narrow.zero_extend()
                }
            }
        )+
    };
}

implement_widening!(Bitset8 => Bitset16, Bitset32, Bitset64, Bitset128, Bitset256);
implement_widening!(Bitset16 => Bitset32, Bitset64, Bitset128, Bitset256);
implement_widening!(Bitset32 => Bitset64, Bitset128, Bitset256);
implement_widening!(Bitset64 => Bitset128, Bitset256);
implement_widening!(Bitset128 => Bitset256);

// mod tests
