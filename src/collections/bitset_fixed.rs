//  Definition of the fixed-width bitsets, atop `BitsetCore`.
//
//  #   Why a macro?
//
//  Each width is a dedicated type, rather than an alias of `BitsetCore`, and each dedicated type offers its operations
//  both as inherent methods and as `Bitset` methods. Spelling this out six times would be a maintenance hazard.

macro_rules! bitset_fixed {
    ($(#[$meta:meta])* $name:ident, $word:ty, $words:literal, $bits:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
        pub struct $name($crate::collections::BitsetCore<$word, $words>);

        //
        //  Creation
        //

        impl $name {
            /// Number of bits in the bitset.
            pub const BITS: usize = $bits;

            /// A bitset with all bits reset.
            pub const ALL_ZEROS: Self = Self($crate::collections::BitsetCore::from_array([<$word>::MIN; $words]));

            /// A bitset with all bits set.
            pub const ALL_ONES: Self = Self($crate::collections::BitsetCore::from_array([<$word>::MAX; $words]));

            /// Creates a bitset from its words, lowest first.
            pub const fn from_array(words: [$word; $words]) -> Self {
                Self($crate::collections::BitsetCore::from_array(words))
            }

            /// Creates a bitset from its lowest words, the remaining words being all zeros.
            ///
            /// #   Panics
            ///
            /// In Debug, if too many words are provided. In Release, the extra words are ignored.
            #[track_caller]
            pub fn from_words(words: &[$word]) -> Self {
                Self($crate::collections::BitsetCore::from_words(words))
            }

            /// Creates a bitset from exactly one boolean per bit, position 0 first.
            ///
            /// #   Panics
            ///
            /// In Debug, if `bits` is not exactly `Self::BITS` long. In Release, the missing bits are reset, and the
            /// extra bits are ignored.
            #[track_caller]
            pub fn from_bools(bits: &[bool]) -> Self {
                Self($crate::collections::BitsetCore::from_bools(bits))
            }

            /// Creates a bitset from exactly one byte per bit, position 0 first, any non-zero byte standing for a set
            /// bit.
            ///
            /// #   Panics
            ///
            /// In Debug, if `bytes` is not exactly `Self::BITS` long. In Release, the missing bits are reset, and the
            /// extra bits are ignored.
            #[track_caller]
            pub fn from_bytes(bytes: &[u8]) -> Self {
                Self($crate::collections::BitsetCore::from_bytes(bytes))
            }

            /// Creates a bitset from exactly one binary digit per bit, most significant first.
            ///
            /// The leftmost digit is the highest position, as in a binary literal, so that `from_digits` is the
            /// inverse of `Display`. It is _not_ a left to right reading into positions 0, 1, ...
            ///
            /// See `FromStr` for a fallible alternative.
            ///
            /// #   Panics
            ///
            /// In Debug, if `digits` is not exactly `Self::BITS` long, or contains anything but `0` and `1`.
            #[track_caller]
            pub fn from_digits(digits: &str) -> Self {
                Self($crate::collections::BitsetCore::from_digits(digits))
            }

            /// Returns the underlying words, lowest first.
            pub const fn words(&self) -> &[$word; $words] {
                self.0.words()
            }

            /// Returns one byte per bit, 0 or 1, position 0 first.
            pub fn to_byte_array(&self) -> [u8; $bits] {
                let mut bytes = [0; $bits];

                self.0.write_bytes(&mut bytes);

                bytes
            }

            /// Converts to another width, narrower or wider.
            ///
            /// Narrowing keeps the low-order bits; widening zero-fills the high-order bits.
            pub fn resize<T>(&self) -> T
            where
                T: $crate::api::Bitset,
            {
                $crate::algorithm::resize(self)
            }

            /// Converts to a narrower (or equal) width, keeping the low-order bits.
            ///
            /// #   Panics
            ///
            /// In Debug, if `T` is wider than `Self`.
            #[track_caller]
            pub fn truncate<T>(&self) -> T
            where
                T: $crate::api::Bitset,
            {
                <Self as $crate::api::Bitset>::truncate(self)
            }

            /// Converts to a wider (or equal) width, zero-filling the high-order bits.
            ///
            /// #   Panics
            ///
            /// In Debug, if `T` is narrower than `Self`.
            #[track_caller]
            pub fn zero_extend<T>(&self) -> T
            where
                T: $crate::api::Bitset,
            {
                <Self as $crate::api::Bitset>::zero_extend(self)
            }
        }

        //
        //  Bitset (inherent)
        //

        impl $name {
            /// Returns the number of bits in the bitset, that is `Self::BITS`.
            pub const fn count(&self) -> usize {
                Self::BITS
            }

            /// Returns whether the bit at `position` is set.
            ///
            /// #   Panics
            ///
            /// In Debug, if `position` is out of bounds. In Release, the position is masked.
            #[track_caller]
            pub fn test(&self, position: usize) -> bool {
                self.0.test(position)
            }

            /// Sets the bit at `position` to 1.
            ///
            /// #   Panics
            ///
            /// In Debug, if `position` is out of bounds. In Release, the position is masked.
            #[track_caller]
            pub fn set(&mut self, position: usize) {
                self.0.set(position);
            }

            /// Sets the bit at `position` to 1 if `value` is true, and to 0 otherwise.
            ///
            /// #   Panics
            ///
            /// In Debug, if `position` is out of bounds. In Release, the position is masked.
            #[track_caller]
            pub fn set_value(&mut self, position: usize, value: bool) {
                if value {
                    self.0.set(position);
                } else {
                    self.0.reset(position);
                }
            }

            /// Resets the bit at `position` to 0.
            ///
            /// #   Panics
            ///
            /// In Debug, if `position` is out of bounds. In Release, the position is masked.
            #[track_caller]
            pub fn reset(&mut self, position: usize) {
                self.0.reset(position);
            }

            /// Flips the bit at `position`.
            ///
            /// #   Panics
            ///
            /// In Debug, if `position` is out of bounds. In Release, the position is masked.
            #[track_caller]
            pub fn flip(&mut self, position: usize) {
                self.0.flip(position);
            }

            /// Returns whether all bits are set.
            pub fn all(&self) -> bool {
                self.0.all()
            }

            /// Returns whether at least one bit is set.
            pub fn any(&self) -> bool {
                self.0.any()
            }

            /// Returns whether no bit is set.
            pub fn none(&self) -> bool {
                self.0.none()
            }

            /// Returns the number of bits set.
            pub fn count_ones(&self) -> usize {
                self.0.count_ones()
            }

            /// Returns the bitset as a `u32`.
            ///
            /// #   Panics
            ///
            /// In Debug, if any bit above position 31 is set. In Release, such bits are discarded.
            #[track_caller]
            pub fn to_u32(&self) -> u32 {
                self.0.to_u32()
            }

            /// Returns the bitset as a `u64`.
            ///
            /// #   Panics
            ///
            /// In Debug, if any bit above position 63 is set. In Release, such bits are discarded.
            #[track_caller]
            pub fn to_u64(&self) -> u64 {
                self.0.to_u64()
            }

            /// Returns the bitset as a `u32`, if no bit above position 31 is set.
            pub fn checked_to_u32(&self) -> Option<u32> {
                self.0.checked_to_u32()
            }

            /// Returns the bitset as a `u64`, if no bit above position 63 is set.
            pub fn checked_to_u64(&self) -> Option<u64> {
                self.0.checked_to_u64()
            }

            /// Returns an iterator over the positions of the set bits, in increasing order.
            pub fn ones(&self) -> $crate::utils::BitOnesIter<Self> {
                $crate::utils::BitOnesIter::new(*self)
            }
        }

        //
        //  Bitset (trait)
        //

        impl $crate::api::Bitset for $name {
            const BITS: usize = $bits;

            #[track_caller]
            fn test(&self, position: usize) -> bool {
                self.0.test(position)
            }

            #[track_caller]
            fn set(&mut self, position: usize) {
                self.0.set(position);
            }

            #[track_caller]
            fn reset(&mut self, position: usize) {
                self.0.reset(position);
            }

            #[track_caller]
            fn flip(&mut self, position: usize) {
                self.0.flip(position);
            }

            fn all(&self) -> bool {
                self.0.all()
            }

            fn any(&self) -> bool {
                self.0.any()
            }

            #[track_caller]
            fn to_u32(&self) -> u32 {
                self.0.to_u32()
            }

            #[track_caller]
            fn to_u64(&self) -> u64 {
                self.0.to_u64()
            }

            fn checked_to_u32(&self) -> Option<u32> {
                self.0.checked_to_u32()
            }

            fn checked_to_u64(&self) -> Option<u64> {
                self.0.checked_to_u64()
            }

            #[track_caller]
            fn write_bytes(&self, bytes: &mut [u8]) {
                self.0.write_bytes(bytes);
            }

            fn chunk(&self, index: usize) -> $crate::utils::BitChunkRaw {
                self.0.chunk(index)
            }

            fn from_chunks<F>(chunks: F) -> Self
            where
                F: FnMut(usize) -> $crate::utils::BitChunkRaw,
            {
                Self($crate::collections::BitsetCore::from_chunks(chunks))
            }
        }

        //
        //  Bitwise traits.
        //

        impl ::core::ops::BitAndAssign for $name {
            #[inline]
            fn bitand_assign(&mut self, rhs: Self) {
                self.0 &= rhs.0;
            }
        }

        impl ::core::ops::BitAnd for $name {
            type Output = Self;

            #[inline]
            fn bitand(mut self, rhs: Self) -> Self::Output {
                self &= rhs;
                self
            }
        }

        impl ::core::ops::BitOrAssign for $name {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ::core::ops::BitOr for $name {
            type Output = Self;

            #[inline]
            fn bitor(mut self, rhs: Self) -> Self::Output {
                self |= rhs;
                self
            }
        }

        impl ::core::ops::BitXorAssign for $name {
            #[inline]
            fn bitxor_assign(&mut self, rhs: Self) {
                self.0 ^= rhs.0;
            }
        }

        impl ::core::ops::BitXor for $name {
            type Output = Self;

            #[inline]
            fn bitxor(mut self, rhs: Self) -> Self::Output {
                self ^= rhs;
                self
            }
        }

        impl ::core::ops::Not for $name {
            type Output = Self;

            #[inline]
            fn not(self) -> Self::Output {
                Self(!self.0)
            }
        }

        //
        //  Index
        //

        impl ::core::ops::Index<usize> for $name {
            type Output = bool;

            #[track_caller]
            fn index(&self, position: usize) -> &bool {
                if self.0.test(position) { &true } else { &false }
            }
        }

        //
        //  Common traits
        //

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> Result<(), ::core::fmt::Error> {
                f.write_str(concat!(stringify!($name), "("))?;
                self.0.write_digits(f)?;
                f.write_str(")")
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> Result<(), ::core::fmt::Error> {
                self.0.write_digits(f)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::utils::ParseBitsetError;

            fn from_str(digits: &str) -> Result<Self, Self::Err> {
                $crate::collections::BitsetCore::parse_digits(digits).map(Self)
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                deserializer.deserialize_str($crate::utils::BinaryStringVisitor::new())
            }
        }

        #[cfg(test)]
        impl ::quickcheck::Arbitrary for $name {
            fn arbitrary(g: &mut ::quickcheck::Gen) -> Self {
                <Self as $crate::api::Bitset>::from_chunks(|_| {
                    $crate::utils::BitChunkRaw(<u64 as ::quickcheck::Arbitrary>::arbitrary(g))
                })
            }
        }
    };
}

pub(crate) use bitset_fixed;
