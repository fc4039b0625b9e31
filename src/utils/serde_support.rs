//  Serialization, as binary strings.
//
//  #   Why binary strings?
//
//  A bitset is rendered, and parsed, as a string of exactly one binary digit per bit, most significant first. It is the
//  one textual representation of a bitset, and it is unambiguous regardless of the width.

use core::{fmt, marker::PhantomData};

use ::serde::de::{Error, Visitor};

use crate::api::Bitset;

/// A visitor deserializing a bitset from its binary string representation.
pub struct BinaryStringVisitor<B>(PhantomData<fn() -> B>);

impl<B> BinaryStringVisitor<B> {
    /// Creates a new visitor.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<B> Default for BinaryStringVisitor<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Visitor<'_> for BinaryStringVisitor<B>
where
    B: Bitset,
{
    type Value = B;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "a string of {} binary digits", B::BITS)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        value.parse().map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::{Bitset8, Bitset128, Bitset256};

    #[test]
    fn serialize_narrow() {
        let bitset = Bitset8::new(0b1000_0101);

        assert_eq!("\"10000101\"", serde_json::to_string(&bitset).expect("serializable"));
    }

    #[test]
    fn round_trip_wide() {
        let bitset = Bitset256::new(1, 0, 1 << 63, 42);

        let json = serde_json::to_string(&bitset).expect("serializable");
        let back: Bitset256 = serde_json::from_str(&json).expect("deserializable");

        assert_eq!(bitset, back);
    }

    #[test]
    fn deserialize_invalid_length() {
        let error = serde_json::from_str::<Bitset128>("\"0101\"").expect_err("too short");

        assert!(error.to_string().contains("expected 128 binary digits, found 4"), "{error}");
    }

    #[test]
    fn deserialize_not_a_string() {
        serde_json::from_str::<Bitset8>("5").expect_err("not a string");
    }
} // mod tests
