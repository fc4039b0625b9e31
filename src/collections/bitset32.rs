//! A 32-bits bitset.

use super::bitset_fixed::bitset_fixed;

bitset_fixed!(
    /// A fixed-size sequence of 32 bits, stored in a single `u32`.
    Bitset32,
    u32,
    1,
    32
);

impl Bitset32 {
    /// Creates a bitset from its word.
    pub const fn new(word: u32) -> Self {
        Self::from_array([word])
    }
}

impl From<u32> for Bitset32 {
    fn from(word: u32) -> Self {
        Self::new(word)
    }
}

impl From<Bitset32> for u32 {
    fn from(bitset: Bitset32) -> Self {
        bitset.words()[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logic() {
        let mut a = Bitset32::default();
        let mut b = Bitset32::default();

        a.set(0);
        b.set(1);

        assert_eq!(1, a.to_u64());
        assert_eq!(2, b.to_u32());
        assert_eq!(3, (a | b).to_u64());
        assert_eq!(3, (a ^ b).to_u64());
        assert_eq!(0, (a & b).to_u64());

        let mut c = !a;

        assert!(!c[0]);
        assert!(c.any());

        c |= a;

        assert!(c.all());
        assert!(c[31]);
        assert_eq!(c, c);
        assert_ne!(c, a);

        c = !c;

        assert!(c.none());
    }

    #[test]
    fn highest_bit() {
        let mut bitset = Bitset32::ALL_ZEROS;

        bitset.set(31);
        bitset.flip(0);

        assert_eq!(0x8000_0001, u32::from(bitset));
        assert_eq!("10000000000000000000000000000001", bitset.to_string());
        assert_eq!(Bitset32::from_digits("10000000000000000000000000000001"), bitset);

        bitset.reset(31);

        assert_eq!(1, bitset.to_u32());
    }

    #[test]
    fn byte_array() {
        let bytes = Bitset32::new(0x8000_0001).to_byte_array();

        assert_eq!(1, bytes[0]);
        assert_eq!(1, bytes[31]);
        assert_eq!(2, bytes.iter().filter(|&&byte| byte == 1).count());

        assert_eq!(Bitset32::new(0x8000_0001), Bitset32::from_bytes(&bytes));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn set_out_of_bounds() {
        Bitset32::default().set(32);
    }
} // mod tests
