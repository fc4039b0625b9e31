//! A 16-bits bitset.

use super::bitset_fixed::bitset_fixed;

bitset_fixed!(
    /// A fixed-size sequence of 16 bits, stored in a single `u16`.
    Bitset16,
    u16,
    1,
    16
);

impl Bitset16 {
    /// Creates a bitset from its word.
    pub const fn new(word: u16) -> Self {
        Self::from_array([word])
    }
}

impl From<u16> for Bitset16 {
    fn from(word: u16) -> Self {
        Self::new(word)
    }
}

impl From<Bitset16> for u16 {
    fn from(bitset: Bitset16) -> Self {
        bitset.words()[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logic() {
        let mut a = Bitset16::default();
        let mut b = Bitset16::default();

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
        assert!(c[15]);
        assert_eq!(c, c);
        assert_ne!(c, a);

        c = !c;

        assert!(c.none());
    }

    #[test]
    fn highest_bit() {
        let mut bitset = Bitset16::ALL_ZEROS;

        bitset.set(15);
        bitset.flip(0);

        assert_eq!(0x8001, u16::from(bitset));
        assert_eq!("1000000000000001", bitset.to_string());
        assert_eq!(Bitset16::from_digits("1000000000000001"), bitset);

        bitset.reset(15);

        assert_eq!(1, bitset.to_u32());
    }

    #[test]
    fn byte_array() {
        let bytes = Bitset16::new(0x8001).to_byte_array();

        assert_eq!(1, bytes[0]);
        assert_eq!(1, bytes[15]);
        assert_eq!(2, bytes.iter().filter(|&&byte| byte == 1).count());

        assert_eq!(Bitset16::new(0x8001), Bitset16::from_bytes(&bytes));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn set_out_of_bounds() {
        Bitset16::default().set(16);
    }
} // mod tests
