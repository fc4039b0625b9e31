//! A 8-bits bitset.

use super::bitset_fixed::bitset_fixed;

bitset_fixed!(
    /// A fixed-size sequence of 8 bits, stored in a single `u8`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_fixed::collections::Bitset8;
    /// let mut bitset = Bitset8::new(0b0000_0001);
    ///
    /// bitset.set(7);
    ///
    /// assert!(bitset[0]);
    /// assert!(bitset[7]);
    /// assert_eq!("10000001", bitset.to_string());
    /// assert_eq!(0x81, bitset.to_u32());
    /// ```
    Bitset8,
    u8,
    1,
    8
);

impl Bitset8 {
    /// Creates a bitset from its word.
    pub const fn new(word: u8) -> Self {
        Self::from_array([word])
    }
}

impl From<u8> for Bitset8 {
    fn from(word: u8) -> Self {
        Self::new(word)
    }
}

impl From<Bitset8> for u8 {
    fn from(bitset: Bitset8) -> Self {
        bitset.words()[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logic() {
        let mut a = Bitset8::default();
        let mut b = Bitset8::default();

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
        assert!(c[7]);
        assert_eq!(c, c);
        assert_ne!(c, a);

        c = !c;

        assert!(c.none());
    }

    #[test]
    fn constants() {
        assert_eq!(8, Bitset8::BITS);
        assert_eq!(8, Bitset8::ALL_ZEROS.count());
        assert!(Bitset8::ALL_ZEROS.none());
        assert!(Bitset8::ALL_ONES.all());
    }

    #[test]
    fn set_value() {
        let mut bitset = Bitset8::ALL_ZEROS;

        bitset.set_value(3, true);
        assert_eq!(0b1000, u8::from(bitset));

        bitset.set_value(3, false);
        assert_eq!(Bitset8::ALL_ZEROS, bitset);
    }

    #[test]
    fn from_bools() {
        let bitset = Bitset8::from_bools(&[true, false, true, false, false, false, false, true]);

        assert_eq!(0b1000_0101, u8::from(bitset));
    }

    #[test]
    fn from_bytes() {
        let bitset = Bitset8::from_bytes(&[1, 0, 7, 0, 0, 0, 0, 255]);

        assert_eq!(0b1000_0101, u8::from(bitset));
        assert_eq!([1, 0, 1, 0, 0, 0, 0, 1], bitset.to_byte_array());
    }

    #[test]
    fn digits() {
        let bitset = Bitset8::from_digits("10000101");

        assert_eq!(0b1000_0101, u8::from(bitset));
        assert_eq!("10000101", bitset.to_string());
        assert_eq!("Bitset8(10000101)", format!("{bitset:?}"));
        assert_eq!(Ok(bitset), "10000101".parse::<Bitset8>());
    }

    #[test]
    fn digits_most_significant_first() {
        let bitset = Bitset8::from_digits("10000000");

        assert!(bitset.test(7));
        assert!(!bitset.test(0));
        assert_eq!(Bitset8::new(0x80), bitset);
    }

    #[test]
    fn display_pads() {
        assert_eq!("00000010", Bitset8::new(2).to_string());
        assert_eq!("00000000", Bitset8::ALL_ZEROS.to_string());
    }

    #[test]
    fn to_u32_never_fails() {
        assert_eq!(Some(0xFF), Bitset8::ALL_ONES.checked_to_u32());
        assert_eq!(Some(0xFF), Bitset8::ALL_ONES.checked_to_u64());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn test_out_of_bounds() {
        Bitset8::default().test(8);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn from_bools_length_mismatch() {
        Bitset8::from_bools(&[true; 9]);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn from_digits_length_mismatch() {
        Bitset8::from_digits("101");
    }
} // mod tests
