//! A 128-bits bitset.

use super::bitset_fixed::bitset_fixed;

bitset_fixed!(
    /// A fixed-size sequence of 128 bits, stored in two `u64`, composed of a low and a high half.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_fixed::collections::Bitset128;
    /// let mut bitset = Bitset128::default();
    ///
    /// bitset.set(127);
    ///
    /// assert_eq!(0x8000_0000_0000_0000, bitset.high());
    /// assert_eq!(0, bitset.low());
    /// ```
    Bitset128,
    u64,
    2,
    128
);

impl Bitset128 {
    /// Creates a bitset from its low and high halves.
    pub const fn new(low: u64, high: u64) -> Self {
        Self::from_array([low, high])
    }

    /// Returns the low half, that is bits 0 to 63.
    pub const fn low(&self) -> u64 {
        self.words()[0]
    }

    /// Returns the high half, that is bits 64 to 127.
    pub const fn high(&self) -> u64 {
        self.words()[1]
    }

    /// Sets the low half, that is bits 0 to 63.
    pub fn set_low(&mut self, low: u64) {
        self.0.words_mut()[0] = low;
    }

    /// Sets the high half, that is bits 64 to 127.
    pub fn set_high(&mut self, high: u64) {
        self.0.words_mut()[1] = high;
    }
}

impl From<u128> for Bitset128 {
    fn from(value: u128) -> Self {
        Self::new(value as u64, (value >> 64) as u64)
    }
}

impl From<Bitset128> for u128 {
    fn from(bitset: Bitset128) -> Self {
        u128::from(bitset.high()) << 64 | u128::from(bitset.low())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logic() {
        let mut a = Bitset128::default();
        let mut b = Bitset128::default();

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
        assert!(c[127]);
        assert_eq!(c, c);
        assert_ne!(c, a);

        c = !c;

        assert!(c.none());

        a.set(127);

        assert_eq!(0x8000_0000_0000_0000, a.words()[1]);
    }

    #[test]
    fn halves() {
        let mut d = Bitset128::default();

        d.set(1);
        d.reset(1);
        d.flip(0);

        assert_eq!(1, d.low());
        assert_eq!(0, d.high());

        d.set_high(0b10);
        d.set_low(0);

        assert!(d.test(65));
        assert_eq!(1, d.count_ones());
    }

    #[test]
    fn u128_round_trip() {
        const VALUE: u128 = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210;

        let bitset = Bitset128::from(VALUE);

        assert_eq!(0xFEDC_BA98_7654_3210, bitset.low());
        assert_eq!(0x0123_4567_89AB_CDEF, bitset.high());
        assert_eq!(VALUE, u128::from(bitset));
    }

    #[test]
    fn from_words_pads() {
        assert_eq!(Bitset128::new(42, 0), Bitset128::from_words(&[42]));
    }

    #[test]
    fn display_high_first() {
        let digits = Bitset128::new(1, 1 << 63).to_string();

        assert_eq!(128, digits.len());
        assert_eq!(Some('1'), digits.chars().next());
        assert_eq!(Some('1'), digits.chars().last());
        assert_eq!(2, digits.chars().filter(|&c| c == '1').count());
    }

    #[test]
    fn byte_array() {
        let bytes = Bitset128::new(1, 1 << 63).to_byte_array();

        assert_eq!(128, bytes.len());
        assert_eq!(1, bytes[0]);
        assert_eq!(1, bytes[127]);
        assert_eq!(2, bytes.iter().map(|&byte| usize::from(byte)).sum::<usize>());
    }

    #[test]
    fn to_u64_boundary() {
        assert_eq!(Some(u64::MAX), Bitset128::new(u64::MAX, 0).checked_to_u64());
        assert_eq!(None, Bitset128::new(0, 1).checked_to_u64());
        assert_eq!(None, Bitset128::new(1 << 32, 0).checked_to_u32());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn to_u64_overflow() {
        Bitset128::new(0, 1).to_u64();
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn to_u32_overflow() {
        Bitset128::new(0, 1).to_u32();
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn flip_out_of_bounds() {
        Bitset128::default().flip(128);
    }
} // mod tests
