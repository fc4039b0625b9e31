//  Errors.

use core::{error, fmt};

/// An error in parsing a bitset from its binary string representation.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ParseBitsetError {
    /// The string does not contain exactly one digit per bit.
    InvalidLength {
        /// Number of bits of the bitset.
        expected: usize,
        /// Number of characters of the string.
        actual: usize,
    },
    /// The string contains a character other than `0` or `1`.
    InvalidDigit {
        /// Index of the offending character, counted in characters from the start of the string.
        index: usize,
        /// The offending character.
        digit: char,
    },
}

impl fmt::Display for ParseBitsetError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "expected {expected} binary digits, found {actual}")
            }
            Self::InvalidDigit { index, digit } => write!(f, "invalid binary digit {digit:?} at index {index}"),
        }
    }
}

impl error::Error for ParseBitsetError {}

// mod tests
