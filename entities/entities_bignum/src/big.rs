//! Big Number Source Type
//!
//! Provides the arbitrary precision integer handed to the binary string
//! encoders, together with its sign-magnitude byte form.
//!
//! This module uses the `malachite` crate for the integer itself. Encoders
//! never look at the `Integer` directly: they only see a [`Sign`] and a
//! little-endian magnitude buffer, which is what [`BigNumber::sign`] and
//! [`BigNumber::to_magnitude_bytes`] hand out.

use std::fmt;
use std::str::FromStr;

use malachite::base::num::arithmetic::traits::UnsignedAbs;
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::{Integer, Natural};

use crate::errors::BigNumberError;

/// Bits per magnitude digit (one byte).
const BYTE_BITS: u64 = 8;

/// Sign of an integer, kept apart from its magnitude
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Strictly less than zero
    Negative,
    /// Exactly zero
    Zero,
    /// Strictly greater than zero
    Positive,
}

impl Sign {
    /// Check if this is the zero sign
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }

    /// Check if this is the negative sign
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sign::Negative => "negative",
            Sign::Zero => "zero",
            Sign::Positive => "positive",
        };
        f.write_str(name)
    }
}

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i128
    pub fn from_i128(value: i128) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }

    /// Rebuild a big number from a sign and a little-endian magnitude.
    ///
    /// High zero bytes in `magnitude` are accepted. The sign must agree with
    /// the magnitude: `Zero` needs an all-zero (or empty) buffer, the other
    /// two signs need at least one set bit.
    pub fn from_sign_and_magnitude(sign: Sign, magnitude: &[u8]) -> Result<Self, BigNumberError> {
        let natural = natural_from_le_bytes(magnitude)?;
        let magnitude_is_zero = natural == 0u32;
        if sign.is_zero() != magnitude_is_zero {
            return Err(BigNumberError::SignMagnitudeMismatch { sign });
        }

        let value = Integer::from(natural);
        let value = if sign.is_negative() { -value } else { value };
        Ok(Self { value })
    }

    /// Unsigned big number from a little-endian byte buffer.
    ///
    /// An empty or all-zero buffer gives zero.
    pub fn from_unsigned_bytes(magnitude: &[u8]) -> Result<Self, BigNumberError> {
        let natural = natural_from_le_bytes(magnitude)?;
        Ok(Self {
            value: Integer::from(natural),
        })
    }

    /// Get the sign of the number
    pub fn sign(&self) -> Sign {
        if self.value == 0 {
            Sign::Zero
        } else if self.value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Number of significant bits in the magnitude (0 for zero)
    pub fn bit_length(&self) -> u64 {
        self.magnitude().significant_bits()
    }

    /// Absolute value as little-endian bytes.
    ///
    /// The buffer is minimal: empty for zero, otherwise the last byte is
    /// non-zero.
    pub fn to_magnitude_bytes(&self) -> Vec<u8> {
        PowerOf2Digits::<u8>::to_power_of_2_digits_asc(&self.magnitude(), BYTE_BITS)
    }

    /// Absolute value as little-endian bytes with a sign-safe top byte.
    ///
    /// Appends one `0x00` byte whenever the top bit of the last byte is set,
    /// so the buffer would also read as a non-negative two's complement
    /// value. Zero yields `[0x00]`.
    pub fn to_padded_magnitude_bytes(&self) -> Vec<u8> {
        let mut bytes = self.to_magnitude_bytes();
        match bytes.last() {
            Some(&top) if top & 0x80 == 0 => {}
            _ => bytes.push(0),
        }
        bytes
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    fn magnitude(&self) -> Natural {
        (&self.value).unsigned_abs()
    }
}

fn natural_from_le_bytes(bytes: &[u8]) -> Result<Natural, BigNumberError> {
    <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_asc(BYTE_BITS, bytes.iter().copied())
        .ok_or(BigNumberError::InvalidMagnitude)
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i128> for BigNumber {
    fn from(value: i128) -> Self {
        Self::from_i128(value)
    }
}

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl FromStr for BigNumber {
    type Err = BigNumberError;

    /// Parse a decimal integer with an optional leading `-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Integer::from_str(trimmed)
            .map(Self::from_integer)
            .map_err(|()| BigNumberError::InvalidDecimal(trimmed.to_owned()))
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::Binary for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign() {
        assert_eq!(BigNumber::from_i64(-7).sign(), Sign::Negative);
        assert_eq!(BigNumber::from_i64(0).sign(), Sign::Zero);
        assert_eq!(BigNumber::from_i64(7).sign(), Sign::Positive);
        assert!(BigNumber::from_i64(0).is_zero());
    }

    #[test]
    fn test_magnitude_bytes_little_endian() {
        let big = BigNumber::from_u64(0x0102_0304);
        assert_eq!(big.to_magnitude_bytes(), vec![0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_magnitude_bytes_ignore_sign() {
        let positive = BigNumber::from_i64(100);
        let negative = BigNumber::from_i64(-100);
        assert_eq!(positive.to_magnitude_bytes(), negative.to_magnitude_bytes());
        assert_eq!(negative.to_magnitude_bytes(), vec![100]);
    }

    #[test]
    fn test_magnitude_bytes_zero_is_empty() {
        assert!(BigNumber::from_i64(0).to_magnitude_bytes().is_empty());
    }

    #[test]
    fn test_magnitude_bytes_i64_min() {
        let big = BigNumber::from_i64(i64::MIN);
        assert_eq!(
            big.to_magnitude_bytes(),
            vec![0, 0, 0, 0, 0, 0, 0, 0x80]
        );
    }

    #[test]
    fn test_padded_magnitude_bytes() {
        assert_eq!(BigNumber::from_i64(255).to_padded_magnitude_bytes(), vec![0xff, 0x00]);
        assert_eq!(BigNumber::from_i64(127).to_padded_magnitude_bytes(), vec![0x7f]);
        assert_eq!(BigNumber::from_i64(0).to_padded_magnitude_bytes(), vec![0x00]);
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(BigNumber::from_i64(0).bit_length(), 0);
        assert_eq!(BigNumber::from_i64(1).bit_length(), 1);
        assert_eq!(BigNumber::from_i64(-256).bit_length(), 9);
        assert_eq!(BigNumber::from_i64(i64::MAX).bit_length(), 63);
    }

    #[test]
    fn test_from_sign_and_magnitude() {
        let big = BigNumber::from_sign_and_magnitude(Sign::Negative, &[100, 0]).unwrap();
        assert_eq!(big, BigNumber::from_i64(-100));

        let zero = BigNumber::from_sign_and_magnitude(Sign::Zero, &[0, 0]).unwrap();
        assert!(zero.is_zero());

        let empty = BigNumber::from_sign_and_magnitude(Sign::Zero, &[]).unwrap();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_from_sign_and_magnitude_mismatch() {
        assert_eq!(
            BigNumber::from_sign_and_magnitude(Sign::Positive, &[0, 0]),
            Err(BigNumberError::SignMagnitudeMismatch { sign: Sign::Positive })
        );
        assert_eq!(
            BigNumber::from_sign_and_magnitude(Sign::Zero, &[1]),
            Err(BigNumberError::SignMagnitudeMismatch { sign: Sign::Zero })
        );
    }

    #[test]
    fn test_from_str() {
        let big: BigNumber = "-10000000000000000".parse().unwrap();
        assert_eq!(big, BigNumber::from_i64(-10_000_000_000_000_000));
        assert!("12a".parse::<BigNumber>().is_err());
    }

    #[test]
    fn test_binary_format() {
        assert_eq!(format!("{:b}", BigNumber::from_i64(-100)), "-1100100");
        assert_eq!(format!("{:b}", BigNumber::from_i64(0)), "0");
    }
}
