//! Comparison Baselines
//!
//! Slower encoders kept next to [`BinaryStringEncoder`](crate::BinaryStringEncoder)
//! for benchmarking and differential testing. They share its zero rule,
//! prefix options and sign/magnitude validation, so for the same input all
//! of them produce the same string.
//!
//! - [`per_byte_format`]: general-purpose formatting per byte, left padded
//! - [`repeated_division`]: `value % base` / `value / base` on a big integer,
//!   prepending each digit; works for any base in `2..=36`
//! - [`bit_array`]: explicit bit vector, reversed, then trimmed with a regex

use entities_bignum::{BigNumber, Sign};
use lazy_static::lazy_static;
use malachite::Integer;
use regex::Regex;

use crate::common::{locate_top_byte, EncodeError, EncodeOptions, ZERO};

/// Smallest base accepted by [`repeated_division`]
pub const MIN_BASE: u32 = 2;

/// Largest base accepted by [`repeated_division`] (digits `0-9a-z`)
pub const MAX_BASE: u32 = 36;

lazy_static! {
    static ref LEADING_ZEROS: Result<Regex, regex::Error> = Regex::new("^0+");
}

/// Format every byte on its own and concatenate
///
/// The top byte is formatted as-is; every other byte is left padded to
/// eight digits.
pub fn per_byte_format(
    magnitude: &[u8],
    sign: Sign,
    options: &EncodeOptions,
) -> Result<String, EncodeError> {
    let Some(top) = locate_top_byte(magnitude, sign)? else {
        return Ok(ZERO.to_string());
    };

    let mut out = String::with_capacity(magnitude.len() * 8 + 1);
    if let Some(prefix) = options.prefix(sign) {
        out.push(prefix);
    }

    out.push_str(&format!("{:b}", magnitude[top]));
    for byte in magnitude[..top].iter().rev() {
        out.push_str(&pad_left(format!("{:b}", byte), 8));
    }

    Ok(out)
}

fn pad_left(digits: String, width: usize) -> String {
    if digits.len() >= width {
        return digits;
    }
    let mut padded = "0".repeat(width - digits.len());
    padded.push_str(&digits);
    padded
}

/// Repeatedly divide by `base`, prepending each remainder digit
///
/// # Arguments
///
/// * `magnitude` - Absolute value, least significant byte first
/// * `sign` - Sign of the value; must agree with `magnitude`
/// * `base` - Output radix, `2..=36`
/// * `options` - Prefix options
///
/// # Returns
///
/// * `Ok(digits)` - Lowercase digits in the requested base
/// * `Err(EncodeError::InvalidBase)` - Base outside `2..=36`
pub fn repeated_division(
    magnitude: &[u8],
    sign: Sign,
    base: u32,
    options: &EncodeOptions,
) -> Result<String, EncodeError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(EncodeError::InvalidBase(base));
    }
    if locate_top_byte(magnitude, sign)?.is_none() {
        return Ok(ZERO.to_string());
    }

    let mut value = BigNumber::from_unsigned_bytes(magnitude)?.as_integer().clone();
    let radix = Integer::from(base);
    let mut out = String::new();

    while value > 0 {
        let remainder = &value % &radix;
        // Remainder is always < base, so it fits in u32
        let digit = u32::try_from(&remainder).unwrap_or(0);
        let digit = char::from_digit(digit, base).ok_or(EncodeError::InvalidBase(base))?;
        out.insert(0, digit);
        value /= &radix;
    }

    if let Some(prefix) = options.prefix(sign) {
        out.insert(0, prefix);
    }

    Ok(out)
}

/// Materialize every bit, reverse, render, then trim leading zeros
pub fn bit_array(
    magnitude: &[u8],
    sign: Sign,
    options: &EncodeOptions,
) -> Result<String, EncodeError> {
    if locate_top_byte(magnitude, sign)?.is_none() {
        return Ok(ZERO.to_string());
    }

    // Little-endian bit order: bit 0 of byte 0 first
    let mut bits = Vec::new();
    for &byte in magnitude {
        for bit in 0..u8::BITS {
            bits.push((byte >> bit) & 1 == 1);
        }
    }
    bits.reverse();

    let mut rendered = String::new();
    for bit in bits {
        rendered.push(if bit { '1' } else { '0' });
    }

    let pattern = LEADING_ZEROS
        .as_ref()
        .map_err(|err| EncodeError::Pattern(err.to_string()))?;
    let trimmed = pattern.replace(&rendered, "");

    let mut out = String::new();
    if let Some(prefix) = options.prefix(sign) {
        out.push(prefix);
    }
    out.push_str(&trimmed);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: EncodeOptions = EncodeOptions::new();

    #[test]
    fn test_per_byte_format() {
        assert_eq!(per_byte_format(&[5, 1], Sign::Positive, &DEFAULT).unwrap(), "100000101");
        assert_eq!(per_byte_format(&[0xff, 0], Sign::Positive, &DEFAULT).unwrap(), "11111111");
        assert_eq!(per_byte_format(&[0], Sign::Zero, &DEFAULT).unwrap(), "0");
    }

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_left("101".to_string(), 8), "00000101");
        assert_eq!(pad_left("11111111".to_string(), 8), "11111111");
    }

    #[test]
    fn test_repeated_division_base_2() {
        assert_eq!(repeated_division(&[100], Sign::Positive, 2, &DEFAULT).unwrap(), "1100100");
        assert_eq!(repeated_division(&[0, 1], Sign::Positive, 2, &DEFAULT).unwrap(), "100000000");
        assert_eq!(repeated_division(&[], Sign::Zero, 2, &DEFAULT).unwrap(), "0");
    }

    #[test]
    fn test_repeated_division_other_bases() {
        assert_eq!(repeated_division(&[0xff], Sign::Positive, 16, &DEFAULT).unwrap(), "ff");
        assert_eq!(repeated_division(&[100], Sign::Positive, 10, &DEFAULT).unwrap(), "100");
        assert_eq!(repeated_division(&[35], Sign::Positive, 36, &DEFAULT).unwrap(), "z");
        assert_eq!(repeated_division(&[8], Sign::Positive, 8, &DEFAULT).unwrap(), "10");
    }

    #[test]
    fn test_repeated_division_invalid_base() {
        assert_eq!(
            repeated_division(&[1], Sign::Positive, 1, &DEFAULT),
            Err(EncodeError::InvalidBase(1))
        );
        assert_eq!(
            repeated_division(&[1], Sign::Positive, 37, &DEFAULT),
            Err(EncodeError::InvalidBase(37))
        );
    }

    #[test]
    fn test_repeated_division_negative_with_marker() {
        let options = EncodeOptions::new().with_sign_marker(true);
        assert_eq!(repeated_division(&[100], Sign::Negative, 2, &options).unwrap(), "-1100100");
    }

    #[test]
    fn test_bit_array() {
        assert_eq!(bit_array(&[100], Sign::Positive, &DEFAULT).unwrap(), "1100100");
        assert_eq!(bit_array(&[0xff, 0x00], Sign::Positive, &DEFAULT).unwrap(), "11111111");
        assert_eq!(bit_array(&[0, 0], Sign::Zero, &DEFAULT).unwrap(), "0");
    }

    #[test]
    fn test_bit_array_leading_zero_option() {
        let options = EncodeOptions::new().with_leading_zero(true);
        assert_eq!(bit_array(&[1, 1], Sign::Positive, &options).unwrap(), "0100000001");
    }

    #[test]
    fn test_baselines_reject_mismatch() {
        let expected = Err(EncodeError::SignMagnitudeMismatch { sign: Sign::Negative });
        assert_eq!(per_byte_format(&[0], Sign::Negative, &DEFAULT), expected);
        assert_eq!(repeated_division(&[0], Sign::Negative, 2, &DEFAULT), expected);
        assert_eq!(bit_array(&[0], Sign::Negative, &DEFAULT), expected);
    }
}
