//! Binary String Encoder
//!
//! Direct bit extraction from a little-endian magnitude buffer. The output
//! length is known before the first digit is written, so every encoding is a
//! single exact-size allocation with no growth while digits are emitted.
//!
//! ## Layout
//!
//! For a magnitude `[b0, b1, .., bk, 0, 0]` whose top non-zero byte is `bk`:
//!
//! ```text
//! [prefix] bits(bk, msb..=0) bits(b(k-1), 7..=0) .. bits(b0, 7..=0)
//! ```
//!
//! High zero bytes (such as the padding byte of a sign-safe buffer) and the
//! leading zero bits of `bk` are skipped.

use entities_bignum::{BigNumber, Sign};

use crate::common::{locate_top_byte, significant_bits, EncodeError, EncodeOptions, ZERO};

/// Encode with the default options (no prefix characters)
///
/// # Examples
///
/// ```
/// use entities_bignum::Sign;
/// use infrastructure_binary_encoding::encode;
///
/// assert_eq!(encode(&[0x00, 0x01], Sign::Positive).unwrap(), "100000000");
/// assert_eq!(encode(&[], Sign::Zero).unwrap(), "0");
/// ```
pub fn encode(magnitude: &[u8], sign: Sign) -> Result<String, EncodeError> {
    BinaryStringEncoder::default().encode(magnitude, sign)
}

/// Big integer to base-2 string encoder
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinaryStringEncoder {
    options: EncodeOptions,
}

impl BinaryStringEncoder {
    /// Create an encoder with the given prefix options
    pub const fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Options this encoder was built with
    pub fn options(&self) -> EncodeOptions {
        self.options
    }

    /// Exact length of [`encode`](Self::encode)'s output for this input
    pub fn encoded_len(&self, magnitude: &[u8], sign: Sign) -> Result<usize, EncodeError> {
        Ok(match locate_top_byte(magnitude, sign)? {
            None => ZERO.len(),
            Some(top) => self.len_for(magnitude[top], top, sign),
        })
    }

    /// Encode a little-endian magnitude and its sign as binary digits
    ///
    /// # Arguments
    ///
    /// * `magnitude` - Absolute value, least significant byte first
    /// * `sign` - Sign of the value; must agree with `magnitude`
    ///
    /// # Returns
    ///
    /// * `Ok(digits)` - Binary digits, optionally prefixed
    /// * `Err(EncodeError::SignMagnitudeMismatch)` - Sign and buffer disagree
    pub fn encode(&self, magnitude: &[u8], sign: Sign) -> Result<String, EncodeError> {
        let top = locate_top_byte(magnitude, sign)?;
        Ok(self.encode_located(magnitude, sign, top))
    }

    /// Append the encoding to an existing buffer
    ///
    /// Reserves exactly the encoded length up front and returns the number
    /// of bytes appended.
    pub fn encode_into(
        &self,
        magnitude: &[u8],
        sign: Sign,
        out: &mut String,
    ) -> Result<usize, EncodeError> {
        let top = locate_top_byte(magnitude, sign)?;
        Ok(self.write_located(magnitude, sign, top, out))
    }

    /// Encode a [`BigNumber`]
    ///
    /// Never fails: the sign and magnitude of a `BigNumber` always agree.
    pub fn encode_big(&self, value: &BigNumber) -> String {
        let magnitude = value.to_magnitude_bytes();
        // Minimal buffer: empty for zero, last byte non-zero otherwise
        let top = magnitude.len().checked_sub(1);
        self.encode_located(&magnitude, value.sign(), top)
    }

    fn encode_located(&self, magnitude: &[u8], sign: Sign, top: Option<usize>) -> String {
        let mut out = String::new();
        self.write_located(magnitude, sign, top, &mut out);
        out
    }

    fn write_located(
        &self,
        magnitude: &[u8],
        sign: Sign,
        top: Option<usize>,
        out: &mut String,
    ) -> usize {
        let Some(top) = top else {
            out.push_str(ZERO);
            return ZERO.len();
        };

        let top_byte = magnitude[top];
        let len = self.len_for(top_byte, top, sign);
        out.reserve_exact(len);

        if let Some(prefix) = self.options.prefix(sign) {
            out.push(prefix);
        }

        // Top byte without its leading zero bits
        let msb = u8::BITS - 1 - top_byte.leading_zeros();
        push_bits(out, top_byte, msb);

        for &byte in magnitude[..top].iter().rev() {
            push_bits(out, byte, u8::BITS - 1);
        }

        len
    }

    fn len_for(&self, top_byte: u8, top: usize, sign: Sign) -> usize {
        let prefix = usize::from(self.options.prefix(sign).is_some());
        prefix + significant_bits(top_byte, top)
    }
}

#[inline]
fn push_bits(out: &mut String, byte: u8, msb: u32) {
    for bit in (0..=msb).rev() {
        out.push(char::from(b'0' + ((byte >> bit) & 1)));
    }
}
