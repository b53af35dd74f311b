//! Common Encoding Utilities
//!
//! Shared pieces used by the fast encoder and by every comparison baseline:
//! - [`EncodeOptions`]: which prefix characters an encoding may carry
//! - [`EncodeError`]: the failures an encoder can report
//! - Sign/magnitude validation and location of the most significant byte
//!
//! ## Prefix Rules
//!
//! - Zero is always `"0"`, whatever the options say.
//! - `sign_marker` puts a `'-'` in front of negative values.
//! - `leading_zero` puts a `'0'` in front of positive values, so the first
//!   digit reads like a clear sign bit.

use entities_bignum::{BigNumberError, Sign};
use thiserror::Error as ThisError;

/// Character emitted in front of negative values when enabled.
pub const SIGN_MARKER: char = '-';

/// Digits emitted for a single zero value.
pub const ZERO: &str = "0";

/// Encoding errors
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum EncodeError {
    /// The declared sign disagrees with the magnitude buffer.
    #[error("Sign {sign} does not match the magnitude buffer")]
    SignMagnitudeMismatch {
        /// Sign supplied by the caller
        sign: Sign,
    },

    /// The requested radix is outside `2..=36`.
    #[error("Unsupported base: {0}")]
    InvalidBase(u32),

    /// The magnitude could not be rebuilt as a big number.
    #[error(transparent)]
    BigNumber(#[from] BigNumberError),

    /// The leading-zero trimming pattern failed to compile.
    #[error("Invalid trim pattern: {0}")]
    Pattern(String),
}

/// Output options shared by all encoders
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EncodeOptions {
    /// Emit `'-'` before negative values
    pub sign_marker: bool,
    /// Emit `'0'` before positive values
    pub leading_zero: bool,
}

impl EncodeOptions {
    /// Options with both prefixes disabled
    pub const fn new() -> Self {
        Self {
            sign_marker: false,
            leading_zero: false,
        }
    }

    /// Enable or disable the `'-'` marker for negative values
    pub const fn with_sign_marker(mut self, enabled: bool) -> Self {
        self.sign_marker = enabled;
        self
    }

    /// Enable or disable the `'0'` prefix for positive values
    pub const fn with_leading_zero(mut self, enabled: bool) -> Self {
        self.leading_zero = enabled;
        self
    }

    /// Prefix character for a non-zero value of the given sign, if any
    pub fn prefix(&self, sign: Sign) -> Option<char> {
        match sign {
            Sign::Negative if self.sign_marker => Some(SIGN_MARKER),
            Sign::Positive if self.leading_zero => Some('0'),
            _ => None,
        }
    }
}

/// Index of the most significant non-zero byte.
///
/// Returns `Ok(None)` when the value is zero. Any disagreement between
/// `sign` and the buffer contents is an error.
pub(crate) fn locate_top_byte(magnitude: &[u8], sign: Sign) -> Result<Option<usize>, EncodeError> {
    let top = magnitude.iter().rposition(|&byte| byte != 0);
    match (sign, top) {
        (Sign::Zero, None) => Ok(None),
        (Sign::Negative | Sign::Positive, Some(index)) => Ok(Some(index)),
        _ => {
            tracing::trace!(
                %sign,
                len = magnitude.len(),
                "rejecting inconsistent sign and magnitude"
            );
            Err(EncodeError::SignMagnitudeMismatch { sign })
        }
    }
}

/// Number of significant bits in a magnitude whose top non-zero byte sits
/// at `top`.
pub(crate) fn significant_bits(top_byte: u8, top: usize) -> usize {
    debug_assert_ne!(top_byte, 0);
    (u8::BITS - top_byte.leading_zeros()) as usize + 8 * top
}
