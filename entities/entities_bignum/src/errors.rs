//! Error types for big number construction.

use thiserror::Error as ThisError;

use crate::big::Sign;

/// Errors raised while building a [`BigNumber`](crate::BigNumber)
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum BigNumberError {
    /// The text is not a decimal integer.
    #[error("Invalid decimal integer: {0:?}")]
    InvalidDecimal(String),

    /// The byte buffer could not be read as a magnitude.
    #[error("Invalid magnitude buffer")]
    InvalidMagnitude,

    /// The declared sign disagrees with the magnitude buffer.
    #[error("Sign {sign} does not match the magnitude buffer")]
    SignMagnitudeMismatch {
        /// Sign supplied by the caller
        sign: Sign,
    },
}
