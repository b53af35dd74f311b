//! Driver error types.

use entities_bignum::BigNumberError;
use infrastructure_binary_encoding::EncodeError;
use thiserror::Error as ThisError;

/// Errors reported by the driver
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum DriverError {
    /// Command line arguments do not fit together.
    #[error("{0}")]
    InvalidArguments(String),

    /// A value could not be built.
    #[error("Invalid value: {0}")]
    Value(#[from] BigNumberError),

    /// An encoder rejected its input.
    #[error("Encoding failed: {0}")]
    Encode(#[from] EncodeError),
}
