//! Encoding Strategies
//!
//! Names every binary encoder in the crate so callers (the driver binary and
//! the benchmarks) can pick one at runtime.

use std::fmt;
use std::str::FromStr;

use entities_bignum::Sign;

use crate::baselines;
use crate::binary_string::BinaryStringEncoder;
use crate::common::{EncodeError, EncodeOptions};

/// Available binary encoding algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Direct bit extraction into an exact-size buffer
    BitExtraction,
    /// Per-byte formatting with left padding
    PerByteFormat,
    /// Repeated division by two on a big integer
    RepeatedDivision,
    /// Explicit bit vector, reversed and regex trimmed
    BitArray,
}

impl Strategy {
    /// Every strategy, fastest first
    pub const ALL: [Strategy; 4] = [
        Strategy::BitExtraction,
        Strategy::PerByteFormat,
        Strategy::RepeatedDivision,
        Strategy::BitArray,
    ];

    /// Stable kebab-case name
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BitExtraction => "bit-extraction",
            Strategy::PerByteFormat => "per-byte-format",
            Strategy::RepeatedDivision => "repeated-division",
            Strategy::BitArray => "bit-array",
        }
    }

    /// Encode `magnitude` in base 2 with this strategy
    pub fn encode(
        self,
        magnitude: &[u8],
        sign: Sign,
        options: &EncodeOptions,
    ) -> Result<String, EncodeError> {
        match self {
            Strategy::BitExtraction => BinaryStringEncoder::new(*options).encode(magnitude, sign),
            Strategy::PerByteFormat => baselines::per_byte_format(magnitude, sign, options),
            Strategy::RepeatedDivision => {
                baselines::repeated_division(magnitude, sign, 2, options)
            }
            Strategy::BitArray => baselines::bit_array(magnitude, sign, options),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown strategy name
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown strategy: {0:?}")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_owned()))
    }
}
