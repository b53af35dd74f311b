//! Entities Layer: Big Numbers
//!
//! Provides the arbitrary precision integer type consumed by the binary
//! string encoders:
//! - [`BigNumber`]: a `malachite::Integer` wrapper
//! - [`Sign`]: negative / zero / positive, independent of the magnitude
//! - Little-endian magnitude extraction, minimal or sign-safe padded

pub mod big;
mod errors;

pub use big::{BigNumber, Sign};
pub use errors::BigNumberError;
