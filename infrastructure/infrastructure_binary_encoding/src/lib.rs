//! Infrastructure Layer: Binary String Encoding
//!
//! Converts arbitrary precision integers, given as a sign plus a little-endian
//! magnitude buffer, into base-2 digit strings.
//!
//! ## Overview
//!
//! The `infrastructure_binary_encoding` crate sits on top of the entities
//! layer's [`BigNumber`](entities_bignum::BigNumber). The production encoder
//! walks the magnitude from its most significant non-zero byte down, writing
//! one character per bit into a buffer sized exactly once.
//!
//! ## Modules
//!
//! - **[`binary_string`]**: [`BinaryStringEncoder`], the direct bit extraction
//!   encoder, and the [`encode`] shortcut.
//! - **[`baselines`]**: slower reference encoders used for benchmarks and
//!   differential tests.
//! - **[`strategy`]**: [`Strategy`], a runtime choice between all encoders.
//! - **[`fixtures`]**: seeded random magnitudes.
//!
//! ## Output Rules
//!
//! Zero encodes as `"0"`. Other values carry no leading zero bits; an
//! optional `'-'` (negative) or `'0'` (positive) prefix is controlled by
//! [`EncodeOptions`].

mod common;

pub mod baselines;
pub mod binary_string;
pub mod fixtures;
pub mod strategy;

pub use binary_string::{encode, BinaryStringEncoder};
pub use strategy::{Strategy, UnknownStrategy};

// Re-export shared types for convenience
pub use common::{EncodeError, EncodeOptions, SIGN_MARKER};
