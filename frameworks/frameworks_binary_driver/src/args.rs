//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing.

use clap::Parser;
use entities_bignum::BigNumber;
use infrastructure_binary_encoding::baselines::{MAX_BASE, MIN_BASE};
use infrastructure_binary_encoding::{EncodeOptions, Strategy};

use crate::errors::DriverError;

/// Values printed when none are given on the command line
pub const SAMPLE_VALUES: [i64; 8] = [
    -10_000_000_000_000_000,
    -100,
    -1,
    0,
    1,
    100,
    10_000_000_000_000_000,
    i64::MAX,
];

/// Binary encoding driver command-line arguments
#[derive(Parser, Debug)]
#[command(name = "bigbin")]
#[command(about = "Print big integers as binary strings")]
pub struct DriverArgs {
    /// Decimal integers to encode (defaults to a fixed sample set)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<BigNumber>,

    /// Encoding strategy (can be specified multiple times; defaults to all)
    #[arg(long = "strategy", value_name = "NAME")]
    pub strategies: Vec<Strategy>,

    /// Prefix negative values with '-'
    #[arg(long)]
    pub sign_marker: bool,

    /// Prefix positive values with '0'
    #[arg(long)]
    pub leading_zero: bool,

    /// Output base for the repeated-division strategy
    #[arg(long, default_value_t = 2)]
    pub base: u32,

    /// Also encode a random unsigned magnitude of this many bytes
    #[arg(long, value_name = "BYTES")]
    pub random_bytes: Option<usize>,

    /// Seed for --random-bytes
    #[arg(long, default_value_t = 4)]
    pub seed: u64,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl DriverArgs {
    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), DriverError> {
        if !(MIN_BASE..=MAX_BASE).contains(&self.base) {
            return Err(DriverError::InvalidArguments(format!(
                "--base must be between {} and {}",
                MIN_BASE, MAX_BASE
            )));
        }

        if self.base != 2
            && self
                .strategies
                .iter()
                .any(|strategy| *strategy != Strategy::RepeatedDivision)
        {
            return Err(DriverError::InvalidArguments(
                "--base other than 2 only works with --strategy repeated-division".to_string(),
            ));
        }

        Ok(())
    }

    /// Prefix options for the encoders
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions::new()
            .with_sign_marker(self.sign_marker)
            .with_leading_zero(self.leading_zero)
    }

    /// Strategies to run, in order
    pub fn selected_strategies(&self) -> Vec<Strategy> {
        if self.base != 2 {
            vec![Strategy::RepeatedDivision]
        } else if self.strategies.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            self.strategies.clone()
        }
    }

    /// Values to encode: the positional arguments, or the sample set
    pub fn selected_values(&self) -> Vec<BigNumber> {
        if self.values.is_empty() {
            SAMPLE_VALUES.iter().map(|&v| BigNumber::from_i64(v)).collect()
        } else {
            self.values.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = DriverArgs::parse_from(["bigbin"]);
        assert!(args.validate().is_ok());
        assert_eq!(args.selected_strategies(), Strategy::ALL.to_vec());
        assert_eq!(args.selected_values().len(), SAMPLE_VALUES.len());
        assert_eq!(args.encode_options(), EncodeOptions::default());
        assert_eq!(args.seed, 4);
        assert_eq!(args.random_bytes, None);
    }

    #[test]
    fn test_negative_positional_values() {
        let args = DriverArgs::parse_from(["bigbin", "-100", "42"]);
        assert_eq!(
            args.selected_values(),
            vec![BigNumber::from_i64(-100), BigNumber::from_i64(42)]
        );
    }

    #[test]
    fn test_strategy_selection() {
        let args = DriverArgs::parse_from([
            "bigbin",
            "--strategy",
            "bit-array",
            "--strategy",
            "bit-extraction",
        ]);
        assert_eq!(
            args.selected_strategies(),
            vec![Strategy::BitArray, Strategy::BitExtraction]
        );
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(DriverArgs::try_parse_from(["bigbin", "--strategy", "magic"]).is_err());
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        assert!(DriverArgs::try_parse_from(["bigbin", "12x"]).is_err());
    }

    #[test]
    fn test_prefix_flags() {
        let args = DriverArgs::parse_from(["bigbin", "--sign-marker", "--leading-zero"]);
        let options = args.encode_options();
        assert!(options.sign_marker);
        assert!(options.leading_zero);
    }

    #[test]
    fn test_base_validation() {
        let args = DriverArgs::parse_from(["bigbin", "--base", "16"]);
        assert!(args.validate().is_ok());
        assert_eq!(args.selected_strategies(), vec![Strategy::RepeatedDivision]);

        let args = DriverArgs::parse_from(["bigbin", "--base", "37"]);
        assert!(args.validate().is_err());

        let args = DriverArgs::parse_from(["bigbin", "--base", "16", "--strategy", "bit-array"]);
        assert!(args.validate().is_err());
    }
}
