//! Report Building Module
//!
//! Runs the selected strategies over every requested value and collects the
//! printed lines.

use std::fmt;

use entities_bignum::{BigNumber, Sign};
use infrastructure_binary_encoding::fixtures::random_magnitude;
use infrastructure_binary_encoding::{baselines, EncodeOptions, Strategy};

use crate::args::DriverArgs;
use crate::errors::DriverError;

/// Width of the strategy name column
const NAME_WIDTH: usize = 18;

/// One strategy's output for one value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLine {
    /// Strategy that produced `digits`
    pub strategy: Strategy,
    /// Encoded value
    pub digits: String,
}

/// All strategy outputs for one value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueReport {
    /// Human readable description of the value
    pub label: String,
    /// One line per strategy
    pub lines: Vec<ReportLine>,
}

impl ValueReport {
    /// Check that every strategy produced the same digits
    pub fn is_consistent(&self) -> bool {
        self.lines
            .windows(2)
            .all(|pair| pair[0].digits == pair[1].digits)
    }
}

impl fmt::Display for ValueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "using: {}", self.label)?;
        for line in &self.lines {
            writeln!(f, "{:<width$} {}", line.strategy.name(), line.digits, width = NAME_WIDTH)?;
        }
        Ok(())
    }
}

/// Encode one magnitude with every strategy in `strategies`
///
/// `base` only applies to [`Strategy::RepeatedDivision`].
pub fn encode_value(
    magnitude: &[u8],
    sign: Sign,
    strategies: &[Strategy],
    base: u32,
    options: &EncodeOptions,
) -> Result<Vec<ReportLine>, DriverError> {
    let mut lines = Vec::with_capacity(strategies.len());
    for &strategy in strategies {
        let digits = match strategy {
            Strategy::RepeatedDivision => {
                baselines::repeated_division(magnitude, sign, base, options)?
            }
            _ => strategy.encode(magnitude, sign, options)?,
        };
        tracing::debug!(%strategy, %sign, len = digits.len(), "encoded value");
        lines.push(ReportLine { strategy, digits });
    }
    Ok(lines)
}

/// Build the full report described by `args`
pub fn build_report(args: &DriverArgs) -> Result<Vec<ValueReport>, DriverError> {
    args.validate()?;

    let strategies = args.selected_strategies();
    let options = args.encode_options();
    let mut reports = Vec::new();

    for value in args.selected_values() {
        let magnitude = value.to_magnitude_bytes();
        let lines = encode_value(&magnitude, value.sign(), &strategies, args.base, &options)?;
        reports.push(ValueReport {
            label: value.to_string(),
            lines,
        });
    }

    if let Some(len) = args.random_bytes {
        // Raw buffer, high zero bytes included
        let magnitude = random_magnitude(len, args.seed);
        let value = BigNumber::from_unsigned_bytes(&magnitude)?;
        tracing::info!(len, seed = args.seed, "encoding random magnitude");
        let lines = encode_value(&magnitude, value.sign(), &strategies, args.base, &options)?;
        reports.push(ValueReport {
            label: format!("{} ({} random bytes, seed {})", value, len, args.seed),
            lines,
        });
    }

    Ok(reports)
}
