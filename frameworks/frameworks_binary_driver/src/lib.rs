//! Frameworks Layer: Binary Encoding Driver
//!
//! Backs the `bigbin` binary, which prints big integers as binary strings so
//! the encoders can be compared by eye.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: clap argument definitions and validation
//! - **[`report`](report/index.html)**: runs the strategies and formats output
//! - **[`logging`](logging/index.html)**: tracing subscriber setup
//!
//! ## Output
//!
//! For each value, a `using: <decimal>` header followed by one line per
//! strategy:
//!
//! ```text
//! using: -100
//! bit-extraction     1100100
//! per-byte-format    1100100
//! repeated-division  1100100
//! bit-array          1100100
//! ```

pub mod args;
mod errors;
pub mod logging;
pub mod report;

pub use args::{DriverArgs, SAMPLE_VALUES};
pub use errors::DriverError;
pub use report::{build_report, encode_value, ReportLine, ValueReport};
