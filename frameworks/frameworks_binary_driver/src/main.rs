//! Binary Encoding Driver Entry Point
//!
//! Prints the binary encoding of each requested value for every selected
//! strategy. Logs go to stderr; stdout carries only the report.

use std::process;

use clap::Parser;
use frameworks_binary_driver::logging::init_logging;
use frameworks_binary_driver::{build_report, DriverArgs};

fn main() {
    let args = DriverArgs::parse();
    init_logging(&args.log_level);

    let reports = match build_report(&args) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    for report in &reports {
        if !report.is_consistent() {
            tracing::warn!(label = %report.label, "strategies disagree");
        }
        println!("{}", report);
    }
}
