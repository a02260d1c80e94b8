//! # Deadlock Detector - Find Circular Waits and Stuck Processes
//!
//! Deadlock Detector checks a snapshot of a system's resource state for
//! deadlock. It offers two independent detectors:
//!
//! - a **wait-for graph** detector that searches the graph of "process A waits
//!   on process B" edges for a cycle, reporting the cycle as a witness
//! - a **Banker's** detector that simulates granting outstanding requests
//!   against the available resources, reporting the processes that can never
//!   finish
//!
//! ## Main Components
//!
//! - **Core**: Value types shared by the detectors and the presentation layer
//! - **Detector**: The two detection algorithms
//! - **Input**: Parsing of edge lists and Banker documents, with diagnostics
//! - **Graph**: petgraph conversion and ASCII/Mermaid/DOT rendering
//! - **Reports**: Human-readable and machine-readable batch reports
//!
//! ## Usage
//!
//! ### Example: Checking a Wait-For Graph
//!
//! ```
//! use deadlock_detector::core::{DetectorKind, ResultFormatter};
//! use deadlock_detector::detector::detect_wait_for_cycle;
//! use deadlock_detector::input::parse_edge_list;
//!
//! # fn main() -> miette::Result<()> {
//! let edges = parse_edge_list("inline", "1 2\n2 3\n3 1\n")?;
//! let result = detect_wait_for_cycle(&edges);
//!
//! let outcome = ResultFormatter::format(DetectorKind::WaitForGraph, &result);
//! assert_eq!(outcome.status_line(), "Deadlock Detected (Cycle Found)");
//! assert_eq!(outcome.cycle(), Some(&[1, 2, 3, 1][..]));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Running the Banker's Check
//!
//! ```
//! use deadlock_detector::input::parse_banker_json;
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let input = parse_banker_json(
//!     "inline",
//!     r#"{
//!         "available": [3, 3, 2],
//!         "allocation": [[0, 1, 0], [2, 0, 0], [3, 0, 2], [2, 1, 1], [0, 0, 2]],
//!         "request": [[7, 4, 3], [1, 2, 2], [6, 0, 0], [0, 1, 1], [4, 3, 1]]
//!     }"#,
//! )?;
//!
//! let simulation = input.simulate().into_diagnostic()?;
//! assert!(simulation.is_safe());
//! assert_eq!(simulation.completion_order(), &[1, 3, 4, 0, 2]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Reporting a Batch of Scenarios
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use deadlock_detector::cli::OutputFormat;
//! use deadlock_detector::common::ConfigBuilder;
//! use deadlock_detector::config::DetectConfig;
//! use deadlock_detector::core::DetectorKind;
//! use deadlock_detector::executors::detect::build_report;
//! use deadlock_detector::reports::{JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let config = DetectConfig::builder()
//!     .with_detector(DetectorKind::WaitForGraph)
//!     .with_paths(vec![PathBuf::from("scenarios/")])
//!     .with_format(OutputFormat::Json)
//!     .build()?;
//!
//! let report = build_report(&config, None)?;
//! println!("{}", JsonReportGenerator::new().generate_report(&report)?);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod input;
pub mod reports;
pub mod scenario_discovery;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
