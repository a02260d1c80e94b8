//! # Configuration Module
//!
//! This module provides configuration structures for the deadlock-detector
//! commands. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **DetectConfig**: Configuration for the `wait-for` and `banker` commands
//! - **RenderOptions**: Configuration for the `render` command
//!
//! ## Example
//!
//! ```
//! use deadlock_detector::cli::{GraphFormat, OutputFormat};
//! use deadlock_detector::common::ConfigBuilder;
//! use deadlock_detector::config::{DetectConfig, RenderOptions};
//! use deadlock_detector::core::DetectorKind;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DetectConfig::builder()
//!     .with_detector(DetectorKind::Banker)
//!     .with_paths(vec!["scenarios".into()])
//!     .with_format(OutputFormat::Json)
//!     .with_error_on_deadlock(true)
//!     .build()?;
//! assert_eq!(config.detector, DetectorKind::Banker);
//!
//! let options = RenderOptions::builder()
//!     .with_path("edges.wfg".into())
//!     .with_format(GraphFormat::Dot)
//!     .build()?;
//! assert!(options.highlight_cycle);
//! # Ok(())
//! # }
//! ```

pub mod detect;
pub mod render;

pub use detect::DetectConfig;
pub use render::RenderOptions;
