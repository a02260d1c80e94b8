//! Core data types and structures
//!
//! This module contains the fundamental data types shared by the detectors
//! and the presentation-neutral outcome types handed to reports.

pub mod outcome;
pub mod types;

pub use outcome::*;
pub use types::*;
