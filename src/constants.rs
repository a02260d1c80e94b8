//! Configuration constants for deadlock-detector
//!
//! This module contains the constants used throughout the application. Most
//! of them back a CLI default that can be overridden through flags or
//! environment variables.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames: a padlock opening and closing
    pub const SPINNER_FRAMES: &[&str] = &[
        "🔒 ", "🔒◐", "🔒◓", "🔒◑", "🔓◒", "🔓○", "🔓●", "🔓 ",
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph rendering format when not specified
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";
}

/// Scenario discovery configuration
pub mod scenario {
    /// Path argument that stands for standard input
    pub const STDIN_PATH: &str = "-";

    /// Source name used for scenarios read from standard input
    pub const STDIN_NAME: &str = "<stdin>";

    /// File extensions picked up when walking directories for edge lists
    pub const WAIT_FOR_EXTENSIONS: &[&str] = &["wfg", "edges", "txt"];

    /// File extensions picked up when walking directories for Banker scenarios
    pub const BANKER_EXTENSIONS: &[&str] = &["json", "toml"];
}
