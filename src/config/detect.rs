//! Detection command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::core::DetectorKind;
use crate::error::DeadlockError;

/// Configuration shared by the `wait-for` and `banker` commands
///
/// This struct contains all options for discovering scenarios, running one
/// detector over them and reporting the outcomes.
#[derive(Debug, Clone)]
pub struct DetectConfig {
    /// Which detector to run
    pub detector: DetectorKind,
    /// Scenario files, directories or glob patterns
    pub paths: Vec<PathBuf>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if any scenario deadlocks
    pub error_on_deadlock: bool,
    /// Maximum number of scenarios to show (None = all)
    pub max_scenarios: Option<usize>,
}

impl DetectConfig {
    pub fn builder() -> DetectConfigBuilder {
        DetectConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct DetectConfigBuilder {
    detector: Option<DetectorKind>,
    paths: Option<Vec<PathBuf>>,
    format: Option<OutputFormat>,
    error_on_deadlock: bool,
    max_scenarios: Option<usize>,
}

impl DetectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detector(mut self, detector: DetectorKind) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_deadlock(mut self, error_on_deadlock: bool) -> Self {
        self.error_on_deadlock = error_on_deadlock;
        self
    }

    pub fn with_max_scenarios(mut self, max_scenarios: Option<usize>) -> Self {
        self.max_scenarios = max_scenarios;
        self
    }
}

impl crate::common::ConfigBuilder for DetectConfigBuilder {
    type Config = DetectConfig;

    fn build(self) -> Result<Self::Config, DeadlockError> {
        Ok(DetectConfig {
            detector: self.detector.ok_or_else(|| missing_field("detector"))?,
            paths: self.paths.ok_or_else(|| missing_field("paths"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            error_on_deadlock: self.error_on_deadlock,
            max_scenarios: self.max_scenarios,
        })
    }
}
