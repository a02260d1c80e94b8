//! Render command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::missing_field;
use crate::error::DeadlockError;

/// Configuration for the render command
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Edge-list scenario to render
    pub path: PathBuf,
    /// Output format for the graph
    pub format: GraphFormat,
    /// Output file (stdout if None)
    pub output: Option<PathBuf>,
    /// Highlight the detected cycle
    pub highlight_cycle: bool,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

pub struct RenderOptionsBuilder {
    path: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<PathBuf>,
    highlight_cycle: bool,
}

impl Default for RenderOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self {
            path: None,
            format: None,
            output: None,
            highlight_cycle: true,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_highlight_cycle(mut self, highlight_cycle: bool) -> Self {
        self.highlight_cycle = highlight_cycle;
        self
    }
}

impl crate::common::ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, DeadlockError> {
        Ok(RenderOptions {
            path: self.path.ok_or_else(|| missing_field("path"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output,
            highlight_cycle: self.highlight_cycle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_highlight_defaults_to_true() {
        let options = RenderOptions::builder()
            .with_path(PathBuf::from("edges.wfg"))
            .with_format(GraphFormat::Mermaid)
            .build()
            .unwrap();

        assert!(options.highlight_cycle);
        assert!(options.output.is_none());
    }

    #[test]
    fn test_builder_requires_format() {
        let err = RenderOptions::builder()
            .with_path(PathBuf::from("edges.wfg"))
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: format"
        );
    }
}
