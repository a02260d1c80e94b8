//! Wait-for and banker command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::DetectConfig;
use crate::core::DetectorKind;
use crate::error::DeadlockError;

impl FromCommand for DetectConfig {
    fn from_command(command: Commands) -> Result<Self, DeadlockError> {
        let (detector, common, format, display, error_on_deadlock) = match command {
            Commands::WaitFor {
                common,
                format,
                display,
                error_on_deadlock,
            } => (
                DetectorKind::WaitForGraph,
                common,
                format,
                display,
                error_on_deadlock,
            ),
            Commands::Banker {
                common,
                format,
                display,
                error_on_deadlock,
            } => (
                DetectorKind::Banker,
                common,
                format,
                display,
                error_on_deadlock,
            ),
            _ => {
                return Err(DeadlockError::ConfigurationError {
                    message: "Invalid command type for DetectConfig".to_string(),
                });
            }
        };

        DetectConfig::builder()
            .with_detector(detector)
            .with_paths(common.get_paths())
            .with_format(format.format)
            .with_error_on_deadlock(error_on_deadlock)
            .with_max_scenarios(display.max_scenarios)
            .build()
    }
}

crate::impl_try_from_command!(DetectConfig);

/// Execute a detection command over every discovered scenario
pub fn execute_detect_command(command: Commands) -> Result<()> {
    let config = DetectConfig::from_command(command)
        .wrap_err("Failed to parse detection command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::detect::DetectExecutor;
    DetectExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, OutputFormat};

    #[test]
    fn test_banker_command_to_config() {
        let cli = Cli::try_parse_from([
            "deadlock-detector",
            "banker",
            "a.json",
            "b.toml",
            "--max-scenarios",
            "1",
        ])
        .unwrap();

        let config = DetectConfig::try_from(cli.command).unwrap();
        assert_eq!(config.detector, DetectorKind::Banker);
        assert_eq!(config.paths.len(), 2);
        assert_eq!(config.format, OutputFormat::Human);
        assert_eq!(config.max_scenarios, Some(1));
    }

    #[test]
    fn test_render_command_is_rejected() {
        let cli = Cli::try_parse_from(["deadlock-detector", "render", "edges.wfg"]).unwrap();
        assert!(DetectConfig::from_command(cli.command).is_err());
    }
}
