//! Detection command executor

use console::style;
use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::DetectConfig;
use crate::constants::scenario::{BANKER_EXTENSIONS, WAIT_FOR_EXTENSIONS};
use crate::core::{DetectionOutcome, DetectionReport, DetectorKind, ResultFormatter};
use crate::detector::detect_wait_for_cycle;
use crate::error::DeadlockError;
use crate::executors::CommandExecutor;
use crate::input::{BankerSyntax, parse_banker, parse_edge_list};
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};
use crate::scenario_discovery::{ScenarioDiscovery, ScenarioSource};

pub struct DetectExecutor;

/// Parse one scenario and run `detector` over it
pub fn detect_scenario(
    detector: DetectorKind,
    source: &ScenarioSource,
    text: &str,
) -> Result<DetectionOutcome, DeadlockError> {
    let source_name = source.name();

    match detector {
        DetectorKind::WaitForGraph => {
            let edges = parse_edge_list(&source_name, text)?;
            Ok(ResultFormatter::format(
                detector,
                &detect_wait_for_cycle(&edges),
            ))
        }
        DetectorKind::Banker => {
            let input = parse_banker(&source_name, text, BankerSyntax::from_path(source.path()))?;
            let simulation = input
                .simulate()
                .map_err(|source| DeadlockError::InputShape {
                    source_name: source_name.clone(),
                    source,
                })?;

            let outcome = ResultFormatter::format(detector, &simulation.to_result());
            if simulation.is_safe() {
                Ok(outcome.with_completion_order(simulation.completion_order().to_vec()))
            } else {
                Ok(outcome)
            }
        }
    }
}

/// Discover every scenario under the configured paths and run the detector
/// over each one. The first scenario that cannot be read or parsed aborts
/// the run.
pub fn build_report(
    config: &DetectConfig,
    mut progress: Option<&mut ProgressReporter>,
) -> Result<DetectionReport> {
    let extensions = match config.detector {
        DetectorKind::WaitForGraph => WAIT_FOR_EXTENSIONS,
        DetectorKind::Banker => BANKER_EXTENSIONS,
    };

    let sources = ScenarioDiscovery::new(extensions)
        .discover(&config.paths, progress.as_deref_mut())
        .wrap_err("Failed to discover scenarios")?;

    let mut report = DetectionReport::new(config.detector);
    if sources.is_empty() {
        return Ok(report);
    }

    if let Some(p) = progress.as_mut() {
        p.start_detection(sources.len());
    }

    for source in &sources {
        let source_name = source.name();
        if let Some(p) = progress.as_ref() {
            p.update_detection(&source_name);
        }

        let text = source.read()?;
        let outcome = detect_scenario(config.detector, source, &text)?;
        report.add_scenario(source_name, outcome);
    }

    if let Some(p) = progress.as_mut() {
        p.finish_detection(report.deadlock_count());
    }

    Ok(report)
}

impl CommandExecutor for DetectExecutor {
    type Config = DetectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        match config.detector {
            DetectorKind::WaitForGraph => eprintln!(
                "{} Checking wait-for graphs for circular waits...\n",
                style("🔒").cyan()
            ),
            DetectorKind::Banker => eprintln!(
                "{} Running the Banker's deadlock check...\n",
                style("🔒").cyan()
            ),
        }

        let mut progress = ProgressReporter::for_terminal();
        let report = build_report(&config, progress.as_mut())?;

        if report.scenario_count() == 0 {
            eprintln!("{} No scenarios found to analyze", style("ℹ").blue());
            return Ok(());
        }

        let report_result = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new(config.max_scenarios).generate_report(&report)
            }
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&report),
            OutputFormat::Junit => JunitReportGenerator::new().generate_report(&report),
            OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(&report),
        };

        let rendered = report_result.wrap_err("Failed to generate report")?;
        print!("{rendered}");

        if config.error_on_deadlock && report.has_deadlocks() {
            std::process::exit(1);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::core::Status;

    fn config_for(detector: DetectorKind, paths: Vec<PathBuf>) -> DetectConfig {
        DetectConfig {
            detector,
            paths,
            format: OutputFormat::Json,
            error_on_deadlock: false,
            max_scenarios: None,
        }
    }

    #[test]
    fn test_detect_wait_for_scenario() {
        let source = ScenarioSource::File(PathBuf::from("ring.wfg"));
        let outcome = detect_scenario(DetectorKind::WaitForGraph, &source, "1 2\n2 3\n3 1\n")
            .unwrap();

        assert_eq!(outcome.status(), Status::Deadlock);
        assert_eq!(outcome.cycle(), Some(&[1, 2, 3, 1][..]));
    }

    #[test]
    fn test_detect_banker_scenario_records_completion_order() {
        let source = ScenarioSource::File(PathBuf::from("safe.toml"));
        let text = "available = [1]\nallocation = [[1], [0]]\nrequest = [[0], [2]]\n";
        let outcome = detect_scenario(DetectorKind::Banker, &source, text).unwrap();

        assert_eq!(outcome.status(), Status::Safe);
        assert_eq!(outcome.completion_order(), Some(&[0, 1][..]));
    }

    #[test]
    fn test_detect_banker_deadlock_has_no_completion_order() {
        let source = ScenarioSource::File(PathBuf::from("stuck.json"));
        let text = r#"{"available": [0], "allocation": [[1], [1]], "request": [[1], [1]]}"#;
        let outcome = detect_scenario(DetectorKind::Banker, &source, text).unwrap();

        assert_eq!(outcome.processes(), Some(&[0, 1][..]));
        assert_eq!(outcome.completion_order(), None);
    }

    #[test]
    fn test_shape_error_names_the_scenario() {
        let source = ScenarioSource::File(PathBuf::from("bad.json"));
        let text = r#"{"available": [], "allocation": [], "request": []}"#;

        match detect_scenario(DetectorKind::Banker, &source, text) {
            Err(DeadlockError::InputShape { source_name, .. }) => {
                assert_eq!(source_name, "bad.json")
            }
            other => panic!("Expected InputShape error, got {other:?}"),
        }
    }

    #[test]
    fn test_build_report_over_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.wfg"), "1 2\n2 1\n").unwrap();
        fs::write(temp.path().join("b.wfg"), "1 2\n2 3\n").unwrap();
        fs::write(temp.path().join("readme.md"), "not a scenario").unwrap();

        let config = config_for(DetectorKind::WaitForGraph, vec![temp.path().to_path_buf()]);
        let report = build_report(&config, None).unwrap();

        assert_eq!(report.scenario_count(), 2);
        assert_eq!(report.deadlock_count(), 1);
        assert!(report.scenarios()[0].source.ends_with("a.wfg"));
    }

    #[test]
    fn test_build_report_stops_at_malformed_scenario() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bad.wfg"), "1 x\n").unwrap();

        let config = config_for(DetectorKind::WaitForGraph, vec![temp.path().to_path_buf()]);
        assert!(build_report(&config, None).is_err());
    }

    #[test]
    fn test_build_report_with_no_scenarios() {
        let temp = TempDir::new().unwrap();
        let config = config_for(DetectorKind::Banker, vec![temp.path().to_path_buf()]);

        let report = build_report(&config, None).unwrap();
        assert_eq!(report.scenario_count(), 0);
        assert!(!report.has_deadlocks());
    }
}
