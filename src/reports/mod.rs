//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions workflow commands

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use std::fmt::Display;

use crate::core::{DetectionOutcome, DetectionReport, process_label};
use crate::error::DeadlockError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from the outcomes of a batch run
    fn generate_report(&self, report: &DetectionReport) -> Result<String, DeadlockError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;

fn join_labels<T: Display>(ids: &[T], separator: &str) -> String {
    ids.iter()
        .map(process_label)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Evidence line for a deadlocked outcome: the cycle for wait-for scenarios,
/// the stuck processes for Banker scenarios
pub(crate) fn evidence_line(outcome: &DetectionOutcome) -> Option<String> {
    if let Some(cycle) = outcome.cycle() {
        return Some(format!("Cycle: {}", join_labels(cycle, " → ")));
    }
    outcome
        .processes()
        .map(|processes| format!("Deadlocked processes: {}", join_labels(processes, ", ")))
}

pub(crate) fn completion_line(outcome: &DetectionOutcome) -> Option<String> {
    outcome
        .completion_order()
        .map(|order| format!("Completion order: {}", join_labels(order, " → ")))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::{
        CyclePath, DeadlockEvidence, DetectionReport, DetectionResult, DetectorKind,
        ResultFormatter,
    };

    pub fn wait_for_report() -> DetectionReport {
        let mut report = DetectionReport::new(DetectorKind::WaitForGraph);
        report.add_scenario(
            "scenarios/ring.wfg",
            ResultFormatter::format(
                DetectorKind::WaitForGraph,
                &DetectionResult::Deadlock(DeadlockEvidence::Cycle(
                    CyclePath::new(vec![1, 2, 3, 1]).unwrap(),
                )),
            ),
        );
        report.add_scenario(
            "scenarios/chain.wfg",
            ResultFormatter::format(DetectorKind::WaitForGraph, &DetectionResult::Safe),
        );
        report
    }

    pub fn banker_report() -> DetectionReport {
        let mut report = DetectionReport::new(DetectorKind::Banker);
        report.add_scenario(
            "safe.json",
            ResultFormatter::format(DetectorKind::Banker, &DetectionResult::Safe)
                .with_completion_order(vec![1, 0]),
        );
        report.add_scenario(
            "stuck.json",
            ResultFormatter::format(
                DetectorKind::Banker,
                &DetectionResult::Deadlock(DeadlockEvidence::Processes(vec![0, 2])),
            ),
        );
        report
    }
}
