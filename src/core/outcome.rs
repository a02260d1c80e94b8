//! Presentation-neutral detection outcomes
//!
//! [`ResultFormatter`] turns a [`DetectionResult`] into a [`DetectionOutcome`]:
//! a flat status plus the optional cycle or process list. Report generators
//! and renderers consume outcomes, never the detectors directly.

use super::types::{DeadlockEvidence, DetectionResult, DetectorKind, NodeId, process_label};

/// Verdict of a detection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Safe,
    Deadlock,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Safe => "safe",
            Status::Deadlock => "deadlock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionOutcome {
    detector: DetectorKind,
    status: Status,
    cycle: Option<Vec<NodeId>>,
    processes: Option<Vec<usize>>,
    completion_order: Option<Vec<usize>>,
}

impl DetectionOutcome {
    pub fn detector(&self) -> DetectorKind {
        self.detector
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_deadlock(&self) -> bool {
        self.status == Status::Deadlock
    }

    /// Witness cycle, present only for wait-for deadlocks
    pub fn cycle(&self) -> Option<&[NodeId]> {
        self.cycle.as_deref()
    }

    /// Stuck processes, present only for Banker deadlocks
    pub fn processes(&self) -> Option<&[usize]> {
        self.processes.as_deref()
    }

    /// Order in which the Banker simulation let processes finish
    pub fn completion_order(&self) -> Option<&[usize]> {
        self.completion_order.as_deref()
    }

    pub fn with_completion_order(mut self, order: Vec<usize>) -> Self {
        self.completion_order = Some(order);
        self
    }

    /// One-line verdict suitable for a status bar
    pub fn status_line(&self) -> String {
        match (&self.status, &self.processes) {
            (Status::Safe, _) => "No Deadlock Detected".to_string(),
            (Status::Deadlock, Some(processes)) => {
                let labels: Vec<String> = processes.iter().map(process_label).collect();
                format!("Deadlock Detected: {}", labels.join(", "))
            }
            (Status::Deadlock, None) => "Deadlock Detected (Cycle Found)".to_string(),
        }
    }
}

/// Maps detector output to [`DetectionOutcome`]
pub struct ResultFormatter;

impl ResultFormatter {
    pub fn format(detector: DetectorKind, result: &DetectionResult) -> DetectionOutcome {
        let mut outcome = DetectionOutcome {
            detector,
            status: Status::Safe,
            cycle: None,
            processes: None,
            completion_order: None,
        };

        if let DetectionResult::Deadlock(evidence) = result {
            outcome.status = Status::Deadlock;
            match evidence {
                DeadlockEvidence::Cycle(cycle) => outcome.cycle = Some(cycle.nodes().to_vec()),
                DeadlockEvidence::Processes(processes) => {
                    outcome.processes = Some(processes.clone())
                }
            }
        }

        outcome
    }
}

/// Outcome of one scenario in a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutcome {
    pub source: String,
    pub outcome: DetectionOutcome,
}

/// Outcomes of every scenario processed by one command invocation
#[derive(Debug, Clone)]
pub struct DetectionReport {
    detector: DetectorKind,
    scenarios: Vec<ScenarioOutcome>,
}

impl DetectionReport {
    pub fn new(detector: DetectorKind) -> Self {
        Self {
            detector,
            scenarios: Vec::new(),
        }
    }

    pub fn detector(&self) -> DetectorKind {
        self.detector
    }

    pub fn add_scenario(&mut self, source: impl Into<String>, outcome: DetectionOutcome) {
        self.scenarios.push(ScenarioOutcome {
            source: source.into(),
            outcome,
        });
    }

    pub fn scenarios(&self) -> &[ScenarioOutcome] {
        &self.scenarios
    }

    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    pub fn deadlock_count(&self) -> usize {
        self.scenarios
            .iter()
            .filter(|s| s.outcome.is_deadlock())
            .count()
    }

    pub fn has_deadlocks(&self) -> bool {
        self.deadlock_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CyclePath;

    #[test]
    fn test_format_safe() {
        let outcome = ResultFormatter::format(DetectorKind::Banker, &DetectionResult::Safe);

        assert_eq!(outcome.status(), Status::Safe);
        assert!(outcome.cycle().is_none());
        assert!(outcome.processes().is_none());
        assert_eq!(outcome.status_line(), "No Deadlock Detected");
    }

    #[test]
    fn test_format_cycle() {
        let cycle = CyclePath::new(vec![1, 2, 3, 1]).unwrap();
        let result = DetectionResult::Deadlock(DeadlockEvidence::Cycle(cycle));
        let outcome = ResultFormatter::format(DetectorKind::WaitForGraph, &result);

        assert!(outcome.is_deadlock());
        assert_eq!(outcome.cycle(), Some(&[1, 2, 3, 1][..]));
        assert_eq!(outcome.status_line(), "Deadlock Detected (Cycle Found)");
    }

    #[test]
    fn test_format_processes() {
        let result = DetectionResult::Deadlock(DeadlockEvidence::Processes(vec![0, 1]));
        let outcome = ResultFormatter::format(DetectorKind::Banker, &result);

        assert_eq!(outcome.processes(), Some(&[0, 1][..]));
        assert_eq!(outcome.status_line(), "Deadlock Detected: P0, P1");
        assert_eq!(outcome.status().as_str(), "deadlock");
    }

    #[test]
    fn test_report_counts() {
        let mut report = DetectionReport::new(DetectorKind::Banker);
        report.add_scenario(
            "a.json",
            ResultFormatter::format(DetectorKind::Banker, &DetectionResult::Safe),
        );
        report.add_scenario(
            "b.json",
            ResultFormatter::format(
                DetectorKind::Banker,
                &DetectionResult::Deadlock(DeadlockEvidence::Processes(vec![2])),
            ),
        );

        assert_eq!(report.scenario_count(), 2);
        assert_eq!(report.deadlock_count(), 1);
        assert!(report.has_deadlocks());
    }
}
