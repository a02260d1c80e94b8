//! JSON format report generation

use serde_json::{Map, Value, json};

use super::ReportGenerator;
use crate::core::{DetectionOutcome, DetectionReport};
use crate::error::DeadlockError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

/// Tagged form of one outcome: `{"kind": "safe"}`, or `{"kind": "deadlock"}`
/// with either `cycle` or `processes`
fn outcome_value(source: &str, outcome: &DetectionOutcome) -> Value {
    let mut entry = Map::new();
    entry.insert("source".to_string(), json!(source));
    entry.insert("kind".to_string(), json!(outcome.status().as_str()));

    if let Some(cycle) = outcome.cycle() {
        entry.insert("cycle".to_string(), json!(cycle));
    }
    if let Some(processes) = outcome.processes() {
        entry.insert("processes".to_string(), json!(processes));
    }
    if let Some(order) = outcome.completion_order() {
        entry.insert("completion_order".to_string(), json!(order));
    }

    Value::Object(entry)
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &DetectionReport) -> Result<String, DeadlockError> {
        let scenarios: Vec<Value> = report
            .scenarios()
            .iter()
            .map(|scenario| outcome_value(&scenario.source, &scenario.outcome))
            .collect();

        let value = json!({
            "detector": report.detector().to_string(),
            "has_deadlocks": report.has_deadlocks(),
            "deadlock_count": report.deadlock_count(),
            "scenario_count": report.scenario_count(),
            "scenarios": scenarios,
        });

        serde_json::to_string_pretty(&value).map_err(DeadlockError::Json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::DetectorKind;
    use crate::reports::test_support::{banker_report, wait_for_report};

    #[test]
    fn test_json_report_empty() {
        let report = DetectionReport::new(DetectorKind::Banker);
        let output = JsonReportGenerator::new().generate_report(&report).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value,
            json!({
                "detector": "banker",
                "has_deadlocks": false,
                "deadlock_count": 0,
                "scenario_count": 0,
                "scenarios": [],
            })
        );
    }

    #[test]
    fn test_json_report_wait_for() {
        let output = JsonReportGenerator::new()
            .generate_report(&wait_for_report())
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value,
            json!({
                "detector": "wait-for",
                "has_deadlocks": true,
                "deadlock_count": 1,
                "scenario_count": 2,
                "scenarios": [
                    {"source": "scenarios/ring.wfg", "kind": "deadlock", "cycle": [1, 2, 3, 1]},
                    {"source": "scenarios/chain.wfg", "kind": "safe"},
                ],
            })
        );
    }

    #[test]
    fn test_json_report_banker() {
        let output = JsonReportGenerator::new()
            .generate_report(&banker_report())
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["scenarios"][0]["completion_order"], json!([1, 0]));
        assert_eq!(value["scenarios"][1]["processes"], json!([0, 2]));
        assert!(value["scenarios"][1].get("cycle").is_none());
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let output = JsonReportGenerator
            .generate_report(&wait_for_report())
            .unwrap();

        assert!(output.contains('\n'));
        assert!(output.contains("  "));
    }
}
