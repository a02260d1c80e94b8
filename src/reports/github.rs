//! GitHub Actions format report generation

use std::fmt::Write;

use super::{ReportGenerator, evidence_line};
use crate::core::{DetectionReport, DetectorKind};
use crate::error::DeadlockError;
use crate::utils::string::pluralize;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

/// Workflow command values may not contain raw newlines or `%`
fn escape_data(text: &str) -> String {
    text.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Property values additionally escape `:` and `,`
fn escape_property(text: &str) -> String {
    escape_data(text).replace(':', "%3A").replace(',', "%2C")
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, report: &DetectionReport) -> Result<String, DeadlockError> {
        let mut output = String::new();
        let total = report.scenario_count();

        if !report.has_deadlocks() {
            writeln!(
                output,
                "::notice title=Deadlock Check::No deadlock detected in {} {} ✅",
                total,
                pluralize("scenario", total)
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Deadlocks::Deadlock detected in {} of {} {}",
            report.deadlock_count(),
            total,
            pluralize("scenario", total)
        )?;

        for scenario in report.scenarios() {
            let outcome = &scenario.outcome;
            if !outcome.is_deadlock() {
                continue;
            }

            let mut message = outcome.status_line();
            if let Some(line) = evidence_line(outcome) {
                message.push('\n');
                message.push_str(&line);
            }

            writeln!(
                output,
                "::error file={},title={}::{}",
                escape_property(&scenario.source),
                escape_property(&outcome.status_line()),
                escape_data(&message)
            )?;
        }

        let recommendation = match report.detector() {
            DetectorKind::WaitForGraph => {
                "Acquire resources in one global order so that no circular wait can form."
            }
            DetectorKind::Banker => {
                "Preempt or abort one deadlocked process to free its allocation."
            }
        };
        writeln!(output, "::notice title=Recommendation::{recommendation}")?;

        Ok(output)
    }
}
