//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{ReportGenerator, completion_line, evidence_line};
use crate::core::{DetectionReport, DetectorKind};
use crate::error::DeadlockError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_scenarios: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_scenarios: Option<usize>) -> Self {
        Self { max_scenarios }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &DetectionReport) -> Result<String, DeadlockError> {
        let mut output = String::new();
        let total = report.scenario_count();
        let deadlocks = report.deadlock_count();

        if deadlocks == 0 {
            write!(
                output,
                "\n{} No deadlock detected in {} {}.\n\n",
                style("✅").green().bold(),
                style(total).green().bold(),
                pluralize("scenario", total)
            )?;
        } else {
            write!(
                output,
                "\n{} Deadlock detected in {} of {} {}:\n\n",
                style("❌").red().bold(),
                style(deadlocks).red().bold(),
                style(total).bold(),
                pluralize("scenario", total)
            )?;
        }

        let limit = self.max_scenarios.unwrap_or(total);
        for scenario in report.scenarios().iter().take(limit) {
            let outcome = &scenario.outcome;
            let marker = if outcome.is_deadlock() {
                style("🔒").red()
            } else {
                style("🔓").green()
            };

            writeln!(output, "{} {}", marker, style(&scenario.source).bold())?;
            writeln!(output, "  {} {}", style("→").dim(), outcome.status_line())?;
            if let Some(line) = evidence_line(outcome) {
                writeln!(output, "  {} {}", style("→").dim(), style(line).yellow())?;
            }
            if let Some(line) = completion_line(outcome) {
                writeln!(output, "  {} {}", style("→").dim(), style(line).dim())?;
            }
            writeln!(output)?;
        }

        if limit < total {
            writeln!(
                output,
                "{} Showing {} of {} scenarios. Use --max-scenarios to see more.\n",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(total).yellow()
            )?;
        }

        if deadlocks > 0 {
            match report.detector() {
                DetectorKind::WaitForGraph => {
                    writeln!(
                        output,
                        "{} To break a circular wait, at least one process on the cycle must \
                         release its resource or stop waiting.",
                        style("💡").yellow()
                    )?;
                    writeln!(
                        output,
                        "{} Acquiring resources in one global order prevents these cycles.",
                        style("💡").yellow()
                    )?;
                }
                DetectorKind::Banker => {
                    writeln!(
                        output,
                        "{} Deadlocked processes cannot finish with the available resources; \
                         preempting or aborting one of them frees its allocation.",
                        style("💡").yellow()
                    )?;
                }
            }
        }

        Ok(output)
    }
}
