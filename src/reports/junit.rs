//! JUnit XML format report generation

use std::fmt::Write;

use super::{ReportGenerator, evidence_line};
use crate::core::DetectionReport;
use crate::error::DeadlockError;
use crate::utils::string::escape_xml;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, report: &DetectionReport) -> Result<String, DeadlockError> {
        let mut output = String::new();
        let tests = report.scenario_count();
        let failures = report.deadlock_count();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="deadlock-detector" tests="{tests}" failures="{failures}">"#
        )?;
        writeln!(
            output,
            r#"  <testsuite name="{}" tests="{tests}" failures="{failures}">"#,
            report.detector()
        )?;

        for scenario in report.scenarios() {
            let name = escape_xml(&scenario.source);
            let outcome = &scenario.outcome;

            if !outcome.is_deadlock() {
                writeln!(
                    output,
                    r#"    <testcase name="{name}" classname="deadlock-detector" />"#
                )?;
                continue;
            }

            writeln!(
                output,
                r#"    <testcase name="{name}" classname="deadlock-detector">"#
            )?;
            writeln!(
                output,
                r#"      <failure message="{}">"#,
                escape_xml(&outcome.status_line())
            )?;
            if let Some(line) = evidence_line(outcome) {
                writeln!(output, "{}", escape_xml(&line))?;
            }
            writeln!(output, r#"      </failure>"#)?;
            writeln!(output, r#"    </testcase>"#)?;
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}
