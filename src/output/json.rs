use serde::Serialize;

use crate::analyzer::Verdict;
use crate::engine::{Finding, ProjectAnalysis, ScanReport};
use crate::error::Result;
use crate::rules::Severity;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    findings: &'a [Finding],
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<&'a ProjectAnalysis>,
}

#[derive(Serialize)]
struct Summary {
    files_analyzed: usize,
    files_skipped: usize,
    total_findings: usize,
    critical: usize,
    high: usize,
    medium: usize,
    low: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<Verdict>,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport, project: Option<&ProjectAnalysis>) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files_analyzed: report.files_analyzed,
                files_skipped: report.files_skipped,
                total_findings: report.findings.len(),
                critical: report.count_at_severity(Severity::Critical),
                high: report.count_at_severity(Severity::High),
                medium: report.count_at_severity(Severity::Medium),
                low: report.count_at_severity(Severity::Low),
                verdict: project.map(|p| p.verdict),
            },
            findings: &report.findings,
            project,
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
