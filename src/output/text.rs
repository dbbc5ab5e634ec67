use std::fmt::Write;

use crate::analyzer::{Verdict, Violation};
use crate::engine::{Finding, ProjectAnalysis, ScanReport};
use crate::error::Result;
use crate::rules::Severity;

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => ansi::MAGENTA,
            Severity::High => ansi::RED,
            Severity::Medium => ansi::YELLOW,
            Severity::Low => ansi::CYAN,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_finding(&self, finding: &Finding, output: &mut String) {
        let label = self.colorize(
            finding.severity.label(),
            Self::severity_color(finding.severity),
        );
        writeln!(
            output,
            "{}:{}:{} [{label}/{}] {}: {}",
            finding.file.display(),
            finding.line,
            finding.column,
            finding.certainty.label(),
            finding.rule,
            finding.excerpt
        )
        .ok();
    }

    fn format_violation(&self, violation: &Violation, output: &mut String) {
        let label = self.colorize(
            violation.severity.label(),
            Self::severity_color(violation.severity),
        );
        writeln!(
            output,
            "  ✗ {}: {} (limit {}) [{label}]",
            violation.kind(),
            violation.value,
            violation.threshold
        )
        .ok();
    }

    fn format_project(&self, project: &ProjectAnalysis, output: &mut String) {
        output.push_str("Project analysis:\n");

        let metrics = &project.structure.metrics;
        writeln!(
            output,
            "  {} source files, {} exports, depth {}",
            metrics.source_files, metrics.exports, metrics.max_depth
        )
        .ok();
        for violation in &project.structure.violations {
            self.format_violation(violation, output);
        }

        writeln!(output, "  {} quality claims found", project.claims.claims_found.len()).ok();
        for violation in &project.claims.violations {
            self.format_violation(violation, output);
        }

        let verdict = self.colorize(project.verdict.label(), verdict_color(project.verdict));
        writeln!(output, "  Verdict: {verdict}").ok();
        output.push('\n');
    }

    fn format_summary(&self, report: &ScanReport, output: &mut String) {
        let mut parts = Vec::new();
        for severity in Severity::ALL {
            let count = report.count_at_severity(severity);
            if count > 0 {
                let label = self.colorize(severity.label(), Self::severity_color(severity));
                parts.push(format!("{count} {label}"));
            }
        }

        let skipped = if report.files_skipped > 0 {
            format!(" ({} skipped)", report.files_skipped)
        } else {
            String::new()
        };

        if parts.is_empty() {
            let clean = self.colorize("no findings", ansi::GREEN);
            writeln!(
                output,
                "Summary: {} files analyzed{skipped}, {clean}",
                report.files_analyzed
            )
            .ok();
        } else {
            writeln!(
                output,
                "Summary: {} files analyzed{skipped}, {} findings: {}",
                report.files_analyzed,
                report.findings.len(),
                parts.join(", ")
            )
            .ok();
        }
    }
}

const fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Ok => ansi::GREEN,
        Verdict::Medium => ansi::YELLOW,
        Verdict::High => ansi::RED,
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ScanReport, project: Option<&ProjectAnalysis>) -> Result<String> {
        let mut output = String::new();

        for finding in &report.findings {
            self.format_finding(finding, &mut output);
        }
        if !report.findings.is_empty() {
            output.push('\n');
        }

        if let Some(project) = project {
            self.format_project(project, &mut output);
        }

        self.format_summary(report, &mut output);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
