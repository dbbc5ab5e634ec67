use std::path::PathBuf;

use serde::Serialize;

use crate::rules::{Certainty, Severity};

/// Longest excerpt carried by a finding.
pub const MAX_EXCERPT_BYTES: usize = 120;

/// One reported defect instance, tied to a file position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub file: PathBuf,
    /// 1-indexed.
    pub line: usize,
    /// 1-indexed byte column of the match start.
    pub column: usize,
    pub rule: &'static str,
    pub severity: Severity,
    pub certainty: Certainty,
    pub excerpt: String,
}

impl Finding {
    /// Trims and bounds `text` to the excerpt limit on a char boundary.
    #[must_use]
    pub fn excerpt_of(text: &str) -> String {
        let trimmed = text.trim();
        if trimmed.len() <= MAX_EXCERPT_BYTES {
            return trimmed.to_string();
        }

        let mut end = MAX_EXCERPT_BYTES;
        while !trimmed.is_char_boundary(end) {
            end -= 1;
        }
        trimmed[..end].to_string()
    }
}

/// Result of one scan invocation. Findings are order-stable: input file
/// order first, then discovery order within each file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub findings: Vec<Finding>,
    /// Files read and analyzed.
    pub files_analyzed: usize,
    /// Files that could not be read; coverage gap, never an error.
    pub files_skipped: usize,
}

impl ScanReport {
    #[must_use]
    pub fn count_at_severity(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    /// True when any finding is at least as severe as `floor`.
    #[must_use]
    pub fn has_findings_at(&self, floor: Severity) -> bool {
        self.findings.iter().any(|f| f.severity.meets(floor))
    }
}

#[cfg(test)]
#[path = "finding_tests.rs"]
mod tests;
