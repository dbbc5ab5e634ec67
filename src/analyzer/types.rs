use serde::{Deserialize, Serialize};

use crate::rules::Severity;

/// Overall verdict of a project-level analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Ok,
    Medium,
    High,
}

impl Verdict {
    #[must_use]
    pub const fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Critical | Severity::High => Self::High,
            Severity::Medium | Severity::Low => Self::Medium,
        }
    }

    #[must_use]
    pub const fn worst(self, other: Self) -> Self {
        if self.rank() >= other.rank() { self } else { other }
    }

    #[must_use]
    pub fn from_violations(violations: &[Violation]) -> Self {
        violations
            .iter()
            .map(|v| Self::from_severity(v.severity))
            .fold(Self::Ok, Self::worst)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }
}

/// Thresholds for the documentation-ratio analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocRatioThresholds {
    /// Bodies shorter than this are exempt.
    pub min_function_lines: usize,
    /// Flag when doc lines / body lines strictly exceeds this.
    pub max_ratio: f64,
}

impl DocRatioThresholds {
    pub const DEFAULT: Self = Self {
        min_function_lines: 5,
        max_ratio: 2.0,
    };
}

impl Default for DocRatioThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Thresholds for the comment-verbosity analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerbosityThresholds {
    /// Bodies with fewer code lines than this are exempt.
    pub min_code_lines: usize,
    /// Flag when comment lines / code lines strictly exceeds this.
    pub max_comment_ratio: f64,
}

impl VerbosityThresholds {
    pub const DEFAULT: Self = Self {
        min_code_lines: 10,
        max_comment_ratio: 1.0,
    };
}

impl Default for VerbosityThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Thresholds for the over-engineering metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureThresholds {
    /// Source files per exported symbol.
    pub file_ratio: f64,
    /// Non-comment, non-blank lines per exported symbol.
    pub lines_per_export: f64,
    /// Maximum directory nesting depth under the root.
    pub max_depth: usize,
}

impl StructureThresholds {
    pub const DEFAULT: Self = Self {
        file_ratio: 20.0,
        lines_per_export: 500.0,
        max_depth: 4,
    };
}

impl Default for StructureThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Thresholds for the claim-evidence analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimThresholds {
    /// A claimed category needs at least this many evidence matches.
    pub min_evidence_matches: usize,
}

impl ClaimThresholds {
    pub const DEFAULT: Self = Self {
        min_evidence_matches: 3,
    };
}

impl Default for ClaimThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A ratio-based or project-level defect report.
///
/// Unlike a `Finding`, a violation is not necessarily tied to one exact
/// source position; ratio violations carry their declaration line in the
/// details payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub severity: Severity,
    /// Human-readable measured value, e.g. "ratio 3.50".
    pub value: String,
    /// Human-readable limit it exceeded, e.g. "max 2.00".
    pub threshold: String,
    #[serde(flatten)]
    pub details: ViolationDetails,
}

impl Violation {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self.details {
            ViolationDetails::DocRatio { .. } => "doc_ratio",
            ViolationDetails::CommentRatio { .. } => "comment_ratio",
            ViolationDetails::FileProliferation { .. } => "file_proliferation",
            ViolationDetails::CodeDensity { .. } => "code_density",
            ViolationDetails::DirectoryDepth { .. } => "directory_depth",
            ViolationDetails::UnsubstantiatedClaim { .. } => "unsubstantiated_claim",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViolationDetails {
    DocRatio {
        line: usize,
        doc_lines: usize,
        body_lines: usize,
        ratio: f64,
    },
    CommentRatio {
        line: usize,
        comment_lines: usize,
        code_lines: usize,
        ratio: f64,
    },
    FileProliferation {
        source_files: usize,
        exports: usize,
        ratio: f64,
    },
    CodeDensity {
        code_lines: usize,
        exports: usize,
        lines_per_export: f64,
    },
    DirectoryDepth {
        depth: usize,
    },
    UnsubstantiatedClaim {
        category: String,
        buzzword: String,
        file: String,
        line: usize,
        evidence_count: usize,
    },
}

/// Repository-level metrics from the over-engineering analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureMetrics {
    pub source_files: usize,
    pub exports: usize,
    pub file_ratio: f64,
    pub code_lines: usize,
    pub lines_per_export: f64,
    pub max_depth: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureReport {
    pub metrics: StructureMetrics,
    pub violations: Vec<Violation>,
    pub verdict: Verdict,
}

/// A positive (assertive) quality claim found in docs or comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claim {
    pub category: String,
    pub buzzword: String,
    pub file: String,
    /// 1-indexed line within `file`.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimReport {
    pub claims_found: Vec<Claim>,
    pub violations: Vec<Violation>,
    pub verdict: Verdict,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
