use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analyzer::{
    ClaimThresholds, DocRatioThresholds, StructureThresholds, VerbosityThresholds,
};
use crate::language::Lang;

/// Severity of a rule or finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 3,
            Self::High => 2,
            Self::Medium => 1,
            Self::Low => 0,
        }
    }

    /// True when this severity is at least as severe as `floor`.
    #[must_use]
    pub const fn meets(self, floor: Self) -> bool {
        self.rank() >= floor.rank()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Suggested remediation for a finding. A hint for consumers; the engine
/// never mutates source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Remediation {
    Remove,
    Replace,
    Annotate,
    Flag,
    None,
}

impl Remediation {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Remove => "remove",
            Self::Replace => "replace",
            Self::Annotate => "annotate",
            Self::Flag => "flag",
            Self::None => "none",
        }
    }
}

impl std::str::FromStr for Remediation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remove" => Ok(Self::Remove),
            "replace" => Ok(Self::Replace),
            "annotate" => Ok(Self::Annotate),
            "flag" => Ok(Self::Flag),
            "none" => Ok(Self::None),
            _ => Err(format!("Unknown remediation: {s}")),
        }
    }
}

impl std::fmt::Display for Remediation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How confident the engine is that a finding is real slop.
///
/// Direct pattern hits are `High`; structural heuristics report `Medium`
/// or `Low`. Consumers use this to decide whether a fix can be
/// auto-applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Certainty {
    High,
    Medium,
    Low,
}

impl Certainty {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// The fixed set of structural analyses a rule can be resolved by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralKind {
    DocRatio,
    CommentVerbosity,
    OverEngineering,
    ClaimEvidence,
}

impl StructuralKind {
    /// File-scoped analyses run in the per-file scan loop; the rest operate
    /// on a repository root.
    #[must_use]
    pub const fn is_file_scoped(self) -> bool {
        matches!(self, Self::DocRatio | Self::CommentVerbosity)
    }
}

/// How a rule matches: a compiled pattern, or a named structural analysis.
#[derive(Debug)]
pub enum RuleMatcher {
    Pattern(Regex),
    Structural(StructuralKind),
}

/// Rule-specific numeric parameters. Present only on structural rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Thresholds {
    DocRatio(DocRatioThresholds),
    Verbosity(VerbosityThresholds),
    Structure(StructureThresholds),
    Claims(ClaimThresholds),
}

/// A single slop rule. Rules are built once at registry construction and
/// never mutated afterward.
#[derive(Debug)]
pub struct RuleDefinition {
    pub name: &'static str,
    pub matcher: RuleMatcher,
    /// `None` means the rule applies to every language.
    pub language: Option<Lang>,
    pub severity: Severity,
    pub remediation: Remediation,
    /// Files matching any of these globs are skipped for this rule.
    pub exclude_globs: &'static [&'static str],
    pub thresholds: Option<Thresholds>,
}

impl RuleDefinition {
    #[must_use]
    pub const fn is_universal(&self) -> bool {
        self.language.is_none()
    }

    #[must_use]
    pub const fn structural_kind(&self) -> Option<StructuralKind> {
        match self.matcher {
            RuleMatcher::Pattern(_) => None,
            RuleMatcher::Structural(kind) => Some(kind),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
