use crate::analyzer::{
    ClaimThresholds, DocRatioThresholds, StructureThresholds, VerbosityThresholds,
};
use crate::language::Lang;

use super::model::{Remediation, Severity, StructuralKind, Thresholds};

/// Declarative source of the built-in rule set.
///
/// Plain data only: patterns stay as strings here and are compiled exactly
/// once by `RuleRegistry::new`. Exclude globs use the engine's own wildcard
/// semantics (see `crate::exclusion`), where `*` and `**` both match any
/// character sequence.
pub(super) struct RuleSpec {
    pub name: &'static str,
    pub kind: SpecKind,
    pub language: Option<Lang>,
    pub severity: Severity,
    pub remediation: Remediation,
    pub exclude_globs: &'static [&'static str],
    pub thresholds: Option<Thresholds>,
}

pub(super) enum SpecKind {
    Pattern(&'static str),
    Structural(StructuralKind),
}

pub(super) const RULE_TABLE: &[RuleSpec] = &[
    // Debug leftovers
    RuleSpec {
        name: "console-log",
        kind: SpecKind::Pattern(r"console\.(log|debug|trace)\s*\("),
        language: Some(Lang::JavaScript),
        severity: Severity::Medium,
        remediation: Remediation::Remove,
        exclude_globs: &["**/*.test.*", "**/*.spec.*"],
        thresholds: None,
    },
    RuleSpec {
        name: "debugger-statement",
        kind: SpecKind::Pattern(r"^\s*debugger\s*;?\s*$"),
        language: Some(Lang::JavaScript),
        severity: Severity::High,
        remediation: Remediation::Remove,
        exclude_globs: &[],
        thresholds: None,
    },
    RuleSpec {
        name: "print-debug",
        kind: SpecKind::Pattern(r"^\s*print\s*\("),
        language: Some(Lang::Python),
        severity: Severity::Medium,
        remediation: Remediation::Remove,
        exclude_globs: &["**/test_*.py", "**/*_test.py", "**/conftest.py"],
        thresholds: None,
    },
    RuleSpec {
        name: "dbg-macro",
        kind: SpecKind::Pattern(r"\bdbg!\s*\("),
        language: Some(Lang::Rust),
        severity: Severity::Medium,
        remediation: Remediation::Remove,
        exclude_globs: &[],
        thresholds: None,
    },
    RuleSpec {
        name: "println-debug",
        kind: SpecKind::Pattern(r"\b(println|eprintln)!\s*\("),
        language: Some(Lang::Rust),
        severity: Severity::Low,
        remediation: Remediation::Flag,
        exclude_globs: &["**/main.rs", "**/build.rs", "**/demos/**"],
        thresholds: None,
    },
    RuleSpec {
        name: "fmt-println",
        kind: SpecKind::Pattern(r"\bfmt\.Println\s*\("),
        language: Some(Lang::Go),
        severity: Severity::Low,
        remediation: Remediation::Flag,
        exclude_globs: &["**/main.go", "**/cmd/**"],
        thresholds: None,
    },
    // Placeholders
    RuleSpec {
        name: "todo-comment",
        kind: SpecKind::Pattern(r"(?i)\b(todo|fixme|xxx|hack)\b"),
        language: None,
        severity: Severity::Low,
        remediation: Remediation::Annotate,
        exclude_globs: &[],
        thresholds: None,
    },
    RuleSpec {
        name: "placeholder-marker",
        kind: SpecKind::Pattern(
            r"(?i)\bplaceholder\b|implementation (goes|will go) here|to be implemented|coming soon",
        ),
        language: None,
        severity: Severity::Medium,
        remediation: Remediation::Replace,
        exclude_globs: &[],
        thresholds: None,
    },
    RuleSpec {
        name: "unimplemented-macro",
        kind: SpecKind::Pattern(r"\b(unimplemented|todo)!\s*\("),
        language: Some(Lang::Rust),
        severity: Severity::High,
        remediation: Remediation::Replace,
        exclude_globs: &[],
        thresholds: None,
    },
    RuleSpec {
        name: "not-implemented-error",
        kind: SpecKind::Pattern(r"\bNotImplementedError\b"),
        language: Some(Lang::Python),
        severity: Severity::High,
        remediation: Remediation::Replace,
        exclude_globs: &[],
        thresholds: None,
    },
    RuleSpec {
        name: "empty-catch",
        kind: SpecKind::Pattern(r"catch\s*(\([^)]*\))?\s*\{\s*\}"),
        language: Some(Lang::JavaScript),
        severity: Severity::High,
        remediation: Remediation::Replace,
        exclude_globs: &[],
        thresholds: None,
    },
    // Secrets
    RuleSpec {
        name: "aws-access-key",
        kind: SpecKind::Pattern(r"\bAKIA[0-9A-Z]{16}\b"),
        language: None,
        severity: Severity::Critical,
        remediation: Remediation::Flag,
        exclude_globs: &["**/*.example*", "**/fixtures/**", "**/testdata/**"],
        thresholds: None,
    },
    RuleSpec {
        name: "private-key-block",
        kind: SpecKind::Pattern(r"-----BEGIN (RSA |EC |DSA |OPENSSH |PGP )?PRIVATE KEY-----"),
        language: None,
        severity: Severity::Critical,
        remediation: Remediation::Flag,
        exclude_globs: &["**/fixtures/**", "**/testdata/**"],
        thresholds: None,
    },
    RuleSpec {
        name: "hardcoded-secret",
        kind: SpecKind::Pattern(
            r#"(?i)(api[_-]?key|secret[_-]?key|access[_-]?token|auth[_-]?token|password)\s*[:=]\s*["'][A-Za-z0-9+/_\-]{16,}["']"#,
        ),
        language: None,
        severity: Severity::Critical,
        remediation: Remediation::Flag,
        exclude_globs: &["**/*.test.*", "**/*.example*", "**/fixtures/**", "**/testdata/**"],
        thresholds: None,
    },
    // Structural rules
    RuleSpec {
        name: "excessive-docs",
        kind: SpecKind::Structural(StructuralKind::DocRatio),
        language: None,
        severity: Severity::Medium,
        remediation: Remediation::Annotate,
        exclude_globs: &[],
        thresholds: Some(Thresholds::DocRatio(DocRatioThresholds::DEFAULT)),
    },
    RuleSpec {
        name: "comment-noise",
        kind: SpecKind::Structural(StructuralKind::CommentVerbosity),
        language: None,
        severity: Severity::Low,
        remediation: Remediation::Annotate,
        exclude_globs: &[],
        thresholds: Some(Thresholds::Verbosity(VerbosityThresholds::DEFAULT)),
    },
    RuleSpec {
        name: "over-engineering",
        kind: SpecKind::Structural(StructuralKind::OverEngineering),
        language: None,
        severity: Severity::Medium,
        remediation: Remediation::Flag,
        exclude_globs: &[],
        thresholds: Some(Thresholds::Structure(StructureThresholds::DEFAULT)),
    },
    RuleSpec {
        name: "unsubstantiated-claims",
        kind: SpecKind::Structural(StructuralKind::ClaimEvidence),
        language: None,
        severity: Severity::Medium,
        remediation: Remediation::Flag,
        exclude_globs: &[],
        thresholds: Some(Thresholds::Claims(ClaimThresholds::DEFAULT)),
    },
];
