use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analyzer::{
    ClaimThresholds, DocRatioThresholds, StructureThresholds, VerbosityThresholds, Violation,
    ViolationDetails, analyze_doc_ratio, analyze_verbosity_ratio,
};
use crate::exclusion::{CacheCapacities, ExclusionMatcher};
use crate::language::{Lang, LanguageRegistry};
use crate::rules::{Certainty, RuleDefinition, RuleMatcher, RuleRegistry, Severity, StructuralKind};

use super::finding::{Finding, ScanReport};

/// Knobs for one scan invocation. Threshold defaults mirror the builtin
/// rule table; config and CLI overrides land here before the engine is
/// built.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Restrict the scan to these language families; empty means all.
    pub languages: Vec<Lang>,
    /// Drop rules below this severity before matching.
    pub min_severity: Option<Severity>,
    pub doc_ratio: DocRatioThresholds,
    pub verbosity: VerbosityThresholds,
    pub structure: StructureThresholds,
    pub claims: ClaimThresholds,
    pub caches: CacheCapacities,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            min_severity: None,
            doc_ratio: DocRatioThresholds::DEFAULT,
            verbosity: VerbosityThresholds::DEFAULT,
            structure: StructureThresholds::DEFAULT,
            claims: ClaimThresholds::DEFAULT,
            caches: CacheCapacities::DEFAULT,
        }
    }
}

/// Per-file scan outcome, kept internal so the report arithmetic stays in
/// one place.
enum FileOutcome {
    Findings(Vec<Finding>),
    /// Dropped by the language filter; never read.
    Filtered,
    /// Could not be read; skipped without a finding.
    Unreadable,
}

/// Runs phase-1 pattern rules and phase-2 file-scoped structural analyzers
/// over a file set.
pub struct ScanEngine {
    registry: RuleRegistry,
    languages: LanguageRegistry,
    exclusions: ExclusionMatcher,
    options: ScanOptions,
}

impl ScanEngine {
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self {
            registry: RuleRegistry::new(),
            languages: LanguageRegistry::new(),
            exclusions: ExclusionMatcher::new(options.caches),
            options,
        }
    }

    #[must_use]
    pub const fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scans `files` in order and returns an order-stable report.
    #[must_use]
    pub fn scan(&self, files: &[PathBuf]) -> ScanReport {
        self.scan_with(files, || {})
    }

    /// Like [`scan`](Self::scan), invoking `on_file` as each file finishes.
    /// Files fan out across the rayon pool; the exclusion caches are the
    /// only shared mutable state and are lock-protected.
    #[must_use]
    pub fn scan_with(&self, files: &[PathBuf], on_file: impl Fn() + Sync) -> ScanReport {
        let outcomes: Vec<FileOutcome> = files
            .par_iter()
            .map(|path| {
                let outcome = self.scan_file(path);
                on_file();
                outcome
            })
            .collect();

        let mut findings = Vec::new();
        let mut files_analyzed = 0;
        let mut files_skipped = 0;
        for outcome in outcomes {
            match outcome {
                FileOutcome::Findings(mut file_findings) => {
                    files_analyzed += 1;
                    findings.append(&mut file_findings);
                }
                FileOutcome::Filtered => {}
                FileOutcome::Unreadable => files_skipped += 1,
            }
        }

        ScanReport {
            findings,
            files_analyzed,
            files_skipped,
        }
    }

    fn scan_file(&self, path: &Path) -> FileOutcome {
        let lang = self.languages.detect(path);
        if !self.options.languages.is_empty()
            && !lang.is_some_and(|lang| self.options.languages.contains(&lang))
        {
            return FileOutcome::Filtered;
        }

        // Binary or unreadable content degrades to a coverage gap.
        let Ok(content) = fs::read_to_string(path) else {
            return FileOutcome::Unreadable;
        };

        let path_str = path.to_string_lossy().replace('\\', "/");
        let mut findings = Vec::new();

        for rule in self.registry.for_language(lang) {
            if let Some(floor) = self.options.min_severity
                && !rule.severity.meets(floor)
            {
                continue;
            }
            if !rule.exclude_globs.is_empty()
                && self.exclusions.is_excluded(&path_str, rule.exclude_globs)
            {
                continue;
            }

            match &rule.matcher {
                RuleMatcher::Pattern(pattern) => {
                    Self::match_pattern(rule, pattern, &content, path, &mut findings);
                }
                RuleMatcher::Structural(kind) => {
                    self.run_structural(*kind, rule, &content, path, lang, &mut findings);
                }
            }
        }

        FileOutcome::Findings(findings)
    }

    /// One finding per matching line; the first hit in a line stands for
    /// the rest.
    fn match_pattern(
        rule: &RuleDefinition,
        pattern: &regex::Regex,
        content: &str,
        path: &Path,
        findings: &mut Vec<Finding>,
    ) {
        for (idx, line) in content.lines().enumerate() {
            if let Some(hit) = pattern.find(line) {
                findings.push(Finding {
                    file: path.to_path_buf(),
                    line: idx + 1,
                    column: hit.start() + 1,
                    rule: rule.name,
                    severity: rule.severity,
                    certainty: Certainty::High,
                    excerpt: Finding::excerpt_of(line),
                });
            }
        }
    }

    fn run_structural(
        &self,
        kind: StructuralKind,
        rule: &RuleDefinition,
        content: &str,
        path: &Path,
        lang: Option<Lang>,
        findings: &mut Vec<Finding>,
    ) {
        // Both ratio analyses need the language's comment syntax;
        // undetected files skip them rather than guessing.
        let Some(lang) = lang else { return };
        let syntax = lang.comment_syntax();

        let (violations, certainty) = match kind {
            StructuralKind::DocRatio => (
                analyze_doc_ratio(content, &self.options.doc_ratio, syntax),
                Certainty::Medium,
            ),
            StructuralKind::CommentVerbosity => (
                analyze_verbosity_ratio(content, &self.options.verbosity, syntax),
                Certainty::Low,
            ),
            // Project-scoped analyses run from the project entry point.
            StructuralKind::OverEngineering | StructuralKind::ClaimEvidence => return,
        };

        for violation in violations {
            findings.push(Finding {
                file: path.to_path_buf(),
                line: violation_line(&violation),
                column: 1,
                rule: rule.name,
                severity: violation.severity,
                certainty,
                excerpt: format!("{} (limit {})", violation.value, violation.threshold),
            });
        }
    }
}

fn violation_line(violation: &Violation) -> usize {
    match violation.details {
        ViolationDetails::DocRatio { line, .. } | ViolationDetails::CommentRatio { line, .. } => {
            line
        }
        _ => 1,
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
