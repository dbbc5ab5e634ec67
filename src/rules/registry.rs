use indexmap::IndexMap;
use regex::Regex;

use crate::language::Lang;

use super::builtin::{RULE_TABLE, RuleSpec, SpecKind};
use super::model::{Remediation, RuleDefinition, RuleMatcher, Severity};

/// Immutable rule registry with derived lookup indices.
///
/// The base table and every index are derived once, at construction, from
/// the same literal table; nothing is mutated afterward, so the indices can
/// never diverge from the table.
pub struct RuleRegistry {
    rules: Vec<RuleDefinition>,
    by_language: IndexMap<Lang, Vec<usize>>,
    by_severity: IndexMap<Severity, Vec<usize>>,
    by_remediation: IndexMap<Remediation, Vec<usize>>,
    universal: Vec<usize>,
}

/// Lookup criteria. Unset fields match everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleQuery {
    pub language: Option<Lang>,
    pub severity: Option<Severity>,
    pub remediation: Option<Remediation>,
}

impl RuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        let rules: Vec<RuleDefinition> = RULE_TABLE.iter().map(compile_spec).collect();

        let mut by_language: IndexMap<Lang, Vec<usize>> =
            Lang::ALL.iter().map(|&lang| (lang, Vec::new())).collect();
        let mut by_severity: IndexMap<Severity, Vec<usize>> = IndexMap::new();
        let mut by_remediation: IndexMap<Remediation, Vec<usize>> = IndexMap::new();
        let mut universal = Vec::new();

        for (idx, rule) in rules.iter().enumerate() {
            match rule.language {
                Some(lang) => {
                    if let Some(bucket) = by_language.get_mut(&lang) {
                        bucket.push(idx);
                    }
                }
                None => {
                    // Universal rules appear in every language bucket.
                    universal.push(idx);
                    for bucket in by_language.values_mut() {
                        bucket.push(idx);
                    }
                }
            }
            by_severity.entry(rule.severity).or_default().push(idx);
            by_remediation.entry(rule.remediation).or_default().push(idx);
        }

        Self {
            rules,
            by_language,
            by_severity,
            by_remediation,
            universal,
        }
    }

    #[must_use]
    pub fn all(&self) -> &[RuleDefinition] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules with no language tag.
    #[must_use]
    pub fn universal(&self) -> Vec<&RuleDefinition> {
        self.universal.iter().map(|&idx| &self.rules[idx]).collect()
    }

    /// Rules applicable to a detected language; `None` (undetected) yields
    /// only the universal rules.
    #[must_use]
    pub fn for_language(&self, lang: Option<Lang>) -> Vec<&RuleDefinition> {
        lang.map_or_else(
            || self.universal(),
            |lang| {
                self.lookup(&RuleQuery {
                    language: Some(lang),
                    ..RuleQuery::default()
                })
            },
        )
    }

    /// Intersect the query criteria in one pass over the narrowest
    /// applicable pre-built index bucket. The full table is only walked
    /// when the query is empty.
    #[must_use]
    pub fn lookup(&self, query: &RuleQuery) -> Vec<&RuleDefinition> {
        let bucket: Option<&Vec<usize>> = if let Some(lang) = query.language {
            self.by_language.get(&lang)
        } else if let Some(severity) = query.severity {
            self.by_severity.get(&severity)
        } else if let Some(remediation) = query.remediation {
            self.by_remediation.get(&remediation)
        } else {
            return self.rules.iter().collect();
        };

        let Some(bucket) = bucket else {
            return Vec::new();
        };

        bucket
            .iter()
            .map(|&idx| &self.rules[idx])
            .filter(|rule| Self::matches_rest(rule, query))
            .collect()
    }

    fn matches_rest(rule: &RuleDefinition, query: &RuleQuery) -> bool {
        if let Some(severity) = query.severity
            && rule.severity != severity
        {
            return false;
        }
        if let Some(remediation) = query.remediation
            && rule.remediation != remediation
        {
            return false;
        }
        true
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn compile_spec(spec: &RuleSpec) -> RuleDefinition {
    let matcher = match spec.kind {
        // A rule pattern that fails to compile is a bug in the table, not
        // a runtime condition; the tests compile every entry.
        SpecKind::Pattern(pattern) => {
            RuleMatcher::Pattern(Regex::new(pattern).expect("Invalid built-in rule pattern"))
        }
        SpecKind::Structural(kind) => RuleMatcher::Structural(kind),
    };
    RuleDefinition {
        name: spec.name,
        matcher,
        language: spec.language,
        severity: spec.severity,
        remediation: spec.remediation,
        exclude_globs: spec.exclude_globs,
        thresholds: spec.thresholds,
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
