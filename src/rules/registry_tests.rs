use super::*;

use crate::rules::model::RuleMatcher;

#[test]
fn registry_compiles_every_builtin_pattern() {
    // Construction panics on an invalid pattern, so this is the whole test.
    let registry = RuleRegistry::new();
    assert!(!registry.is_empty());
}

#[test]
fn language_lookup_matches_linear_scan() {
    let registry = RuleRegistry::new();

    for &lang in Lang::ALL {
        let via_index: Vec<&str> = registry
            .lookup(&RuleQuery {
                language: Some(lang),
                ..RuleQuery::default()
            })
            .iter()
            .map(|r| r.name)
            .collect();

        let mut via_scan: Vec<&str> = registry
            .all()
            .iter()
            .filter(|r| r.language.is_none() || r.language == Some(lang))
            .map(|r| r.name)
            .collect();
        via_scan.sort_unstable();

        let mut sorted_index = via_index.clone();
        sorted_index.sort_unstable();
        assert_eq!(sorted_index, via_scan, "index diverged for {lang}");
    }
}

#[test]
fn universal_rules_appear_in_every_language_bucket() {
    let registry = RuleRegistry::new();
    let universal: Vec<&str> = registry.universal().iter().map(|r| r.name).collect();
    assert!(universal.contains(&"todo-comment"));

    for &lang in Lang::ALL {
        let names: Vec<&str> = registry
            .for_language(Some(lang))
            .iter()
            .map(|r| r.name)
            .collect();
        for name in &universal {
            assert!(names.contains(name), "{name} missing from {lang} bucket");
        }
    }
}

#[test]
fn undetected_language_yields_only_universal_rules() {
    let registry = RuleRegistry::new();
    let rules = registry.for_language(None);
    assert!(rules.iter().all(|r| r.is_universal()));
    assert!(!rules.is_empty());
}

#[test]
fn severity_lookup_intersects_with_remediation() {
    let registry = RuleRegistry::new();

    let found = registry.lookup(&RuleQuery {
        severity: Some(Severity::Critical),
        remediation: Some(Remediation::Flag),
        ..RuleQuery::default()
    });
    assert!(!found.is_empty());
    assert!(
        found
            .iter()
            .all(|r| r.severity == Severity::Critical && r.remediation == Remediation::Flag)
    );
}

#[test]
fn empty_query_returns_full_table() {
    let registry = RuleRegistry::new();
    assert_eq!(registry.lookup(&RuleQuery::default()).len(), registry.len());
}

#[test]
fn structural_rules_carry_thresholds() {
    let registry = RuleRegistry::new();
    for rule in registry.all() {
        match rule.matcher {
            RuleMatcher::Structural(_) => {
                assert!(rule.thresholds.is_some(), "{} missing thresholds", rule.name);
            }
            RuleMatcher::Pattern(_) => {
                assert!(rule.thresholds.is_none(), "{} has stray thresholds", rule.name);
            }
        }
    }
}
