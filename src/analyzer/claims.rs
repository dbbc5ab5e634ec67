use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::language::LanguageRegistry;
use crate::rules::Severity;

use super::structure::TRAVERSAL_DEPTH_CAP;
use super::types::{Claim, ClaimReport, ClaimThresholds, Verdict, Violation, ViolationDetails};

/// Buzzword vocabulary, mapped to the evidence category it claims.
const BUZZWORD_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "production",
        &[
            "production-ready",
            "production ready",
            "battle-tested",
            "battle tested",
            "enterprise-grade",
            "enterprise grade",
        ],
    ),
    (
        "performance",
        &[
            "blazing fast",
            "blazingly fast",
            "high-performance",
            "high performance",
            "lightning fast",
            "highly optimized",
        ],
    ),
    (
        "security",
        &["secure by default", "security-hardened", "bulletproof", "hardened"],
    ),
    (
        "reliability",
        &["fault-tolerant", "fault tolerant", "rock-solid", "rock solid", "robust"],
    ),
    (
        "scalability",
        &["infinitely scalable", "massively scalable", "web-scale", "scalable"],
    ),
    (
        "quality",
        &["fully tested", "well-tested", "well tested", "100% coverage", "comprehensively tested"],
    ),
];

/// Evidence signatures per category, searched across the full source tree
/// (tests included: tests are evidence).
const EVIDENCE_PATTERNS: &[(&str, &[&str])] = &[
    (
        "production",
        &[
            r"Result<|\.unwrap_or|try\s*\{|except\s+\w|catch\s*\(",
            r"log(?:ger)?\.(?:error|warn|info)|tracing::|log::",
            r"config|Config\b",
        ],
    ),
    (
        "performance",
        &[
            r"#\[bench\]|criterion|benchmark|\bbench\b",
            r"profil(?:e|er|ing)|perf_|flamegraph",
            r"cache|memoiz",
        ],
    ),
    (
        "security",
        &[
            r"validat(?:e|ion)|sanitiz|escap(?:e|ing)",
            r"auth(?:enticat|oriz)|jwt|oauth|csrf",
            r"encrypt|bcrypt|argon2|sha\d|hmac",
        ],
    ),
    (
        "reliability",
        &[
            r"retry|backoff|circuit[_ ]?breaker",
            r"timeout|deadline",
            r"recover|fallback|graceful",
        ],
    ),
    (
        "scalability",
        &[
            r"pool|shard|partition",
            r"async|concurren|parallel|rayon|tokio",
            r"queue|backpressure",
        ],
    ),
    (
        "quality",
        &[
            r"#\[test\]|\bdef test_|\bit\(|\bdescribe\(|func Test[A-Z]",
            r"assert|expect\(",
        ],
    ),
];

/// A claim is assertive only when phrased as a present fact.
static AFFIRMATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:is|are|was|built|designed|provides|offers|delivers|ensures|guarantees|fully|completely|truly|now)\b",
    )
    .expect("Invalid affirmative pattern")
});

/// Forward-looking or negated phrasing disqualifies a claim.
static ASPIRATIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:todo|fixme|should be|needs? to|plan(?:s|ned|ning)? to|aim(?:s|ing)? to|goal|eventually|in the future|not yet|isn't|is not|will be|wip|work in progress|roadmap|hopefully|hope to)\b",
    )
    .expect("Invalid aspirational pattern")
});

/// Comment markers accepted when mining source files for claims.
const COMMENT_MARKERS: &[&str] = &["///", "//!", "//", "#", "/*", "*", "\"\"\"", "'''"];

/// Finds quality buzzwords asserted in documentation and checks whether the
/// code carries matching evidence.
///
/// Pass one extracts positive claims from documentation files and source
/// comments; pass two counts category evidence across the full source tree.
/// Evidence counts are cached per category for the run, so ten
/// "production-ready" claims cost one scan.
#[must_use]
pub fn analyze_claim_evidence(root: &Path, thresholds: &ClaimThresholds) -> ClaimReport {
    let claims_found = extract_claims(root);

    let mut evidence_cache: HashMap<String, usize> = HashMap::new();
    let mut violations = Vec::new();

    for claim in &claims_found {
        let evidence_count = *evidence_cache
            .entry(claim.category.clone())
            .or_insert_with(|| count_evidence(root, &claim.category));

        if evidence_count < thresholds.min_evidence_matches {
            let severity = if evidence_count == 0 {
                Severity::High
            } else {
                Severity::Medium
            };
            violations.push(Violation {
                severity,
                value: format!("{evidence_count} evidence matches"),
                threshold: format!("min {}", thresholds.min_evidence_matches),
                details: ViolationDetails::UnsubstantiatedClaim {
                    category: claim.category.clone(),
                    buzzword: claim.buzzword.clone(),
                    file: claim.file.clone(),
                    line: claim.line,
                    evidence_count,
                },
            });
        }
    }

    let verdict = Verdict::from_violations(&violations);
    ClaimReport {
        claims_found,
        violations,
        verdict,
    }
}

fn extract_claims(root: &Path) -> Vec<Claim> {
    let registry = LanguageRegistry::new();
    let mut claims = Vec::new();

    for entry in walk(root) {
        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        if is_documentation_file(&relative) {
            if let Ok(content) = fs::read_to_string(path) {
                collect_line_claims(&content, &relative, false, &mut claims);
            }
        } else if registry.detect(path).is_some()
            && let Ok(content) = fs::read_to_string(path)
        {
            // Source files contribute claims only through comments.
            collect_line_claims(&content, &relative, true, &mut claims);
        }
    }

    claims
}

fn collect_line_claims(content: &str, file: &str, comments_only: bool, claims: &mut Vec<Claim>) {
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();
        if comments_only && !COMMENT_MARKERS.iter().any(|m| trimmed.starts_with(m)) {
            continue;
        }
        if !is_positive(line) {
            continue;
        }

        let lowered = line.to_lowercase();
        for (category, buzzwords) in BUZZWORD_CATEGORIES {
            if let Some(buzzword) = buzzwords.iter().find(|word| lowered.contains(*word)) {
                claims.push(Claim {
                    category: (*category).to_string(),
                    buzzword: (*buzzword).to_string(),
                    file: file.to_string(),
                    line: idx + 1,
                });
            }
        }
    }
}

/// Assertive phrasing present, aspirational phrasing absent.
fn is_positive(line: &str) -> bool {
    AFFIRMATIVE.is_match(line) && !ASPIRATIONAL.is_match(line)
}

/// Total evidence matches for one category across the source tree.
fn count_evidence(root: &Path, category: &str) -> usize {
    static COMPILED: LazyLock<HashMap<&'static str, Vec<Regex>>> = LazyLock::new(|| {
        EVIDENCE_PATTERNS
            .iter()
            .map(|(category, patterns)| {
                let compiled = patterns
                    .iter()
                    .map(|p| Regex::new(p).expect("Invalid evidence pattern"))
                    .collect();
                (*category, compiled)
            })
            .collect()
    });

    let Some(patterns) = COMPILED.get(category) else {
        return 0;
    };

    let registry = LanguageRegistry::new();
    let mut total = 0;

    for entry in walk(root) {
        if registry.detect(entry.path()).is_none() {
            continue;
        }
        let Ok(content) = fs::read_to_string(entry.path()) else {
            continue;
        };
        for pattern in patterns {
            total += pattern.find_iter(&content).count();
        }
    }

    total
}

fn walk(root: &Path) -> impl Iterator<Item = walkdir::DirEntry> {
    WalkDir::new(root)
        .max_depth(TRAVERSAL_DEPTH_CAP)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden_or_vendor(entry.path()))
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
}

fn is_hidden_or_vendor(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            (name.starts_with('.') && name.len() > 1)
                || matches!(name, "target" | "node_modules" | "vendor" | "dist" | "build")
        })
}

fn is_documentation_file(relative: &str) -> bool {
    let name = relative.rsplit('/').next().unwrap_or(relative);
    let upper = name.to_uppercase();
    if upper.starts_with("README") || upper.starts_with("CHANGELOG") || upper.starts_with("CONTRIBUTING") {
        return true;
    }

    let in_docs_dir = relative
        .split('/')
        .any(|segment| segment == "docs" || segment == "doc");
    in_docs_dir && (name.ends_with(".md") || name.ends_with(".rst") || name.ends_with(".txt"))
}

#[cfg(test)]
#[path = "claims_tests.rs"]
mod tests;
