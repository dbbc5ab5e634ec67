use super::*;

fn finding(severity: Severity) -> Finding {
    Finding {
        file: PathBuf::from("src/app.js"),
        line: 3,
        column: 5,
        rule: "console-log",
        severity,
        certainty: Certainty::High,
        excerpt: "console.log(x)".to_string(),
    }
}

#[test]
fn excerpt_is_trimmed() {
    assert_eq!(Finding::excerpt_of("   padded   "), "padded");
}

#[test]
fn excerpt_is_bounded() {
    let long = "x".repeat(500);
    let excerpt = Finding::excerpt_of(&long);
    assert_eq!(excerpt.len(), MAX_EXCERPT_BYTES);
}

#[test]
fn excerpt_respects_char_boundaries() {
    // 60 two-byte characters: byte 120 splits none, but one more pushes
    // the cut into the middle of a character.
    let text = "é".repeat(61);
    let excerpt = Finding::excerpt_of(&text);
    assert!(excerpt.len() <= MAX_EXCERPT_BYTES);
    assert_eq!(excerpt, "é".repeat(60));
}

#[test]
fn severity_counts_are_per_tier() {
    let report = ScanReport {
        findings: vec![
            finding(Severity::High),
            finding(Severity::High),
            finding(Severity::Low),
        ],
        files_analyzed: 1,
        files_skipped: 0,
    };

    assert_eq!(report.count_at_severity(Severity::High), 2);
    assert_eq!(report.count_at_severity(Severity::Low), 1);
    assert_eq!(report.count_at_severity(Severity::Critical), 0);
}

#[test]
fn has_findings_at_uses_severity_floor() {
    let report = ScanReport {
        findings: vec![finding(Severity::Medium)],
        files_analyzed: 1,
        files_skipped: 0,
    };

    assert!(report.has_findings_at(Severity::Low));
    assert!(report.has_findings_at(Severity::Medium));
    assert!(!report.has_findings_at(Severity::High));
}

#[test]
fn finding_serializes_flat() {
    let json = serde_json::to_value(finding(Severity::High)).unwrap();
    assert_eq!(json["rule"], "console-log");
    assert_eq!(json["severity"], "high");
    assert_eq!(json["certainty"], "high");
    assert_eq!(json["line"], 3);
}
