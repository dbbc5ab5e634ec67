use super::*;

fn violation(severity: Severity) -> Violation {
    Violation {
        severity,
        value: "ratio 3.00".to_string(),
        threshold: "max 2.00".to_string(),
        details: ViolationDetails::DocRatio {
            line: 1,
            doc_lines: 9,
            body_lines: 3,
            ratio: 3.0,
        },
    }
}

#[test]
fn verdict_worst_prefers_high() {
    assert_eq!(Verdict::Ok.worst(Verdict::Medium), Verdict::Medium);
    assert_eq!(Verdict::Medium.worst(Verdict::High), Verdict::High);
    assert_eq!(Verdict::High.worst(Verdict::Ok), Verdict::High);
}

#[test]
fn verdict_from_empty_violations_is_ok() {
    assert_eq!(Verdict::from_violations(&[]), Verdict::Ok);
}

#[test]
fn verdict_from_violations_takes_worst_severity() {
    let violations = vec![violation(Severity::Low), violation(Severity::High)];
    assert_eq!(Verdict::from_violations(&violations), Verdict::High);

    let violations = vec![violation(Severity::Medium)];
    assert_eq!(Verdict::from_violations(&violations), Verdict::Medium);
}

#[test]
fn violation_kind_matches_details() {
    assert_eq!(violation(Severity::Medium).kind(), "doc_ratio");

    let depth = Violation {
        severity: Severity::Medium,
        value: "depth 6".to_string(),
        threshold: "max 4".to_string(),
        details: ViolationDetails::DirectoryDepth { depth: 6 },
    };
    assert_eq!(depth.kind(), "directory_depth");
}

#[test]
fn violation_serializes_with_type_tag() {
    let json = serde_json::to_value(violation(Severity::Medium)).unwrap();
    assert_eq!(json["type"], "doc_ratio");
    assert_eq!(json["severity"], "medium");
    assert_eq!(json["doc_lines"], 9);
}

#[test]
fn default_thresholds_match_documented_values() {
    assert_eq!(DocRatioThresholds::default().min_function_lines, 5);
    assert!((VerbosityThresholds::default().max_comment_ratio - 1.0).abs() < f64::EPSILON);
    assert_eq!(StructureThresholds::default().max_depth, 4);
    assert_eq!(ClaimThresholds::default().min_evidence_matches, 3);
}
