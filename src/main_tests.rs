use super::*;

use slop_guard::rules::Severity;

#[test]
fn config_template_parses_and_validates() {
    let config: Config = toml::from_str(config_template()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.scan.fail_on, Severity::High);
    assert_eq!(config.cache.compiled_globs, 50);
}

#[test]
fn rules_text_listing_includes_every_rule() {
    let registry = RuleRegistry::new();
    let output = run_rules_impl(&RulesArgs {
        language: None,
        severity: None,
        remediation: None,
        format: OutputFormat::Text,
    })
    .unwrap();

    for rule in registry.all() {
        assert!(output.contains(rule.name), "{} missing", rule.name);
    }
    assert!(output.contains(&format!("{} rule(s)", registry.len())));
}

#[test]
fn rules_json_listing_is_valid_json() {
    let output = run_rules_impl(&RulesArgs {
        language: None,
        severity: Some(Severity::Critical),
        remediation: None,
        format: OutputFormat::Json,
    })
    .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let rules = parsed.as_array().unwrap();
    assert!(!rules.is_empty());
    assert!(rules.iter().all(|r| r["severity"] == "critical"));
}

#[test]
fn project_root_prefers_first_directory() {
    let args = ScanArgs {
        paths: vec![PathBuf::from("src/lib.rs"), PathBuf::from("src")],
        config: None,
        ext: None,
        exclude: vec![],
        languages: vec![],
        severity: None,
        fail_on: None,
        project: false,
        no_gitignore: false,
        format: OutputFormat::Text,
        output: None,
    };

    // "src" exists relative to the crate root during tests.
    assert_eq!(project_root(&args), PathBuf::from("src"));
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
}
