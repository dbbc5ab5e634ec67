mod common;

use common::{CLEAN_RUST, JS_WITH_CONSOLE_LOG, JS_WITH_DEBUGGER, TestFixture};
use predicates::prelude::*;

#[test]
fn scan_empty_directory_exits_success() {
    let fixture = TestFixture::new();

    slop_guard!()
        .arg("scan")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 files analyzed"));
}

#[test]
fn scan_clean_file_exits_success() {
    let fixture = TestFixture::new();
    fixture.create_file("src/lib.rs", CLEAN_RUST);

    slop_guard!()
        .arg("scan")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("no findings"));
}

#[test]
fn debugger_statement_fails_with_default_severity() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.js", JS_WITH_DEBUGGER);

    slop_guard!()
        .arg("scan")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("debugger-statement"))
        .stdout(predicate::str::contains("app.js:2:1"));
}

#[test]
fn medium_finding_passes_under_default_fail_on() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.js", JS_WITH_CONSOLE_LOG);

    // console-log is medium; the default failure severity is high.
    slop_guard!()
        .arg("scan")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("console-log"));
}

#[test]
fn fail_on_flag_lowers_the_failure_severity() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.js", JS_WITH_CONSOLE_LOG);

    slop_guard!()
        .arg("scan")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--fail-on")
        .arg("medium")
        .assert()
        .code(1);
}

#[test]
fn severity_filter_hides_weaker_findings() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.js", "// TODO tidy up\ndebugger;\n");

    slop_guard!()
        .arg("scan")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--severity")
        .arg("high")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("debugger-statement"))
        .stdout(predicate::str::contains("todo-comment").not());
}

#[test]
fn language_filter_restricts_scanned_files() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.js", JS_WITH_DEBUGGER);
    fixture.create_file("src/tool.py", "print(1)\n");

    slop_guard!()
        .arg("scan")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--lang")
        .arg("python")
        .assert()
        .success()
        .stdout(predicate::str::contains("print-debug"))
        .stdout(predicate::str::contains("debugger-statement").not())
        .stdout(predicate::str::contains("1 files analyzed"));
}

#[test]
fn exclude_pattern_removes_files_from_discovery() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.js", JS_WITH_DEBUGGER);
    fixture.create_file("generated/bundle.js", JS_WITH_DEBUGGER);

    slop_guard!()
        .arg("scan")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("-x")
        .arg("**/generated/**")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("bundle.js").not())
        .stdout(predicate::str::contains("app.js"));
}

#[test]
fn ext_flag_limits_extensions() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.js", JS_WITH_DEBUGGER);
    fixture.create_file("src/tool.py", "print(1)\n");

    slop_guard!()
        .arg("scan")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--ext")
        .arg("py")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 files analyzed"));
}

#[test]
fn json_format_emits_machine_readable_report() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.js", JS_WITH_DEBUGGER);

    let output = slop_guard!()
        .arg("scan")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--format")
        .arg("json")
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["summary"]["files_analyzed"], 1);
    assert_eq!(json["summary"]["high"], 1);
    assert_eq!(json["findings"][0]["rule"], "debugger-statement");
    assert_eq!(json["findings"][0]["certainty"], "high");
}

#[test]
fn output_file_receives_the_report() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.js", JS_WITH_DEBUGGER);
    let report_path = fixture.path().join("report.json");

    slop_guard!()
        .arg("scan")
        .arg(fixture.path().join("src"))
        .arg("--no-config")
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(&report_path)
        .assert()
        .code(1);

    let content = std::fs::read_to_string(&report_path).unwrap();
    assert!(content.contains("debugger-statement"));
}

#[test]
fn scanning_explicit_file_list_works() {
    let fixture = TestFixture::new();
    fixture.create_file("a.js", JS_WITH_DEBUGGER);
    fixture.create_file("b.js", JS_WITH_CONSOLE_LOG);

    slop_guard!()
        .arg("scan")
        .arg(fixture.path().join("a.js"))
        .arg(fixture.path().join("b.js"))
        .arg("--no-config")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("2 files analyzed"));
}

#[test]
fn rule_exclusion_globs_skip_test_files() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.test.js", JS_WITH_CONSOLE_LOG);

    slop_guard!()
        .arg("scan")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--fail-on")
        .arg("medium")
        .assert()
        .success()
        .stdout(predicate::str::contains("console-log").not());
}

#[test]
fn hardcoded_secret_is_critical() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "src/settings.py",
        "secret_key = \"aVeryLongSecretValue123456\"\n",
    );

    slop_guard!()
        .arg("scan")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("hardcoded-secret"))
        .stdout(predicate::str::contains("critical"));
}

#[test]
fn quiet_mode_suppresses_stdout() {
    let fixture = TestFixture::new();
    fixture.create_file("src/app.js", JS_WITH_DEBUGGER);

    slop_guard!()
        .arg("scan")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--quiet")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}
