use super::*;

#[test]
fn matches_plain_literal() {
    let glob = CompiledGlob::compile("src/main.rs");
    assert!(glob.is_match("src/main.rs"));
    assert!(!glob.is_match("src/main_rs"));
    assert!(!glob.is_match("other/src/main.rs"));
}

#[test]
fn single_wildcard_matches_any_sequence() {
    let glob = CompiledGlob::compile("*.test.js");
    assert!(glob.is_match("foo.test.js"));
    // Crosses directory separators: `*` is "match any sequence" here.
    assert!(glob.is_match("src/deep/foo.test.js"));
    assert!(!glob.is_match("foo.test.ts"));
}

#[test]
fn double_wildcard_is_identical_to_single() {
    let single = CompiledGlob::compile("*/fixtures/*");
    let double = CompiledGlob::compile("**/fixtures/**");

    for path in [
        "a/fixtures/b",
        "a/b/fixtures/c/d.rs",
        "fixtures/x",
        "src/lib.rs",
    ] {
        assert_eq!(
            single.is_match(path),
            double.is_match(path),
            "divergence on {path}"
        );
    }
}

#[test]
fn metacharacters_are_escaped() {
    let glob = CompiledGlob::compile("file.(1).rs");
    assert!(glob.is_match("file.(1).rs"));
    assert!(!glob.is_match("fileX(1)Xrs"));

    let glob = CompiledGlob::compile("a+b.rs");
    assert!(glob.is_match("a+b.rs"));
    assert!(!glob.is_match("aab.rs"));
}

#[test]
fn over_ceiling_pattern_matches_nothing() {
    let pattern = "*a*b*c*d*e*f*g*h*i*j*k*";
    assert!(pattern.matches('*').count() > MAX_WILDCARDS);

    let glob = CompiledGlob::compile(pattern);
    assert!(matches!(glob, CompiledGlob::Never));
    assert!(!glob.is_match("abcdefghijk"));
    assert!(!glob.is_match(""));
}

#[test]
fn exactly_ten_wildcards_still_compiles() {
    let pattern = "*a*b*c*d*e*f*g*h*i*";
    assert_eq!(pattern.matches('*').count(), 10);

    let glob = CompiledGlob::compile(pattern);
    assert!(matches!(glob, CompiledGlob::Matcher(_)));
    assert!(glob.is_match("xaxbxcxdxexfxgxhxix"));
}

#[test]
fn consecutive_stars_collapse() {
    let glob = CompiledGlob::compile("a****b");
    assert!(glob.is_match("ab"));
    assert!(glob.is_match("a/x/y/b"));
    assert!(!glob.is_match("a/x/y/c"));
}

#[test]
fn empty_pattern_matches_only_empty() {
    let glob = CompiledGlob::compile("");
    assert!(glob.is_match(""));
    assert!(!glob.is_match("x"));
}
