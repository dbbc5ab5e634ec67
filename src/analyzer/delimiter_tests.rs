use super::*;

fn matching(content: &str) -> Option<usize> {
    let open = content.find('{').expect("fixture needs an opening brace");
    find_matching_delimiter(content, open)
}

#[test]
fn matches_flat_braces() {
    let content = "{ a: 1 }";
    assert_eq!(matching(content), Some(7));
}

#[test]
fn matches_nested_braces() {
    let content = "{ a: { b: { c: 1 } } }";
    assert_eq!(matching(content), Some(content.len() - 1));
}

#[test]
fn braces_in_string_literals_are_ignored() {
    let content = r#"{ a: "}}}", b: '{' }"#;
    assert_eq!(matching(content), Some(content.len() - 1));
}

#[test]
fn escaped_quote_does_not_close_string() {
    let content = r#"{ a: "he said \"}\"" }"#;
    assert_eq!(matching(content), Some(content.len() - 1));
}

#[test]
fn braces_in_line_comment_are_ignored() {
    let content = "{\n  // ignore }}} these\n  x\n}";
    assert_eq!(matching(content), Some(content.len() - 1));
}

#[test]
fn braces_in_block_comment_are_ignored() {
    let content = "{ /* }}}{ */ x }";
    assert_eq!(matching(content), Some(content.len() - 1));
}

#[test]
fn template_interpolation_keeps_outer_count() {
    // The braces and quoted braces inside `${ … }` belong to the
    // interpolated expression, not the outer object literal.
    let content = "{ a: `${ b ? '{' : '}' }`, c: {} }";
    assert_eq!(matching(content), Some(content.len() - 1));
}

#[test]
fn nested_interpolation_objects_resolve() {
    let content = "{ a: `x${ fmt({ deep: '}' }) }y`, b: 2 }";
    assert_eq!(matching(content), Some(content.len() - 1));
}

#[test]
fn plain_backtick_string_hides_braces() {
    let content = "{ a: `}}}`, b: 1 }";
    assert_eq!(matching(content), Some(content.len() - 1));
}

#[test]
fn non_brace_index_returns_none() {
    assert_eq!(find_matching_delimiter("abc", 0), None);
    assert_eq!(find_matching_delimiter("{}", 5), None);
}

#[test]
fn unbalanced_input_returns_none() {
    assert_eq!(find_matching_delimiter("{ open forever", 0), None);
}

#[test]
fn match_beyond_window_returns_none() {
    let mut content = String::from("{");
    content.push_str(&"x".repeat(SCAN_WINDOW + 10));
    content.push('}');
    assert_eq!(find_matching_delimiter(&content, 0), None);
}

#[test]
fn match_inside_window_is_found() {
    let mut content = String::from("{");
    content.push_str(&"x".repeat(100));
    content.push('}');
    assert_eq!(find_matching_delimiter(&content, 0), Some(101));
}

#[test]
fn unterminated_string_resyncs_at_newline() {
    let content = "{\n  let s = \"broken\n  done()\n}";
    assert_eq!(matching(content), Some(content.len() - 1));
}
