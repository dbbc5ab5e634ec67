use std::sync::LazyLock;

use regex::Regex;

use super::delimiter::find_matching_delimiter;

/// Function-like declaration keywords across the supported families.
/// Go method receivers (`func (r *T) Name`) are allowed before the name.
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:(?:async|unsafe|const|export|default|static|public|private|protected)\s+)*(?P<kw>fn|function|func|def)\s+(?:\([^)]*\)\s*)?[A-Za-z_]",
    )
    .expect("Invalid declaration pattern")
});

/// Longest distance from a declaration's start the body brace may sit at.
/// Long parameter lists fit; an unrelated brace further down does not get
/// mistaken for the body.
const BODY_SEARCH_WINDOW: usize = 300;

/// A function-like declaration with a brace-delimited body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSpan {
    /// 1-indexed line of the declaration.
    pub decl_line: usize,
    /// Byte index of the declaration line's first character.
    pub decl_offset: usize,
    /// Byte index of the opening brace.
    pub open: usize,
    /// Byte index of the matching closing brace.
    pub close: usize,
}

impl FunctionSpan {
    /// The body text strictly between the braces.
    #[must_use]
    pub fn body<'a>(&self, content: &'a str) -> &'a str {
        &content[self.open + 1..self.close]
    }
}

/// Locates every function-like declaration whose body can be resolved.
///
/// Declarations without a reachable body brace (bindingless prototypes,
/// Python `def`, or a desynchronized parse) are silently dropped; one bad
/// declaration never abandons the rest of the file.
#[must_use]
pub fn function_spans(content: &str) -> Vec<FunctionSpan> {
    let mut spans = Vec::new();
    let mut offset = 0;

    for (line_idx, line) in content.split('\n').enumerate() {
        if let Some(captures) = DECLARATION.captures(line) {
            // Python bodies are indentation-delimited; the brace scan below
            // would latch onto an unrelated brace inside the body.
            let keyword = captures.name("kw").map_or("", |m| m.as_str());
            if keyword != "def"
                && let Some(open) = find_body_brace(content, offset)
                && let Some(close) = find_matching_delimiter(content, open)
            {
                spans.push(FunctionSpan {
                    decl_line: line_idx + 1,
                    decl_offset: offset,
                    open,
                    close,
                });
            }
        }
        offset += line.len() + 1;
    }

    spans
}

/// First `{` after the declaration start, unless a `;` ends the statement
/// first (trait methods, C prototypes).
fn find_body_brace(content: &str, decl_offset: usize) -> Option<usize> {
    let window_end = decl_offset
        .saturating_add(BODY_SEARCH_WINDOW)
        .min(content.len());
    let bytes = content.as_bytes();

    for (rel, &byte) in bytes[decl_offset..window_end].iter().enumerate() {
        match byte {
            b'{' => return Some(decl_offset + rel),
            b';' => return None,
            _ => {}
        }
    }
    None
}

/// Count of non-blank lines in a text span.
#[must_use]
pub(super) fn non_blank_lines(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}

#[cfg(test)]
#[path = "functions_tests.rs"]
mod tests;
