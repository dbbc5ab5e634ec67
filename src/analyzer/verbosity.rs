use crate::language::CommentSyntax;
use crate::rules::Severity;

use super::functions::function_spans;
use super::types::{VerbosityThresholds, Violation, ViolationDetails};

/// Flags function bodies overgrown with inline comments.
///
/// Counts comment and code lines inside each body using the language's
/// comment syntax. Distinct from the doc-ratio check: this measures noise
/// inside the body, not documentation above the declaration.
#[must_use]
pub fn analyze_verbosity_ratio(
    content: &str,
    thresholds: &VerbosityThresholds,
    syntax: &CommentSyntax,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for span in function_spans(content) {
        let (comment_lines, code_lines) = classify_body(span.body(content), syntax);
        if code_lines < thresholds.min_code_lines || code_lines == 0 {
            continue;
        }

        #[allow(clippy::cast_precision_loss)]
        let ratio = round2(comment_lines as f64 / code_lines as f64);
        if ratio > thresholds.max_comment_ratio {
            violations.push(Violation {
                severity: Severity::Low,
                value: format!("ratio {ratio:.2}"),
                threshold: format!("max {:.2}", thresholds.max_comment_ratio),
                details: ViolationDetails::CommentRatio {
                    line: span.decl_line,
                    comment_lines,
                    code_lines,
                    ratio,
                },
            });
        }
    }

    violations
}

/// (comment, code) non-blank line counts for a text span.
///
/// A line is a comment when it starts with a line-comment marker or sits
/// inside a block comment; a code line with a trailing comment counts as
/// code.
pub(super) fn classify_body(body: &str, syntax: &CommentSyntax) -> (usize, usize) {
    let mut comment_lines = 0;
    let mut code_lines = 0;
    let mut block_end: Option<&'static str> = None;

    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(end) = block_end {
            comment_lines += 1;
            if trimmed.contains(end) {
                block_end = None;
            }
            continue;
        }

        if syntax
            .single_line
            .iter()
            .any(|marker| trimmed.starts_with(marker))
        {
            comment_lines += 1;
            continue;
        }

        if let Some((start, end)) = syntax
            .multi_line
            .iter()
            .copied()
            .find(|(start, _)| trimmed.starts_with(start))
        {
            comment_lines += 1;
            // Still open unless the same line also closes it.
            if !trimmed[start.len()..].contains(end) {
                block_end = Some(end);
            }
            continue;
        }

        code_lines += 1;
    }

    (comment_lines, code_lines)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "verbosity_tests.rs"]
mod tests;
