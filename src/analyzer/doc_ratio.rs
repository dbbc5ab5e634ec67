use crate::language::CommentSyntax;
use crate::rules::Severity;

use super::functions::{function_spans, non_blank_lines};
use super::types::{DocRatioThresholds, Violation, ViolationDetails};

/// Flags functions whose preceding documentation block dwarfs the body.
///
/// The ratio compares non-blank doc lines against non-blank body lines,
/// with doc markers resolved from the file's comment syntax. Bodies
/// shorter than `min_function_lines` are exempt so a one-liner with a
/// short docstring never trips the check, and the comparison against
/// `max_ratio` is strictly greater-than.
#[must_use]
pub fn analyze_doc_ratio(
    content: &str,
    thresholds: &DocRatioThresholds,
    syntax: &CommentSyntax,
) -> Vec<Violation> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut violations = Vec::new();

    for span in function_spans(content) {
        let body_lines = non_blank_lines(span.body(content));
        if body_lines < thresholds.min_function_lines {
            continue;
        }

        let doc_lines = doc_block_lines(&lines, span.decl_line, syntax);
        if doc_lines == 0 || body_lines == 0 {
            continue;
        }

        #[allow(clippy::cast_precision_loss)]
        let ratio = round2(doc_lines as f64 / body_lines as f64);
        if ratio > thresholds.max_ratio {
            violations.push(Violation {
                severity: Severity::Medium,
                value: format!("ratio {ratio:.2}"),
                threshold: format!("max {:.2}", thresholds.max_ratio),
                details: ViolationDetails::DocRatio {
                    line: span.decl_line,
                    doc_lines,
                    body_lines,
                    ratio,
                },
            });
        }
    }

    violations
}

/// Length of the comment block ending directly above the declaration.
///
/// Attribute lines (`#[must_use]`, `#![allow]`) sit between docs and the
/// declaration in Rust; they are transparent, neither counted nor block
/// breaking. A blank or code line breaks the block: detached prose is not
/// documentation for this function.
fn doc_block_lines(lines: &[&str], decl_line: usize, syntax: &CommentSyntax) -> usize {
    let mut count = 0;
    // decl_line is 1-indexed; start at the line above the declaration.
    for line in lines[..decl_line - 1].iter().rev() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            break;
        }
        if syntax.is_comment_line(trimmed) {
            count += 1;
        } else if !is_attribute_line(trimmed) {
            break;
        }
    }
    count
}

fn is_attribute_line(trimmed: &str) -> bool {
    trimmed.starts_with("#[") || trimmed.starts_with("#![")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "doc_ratio_tests.rs"]
mod tests;
