use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::language::{Lang, LanguageRegistry};
use crate::rules::Severity;

use super::types::{StructureMetrics, StructureReport, StructureThresholds, Verdict, Violation, ViolationDetails};
use super::verbosity::classify_body;

/// Hard cap on directory traversal depth. Guarantees termination on
/// pathological trees; real projects never approach it.
pub const TRAVERSAL_DEPTH_CAP: usize = 20;

/// Directories that are never part of the source tree.
const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "target",
    "node_modules",
    "vendor",
    "dist",
    "build",
    "out",
    "__pycache__",
    ".venv",
    "venv",
];

/// Files whose exports define the project's public surface.
const ENTRY_POINTS: &[&str] = &[
    "src/lib.rs",
    "src/main.rs",
    "lib.rs",
    "main.rs",
    "src/index.js",
    "src/index.ts",
    "index.js",
    "index.ts",
    "src/__init__.py",
    "__init__.py",
    "main.go",
];

static RUST_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*pub\s+(?:(?:async|unsafe|const|extern)\s+)*(?:fn|struct|enum|trait|type|mod|use|static|const)\b")
        .expect("Invalid export pattern")
});
static JS_EXPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*export\b|^\s*module\.exports\b").expect("Invalid export pattern"));
static PYTHON_EXPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:def|class)\s+[A-Za-z_]").expect("Invalid export pattern"));
static GO_EXPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:func|type|var|const)\s+\(?[^)]*\)?\s*[A-Z]").expect("Invalid export pattern"));

/// Measures three independent over-engineering signals on a repository:
/// file count per exported symbol, code lines per exported symbol, and
/// directory nesting depth. Each signal flags on its own; one quiet signal
/// never suppresses another.
#[must_use]
pub fn analyze_over_engineering(root: &Path, thresholds: &StructureThresholds) -> StructureReport {
    let tree = SourceTree::collect(root);

    let exports = tree.count_exports();
    let code_lines = tree.count_code_lines();
    let divisor = exports.max(1);

    #[allow(clippy::cast_precision_loss)]
    let file_ratio = round2(tree.source_files.len() as f64 / divisor as f64);
    #[allow(clippy::cast_precision_loss)]
    let lines_per_export = round2(code_lines as f64 / divisor as f64);

    let metrics = StructureMetrics {
        source_files: tree.source_files.len(),
        exports,
        file_ratio,
        code_lines,
        lines_per_export,
        max_depth: tree.max_depth,
    };

    let mut violations = Vec::new();

    if file_ratio > thresholds.file_ratio {
        violations.push(Violation {
            severity: escalate(file_ratio, thresholds.file_ratio),
            value: format!("{file_ratio:.1} files per export"),
            threshold: format!("max {:.1}", thresholds.file_ratio),
            details: ViolationDetails::FileProliferation {
                source_files: metrics.source_files,
                exports,
                ratio: file_ratio,
            },
        });
    }

    if lines_per_export > thresholds.lines_per_export {
        violations.push(Violation {
            severity: escalate(lines_per_export, thresholds.lines_per_export),
            value: format!("{lines_per_export:.1} lines per export"),
            threshold: format!("max {:.1}", thresholds.lines_per_export),
            details: ViolationDetails::CodeDensity {
                code_lines,
                exports,
                lines_per_export,
            },
        });
    }

    if tree.max_depth > thresholds.max_depth {
        #[allow(clippy::cast_precision_loss)]
        let severity = escalate(tree.max_depth as f64, thresholds.max_depth as f64);
        violations.push(Violation {
            severity,
            value: format!("depth {}", tree.max_depth),
            threshold: format!("max {}", thresholds.max_depth),
            details: ViolationDetails::DirectoryDepth {
                depth: tree.max_depth,
            },
        });
    }

    let verdict = Verdict::from_violations(&violations);
    StructureReport {
        metrics,
        violations,
        verdict,
    }
}

/// Past 2x the limit the signal stops being a judgment call.
fn escalate(value: f64, threshold: f64) -> Severity {
    if value > threshold * 2.0 {
        Severity::High
    } else {
        Severity::Medium
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One bounded walk of the repository, shared by all three signals.
struct SourceTree {
    root: PathBuf,
    /// Source files excluding tests, with their detected language.
    source_files: Vec<(PathBuf, Lang)>,
    max_depth: usize,
}

impl SourceTree {
    fn collect(root: &Path) -> Self {
        let registry = LanguageRegistry::new();
        let mut source_files = Vec::new();
        let mut max_depth = 0;

        let walker = WalkDir::new(root)
            .max_depth(TRAVERSAL_DEPTH_CAP)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_excluded_dir(entry.path()));

        for entry in walker.filter_map(std::result::Result::ok) {
            if entry.file_type().is_dir() {
                max_depth = max_depth.max(entry.depth());
            } else if entry.file_type().is_file()
                && let Some(lang) = registry.detect(entry.path())
                && !is_test_path(entry.path())
            {
                source_files.push((entry.path().to_path_buf(), lang));
            }
        }

        Self {
            root: root.to_path_buf(),
            source_files,
            max_depth,
        }
    }

    /// Exported symbols, counted from conventional entry points. A project
    /// with no recognizable entry point falls back to counting across every
    /// source file, so the ratio stays meaningful rather than degenerate.
    fn count_exports(&self) -> usize {
        let entry_files: Vec<&(PathBuf, Lang)> = self
            .source_files
            .iter()
            .filter(|(path, _)| self.is_entry_point(path))
            .collect();

        let counted: Vec<&(PathBuf, Lang)> = if entry_files.is_empty() {
            self.source_files.iter().collect()
        } else {
            entry_files
        };

        counted
            .iter()
            .map(|(path, lang)| count_file_exports(path, *lang))
            .sum()
    }

    fn is_entry_point(&self, path: &Path) -> bool {
        path.strip_prefix(&self.root).is_ok_and(|rel| {
            let rel = rel.to_string_lossy().replace('\\', "/");
            ENTRY_POINTS.contains(&rel.as_str())
        })
    }

    fn count_code_lines(&self) -> usize {
        self.source_files
            .iter()
            .filter_map(|(path, lang)| {
                let content = fs::read_to_string(path).ok()?;
                let (_, code) = classify_body(&content, lang.comment_syntax());
                Some(code)
            })
            .sum()
    }
}

fn count_file_exports(path: &Path, lang: Lang) -> usize {
    let Ok(content) = fs::read_to_string(path) else {
        return 0;
    };
    let pattern: &Regex = match lang {
        Lang::Rust => &RUST_EXPORT,
        Lang::JavaScript => &JS_EXPORT,
        Lang::Python => &PYTHON_EXPORT,
        Lang::Go => &GO_EXPORT,
        // No reliable lexical export marker for the C family.
        Lang::C | Lang::Cpp => return 0,
    };
    content
        .lines()
        .filter(|line| pattern.is_match(line))
        .count()
}

fn is_excluded_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

/// Test files by path or filename convention.
pub(super) fn is_test_path(path: &Path) -> bool {
    let in_test_dir = path.components().any(|component| {
        matches!(
            component.as_os_str().to_str(),
            Some("tests" | "test" | "testdata" | "__tests__" | "spec")
        )
    });
    if in_test_dir {
        return true;
    }

    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            name.starts_with("test_")
                || name.contains(".test.")
                || name.contains(".spec.")
                || name.contains("_test.")
                || name.contains("_tests.")
                || name == "conftest.py"
        })
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
