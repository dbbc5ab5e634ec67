use std::collections::HashMap;
use std::path::Path;

/// Comment syntax for a language family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    pub single_line: &'static [&'static str],
    pub multi_line: &'static [(&'static str, &'static str)],
}

impl CommentSyntax {
    /// True when a trimmed line opens, closes, or continues a comment in
    /// this family. `*` continuation lines only count for families with
    /// `/* */` blocks, so a leading `#` is a comment in Python but not in
    /// Rust.
    #[must_use]
    pub fn is_comment_line(&self, trimmed: &str) -> bool {
        self.single_line
            .iter()
            .any(|marker| trimmed.starts_with(marker))
            || self
                .multi_line
                .iter()
                .any(|(start, end)| trimmed.starts_with(start) || trimmed.starts_with(end))
            || (trimmed.starts_with('*') && self.multi_line.iter().any(|(start, _)| *start == "/*"))
    }
}

const RUST_SYNTAX: CommentSyntax = CommentSyntax {
    single_line: &["///", "//!", "//"],
    multi_line: &[("/*", "*/")],
};

const C_FAMILY_SYNTAX: CommentSyntax = CommentSyntax {
    single_line: &["//"],
    multi_line: &[("/*", "*/")],
};

const PYTHON_SYNTAX: CommentSyntax = CommentSyntax {
    single_line: &["#"],
    multi_line: &[("\"\"\"", "\"\"\""), ("'''", "'''")],
};

/// Language family of a source file.
///
/// Families group languages that share comment syntax and slop idioms:
/// TypeScript belongs to the `JavaScript` family, since every rule that
/// applies to one applies to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Rust,
    Go,
    Python,
    JavaScript,
    C,
    Cpp,
}

impl Lang {
    pub const ALL: &'static [Self] = &[
        Self::Rust,
        Self::Go,
        Self::Python,
        Self::JavaScript,
        Self::C,
        Self::Cpp,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rust => "Rust",
            Self::Go => "Go",
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::C => "C",
            Self::Cpp => "C++",
        }
    }

    #[must_use]
    pub const fn comment_syntax(self) -> &'static CommentSyntax {
        match self {
            Self::Rust => &RUST_SYNTAX,
            Self::Python => &PYTHON_SYNTAX,
            Self::Go | Self::JavaScript | Self::C | Self::Cpp => &C_FAMILY_SYNTAX,
        }
    }
}

impl std::str::FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rust" | "rs" => Ok(Self::Rust),
            "go" => Ok(Self::Go),
            "python" | "py" => Ok(Self::Python),
            "javascript" | "js" | "typescript" | "ts" => Ok(Self::JavaScript),
            "c" => Ok(Self::C),
            "cpp" | "c++" => Ok(Self::Cpp),
            _ => Err(format!("Unknown language: {s}")),
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Extension → family table. The registry and the default scan extensions
/// are both derived from this single table.
const EXTENSION_TABLE: &[(&str, Lang)] = &[
    ("rs", Lang::Rust),
    ("go", Lang::Go),
    ("py", Lang::Python),
    ("pyi", Lang::Python),
    ("js", Lang::JavaScript),
    ("mjs", Lang::JavaScript),
    ("cjs", Lang::JavaScript),
    ("jsx", Lang::JavaScript),
    ("ts", Lang::JavaScript),
    ("tsx", Lang::JavaScript),
    ("mts", Lang::JavaScript),
    ("cts", Lang::JavaScript),
    ("c", Lang::C),
    ("h", Lang::C),
    ("cpp", Lang::Cpp),
    ("hpp", Lang::Cpp),
    ("cc", Lang::Cpp),
    ("cxx", Lang::Cpp),
    ("hxx", Lang::Cpp),
];

/// Every extension the engine recognizes, in table order.
#[must_use]
pub fn known_extensions() -> Vec<String> {
    EXTENSION_TABLE
        .iter()
        .map(|(ext, _)| (*ext).to_string())
        .collect()
}

#[derive(Debug)]
pub struct LanguageRegistry {
    extension_map: HashMap<&'static str, Lang>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            extension_map: EXTENSION_TABLE.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<Lang> {
        self.extension_map.get(ext).copied()
    }

    /// Detect the language family of a file from its extension.
    #[must_use]
    pub fn detect(&self, path: &Path) -> Option<Lang> {
        let ext = path.extension()?.to_str()?;
        self.get_by_extension(ext)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
