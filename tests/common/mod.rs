#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the slop-guard binary.
#[macro_export]
macro_rules! slop_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("slop-guard"))
    };
}

/// Temporary directory with helpers for integration test fixtures.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a slop-guard config file at the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".slop-guard.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A JavaScript file with one debugger statement (high severity).
pub const JS_WITH_DEBUGGER: &str = "function handler(ev) {\n  debugger;\n  return ev.id;\n}\n";

/// A JavaScript file with one console.log call (medium severity).
pub const JS_WITH_CONSOLE_LOG: &str = "function trace(x) {\n  console.log(x);\n  return x;\n}\n";

/// A Rust file with nothing to flag.
pub const CLEAN_RUST: &str = "pub fn add(a: u32, b: u32) -> u32 {\n    a + b\n}\n";
