use super::*;

use std::fs;

use tempfile::TempDir;

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn rust_only() -> GlobFilter {
    GlobFilter::new(vec!["rs".to_string()], &[]).unwrap()
}

#[test]
fn directory_scan_returns_sorted_matches() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/b.rs", "");
    write_file(dir.path(), "src/a.rs", "");
    write_file(dir.path(), "src/notes.md", "");

    let files = DirectoryScanner::new(rust_only()).scan(dir.path()).unwrap();

    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("a.rs"));
    assert!(files[1].ends_with("b.rs"));
}

#[test]
fn scanning_a_file_returns_it_directly() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "one.rs", "");
    let target = dir.path().join("one.rs");

    let files = DirectoryScanner::new(rust_only()).scan(&target).unwrap();
    assert_eq!(files, vec![target]);
}

#[test]
fn excluded_directories_are_filtered() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/lib.rs", "");
    write_file(dir.path(), "target/gen.rs", "");

    let filter = GlobFilter::new(vec!["rs".to_string()], &["**/target/**".to_string()]).unwrap();
    let files = DirectoryScanner::new(filter).scan(dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("src/lib.rs"));
}

#[test]
fn gitignore_scanner_skips_ignored_files() {
    let dir = TempDir::new().unwrap();
    // The ignore walker only consults .gitignore inside a repository.
    fs::create_dir_all(dir.path().join(".git")).unwrap();
    write_file(dir.path(), ".gitignore", "generated.rs\n");
    write_file(dir.path(), "src/lib.rs", "");
    write_file(dir.path(), "src/generated.rs", "");

    let files = GitignoreScanner::new(rust_only()).scan(dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("src/lib.rs"));
}

#[test]
fn gitignore_scanner_outside_repo_walks_everything() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.rs", "");
    write_file(dir.path(), "b.rs", "");

    let files = GitignoreScanner::new(rust_only()).scan(dir.path()).unwrap();
    assert_eq!(files.len(), 2);
}

#[test]
fn missing_root_yields_empty_set() {
    let dir = TempDir::new().unwrap();
    let gone = dir.path().join("missing");

    let files = DirectoryScanner::new(rust_only()).scan(&gone).unwrap();
    assert!(files.is_empty());
}
