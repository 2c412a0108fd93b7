use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn fmerge(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fmerge").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn tree(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, body) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, body).unwrap();
    }
    dir
}

#[test]
fn test_help_flag() {
    let dir = tempfile::tempdir().unwrap();
    fmerge(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("merge files"));
}

#[test]
fn test_bad_flag_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    fmerge(dir.path())
        .args(["files", "--bogus"])
        .assert()
        .code(1);
}

#[test]
fn test_markdown_defaults() {
    let dir = tree(&[("a.md", "Hello"), ("b.md", "World"), ("c.txt", "ignored")]);
    fmerge(dir.path())
        .arg("md")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Markdown files have been merged into merged.md",
        ));

    let merged = fs::read_to_string(dir.path().join("merged.md")).unwrap();
    assert_eq!(merged, "Hello\n\nWorld\n\n");
}

#[test]
fn test_markdown_rerun_is_identical() {
    let dir = tree(&[("a.md", "Hello"), ("docs/b.md", "World")]);
    fmerge(dir.path()).arg("md").assert().success();
    let first = fs::read(dir.path().join("merged.md")).unwrap();

    fmerge(dir.path()).arg("md").assert().success();
    let second = fs::read(dir.path().join("merged.md")).unwrap();
    assert_eq!(first, second);
    assert_eq!(second, b"Hello\n\nWorld\n\n");
}

#[test]
fn test_go_files_are_fenced() {
    let dir = tree(&[("x.go", "package main")]);
    fmerge(dir.path())
        .args(["files", "-x", "go"])
        .assert()
        .success();

    let merged = fs::read_to_string(dir.path().join("merged.txt")).unwrap();
    assert_eq!(merged, "```go\npackage main\n```\n\n");
}

#[test]
fn test_txt_files_are_not_fenced() {
    let dir = tree(&[("notes.txt", "one"), ("sub/more.txt", "two"), ("x.go", "skip")]);
    fmerge(dir.path())
        .args(["files", "-o", "all.merged"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".txt files have been merged into all.merged"));

    let merged = fs::read_to_string(dir.path().join("all.merged")).unwrap();
    assert_eq!(merged, "one\n\ntwo\n\n");
}

#[test]
fn test_separator_names_each_file() {
    let dir = tree(&[("src/a.py", "a = 1"), ("src/b.py", "b = 2"), ("README.md", "no")]);
    fmerge(dir.path())
        .args(["files", "-p", "src", "-o", "out.md", "-x", "py", "-s"])
        .assert()
        .success();

    let merged = fs::read_to_string(dir.path().join("out.md")).unwrap();
    assert_eq!(
        merged,
        "// # a.py Contents:\n```python\na = 1\n```\n\n\
         // # b.py Contents:\n```python\nb = 2\n```\n\n"
    );
}

#[test]
fn test_no_matches_writes_empty_file() {
    let dir = tree(&[("c.txt", "ignored")]);
    fmerge(dir.path()).arg("md").assert().success();
    assert!(fs::read(dir.path().join("merged.md")).unwrap().is_empty());
}

#[test]
fn test_missing_root_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    fmerge(dir.path())
        .args(["files", "-p", "nope"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "Error: An error occurred while merging files",
        ));
    assert!(!dir.path().join("merged.txt").exists());
}

#[test]
fn test_unwritable_output_exits_three() {
    let dir = tree(&[("a.txt", "x")]);
    fmerge(dir.path())
        .args(["files", "-o", "missing/dir/out.txt"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("writing to file"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_keeps_previous_output() {
    let dir = tree(&[("a.md", "Hello"), ("merged.md", "previous")]);
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("b.md")).unwrap();
    fmerge(dir.path())
        .arg("md")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("b.md"));
    assert_eq!(
        fs::read_to_string(dir.path().join("merged.md")).unwrap(),
        "previous"
    );
}

#[test]
fn test_json_summary() {
    let dir = tree(&[("a.md", "Hello"), ("b.md", "World")]);
    let out = fmerge(dir.path())
        .args(["md", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["ok"], true);
    assert_eq!(value["files"], 2);
    assert_eq!(value["bytes"], 14);
    assert_eq!(value["output"], "merged.md");
}

#[test]
fn test_json_error_envelope() {
    let dir = tempfile::tempdir().unwrap();
    fmerge(dir.path())
        .args(["md", "-p", "nope", "--json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"walk_failed\""));
}

#[test]
fn test_dry_run_lists_without_writing() {
    let dir = tree(&[("a.md", "Hello"), ("z/b.md", "World"), ("c.txt", "no")]);
    fmerge(dir.path())
        .args(["md", "--dry-run", "--format", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.md"))
        .stdout(predicate::str::contains("b.md"))
        .stdout(predicate::str::contains("c.txt").not());
    assert!(!dir.path().join("merged.md").exists());
}

#[test]
fn test_dry_run_table_has_path_and_bytes() {
    let dir = tree(&[("a.md", "Hello")]);
    fmerge(dir.path())
        .args(["md", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PATH"))
        .stdout(predicate::str::contains("BYTES"))
        .stdout(predicate::str::contains("5"));
}
