use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempTree;

fn chunky() -> Command {
    Command::new(env!("CARGO_BIN_EXE_chunky"))
}

fn worked_example() -> TempTree {
    TempTree::with_files("cli", &[("a.txt", "hello"), ("b.txt", "world"), (".chunkyignore", "b.txt\n")])
}

#[test]
fn shows_help() {
    chunky()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chunky"))
        .stdout(predicate::str::contains("--output-prefix"));
}

#[test]
fn shows_version() {
    chunky()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("chunky {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn worked_example_writes_two_artifacts() {
    let tree = worked_example();

    chunky()
        .arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 files to"))
        .stdout(predicate::str::contains("Wrote 0 files to"))
        .stdout(predicate::str::contains("chunk_2.txt"));

    assert_eq!(tree.artifacts(), vec!["chunk_1.txt", "chunk_2.txt"]);
    assert_eq!(tree.read_artifact("chunk_1.txt"), "<<<START: a.txt>>>\nhello\n<<<END: a.txt>>>\n\n");
    assert_eq!(tree.read_artifact("chunk_2.txt"), "");
}

#[test]
fn chunk_count_and_prefix_are_honoured() {
    let tree = TempTree::with_files("cli", &[("1.txt", "a"), ("2.txt", "b"), ("3.txt", "c"), ("4.txt", "d")]);

    chunky().arg(tree.path()).args(["-c", "3", "--output-prefix", "part"]).assert().success();

    assert_eq!(tree.artifacts(), vec!["part_1.txt", "part_2.txt", "part_3.txt"]);
    let first = tree.read_artifact("part_1.txt");
    assert!(first.contains("<<<START: 1.txt>>>") && first.contains("<<<START: 4.txt>>>"));
}

#[test]
fn out_of_range_chunk_count_fails_without_writing() {
    let tree = worked_example();
    for value in ["0", "-2", "100001", "1000000000000"] {
        chunky()
            .arg(tree.path())
            .args(["--chunks", value])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--chunks"));
    }
    assert!(!tree.output_dir().exists());
}

#[test]
fn missing_folder_fails() {
    let tree = TempTree::new("cli");
    chunky()
        .arg(tree.path().join("nope"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn file_instead_of_folder_fails() {
    let tree = TempTree::new("cli");
    let file = tree.write_file("plain.txt", "x");
    chunky()
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn empty_tree_reports_nothing_to_do() {
    let tree = TempTree::with_files("cli", &[(".chunkyignore", "*\n"), ("a.txt", "ignored")]);

    chunky()
        .arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No files found for chunking after applying ignore rules."));

    assert!(!tree.output_dir().exists());
}

#[test]
fn repeated_runs_do_not_chunk_previous_output() {
    let tree = worked_example();

    chunky().arg(tree.path()).assert().success();
    let first = tree.read_artifact("chunk_1.txt");
    chunky().arg(tree.path()).assert().success();

    assert_eq!(tree.read_artifact("chunk_1.txt"), first);
    assert!(!tree.read_artifact("chunk_2.txt").contains("chunkies/"));
}

#[test]
fn nearer_ignore_file_wins() {
    let tree = TempTree::with_files(
        "cli",
        &[
            ("a/.chunkyignore", "*.log\n"),
            ("a/b/.chunkyignore", "!keep.log\n"),
            ("a/b/keep.log", "kept"),
            ("a/other.log", "dropped"),
        ],
    );

    chunky().arg(tree.path()).args(["-c", "1"]).assert().success();

    let text = tree.read_artifact("chunk_1.txt");
    assert_eq!(text, "<<<START: a/b/keep.log>>>\nkept\n<<<END: a/b/keep.log>>>\n\n");
}

#[test]
fn json_output_lists_chunks() {
    let tree = worked_example();

    let output = chunky().arg(tree.path()).arg("--json").output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(value["chunks"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["chunks"][0]["file_count"], 1);
}

#[test]
fn quiet_prints_nothing() {
    let tree = worked_example();
    chunky().arg(tree.path()).arg("-q").assert().success().stdout(predicate::str::is_empty());
    assert_eq!(tree.artifacts().len(), 2);
}

#[test]
fn dry_run_leaves_tree_untouched() {
    let tree = worked_example();
    chunky()
        .arg(tree.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would write 1 files to"));
    assert!(!tree.output_dir().exists());
}
