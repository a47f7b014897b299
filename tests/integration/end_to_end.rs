// tests/integration/end_to_end.rs
use chunky::{Config, ConfigBuilder, OutputStyle, execute};
use chunky_domain::{ChunkCount, ChunkPlan};
use chunky_usecase::ChunkOutcome;

#[path = "../common/mod.rs"]
mod common;
use common::TempTree;

fn config(tree: &TempTree, chunks: usize) -> Config {
    ConfigBuilder::default()
        .root(tree.path())
        .count(ChunkCount::new(chunks).unwrap())
        .output(OutputStyle::Quiet)
        .build()
        .unwrap()
}

fn starts(text: &str) -> Vec<&str> {
    text.lines()
        .filter_map(|l| l.strip_prefix("<<<START: ").and_then(|l| l.strip_suffix(">>>")))
        .collect()
}

#[test]
fn single_chunk_holds_every_file_in_sorted_order() {
    let tree = TempTree::with_files(
        "e2e",
        &[("b.txt", "b"), ("a/z.txt", "z"), ("a.txt", "a"), (".hidden", "h"), ("C.txt", "c")],
    );

    let outcome = execute(&config(&tree, 1)).unwrap();

    assert_eq!(outcome.reports().len(), 1);
    assert_eq!(outcome.reports()[0].file_count, 5);
    let text = tree.read_artifact("chunk_1.txt");
    assert_eq!(starts(&text), vec![".hidden", "C.txt", "a.txt", "a/z.txt", "b.txt"]);
}

#[test]
fn files_are_dealt_round_robin() {
    let names = ["f0", "f1", "f2", "f3", "f4", "f5", "f6"];
    let tree = TempTree::new("e2e");
    for name in names {
        tree.write_file(name, name);
    }

    execute(&config(&tree, 3)).unwrap();

    assert_eq!(starts(&tree.read_artifact("chunk_1.txt")), vec!["f0", "f3", "f6"]);
    assert_eq!(starts(&tree.read_artifact("chunk_2.txt")), vec!["f1", "f4"]);
    assert_eq!(starts(&tree.read_artifact("chunk_3.txt")), vec!["f2", "f5"]);
}

#[test]
fn more_chunks_than_files_leaves_empty_artifacts() {
    let tree = TempTree::with_files("e2e", &[("only.txt", "x")]);

    let outcome = execute(&config(&tree, 4)).unwrap();

    let counts: Vec<usize> = outcome.reports().iter().map(|r| r.file_count).collect();
    assert_eq!(counts, vec![1, 0, 0, 0]);
    assert_eq!(tree.artifacts(), vec!["chunk_1.txt", "chunk_2.txt", "chunk_3.txt", "chunk_4.txt"]);
    assert_eq!(tree.read_artifact("chunk_4.txt"), "");
}

#[test]
fn undecodable_file_is_marked_inline() {
    let tree = TempTree::new("e2e");
    tree.write_file("bin.dat", [0xffu8, 0xfe, 0x00]);
    tree.write_file("ok.txt", "fine");

    execute(&config(&tree, 1)).unwrap();

    let text = tree.read_artifact("chunk_1.txt");
    assert!(text.starts_with("<<<START: bin.dat>>>\n[Error reading file: "), "{text}");
    assert!(text.contains("<<<END: bin.dat>>>\n\n<<<START: ok.txt>>>\nfine\n<<<END: ok.txt>>>\n\n"));
}

#[test]
fn content_is_copied_verbatim() {
    let content = "line one\r\n\ttabbed\n\ntrailing newline\n";
    let tree = TempTree::with_files("e2e", &[("doc.md", content)]);

    execute(&config(&tree, 1)).unwrap();

    assert_eq!(
        tree.read_artifact("chunk_1.txt"),
        format!("<<<START: doc.md>>>\n{content}\n<<<END: doc.md>>>\n\n")
    );
}

#[test]
fn nested_output_named_directories_are_regular_input() {
    let tree = TempTree::with_files(
        "e2e",
        &[("chunkies/chunk_1.txt", "stale"), ("sub/chunkies/keep.txt", "k"), ("sub/.chunkyignore", "")],
    );

    execute(&config(&tree, 1)).unwrap();

    assert_eq!(starts(&tree.read_artifact("chunk_1.txt")), vec!["sub/chunkies/keep.txt"]);
}

#[test]
fn custom_plan_changes_every_name() {
    let tree = TempTree::with_files("e2e", &[(".skip", "*.tmp\n"), ("a.txt", "a"), ("b.tmp", "b")]);
    let mut cfg = config(&tree, 1);
    cfg.plan = ChunkPlan::new("bundles", "bundle", ".skip").unwrap();

    let outcome = execute(&cfg).unwrap();

    let report = &outcome.reports()[0];
    assert_eq!(report.path, tree.path().join("bundles").join("bundle_1.txt"));
    let text = std::fs::read_to_string(&report.path).unwrap();
    assert_eq!(starts(&text), vec!["a.txt"]);
}

#[test]
fn every_file_lands_in_exactly_one_artifact() {
    let tree = TempTree::new("e2e");
    let mut expected = Vec::new();
    for dir in ["x", "y", "y/z"] {
        for i in 0..5 {
            let rel = format!("{dir}/file{i}.txt");
            tree.write_file(&rel, &rel);
            expected.push(rel);
        }
    }
    expected.sort();

    let outcome = execute(&config(&tree, 4)).unwrap();

    let mut seen: Vec<String> = outcome
        .reports()
        .iter()
        .flat_map(|r| {
            let text = std::fs::read_to_string(&r.path).unwrap();
            starts(&text).into_iter().map(str::to_string).collect::<Vec<_>>()
        })
        .collect();
    seen.sort();
    assert_eq!(seen, expected);
}

#[test]
fn reruns_produce_identical_artifacts() {
    let tree = TempTree::with_files("e2e", &[("a.txt", "1"), ("b/c.txt", "2"), ("d.txt", "3")]);

    execute(&config(&tree, 2)).unwrap();
    let first: Vec<String> = tree.artifacts().iter().map(|n| tree.read_artifact(n)).collect();
    execute(&config(&tree, 2)).unwrap();
    let second: Vec<String> = tree.artifacts().iter().map(|n| tree.read_artifact(n)).collect();

    assert_eq!(first, second);
}

#[test]
fn dry_run_reports_without_creating_output() {
    let tree = TempTree::with_files("e2e", &[("a.txt", "a"), ("b.txt", "b"), ("c.txt", "c")]);
    let mut cfg = config(&tree, 2);
    cfg.dry_run = true;

    let outcome = execute(&cfg).unwrap();

    assert!(matches!(outcome, ChunkOutcome::Written(ref r) if r.len() == 2));
    assert!(!tree.output_dir().exists());
}

#[test]
fn ignoring_everything_is_nothing_to_do() {
    let tree = TempTree::with_files("e2e", &[(".chunkyignore", "*\n!.chunkyignore\n"), ("a.txt", "a")]);

    assert_eq!(execute(&config(&tree, 2)).unwrap(), ChunkOutcome::NothingToDo);
    assert!(!tree.output_dir().exists());
}
