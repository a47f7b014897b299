// tests/integration/properties.rs
use std::collections::BTreeSet;

use chunky::{ConfigBuilder, OutputStyle, execute};
use chunky_domain::ChunkCount;
use proptest::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::TempTree;

fn starts(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|l| l.strip_prefix("<<<START: ").and_then(|l| l.strip_suffix(">>>")))
        .map(str::to_string)
        .collect()
}

fn tree_files() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set((0u8..3, 0u8..3, 0u8..12), 0..30)
        .prop_map(|set| set.into_iter().map(|(d, s, f)| format!("d{d}/s{s}/f{f}.txt")).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn every_kept_file_lands_in_exactly_one_artifact(
        kept in tree_files(),
        logs in prop::collection::btree_set(0u8..8, 0..4),
        chunks in 1usize..6,
    ) {
        let tree = TempTree::new("prop");
        tree.write_file(".chunkyignore", "*.log\n");
        for rel in &kept {
            tree.write_file(rel, rel);
        }
        for n in &logs {
            tree.write_file(&format!("d0/noise{n}.log"), "skip");
        }

        let config = ConfigBuilder::default()
            .root(tree.path())
            .count(ChunkCount::new(chunks).unwrap())
            .output(OutputStyle::Quiet)
            .build()
            .unwrap();
        let outcome = execute(&config).unwrap();

        if kept.is_empty() {
            prop_assert!(outcome.reports().is_empty());
            prop_assert!(tree.artifacts().is_empty());
        } else {
            prop_assert_eq!(tree.artifacts().len(), chunks);
            let mut seen = Vec::new();
            for index in 1..=chunks {
                let names = starts(&tree.read_artifact(&format!("chunk_{index}.txt")));
                let expected: Vec<String> = kept.iter().skip(index - 1).step_by(chunks).cloned().collect();
                prop_assert_eq!(&names, &expected);
                seen.extend(names);
            }
            seen.sort();
            prop_assert_eq!(seen, kept.iter().cloned().collect::<Vec<_>>());
        }
    }
}
