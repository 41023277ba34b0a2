// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Property-based tests for both tree shapes against a `BTreeMap` model.

use std::collections::BTreeMap;

use proptest::prelude::*;
use seqtree::{Avl, Balance, Entry, Tree, Unbalanced};

// =============================================================================
// Test helpers
// =============================================================================

/// A tree operation over short DNA keys, so that keys collide often.
#[derive(Clone, Debug)]
enum TreeOp {
    Insert { key: String, tag: String },
    Remove { key: String },
}

fn dna_key() -> impl Strategy<Value = String> {
    return "[ACGT]{1,3}";
}

fn arbitrary_op() -> impl Strategy<Value = TreeOp> {
    return prop_oneof![
        3 => (dna_key(), "[A-Z][a-z]{1,3}I").prop_map(|(key, tag)| TreeOp::Insert { key, tag }),
        1 => dna_key().prop_map(|key| TreeOp::Remove { key }),
    ];
}

type Model = BTreeMap<String, Vec<String>>;

fn apply<B: Balance>(tree: &mut Tree<B>, model: &mut Model, op: &TreeOp) -> bool {
    return match op {
        TreeOp::Insert { key, tag } => {
            tree.insert(Entry::new(key.as_str(), tag.as_str()));
            model.entry(key.clone()).or_default().push(tag.clone());
            true
        }
        TreeOp::Remove { key } => {
            let expected = model.remove(key).is_some();
            tree.remove(key).found == expected
        }
    };
}

fn listing<B: Balance>(tree: &Tree<B>, low: &str, high: &str) -> Vec<String> {
    let mut out = Vec::new();
    tree.write_between(low, high, &mut out).unwrap();
    return String::from_utf8(out).unwrap().lines().map(str::to_string).collect();
}

fn model_listing(model: &Model, low: &str, high: &str) -> Vec<String> {
    if low > high {
        return Vec::new();
    }
    return model
        .range(low.to_string()..=high.to_string())
        .map(|(key, tags)| Entry::with_tags(key.as_str(), tags.iter().map(String::as_str)).to_string())
        .collect();
}

fn check_against_model<B: Balance>(ops: &[TreeOp]) -> Result<(), TestCaseError> {
    let mut tree = Tree::<B>::new();
    let mut model = Model::new();
    for op in ops {
        prop_assert!(apply(&mut tree, &mut model, op), "remove disagreed on {:?}", op);
        prop_assert_eq!(tree.validate(), Ok(()));
    }

    prop_assert_eq!(tree.count_nodes(), model.len());
    prop_assert_eq!(listing(&tree, "", "~"), model_listing(&model, "", "~"));
    for (key, tags) in &model {
        prop_assert!(tree.find(key).found);
        prop_assert_eq!(tree.get(key).map(|e| e.tags().to_vec()), Some(tags.clone()));
    }
    return Ok(());
}

// =============================================================================
// Structural invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Unbalanced tree matches the model and stays ordered after every op
    #[test]
    fn bst_matches_model(ops in prop::collection::vec(arbitrary_op(), 0..120)) {
        check_against_model::<Unbalanced>(&ops)?;
    }

    /// AVL tree matches the model and stays ordered and balanced after every op
    #[test]
    fn avl_matches_model(ops in prop::collection::vec(arbitrary_op(), 0..120)) {
        check_against_model::<Avl>(&ops)?;
    }

    /// AVL height stays within the 1.44 log2(n + 2) bound
    #[test]
    fn avl_height_is_logarithmic(keys in prop::collection::btree_set("[ACGT]{1,8}", 1..300)) {
        let tree: Tree<Avl> = keys.iter().map(|key| Entry::new(key.as_str(), "t")).collect();
        let n = keys.len() as f64;
        prop_assert!((tree.height() as f64) <= 1.4405 * (n + 2.0).log2() - 0.3277 + 1e-9);
    }
}

// =============================================================================
// Queries
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Range print lists exactly the keys in [low, high], ascending
    #[test]
    fn range_matches_model(
        ops in prop::collection::vec(arbitrary_op(), 0..80),
        low in "[ACGT]{0,3}",
        high in "[ACGT]{0,3}",
    ) {
        let mut bst = Tree::<Unbalanced>::new();
        let mut avl = Tree::<Avl>::new();
        let mut model = Model::new();
        let mut avl_model = Model::new();
        for op in &ops {
            apply(&mut bst, &mut model, op);
            apply(&mut avl, &mut avl_model, op);
        }

        let expected = model_listing(&model, &low, &high);
        prop_assert_eq!(listing(&bst, &low, &high), expected.clone());
        prop_assert_eq!(listing(&avl, &low, &high), expected);
    }

    /// Step counts are identical for find and remove on the same shape
    #[test]
    fn remove_steps_match_find_steps(
        keys in prop::collection::vec(dna_key(), 1..60),
        target in dna_key(),
    ) {
        let mut tree: Tree<Unbalanced> = keys.iter().map(|key| Entry::new(key.as_str(), "t")).collect();
        let before = tree.find(&target);
        let removed = tree.remove(&target);
        prop_assert_eq!(before, removed);
        prop_assert!(!tree.find(&target).found);
    }

    /// Both shapes hold the same entries
    #[test]
    fn shapes_agree(keys in prop::collection::vec(dna_key(), 1..100)) {
        let bst: Tree<Unbalanced> = keys.iter().map(|key| Entry::new(key.as_str(), "t")).collect();
        let avl: Tree<Avl> = keys.iter().map(|key| Entry::new(key.as_str(), "t")).collect();
        prop_assert_eq!(bst.count_nodes(), avl.count_nodes());
        prop_assert_eq!(listing(&bst, "", "~"), listing(&avl, "", "~"));
    }

    /// Sorted input degenerates the unbalanced tree into a chain
    #[test]
    fn sorted_input_degenerates_bst(keys in prop::collection::btree_set("[ACGT]{1,6}", 3..200)) {
        let bst: Tree<Unbalanced> = keys.iter().map(|key| Entry::new(key.as_str(), "t")).collect();
        let avl: Tree<Avl> = keys.iter().map(|key| Entry::new(key.as_str(), "t")).collect();
        let n = keys.len();
        prop_assert_eq!(bst.height(), n);
        prop_assert_eq!(bst.stats().depth_sum, n * (n - 1) / 2);
        prop_assert!(avl.height() < n);
        prop_assert!(bst.calculate_ratio().unwrap() > avl.calculate_ratio().unwrap());
    }
}
