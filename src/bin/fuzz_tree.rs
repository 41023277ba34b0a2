//! AFL Fuzz harness for the search trees
//!
//! This harness drives both tree shapes with the same operation stream and
//! checks them against a `BTreeMap` model:
//! 1. Membership: find/remove agree with the model after every operation
//! 2. Structure: search order holds, and AVL heights and balance stay valid
//! 3. Merge order: tags accumulate in insertion order
//! 4. Range: a full-range print lists exactly the model's entries

use std::collections::BTreeMap;

use afl::fuzz;
use seqtree::BalancedTree;
use seqtree::Entry;
use seqtree::UnbalancedTree;

const BASES: &[u8; 4] = b"ACGT";
const TAGS: [&str; 4] = ["EcoRI", "HpaII", "MspI", "TaqI"];

/// Operation types the fuzzer can generate
#[derive(Debug, Clone)]
enum FuzzOp {
    /// Insert a key with one tag
    Insert { key: String, tag: u8 },
    /// Remove a key
    Remove { key: String },
    /// Check every key of the model plus one probe key
    Audit { probe: String },
}

/// Decode a short recognition sequence: a length byte, then bases.
fn key_from_bytes(bytes: &[u8]) -> Option<(String, &[u8])> {
    let (&len, rest) = bytes.split_first()?;
    let len = (len % 4) as usize + 1;
    if rest.len() < len {
        return None;
    }
    let key = rest[..len].iter().map(|b| BASES[(*b % 4) as usize] as char).collect();
    return Some((key, &rest[len..]));
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        let (&op_type, rest) = bytes.split_first()?;
        match op_type % 3 {
            0 => {
                let (&tag, rest) = rest.split_first()?;
                let (key, rest) = key_from_bytes(rest)?;
                Some((FuzzOp::Insert { key, tag: tag % TAGS.len() as u8 }, rest))
            }
            1 => {
                let (key, rest) = key_from_bytes(rest)?;
                Some((FuzzOp::Remove { key }, rest))
            }
            _ => {
                let (probe, rest) = key_from_bytes(rest)?;
                Some((FuzzOp::Audit { probe }, rest))
            }
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut bst = UnbalancedTree::new();
        let mut avl = BalancedTree::new();
        let mut model: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Insert { key, tag } => {
                    let tag = TAGS[tag as usize];
                    bst.insert(Entry::new(key.clone(), tag));
                    avl.insert(Entry::new(key.clone(), tag));
                    model.entry(key).or_default().push(tag.to_string());
                }

                FuzzOp::Remove { key } => {
                    let expected = model.remove(&key).is_some();
                    assert_eq!(bst.remove(&key).found, expected, "BST remove({}) disagrees", key);
                    assert_eq!(avl.remove(&key).found, expected, "AVL remove({}) disagrees", key);
                }

                FuzzOp::Audit { probe } => {
                    assert_eq!(bst.find(&probe).found, model.contains_key(&probe));
                    assert_eq!(avl.find(&probe).found, model.contains_key(&probe));
                    for (key, tags) in &model {
                        assert_eq!(bst.get(key).map(|e| e.tags()), Some(tags.as_slice()));
                        assert_eq!(avl.get(key).map(|e| e.tags()), Some(tags.as_slice()));
                    }
                }
            }

            // CRITICAL INVARIANT: both trees stay structurally valid
            bst.validate().expect("BST invariant broken");
            avl.validate().expect("AVL invariant broken");
            assert_eq!(bst.count_nodes(), model.len());
            assert_eq!(avl.count_nodes(), model.len());
        }

        // Full-range print lists every model entry in order
        let mut expected = String::new();
        for (key, tags) in &model {
            expected.push_str(&Entry::with_tags(key.clone(), tags.iter().cloned()).to_string());
            expected.push('\n');
        }
        for tree_output in [
            {
                let mut out = Vec::new();
                bst.write_between("", "TTTT", &mut out).unwrap();
                out
            },
            {
                let mut out = Vec::new();
                avl.write_between("", "TTTT", &mut out).unwrap();
                out
            },
        ] {
            assert_eq!(String::from_utf8(tree_output).unwrap(), expected);
        }
    });
}
