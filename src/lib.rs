// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Seqtree - indexes of restriction enzyme recognition sequences.
//!
//! Entries are keyed by recognition sequence and carry the acronyms of the
//! enzymes that cut it. The same index comes in two interchangeable shapes:
//! an [`UnbalancedTree`] and a height-balanced [`BalancedTree`]. Both report
//! how many recursive steps lookups and removals take, print inclusive key
//! ranges, and summarize their shape through [`DepthStats`].
//!
//! # Quick Start
//!
//! ```
//! use seqtree::{Entry, UnbalancedTree};
//!
//! let mut tree = UnbalancedTree::new();
//! tree.insert(Entry::new("GAATTC", "EcoRI"));
//! tree.insert(Entry::new("CCGG", "HpaII"));
//! tree.insert(Entry::new("CCGG", "MspI"));
//!
//! assert_eq!(tree.count_nodes(), 2);
//! assert_eq!(tree.get("CCGG").unwrap().to_string(), "CCGG HpaII MspI");
//!
//! let removed = tree.remove("GAATTC");
//! assert!(removed.found);
//! assert_eq!(removed.steps, 1);
//! ```

pub mod entry;
pub mod error;
pub mod tree;

pub use entry::Entry;
pub use entry::Merge;
pub use error::TreeError;
pub use tree::Avl;
pub use tree::Balance;
pub use tree::BalancedTree;
pub use tree::DepthStats;
pub use tree::Probe;
pub use tree::Tree;
pub use tree::Unbalanced;
pub use tree::UnbalancedTree;
