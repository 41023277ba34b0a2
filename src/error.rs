// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

use thiserror::Error;

/// Errors reported by tree statistics and structural validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Average depth is undefined for a tree without nodes.
    #[error("tree is empty")]
    Empty,

    /// The depth ratio divides by log2(n), which is zero or undefined here.
    #[error("depth ratio needs at least two nodes, tree has {nodes}")]
    TooFewNodes { nodes: usize },

    /// A key sits on the wrong side of an ancestor.
    #[error("key {key:?} breaks the search order")]
    OutOfOrder { key: String },

    /// A cached height does not match the subtree below it.
    #[error("node {key:?} caches height {cached}, actual height is {actual}")]
    StaleHeight {
        key: String,
        cached: u32,
        actual: u32,
    },

    /// A balanced node has a balance factor outside -1..=1.
    #[error("node {key:?} has balance factor {factor}")]
    Unbalanced { key: String, factor: i64 },
}
