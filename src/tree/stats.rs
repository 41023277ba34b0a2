// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Whole-tree shape statistics.
//!
//! Depths count edges from the root, so the root sits at depth 0. The ratio
//! compares the average depth against log2(n), the depth a perfectly
//! balanced tree approaches.

use super::node::Link;
use super::Balance;
use super::Tree;
use crate::error::TreeError;

/// Node count and summed node depths of a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DepthStats {
    pub nodes: usize,
    pub depth_sum: usize,
}

impl DepthStats {
    /// Mean node depth, undefined for an empty tree.
    pub fn average_depth(&self) -> Result<f64, TreeError> {
        if self.nodes == 0 {
            return Err(TreeError::Empty);
        }
        return Ok(self.depth_sum as f64 / self.nodes as f64);
    }

    /// Mean node depth divided by log2(n), undefined below two nodes.
    pub fn ratio(&self) -> Result<f64, TreeError> {
        if self.nodes <= 1 {
            return Err(TreeError::TooFewNodes { nodes: self.nodes });
        }
        let average = self.average_depth()?;
        return Ok(average / (self.nodes as f64).log2());
    }
}

fn accumulate(link: &Link, depth: usize, stats: &mut DepthStats) {
    let Some(node) = link else {
        return;
    };
    stats.nodes += 1;
    stats.depth_sum += depth;
    accumulate(&node.left, depth + 1, stats);
    accumulate(&node.right, depth + 1, stats);
}

fn count(link: &Link) -> usize {
    return match link {
        None => 0,
        Some(node) => 1 + count(&node.left) + count(&node.right),
    };
}

fn height(link: &Link) -> usize {
    return match link {
        None => 0,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    };
}

impl<B: Balance> Tree<B> {
    /// Node count and depth sum in one traversal.
    pub fn stats(&self) -> DepthStats {
        let mut stats = DepthStats::default();
        accumulate(&self.root, 0, &mut stats);
        return stats;
    }

    /// Number of nodes, by full traversal.
    pub fn count_nodes(&self) -> usize {
        return count(&self.root);
    }

    pub fn calculate_avg_depth(&self) -> Result<f64, TreeError> {
        return self.stats().average_depth();
    }

    pub fn calculate_ratio(&self) -> Result<f64, TreeError> {
        return self.stats().ratio();
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        return height(&self.root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    use crate::tree::BalancedTree;
    use crate::tree::UnbalancedTree;

    fn digits<B: Balance>() -> Tree<B> {
        return (1..=7).map(|i| Entry::new(i.to_string(), "t")).collect();
    }

    #[test]
    fn empty_tree_errors() {
        let tree = UnbalancedTree::new();
        assert_eq!(tree.count_nodes(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.calculate_avg_depth(), Err(TreeError::Empty));
        assert_eq!(tree.calculate_ratio(), Err(TreeError::TooFewNodes { nodes: 0 }));
    }

    #[test]
    fn single_node() {
        let mut tree = BalancedTree::new();
        tree.insert(Entry::new("A", "t"));
        assert_eq!(tree.count_nodes(), 1);
        assert_eq!(tree.calculate_avg_depth(), Ok(0.0));
        assert_eq!(tree.calculate_ratio(), Err(TreeError::TooFewNodes { nodes: 1 }));
    }

    #[test]
    fn sorted_bst_is_a_chain() {
        let tree: UnbalancedTree = digits();
        assert_eq!(tree.stats(), DepthStats { nodes: 7, depth_sum: 21 });
        assert_eq!(tree.calculate_avg_depth(), Ok(3.0));
        assert_eq!(tree.height(), 7);
    }

    #[test]
    fn sorted_avl_is_perfect() {
        let tree: BalancedTree = digits();
        // 0 + 1 + 1 + 2 + 2 + 2 + 2
        assert_eq!(tree.stats(), DepthStats { nodes: 7, depth_sum: 10 });
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn chain_ratio_exceeds_balanced_ratio() {
        let chain: UnbalancedTree = digits();
        let balanced: BalancedTree = digits();
        let chain_ratio = chain.calculate_ratio().unwrap();
        let balanced_ratio = balanced.calculate_ratio().unwrap();
        assert!((chain_ratio - 3.0 / 7f64.log2()).abs() < 1e-12);
        assert!(chain_ratio > balanced_ratio);
    }

    #[test]
    fn merges_do_not_count_as_nodes() {
        let mut tree = UnbalancedTree::new();
        tree.insert(Entry::new("A", "x"));
        tree.insert(Entry::new("A", "x"));
        assert_eq!(tree.count_nodes(), 1);
    }
}
