// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Binary search trees keyed by recognition sequence.
//!
//! There is one search algorithm, [`Tree`], parameterized by a [`Balance`]
//! hook. The hook runs on every node of a modified path, bottom-up, after an
//! insert that created a node or a remove that unlinked one:
//!
//! - [`Unbalanced`] does nothing, giving a plain BST.
//! - [`Avl`] recomputes heights and rotates, giving an AVL tree.
//!
//! Inserting a key that is already present never creates a node; the stored
//! [`Entry`] merges the new tags instead. Lookups and removals report how
//! many recursive steps they took in a [`Probe`].
//!
//! ```
//! use seqtree::{BalancedTree, Entry};
//!
//! let mut tree = BalancedTree::new();
//! tree.insert(Entry::new("GAATTC", "EcoRI"));
//! tree.insert(Entry::new("GAATTC", "FunII"));
//!
//! let probe = tree.find("GAATTC");
//! assert!(probe.found);
//! assert_eq!(probe.steps, 1);
//! assert_eq!(tree.get("GAATTC").unwrap().tags(), ["EcoRI", "FunII"]);
//! ```

use std::cmp::Ordering;
use std::io;
use std::io::Write;
use std::marker::PhantomData;

use crate::entry::Entry;
use crate::entry::Merge;
use crate::error::TreeError;

mod avl;
mod node;
mod range;
mod stats;

pub use avl::Avl;
pub use node::Link;
pub use node::Node;
pub use stats::DepthStats;

/// Rebalancing strategy applied along every modified path.
pub trait Balance {
    /// Short name used in reports and logs.
    const NAME: &'static str;

    /// Whether node heights are maintained and the balance invariant holds.
    const BALANCED: bool;

    /// Restore the strategy's invariant at `link`, whose children already
    /// satisfy it.
    fn rebalance(link: &mut Link);
}

/// No rebalancing: a classic binary search tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbalanced;

impl Balance for Unbalanced {
    const NAME: &'static str = "BST";
    const BALANCED: bool = false;

    #[inline(always)]
    fn rebalance(_link: &mut Link) {}
}

/// Plain binary search tree.
pub type UnbalancedTree = Tree<Unbalanced>;

/// Height-balanced AVL tree.
pub type BalancedTree = Tree<Avl>;

/// Outcome of an instrumented lookup or removal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Probe {
    /// Whether the key was present.
    pub found: bool,
    /// Recursive steps taken to locate the key, or to fall off the tree.
    pub steps: usize,
}

impl Probe {
    fn hit() -> Probe {
        return Probe { found: true, steps: 1 };
    }

    fn miss() -> Probe {
        return Probe { found: false, steps: 1 };
    }

    fn descend(self) -> Probe {
        return Probe {
            found: self.found,
            steps: self.steps + 1,
        };
    }
}

/// An ordered map from recognition sequence to [`Entry`].
pub struct Tree<B> {
    root: Link,
    balance: PhantomData<B>,
}

impl<B: Balance> Tree<B> {
    pub fn new() -> Tree<B> {
        return Tree {
            root: None,
            balance: PhantomData,
        };
    }

    pub fn is_empty(&self) -> bool {
        return self.root.is_none();
    }

    /// Insert `entry`, merging it into the stored entry if the key exists.
    pub fn insert(&mut self, entry: Entry) {
        insert_into::<B>(&mut self.root, entry);
    }

    /// Look up `key`, counting recursive steps.
    ///
    /// An empty tree takes zero steps. Otherwise every call counts, including
    /// the final one that lands on an empty child when `key` is absent.
    pub fn find(&self, key: &str) -> Probe {
        if self.root.is_none() {
            return Probe::default();
        }
        return find_in(&self.root, key);
    }

    /// The stored entry for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.cmp(node.entry.key()) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(&node.entry),
            };
        }
        return None;
    }

    /// Write the entry for `key` as `KEY TAG...`, or a not-found notice.
    ///
    /// The lookup goes through [`Tree::get`] and is not instrumented; use
    /// [`Tree::find`] for step counts.
    pub fn write_find(&self, key: &str, out: &mut impl Write) -> io::Result<()> {
        return match self.get(key) {
            Some(entry) => writeln!(out, "{}", entry),
            None => writeln!(out, "Not Found"),
        };
    }

    /// [`Tree::write_find`] to stdout. Takes no step count.
    pub fn find_and_print(&self, key: &str) -> io::Result<()> {
        return self.write_find(key, &mut io::stdout().lock());
    }

    /// Remove the node holding `key`, counting the steps taken to locate it.
    ///
    /// A node with two children takes over its in-order successor's entry;
    /// the steps spent detaching the successor are not counted.
    pub fn remove(&mut self, key: &str) -> Probe {
        if self.root.is_none() {
            return Probe::default();
        }
        return remove_from::<B>(&mut self.root, key);
    }

    /// Check the search order and, for balanced trees, heights and balance
    /// factors of every node.
    pub fn validate(&self) -> Result<(), TreeError> {
        validate_link::<B>(&self.root, None, None)?;
        return Ok(());
    }
}

impl<B: Balance> Default for Tree<B> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<B: Balance> Extend<Entry> for Tree<B> {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl<B: Balance> FromIterator<Entry> for Tree<B> {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        return tree;
    }
}

// Release nodes from an explicit stack; a degenerate chain would otherwise
// recurse once per node.
impl<B> Drop for Tree<B> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Returns true when a new node was linked in.
fn insert_into<B: Balance>(link: &mut Link, entry: Entry) -> bool {
    let node = match link {
        Some(node) => node,
        None => {
            *link = Some(Box::new(Node::new(entry)));
            return true;
        }
    };
    let grew = match entry.key().cmp(node.entry.key()) {
        Ordering::Less => insert_into::<B>(&mut node.left, entry),
        Ordering::Greater => insert_into::<B>(&mut node.right, entry),
        Ordering::Equal => {
            node.entry.merge(&entry);
            false
        }
    };
    if grew {
        B::rebalance(link);
    }
    return grew;
}

fn find_in(link: &Link, key: &str) -> Probe {
    let Some(node) = link else {
        return Probe::miss();
    };
    return match key.cmp(node.entry.key()) {
        Ordering::Less => find_in(&node.left, key).descend(),
        Ordering::Greater => find_in(&node.right, key).descend(),
        Ordering::Equal => Probe::hit(),
    };
}

fn remove_from<B: Balance>(link: &mut Link, key: &str) -> Probe {
    let node = match link {
        Some(node) => node,
        None => return Probe::miss(),
    };
    let probe = match key.cmp(node.entry.key()) {
        Ordering::Less => remove_from::<B>(&mut node.left, key).descend(),
        Ordering::Greater => remove_from::<B>(&mut node.right, key).descend(),
        Ordering::Equal => {
            unlink::<B>(link);
            Probe::hit()
        }
    };
    if probe.found {
        B::rebalance(link);
    }
    return probe;
}

/// Remove the node at `link` from the tree.
fn unlink<B: Balance>(link: &mut Link) {
    let Some(node) = link.as_mut() else {
        return;
    };
    if node.left.is_some() && node.right.is_some() {
        if let Some(successor) = detach_min::<B>(&mut node.right) {
            node.entry = successor;
        }
        return;
    }
    if let Some(mut node) = link.take() {
        *link = node.left.take().or_else(|| node.right.take());
    }
}

/// Detach the minimum node of a subtree and return its entry, rebalancing
/// the path back up to `link`.
fn detach_min<B: Balance>(link: &mut Link) -> Option<Entry> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        let entry = detach_min::<B>(&mut node.left);
        B::rebalance(link);
        return entry;
    }
    let mut node = link.take()?;
    *link = node.right.take();
    return Some(node.entry);
}

/// Returns the actual height of the subtree.
fn validate_link<'a, B: Balance>(
    link: &'a Link,
    low: Option<&'a str>,
    high: Option<&'a str>,
) -> Result<u32, TreeError> {
    let Some(node) = link else {
        return Ok(0);
    };
    let key = node.entry.key();
    if low.is_some_and(|low| key <= low) || high.is_some_and(|high| key >= high) {
        return Err(TreeError::OutOfOrder { key: key.to_string() });
    }

    let left = validate_link::<B>(&node.left, low, Some(key))?;
    let right = validate_link::<B>(&node.right, Some(key), high)?;
    let actual = 1 + left.max(right);

    if B::BALANCED {
        if node.height != actual {
            return Err(TreeError::StaleHeight {
                key: key.to_string(),
                cached: node.height,
                actual,
            });
        }
        let factor = left as i64 - right as i64;
        if factor.abs() > 1 {
            return Err(TreeError::Unbalanced {
                key: key.to_string(),
                factor,
            });
        }
    }
    return Ok(actual);
}
