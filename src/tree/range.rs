// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Inclusive range queries over keys.

use std::io;
use std::io::Write;

use super::node::Link;
use super::Balance;
use super::Tree;
use crate::entry::Entry;

/// Visit every entry with `low <= key <= high` in ascending order.
///
/// Subtrees that cannot hold a key in range are never entered: a node below
/// `low` only has candidates on its right, a node above `high` only on its
/// left. Returns the number of nodes examined.
pub(crate) fn for_each_between<F>(link: &Link, low: &str, high: &str, visit: &mut F) -> usize
where
    F: FnMut(&Entry),
{
    let Some(node) = link else {
        return 0;
    };
    let key = node.entry.key();
    let mut examined = 1;
    if key > low {
        examined += for_each_between(&node.left, low, high, visit);
    }
    if low <= key && key <= high {
        visit(&node.entry);
    }
    if key < high {
        examined += for_each_between(&node.right, low, high, visit);
    }
    return examined;
}

impl<B: Balance> Tree<B> {
    /// Write each entry in `[low, high]` on its own line, in key order.
    ///
    /// Nothing is written when `low > high`.
    pub fn write_between(&self, low: &str, high: &str, out: &mut impl Write) -> io::Result<()> {
        let mut result = Ok(());
        for_each_between(&self.root, low, high, &mut |entry| {
            if result.is_ok() {
                result = writeln!(out, "{}", entry);
            }
        });
        return result;
    }

    /// [`Tree::write_between`] to stdout.
    pub fn print_between(&self, low: &str, high: &str) -> io::Result<()> {
        return self.write_between(low, high, &mut io::stdout().lock());
    }
}
