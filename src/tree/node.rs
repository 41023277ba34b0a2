// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

use crate::entry::Entry;

/// An owned, possibly empty subtree.
pub type Link = Option<Box<Node>>;

/// A tree node. Each child is owned by exactly one parent.
#[derive(Debug)]
pub struct Node {
    pub(crate) entry: Entry,
    /// Height of the subtree rooted here, a leaf being 1. Only kept current
    /// by balancing trees.
    pub(crate) height: u32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub(crate) fn new(entry: Entry) -> Node {
        return Node {
            entry,
            height: 1,
            left: None,
            right: None,
        };
    }

    /// Cached height of a subtree, 0 when empty.
    #[inline]
    pub(crate) fn height_of(link: &Link) -> u32 {
        return link.as_ref().map_or(0, |node| node.height);
    }

    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + Node::height_of(&self.left).max(Node::height_of(&self.right));
    }

    /// height(left) - height(right), from cached heights.
    #[inline]
    pub(crate) fn balance_factor(&self) -> i64 {
        return Node::height_of(&self.left) as i64 - Node::height_of(&self.right) as i64;
    }
}
