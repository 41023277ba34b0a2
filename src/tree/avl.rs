// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! AVL rebalancing.
//!
//! After a structural change the hook runs once per ancestor, bottom-up. It
//! refreshes the cached height and, when the balance factor leaves -1..=1,
//! applies one of four rotations chosen by the taller child's balance:
//!
//! | node balance | child balance | rotation                          |
//! |--------------|---------------|-----------------------------------|
//! | > 1          | left >= 0     | right                             |
//! | > 1          | left < 0      | left on left child, then right    |
//! | < -1         | right <= 0    | left                              |
//! | < -1         | right > 0     | right on right child, then left   |
//!
//! An insertion needs at most one (single or double) rotation to restore
//! the whole tree, after which the heights above it are unchanged. A
//! deletion can shorten a subtree even after rotating, so rotations may
//! fire at several ancestors on the same path.

use tracing::trace;

use super::node::Link;
use super::Balance;

/// Height-balanced rebalancing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Avl;

impl Balance for Avl {
    const NAME: &'static str = "AVL";
    const BALANCED: bool = true;

    fn rebalance(link: &mut Link) {
        let Some(node) = link.as_mut() else {
            return;
        };
        node.update_height();
        let factor = node.balance_factor();

        if factor > 1 {
            if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
                trace!(key = node.entry.key(), "left-right rotation");
                rotate_left(&mut node.left);
            } else {
                trace!(key = node.entry.key(), "left-left rotation");
            }
            rotate_right(link);
        } else if factor < -1 {
            if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
                trace!(key = node.entry.key(), "right-left rotation");
                rotate_right(&mut node.right);
            } else {
                trace!(key = node.entry.key(), "right-right rotation");
            }
            rotate_left(link);
        }
    }
}

/// Lift the left child of `link` into its place.
fn rotate_right(link: &mut Link) {
    let Some(mut root) = link.take() else {
        return;
    };
    let Some(mut pivot) = root.left.take() else {
        *link = Some(root);
        return;
    };
    root.left = pivot.right.take();
    root.update_height();
    pivot.right = Some(root);
    pivot.update_height();
    *link = Some(pivot);
}

/// Lift the right child of `link` into its place.
fn rotate_left(link: &mut Link) {
    let Some(mut root) = link.take() else {
        return;
    };
    let Some(mut pivot) = root.right.take() else {
        *link = Some(root);
        return;
    };
    root.right = pivot.left.take();
    root.update_height();
    pivot.left = Some(root);
    pivot.update_height();
    *link = Some(pivot);
}
