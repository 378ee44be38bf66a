use std::iter::FusedIterator;

use tracing::trace;

use super::node::Node;
use crate::error::IteratorStopped;
use crate::queue::Queue;

/// Breadth-first (level order) walk over a tree.
///
/// Each instance owns its own frontier, so several walks over the same tree
/// never interfere. The walk is one-shot: call [`Bst::iter`](crate::Bst::iter)
/// again for a fresh one.
#[derive(Debug, Clone)]
pub struct LevelOrder<'a> {
    frontier: Queue<&'a Node>,
    exhausted: bool,
}

impl<'a> LevelOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        let mut frontier = Queue::new();
        if let Some(root) = root {
            frontier.push(root);
        }
        Self {
            frontier,
            exhausted: false,
        }
    }

    /// Yields the next node, or [`IteratorStopped`] once every reachable node
    /// has been visited (and on every call after that).
    pub fn next_node(&mut self) -> Result<&'a Node, IteratorStopped> {
        let Ok(node) = self.frontier.pop() else {
            if !self.exhausted {
                self.exhausted = true;
                trace!("level-order walk exhausted");
            }
            return Err(IteratorStopped);
        };
        if let Some(left) = node.left() {
            self.frontier.push(left);
        }
        if let Some(right) = node.right() {
            self.frontier.push(right);
        }
        Ok(node)
    }
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.frontier.len(), None)
    }
}

impl FusedIterator for LevelOrder<'_> {}
