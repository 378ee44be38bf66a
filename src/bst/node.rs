//! Tree nodes and structural equality.

use std::fmt;

use crate::queue::Queue;

pub(crate) type Link = Option<Box<Node>>;

/// A single key/value entry, exclusively owning its children.
///
/// Nodes can be assembled bottom-up into literal trees:
///
/// ```rust
/// use search_structures::{Bst, Node};
///
/// let root = Node::new(
///     20,
///     "val20",
///     Some(Node::leaf(10, "val10")),
///     Some(Node::leaf(30, "val30")),
/// );
/// let tree = Bst::from_root(Some(root));
/// assert_eq!(tree.search(30), Some("val30"));
/// ```
pub struct Node {
    pub(crate) key: i64,
    pub(crate) value: String,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub fn new(key: i64, value: impl Into<String>, left: Option<Node>, right: Option<Node>) -> Self {
        Self {
            key,
            value: value.into(),
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn leaf(key: i64, value: impl Into<String>) -> Self {
        Self::new(key, value, None, None)
    }

    #[inline]
    pub fn key(&self) -> i64 {
        self.key
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    #[inline]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Same key, same value, same present/absent pattern of children.
    fn shallow_eq(&self, other: &Node) -> bool {
        self.key == other.key
            && self.value == other.value
            && self.left.is_some() == other.left.is_some()
            && self.right.is_some() == other.right.is_some()
    }
}

/// Structural equality: both subtrees are walked breadth-first in lockstep,
/// so trees holding the same keys in different shapes compare unequal.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut ours: Queue<&Node> = Queue::new();
        let mut theirs: Queue<&Node> = Queue::new();
        ours.push(self);
        theirs.push(other);

        loop {
            let (a, b) = match (ours.pop(), theirs.pop()) {
                (Ok(a), Ok(b)) => (a, b),
                (Err(_), Err(_)) => return true,
                _ => return false,
            };
            if !a.shallow_eq(b) {
                return false;
            }
            for child in [a.left(), a.right()].into_iter().flatten() {
                ours.push(child);
            }
            for child in [b.left(), b.right()].into_iter().flatten() {
                theirs.push(child);
            }
        }
    }
}

impl Eq for Node {}

// Degenerate trees are as deep as they are long. Drop, clone and debug output
// must not recurse once per level.

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Queue<Box<Node>> =
            [self.left.take(), self.right.take()].into_iter().flatten().collect();
        while let Ok(mut node) = pending.pop() {
            // Detached children leave `node` itself with a shallow drop.
            if let Some(left) = node.left.take() {
                pending.push(left);
            }
            if let Some(right) = node.right.take() {
                pending.push(right);
            }
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        // Level order: every child sits after its parent, so building back to
        // front always finds both children already cloned.
        let mut order: Vec<(&Node, Option<usize>, Option<usize>)> = vec![(self, None, None)];
        let mut i = 0;
        while i < order.len() {
            let node = order[i].0;
            let left = node.left().map(|child| {
                order.push((child, None, None));
                order.len() - 1
            });
            let right = node.right().map(|child| {
                order.push((child, None, None));
                order.len() - 1
            });
            order[i].1 = left;
            order[i].2 = right;
            i += 1;
        }

        let mut built: Vec<Option<Node>> = std::iter::repeat_with(|| None).take(order.len()).collect();
        for (idx, &(node, left, right)) in order.iter().enumerate().skip(1).rev() {
            let left = left.and_then(|l| built[l].take());
            let right = right.and_then(|r| built[r].take());
            built[idx] = Some(Node::new(node.key, node.value.clone(), left, right));
        }

        let left = order[0].1.and_then(|l| built[l].take());
        let right = order[0].2.and_then(|r| built[r].take());
        Node::new(self.key, self.value.clone(), left, right)
    }
}

/// Shows the node's own entry and its children's keys only.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
