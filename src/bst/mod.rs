//! Unbalanced binary search tree keyed by `i64` with `String` values.
//!
//! Nodes carry no parent pointers. Mutations descend from the root and work
//! on the owning link (`&mut Option<Box<Node>>`) of the node they touch, so
//! splicing a node out is a single assignment to that link.

mod iter;
mod node;

use std::cmp::Ordering;
use std::fmt;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use crate::config::TreeConfig;
use crate::error::{DeleteError, ValidateError};
use crate::queue::Queue;

pub use iter::LevelOrder;
pub use node::Node;

use node::Link;

// =============================================================================
// Successor side
// =============================================================================

/// Which subtree supplies the replacement when a node with two children is
/// deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Promote the minimum of the right subtree.
    Left,
    /// Promote the maximum of the left subtree.
    Right,
}

impl Side {
    /// Fair coin flip.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        }
    }
}

// =============================================================================
// Tree
// =============================================================================

/// Binary search tree with randomized successor selection on delete.
///
/// The random source `R` only decides which side supplies the successor when
/// a node with two children is deleted. Inject a seeded generator through
/// [`Bst::with_rng`] or [`Bst::with_config`] for reproducible shapes.
pub struct Bst<R = StdRng> {
    root: Link,
    len: usize,
    rng: R,
}

impl Bst<StdRng> {
    pub fn new() -> Self {
        Self::from_root(None)
    }

    /// Builds a tree around a literal root. `None` is the empty tree.
    ///
    /// The structure is taken as-is; call [`Bst::validate`] to check it.
    pub fn from_root(root: Option<Node>) -> Self {
        Self::with_config(root, &TreeConfig::default())
    }

    pub fn with_config(root: Option<Node>, config: &TreeConfig) -> Self {
        Self::with_rng(root, config.rng())
    }
}

impl<R> Bst<R> {
    pub fn with_rng(root: Option<Node>, rng: R) -> Self {
        let root = root.map(Box::new);
        let len = LevelOrder::new(root.as_deref()).count();
        Self { root, len, rng }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[inline]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Inserts `key`, overwriting the value in place if the key is already
    /// present. Returns the previous value in that case.
    pub fn insert(&mut self, key: i64, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        let mut link = &mut self.root;
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Equal => {
                    trace!(key, "insert overwrote existing value");
                    return Some(std::mem::replace(&mut node.value, value));
                }
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
            }
        }
        *link = Some(Box::new(Node::leaf(key, value)));
        self.len += 1;
        trace!(key, len = self.len, "inserted new node");
        None
    }

    pub fn search(&self, key: i64) -> Option<&str> {
        let found = self.find(key).map(Node::value);
        if found.is_none() {
            trace!(key, "search miss");
        }
        found
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    fn find(&self, key: i64) -> Option<&Node> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Deletes `key`, using `side` if the node holding it has two children.
    ///
    /// # Errors
    ///
    /// - [`DeleteError::EmptyTree`] if the tree has no nodes.
    /// - [`DeleteError::DeleteRootLeaf`] if `key` is held by the root and the
    ///   root has no children.
    /// - [`DeleteError::KeyNotFound`] if no node holds `key`.
    pub fn delete_with_side(&mut self, key: i64, side: Side) -> Result<(), DeleteError> {
        let root = self.root.as_deref().ok_or(DeleteError::EmptyTree)?;
        if root.key == key && root.is_leaf() {
            return Err(DeleteError::DeleteRootLeaf);
        }

        let link = find_link(&mut self.root, key);
        let Some(target) = link.as_deref_mut() else {
            return Err(DeleteError::KeyNotFound(key));
        };

        match (target.left.take(), target.right.take()) {
            (None, None) => {
                *link = None;
                debug!(key, "deleted leaf");
            }
            (Some(child), None) | (None, Some(child)) => {
                *link = Some(child);
                debug!(key, "spliced out node with one child");
            }
            (Some(left), Some(right)) => {
                target.left = Some(left);
                target.right = Some(right);
                promote_successor(target, side);
                debug!(key, ?side, promoted = target.key, "replaced node with two children");
            }
        }

        self.len -= 1;
        Ok(())
    }

    /// Checks the BST property independently of how the tree was built.
    ///
    /// Walks breadth-first carrying the inclusive key interval each node must
    /// fall in. Returns `Ok(false)` on the first node outside its interval.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::EmptyTree`] if the tree has no nodes.
    pub fn validate(&self) -> Result<bool, ValidateError> {
        struct Bounded<'a> {
            node: &'a Node,
            min: i64,
            max: i64,
        }

        let root = self.root.as_deref().ok_or(ValidateError::EmptyTree)?;
        let mut frontier = Queue::new();
        frontier.push(Bounded {
            node: root,
            min: i64::MIN,
            max: i64::MAX,
        });

        while let Ok(Bounded { node, min, max }) = frontier.pop() {
            if node.key < min || node.key > max {
                debug!(key = node.key, min, max, "key outside admissible interval");
                return Ok(false);
            }
            if let Some(left) = node.left() {
                // A left child under i64::MIN has nowhere to go.
                let Some(max) = node.key.checked_sub(1) else {
                    debug!(key = left.key, parent = node.key, "left child below i64::MIN");
                    return Ok(false);
                };
                frontier.push(Bounded { node: left, min, max });
            }
            if let Some(right) = node.right() {
                let Some(min) = node.key.checked_add(1) else {
                    debug!(key = right.key, parent = node.key, "right child above i64::MAX");
                    return Ok(false);
                };
                frontier.push(Bounded { node: right, min, max });
            }
        }
        Ok(true)
    }

    /// Level-order walk starting at the root.
    pub fn iter(&self) -> LevelOrder<'_> {
        LevelOrder::new(self.root.as_deref())
    }

    /// Number of levels; `0` for the empty tree.
    pub fn height(&self) -> usize {
        let mut level: Queue<&Node> = self.root.as_deref().into_iter().collect();
        let mut height = 0;
        while !level.is_empty() {
            height += 1;
            let mut next = Queue::new();
            while let Ok(node) = level.pop() {
                for child in [node.left(), node.right()].into_iter().flatten() {
                    next.push(child);
                }
            }
            level = next;
        }
        height
    }
}

impl<R: Rng> Bst<R> {
    /// Deletes `key`. When the node holding it has two children, the side
    /// supplying the successor is picked by a fair coin flip so repeated
    /// deletions do not systematically skew the tree.
    ///
    /// # Errors
    ///
    /// See [`Bst::delete_with_side`].
    pub fn delete(&mut self, key: i64) -> Result<(), DeleteError> {
        let side = Side::random(&mut self.rng);
        self.delete_with_side(key, side)
    }
}

/// Returns the link that holds `key`, or the empty link where it would go.
fn find_link(mut link: &mut Link, key: i64) -> &mut Link {
    loop {
        let go_left = match link.as_deref() {
            None => return link,
            Some(node) => match key.cmp(&node.key) {
                Ordering::Equal => return link,
                Ordering::Less => true,
                Ordering::Greater => false,
            },
        };
        link = match link {
            Some(node) => {
                if go_left {
                    &mut node.left
                } else {
                    &mut node.right
                }
            }
            None => return link,
        };
    }
}

/// Overwrites `target` with its successor from `side` and splices the
/// successor's original node out. `target` must have both children.
fn promote_successor(target: &mut Node, side: Side) {
    let successor = match side {
        Side::Left => take_extreme(&mut target.right, Side::Left),
        Side::Right => take_extreme(&mut target.left, Side::Right),
    };
    if let Some(mut successor) = successor {
        target.key = successor.key;
        target.value = std::mem::take(&mut successor.value);
    }
}

/// Unlinks the leftmost (`Side::Left`) or rightmost (`Side::Right`) node of
/// the subtree at `link`, moving its only possible child into its place.
fn take_extreme(mut link: &mut Link, side: Side) -> Option<Box<Node>> {
    loop {
        let descend = link.as_deref().is_some_and(|node| match side {
            Side::Left => node.left.is_some(),
            Side::Right => node.right.is_some(),
        });
        if !descend {
            break;
        }
        link = match link {
            Some(node) => match side {
                Side::Left => &mut node.left,
                Side::Right => &mut node.right,
            },
            None => break,
        };
    }

    let mut extreme = link.take()?;
    *link = match side {
        Side::Left => extreme.right.take(),
        Side::Right => extreme.left.take(),
    };
    Some(extreme)
}

impl Default for Bst<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality of the node graphs. The random source is ignored.
impl<R, S> PartialEq<Bst<S>> for Bst<R> {
    fn eq(&self, other: &Bst<S>) -> bool {
        self.root == other.root
    }
}

impl<R> Eq for Bst<R> {}

impl<R> fmt::Debug for Bst<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|node| (node.key, &node.value)))
            .finish()
    }
}
