//! # search-structures
//!
//! An unbalanced binary search tree keyed by `i64`, storing a `String` per
//! key, with breadth-first traversal and an independent structural check.
//!
//! Deleting a node with two children promotes either the minimum of its
//! right subtree or the maximum of its left subtree, picked by a fair coin
//! flip so that long runs of deletions do not skew the tree to one side.
//!
//! ## Example
//!
//! ```rust
//! use search_structures::{Bst, Node};
//!
//! let mut tree = Bst::from_root(Some(Node::new(
//!     20,
//!     "val20",
//!     Some(Node::leaf(10, "val10")),
//!     Some(Node::leaf(30, "val30")),
//! )));
//! tree.insert(25, "val25");
//!
//! assert_eq!(tree.search(25), Some("val25"));
//! assert_eq!(tree.validate(), Ok(true));
//!
//! let level_order: Vec<i64> = tree.iter().map(|node| node.key()).collect();
//! assert_eq!(level_order, vec![20, 10, 30, 25]);
//!
//! tree.delete(20).unwrap();
//! assert_eq!(tree.search(20), None);
//! assert_eq!(tree.validate(), Ok(true));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod bst;
pub mod config;
pub mod error;
pub mod queue;

pub use bst::{Bst, LevelOrder, Node, Side};
pub use config::TreeConfig;
pub use error::{ConfigError, DeleteError, EmptyQueue, IteratorStopped, ValidateError};
pub use queue::Queue;

#[cfg(test)]
mod proptests;
