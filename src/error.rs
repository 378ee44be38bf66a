use thiserror::Error;

/// Returned by [`Queue::pop`](crate::queue::Queue::pop) when no items remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot pop from empty queue")]
pub struct EmptyQueue;

/// Reasons a [`Bst::delete`](crate::Bst::delete) call can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeleteError {
    #[error("cannot delete from an empty tree")]
    EmptyTree,
    #[error("key {0} not found in tree")]
    KeyNotFound(i64),
    /// The target is the only node left; removing it would empty the tree.
    #[error("cannot delete node that is both a leaf and the root of the tree")]
    DeleteRootLeaf,
}

/// Reasons [`Bst::validate`](crate::Bst::validate) cannot produce a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidateError {
    #[error("cannot validate an empty tree")]
    EmptyTree,
}

/// Normal end of a level-order walk. Not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("iterator is exhausted")]
pub struct IteratorStopped;

/// Errors raised while loading a [`TreeConfig`](crate::TreeConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}' is not an unsigned 64-bit integer")]
    InvalidSeed { name: String, value: String },
}
