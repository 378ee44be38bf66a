//! Unbounded FIFO queue used as the breadth-first frontier.

use std::collections::VecDeque;

use crate::error::EmptyQueue;

#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Appends `item` at the tail.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the head item.
    ///
    /// An empty queue is a normal condition for callers draining a frontier,
    /// so it is reported as a value rather than a panic.
    #[inline]
    pub fn pop(&mut self) -> Result<T, EmptyQueue> {
        self.items.pop_front().ok_or(EmptyQueue)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
