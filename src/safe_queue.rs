//! Thread-safe FIFO queue
//!
//! [`SafeQueue`] is the queue view of [`SafeList`]: values are enqueued at the
//! back under the back lock and dequeued from the front under the front lock,
//! so one producer and one consumer proceed without contending once the queue
//! holds a few elements.

use std::fmt;

use crate::common::{ConcurrentQueueOps, Container};
use crate::error::Result;
use crate::iter::Snapshot;
use crate::safe_list::SafeList;

/// A thread-safe queue, optionally bounded
pub struct SafeQueue<T> {
    list: SafeList<T>,
}

impl<T> SafeQueue<T> {
    /// Creates an empty unbounded queue.
    pub fn new() -> Self {
        Self {
            list: SafeList::new(),
        }
    }

    /// Creates an empty queue holding at most `capacity` elements.
    pub fn bounded(capacity: isize) -> Result<Self> {
        Ok(Self {
            list: SafeList::bounded(capacity)?,
        })
    }

    /// Creates a bounded queue holding `values`, first value at the front.
    pub fn bounded_from<I>(capacity: isize, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Ok(Self {
            list: SafeList::bounded_from(capacity, values)?,
        })
    }

    /// Adds a value at the back. Returns false if the queue is full.
    pub fn enqueue(&self, value: T) -> bool {
        self.list.append(value)
    }

    /// Enqueues values in order and returns how many were enqueued.
    pub fn enqueue_many<I: IntoIterator<Item = T>>(&self, values: I) -> usize {
        self.list.append_many(values)
    }

    /// Removes and returns the front value, or `None` if the queue is empty.
    pub fn dequeue(&self) -> Option<T> {
        self.list.delete_first()
    }

    /// Returns a clone of the front value without removing it.
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.list.peek_first()
    }

    /// Checks whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of elements in the queue.
    pub fn size(&self) -> usize {
        self.list.size()
    }

    /// Returns the maximum number of elements, or `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.list.capacity()
    }

    /// Checks whether the queue is at its capacity.
    pub fn is_full(&self) -> bool {
        self.list.is_full()
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.list.clear()
    }

    /// Returns a copy of the elements, front first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.to_vec()
    }

    /// Returns a single-pass iterator over a copy of the elements.
    pub fn snapshot(&self) -> Snapshot<T>
    where
        T: Clone,
    {
        self.list.snapshot()
    }
}

impl<T> Default for SafeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SafeQueue<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<T> FromIterator<T> for SafeQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SafeQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.debug_as(f, "SafeQueue")
    }
}

impl<T> Container<T> for SafeQueue<T> {
    fn size(&self) -> usize {
        self.list.size()
    }

    fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    fn capacity(&self) -> Option<usize> {
        self.list.capacity()
    }

    fn clear(&mut self) {
        self.list.clear()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.to_vec()
    }
}

impl<T> ConcurrentQueueOps<T> for SafeQueue<T> {
    fn try_push(&self, value: T) -> Result<(), T> {
        self.list.try_append(value)
    }

    fn try_pop(&self) -> Option<T> {
        self.list.delete_first()
    }
}
