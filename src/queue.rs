//! First-in-first-out queues
//!
//! [`ArrayQueue`] uses a ring buffer; [`LinkedQueue`] is the queue view of
//! [`LinkedList`], enqueuing at the back and dequeuing from the front.

use std::collections::VecDeque;
use std::fmt;

use crate::common::{Capacity, Container, List, Queue};
use crate::error::Result;
use crate::list::LinkedList;
use crate::utils::debug_container;

/// A queue backed by a growable ring buffer
#[derive(Clone)]
pub struct ArrayQueue<T> {
    values: VecDeque<T>,
    capacity: Capacity,
}

impl<T> ArrayQueue<T> {
    /// Creates an empty unbounded queue.
    pub fn new() -> Self {
        Self {
            values: VecDeque::new(),
            capacity: Capacity::Unbounded,
        }
    }

    /// Creates an empty queue holding at most `capacity` elements.
    pub fn bounded(capacity: isize) -> Result<Self> {
        Ok(Self {
            values: VecDeque::new(),
            capacity: Capacity::bounded(capacity)?,
        })
    }
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container<T> for ArrayQueue<T> {
    fn size(&self) -> usize {
        self.values.len()
    }

    fn capacity(&self) -> Option<usize> {
        self.capacity.limit()
    }

    fn clear(&mut self) {
        self.values.clear();
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.iter().cloned().collect()
    }
}

impl<T> Queue<T> for ArrayQueue<T> {
    fn enqueue(&mut self, value: T) -> bool {
        if self.capacity.is_full(self.values.len()) {
            return false;
        }
        self.values.push_back(value);
        true
    }

    fn dequeue(&mut self) -> Option<T> {
        self.values.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.values.front()
    }
}

impl<T> FromIterator<T> for ArrayQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
            capacity: Capacity::Unbounded,
        }
    }
}

impl<T> Extend<T> for ArrayQueue<T> {
    /// Enqueues values until the queue is full; the rest are dropped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue_many(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_container(
            f,
            "ArrayQueue",
            self.capacity,
            self.values.len(),
            self.values.iter(),
        )
    }
}

/// A queue backed by a doubly-linked chain
pub struct LinkedQueue<T> {
    list: LinkedList<T>,
}

impl<T> LinkedQueue<T> {
    /// Creates an empty unbounded queue.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Creates an empty queue holding at most `capacity` elements.
    pub fn bounded(capacity: isize) -> Result<Self> {
        Ok(Self {
            list: LinkedList::bounded(capacity)?,
        })
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container<T> for LinkedQueue<T> {
    fn size(&self) -> usize {
        self.list.size()
    }

    fn capacity(&self) -> Option<usize> {
        self.list.capacity()
    }

    fn clear(&mut self) {
        self.list.clear();
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.to_vec()
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, value: T) -> bool {
        self.list.append(value)
    }

    fn dequeue(&mut self) -> Option<T> {
        self.list.delete_first()
    }

    fn peek(&self) -> Option<&T> {
        self.list.peek_first()
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    /// Enqueues values until the queue is full; the rest are dropped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.debug_as(f, "LinkedQueue")
    }
}
