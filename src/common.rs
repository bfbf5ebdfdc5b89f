//! Common functionality for all containers
//!
//! This module provides the capacity model and the operation contracts shared
//! by the stack, queue and list families, plus the spin-waiting helpers used by
//! the thread-safe queues.

use std::fmt;

use crossbeam_utils::Backoff;

use crate::error::{Error, Result};
use crate::iter::Snapshot;

/// Maximum number of elements a container may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Capacity {
    /// No limit on the number of elements
    #[default]
    Unbounded,
    /// At most this many elements
    Bounded(usize),
}

impl Capacity {
    /// Validates a signed capacity as accepted by the `bounded` constructors.
    ///
    /// Negative values are rejected rather than clamped.
    pub fn bounded(capacity: isize) -> Result<Self> {
        usize::try_from(capacity)
            .map(Capacity::Bounded)
            .map_err(|_| Error::NegativeCapacity(capacity))
    }

    /// Returns the limit, or `None` when unbounded.
    #[inline]
    pub fn limit(self) -> Option<usize> {
        match self {
            Capacity::Unbounded => None,
            Capacity::Bounded(n) => Some(n),
        }
    }

    /// Returns true if a container may hold `len` elements.
    #[inline]
    pub fn allows(self, len: usize) -> bool {
        match self {
            Capacity::Unbounded => true,
            Capacity::Bounded(n) => len <= n,
        }
    }

    /// Returns true if a container holding `len` elements is full.
    #[inline]
    pub fn is_full(self, len: usize) -> bool {
        match self {
            Capacity::Unbounded => false,
            Capacity::Bounded(n) => len >= n,
        }
    }

    /// Fails with [`Error::CapacityExceeded`] if `len` elements do not fit.
    pub(crate) fn check(self, len: usize) -> Result<()> {
        match self {
            Capacity::Bounded(capacity) if len > capacity => {
                Err(Error::CapacityExceeded { capacity, len })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Unbounded => f.write_str("unbounded"),
            Capacity::Bounded(n) => write!(f, "{}", n),
        }
    }
}

/// Operations shared by every container
pub trait Container<T> {
    /// Returns the number of elements currently stored.
    fn size(&self) -> usize;

    /// Checks whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the maximum number of elements, or `None` when unbounded.
    fn capacity(&self) -> Option<usize>;

    /// Checks whether the container is at its capacity.
    ///
    /// Always false for unbounded containers.
    fn is_full(&self) -> bool {
        self.capacity().is_some_and(|c| self.size() >= c)
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Returns a detached copy of the elements in removal order.
    ///
    /// Stacks list the top first; queues and lists list the front first.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;

    /// Returns a single-pass iterator over a detached copy of the elements.
    fn snapshot(&self) -> Snapshot<T>
    where
        T: Clone,
    {
        Snapshot::new(self.to_vec())
    }
}

/// Last-in-first-out container operations
pub trait Stack<T>: Container<T> {
    /// Pushes a value on top of the stack.
    ///
    /// Returns false, leaving the stack untouched, if the stack is full.
    fn push(&mut self, value: T) -> bool;

    /// Removes and returns the top value, or `None` if the stack is empty.
    fn pop(&mut self) -> Option<T>;

    /// Returns the top value without removing it.
    fn peek(&self) -> Option<&T>;

    /// Pushes values in order and returns how many were pushed.
    ///
    /// Pushes nothing and returns 0 if the whole batch does not fit.
    fn push_many<I: IntoIterator<Item = T>>(&mut self, values: I) -> usize {
        let values: Vec<T> = values.into_iter().collect();
        if self
            .capacity()
            .is_some_and(|c| self.size() + values.len() > c)
        {
            return 0;
        }
        let pushed = values.len();
        for value in values {
            self.push(value);
        }
        pushed
    }
}

/// First-in-first-out container operations
pub trait Queue<T>: Container<T> {
    /// Adds a value at the back of the queue.
    ///
    /// Returns false, leaving the queue untouched, if the queue is full.
    fn enqueue(&mut self, value: T) -> bool;

    /// Removes and returns the front value, or `None` if the queue is empty.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns the front value without removing it.
    fn peek(&self) -> Option<&T>;

    /// Enqueues values in order and returns how many were enqueued.
    ///
    /// Stops at the first refused value.
    fn enqueue_many<I: IntoIterator<Item = T>>(&mut self, values: I) -> usize {
        let mut enqueued = 0;
        for value in values {
            if !self.enqueue(value) {
                break;
            }
            enqueued += 1;
        }
        enqueued
    }
}

/// Double-ended list operations
pub trait List<T>: Container<T> {
    /// Adds a value at the back. Returns false if the list is full.
    fn append(&mut self, value: T) -> bool;

    /// Adds a value at the front. Returns false if the list is full.
    fn prepend(&mut self, value: T) -> bool;

    /// Removes and returns the front value.
    fn delete_first(&mut self) -> Option<T>;

    /// Removes and returns the back value.
    fn delete_last(&mut self) -> Option<T>;

    /// Returns the front value without removing it.
    fn peek_first(&self) -> Option<&T>;

    /// Returns the back value without removing it.
    fn peek_last(&self) -> Option<&T>;
}

/// Queue operations over a shared reference
///
/// This trait defines the interface of the thread-safe containers when used
/// as a producer/consumer channel: values go in at the back and come out at
/// the front.
pub trait ConcurrentQueueOps<T> {
    /// Attempts to add a value at the back.
    ///
    /// Hands the value back if the queue is full.
    fn try_push(&self, value: T) -> std::result::Result<(), T>;

    /// Attempts to remove the front value.
    ///
    /// Returns `None` if the queue was empty.
    fn try_pop(&self) -> Option<T>;

    /// Pushes a value, spinning with backoff while the queue is full.
    fn push_wait(&self, value: T) {
        let backoff = Backoff::new();
        let mut value = value;
        loop {
            match self.try_push(value) {
                Ok(()) => return,
                Err(rejected) => value = rejected,
            }
            backoff.snooze();
        }
    }

    /// Pops a value, spinning with backoff while the queue is empty.
    fn pop_wait(&self) -> T {
        let backoff = Backoff::new();
        loop {
            if let Some(value) = self.try_pop() {
                return value;
            }
            backoff.snooze();
        }
    }
}
