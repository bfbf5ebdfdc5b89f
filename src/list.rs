//! Double-ended lists
//!
//! [`ArrayList`] is backed by a ring buffer, [`LinkedList`] by a chain of
//! doubly-linked nodes. Neither is synchronized; see
//! [`SafeList`](crate::SafeList) for the thread-safe variant.

use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;

use crate::common::{Capacity, Container, List};
use crate::error::Result;
use crate::node::{self, Link, Node, Values};
use crate::utils::debug_container;

/// A list backed by a growable ring buffer
#[derive(Clone)]
pub struct ArrayList<T> {
    values: VecDeque<T>,
    capacity: Capacity,
}

impl<T> ArrayList<T> {
    /// Creates an empty unbounded list.
    pub fn new() -> Self {
        Self {
            values: VecDeque::new(),
            capacity: Capacity::Unbounded,
        }
    }

    /// Creates an empty list holding at most `capacity` elements.
    pub fn bounded(capacity: isize) -> Result<Self> {
        Ok(Self {
            values: VecDeque::new(),
            capacity: Capacity::bounded(capacity)?,
        })
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container<T> for ArrayList<T> {
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

impl<T> List<T> for ArrayList<T> {
    fn append(&mut self, value: T) -> bool {
        if self.capacity.is_full(self.values.len()) {
            return false;
        }
        self.values.push_back(value);
        true
    }

    fn prepend(&mut self, value: T) -> bool {
        if self.capacity.is_full(self.values.len()) {
            return false;
        }
        self.values.push_front(value);
        true
    }

    fn delete_first(&mut self) -> Option<T> {
        self.values.pop_front()
    }

    fn delete_last(&mut self) -> Option<T> {
        self.values.pop_back()
    }

    fn peek_first(&self) -> Option<&T> {
        self.values.front()
    }

    fn peek_last(&self) -> Option<&T> {
        self.values.back()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
            capacity: Capacity::Unbounded,
        }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    /// Appends values until the list is full; the rest are dropped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if !self.append(value) {
                break;
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_container(
            f,
            "ArrayList",
            self.capacity,
            self.values.len(),
            self.values.iter(),
        )
    }
}

/// A list backed by a chain of doubly-linked nodes
pub struct LinkedList<T> {
    front: Link<T>,
    back: Link<T>,
    size: usize,
    capacity: Capacity,
    _marker: PhantomData<Box<Node<T>>>,
}

// Safety: the list exclusively owns its nodes.
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Creates an empty unbounded list.
    pub fn new() -> Self {
        Self::with_limit(Capacity::Unbounded)
    }

    /// Creates an empty list holding at most `capacity` elements.
    pub fn bounded(capacity: isize) -> Result<Self> {
        Ok(Self::with_limit(Capacity::bounded(capacity)?))
    }

    fn with_limit(capacity: Capacity) -> Self {
        Self {
            front: None,
            back: None,
            size: 0,
            capacity,
            _marker: PhantomData,
        }
    }

    fn values(&self) -> Values<'_, T> {
        unsafe { Values::new(self.front) }
    }

    pub(crate) fn debug_as(&self, f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result
    where
        T: fmt::Debug,
    {
        debug_container(f, name, self.capacity, self.size, self.values())
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.back = None;
        unsafe { node::free_chain(self.front.take()) }
    }
}

impl<T> Container<T> for LinkedList<T> {
    fn size(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> Option<usize> {
        self.capacity.limit()
    }

    fn clear(&mut self) {
        self.back = None;
        self.size = 0;
        unsafe { node::free_chain(self.front.take()) }
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values().cloned().collect()
    }
}

impl<T> List<T> for LinkedList<T> {
    fn append(&mut self, value: T) -> bool {
        if self.capacity.is_full(self.size) {
            return false;
        }

        let node = Node::alloc(value);
        match self.back {
            Some(tail) => unsafe {
                node.as_ref().set_prev(Some(tail));
                tail.as_ref().set_next(Some(node));
            },
            None => self.front = Some(node),
        }
        self.back = Some(node);
        self.size += 1;
        true
    }

    fn prepend(&mut self, value: T) -> bool {
        if self.capacity.is_full(self.size) {
            return false;
        }

        let node = Node::alloc(value);
        match self.front {
            Some(head) => unsafe {
                node.as_ref().set_next(Some(head));
                head.as_ref().set_prev(Some(node));
            },
            None => self.back = Some(node),
        }
        self.front = Some(node);
        self.size += 1;
        true
    }

    fn delete_first(&mut self) -> Option<T> {
        let head = self.front?;
        unsafe {
            let next = head.as_ref().next();
            match next {
                Some(next) => next.as_ref().set_prev(None),
                None => self.back = None,
            }
            self.front = next;
            self.size -= 1;
            Some(Node::free(head))
        }
    }

    fn delete_last(&mut self) -> Option<T> {
        let tail = self.back?;
        unsafe {
            let prev = tail.as_ref().prev();
            match prev {
                Some(prev) => prev.as_ref().set_next(None),
                None => self.front = None,
            }
            self.back = prev;
            self.size -= 1;
            Some(Node::free(tail))
        }
    }

    fn peek_first(&self) -> Option<&T> {
        self.front.map(|head| unsafe { &*head.as_ptr() }.value())
    }

    fn peek_last(&self) -> Option<&T> {
        self.back.map(|tail| unsafe { &*tail.as_ptr() }.value())
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_limit(self.capacity);
        for value in self.values() {
            copy.append(value.clone());
        }
        copy
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Appends values until the list is full; the rest are dropped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if !self.append(value) {
                break;
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.debug_as(f, "LinkedList")
    }
}
