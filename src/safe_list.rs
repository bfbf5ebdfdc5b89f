//! Thread-safe doubly-linked list with independent front and back locks
//!
//! [`SafeList`] guards each end of its chain with its own read-write lock, so a
//! producer appending at the back and a consumer removing from the front do
//! not contend with each other while the chain is long enough for them to
//! touch disjoint nodes.
//!
//! # Locking discipline
//!
//! * An insertion takes its own end's lock. It also needs the opposite lock
//!   when the chain is empty (both `front` and `back` change) or when a
//!   bounded list is within one slot of its capacity.
//! * A removal takes its own end's lock. It also needs the opposite lock
//!   unless at least three nodes are counted, so that the node it unlinks and
//!   the neighbour whose link it rewrites are never touched by the other end.
//! * When both locks are needed they are always acquired front first. Back-end
//!   operations release the back lock and reacquire in that order, then
//!   re-examine the chain.
//!
//! The element count lives in an atomic counter that is only changed while the
//! changing end's lock is held. Readers that need an exact count take both
//! locks in shared mode.

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_utils::CachePadded;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::common::{Capacity, ConcurrentQueueOps, Container};
use crate::error::Result;
use crate::iter::Snapshot;
use crate::node::{self, Link, Node, Values};
use crate::utils::debug_container;

/// Fewest counted nodes at which a removal may run under its own lock alone.
///
/// With fewer nodes the removed node or its neighbour may be the node the
/// opposite end is linking or unlinking.
const SOLO_REMOVE_MIN: usize = 3;

type ReadGuard<'a, T> = RwLockReadGuard<'a, Link<T>>;
type WriteGuard<'a, T> = RwLockWriteGuard<'a, Link<T>>;

/// A thread-safe double-ended list, optionally bounded
///
/// All operations take `&self`; share the list between threads with an
/// [`Arc`](std::sync::Arc). Peeks, snapshots and copies clone the stored values
/// so that no reference into the chain ever escapes a lock.
pub struct SafeList<T> {
    /// First node, guarded by the front lock
    ///
    /// Placed on its own cache line to avoid false sharing with `back`
    front: CachePadded<RwLock<Link<T>>>,

    /// Last node, guarded by the back lock
    back: CachePadded<RwLock<Link<T>>>,

    /// Number of linked nodes
    size: CachePadded<AtomicUsize>,

    capacity: Capacity,

    /// The list owns its nodes
    _marker: PhantomData<Box<Node<T>>>,
}

// Safety: nodes are reachable only through the region locks, and values only
// leave the list by move (requires Send) or by clone through a shared
// reference (requires Sync).
unsafe impl<T: Send> Send for SafeList<T> {}
unsafe impl<T: Send + Sync> Sync for SafeList<T> {}

impl<T> SafeList<T> {
    /// Creates an empty unbounded list.
    pub fn new() -> Self {
        Self::with_limit(Capacity::Unbounded)
    }

    /// Creates an empty list holding at most `capacity` elements.
    ///
    /// Fails with [`Error::NegativeCapacity`](crate::Error::NegativeCapacity)
    /// if `capacity` is negative.
    pub fn bounded(capacity: isize) -> Result<Self> {
        Ok(Self::with_limit(Capacity::bounded(capacity)?))
    }

    /// Creates a bounded list pre-populated with `values`, front to back.
    pub fn bounded_from<I>(capacity: isize, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let capacity = Capacity::bounded(capacity)?;
        let values: Vec<T> = values.into_iter().collect();
        capacity.check(values.len())?;

        let mut list = Self::with_limit(capacity);
        for value in values {
            list.push_back_mut(value);
        }
        Ok(list)
    }

    fn with_limit(capacity: Capacity) -> Self {
        Self {
            front: CachePadded::new(RwLock::new(None)),
            back: CachePadded::new(RwLock::new(None)),
            size: CachePadded::new(AtomicUsize::new(0)),
            capacity,
            _marker: PhantomData,
        }
    }

    /// Appends without locking; exclusive access makes the locks redundant.
    fn push_back_mut(&mut self, value: T) {
        let node = Node::alloc(value);
        let back = self.back.get_mut();
        match *back {
            Some(tail) => unsafe {
                node.as_ref().set_prev(Some(tail));
                tail.as_ref().set_next(Some(node));
            },
            None => *self.front.get_mut() = Some(node),
        }
        *back = Some(node);
        *self.size.get_mut() += 1;
    }

    /// Acquires both region locks exclusively, front first.
    #[inline]
    fn write_both(&self) -> (WriteGuard<'_, T>, WriteGuard<'_, T>) {
        let front = self.front.write();
        let back = self.back.write();
        (front, back)
    }

    /// Acquires both region locks in shared mode, front first.
    #[inline]
    fn read_both(&self) -> (ReadGuard<'_, T>, ReadGuard<'_, T>) {
        let front = self.front.read();
        let back = self.back.read();
        (front, back)
    }

    /// Adds a value at the back.
    ///
    /// Returns false, leaving the list untouched, if the list is full.
    pub fn append(&self, value: T) -> bool {
        self.try_append(value).is_ok()
    }

    /// Adds a value at the back, handing it back if the list is full.
    pub fn try_append(&self, value: T) -> Result<(), T> {
        {
            let mut back = self.back.write();
            let size = self.size.load(Ordering::Acquire);

            // Room for this insert plus one in flight at the front.
            if let Some(tail) = *back {
                if self.capacity.allows(size + 2) {
                    let node = Node::alloc(value);
                    unsafe {
                        node.as_ref().set_prev(Some(tail));
                        tail.as_ref().set_next(Some(node));
                    }
                    *back = Some(node);
                    self.size.fetch_add(1, Ordering::AcqRel);
                    return Ok(());
                }
            }
        }

        let (mut front, mut back) = self.write_both();
        self.link_back(&mut front, &mut back, value)
    }

    /// Adds a value at the front.
    ///
    /// Returns false, leaving the list untouched, if the list is full.
    pub fn prepend(&self, value: T) -> bool {
        self.try_prepend(value).is_ok()
    }

    /// Adds a value at the front, handing it back if the list is full.
    pub fn try_prepend(&self, value: T) -> Result<(), T> {
        let mut front = self.front.write();
        let size = self.size.load(Ordering::Acquire);

        if let Some(head) = *front {
            if self.capacity.allows(size + 2) {
                let node = Node::alloc(value);
                unsafe {
                    node.as_ref().set_next(Some(head));
                    head.as_ref().set_prev(Some(node));
                }
                *front = Some(node);
                self.size.fetch_add(1, Ordering::AcqRel);
                return Ok(());
            }
        }

        let mut back = self.back.write();
        self.link_front(&mut front, &mut back, value)
    }

    /// Adds values at the back in order and returns how many were added.
    ///
    /// Stops at the first refused value.
    pub fn append_many<I: IntoIterator<Item = T>>(&self, values: I) -> usize {
        let mut added = 0;
        for value in values {
            if !self.append(value) {
                break;
            }
            added += 1;
        }
        added
    }

    /// Removes and returns the front value, or `None` if the list is empty.
    pub fn delete_first(&self) -> Option<T> {
        let mut front = self.front.write();

        if self.size.load(Ordering::Acquire) >= SOLO_REMOVE_MIN {
            if let Some(head) = *front {
                return Some(unsafe { self.pop_head(&mut front, head) });
            }
        }

        let mut back = self.back.write();
        self.unlink_front(&mut front, &mut back)
    }

    /// Removes and returns the back value, or `None` if the list is empty.
    pub fn delete_last(&self) -> Option<T> {
        {
            let mut back = self.back.write();

            if self.size.load(Ordering::Acquire) >= SOLO_REMOVE_MIN {
                if let Some(tail) = *back {
                    return Some(unsafe { self.pop_tail(&mut back, tail) });
                }
            }
        }

        let (mut front, mut back) = self.write_both();
        self.unlink_back(&mut front, &mut back)
    }

    /// Returns a clone of the front value without removing it.
    pub fn peek_first(&self) -> Option<T>
    where
        T: Clone,
    {
        let front = self.front.read();
        (*front).map(|head| unsafe { head.as_ref() }.value().clone())
    }

    /// Returns a clone of the back value without removing it.
    pub fn peek_last(&self) -> Option<T>
    where
        T: Clone,
    {
        let back = self.back.read();
        (*back).map(|tail| unsafe { tail.as_ref() }.value().clone())
    }

    /// Checks whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.front.read().is_none()
    }

    /// Returns the number of elements in the list.
    pub fn size(&self) -> usize {
        let _guards = self.read_both();
        self.size.load(Ordering::Acquire)
    }

    /// Returns the maximum number of elements, or `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity.limit()
    }

    /// Checks whether the list is at its capacity.
    pub fn is_full(&self) -> bool {
        self.capacity.is_full(self.size())
    }

    /// Removes every element.
    pub fn clear(&self) {
        let head = {
            let (mut front, mut back) = self.write_both();
            *back = None;
            self.size.store(0, Ordering::Release);
            front.take()
        };

        // The chain is detached; release the values outside the locks.
        unsafe { node::free_chain(head) }
    }

    /// Returns a copy of the elements, front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let (front, _back) = self.read_both();
        let mut values = Vec::with_capacity(self.size.load(Ordering::Acquire));
        values.extend(unsafe { Values::new(*front) }.cloned());
        values
    }

    /// Returns a single-pass iterator over a copy of the elements.
    pub fn snapshot(&self) -> Snapshot<T>
    where
        T: Clone,
    {
        Snapshot::new(self.to_vec())
    }

    fn link_back(&self, front: &mut Link<T>, back: &mut Link<T>, value: T) -> Result<(), T> {
        if !self.capacity.allows(self.size.load(Ordering::Acquire) + 1) {
            return Err(value);
        }

        let node = Node::alloc(value);
        match *back {
            Some(tail) => unsafe {
                node.as_ref().set_prev(Some(tail));
                tail.as_ref().set_next(Some(node));
            },
            None => *front = Some(node),
        }
        *back = Some(node);
        self.size.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }

    fn link_front(&self, front: &mut Link<T>, back: &mut Link<T>, value: T) -> Result<(), T> {
        if !self.capacity.allows(self.size.load(Ordering::Acquire) + 1) {
            return Err(value);
        }

        let node = Node::alloc(value);
        match *front {
            Some(head) => unsafe {
                node.as_ref().set_next(Some(head));
                head.as_ref().set_prev(Some(node));
            },
            None => *back = Some(node),
        }
        *front = Some(node);
        self.size.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }

    fn unlink_front(&self, front: &mut Link<T>, back: &mut Link<T>) -> Option<T> {
        let head = (*front)?;
        unsafe {
            if head.as_ref().next().is_none() {
                *back = None;
            }
            Some(self.pop_head(front, head))
        }
    }

    fn unlink_back(&self, front: &mut Link<T>, back: &mut Link<T>) -> Option<T> {
        let tail = (*back)?;
        unsafe {
            if tail.as_ref().prev().is_none() {
                *front = None;
            }
            Some(self.pop_tail(back, tail))
        }
    }

    /// Unlinks and frees the front node.
    ///
    /// # Safety
    ///
    /// `head` must be the node in `front`, and the caller must hold whichever
    /// locks make its successor's `prev` link exclusively theirs.
    unsafe fn pop_head(&self, front: &mut Link<T>, head: NonNull<Node<T>>) -> T {
        let next = head.as_ref().next();
        if let Some(next) = next {
            next.as_ref().set_prev(None);
        }
        *front = next;
        head.as_ref().set_next(None);
        self.size.fetch_sub(1, Ordering::AcqRel);
        Node::free(head)
    }

    /// Unlinks and frees the back node.
    ///
    /// # Safety
    ///
    /// `tail` must be the node in `back`, and the caller must hold whichever
    /// locks make its predecessor's `next` link exclusively theirs.
    unsafe fn pop_tail(&self, back: &mut Link<T>, tail: NonNull<Node<T>>) -> T {
        let prev = tail.as_ref().prev();
        if let Some(prev) = prev {
            prev.as_ref().set_next(None);
        }
        *back = prev;
        tail.as_ref().set_prev(None);
        self.size.fetch_sub(1, Ordering::AcqRel);
        Node::free(tail)
    }

    /// Renders the list under both read locks with the given type name.
    pub(crate) fn debug_as(&self, f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result
    where
        T: fmt::Debug,
    {
        let (front, _back) = self.read_both();
        let size = self.size.load(Ordering::Acquire);
        debug_container(f, name, self.capacity, size, unsafe { Values::new(*front) })
    }

    /// Verifies the chain invariants while holding both locks.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let (front, back) = self.read_both();
        let size = self.size.load(Ordering::Acquire);

        assert_eq!(front.is_none(), back.is_none());
        assert_eq!(front.is_none(), size == 0);
        if let Some(limit) = self.capacity.limit() {
            assert!(size <= limit);
        }

        unsafe {
            let mut count = 0;
            let mut last = None;
            let mut cursor = *front;
            while let Some(node) = cursor {
                assert_eq!(node.as_ref().prev(), last);
                last = Some(node);
                cursor = node.as_ref().next();
                count += 1;
            }
            assert_eq!(count, size);
            assert_eq!(last, *back);
        }
    }
}

impl<T> Default for SafeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SafeList<T> {
    fn drop(&mut self) {
        let head = self.front.get_mut().take();
        *self.back.get_mut() = None;
        unsafe { node::free_chain(head) }
    }
}

impl<T: Clone> Clone for SafeList<T> {
    /// Copies the list node by node; the copy shares no links with `self`.
    fn clone(&self) -> Self {
        let mut copy = Self::with_limit(self.capacity);
        let (front, _back) = self.read_both();
        for value in unsafe { Values::new(*front) } {
            copy.push_back_mut(value.clone());
        }
        copy
    }
}

impl<T> FromIterator<T> for SafeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back_mut(value);
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for SafeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.debug_as(f, "SafeList")
    }
}

impl<T> Container<T> for SafeList<T> {
    fn size(&self) -> usize {
        SafeList::size(self)
    }

    fn is_empty(&self) -> bool {
        SafeList::is_empty(self)
    }

    fn capacity(&self) -> Option<usize> {
        self.capacity.limit()
    }

    fn clear(&mut self) {
        SafeList::clear(self)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        SafeList::to_vec(self)
    }
}

impl<T> ConcurrentQueueOps<T> for SafeList<T> {
    fn try_push(&self, value: T) -> Result<(), T> {
        self.try_append(value)
    }

    fn try_pop(&self) -> Option<T> {
        self.delete_first()
    }
}
