//! Doubly-linked storage node
//!
//! A node owns its value but not its neighbours. Links are non-owning raw
//! pointers managed exclusively by the container that allocated the node.

use std::marker::PhantomData;
use std::ptr::{self, NonNull};
use std::sync::atomic::{AtomicPtr, Ordering};

/// Optional non-owning link to a node
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// A value with prev/next links
///
/// The links are atomics so that the thread-safe list can update the `prev`
/// field of one node while the opposite end updates its `next` field. Relaxed
/// ordering suffices: visibility across threads is established by the region
/// locks and the container's size counter.
pub(crate) struct Node<T> {
    value: T,
    prev: AtomicPtr<Node<T>>,
    next: AtomicPtr<Node<T>>,
}

#[inline(always)]
fn to_raw<T>(link: Link<T>) -> *mut Node<T> {
    link.map_or(ptr::null_mut(), NonNull::as_ptr)
}

impl<T> Node<T> {
    /// Creates an unlinked node.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            prev: AtomicPtr::new(ptr::null_mut()),
            next: AtomicPtr::new(ptr::null_mut()),
        }
    }

    /// Moves an unlinked node to the heap and leaks it as a link.
    ///
    /// The caller becomes responsible for releasing it with [`Node::free`].
    #[inline]
    pub(crate) fn alloc(value: T) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self::new(value))))
    }

    /// Reclaims a node produced by [`Node::alloc`] and returns its value.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`], must not have been freed, and
    /// must no longer be reachable through any container link.
    #[inline]
    pub(crate) unsafe fn free(node: NonNull<Self>) -> T {
        let Node { value, .. } = *Box::from_raw(node.as_ptr());
        value
    }

    #[inline]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) fn next(&self) -> Link<T> {
        NonNull::new(self.next.load(Ordering::Relaxed))
    }

    #[inline]
    pub(crate) fn set_next(&self, next: Link<T>) {
        self.next.store(to_raw(next), Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn prev(&self) -> Link<T> {
        NonNull::new(self.prev.load(Ordering::Relaxed))
    }

    #[inline]
    pub(crate) fn set_prev(&self, prev: Link<T>) {
        self.prev.store(to_raw(prev), Ordering::Relaxed);
    }
}

/// Iterator over the values of a chain, front to back
pub(crate) struct Values<'a, T> {
    cursor: Link<T>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Values<'a, T> {
    /// Starts a forward walk at `head`.
    ///
    /// # Safety
    ///
    /// Every node reachable from `head` must stay live and linked for `'a`.
    #[inline]
    pub(crate) unsafe fn new(head: Link<T>) -> Self {
        Self {
            cursor: head,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Iterator for Values<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let node = self.cursor?;
        let node: &'a Node<T> = unsafe { &*node.as_ptr() };
        self.cursor = node.next();
        Some(node.value())
    }
}

/// Frees every node reachable forward from `head`.
///
/// # Safety
///
/// The chain must be exclusively owned by the caller and no link into it may
/// be used afterwards.
pub(crate) unsafe fn free_chain<T>(head: Link<T>) {
    let mut cursor = head;
    while let Some(node) = cursor {
        cursor = node.as_ref().next();
        drop(Node::free(node));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_links() {
        let a = Node::alloc(1);
        let b = Node::alloc(2);

        unsafe {
            assert!(a.as_ref().next().is_none());
            assert!(a.as_ref().prev().is_none());

            a.as_ref().set_next(Some(b));
            b.as_ref().set_prev(Some(a));

            assert_eq!(a.as_ref().next(), Some(b));
            assert_eq!(b.as_ref().prev(), Some(a));

            let seen: Vec<i32> = Values::new(Some(a)).copied().collect();
            assert_eq!(seen, vec![1, 2]);

            b.as_ref().set_prev(None);
            a.as_ref().set_next(None);
            assert_eq!(Node::free(a), 1);
            assert_eq!(Node::free(b), 2);
        }
    }

    #[test]
    fn test_free_chain_drops_values() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        let a = Node::alloc(Rc::clone(&tracker));
        let b = Node::alloc(Rc::clone(&tracker));
        unsafe {
            a.as_ref().set_next(Some(b));
            b.as_ref().set_prev(Some(a));
            assert_eq!(Rc::strong_count(&tracker), 3);
            free_chain(Some(a));
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
