//! Last-in-first-out stacks
//!
//! [`ArrayStack`] keeps its elements in a `Vec` with the top at the end;
//! [`LinkedStack`] keeps them in a chain of boxed nodes with the top at the
//! head. Both are optionally bounded.

use std::fmt;

use crate::common::{Capacity, Container, Stack};
use crate::error::Result;
use crate::utils::debug_container;

/// A stack backed by a growable array
#[derive(Clone)]
pub struct ArrayStack<T> {
    values: Vec<T>,
    capacity: Capacity,
}

impl<T> ArrayStack<T> {
    /// Creates an empty unbounded stack.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            capacity: Capacity::Unbounded,
        }
    }

    /// Creates an empty stack holding at most `capacity` elements.
    pub fn bounded(capacity: isize) -> Result<Self> {
        Ok(Self {
            values: Vec::new(),
            capacity: Capacity::bounded(capacity)?,
        })
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container<T> for ArrayStack<T> {
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
        self.values.iter().rev().cloned().collect()
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, value: T) -> bool {
        if self.capacity.is_full(self.values.len()) {
            return false;
        }
        self.values.push(value);
        true
    }

    fn pop(&mut self) -> Option<T> {
        self.values.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.values.last()
    }

    /// Pushes all values, or none of them if they would exceed the capacity.
    fn push_many<I: IntoIterator<Item = T>>(&mut self, values: I) -> usize {
        let values: Vec<T> = values.into_iter().collect();
        if !self.capacity.allows(self.values.len() + values.len()) {
            return 0;
        }
        let pushed = values.len();
        self.values.extend(values);
        pushed
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
            capacity: Capacity::Unbounded,
        }
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    /// Pushes values until the stack is full; the rest are dropped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if !self.push(value) {
                break;
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_container(
            f,
            "ArrayStack",
            self.capacity,
            self.values.len(),
            self.values.iter().rev(),
        )
    }
}

struct StackNode<T> {
    value: T,
    next: Option<Box<StackNode<T>>>,
}

/// A stack backed by a singly-linked chain
pub struct LinkedStack<T> {
    top: Option<Box<StackNode<T>>>,
    size: usize,
    capacity: Capacity,
}

impl<T> LinkedStack<T> {
    /// Creates an empty unbounded stack.
    pub fn new() -> Self {
        Self {
            top: None,
            size: 0,
            capacity: Capacity::Unbounded,
        }
    }

    /// Creates an empty stack holding at most `capacity` elements.
    pub fn bounded(capacity: isize) -> Result<Self> {
        Ok(Self {
            top: None,
            size: 0,
            capacity: Capacity::bounded(capacity)?,
        })
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        let mut cursor = self.top.as_deref();
        std::iter::from_fn(move || {
            let node = cursor?;
            cursor = node.next.as_deref();
            Some(&node.value)
        })
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        // Unlink iteratively so long chains do not recurse.
        let mut cursor = self.top.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T> Container<T> for LinkedStack<T> {
    fn size(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> Option<usize> {
        self.capacity.limit()
    }

    fn clear(&mut self) {
        let mut cursor = self.top.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.size = 0;
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, value: T) -> bool {
        if self.capacity.is_full(self.size) {
            return false;
        }
        let next = self.top.take();
        self.top = Some(Box::new(StackNode { value, next }));
        self.size += 1;
        true
    }

    fn pop(&mut self) -> Option<T> {
        let node = self.top.take()?;
        self.top = node.next;
        self.size -= 1;
        Some(node.value)
    }

    fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.value)
    }
}

impl<T: Clone> Clone for LinkedStack<T> {
    fn clone(&self) -> Self {
        let mut copy = Self {
            top: None,
            size: 0,
            capacity: self.capacity,
        };
        let values: Vec<&T> = self.iter().collect();
        for value in values.into_iter().rev() {
            copy.push(value.clone());
        }
        copy
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    /// Pushes values until the stack is full; the rest are dropped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if !self.push(value) {
                break;
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_container(f, "LinkedStack", self.capacity, self.size, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn check_lifo<S: Stack<i32>>(mut stack: S) {
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);

        assert!(stack.push(1));
        assert!(stack.push(2));
        assert!(stack.push(3));
        assert_eq!(stack.size(), 3);
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.to_vec(), vec![3, 2, 1]);

        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.size(), 1);

        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    fn check_bounded<S: Stack<i32>>(mut stack: S) {
        assert!(stack.push(1));
        assert!(!stack.is_full());
        assert!(stack.push(2));
        assert!(stack.is_full());
        assert!(!stack.push(3));
        assert_eq!(stack.size(), 2);
        assert_eq!(stack.capacity(), Some(2));
        assert_eq!(stack.pop(), Some(2));
    }

    #[test]
    fn test_array_stack() {
        check_lifo(ArrayStack::new());
        check_bounded(ArrayStack::bounded(2).unwrap());
    }

    #[test]
    fn test_linked_stack() {
        check_lifo(LinkedStack::new());
        check_bounded(LinkedStack::bounded(2).unwrap());
    }

    #[test]
    fn test_stack_negative_capacity() {
        assert_eq!(
            ArrayStack::<i32>::bounded(-1).err(),
            Some(Error::NegativeCapacity(-1))
        );
        assert_eq!(
            LinkedStack::<i32>::bounded(-1).err(),
            Some(Error::NegativeCapacity(-1))
        );
    }

    #[test]
    fn test_array_stack_push_many_all_or_nothing() {
        let mut stack = ArrayStack::bounded(3).unwrap();
        assert_eq!(stack.push_many([1, 2, 3, 4]), 0);
        assert!(stack.is_empty());
        assert_eq!(stack.push_many([1, 2]), 2);
        assert_eq!(stack.to_vec(), vec![2, 1]);
    }

    #[test]
    fn test_linked_stack_push_many_all_or_nothing() {
        let mut stack = LinkedStack::bounded(3).unwrap();
        assert_eq!(stack.push_many([1, 2, 3, 4]), 0);
        assert!(stack.is_empty());
        assert_eq!(stack.push_many([1, 2, 3]), 3);
        assert_eq!(stack.to_vec(), vec![3, 2, 1]);
        assert_eq!(stack.push_many([4]), 0);
        assert_eq!(stack.size(), 3);
    }

    #[test]
    fn test_stacks_agree_on_oversized_batch() {
        let mut array = ArrayStack::bounded(3).unwrap();
        let mut linked = LinkedStack::bounded(3).unwrap();
        assert_eq!(array.push_many([1, 2, 3, 4]), linked.push_many([1, 2, 3, 4]));
        assert_eq!(array.to_vec(), linked.to_vec());
    }

    #[test]
    fn test_stack_clone_is_independent() {
        let mut original: LinkedStack<i32> = (1..=3).collect();
        let mut copy = original.clone();

        original.pop();
        copy.push(4);

        assert_eq!(original.to_vec(), vec![2, 1]);
        assert_eq!(copy.to_vec(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_stack_debug_format() {
        let stack: ArrayStack<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(
            format!("{:?}", stack),
            "ArrayStack[capacity=unbounded, size=3, values=[3, 2, 1 →]]"
        );

        let mut stack = LinkedStack::bounded(4).unwrap();
        stack.push('a');
        stack.push('b');
        assert_eq!(
            format!("{:?}", stack),
            "LinkedStack[capacity=4, size=2, values=['b', 'a' →]]"
        );
    }

    #[test]
    fn test_linked_stack_long_chain_drop() {
        let stack: LinkedStack<u32> = (0..200_000).collect();
        assert_eq!(stack.size(), 200_000);
        drop(stack);
    }
}
