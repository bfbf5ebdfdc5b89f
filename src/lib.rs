//! # linear_containers_rs
//!
//! Generic stacks, queues and double-ended lists in array-backed and
//! linked-node flavours, optionally bounded, plus a thread-safe list and
//! queue that guard each end with its own lock.
//!
//! The sequential containers take `&mut self` for mutation and hand out
//! borrowed peeks. [`SafeList`] and [`SafeQueue`] take `&self`, return clones
//! from their peeks and can be shared between threads behind an `Arc`.
//!
//! ```
//! use linear_containers_rs::{ConcurrentQueueOps, SafeQueue};
//!
//! let queue = SafeQueue::bounded(2).unwrap();
//! assert!(queue.enqueue(1));
//! assert!(queue.enqueue(2));
//! assert_eq!(queue.try_push(3), Err(3));
//! assert_eq!(queue.dequeue(), Some(1));
//! ```

mod node;
mod utils;

pub mod common;
pub mod error;
pub mod iter;
pub mod list;
pub mod queue;
pub mod safe_list;
pub mod safe_queue;
pub mod stack;

// Re-exports for convenience
pub use common::{Capacity, ConcurrentQueueOps, Container, List, Queue, Stack};
pub use error::{Error, Result};
pub use iter::Snapshot;
pub use list::{ArrayList, LinkedList};
pub use queue::{ArrayQueue, LinkedQueue};
pub use safe_list::SafeList;
pub use safe_queue::SafeQueue;
pub use stack::{ArrayStack, LinkedStack};
