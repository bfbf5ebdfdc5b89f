//! Equivalence tests checking that every container behaves like a
//! `VecDeque` model under long random operation sequences.

use linear_containers_rs::{
    ArrayList, ArrayQueue, ArrayStack, Container, LinkedList, LinkedQueue, LinkedStack, List,
    Queue, SafeList, SafeQueue, Stack,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

const OPS: usize = 5_000;
const SEEDS: [u64; 3] = [1, 42, 0x5eed];

fn fits(model: &VecDeque<u32>, capacity: Option<usize>) -> bool {
    capacity.map_or(true, |c| model.len() < c)
}

/// The model keeps the top of the stack at its front.
fn check_stack<S: Stack<u32>>(mut stack: S, capacity: Option<usize>, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut model = VecDeque::new();

    for _ in 0..OPS {
        match rng.random_range(0..10) {
            0..=4 => {
                let value = rng.random::<u32>();
                let expected = fits(&model, capacity);
                assert_eq!(stack.push(value), expected);
                if expected {
                    model.push_front(value);
                }
            }
            5..=8 => assert_eq!(stack.pop(), model.pop_front()),
            _ => assert_eq!(stack.peek(), model.front()),
        }
        assert_eq!(stack.size(), model.len());
        assert_eq!(stack.is_full(), !fits(&model, capacity));
    }

    assert_eq!(stack.to_vec(), Vec::from(model));
}

fn check_queue<Q: Queue<u32>>(mut queue: Q, capacity: Option<usize>, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut model = VecDeque::new();

    for _ in 0..OPS {
        match rng.random_range(0..10) {
            0..=4 => {
                let value = rng.random::<u32>();
                let expected = fits(&model, capacity);
                assert_eq!(queue.enqueue(value), expected);
                if expected {
                    model.push_back(value);
                }
            }
            5..=8 => assert_eq!(queue.dequeue(), model.pop_front()),
            _ => assert_eq!(queue.peek(), model.front()),
        }
        assert_eq!(queue.size(), model.len());
    }

    assert_eq!(queue.to_vec(), Vec::from(model));
}

fn check_list<L: List<u32>>(mut list: L, capacity: Option<usize>, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut model = VecDeque::new();

    for _ in 0..OPS {
        match rng.random_range(0..12) {
            0..=5 => {
                let value = rng.random::<u32>();
                let expected = fits(&model, capacity);
                let at_back = rng.random_bool(0.5);
                if at_back {
                    assert_eq!(list.append(value), expected);
                } else {
                    assert_eq!(list.prepend(value), expected);
                }
                if expected && at_back {
                    model.push_back(value);
                } else if expected {
                    model.push_front(value);
                }
            }
            6..=7 => assert_eq!(list.delete_first(), model.pop_front()),
            8..=9 => assert_eq!(list.delete_last(), model.pop_back()),
            10 => assert_eq!(list.peek_first(), model.front()),
            _ => assert_eq!(list.peek_last(), model.back()),
        }
        assert_eq!(list.size(), model.len());
    }

    assert_eq!(list.to_vec(), Vec::from(model));
}

/// The thread-safe list, driven from one thread, against the same model.
fn check_safe_list(list: &SafeList<u32>, capacity: Option<usize>, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut model = VecDeque::new();

    for _ in 0..OPS {
        match rng.random_range(0..13) {
            0..=5 => {
                let value = rng.random::<u32>();
                let expected = fits(&model, capacity);
                if rng.random_bool(0.5) {
                    assert_eq!(list.append(value), expected);
                    if expected {
                        model.push_back(value);
                    }
                } else {
                    assert_eq!(list.prepend(value), expected);
                    if expected {
                        model.push_front(value);
                    }
                }
            }
            6..=7 => assert_eq!(list.delete_first(), model.pop_front()),
            8..=9 => assert_eq!(list.delete_last(), model.pop_back()),
            10 => assert_eq!(list.peek_first(), model.front().copied()),
            11 => assert_eq!(list.peek_last(), model.back().copied()),
            _ => assert_eq!(list.is_empty(), model.is_empty()),
        }
        assert_eq!(list.size(), model.len());
    }

    assert_eq!(list.to_vec(), Vec::from(model));
}

#[test]
fn test_stacks_match_model() {
    for seed in SEEDS {
        check_stack(ArrayStack::new(), None, seed);
        check_stack(LinkedStack::new(), None, seed);
        check_stack(ArrayStack::bounded(16).unwrap(), Some(16), seed);
        check_stack(LinkedStack::bounded(16).unwrap(), Some(16), seed);
    }
}

#[test]
fn test_queues_match_model() {
    for seed in SEEDS {
        check_queue(ArrayQueue::new(), None, seed);
        check_queue(LinkedQueue::new(), None, seed);
        check_queue(ArrayQueue::bounded(16).unwrap(), Some(16), seed);
        check_queue(LinkedQueue::bounded(16).unwrap(), Some(16), seed);
    }
}

#[test]
fn test_lists_match_model() {
    for seed in SEEDS {
        check_list(ArrayList::new(), None, seed);
        check_list(LinkedList::new(), None, seed);
        check_list(ArrayList::bounded(16).unwrap(), Some(16), seed);
        check_list(LinkedList::bounded(16).unwrap(), Some(16), seed);
    }
}

#[test]
fn test_safe_list_matches_model() {
    for seed in SEEDS {
        check_safe_list(&SafeList::new(), None, seed);
        check_safe_list(&SafeList::bounded(16).unwrap(), Some(16), seed);
        check_safe_list(&SafeList::bounded(1).unwrap(), Some(1), seed);
    }
}

#[test]
fn test_safe_queue_matches_array_queue() {
    let mut rng = StdRng::seed_from_u64(7);
    let safe = SafeQueue::bounded(8).unwrap();
    let mut plain = ArrayQueue::bounded(8).unwrap();

    for _ in 0..OPS {
        if rng.random_bool(0.55) {
            let value = rng.random::<u32>();
            assert_eq!(safe.enqueue(value), plain.enqueue(value));
        } else {
            assert_eq!(safe.dequeue(), plain.dequeue());
        }
        assert_eq!(safe.peek(), plain.peek().copied());
        assert_eq!(safe.is_full(), plain.is_full());
    }

    assert_eq!(safe.to_vec(), plain.to_vec());
}

#[test]
fn test_debug_renderings_agree() {
    let values = [3, 1, 2];

    let array: ArrayList<i32> = values.into_iter().collect();
    let linked: LinkedList<i32> = values.into_iter().collect();
    let safe: SafeList<i32> = values.into_iter().collect();

    let tail = "[capacity=unbounded, size=3, values=[3, 1, 2 →]]";
    assert_eq!(format!("{:?}", array), format!("ArrayList{}", tail));
    assert_eq!(format!("{:?}", linked), format!("LinkedList{}", tail));
    assert_eq!(format!("{:?}", safe), format!("SafeList{}", tail));
}
