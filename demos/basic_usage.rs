use linear_containers_rs::{
    ArrayStack, ConcurrentQueueOps, Container, LinkedList, List, SafeQueue, Stack,
};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Instant;

fn main() {
    println!("Linear containers example");
    println!("-------------------------\n");

    sequential();
    println!();
    producer_consumer();
}

fn sequential() {
    let mut stack: ArrayStack<&str> = ["a", "b"].into_iter().collect();
    stack.push("c");
    println!("{:?}", stack);
    println!("Popped {:?}", stack.pop());

    let mut list = LinkedList::bounded(3).unwrap();
    list.append(2);
    list.prepend(1);
    list.append(3);
    println!("{:?}", list);
    println!("Append when full accepted: {}", list.append(4));
    println!("First: {:?}, last: {:?}", list.peek_first(), list.peek_last());
    println!("Front to back: {:?}", list.snapshot().collect::<Vec<_>>());
}

fn producer_consumer() {
    // Configuration
    const PRODUCERS: usize = 1; // Number of producer threads
    const CONSUMERS: usize = 2; // Number of consumer threads
    const N: u32 = 1_000_000; // Each producer pushes this many elements into the queue
    const CAPACITY: isize = 1024; // Queue capacity

    // Create a queue object shared between all producers and consumers
    let queue = match SafeQueue::<u32>::bounded(CAPACITY) {
        Ok(queue) => Arc::new(queue),
        Err(err) => {
            println!("ERROR: {}", err);
            return;
        }
    };

    println!("Starting {} producers and {} consumers", PRODUCERS, CONSUMERS);
    println!("Each producer will push {} elements", N);
    println!("Queue capacity: {}\n", CAPACITY);

    let start_time = Instant::now();

    // Start the consumers
    let sums = Arc::new(Mutex::new(vec![0u64; CONSUMERS]));
    let mut consumer_threads = Vec::with_capacity(CONSUMERS);

    for i in 0..CONSUMERS {
        let q = queue.clone();
        let sums = sums.clone();
        consumer_threads.push(thread::spawn(move || {
            let mut local_sum = 0u64;

            // Keep popping elements until we get a 0 (termination signal)
            loop {
                let n = q.pop_wait();
                if n == 0 {
                    break;
                }
                local_sum += n as u64;
            }

            sums.lock().unwrap()[i] = local_sum;
        }));
    }

    // Start the producers
    let mut producer_threads = Vec::with_capacity(PRODUCERS);

    for _ in 0..PRODUCERS {
        let q = queue.clone();
        producer_threads.push(thread::spawn(move || {
            // Push elements in descending order [N, 1]
            for n in (1..=N).rev() {
                q.push_wait(n);
            }
        }));
    }

    for handle in producer_threads {
        handle.join().unwrap();
    }

    // Tell consumers to terminate by pushing one 0 for each consumer
    for _ in 0..CONSUMERS {
        queue.push_wait(0);
    }

    for handle in consumer_threads {
        handle.join().unwrap();
    }

    let sums = sums.lock().unwrap();
    let total_sum: u64 = sums.iter().sum();

    // The expected sum is N*(N+1)/2 * PRODUCERS
    let expected_sum: u64 = (N as u64 * (N as u64 + 1) / 2) * PRODUCERS as u64;

    println!("Execution time: {:?}", start_time.elapsed());
    println!("Total sum: {}", total_sum);
    println!("Expected sum: {}", expected_sum);

    if total_sum != expected_sum {
        println!(
            "ERROR: Sum mismatch! Difference: {}",
            total_sum as i64 - expected_sum as i64
        );
    } else {
        println!("SUCCESS: All elements were correctly processed.");
    }

    println!("\nPer-consumer statistics:");
    for (i, &sum) in sums.iter().enumerate() {
        println!("Consumer {}: sum = {}", i, sum);
    }
    println!("Remaining in queue: {}", queue.size());
}
