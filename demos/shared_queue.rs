//! Example: SharedDeque between producer threads and a consumer
//!
//! The core deque is single-threaded; SharedDeque adds a mutex around it:
//! - Producer threads push requests to the back
//! - Urgent requests are pushed to the front
//! - The consumer drains from the front and batches under one lock with `with_mut`

use ringdeque::prelude::*;
use std::sync::Arc;
use std::thread;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== SharedDeque Producers/Consumer ===\n");

    let queue: Arc<SharedDeque<String>> = match SharedDeque::with_config(RingPreset::Bursty) {
        Ok(queue) => Arc::new(queue),
        Err(e) => {
            eprintln!("invalid ring config: {}", e);
            return;
        }
    };

    let producers: Vec<_> = (0..4)
        .map(|worker| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..250 {
                    queue.push_back(format!("worker-{}/job-{}", worker, i));
                }
                queue.push_front(format!("worker-{}/urgent", worker));
            })
        })
        .collect();

    for producer in producers {
        if producer.join().is_err() {
            eprintln!("producer thread panicked");
        }
    }
    println!("Queued: {}", queue.len());

    // Urgent jobs were pushed to the front
    for _ in 0..4 {
        match queue.pop_front() {
            Ok(job) => println!("  [CONSUMER] Urgent: {}", job),
            Err(e) => println!("  [CONSUMER] {}", e),
        }
    }

    // Drain the rest in batches of 100 under a single lock each
    let mut batches = 0;
    loop {
        let batch = queue.with_mut(|deque| {
            let mut batch = Vec::with_capacity(100);
            while batch.len() < 100 {
                match deque.pop_front() {
                    Ok(job) => batch.push(job),
                    Err(_) => break,
                }
            }
            batch
        });
        if batch.is_empty() {
            break;
        }
        batches += 1;
        println!("  [CONSUMER] Batch {}: {} jobs", batches, batch.len());
    }

    let stats = queue.stats();
    println!("\n--- Final Statistics ---");
    println!("Deque length: {}", queue.len());
    println!(
        "Resident blocks: {} (spares: {}), allocations: {}, detachments: {}",
        stats.resident_blocks, stats.spare_blocks, stats.allocations, stats.detachments
    );
}
