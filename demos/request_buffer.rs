//! Example: Absorbing request bursts with BlockDeque
//!
//! This demonstrates the bursty-then-stable pattern the deque is tuned for:
//! - A burst of requests grows the ring block by block
//! - Draining shrinks it back to the anchor block plus the spare reserve
//! - Refilling reuses the spare instead of allocating
//!
//! Run with `RUST_LOG=ringdeque=trace` to watch block allocation, reuse and detachment.

use ringdeque::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Request {
    id: u32,
    path: &'static str,
}

fn print_stats(label: &str, deque: &BlockDeque<Request>) {
    let stats = deque.stats();
    println!(
        "  [{}] len: {}, resident blocks: {}, spares: {}, allocations: {}, reuses: {}, detached: {}",
        label,
        deque.len(),
        stats.resident_blocks,
        stats.spare_blocks,
        stats.allocations,
        stats.reuses,
        stats.detachments
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== BlockDeque Request Buffer ===\n");

    let config = RingConfig::new()
        .with_block_capacity(64)
        .with_small_block_capacity(8)
        .with_spare_blocks(1);
    let mut queue = match BlockDeque::with_config(config) {
        Ok(queue) => queue,
        Err(e) => {
            eprintln!("invalid ring config: {}", e);
            return;
        }
    };
    println!("Config: {:?}\n", queue.config());

    // Cycle 1: steady trickle
    println!("Cycle 1: Steady trickle of 5 requests");
    for id in 0..5 {
        queue.push_back(Request { id, path: "/health" });
    }
    print_stats("trickle", &queue);
    while let Ok(req) = queue.pop_front() {
        println!("  [WORKER] Served #{} {}", req.id, req.path);
    }
    println!();

    // Cycle 2: burst
    println!("Cycle 2: Burst of 1000 requests");
    for id in 0..1_000 {
        queue.push_back(Request { id, path: "/api/orders" });
    }
    print_stats("burst", &queue);

    // A priority request jumps the line
    queue.push_front(Request {
        id: 9_999,
        path: "/admin/shutdown",
    });
    if let Ok(req) = queue.peek_front() {
        println!("  [WORKER] Next up: #{} {}", req.id, req.path);
    }

    let mut served = 0;
    while queue.pop_front().is_ok() {
        served += 1;
    }
    println!("  [WORKER] Served {} requests", served);
    print_stats("drained", &queue);
    println!();

    // Cycle 3: refill reuses the retained spare
    println!("Cycle 3: Refill with 64 requests");
    let before = queue.stats().allocations;
    for id in 0..64 {
        queue.push_back(Request { id, path: "/api/cart" });
    }
    print_stats("refill", &queue);
    println!(
        "  New allocations during refill: {}",
        queue.stats().allocations - before
    );

    // Cancel the newest request
    if let Ok(req) = queue.pop_back() {
        println!("  [CLIENT] Cancelled #{} {}", req.id, req.path);
    }
    queue.clear();
    print_stats("cleared", &queue);

    match queue.pop_front() {
        Ok(req) => println!("  unexpected request #{}", req.id),
        Err(e) => println!("  [WORKER] Idle: {}", e),
    }
}
