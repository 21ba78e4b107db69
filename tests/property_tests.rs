//! Randomised operation sequences checked against `std::collections::VecDeque`.
use rand::{Rng, SeedableRng, rngs::SmallRng};
use ringdeque::prelude::*;
use std::collections::VecDeque;
use std::rc::Rc;

fn tiny_config(spares: usize) -> RingConfig {
    RingConfig::new()
        .with_block_capacity(4)
        .with_small_block_capacity(2)
        .with_spare_blocks(spares)
}

/// Any mix of pushes and pops at both ends must agree with the model element for
/// element, and `len()` must equal pushes minus successful pops.
#[test]
fn property_matches_vecdeque_model() {
    const SEEDS: u64 = 32;
    const STEPS: usize = 4_096;

    for seed in 0..SEEDS {
        let mut rng = SmallRng::seed_from_u64(0xDE0_u64 ^ seed);
        let mut deque = BlockDeque::with_config(tiny_config((seed % 3) as usize)).unwrap();
        let mut model = VecDeque::new();
        let mut pushes = 0usize;
        let mut pops = 0usize;

        for step in 0..STEPS {
            let value: u32 = rng.random();
            match rng.random_range(0..6) {
                0 | 1 => {
                    deque.push_back(value);
                    model.push_back(value);
                    pushes += 1;
                }
                2 => {
                    deque.push_front(value);
                    model.push_front(value);
                    pushes += 1;
                }
                3 => {
                    let expected = model.pop_front().ok_or(EmptyError);
                    if expected.is_ok() {
                        pops += 1;
                    }
                    assert_eq!(deque.pop_front(), expected, "seed {seed} step {step}");
                }
                4 => {
                    let expected = model.pop_back().ok_or(EmptyError);
                    if expected.is_ok() {
                        pops += 1;
                    }
                    assert_eq!(deque.pop_back(), expected, "seed {seed} step {step}");
                }
                _ => {
                    assert_eq!(deque.peek_front(), model.front().ok_or(EmptyError));
                    assert_eq!(deque.peek_back(), model.back().ok_or(EmptyError));
                }
            }
            assert_eq!(deque.len(), pushes - pops, "seed {seed} step {step}");
            assert_eq!(deque.len(), model.len());

            let stats = deque.stats();
            assert!(
                stats.spare_blocks <= deque.config().spare_blocks,
                "seed {seed} step {step}: {stats:?}"
            );
        }
    }
}

/// Bursts followed by full drains must always return the ring to at most
/// `spare_blocks + 1` resident blocks, whatever the burst size.
#[test]
fn property_drain_bounds_resident_blocks() {
    let mut rng = SmallRng::seed_from_u64(0xB0_0057);

    for spares in 0..4 {
        let mut deque = BlockDeque::with_config(tiny_config(spares)).unwrap();
        for _ in 0..64 {
            let burst = rng.random_range(1..2_000);
            for i in 0..burst {
                if rng.random_bool(0.5) {
                    deque.push_back(i);
                } else {
                    deque.push_front(i);
                }
            }
            while !deque.is_empty() {
                let popped = if rng.random_bool(0.5) {
                    deque.pop_front()
                } else {
                    deque.pop_back()
                };
                assert!(popped.is_ok());
            }
            let stats = deque.stats();
            assert!(stats.resident_blocks <= spares + 1, "{stats:?}");
        }
    }
}

/// Popping from an empty deque reports `EmptyError` without disturbing later use.
#[test]
fn property_empty_pops_are_inert() {
    let mut deque = BlockDeque::with_config(tiny_config(1)).unwrap();
    for round in 0..10u32 {
        for _ in 0..3 {
            assert_eq!(deque.pop_front(), Err(EmptyError));
            assert_eq!(deque.pop_back(), Err(EmptyError));
            assert_eq!(deque.len(), 0);
        }
        for i in 0..round * 5 {
            deque.push_back(i);
        }
        for i in 0..round * 5 {
            assert_eq!(deque.pop_front(), Ok(i));
        }
    }
}

/// Values stored before a boundary crossing keep their identity afterwards, and no
/// popped value is retained by the deque.
#[test]
fn property_values_are_never_moved_or_retained() {
    let mut deque = BlockDeque::with_config(tiny_config(1)).unwrap();
    let values: Vec<Rc<usize>> = (0..50).map(Rc::new).collect();

    for value in &values {
        deque.push_back(Rc::clone(value));
        // Front element stays the very first value as blocks are added
        assert!(Rc::ptr_eq(deque.peek_front().unwrap(), &values[0]));
        assert!(Rc::ptr_eq(deque.peek_back().unwrap(), value));
    }

    for value in &values {
        let popped = deque.pop_front().unwrap();
        assert!(Rc::ptr_eq(&popped, value));
        drop(popped);
        assert_eq!(Rc::strong_count(value), 1);
    }
}

/// Default configuration scenario: overflow one block then drain; refilling a block's
/// worth must not allocate while a spare is kept.
#[test]
fn scenario_block_plus_one_refill_without_allocation() {
    let mut deque = BlockDeque::new();
    let block = deque.config().block_capacity;

    for i in 0..=block {
        deque.push_back(i);
    }
    for _ in 0..=block {
        assert!(deque.pop_front().is_ok());
    }
    assert!(deque.is_empty());

    let allocations = deque.stats().allocations;
    deque.push_back(0);
    assert_eq!(deque.stats().allocations, allocations);
}
