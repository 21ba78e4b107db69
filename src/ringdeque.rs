//! # RingDeque - A Self-Tuning Block Deque
//!
//! RingDeque provides a double-ended queue for bursty-then-stable workloads such as
//! request buffering in network services. It features:
//!
//! - **Strict O(1) operations** - Every push, pop and peek is constant time, never amortized
//! - **Ring-shaped growth** - Blocks are linked in a circle and emptied blocks are reused in place
//! - **Bounded footprint** - Memory shrinks back after a burst, keeping a small spare reserve
//! - **No element copying** - Crossing a block boundary never moves stored values
//! - **Optional shared wrapper** - A mutex decorator for callers that need cross-thread access
//!
//! ## Quick Start
//!
//! ```rust
//! use ringdeque::prelude::*;
//!
//! let mut deque = BlockDeque::new();
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//!
//! assert_eq!(deque.len(), 3);
//! assert_eq!(deque.pop_front(), Ok(0));
//! assert_eq!(deque.pop_back(), Ok(2));
//! assert_eq!(deque.peek_front(), Ok(&1));
//! ```
//!
//! ## Features
//!
//! - `shared` (default) - [`SharedDeque`](prelude::SharedDeque), a `parking_lot` mutex decorator
//! - `serde` - Serialize/deserialize [`RingConfig`](prelude::RingConfig)
//!
//! ## Architecture
//!
//! ### Block Ring
//!
//! Elements live in fixed-capacity blocks. Blocks are stored in an arena and addressed by
//! [`BlockId`]; each block carries `next`/`prev` ids that close into a ring. At any moment the
//! ring splits into:
//!
//! - the **active span** - the arc from the head block to the tail block, holding live elements
//! - **spare blocks** - empty blocks parked between the tail and the head, ready for reuse
//!
//! Blocks beyond the spare budget are detached: their storage is dropped and the arena slot
//! goes on a free list.
//!
//! ### End Cursors
//!
//! The head cursor points at the oldest element, the tail cursor one past the newest. Pushes and
//! pops inside a block only move an offset. The ring is consulted only when an offset crosses a
//! block boundary.
//!
//! ### Growth/Shrink Policy
//!
//! [`RingConfig`](prelude::RingConfig) controls the three tuning knobs:
//!
//! | Knob | Default | Meaning |
//! |------|---------|---------|
//! | `block_capacity` | 256 | Slots per block |
//! | `small_block_capacity` | 8 | Slots in the very first block |
//! | `spare_blocks` | 1 | Empty blocks retained after a drain |
//!
//! ## Examples
//!
//! ### Burst Absorption
//!
//! ```rust
//! use ringdeque::prelude::*;
//!
//! let config = RingConfig::new().with_block_capacity(16).with_spare_blocks(1);
//! let mut deque = BlockDeque::with_config(config).unwrap();
//!
//! for i in 0..1_000 {
//!     deque.push_back(i);
//! }
//! while deque.pop_front().is_ok() {}
//!
//! // Only the anchor block and one spare survive the drain
//! assert!(deque.stats().resident_blocks <= 2);
//! ```
//!
//! ### Shared Access
//!
//! ```rust
//! # #[cfg(feature = "shared")] {
//! use ringdeque::prelude::*;
//! use std::sync::Arc;
//!
//! let queue = Arc::new(SharedDeque::new());
//! let producer = Arc::clone(&queue);
//!
//! std::thread::spawn(move || producer.push_back(42)).join().unwrap();
//! assert_eq!(queue.pop_front(), Ok(42));
//! # }
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | push_back / push_front | O(1) | May allocate or reuse one block |
//! | pop_back / pop_front | O(1) | May park or detach one block |
//! | peek_front / peek_back | O(1) | No mutation |
//! | len | O(1) | Cached value |
//!
//! ## no_std Support
//!
//! The core is `no_std` and only needs `alloc`. The `shared` feature pulls in `parking_lot`
//! and therefore `std`.

#![no_std]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/ringdeque/0.1.0")]

extern crate alloc;

mod deque;
mod error;
mod policy;
mod ring;

#[cfg(feature = "shared")]
mod shared;

/// Convenient re-exports for common use - this is the public API
///
/// Users should import from prelude:
/// ```
/// use ringdeque::prelude::*;
/// ```
pub mod prelude;

/// Returns the version string of the ringdeque crate
///
/// # Examples
///
/// ```
/// use ringdeque::version;
/// assert_eq!(version(), "0.1.0");
/// ```
pub fn version() -> &'static str {
    "0.1.0"
}

/// A handle for a block in the ring arena
///
/// Handles combine an arena slot index with a generation counter. When a block is
/// detached its slot generation is bumped, so a handle kept past detachment no longer
/// resolves to a block.
///
/// # Examples
///
/// ```
/// use ringdeque::BlockId;
///
/// let id = BlockId::new(5, 2);
/// let (slot, generation) = id.parts();
/// assert_eq!(slot, 5);
/// assert_eq!(generation, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockId {
    /// Slot index in the arena
    pub slot: u32,
    /// Generation counter for validity checking
    pub generation: u32,
}

impl BlockId {
    /// Sentinel used by cursors before the first block is allocated
    pub const NONE: BlockId = BlockId::new(u32::MAX, 0);

    /// Creates a new handle from a slot index and generation
    pub const fn new(slot: u32, generation: u32) -> Self {
        Self { slot, generation }
    }

    /// Returns the slot index and generation as a tuple
    pub const fn parts(&self) -> (u32, u32) {
        (self.slot, self.generation)
    }

    /// Returns true if this is the [`BlockId::NONE`] sentinel
    pub const fn is_none(&self) -> bool {
        self.slot == u32::MAX
    }
}
