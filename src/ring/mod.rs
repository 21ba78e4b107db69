//! Block ring: a circular doubly-linked list of element blocks
//!
//! The ring supplies the next/previous block whenever a cursor crosses a block
//! boundary. Going around the ring from the head block:
//!
//! ```text
//!   head ──> ... ──> tail ──> spare ──> spare ──┐
//!    ^                                          │
//!    └──────────────────────────────────────────┘
//! ```
//!
//! Spares always sit between the tail block and the head block, so growing at either
//! end first looks at the immediate ring neighbor. A neighbor that is not the opposite
//! end of the active span must be a spare.

mod arena;

use tracing::{debug, trace};

use crate::BlockId;
use crate::policy::{Growth, GrowthPolicy, RingConfig};
use arena::BlockArena;

/// Snapshot of the ring's footprint and lifetime counters
///
/// # Examples
///
/// ```
/// use ringdeque::prelude::*;
///
/// let mut deque = BlockDeque::new();
/// assert_eq!(deque.stats().resident_blocks, 0);
///
/// deque.push_back("request");
/// let stats = deque.stats();
/// assert_eq!(stats.resident_blocks, 1);
/// assert_eq!(stats.allocations, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingStats {
    /// Blocks currently linked into the ring (active plus spare)
    pub resident_blocks: usize,
    /// Empty blocks parked in the ring for reuse
    pub spare_blocks: usize,
    /// Blocks allocated over the deque's lifetime
    pub allocations: u64,
    /// Boundary crossings served by a spare instead of an allocation
    pub reuses: u64,
    /// Blocks released because the spare budget was exceeded
    pub detachments: u64,
}

/// Direction for walking the spare arc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Walk {
    /// Follow `next` links (tail side toward head side)
    Forward,
    /// Follow `prev` links (head side toward tail side)
    Backward,
}

pub(crate) struct Ring<T> {
    arena: BlockArena<T>,
    policy: GrowthPolicy,
    spares: usize,
    allocations: u64,
    reuses: u64,
    detachments: u64,
}

impl<T> Ring<T> {
    pub(crate) const fn new(policy: GrowthPolicy) -> Self {
        Self {
            arena: BlockArena::new(),
            policy,
            spares: 0,
            allocations: 0,
            reuses: 0,
            detachments: 0,
        }
    }

    #[inline]
    pub(crate) fn config(&self) -> RingConfig {
        self.policy.config()
    }

    /// True until the first block is allocated
    #[inline]
    pub(crate) fn is_unallocated(&self) -> bool {
        self.arena.len() == 0
    }

    pub(crate) fn stats(&self) -> RingStats {
        RingStats {
            resident_blocks: self.arena.len(),
            spare_blocks: self.spares,
            allocations: self.allocations,
            reuses: self.reuses,
            detachments: self.detachments,
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self, id: BlockId) -> usize {
        self.arena[id].capacity()
    }

    #[inline(always)]
    pub(crate) fn next(&self, id: BlockId) -> BlockId {
        self.arena[id].next
    }

    #[inline(always)]
    pub(crate) fn prev(&self, id: BlockId) -> BlockId {
        self.arena[id].prev
    }

    #[inline(always)]
    pub(crate) fn get(&self, id: BlockId, offset: usize) -> Option<&T> {
        self.arena[id].get(offset)
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, id: BlockId, offset: usize, value: T) {
        self.arena[id].put(offset, value);
    }

    #[inline(always)]
    pub(crate) fn take(&mut self, id: BlockId, offset: usize) -> Option<T> {
        self.arena[id].take(offset)
    }

    /// Allocates the first block, linked to itself
    pub(crate) fn anchor(&mut self) -> BlockId {
        debug_assert!(self.is_unallocated());
        let capacity = self.policy.capacity_for(self.allocations);
        let id = self.arena.alloc(capacity);
        self.arena[id].next = id;
        self.arena[id].prev = id;
        self.allocations += 1;
        trace!(block = ?id, capacity, "allocated anchor block");
        id
    }

    /// Supplies the block that follows a full tail block
    ///
    /// The ring successor is reused when it is a spare. Otherwise a new block is linked
    /// between the tail block and the head block.
    pub(crate) fn advance_tail(&mut self, tail: BlockId, head: BlockId) -> BlockId {
        let next = self.next(tail);
        match self.policy.on_boundary(next != head, self.allocations) {
            Growth::Reuse => self.absorb_spare(next),
            Growth::Allocate { capacity } => self.link_after(tail, capacity),
        }
    }

    /// Supplies the block that precedes a head block with no room left in front
    pub(crate) fn advance_head(&mut self, head: BlockId, tail: BlockId) -> BlockId {
        let prev = self.prev(head);
        match self.policy.on_boundary(prev != tail, self.allocations) {
            Growth::Reuse => self.absorb_spare(prev),
            Growth::Allocate { capacity } => self.link_after(tail, capacity),
        }
    }

    /// Parks the emptied head block as a spare and returns the new head block
    ///
    /// The vacated block becomes the spare nearest the head, so any surplus is taken
    /// from the far end of the spare arc, just after the tail block.
    pub(crate) fn retreat_head(&mut self, vacated: BlockId, tail: BlockId) -> BlockId {
        let head = self.next(vacated);
        self.spares += 1;
        let farthest = self.next(tail);
        self.release_surplus_spares(farthest, Walk::Forward);
        head
    }

    /// Parks the emptied tail block as a spare and returns the new tail block
    pub(crate) fn retreat_tail(&mut self, vacated: BlockId, head: BlockId) -> BlockId {
        let tail = self.prev(vacated);
        self.spares += 1;
        let farthest = self.prev(head);
        self.release_surplus_spares(farthest, Walk::Backward);
        tail
    }

    /// Detaches spares beyond the budget, starting at `farthest` and walking toward
    /// the end that was just vacated
    pub(crate) fn release_surplus_spares(&mut self, farthest: BlockId, walk: Walk) {
        let mut surplus = self.policy.surplus(self.spares);
        let mut cursor = farthest;
        while surplus > 0 {
            let victim = cursor;
            cursor = match walk {
                Walk::Forward => self.next(victim),
                Walk::Backward => self.prev(victim),
            };
            self.detach(victim);
            surplus -= 1;
        }
    }

    fn absorb_spare(&mut self, spare: BlockId) -> BlockId {
        debug_assert!(self.spares > 0, "ring neighbor {:?} is not a spare", spare);
        self.spares -= 1;
        self.reuses += 1;
        trace!(block = ?spare, spares = self.spares, "reused spare block");
        spare
    }

    fn link_after(&mut self, at: BlockId, capacity: usize) -> BlockId {
        let id = self.arena.alloc(capacity);
        let next = self.next(at);
        self.arena[id].prev = at;
        self.arena[id].next = next;
        self.arena[at].next = id;
        self.arena[next].prev = id;
        self.allocations += 1;
        trace!(block = ?id, capacity, "allocated ring block");
        id
    }

    fn detach(&mut self, victim: BlockId) {
        let prev = self.prev(victim);
        let next = self.next(victim);
        self.arena[prev].next = next;
        self.arena[next].prev = prev;

        let capacity = self.capacity(victim);
        self.arena.free(victim);
        self.spares -= 1;
        self.detachments += 1;
        debug!(block = ?victim, capacity, spares = self.spares, "detached surplus spare block");
    }
}
