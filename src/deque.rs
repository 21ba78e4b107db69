//! End cursors and the public deque type
//!
//! [`BlockDeque`] translates push/pop requests at either end into (block, offset)
//! addressing. Interior operations only move an offset; the block ring is consulted
//! when an offset runs off the edge of its block.
//!
//! # Cursor layout
//!
//! ```text
//!        head block               tail block
//!   [ . . . h x x x ] [ x x x x ] [ x x t . . ]
//!           ^                           ^
//!       head.offset              tail.offset (one past the newest)
//! ```
//!
//! While the deque holds elements every block in the active span is non-empty:
//! `head.offset < capacity` and `tail.offset > 0`. When the last element leaves, both
//! cursors are reset to offset 0 of the block that held it.

use core::fmt;

use crate::BlockId;
use crate::error::{ConfigError, EmptyError};
use crate::policy::{GrowthPolicy, RingConfig};
use crate::ring::{Ring, RingStats};

/// (block, offset) position of one end of the deque
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    block: BlockId,
    offset: usize,
}

impl Cursor {
    const UNSET: Cursor = Cursor::new(BlockId::NONE, 0);

    #[inline(always)]
    const fn new(block: BlockId, offset: usize) -> Self {
        Self { block, offset }
    }
}

/// A double-ended queue stored in a self-tuning ring of fixed-capacity blocks
///
/// Pushes and pops at both ends are strictly O(1). The ring grows by one block when a
/// cursor runs off its block and shrinks by parking emptied blocks as spares; spares
/// beyond the configured budget are freed, so the footprint after a burst returns to
/// the active span plus `spare_blocks`.
///
/// # Memory Model
///
/// - The first block ever allocated is small (`small_block_capacity`, or the capacity
///   hint) so tiny deques stay cheap
/// - Every later block has `block_capacity` slots
/// - Stored values are never moved between blocks
/// - A popped value's slot is cleared, so the deque never retains it
///
/// # Performance
///
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | push_back / push_front | O(1) | Allocates or reuses at most one block |
/// | pop_back / pop_front | O(1) | Parks or frees at most one block |
/// | peek_front / peek_back | O(1) | No mutation |
/// | len | O(1) | Cached value |
///
/// # Examples
///
/// ```
/// use ringdeque::prelude::*;
///
/// let mut deque = BlockDeque::new();
/// for i in 1..=5 {
///     deque.push_back(i);
/// }
/// for i in 1..=5 {
///     assert_eq!(deque.pop_front(), Ok(i));
/// }
/// assert!(deque.is_empty());
/// ```
pub struct BlockDeque<T> {
    ring: Ring<T>,
    head: Cursor,
    tail: Cursor,
    len: usize,
}

impl<T> Default for BlockDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BlockDeque<T> {
    /// Creates an empty deque with the default [`RingConfig`]
    ///
    /// No memory is allocated until the first push.
    pub fn new() -> Self {
        Self::from_policy(Self::default_policy(0))
    }

    /// Creates an empty deque whose first block holds `capacity` elements
    ///
    /// A hint of zero keeps the configured small block capacity. Later blocks use the
    /// regular block capacity regardless of the hint.
    ///
    /// ```
    /// use ringdeque::prelude::*;
    ///
    /// let mut deque = BlockDeque::with_capacity(100);
    /// for i in 0..100 {
    ///     deque.push_back(i);
    /// }
    /// assert_eq!(deque.stats().allocations, 1);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_policy(Self::default_policy(capacity))
    }

    /// Creates an empty deque with a custom configuration
    pub fn with_config(config: impl Into<RingConfig>) -> Result<Self, ConfigError> {
        Ok(Self::from_policy(GrowthPolicy::new(config.into(), 0)?))
    }

    /// Creates an empty deque with a custom configuration and first-block capacity hint
    pub fn with_config_and_capacity(
        config: impl Into<RingConfig>,
        capacity: usize,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_policy(GrowthPolicy::new(config.into(), capacity)?))
    }

    fn default_policy(capacity: usize) -> GrowthPolicy {
        match GrowthPolicy::new(RingConfig::new(), capacity) {
            Ok(policy) => policy,
            // The default configuration is statically valid
            Err(err) => unreachable!("default ring config rejected: {}", err),
        }
    }

    const fn from_policy(policy: GrowthPolicy) -> Self {
        Self {
            ring: Ring::new(policy),
            head: Cursor::UNSET,
            tail: Cursor::UNSET,
            len: 0,
        }
    }

    /// Returns the configuration this deque was built with
    #[inline]
    pub fn config(&self) -> RingConfig {
        self.ring.config()
    }

    /// Returns the ring's footprint and lifetime counters
    #[inline]
    pub fn stats(&self) -> RingStats {
        self.ring.stats()
    }

    /// Returns the number of elements in the deque
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the deque is empty
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` to the back
    pub fn push_back(&mut self, value: T) {
        if self.len == 0 {
            self.settle_empty();
        } else if self.tail.offset == self.ring.capacity(self.tail.block) {
            let block = self.ring.advance_tail(self.tail.block, self.head.block);
            self.tail = Cursor::new(block, 0);
        }
        self.ring.put(self.tail.block, self.tail.offset, value);
        self.tail.offset += 1;
        self.len += 1;
    }

    /// Prepends `value` to the front
    pub fn push_front(&mut self, value: T) {
        if self.len == 0 {
            // Start from the end of the anchor block so the first front push needs no
            // neighbor block
            let block = self.settle_empty();
            let end = Cursor::new(block, self.ring.capacity(block));
            self.head = end;
            self.tail = end;
        } else if self.head.offset == 0 {
            let block = self.ring.advance_head(self.head.block, self.tail.block);
            self.head = Cursor::new(block, self.ring.capacity(block));
        }
        self.head.offset -= 1;
        self.ring.put(self.head.block, self.head.offset, value);
        self.len += 1;
    }

    /// Removes and returns the front element
    pub fn pop_front(&mut self) -> Result<T, EmptyError> {
        if self.len == 0 {
            return Err(EmptyError);
        }
        let value = self
            .ring
            .take(self.head.block, self.head.offset)
            .ok_or(EmptyError)?;
        self.len -= 1;
        self.head.offset += 1;

        if self.len == 0 {
            self.settle_empty();
        } else if self.head.offset == self.ring.capacity(self.head.block) {
            let block = self.ring.retreat_head(self.head.block, self.tail.block);
            self.head = Cursor::new(block, 0);
        }
        Ok(value)
    }

    /// Removes and returns the back element
    pub fn pop_back(&mut self) -> Result<T, EmptyError> {
        if self.len == 0 {
            return Err(EmptyError);
        }
        let value = self
            .ring
            .take(self.tail.block, self.tail.offset - 1)
            .ok_or(EmptyError)?;
        self.len -= 1;
        self.tail.offset -= 1;

        if self.len == 0 {
            self.settle_empty();
        } else if self.tail.offset == 0 {
            let block = self.ring.retreat_tail(self.tail.block, self.head.block);
            self.tail = Cursor::new(block, self.ring.capacity(block));
        }
        Ok(value)
    }

    /// Returns a reference to the front element
    pub fn peek_front(&self) -> Result<&T, EmptyError> {
        if self.len == 0 {
            return Err(EmptyError);
        }
        self.ring
            .get(self.head.block, self.head.offset)
            .ok_or(EmptyError)
    }

    /// Returns a reference to the back element
    pub fn peek_back(&self) -> Result<&T, EmptyError> {
        if self.len == 0 {
            return Err(EmptyError);
        }
        self.ring
            .get(self.tail.block, self.tail.offset - 1)
            .ok_or(EmptyError)
    }

    /// Drops every element
    ///
    /// The ring ends up in its post-drain shape: the block that held the last element
    /// plus at most `spare_blocks` spares.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Puts both cursors at offset 0 of the anchor block, allocating it on first use
    ///
    /// Only valid while the deque is empty. After a drain the anchor is the block that
    /// held the last element, whichever end it left from.
    fn settle_empty(&mut self) -> BlockId {
        debug_assert_eq!(self.len, 0);
        let block = if self.ring.is_unallocated() {
            self.ring.anchor()
        } else {
            self.head.block
        };
        self.head = Cursor::new(block, 0);
        self.tail = self.head;
        block
    }
}

impl<T> Extend<T> for BlockDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for BlockDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> fmt::Debug for BlockDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockDeque")
            .field("len", &self.len)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("stats", &self.ring.stats())
            .finish()
    }
}
