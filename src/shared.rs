//! Mutex decorator for sharing a deque across threads
//!
//! [`BlockDeque`] itself is single-threaded. `SharedDeque` wraps one in a
//! `parking_lot::Mutex` that is held for the duration of each operation, leaving the
//! core's hot path untouched.
//!
//! ```rust
//! use ringdeque::prelude::*;
//! use std::sync::Arc;
//!
//! let queue = Arc::new(SharedDeque::new());
//!
//! let producers: Vec<_> = (0..4)
//!     .map(|t| {
//!         let queue = Arc::clone(&queue);
//!         std::thread::spawn(move || {
//!             for i in 0..100 {
//!                 queue.push_back(t * 100 + i);
//!             }
//!         })
//!     })
//!     .collect();
//! for producer in producers {
//!     producer.join().unwrap();
//! }
//!
//! assert_eq!(queue.len(), 400);
//! ```

use parking_lot::Mutex;

use crate::deque::BlockDeque;
use crate::error::{ConfigError, EmptyError};
use crate::policy::RingConfig;
use crate::ring::RingStats;

/// Thread-safe wrapper around [`BlockDeque`]
///
/// Every call locks the whole deque. Use [`with_mut`](SharedDeque::with_mut) to batch
/// several operations under one lock acquisition.
pub struct SharedDeque<T> {
    inner: Mutex<BlockDeque<T>>,
}

impl<T> Default for SharedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<BlockDeque<T>> for SharedDeque<T> {
    fn from(deque: BlockDeque<T>) -> Self {
        Self {
            inner: Mutex::new(deque),
        }
    }
}

impl<T> SharedDeque<T> {
    /// Create a new shared deque with the default configuration
    pub fn new() -> Self {
        Self::from(BlockDeque::new())
    }

    /// Create a new shared deque with a custom configuration
    pub fn with_config(config: impl Into<RingConfig>) -> Result<Self, ConfigError> {
        BlockDeque::with_config(config).map(Self::from)
    }

    /// Execute a closure with exclusive access to the deque
    ///
    /// The lock is held until the closure returns.
    #[inline]
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BlockDeque<T>) -> R,
    {
        f(&mut *self.inner.lock())
    }

    /// Push a value to the back
    #[inline]
    pub fn push_back(&self, value: T) {
        self.with_mut(|deque| deque.push_back(value))
    }

    /// Push a value to the front
    #[inline]
    pub fn push_front(&self, value: T) {
        self.with_mut(|deque| deque.push_front(value))
    }

    /// Pop the front value
    #[inline]
    pub fn pop_front(&self) -> Result<T, EmptyError> {
        self.with_mut(|deque| deque.pop_front())
    }

    /// Pop the back value
    #[inline]
    pub fn pop_back(&self) -> Result<T, EmptyError> {
        self.with_mut(|deque| deque.pop_back())
    }

    /// Get the current length
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the deque is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Drop every element
    #[inline]
    pub fn clear(&self) {
        self.with_mut(|deque| deque.clear())
    }

    /// Snapshot of the ring's footprint
    #[inline]
    pub fn stats(&self) -> RingStats {
        self.inner.lock().stats()
    }

    /// Unwrap the inner deque
    pub fn into_inner(self) -> BlockDeque<T> {
        self.inner.into_inner()
    }
}

impl<T: Clone> SharedDeque<T> {
    /// Clone of the front value
    ///
    /// References cannot outlive the lock, so the value is cloned.
    #[inline]
    pub fn peek_front(&self) -> Result<T, EmptyError> {
        self.with_mut(|deque| deque.peek_front().cloned())
    }

    /// Clone of the back value
    #[inline]
    pub fn peek_back(&self) -> Result<T, EmptyError> {
        self.with_mut(|deque| deque.peek_back().cloned())
    }
}
