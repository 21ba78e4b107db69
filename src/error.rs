//! Error types for deque operations and ring configuration

use thiserror::Error;

/// Returned by pop and peek operations on an empty deque
///
/// # Examples
///
/// ```
/// use ringdeque::prelude::*;
///
/// let mut deque: BlockDeque<u32> = BlockDeque::new();
/// assert_eq!(deque.pop_front(), Err(EmptyError));
/// assert_eq!(deque.peek_back(), Err(EmptyError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("deque is empty")]
pub struct EmptyError;

/// Rejected [`RingConfig`](crate::prelude::RingConfig) values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `block_capacity` was zero
    #[error("block capacity must be at least 1")]
    ZeroBlockCapacity,
    /// `small_block_capacity` was zero
    #[error("small block capacity must be at least 1")]
    ZeroSmallBlockCapacity,
    /// `small_block_capacity` was larger than `block_capacity`
    #[error("small block capacity {small} exceeds block capacity {block}")]
    SmallBlockTooLarge {
        /// Requested small block capacity
        small: usize,
        /// Configured block capacity
        block: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_messages() {
        assert_eq!(EmptyError.to_string(), "deque is empty");
        assert_eq!(
            ConfigError::SmallBlockTooLarge { small: 64, block: 32 }.to_string(),
            "small block capacity 64 exceeds block capacity 32"
        );
        assert_eq!(
            ConfigError::ZeroBlockCapacity.to_string(),
            "block capacity must be at least 1"
        );
    }
}
