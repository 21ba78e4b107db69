//! Growth/shrink policy for the block ring
//!
//! The policy owns the numeric thresholds and answers two questions, and only at
//! block-boundary events:
//!
//! - when a cursor runs off its block, reuse the ring-adjacent spare or allocate?
//! - after a block is vacated, how many spares must be detached?
//!
//! Interior pushes and pops never reach this module.

use crate::error::ConfigError;

/// Tuning knobs for a [`BlockDeque`](crate::prelude::BlockDeque)
///
/// # Examples
///
/// ```
/// use ringdeque::prelude::*;
///
/// let config = RingConfig::new()
///     .with_block_capacity(64)
///     .with_small_block_capacity(4)
///     .with_spare_blocks(2);
/// assert!(config.validate().is_ok());
///
/// let bad = RingConfig::new().with_block_capacity(0);
/// assert_eq!(bad.validate(), Err(ConfigError::ZeroBlockCapacity));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingConfig {
    /// Slot count of every block except the first one ever allocated
    pub block_capacity: usize,
    /// Slot count of the first block, keeping tiny deques cheap
    pub small_block_capacity: usize,
    /// Empty blocks kept in the ring after they are vacated
    pub spare_blocks: usize,
}

impl RingConfig {
    /// Default slots per block
    pub const DEFAULT_BLOCK_CAPACITY: usize = 256;
    /// Default slots in the first block
    pub const DEFAULT_SMALL_BLOCK_CAPACITY: usize = 8;
    /// Default spare reserve
    pub const DEFAULT_SPARE_BLOCKS: usize = 1;

    /// Creates the default configuration (256 / 8 / 1)
    pub const fn new() -> Self {
        Self {
            block_capacity: Self::DEFAULT_BLOCK_CAPACITY,
            small_block_capacity: Self::DEFAULT_SMALL_BLOCK_CAPACITY,
            spare_blocks: Self::DEFAULT_SPARE_BLOCKS,
        }
    }

    /// Sets the regular block capacity
    pub const fn with_block_capacity(mut self, capacity: usize) -> Self {
        self.block_capacity = capacity;
        self
    }

    /// Sets the capacity of the first block
    pub const fn with_small_block_capacity(mut self, capacity: usize) -> Self {
        self.small_block_capacity = capacity;
        self
    }

    /// Sets how many empty blocks are retained
    pub const fn with_spare_blocks(mut self, spares: usize) -> Self {
        self.spare_blocks = spares;
        self
    }

    /// Checks the capacities
    ///
    /// Both capacities must be non-zero and the small block may not be larger than a
    /// regular block. Any spare count is accepted, including zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.block_capacity == 0 {
            return Err(ConfigError::ZeroBlockCapacity);
        }
        if self.small_block_capacity == 0 {
            return Err(ConfigError::ZeroSmallBlockCapacity);
        }
        if self.small_block_capacity > self.block_capacity {
            return Err(ConfigError::SmallBlockTooLarge {
                small: self.small_block_capacity,
                block: self.block_capacity,
            });
        }
        Ok(())
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Predefined ring configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingPreset {
    /// 32-slot blocks, 4-slot first block, no spares
    Compact,
    /// 256-slot blocks, 8-slot first block, 1 spare (the default)
    Balanced,
    /// 1024-slot blocks, 16-slot first block, 2 spares
    Bursty,
}

impl RingPreset {
    /// Returns the configuration for this preset
    pub const fn config(self) -> RingConfig {
        match self {
            RingPreset::Compact => RingConfig {
                block_capacity: 32,
                small_block_capacity: 4,
                spare_blocks: 0,
            },
            RingPreset::Balanced => RingConfig::new(),
            RingPreset::Bursty => RingConfig {
                block_capacity: 1024,
                small_block_capacity: 16,
                spare_blocks: 2,
            },
        }
    }
}

impl From<RingPreset> for RingConfig {
    fn from(preset: RingPreset) -> Self {
        preset.config()
    }
}

/// Outcome of a boundary crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Growth {
    /// Absorb the ring-adjacent spare block
    Reuse,
    /// Allocate and link a fresh block of this capacity
    Allocate { capacity: usize },
}

/// Validated policy consulted by the ring
#[derive(Debug, Clone, Copy)]
pub(crate) struct GrowthPolicy {
    config: RingConfig,
    first_capacity: usize,
}

impl GrowthPolicy {
    /// `first_capacity` of zero falls back to the configured small block capacity.
    pub(crate) fn new(config: RingConfig, first_capacity: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        let first_capacity = if first_capacity == 0 {
            config.small_block_capacity
        } else {
            first_capacity
        };
        Ok(Self {
            config,
            first_capacity,
        })
    }

    #[inline]
    pub(crate) fn config(&self) -> RingConfig {
        self.config
    }

    /// Capacity for the next allocation, given how many blocks were ever allocated
    #[inline]
    pub(crate) fn capacity_for(&self, allocated_before: u64) -> usize {
        if allocated_before == 0 {
            self.first_capacity
        } else {
            self.config.block_capacity
        }
    }

    /// Reuse vs. allocate when a cursor crosses a block boundary
    #[inline]
    pub(crate) fn on_boundary(&self, neighbor_is_spare: bool, allocated_before: u64) -> Growth {
        if neighbor_is_spare {
            Growth::Reuse
        } else {
            Growth::Allocate {
                capacity: self.capacity_for(allocated_before),
            }
        }
    }

    /// Number of spares that must be detached to get back within budget
    #[inline]
    pub(crate) fn surplus(&self, spares: usize) -> usize {
        spares.saturating_sub(self.config.spare_blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RingConfig::default();
        assert_eq!(config.block_capacity, 256);
        assert_eq!(config.small_block_capacity, 8);
        assert_eq!(config.spare_blocks, 1);
        assert_eq!(config, RingPreset::Balanced.config());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            RingConfig::new().with_small_block_capacity(0).validate(),
            Err(ConfigError::ZeroSmallBlockCapacity)
        );
        assert_eq!(
            RingConfig::new()
                .with_block_capacity(16)
                .with_small_block_capacity(32)
                .validate(),
            Err(ConfigError::SmallBlockTooLarge {
                small: 32,
                block: 16
            })
        );
        // Uniform blocks and a zero spare budget are both allowed
        assert!(
            RingConfig::new()
                .with_block_capacity(8)
                .with_small_block_capacity(8)
                .with_spare_blocks(0)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in [RingPreset::Compact, RingPreset::Balanced, RingPreset::Bursty] {
            assert!(RingConfig::from(preset).validate().is_ok(), "{:?}", preset);
        }
    }

    #[test]
    fn test_policy_first_capacity() {
        let policy = GrowthPolicy::new(RingConfig::new(), 0).unwrap();
        assert_eq!(policy.capacity_for(0), 8);
        assert_eq!(policy.capacity_for(1), 256);

        let hinted = GrowthPolicy::new(RingConfig::new(), 100).unwrap();
        assert_eq!(hinted.capacity_for(0), 100);
        assert_eq!(hinted.capacity_for(7), 256);
    }

    #[test]
    fn test_policy_boundary_decision() {
        let policy = GrowthPolicy::new(RingConfig::new(), 0).unwrap();
        assert_eq!(policy.on_boundary(true, 3), Growth::Reuse);
        assert_eq!(
            policy.on_boundary(false, 3),
            Growth::Allocate { capacity: 256 }
        );
        assert_eq!(policy.on_boundary(false, 0), Growth::Allocate { capacity: 8 });
    }

    #[test]
    fn test_policy_surplus() {
        let policy = GrowthPolicy::new(RingConfig::new().with_spare_blocks(2), 0).unwrap();
        assert_eq!(policy.surplus(0), 0);
        assert_eq!(policy.surplus(2), 0);
        assert_eq!(policy.surplus(3), 1);
    }

    #[test]
    fn test_policy_rejects_invalid_config() {
        assert!(GrowthPolicy::new(RingConfig::new().with_block_capacity(0), 0).is_err());
    }
}
