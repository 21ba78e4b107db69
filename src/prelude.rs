//! Prelude module for convenient imports
//!
//! This is the **only public API** for RingDeque. All items should be accessed through:
//! ```
//! use ringdeque::prelude::*;
//! ```

pub use crate::BlockId;
pub use crate::deque::BlockDeque;
pub use crate::error::{ConfigError, EmptyError};
pub use crate::policy::{RingConfig, RingPreset};
pub use crate::ring::RingStats;

#[cfg(feature = "shared")]
pub use crate::shared::SharedDeque;
