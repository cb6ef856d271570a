//! Convenience re-exports of the crate's public surface.
//!
//! ```
//! use slotcache::prelude::*;
//! ```

pub use crate::error::CacheError;
pub use crate::manager::CacheManager;
pub use crate::metrics::HitStats;
pub use crate::node::{CacheNode, Context, EMPTY_ID};
pub use crate::policy::EvictionPolicy;
pub use crate::traits::{CacheTuning, ResourceHooks};
