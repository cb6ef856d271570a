//! slotcache: a fixed-capacity resource cache with pluggable eviction.
//!
//! Maps externally-assigned, nonzero integer identifiers to lazily
//! constructed, expensive-to-produce contexts (decoded assets, opened
//! handles). At most `capacity` entries are live at once; when the pool is
//! full a victim is chosen by the configured [`EvictionPolicy`] and its slot
//! is reused. Creation and release go through a user-supplied
//! [`ResourceHooks`] implementation, and creation latency is measured with
//! an optional tick source to drive cost-aware scoring.
//!
//! The engine is single-threaded by contract: every operation runs to
//! completion on the caller's thread, and callbacks execute synchronously.
//!
//! ```
//! use slotcache::prelude::*;
//!
//! struct Decoder;
//!
//! impl ResourceHooks for Decoder {
//!     type Payload = String;
//!
//!     fn create(&mut self, id: i32) -> Option<Context<String>> {
//!         let payload = format!("asset-{id}");
//!         let size = payload.len() as u32;
//!         Some(Context::new(payload, size))
//!     }
//!
//!     fn destroy(&mut self, _id: i32, _context: Context<String>) -> bool {
//!         true
//!     }
//! }
//!
//! let mut cache = CacheManager::new(2, EvictionPolicy::Lru, Decoder).unwrap();
//!
//! let node = cache.open(7).unwrap();
//! assert_eq!(node.payload(), Some(&"asset-7".to_string()));
//!
//! // Second open is a hit: no create callback runs.
//! cache.open(7).unwrap();
//! assert_eq!(cache.hit_rate(), 500); // permille
//! ```
//!
//! [`EvictionPolicy`]: crate::policy::EvictionPolicy
//! [`ResourceHooks`]: crate::traits::ResourceHooks

pub mod error;
pub mod manager;
pub mod metrics;
pub mod node;
pub mod policy;
pub mod pool;
pub mod prelude;
pub mod traits;
