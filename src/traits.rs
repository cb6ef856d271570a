//! The collaborator contract and engine tuning knobs.
//!
//! The engine is generic over a single capability set, [`ResourceHooks`]:
//! construct a resource, release a resource, and (optionally) read a clock.
//! The hooks value also plays the role the original design gave an opaque
//! `user_data` pointer: any state the callbacks need lives in the
//! implementer and is reachable through
//! [`CacheManager::hooks`](crate::manager::CacheManager::hooks) /
//! [`hooks_mut`](crate::manager::CacheManager::hooks_mut).

use crate::node::Context;

/// User-supplied lifecycle callbacks the cache engine drives.
///
/// All three methods run synchronously on the caller's thread and may block
/// (perform I/O, decode, open handles). Their wall-time is measured through
/// [`tick`](Self::tick) deltas purely for eviction scoring.
///
/// # Example
///
/// ```
/// use slotcache::prelude::*;
///
/// struct Table {
///     rows: Vec<&'static str>,
/// }
///
/// impl ResourceHooks for Table {
///     type Payload = String;
///
///     fn create(&mut self, id: i32) -> Option<Context<String>> {
///         // Ids are 1-based; anything past the table fails.
///         let row = *self.rows.get(id as usize - 1)?;
///         Some(Context::new(row.to_string(), row.len() as u32))
///     }
///
///     fn destroy(&mut self, _id: i32, _context: Context<String>) -> bool {
///         true
///     }
/// }
///
/// let table = Table { rows: vec!["A", "BB", "CCC"] };
/// let mut cache = CacheManager::new(2, EvictionPolicy::Lfu, table).unwrap();
///
/// assert!(cache.open(2).is_ok());
/// assert_eq!(cache.open(99).unwrap_err(), CacheError::CreateFailed);
/// ```
pub trait ResourceHooks {
    /// The opaque resource type carried in each bound slot.
    type Payload;

    /// Builds the context for `id`. Returning `None` signals failure; the
    /// engine then leaves the target slot (or eviction victim) untouched.
    ///
    /// Must not assume the returned context is retained: a later close hands
    /// it back to [`destroy`](Self::destroy) by value.
    fn create(&mut self, id: i32) -> Option<Context<Self::Payload>>;

    /// Releases a context previously returned by [`create`](Self::create).
    ///
    /// A `false` return is logged as a warning; the slot is recycled either
    /// way.
    fn destroy(&mut self, id: i32, context: Context<Self::Payload>) -> bool;

    /// Optional monotonic tick source, wrapping modulo 2^32.
    ///
    /// Sampled immediately before and after each create call to record the
    /// entry's `time_to_open`. The default (`None`) disables measurement;
    /// latency then defaults to the floor value of 1 tick.
    fn tick(&mut self) -> Option<u32> {
        None
    }
}

/// Scoring limits for the eviction policies.
///
/// | Field           | Default     | Used by                               |
/// |-----------------|-------------|---------------------------------------|
/// | `aging_step`    | 1           | Life/LRU per-open decay               |
/// | `life_limit`    | 1_000_000   | upper clamp for hit-rewarded `life`   |
/// | `ref_cnt_limit` | 1_000_000   | saturation point for LFU `ref_cnt`    |
///
/// # Example
///
/// ```
/// use slotcache::traits::CacheTuning;
///
/// let tuning = CacheTuning {
///     ref_cnt_limit: 8,
///     ..Default::default()
/// };
/// assert_eq!(tuning.aging_step, 1);
/// assert_eq!(tuning.ref_cnt_limit, 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CacheTuning {
    /// Life decay applied to every bound node once per open under Life/LRU.
    /// Must be non-negative; the lower life clamp is `i32::MIN + aging_step`.
    pub aging_step: i32,
    /// Upper clamp for `life` after a hit reward.
    pub life_limit: i32,
    /// Saturation point for the per-node usage counter.
    pub ref_cnt_limit: u32,
}

impl Default for CacheTuning {
    fn default() -> Self {
        Self {
            aging_step: 1,
            life_limit: 1_000_000,
            ref_cnt_limit: 1_000_000,
        }
    }
}
