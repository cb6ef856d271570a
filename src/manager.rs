//! The cache manager: slot pool ownership and the open/close lifecycle.
//!
//! Every request enters [`CacheManager::open`], which consults the pool for
//! a fast-path hit, falls back to an empty slot, and finally asks the
//! policy engine for an eviction victim before recreating:
//!
//! ```text
//!   open(id)
//!     │
//!     ├─ id == 0 ──────────────────────────────► InvalidId
//!     │
//!     ├─ decay pass (Life/LRU only)
//!     │
//!     ├─ bound match? ── yes ──► bump scores ──► hit
//!     │
//!     ├─ empty slot?  ── yes ──► create ──► bind (or CreateFailed)
//!     │
//!     ├─ victim?      ── yes ──► create into a temporary,
//!     │                          close victim only on success,
//!     │                          move the new entry in
//!     │
//!     └─ none ────────────────────────────────► Unknown
//! ```
//!
//! The manager is an explicitly owned value with a construct → use → drop
//! lifecycle; there is no ambient singleton. It is single-threaded and
//! non-reentrant by contract: callers sharing one across threads must
//! serialize every operation externally.

use log::{debug, error, warn};

use crate::error::CacheError;
use crate::metrics::HitStats;
use crate::node::{CacheNode, Context, EMPTY_ID};
use crate::policy::{self, EvictionPolicy, FifoRing, XorShift64};
use crate::pool::NodePool;
use crate::traits::{CacheTuning, ResourceHooks};

/// Elapsed ticks between two samples of a wrapping 32-bit counter.
/// Correct across a single overflow between the samples.
#[inline]
fn tick_elapsed(start: u32, end: u32) -> u32 {
    end.wrapping_sub(start)
}

/// Fixed-capacity cache of lazily created contexts, keyed by nonzero ids.
///
/// # Example
///
/// ```
/// use slotcache::prelude::*;
///
/// struct Loader;
///
/// impl ResourceHooks for Loader {
///     type Payload = Vec<u8>;
///
///     fn create(&mut self, id: i32) -> Option<Context<Vec<u8>>> {
///         let bytes = vec![0u8; id as usize];
///         let size = bytes.len() as u32;
///         Some(Context::new(bytes, size))
///     }
///
///     fn destroy(&mut self, _id: i32, _context: Context<Vec<u8>>) -> bool {
///         true
///     }
/// }
///
/// let mut cache = CacheManager::new(3, EvictionPolicy::Life, Loader).unwrap();
///
/// let node = cache.open(4).unwrap();
/// assert_eq!(node.size(), 4);
/// assert_eq!(cache.len(), 1);
///
/// cache.invalidate(4).unwrap();
/// assert_eq!(cache.len(), 0);
/// ```
pub struct CacheManager<H: ResourceHooks> {
    pool: NodePool<H::Payload>,
    mode: EvictionPolicy,
    tuning: CacheTuning,
    ring: FifoRing,
    rng: XorShift64,
    stats: HitStats,
    hooks: H,
}

impl<H: ResourceHooks> CacheManager<H> {
    /// Builds a manager with `capacity` empty slots and default tuning.
    pub fn new(capacity: usize, mode: EvictionPolicy, hooks: H) -> Result<Self, CacheError> {
        Self::with_tuning(capacity, mode, CacheTuning::default(), hooks)
    }

    /// Builds a manager with explicit scoring limits.
    ///
    /// Fails with [`CacheError::AllocationFailed`] if slot storage cannot
    /// be obtained; no partially initialized manager is observable.
    pub fn with_tuning(
        capacity: usize,
        mode: EvictionPolicy,
        tuning: CacheTuning,
        hooks: H,
    ) -> Result<Self, CacheError> {
        let pool = NodePool::new(capacity)?;
        Ok(Self {
            pool,
            mode,
            tuning,
            ring: FifoRing::new(),
            rng: XorShift64::new(capacity as u64),
            stats: HitStats::default(),
            hooks,
        })
    }

    /// Opens the entry for `id`, creating it if it is not cached.
    ///
    /// On a hit only counters and node scores change; no callback runs. On
    /// a miss the create callback builds the context into an empty slot,
    /// or — with the pool full — into a temporary that replaces the
    /// policy-chosen victim. The victim is closed *only after* the create
    /// succeeds, so a failed create never loses the previous occupant.
    ///
    /// # Errors
    ///
    /// - [`CacheError::InvalidId`] for the reserved id 0
    /// - [`CacheError::CreateFailed`] when the create callback declines
    /// - [`CacheError::Unknown`] when no victim exists (zero capacity)
    pub fn open(&mut self, id: i32) -> Result<&CacheNode<H::Payload>, CacheError> {
        if id == EMPTY_ID {
            return Err(CacheError::InvalidId);
        }

        self.stats.record_open();

        // Life and LRU age every bound entry before the lookup so a hit's
        // reward lands on top of the decayed score.
        if matches!(self.mode, EvictionPolicy::Life | EvictionPolicy::Lru) {
            policy::life::age_all(&mut self.pool, self.tuning.aging_step);
        }

        if let Some(index) = self.pool.find(id) {
            self.stats.record_hit();
            let gain = policy::hit_gain(self.mode, self.pool.get(index).time_to_open());
            let node = self.pool.get_mut(index);
            node.bump_ref(self.tuning.ref_cnt_limit);
            if gain != 0 {
                node.reward(gain, self.tuning.life_limit);
            }
            debug!("id:{id} cache hit, ref_cnt = {}", node.ref_cnt());
            #[cfg(debug_assertions)]
            self.debug_validate();
            return Ok(self.pool.get(index));
        }

        debug!("id:{id} cache miss, looking for an empty slot");

        if let Some(index) = self.pool.find_empty() {
            let (context, time_to_open) = self.create_context(id)?;
            self.pool.get_mut(index).bind(id, context, time_to_open);
            if self.mode == EvictionPolicy::Fifo {
                self.ring.advance_head(self.pool.capacity());
            }
            #[cfg(debug_assertions)]
            self.debug_validate();
            return Ok(self.pool.get(index));
        }

        debug!("id:{id} pool full, selecting a victim");

        let Some(victim) =
            policy::select_victim(self.mode, &self.pool, &self.ring, &mut self.rng)
        else {
            error!(
                "id:{id} no eviction victim available (capacity {})",
                self.pool.capacity()
            );
            return Err(CacheError::Unknown);
        };

        // Build the replacement before touching the victim: a failed create
        // must leave the previous occupant hit-able.
        let (context, time_to_open) = self.create_context(id)?;
        Self::close_node(&mut self.hooks, self.pool.get_mut(victim));
        self.pool.get_mut(victim).bind(id, context, time_to_open);
        if self.mode == EvictionPolicy::Fifo {
            self.ring.advance_tail(self.pool.capacity());
            self.ring.advance_head(self.pool.capacity());
        }
        #[cfg(debug_assertions)]
        self.debug_validate();
        Ok(self.pool.get(victim))
    }

    /// Closes the entry for `id` and empties its slot.
    ///
    /// A later `open` of the same id re-invokes the create callback; it is
    /// never counted as a hit.
    ///
    /// FIFO ring indices are *not* adjusted here, so under
    /// [`EvictionPolicy::Fifo`] ad-hoc invalidation leaves the ring
    /// describing stale insertion order. Known limitation, kept for
    /// compatibility with the original engine.
    ///
    /// # Errors
    ///
    /// - [`CacheError::InvalidId`] for the reserved id 0
    /// - [`CacheError::IdNotFound`] when the id is not currently bound
    pub fn invalidate(&mut self, id: i32) -> Result<(), CacheError> {
        if id == EMPTY_ID {
            return Err(CacheError::InvalidId);
        }
        let Some(index) = self.pool.find(id) else {
            return Err(CacheError::IdNotFound);
        };
        Self::close_node(&mut self.hooks, self.pool.get_mut(index));
        #[cfg(debug_assertions)]
        self.debug_validate();
        Ok(())
    }

    /// Closes every bound entry and resets the FIFO ring.
    pub fn clear(&mut self) {
        for index in 0..self.pool.capacity() {
            Self::close_node(&mut self.hooks, self.pool.get_mut(index));
        }
        self.ring.reset();
        #[cfg(debug_assertions)]
        self.debug_validate();
    }

    /// Destructive resize: closes all entries, forgets FIFO state, and
    /// reallocates the slot array zero-initialized. No live entry survives.
    ///
    /// # Errors
    ///
    /// [`CacheError::AllocationFailed`] if the new slot array cannot be
    /// allocated; the cache is then empty but still valid at the old
    /// capacity.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), CacheError> {
        self.clear();
        self.pool = NodePool::new(capacity)?;
        #[cfg(debug_assertions)]
        self.debug_validate();
        Ok(())
    }

    /// Hit rate in permille: `hit_count * 1000 / open_count`, 0 before the
    /// first open.
    #[inline]
    pub fn hit_rate(&self) -> u32 {
        self.stats.hit_rate_permille()
    }

    /// Zeroes the open/hit counters. Node state is untouched.
    #[inline]
    pub fn reset_hit_stats(&mut self) {
        self.stats.reset();
    }

    /// Snapshot of the open/hit counters.
    #[inline]
    pub fn stats(&self) -> HitStats {
        self.stats
    }

    /// Total slot count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Number of bound entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.pool.bound_len()
    }

    /// `true` when no entry is bound.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The configured eviction policy.
    #[inline]
    pub fn mode(&self) -> EvictionPolicy {
        self.mode
    }

    /// The configured scoring limits.
    #[inline]
    pub fn tuning(&self) -> &CacheTuning {
        &self.tuning
    }

    /// The callback implementer (the engine's pass-through user state).
    #[inline]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Mutable access to the callback implementer.
    #[inline]
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Iterates all slots in physical order, empty ones included.
    #[inline]
    pub fn nodes(&self) -> impl Iterator<Item = &CacheNode<H::Payload>> {
        self.pool.iter()
    }

    /// Runs the create callback for `id`, measuring its latency through the
    /// optional tick source. Wraparound-safe; floor 1 tick.
    fn create_context(&mut self, id: i32) -> Result<(Context<H::Payload>, u32), CacheError> {
        debug!("id:{id} creating");

        let start = self.hooks.tick();
        let created = self.hooks.create(id);
        let elapsed = match start {
            Some(start) => {
                let end = self.hooks.tick().unwrap_or(start);
                tick_elapsed(start, end)
            }
            None => 0,
        };
        let time_to_open = elapsed.max(1);

        match created {
            Some(context) => {
                if start.is_some() {
                    debug!("id:{id} created in {time_to_open} ticks");
                }
                Ok((context, time_to_open))
            }
            None => {
                warn!("id:{id} create failed");
                Err(CacheError::CreateFailed)
            }
        }
    }

    /// Closes one slot: runs the destroy callback on its context and zeroes
    /// it. No-op on an empty slot.
    fn close_node(hooks: &mut H, node: &mut CacheNode<H::Payload>) {
        if !node.is_bound() {
            return;
        }
        let id = node.id();
        let ref_cnt = node.ref_cnt();
        if let Some(context) = node.reset() {
            if !hooks.destroy(id, context) {
                warn!("id:{id} destroy reported failure");
            }
        }
        debug!("id:{id} closed, ref_cnt = {ref_cnt}");
    }

    #[cfg(debug_assertions)]
    fn debug_validate(&self) {
        self.pool.validate_invariants();
        let capacity = self.pool.capacity();
        if capacity > 0 {
            debug_assert!(self.ring.head() < capacity, "ring head out of range");
            debug_assert!(self.ring.tail() < capacity, "ring tail out of range");
        }
    }
}

impl<H: ResourceHooks> Drop for CacheManager<H> {
    /// Teardown closes every bound entry so the destroy callback fires for
    /// each live context.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<H: ResourceHooks> std::fmt::Debug for CacheManager<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheManager")
            .field("capacity", &self.capacity())
            .field("mode", &self.mode)
            .field("len", &self.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
