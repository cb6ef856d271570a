//! Eviction policies and victim selection.
//!
//! Given the full slot pool, the policy engine picks one slot to close and
//! reuse when an open finds neither a bound match nor an empty slot. Five
//! interchangeable strategies; dispatch is a closed enum so the set stays
//! exhaustive and compiler-checked.
//!
//! | Policy   | Victim basis          | Cost per selection | Extra state    |
//! |----------|-----------------------|--------------------|----------------|
//! | `Life`   | lowest decayed score  | O(capacity)        | per-node life  |
//! | `Fifo`   | ring tail             | O(1)               | head/tail ring |
//! | `Lfu`    | lowest usage count    | O(capacity)        | per-node count |
//! | `Lru`    | lowest decayed score  | O(capacity)        | per-node life  |
//! | `Random` | uniform slot index    | O(1)               | PRNG state     |
//!
//! Life and LRU share the same decayed `life` score; they differ only in
//! the reward a hit earns (see `hit_gain`). Life rewards entries in
//! proportion to how long their create took, approximating a cost-aware
//! LRU. Random and FIFO are the cheap options for constrained targets.

pub(crate) mod fifo;
pub(crate) mod life;
pub(crate) mod lfu;
pub(crate) mod random;

pub(crate) use fifo::FifoRing;
pub(crate) use random::XorShift64;

use crate::pool::NodePool;
use fifo::ring_tail;

/// Slot-reuse strategy, fixed at manager construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvictionPolicy {
    /// Recency/frequency hybrid: per-open decay, hits rewarded by the
    /// entry's creation cost. Expensive-to-produce entries linger.
    Life,
    /// First in, first out over a logical ring on the slot array.
    Fifo,
    /// Least frequently used: lowest saturating usage count.
    Lfu,
    /// Least recently used: per-open decay, hits rewarded by a fixed unit.
    Lru,
    /// Uniformly random slot, empty slots included.
    Random,
}

/// Picks the slot to reuse, or `None` when the pool has no victim to offer
/// (zero capacity).
pub(crate) fn select_victim<T>(
    mode: EvictionPolicy,
    pool: &NodePool<T>,
    ring: &FifoRing,
    rng: &mut XorShift64,
) -> Option<usize> {
    match mode {
        EvictionPolicy::Life | EvictionPolicy::Lru => life::lowest_life(pool),
        EvictionPolicy::Fifo => ring_tail(ring, pool.capacity()),
        EvictionPolicy::Lfu => lfu::least_referenced(pool),
        EvictionPolicy::Random => random::any_slot(pool.capacity(), rng),
    }
}

/// Life earned by a cache hit. Zero for the modes that ignore `life`.
pub(crate) fn hit_gain(mode: EvictionPolicy, time_to_open: u32) -> i32 {
    match mode {
        EvictionPolicy::Life => i32::try_from(time_to_open).unwrap_or(i32::MAX),
        EvictionPolicy::Lru => 1,
        EvictionPolicy::Fifo | EvictionPolicy::Lfu | EvictionPolicy::Random => 0,
    }
}
