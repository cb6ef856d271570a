//! Shared decay scoring for the Life and LRU policies.
//!
//! Both modes age every bound node once per open, before lookup, and evict
//! the node with the smallest `life`. They differ only in the reward a hit
//! earns: creation cost for Life, a fixed unit for LRU (see
//! `hit_gain` in the parent module).
//!
//! ```text
//!   open(x)                    life per slot
//!   ──────────────────────────────────────────────
//!   start                      [ 0,  3, -2]
//!   decay (aging_step = 1)     [-1,  2, -3]
//!   x misses, pool full   ──►  victim = slot 2 (lowest life)
//! ```
//!
//! Decay is clamped so `life` cannot run past `i32::MIN + aging_step`, and
//! rewards are clamped to the configured life limit; both bounds live in
//! [`CacheTuning`](crate::traits::CacheTuning).

use crate::pool::NodePool;

/// Ages every bound node by `step`. Runs once per open under Life/LRU.
pub(crate) fn age_all<T>(pool: &mut NodePool<T>, step: i32) {
    for node in pool.iter_mut() {
        if node.is_bound() {
            node.age(step);
        }
    }
}

/// Bound node with the strictly smallest `life`; first found wins ties.
pub(crate) fn lowest_life<T>(pool: &NodePool<T>) -> Option<usize> {
    let mut victim = None;
    let mut lowest = i32::MAX;
    for (i, node) in pool.iter().enumerate() {
        if node.is_bound() && node.life() < lowest {
            lowest = node.life();
            victim = Some(i);
        }
    }
    victim
}
