//! LFU victim selection.
//!
//! Scans the pool for the bound node with the strictly smallest `ref_cnt`.
//! The running minimum is only replaced on a strictly smaller value, so
//! equal counts keep the first node found in array order. Counts saturate
//! at the configured limit (see
//! [`CacheTuning::ref_cnt_limit`](crate::traits::CacheTuning)), which also
//! bounds how far a once-hot entry can outrank the rest of the pool.

use crate::pool::NodePool;

/// Bound node with the strictly smallest usage count.
pub(crate) fn least_referenced<T>(pool: &NodePool<T>) -> Option<usize> {
    let mut victim = None;
    let mut fewest = u32::MAX;
    for (i, node) in pool.iter().enumerate() {
        if node.is_bound() && node.ref_cnt() < fewest {
            fewest = node.ref_cnt();
            victim = Some(i);
        }
    }
    victim
}
