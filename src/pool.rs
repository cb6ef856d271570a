//! The fixed slot pool and its linear lookups.
//!
//! Capacity is expected to stay in the tens of entries in the target
//! domain, so lookup is a deliberately simple O(capacity) scan with no
//! secondary index. That keeps the pool a single flat allocation and makes
//! every policy operate over the same physical array. Noted scaling limit:
//! large capacities turn every open into a long scan (and, under Life/LRU,
//! a full decay pass) before this becomes a correctness concern.

use crate::error::CacheError;
use crate::node::{CacheNode, EMPTY_ID};

/// Fixed-length ordered collection of slots.
///
/// Insertion order is the physical index and is policy-significant: FIFO
/// rides a logical ring over these indices, and scans break ties in array
/// order.
pub struct NodePool<T> {
    slots: Vec<CacheNode<T>>,
}

impl<T> NodePool<T> {
    /// Allocates `capacity` empty slots.
    ///
    /// Allocation is fallible so construction surfaces
    /// [`CacheError::AllocationFailed`] instead of aborting the process.
    pub(crate) fn new(capacity: usize) -> Result<Self, CacheError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| CacheError::AllocationFailed)?;
        for _ in 0..capacity {
            slots.push(CacheNode::empty());
        }
        Ok(Self { slots })
    }

    /// Total slot count, bound or empty.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of bound slots.
    #[inline]
    pub fn bound_len(&self) -> usize {
        self.slots.iter().filter(|node| node.is_bound()).count()
    }

    /// First slot whose id matches, scanning in array order.
    #[inline]
    pub fn find(&self, id: i32) -> Option<usize> {
        self.slots.iter().position(|node| node.id() == id)
    }

    /// First empty slot, if any.
    #[inline]
    pub fn find_empty(&self) -> Option<usize> {
        self.find(EMPTY_ID)
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> &CacheNode<T> {
        &self.slots[index]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> &mut CacheNode<T> {
        &mut self.slots[index]
    }

    /// Iterates slots in physical order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &CacheNode<T>> {
        self.slots.iter()
    }

    #[inline]
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut CacheNode<T>> {
        self.slots.iter_mut()
    }

    /// Checks pool-level invariants. Debug builds only.
    ///
    /// - bound ids are unique and never the sentinel
    /// - a bound slot always carries a context, an empty one never does
    /// - empty slots carry zeroed scoring state
    #[cfg(debug_assertions)]
    pub(crate) fn validate_invariants(&self) {
        for (i, node) in self.slots.iter().enumerate() {
            if node.is_bound() {
                debug_assert!(
                    node.context().is_some(),
                    "bound slot {i} has no context"
                );
                let dup = self
                    .slots
                    .iter()
                    .skip(i + 1)
                    .any(|other| other.id() == node.id());
                debug_assert!(!dup, "duplicate bound id {}", node.id());
            } else {
                debug_assert!(node.context().is_none(), "empty slot {i} holds a context");
                debug_assert_eq!(node.ref_cnt(), 0, "empty slot {i} has a ref count");
                debug_assert_eq!(node.life(), 0, "empty slot {i} has life");
            }
        }
    }
}
