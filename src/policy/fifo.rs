//! FIFO ring state, aliased onto the slot array.
//!
//! The ring does not own storage: `head` and `tail` are logical indices
//! into the same physical slot array every other policy scans. Insertion
//! advances `head`, eviction advances `tail`, and the victim is always the
//! slot at `tail` — insertion order, independent of `life` and `ref_cnt`.
//!
//! ```text
//!   capacity = 4          slots: [ C ][ D ][ A ][ B ]
//!                                       ▲         ▲
//!                                     head      tail
//!   evict  ──► victim = slots[tail] (A, the oldest), tail advances
//!   insert ──► head advances, unless that would land on tail
//! ```
//!
//! A head advance that would collide with `tail` is a silent no-op rather
//! than an error. The ring is not maintained by `invalidate`, so ad-hoc
//! invalidation under FIFO mode leaves it describing stale insertion order
//! (see [`CacheManager::invalidate`](crate::manager::CacheManager::invalidate)).

/// Logical insertion-order ring over the slot array.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FifoRing {
    head: usize,
    tail: usize,
}

impl FifoRing {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn tail(&self) -> usize {
        self.tail
    }

    #[cfg(any(test, debug_assertions))]
    #[inline]
    pub(crate) fn head(&self) -> usize {
        self.head
    }

    /// Advances the write position. Collision with `tail` is a silent no-op.
    pub(crate) fn advance_head(&mut self, capacity: usize) {
        if capacity == 0 {
            return;
        }
        let next = (self.head + 1) % capacity;
        if next != self.tail {
            self.head = next;
        }
    }

    /// Advances past the slot just evicted.
    pub(crate) fn advance_tail(&mut self, capacity: usize) {
        if capacity == 0 {
            return;
        }
        self.tail = (self.tail + 1) % capacity;
    }

    /// Forgets all ring state.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
    }
}

/// The FIFO victim: whatever slot `tail` points at.
#[inline]
pub(crate) fn ring_tail(ring: &FifoRing, capacity: usize) -> Option<usize> {
    if capacity == 0 {
        None
    } else {
        Some(ring.tail())
    }
}
