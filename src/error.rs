//! Error types for the slotcache library.
//!
//! Every fallible operation returns an explicit [`CacheError`] discriminant;
//! there is no panicking control flow inside the engine. Failures during
//! eviction never destroy the previous occupant: the cache degrades to
//! "entry not replaced" rather than "entry lost".

use std::fmt;

/// Error returned by cache operations.
///
/// # Example
///
/// ```
/// use slotcache::prelude::*;
///
/// struct NoHooks;
///
/// impl ResourceHooks for NoHooks {
///     type Payload = ();
///
///     fn create(&mut self, _id: i32) -> Option<Context<()>> {
///         Some(Context::new((), 0))
///     }
///
///     fn destroy(&mut self, _id: i32, _context: Context<()>) -> bool {
///         true
///     }
/// }
///
/// let mut cache = CacheManager::new(4, EvictionPolicy::Lfu, NoHooks).unwrap();
///
/// // Id 0 is the reserved empty-slot sentinel.
/// assert_eq!(cache.open(0).unwrap_err(), CacheError::InvalidId);
/// assert_eq!(cache.invalidate(9), Err(CacheError::IdNotFound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The requested id is the reserved empty-slot sentinel (0).
    InvalidId,
    /// `invalidate` was asked for an id that is not currently bound.
    IdNotFound,
    /// The create callback reported failure. The target slot (or the
    /// would-be eviction victim) is left untouched.
    CreateFailed,
    /// Slot storage could not be allocated during construction or resize.
    AllocationFailed,
    /// The eviction mode has no victim-selection handler.
    ///
    /// Dispatch over [`EvictionPolicy`](crate::policy::EvictionPolicy) is a
    /// closed enum, so no current call path produces this; the variant is
    /// kept so callers matching on the full result set have a stable
    /// surface.
    UnsupportedMode,
    /// No eviction victim could be produced (for example, zero capacity).
    Unknown,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            CacheError::InvalidId => "id 0 is reserved for empty slots",
            CacheError::IdNotFound => "no bound entry with the requested id",
            CacheError::CreateFailed => "create callback reported failure",
            CacheError::AllocationFailed => "could not allocate slot storage",
            CacheError::UnsupportedMode => "eviction mode has no handler",
            CacheError::Unknown => "no eviction victim available",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for CacheError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
