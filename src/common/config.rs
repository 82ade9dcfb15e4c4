//! Configuration constants for swapcache.

/// Default number of entries a cache holds when the caller has no better
/// number.
///
/// Capacity is always fixed for the lifetime of a cache instance; this is
/// only a starting point for callers that don't size the cache themselves.
/// Capacity 0 is legal and turns every engine into a pass-through to the
/// backing store.
pub const DEFAULT_CAPACITY: usize = 128;
