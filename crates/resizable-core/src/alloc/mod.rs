//! Optimized collection types.
//!
//! Re-exports of hash collections using AHash.

// Re-export optimized hash collections
pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

/// Type alias for the standard HashMap with AHash for better performance.
pub type AHashMap<K, V> = ahash::AHashMap<K, V>;

/// Type alias for the standard HashSet with AHash for better performance.
pub type AHashSet<T> = ahash::AHashSet<T>;
