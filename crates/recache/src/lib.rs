//! # recache
//!
//! Bounded in-memory cache with least-recently-used eviction.
//!
//! ## Architecture
//! - **HashMap**: AHash for fast lookups (O(1))
//! - **Recency list**: Doubly-linked list over a slot arena for eviction (O(1))
//! - **SharedCache**: Lock-guarded handle with hit/miss statistics
//!
//! Capacity is fixed at construction and must be at least 1; constructing
//! with capacity 0 fails with [`Error::ZeroCapacity`]. Lookups on absent
//! keys return `None` rather than a sentinel value.
//!
//! ## Example
//! ```
//! use recache::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3); // "a" is the least recently used, so it is evicted
//!
//! assert_eq!(cache.get(&"b"), Some(&2));
//! assert_eq!(cache.get(&"a"), None);
//! # Ok::<(), recache::Error>(())
//! ```

#![warn(missing_docs)]

mod cache;
mod error;
mod lru;
mod stats;

pub use cache::SharedCache;
pub use error::{Error, Result};
pub use lru::LruCache;
pub use stats::{CacheStats, StatsSnapshot};
