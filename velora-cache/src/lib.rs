//! In-memory cache of analysis answers keyed by the exact query text.
//!
//! # Keys
//!
//! Keys are the literal text the user submitted. Nothing is trimmed or
//! case-folded, so `"Pacific Ocean 2020"` and `"pacific ocean 2020"` are two
//! different entries.
//!
//! # Lifetime
//!
//! Entries live as long as the running client. The cache holds at most
//! `capacity` answers and evicts the least recently used one when full.
//! Once stored, an entry is never replaced.
//!
//! # Usage
//!
//! ```rust
//! use velora_cache::QueryCache;
//!
//! let cache = QueryCache::new(16);
//! assert!(cache.get("Pacific Ocean 2020").is_none());
//! ```
//!
//! Only [`AnalysisResult`] values can be stored: rejections are a different
//! type, so an error reply can never come back as a cache hit.

use log::debug;
use lru::LruCache;
use std::cell::RefCell;
use std::fmt;
use std::num::NonZeroUsize;
use std::rc::Rc;
use velora_ocean::AnalysisResult;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 256;

/// Query text → answer cache.
///
/// This struct is cheaply cloneable (via `Rc`); clones share the same
/// entries. It is meant for a single-threaded client.
#[derive(Clone)]
pub struct QueryCache {
    entries: Rc<RefCell<LruCache<String, Rc<AnalysisResult>>>>,
}

impl QueryCache {
    /// Create an empty cache holding at most `capacity` answers (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Rc::new(RefCell::new(LruCache::new(capacity))),
        }
    }

    /// Look up an answer by exact query text. A hit refreshes its recency.
    pub fn get(&self, query: &str) -> Option<Rc<AnalysisResult>> {
        self.entries.borrow_mut().get(query).cloned()
    }

    /// Store an answer unless one is already present for `query`.
    ///
    /// Returns the stored answer: the existing one if the key was taken.
    pub fn put(&self, query: &str, result: AnalysisResult) -> Rc<AnalysisResult> {
        let mut entries = self.entries.borrow_mut();
        if let Some(existing) = entries.get(query) {
            debug!("Cache already holds {:?}; keeping first answer", query);
            return existing.clone();
        }
        let result = Rc::new(result);
        if let Some((evicted, _)) = entries.push(query.to_string(), result.clone()) {
            debug!("Cache full; evicted {:?}", evicted);
        }
        result
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.borrow().contains(query)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.borrow().cap().get()
    }
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
