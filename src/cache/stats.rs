//! Cache Statistics Module
//!
//! Snapshot of what the cache's database currently holds.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time cache statistics, read from the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of keys in the database (values, counters and history lists)
    pub total_keys: usize,
    /// Number of successful `store` calls since the last flush
    pub store_calls: i64,
    /// How many of the `store` counter and history keys currently exist
    pub bookkeeping_keys: usize,
}

impl CacheStats {
    // == Constructor ==
    pub fn new(total_keys: usize, store_calls: i64, bookkeeping_keys: usize) -> Self {
        Self {
            total_keys,
            store_calls,
            bookkeeping_keys,
        }
    }

    // == Value Keys ==
    /// Keys left once the `store` bookkeeping keys are taken out.
    pub fn value_keys(&self) -> usize {
        self.total_keys.saturating_sub(self.bookkeeping_keys)
    }
}
