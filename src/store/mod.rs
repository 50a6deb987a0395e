//! Store Client Module
//!
//! The command surface the cache needs from an external key-value store,
//! plus an in-process implementation and a Redis-backed one.

mod memory;
#[cfg(feature = "redis")]
mod redis_store;

pub use memory::{MemoryStore, StoredValue};
#[cfg(feature = "redis")]
pub use redis_store::RedisStore;

use crate::error::Result;

// == Store Client ==
/// Blocking client for an external key-value store.
///
/// Every method is a single round trip. Implementations never retry.
pub trait StoreClient {
    /// SET: writes `value` under `key`, replacing whatever was there.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// GET: raw bytes under `key`, `None` when the key does not exist.
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>>;

    /// INCR: increments the integer under `key` (absent counts as 0) and
    /// returns the new value.
    fn incr(&mut self, key: &str) -> Result<i64>;

    /// RPUSH: appends `value` to the list under `key`, returns the new length.
    fn rpush(&mut self, key: &str, value: &str) -> Result<usize>;

    /// LRANGE: inclusive slice of the list under `key`.
    ///
    /// Negative indices count from the tail (`-1` is the last element).
    /// An absent key yields an empty list.
    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>>;

    /// FLUSHDB: removes EVERY key in the database this client points at,
    /// including keys written by other programs.
    fn flushdb(&mut self) -> Result<()>;

    /// DBSIZE: number of keys in the database.
    fn dbsize(&mut self) -> Result<usize>;
}

/// Boxed store client used where the backend is chosen at runtime.
pub type SharedStore = Box<dyn StoreClient + Send>;

impl<T: StoreClient + ?Sized> StoreClient for Box<T> {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        (**self).incr(key)
    }

    fn rpush(&mut self, key: &str, value: &str) -> Result<usize> {
        (**self).rpush(key, value)
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        (**self).lrange(key, start, stop)
    }

    fn flushdb(&mut self) -> Result<()> {
        (**self).flushdb()
    }

    fn dbsize(&mut self) -> Result<usize> {
        (**self).dbsize()
    }
}
