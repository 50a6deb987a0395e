//! Redis-backed store client
//!
//! Requires the `redis` feature to be enabled.

use ::redis::{Client, Commands, Connection};
use tracing::info;

use crate::error::{CacheError, Result};
use crate::store::StoreClient;

/// Blocking Redis connection implementing the store contract.
pub struct RedisStore {
    /// Redis connection
    conn: Connection,
}

impl RedisStore {
    /// Opens a connection to `url` (e.g. "redis://localhost:6379/0").
    ///
    /// The database index in the URL is the one `flushdb` will wipe.
    pub fn connect(url: &str) -> Result<Self> {
        let client = Client::open(url)
            .map_err(|e| CacheError::Connection(format!("Redis client error: {}", e)))?;

        let conn = client
            .get_connection()
            .map_err(|e| CacheError::Connection(format!("Redis connection error: {}", e)))?;

        info!("Connected to Redis at {}", url);
        Ok(Self { conn })
    }
}

impl StoreClient for RedisStore {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.conn
            .set(key, value)
            .map_err(|e| CacheError::Store(format!("Redis SET error: {}", e)))
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        self.conn
            .get(key)
            .map_err(|e| CacheError::Store(format!("Redis GET error: {}", e)))
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        self.conn
            .incr(key, 1)
            .map_err(|e| CacheError::Store(format!("Redis INCR error: {}", e)))
    }

    fn rpush(&mut self, key: &str, value: &str) -> Result<usize> {
        self.conn
            .rpush(key, value)
            .map_err(|e| CacheError::Store(format!("Redis RPUSH error: {}", e)))
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        self.conn
            .lrange(key, start, stop)
            .map_err(|e| CacheError::Store(format!("Redis LRANGE error: {}", e)))
    }

    fn flushdb(&mut self) -> Result<()> {
        ::redis::cmd("FLUSHDB")
            .query(&mut self.conn)
            .map_err(|e| CacheError::Store(format!("Redis FLUSHDB error: {}", e)))
    }

    fn dbsize(&mut self) -> Result<usize> {
        ::redis::cmd("DBSIZE")
            .query(&mut self.conn)
            .map_err(|e| CacheError::Store(format!("Redis DBSIZE error: {}", e)))
    }
}
