//! In-Memory Store Module
//!
//! HashMap-backed implementation of the store contract. Behaves like a single
//! Redis database for the commands the cache uses.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CacheError, Result};
use crate::store::StoreClient;

const WRONGTYPE: &str = "WRONGTYPE Operation against a key holding the wrong kind of value";
const NOT_AN_INTEGER: &str = "ERR value is not an integer or out of range";

// == Stored Value ==
/// A value held by the in-memory store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    /// Plain string value (SET/GET/INCR)
    Bytes(Vec<u8>),
    /// List value (RPUSH/LRANGE)
    List(Vec<Vec<u8>>),
}

// == Memory Store ==
/// In-process key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage
    entries: HashMap<String, StoredValue>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Returns the current number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Inspect ==
    /// Returns the stored value for `key` without going through the command surface.
    pub fn entry(&self, key: &str) -> Option<&StoredValue> {
        self.entries.get(key)
    }
}

impl StoreClient for MemoryStore {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.entries
            .insert(key.to_string(), StoredValue::Bytes(value.to_vec()));
        Ok(())
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.entries.get(key) {
            Some(StoredValue::Bytes(bytes)) => Ok(Some(bytes.clone())),
            Some(StoredValue::List(_)) => Err(CacheError::Store(WRONGTYPE.to_string())),
            None => Ok(None),
        }
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        let current = match self.entries.get(key) {
            None => 0,
            Some(StoredValue::Bytes(bytes)) => std::str::from_utf8(bytes)
                .ok()
                .and_then(|s| s.parse::<i64>().ok())
                .ok_or_else(|| CacheError::Store(NOT_AN_INTEGER.to_string()))?,
            Some(StoredValue::List(_)) => return Err(CacheError::Store(WRONGTYPE.to_string())),
        };

        let next = current
            .checked_add(1)
            .ok_or_else(|| CacheError::Store(NOT_AN_INTEGER.to_string()))?;
        self.entries.insert(
            key.to_string(),
            StoredValue::Bytes(next.to_string().into_bytes()),
        );
        Ok(next)
    }

    fn rpush(&mut self, key: &str, value: &str) -> Result<usize> {
        let list = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| StoredValue::List(Vec::new()));

        match list {
            StoredValue::List(items) => {
                items.push(value.as_bytes().to_vec());
                Ok(items.len())
            }
            StoredValue::Bytes(_) => Err(CacheError::Store(WRONGTYPE.to_string())),
        }
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        let items = match self.entries.get(key) {
            None => return Ok(Vec::new()),
            Some(StoredValue::List(items)) => items,
            Some(StoredValue::Bytes(_)) => return Err(CacheError::Store(WRONGTYPE.to_string())),
        };

        Ok(match range_bounds(items.len(), start, stop) {
            Some((from, to)) => items[from..=to].to_vec(),
            None => Vec::new(),
        })
    }

    fn flushdb(&mut self) -> Result<()> {
        debug!("Flushing {} keys from memory store", self.entries.len());
        self.entries.clear();
        Ok(())
    }

    fn dbsize(&mut self) -> Result<usize> {
        Ok(self.entries.len())
    }
}

// == Utility Functions ==
/// Resolves LRANGE indices against a list of `len` elements.
///
/// Returns inclusive `(from, to)` positions, or `None` for an empty slice.
fn range_bounds(len: usize, start: isize, stop: isize) -> Option<(usize, usize)> {
    let len = len as isize;
    let start = if start < 0 { (start + len).max(0) } else { start };
    let stop = if stop < 0 { stop + len } else { stop.min(len - 1) };

    if start > stop || start >= len {
        None
    } else {
        Some((start as usize, stop as usize))
    }
}
