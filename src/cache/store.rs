//! Cache Store Module
//!
//! Stores typed values under freshly generated keys and reads them back with
//! an explicit decode strategy.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::cache::ops::STORE;
use crate::cache::stats::CacheStats;
use crate::cache::value::{decode_float, decode_integer, decode_text, Decode, Decoded, Value};
use crate::error::Result;
use crate::instrument::{inputs_key, invocation_count, outputs_key, replay, Operation, Replay};
use crate::store::StoreClient;

// == Cache ==
/// Cache over an injected store client.
///
/// Holds no state besides the client; counters, history and values all live
/// in the store.
#[derive(Debug)]
pub struct Cache<S> {
    client: S,
}

impl<S: StoreClient> Cache<S> {
    // == Constructor ==
    /// Wraps `client` after flushing its database.
    ///
    /// FLUSHDB removes every key in the database the client points at, not
    /// only keys this cache wrote. Point the client at a dedicated database.
    pub fn new(mut client: S) -> Result<Self> {
        warn!("Flushing store database for new cache");
        client.flushdb()?;
        Ok(Self { client })
    }

    // == Store ==
    /// Stores `value` under a new random key and returns the key.
    ///
    /// Every call is counted and recorded under `Cache.store`.
    pub fn store(&mut self, value: impl Into<Value>) -> Result<String> {
        let value: Value = value.into();
        STORE.invoke(self, value)
    }

    /// Writes `value` under a new key without instrumentation.
    pub(crate) fn write_value(&mut self, value: &Value) -> Result<String> {
        let key = Uuid::new_v4().to_string();
        self.client.set(&key, &value.to_bytes())?;
        debug!(key = %key, "Stored value");
        Ok(key)
    }

    // == Get ==
    /// Reads `key` and applies `decode`.
    ///
    /// Returns `Ok(None)` when the key does not exist. A stored empty value is
    /// `Some`, never `None`.
    pub fn get(&mut self, key: &str, decode: Decode) -> Result<Option<Decoded>> {
        self.client
            .get(key)?
            .map(|raw| decode.apply(raw))
            .transpose()
    }

    /// Reads `key` as UTF-8 text.
    pub fn get_str(&mut self, key: &str) -> Result<Option<String>> {
        self.client.get(key)?.map(decode_text).transpose()
    }

    /// Reads `key` as a decimal integer.
    pub fn get_int(&mut self, key: &str) -> Result<Option<i64>> {
        self.client.get(key)?.map(decode_integer).transpose()
    }

    /// Reads `key` as a float.
    pub fn get_float(&mut self, key: &str) -> Result<Option<f64>> {
        self.client.get(key)?.map(decode_float).transpose()
    }

    // == History ==
    /// Replays the recorded calls to `store`.
    pub fn history(&mut self) -> Result<Replay> {
        replay(self, &STORE)
    }

    // == Stats ==
    /// Key count of the database and number of `store` calls.
    ///
    /// Only the `store` counter and history keys that are actually present
    /// count as bookkeeping.
    pub fn stats(&mut self) -> Result<CacheStats> {
        let total_keys = self.client.dbsize()?;
        let name = Operation::<S>::qualified_name(&STORE);
        let store_calls = invocation_count(&mut self.client, name)?;

        let mut bookkeeping_keys = usize::from(self.client.get(name)?.is_some());
        for list in [inputs_key(name), outputs_key(name)] {
            if !self.client.lrange(&list, 0, 0)?.is_empty() {
                bookkeeping_keys += 1;
            }
        }

        Ok(CacheStats::new(total_keys, store_calls, bookkeeping_keys))
    }

    // == Client Access ==
    /// Returns the store client.
    pub fn client(&self) -> &S {
        &self.client
    }

    /// Returns the store client mutably.
    pub fn client_mut(&mut self) -> &mut S {
        &mut self.client
    }

    /// Consumes the cache, returning the store client.
    pub fn into_inner(self) -> S {
        self.client
    }
}
