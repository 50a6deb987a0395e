//! Cache Operations
//!
//! The cache calls that instrumentation can wrap.

use std::fmt;

use crate::cache::value::{Decode, Decoded, Value};
use crate::cache::Cache;
use crate::error::Result;
use crate::instrument::{CallHistory, CountCalls, Operation};
use crate::store::StoreClient;

/// `Cache::store` with call counting and call history, as the cache runs it.
pub const STORE: CountCalls<CallHistory<StoreValue>> =
    CountCalls::new(CallHistory::new(StoreValue));

// == Store Value ==
/// Uninstrumented `Cache.store`: writes a value under a fresh key.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreValue;

impl<S: StoreClient> Operation<S> for StoreValue {
    type Input = Value;
    type Output = String;

    fn qualified_name(&self) -> &str {
        "Cache.store"
    }

    fn invoke(&self, cache: &mut Cache<S>, input: Value) -> Result<String> {
        cache.write_value(&input)
    }
}

// == Get Value ==
/// Uninstrumented `Cache.get` with a fixed decode strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetValue {
    pub decode: Decode,
}

impl GetValue {
    pub const fn new(decode: Decode) -> Self {
        Self { decode }
    }
}

impl<S: StoreClient> Operation<S> for GetValue {
    type Input = String;
    type Output = Lookup;

    fn qualified_name(&self) -> &str {
        "Cache.get"
    }

    fn invoke(&self, cache: &mut Cache<S>, key: String) -> Result<Lookup> {
        cache.get(&key, self.decode).map(Lookup)
    }
}

// == Lookup ==
/// Outcome of a get; displays as `None` when the key was absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup(pub Option<Decoded>);

impl Lookup {
    pub fn into_inner(self) -> Option<Decoded> {
        self.0
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "None"),
        }
    }
}
