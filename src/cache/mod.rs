//! Cache Module
//!
//! Typed values stored under generated keys in an external store, with the
//! `store` call instrumented for counting and history.

mod ops;
mod stats;
mod store;
mod value;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use ops::{GetValue, Lookup, StoreValue, STORE};
pub use stats::CacheStats;
pub use store::Cache;
pub use value::{decode_float, decode_integer, decode_text, Decode, Decoded, Value};
