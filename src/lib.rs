//! Call Cache - a key-value cache layer with call instrumentation
//!
//! Stores typed values under generated keys in an external key-value store,
//! counts and records every store call, and replays the recorded history.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod instrument;
pub mod models;
pub mod store;

pub use api::AppState;
pub use cache::Cache;
pub use config::Config;
pub use error::{CacheError, Result};
pub use store::{MemoryStore, StoreClient};
