//! API Handlers
//!
//! HTTP request handlers for each cache endpoint.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::cache::Cache;
use crate::error::{CacheError, Result};
use crate::models::{
    GetQuery, GetResponse, HealthResponse, HistoryResponse, StatsResponse, StoreRequest,
    StoreResponse,
};
use crate::store::{MemoryStore, SharedStore};

/// Application state shared across all handlers.
///
/// Every cache call needs `&mut` access to the store client, so the cache
/// sits behind a mutex. Store clients block, so handlers run cache calls
/// through [`with_cache`] on the blocking thread pool.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache over the configured store
    pub cache: Arc<Mutex<Cache<SharedStore>>>,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: Cache<SharedStore>) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Connects to `store_url` when set, otherwise uses an in-memory store.
    /// Either way the target database is flushed.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        let client = connect(config.store_url.as_deref())?;
        Ok(Self::new(Cache::new(client)?))
    }

    /// Creates a new AppState over a fresh in-memory store.
    pub fn in_memory() -> Result<Self> {
        let client: SharedStore = Box::new(MemoryStore::new());
        Ok(Self::new(Cache::new(client)?))
    }
}

#[cfg(feature = "redis")]
fn connect(store_url: Option<&str>) -> Result<SharedStore> {
    match store_url {
        Some(url) => Ok(Box::new(crate::store::RedisStore::connect(url)?)),
        None => Ok(Box::new(MemoryStore::new())),
    }
}

#[cfg(not(feature = "redis"))]
fn connect(store_url: Option<&str>) -> Result<SharedStore> {
    match store_url {
        Some(url) => Err(CacheError::Connection(format!(
            "cannot connect to {}: built without the `redis` feature",
            url
        ))),
        None => Ok(Box::new(MemoryStore::new())),
    }
}

/// Runs `f` against the shared cache on the blocking thread pool.
///
/// The lock is taken asynchronously and held until `f` returns, so store
/// round trips never stall a runtime worker.
async fn with_cache<T, F>(state: &AppState, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&mut Cache<SharedStore>) -> Result<T> + Send + 'static,
{
    let mut cache = Arc::clone(&state.cache).lock_owned().await;
    tokio::task::spawn_blocking(move || f(&mut cache))
        .await
        .map_err(|e| CacheError::Store(format!("store task failed: {}", e)))?
}

/// Handler for POST /store
///
/// Stores a value under a new key.
pub async fn store_handler(
    State(state): State<AppState>,
    Json(req): Json<StoreRequest>,
) -> Result<Json<StoreResponse>> {
    let key = with_cache(&state, move |cache| cache.store(req.value)).await?;

    Ok(Json(StoreResponse::new(key)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value by key, decoded per the `decode` query parameter.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<GetQuery>,
) -> Result<Json<GetResponse>> {
    let lookup = key.clone();
    let value = with_cache(&state, move |cache| cache.get(&lookup, query.decode))
        .await?
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /history
///
/// Returns the replay of every recorded store call.
pub async fn history_handler(State(state): State<AppState>) -> Result<Json<HistoryResponse>> {
    let replay = with_cache(&state, |cache| cache.history()).await?;

    Ok(Json(HistoryResponse::from(replay)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let stats = with_cache(&state, |cache| cache.stats()).await?;

    Ok(Json(StatsResponse::from(stats)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
