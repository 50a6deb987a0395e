//! Response DTOs for the cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, Decoded};
use crate::instrument::{RecordedCall, Replay};

/// Response body for the GET operation (GET /get/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The decoded value
    pub value: Decoded,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: Decoded) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for the STORE operation (POST /store)
#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    /// Success message
    pub message: String,
    /// The generated key
    pub key: String,
}

impl StoreResponse {
    /// Creates a new StoreResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Value stored under '{}'", key),
            key,
        }
    }
}

/// Response body for the history endpoint (GET /history)
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    /// Operation identifier
    pub name: String,
    /// Invocation count
    pub count: i64,
    /// Recorded calls, oldest first
    pub calls: Vec<RecordedCall>,
    /// Text rendering of the replay
    pub report: String,
}

impl From<Replay> for HistoryResponse {
    fn from(replay: Replay) -> Self {
        let report = replay.to_string();
        Self {
            name: replay.name,
            count: replay.count,
            calls: replay.calls,
            report,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Keys in the database
    pub total_keys: usize,
    /// Keys holding stored values
    pub value_keys: usize,
    /// Number of store calls
    pub store_calls: i64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            total_keys: stats.total_keys,
            value_keys: stats.value_keys(),
            store_calls: stats.store_calls,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_response_serialize() {
        let resp = GetResponse::new("test_key", Decoded::Integer(123));
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"key":"test_key","value":123}"#);
    }

    #[test]
    fn test_store_response_serialize() {
        let resp = StoreResponse::new("my_key");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("my_key"));
        assert!(json.contains("stored"));
    }

    #[test]
    fn test_history_response_from_replay() {
        let replay = Replay {
            name: "Cache.store".to_string(),
            count: 1,
            calls: vec![RecordedCall {
                input: "foo".to_string(),
                output: "k1".to_string(),
            }],
        };

        let resp = HistoryResponse::from(replay);
        assert_eq!(resp.count, 1);
        assert_eq!(
            resp.report,
            "Cache.store was called 1 times:\nCache.store(*foo) -> k1"
        );
    }

    #[test]
    fn test_stats_response_from_stats() {
        let resp = StatsResponse::from(CacheStats::new(7, 4, 3));
        assert_eq!(resp.total_keys, 7);
        assert_eq!(resp.value_keys, 4);
        assert_eq!(resp.store_calls, 4);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
