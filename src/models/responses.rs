//! Response DTOs for the HTTP API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;
use crate::invite::{ParsedInvite, VaultId};

/// Response body for `POST /invites`
#[derive(Debug, Clone, Serialize)]
pub struct InviteResponse {
    pub vault_id: VaultId,
    pub code: String,
    pub share_url: String,
}

/// Response body for `GET /invites/:code`
#[derive(Debug, Clone, Serialize)]
pub struct ParsedInviteResponse {
    /// The code as submitted
    pub code: String,
    /// Candidate vault id, still to be checked on chain
    pub vault_id: VaultId,
    /// Approximate issue time segment, base-36 decoded
    pub timestamp: u64,
    pub random_suffix: String,
}

impl ParsedInviteResponse {
    pub fn new(code: impl Into<String>, parsed: ParsedInvite) -> Self {
        Self {
            code: code.into(),
            vault_id: parsed.vault_id,
            timestamp: parsed.timestamp,
            random_suffix: parsed.random_suffix,
        }
    }
}

/// Response body for `GET /invites/:code/validate`
#[derive(Debug, Clone, Serialize)]
pub struct ValidateInviteResponse {
    pub code: String,
    pub valid_format: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_id: Option<VaultId>,
}

impl ValidateInviteResponse {
    pub fn new(code: impl Into<String>, vault_id: Option<VaultId>) -> Self {
        Self {
            code: code.into(),
            valid_format: vault_id.is_some(),
            vault_id,
        }
    }
}

/// Response body for `GET /cache/:key`
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: Value,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for `PUT /cache`
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
    /// TTL the entry was stored with
    pub ttl_ms: u64,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(key: impl Into<String>, ttl_ms: u64) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
            ttl_ms,
        }
    }
}

/// Response body for `DELETE /cache/:key`
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// The key that was deleted
    pub key: String,
    /// False when there was nothing to delete
    pub removed: bool,
}

/// Response body for `DELETE /cache`
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Number of entries dropped
    pub cleared: usize,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries dropped after their TTL elapsed
    pub expirations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
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

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
