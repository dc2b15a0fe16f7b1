//! API Handlers
//!
//! HTTP request handlers for the invite and cache endpoints.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::invite::{build_share_url, decode_vault_id, parse, InviteCodec};
use crate::models::{
    ClearResponse, CreateInviteRequest, DeleteResponse, GetResponse, HealthResponse,
    InviteResponse, ParsedInviteResponse, SetRequest, SetResponse, StatsResponse,
    ValidateInviteResponse,
};

/// Application state shared across all handlers.
///
/// The cache has no locking of its own, so it lives behind `Arc<RwLock<>>` here.
#[derive(Clone)]
pub struct AppState {
    /// Shared response cache holding arbitrary JSON payloads
    pub cache: Arc<RwLock<TtlCache<Value>>>,
    /// Invite minting on the wall clock
    pub codec: InviteCodec,
    /// Origin used for share links when the request has none
    pub public_base_url: Arc<str>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: TtlCache<Value>, public_base_url: impl Into<String>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            codec: InviteCodec::new(),
            public_base_url: Arc::from(public_base_url.into()),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = TtlCache::with_default_ttl(config.default_ttl_ms);
        Self::new(cache, config.public_base_url.clone())
    }
}

// == Invite Handlers ==

/// Handler for POST /invites
///
/// Mints a fresh invite code and share link for a vault.
pub async fn create_invite_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateInviteRequest>,
) -> Result<Json<InviteResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let code = state.codec.encode(req.vault_id);
    let base_url = req.base_url.as_deref().unwrap_or(&state.public_base_url);
    let share_url = build_share_url(req.vault_id, &code, base_url);
    info!(vault_id = req.vault_id, "Created invite");

    Ok(Json(InviteResponse {
        vault_id: req.vault_id,
        code,
        share_url,
    }))
}

/// Handler for GET /invites/:code
///
/// Splits a complete code into its fields. The vault id is only a candidate;
/// membership must still be checked against chain state.
pub async fn parse_invite_handler(Path(code): Path<String>) -> Result<Json<ParsedInviteResponse>> {
    let parsed = parse(&code).ok_or_else(|| AppError::InvalidInvite(code.clone()))?;
    Ok(Json(ParsedInviteResponse::new(code, parsed)))
}

/// Handler for GET /invites/:code/validate
///
/// Format check only; always answers 200.
pub async fn validate_invite_handler(Path(code): Path<String>) -> Json<ValidateInviteResponse> {
    let vault_id = decode_vault_id(&code);
    Json(ValidateInviteResponse::new(code, vault_id))
}

// == Cache Handlers ==

/// Handler for PUT /cache
///
/// Stores a JSON payload with optional TTL.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    let ttl_ms = req.ttl_ms.unwrap_or(cache.default_ttl_ms());
    cache.set(req.key.clone(), req.value, Some(ttl_ms));
    debug!(key = %req.key, ttl_ms, "Cached value");

    Ok(Json(SetResponse::new(req.key, ttl_ms)))
}

/// Handler for GET /cache/:key
///
/// Returns 404 for both absent and expired keys.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    // Write lock: an expired entry is evicted on read
    let mut cache = state.cache.write().await;
    let value = cache
        .get(&key)
        .cloned()
        .ok_or_else(|| AppError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for DELETE /cache/:key
///
/// Deleting a missing key succeeds with `removed: false`.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DeleteResponse> {
    let removed = state.cache.write().await.delete(&key);
    Json(DeleteResponse { key, removed })
}

/// Handler for DELETE /cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    let cleared = cache.len();
    cache.clear();
    info!(cleared, "Cleared cache");

    Json(ClearResponse { cleared })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.read().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invite::is_valid_format;
    use serde_json::json;

    fn test_state() -> AppState {
        AppState::new(TtlCache::new(), "https://example.com")
    }

    #[tokio::test]
    async fn test_create_invite_uses_configured_origin() {
        let req = CreateInviteRequest {
            vault_id: 888,
            base_url: None,
        };
        let response = create_invite_handler(State(test_state()), Json(req)).await.unwrap();

        assert!(is_valid_format(&response.code));
        assert_eq!(decode_vault_id(&response.code), Some(888));
        assert_eq!(
            response.share_url,
            format!("https://example.com/join/888?invite={}", response.code)
        );
    }

    #[tokio::test]
    async fn test_create_invite_with_request_origin() {
        let req = CreateInviteRequest {
            vault_id: 5,
            base_url: Some("http://localhost:5173".to_string()),
        };
        let response = create_invite_handler(State(test_state()), Json(req)).await.unwrap();
        assert!(response.share_url.starts_with("http://localhost:5173/join/5?invite=GOAL5"));
    }

    #[tokio::test]
    async fn test_create_invite_blank_origin_rejected() {
        let req = CreateInviteRequest {
            vault_id: 5,
            base_url: Some(String::new()),
        };
        let result = create_invite_handler(State(test_state()), Json(req)).await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_parse_invite_handler() {
        let response = parse_invite_handler(Path("GOAL888ABC123XYZ".to_string()))
            .await
            .unwrap();
        assert_eq!(response.vault_id, 888);
        assert_eq!(response.random_suffix, "23XYZ");

        let result = parse_invite_handler(Path("GOAL0ABC123".to_string())).await;
        assert!(matches!(result, Err(AppError::InvalidInvite(_))));
    }

    #[tokio::test]
    async fn test_validate_invite_handler() {
        let response = validate_invite_handler(Path("GOAL0ABC123".to_string())).await;
        assert!(response.valid_format);
        assert_eq!(response.vault_id, Some(0));

        let response = validate_invite_handler(Path("INVALID".to_string())).await;
        assert!(!response.valid_format);
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let state = test_state();

        let req = SetRequest {
            key: "vault:1".to_string(),
            value: json!({"name": "Trip fund"}),
            ttl_ms: None,
        };
        let response = set_handler(State(state.clone()), Json(req)).await.unwrap();
        assert_eq!(response.ttl_ms, 60_000);

        let response = get_handler(State(state), Path("vault:1".to_string()))
            .await
            .unwrap();
        assert_eq!(response.value["name"], "Trip fund");
    }

    #[tokio::test]
    async fn test_get_expired_is_not_found() {
        let state = test_state();

        let req = SetRequest {
            key: "stale".to_string(),
            value: json!(1),
            ttl_ms: Some(0),
        };
        set_handler(State(state.clone()), Json(req)).await.unwrap();

        let result = get_handler(State(state.clone()), Path("stale".to_string())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_handler_missing_key() {
        let response = delete_handler(State(test_state()), Path("missing".to_string())).await;
        assert!(!response.removed);
    }

    #[tokio::test]
    async fn test_clear_handler() {
        let state = test_state();
        for key in ["a", "b", "c"] {
            state.cache.write().await.set(key, json!(key), None);
        }

        let response = clear_handler(State(state.clone())).await;
        assert_eq!(response.cleared, 3);
        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(test_state())).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
