//! Request DTOs for the HTTP API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::MAX_KEY_LENGTH;
use crate::invite::VaultId;

/// Request body for `POST /invites`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInviteRequest {
    /// Vault the invite is for
    pub vault_id: VaultId,
    /// Origin for the share link; the configured public origin if absent
    #[serde(default)]
    pub base_url: Option<String>,
}

impl CreateInviteRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match &self.base_url {
            Some(base_url) if base_url.trim().is_empty() => {
                Some("Base URL cannot be empty".to_string())
            }
            _ => None,
        }
    }
}

/// Request body for `PUT /cache`
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: Any JSON payload, typically an indexer response
/// - `ttl_ms`: Optional TTL in milliseconds (uses default if not specified)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: Value,
    /// Optional TTL in milliseconds
    #[serde(default)]
    pub ttl_ms: Option<u64>,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_invite_request_deserialize() {
        let req: CreateInviteRequest = serde_json::from_str(r#"{"vault_id": 42}"#).unwrap();
        assert_eq!(req.vault_id, 42);
        assert!(req.base_url.is_none());
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_create_invite_request_rejects_negative_id() {
        assert!(serde_json::from_str::<CreateInviteRequest>(r#"{"vault_id": -1}"#).is_err());
    }

    #[test]
    fn test_create_invite_request_blank_base_url() {
        let req: CreateInviteRequest =
            serde_json::from_str(r#"{"vault_id": 1, "base_url": "  "}"#).unwrap();
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": "vault:1", "value": {"members": ["0xabc"]}}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "vault:1");
        assert_eq!(req.value["members"][0], "0xabc");
        assert!(req.ttl_ms.is_none());
    }

    #[test]
    fn test_set_request_with_ttl() {
        let json = r#"{"key": "test", "value": 42, "ttl_ms": 100}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ttl_ms, Some(100));
    }

    #[test]
    fn test_validate_empty_key() {
        let req = SetRequest {
            key: "".to_string(),
            value: Value::Null,
            ttl_ms: None,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_key_too_long() {
        let req = SetRequest {
            key: "x".repeat(MAX_KEY_LENGTH + 1),
            value: Value::Null,
            ttl_ms: None,
        };
        assert!(req.validate().is_some());
    }
}
