//! Goal Vault - invite codes and response caching for social savings vaults
//!
//! Mints short shareable invite codes that carry a candidate vault id, and
//! keeps indexer responses in a short-lived TTL cache.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod invite;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::TtlCache;
pub use config::Config;
pub use invite::InviteCodec;
pub use tasks::spawn_cleanup_task;
