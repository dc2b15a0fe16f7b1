//! Cache Module
//!
//! Short-lived in-memory cache for indexer responses with per-entry TTL.

mod entry;
mod fetch;
pub mod keys;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use fetch::fetch_through;
pub use stats::CacheStats;
pub use store::TtlCache;

// == Public Constants ==
/// TTL applied when a value is stored without one (one minute)
pub const DEFAULT_TTL_MS: u64 = 60_000;

/// Maximum allowed key length in bytes for keys arriving over HTTP
pub const MAX_KEY_LENGTH: usize = 256;
