//! Background Tasks Module
//!
//! # Tasks
//! - TTL Cleanup: purges expired cache entries when an interval is configured

mod cleanup;

pub use cleanup::spawn_cleanup_task;
