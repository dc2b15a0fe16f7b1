//! API Module
//!
//! HTTP handlers and routing for the invite and cache endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
