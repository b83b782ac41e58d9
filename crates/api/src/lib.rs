//! HTTP surface: configuration, state, routes, handlers, and the shared
//! router builder used by both `main.rs` and the integration tests.

pub mod config;
pub mod handlers;
pub mod request_base;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
