//! bookwriter-server: HTTP API server for the bookwriter platform
//!
//! This crate provides:
//! - REST API endpoints for books, sections, subsections, and collaborations
//! - Registration, login, and logout with an access/refresh JWT pair
//! - Role-based permission checks (author vs collaborator)
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookwriter_server::{config::ServerConfig, routes, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(store, config);
//! let app = routes::build_router(state);
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use bookwriter_core;
pub use bookwriter_store;
