//! Route definitions for the HTTP API.

pub mod access;
pub mod auth;
pub mod books;
pub mod collaborations;
pub mod health;
pub mod sections;
pub mod subsections;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(books::routes())
        .merge(sections::routes())
        .merge(subsections::routes())
        .merge(collaborations::routes())
        .merge(access::routes())
        .with_state(state)
}
