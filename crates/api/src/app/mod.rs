//! HTTP API application wiring (Axum router + registry injection).
//!
//! - `routes/`: HTTP routes + handlers (public accounts, admin, system)
//! - `dto.rs`: request DTOs and JSON extraction helpers
//! - `errors.rs`: consistent `{"error": ...}` responses

use std::sync::Arc;

use axum::{Extension, Router};

use trustbank_auth::AdminSecret;
use trustbank_core::Registry;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router around an existing registry.
pub fn build_app(registry: Arc<Registry>, admin_secret: AdminSecret) -> Router {
    let admin_state = middleware::AdminState {
        secret: Arc::new(admin_secret),
    };

    // Admin routes: require the shared-secret header.
    let admin = routes::admin::router().route_layer(axum::middleware::from_fn_with_state(
        admin_state,
        middleware::admin_middleware,
    ));

    routes::router()
        .nest("/admin", admin)
        .layer(Extension(registry))
}
