use axum::{routing::get, Router};

pub mod accounts;
pub mod admin;
pub mod system;

/// Router for the public account endpoints (no admin token needed).
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(accounts::router())
}
