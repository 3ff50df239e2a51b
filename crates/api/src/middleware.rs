use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use trustbank_auth::AdminSecret;

use crate::app::errors;

/// Header carrying the admin shared secret.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

#[derive(Clone)]
pub struct AdminState {
    pub secret: Arc<AdminSecret>,
}

/// Reject the request with 403 unless it carries the admin token.
///
/// Runs before any body extraction, so an unauthorized caller never learns
/// whether its payload would have been valid.
pub async fn admin_middleware(
    State(state): State<AdminState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if let Err(e) = state.secret.verify(extract_admin_token(req.headers())) {
        tracing::debug!(path = %req.uri().path(), "admin token rejected");
        return errors::authz_error_to_response(e);
    }

    next.run(req).await
}

fn extract_admin_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
}
