//! Admin routes.
//!
//! Every route here sits behind [`crate::middleware::admin_middleware`]; the
//! handlers themselves assume the caller is already authorized.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

use trustbank_core::{AccountNumber, LedgerError, Registry};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/list", get(list_accounts))
        .route("/reset", post(reset_account))
        .route("/delete/:account_number", delete(delete_account))
}

/// GET /admin/list - every live account, unordered
pub async fn list_accounts(
    Extension(registry): Extension<Arc<Registry>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(registry.list_all())).into_response()
}

/// POST /admin/reset - zero an account's balance
pub async fn reset_account(
    Extension(registry): Extension<Arc<Registry>>,
    dto::JsonBody(body): dto::JsonBody<dto::ResetRequest>,
) -> axum::response::Response {
    let Some(number) = body.account_number() else {
        return errors::ledger_error_to_response(LedgerError::not_found());
    };

    match registry.reset(&number) {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

/// DELETE /admin/delete/:account_number - remove an account permanently
pub async fn delete_account(
    Extension(registry): Extension<Arc<Registry>>,
    Path(account_number): Path<String>,
) -> axum::response::Response {
    match registry.delete(&AccountNumber::new(account_number)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}
