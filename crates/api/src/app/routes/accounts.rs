use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use trustbank_core::{AccountNumber, LedgerError, Registry};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/create", post(create_account))
        .route("/get/:account_number", get(get_account))
        .route("/deposit", post(deposit))
        .route("/withdraw", post(withdraw))
}

/// POST /create - open a new account
pub async fn create_account(
    Extension(registry): Extension<Arc<Registry>>,
    dto::JsonBody(body): dto::JsonBody<dto::CreateAccountRequest>,
) -> axum::response::Response {

    match registry.create(body.name()) {
        Ok(account) => (StatusCode::CREATED, Json(account)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

/// GET /get/:account_number - fetch one account
pub async fn get_account(
    Extension(registry): Extension<Arc<Registry>>,
    Path(account_number): Path<String>,
) -> axum::response::Response {
    match registry.get(&AccountNumber::new(account_number)) {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

/// POST /deposit - credit an account
pub async fn deposit(
    Extension(registry): Extension<Arc<Registry>>,
    dto::JsonBody(body): dto::JsonBody<dto::AmountRequest>,
) -> axum::response::Response {
    let Some(number) = body.account_number() else {
        return errors::ledger_error_to_response(LedgerError::not_found());
    };

    match registry.deposit(&number, body.amount.as_ref()) {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

/// POST /withdraw - debit an account
pub async fn withdraw(
    Extension(registry): Extension<Arc<Registry>>,
    dto::JsonBody(body): dto::JsonBody<dto::AmountRequest>,
) -> axum::response::Response {
    let Some(number) = body.account_number() else {
        return errors::ledger_error_to_response(LedgerError::not_found());
    };

    match registry.withdraw(&number, body.amount.as_ref()) {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}
