use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use trustbank_auth::AuthzError;
use trustbank_core::LedgerError;

pub fn ledger_error_to_response(err: LedgerError) -> axum::response::Response {
    let status = match &err {
        LedgerError::Validation(_) | LedgerError::InsufficientFunds => StatusCode::BAD_REQUEST,
        LedgerError::NotFound => StatusCode::NOT_FOUND,
        LedgerError::NumberSpaceExhausted(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if err.is_client_error() {
        tracing::debug!(error = %err, "request rejected");
    } else {
        tracing::error!(error = %err, "request failed");
    }

    json_error(status, err.to_string())
}

pub fn authz_error_to_response(err: AuthzError) -> axum::response::Response {
    match err {
        AuthzError::Forbidden => json_error(StatusCode::FORBIDDEN, err.to_string()),
    }
}

pub fn invalid_json_body(err: serde_json::Error) -> axum::response::Response {
    tracing::debug!(error = %err, "invalid json body");
    json_error(StatusCode::BAD_REQUEST, "Invalid JSON body")
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
