use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use trustbank_core::AccountNumber;

use crate::app::errors;

// -------------------------
// Body extractor
// -------------------------

/// JSON request body that falls back to `T::default()` when there is nothing
/// to parse: no body, a non-JSON content type, or JSON that is not an object.
/// Only syntactically malformed JSON is rejected.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        parse_body(is_json, &bytes)
            .map(JsonBody)
            .map_err(errors::invalid_json_body)
    }
}

/// `application/json` or any `application/*+json`, parameters ignored.
pub fn is_json_content_type(value: &str) -> bool {
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

pub fn parse_body<T>(is_json: bool, bytes: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    match serde_json::from_slice::<Value>(bytes)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).unwrap_or_default()),
        _ => Ok(T::default()),
    }
}

// -------------------------
// Request DTOs
// -------------------------
//
// Fields are kept as raw JSON so type mismatches surface as ledger errors
// (400/404 with the usual messages) instead of extractor rejections.

#[derive(Debug, Default, Deserialize)]
pub struct CreateAccountRequest {
    pub name: Option<Value>,
}

impl CreateAccountRequest {
    /// Holder name, or `""` when absent or not a string.
    pub fn name(&self) -> &str {
        self.name.as_ref().and_then(Value::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountRequest {
    pub account_number: Option<Value>,
    pub amount: Option<Value>,
}

impl AmountRequest {
    pub fn account_number(&self) -> Option<AccountNumber> {
        account_number_from_json(self.account_number.as_ref())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequest {
    pub account_number: Option<Value>,
}

impl ResetRequest {
    pub fn account_number(&self) -> Option<AccountNumber> {
        account_number_from_json(self.account_number.as_ref())
    }
}

/// Accept a JSON string or number; anything else cannot name an account.
pub fn account_number_from_json(value: Option<&Value>) -> Option<AccountNumber> {
    match value? {
        Value::String(s) => Some(AccountNumber::new(s.as_str())),
        Value::Number(n) => Some(AccountNumber::new(n.to_string())),
        _ => None,
    }
}
