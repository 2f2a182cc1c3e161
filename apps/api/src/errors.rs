use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every error body has the shape `{"message": "..."}`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Duplicate email on register or subscribe.
    #[error("Conflict: {0}")]
    Conflict(&'static str),

    /// Unknown email or wrong password on login.
    #[error("Unauthorized: {0}")]
    Unauthorized(&'static str),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Any persistence failure. `message` is the route's generic reply; the
    /// underlying error is only logged.
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    /// Adapter for `map_err` that tags a store failure with the route's reply.
    pub fn store(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Store { message, source }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.to_string()),
            AppError::MalformedBody(msg) => {
                tracing::debug!("Rejected request body: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Store { message, source } => {
                tracing::error!("Database error: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// JSON body extractor with the leniency of a typical JSON body parser.
///
/// An empty body, or a request whose `Content-Type` is not JSON, reads as
/// `{}` so the handler runs with every field absent. Only a JSON body that
/// fails to parse is rejected, as `AppError::MalformedBody`.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

        let body: &[u8] = if is_json && !bytes.is_empty() { &bytes } else { b"{}" };
        let Json(value) = Json::<T>::from_bytes(body)?;
        Ok(AppJson(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
