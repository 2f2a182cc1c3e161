use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::{AppError, AppJson};
use crate::models::subscriber::SubscribeRequest;
use crate::state::AppState;

const SUBSCRIBE_FAILED: &str = "Gagal subscribe";

/// POST /api/subscribe
pub async fn handle_subscribe(
    State(state): State<AppState>,
    AppJson(req): AppJson<SubscribeRequest>,
) -> Result<Json<Value>, AppError> {
    let existing = state
        .store
        .find_subscriber_by_email(req.email.as_deref())
        .await
        .map_err(AppError::store(SUBSCRIBE_FAILED))?;
    if existing.is_some() {
        return Err(AppError::Conflict("Email sudah terdaftar, Bestie!"));
    }

    let subscriber = state
        .store
        .insert_subscriber(req.email.as_deref())
        .await
        .map_err(AppError::store(SUBSCRIBE_FAILED))?;
    info!("New subscriber {}", subscriber.id);

    Ok(Json(json!({ "message": "Berhasil berlangganan!" })))
}
