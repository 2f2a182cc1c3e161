use axum::{extract::State, Json};
use tracing::info;

use crate::errors::{AppError, AppJson};
use crate::models::review::{NewReviewRequest, ReviewRow, ReviewWithAuthor};
use crate::state::AppState;

/// GET /api/reviews
/// Newest first, each review carrying its author's name.
pub async fn handle_list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewWithAuthor>>, AppError> {
    let reviews = state
        .store
        .list_reviews()
        .await
        .map_err(AppError::store("Gagal mengambil review"))?;
    Ok(Json(reviews))
}

/// POST /api/reviews
pub async fn handle_post_review(
    State(state): State<AppState>,
    AppJson(req): AppJson<NewReviewRequest>,
) -> Result<Json<ReviewRow>, AppError> {
    let review = state
        .store
        .insert_review(&req)
        .await
        .map_err(AppError::store("Gagal mengirim review"))?;
    info!("Stored review {} by user {:?}", review.id, review.user_id);
    Ok(Json(review))
}
