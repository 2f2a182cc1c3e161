pub mod auth;
pub mod health;
pub mod reviews;
pub mod subscribe;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/api/hello", get(health::hello_handler))
        .route("/api/register", post(auth::handle_register))
        .route("/api/login", post(auth::handle_login))
        .route(
            "/api/reviews",
            get(reviews::handle_list_reviews).post(reviews::handle_post_review),
        )
        .route("/api/subscribe", post(subscribe::handle_subscribe))
        .with_state(state)
}
