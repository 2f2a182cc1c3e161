use axum::Json;
use serde_json::{json, Value};

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Backend is running!" }))
}

/// GET /api/hello
pub async fn hello_handler() -> Json<Value> {
    Json(json!({ "message": "Hello from API!" }))
}
