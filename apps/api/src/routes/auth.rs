use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::{AppError, AppJson};
use crate::models::user::{LoginRequest, PublicUser, RegisterRequest, UserRow};
use crate::state::AppState;

const SERVER_ERROR: &str = "Server Error";

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: UserRow,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: PublicUser,
}

/// POST /api/register
pub async fn handle_register(
    State(state): State<AppState>,
    AppJson(req): AppJson<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    let existing = state
        .store
        .find_user_by_email(req.email.as_deref())
        .await
        .map_err(AppError::store(SERVER_ERROR))?;
    if existing.is_some() {
        return Err(AppError::Conflict("Email sudah terdaftar!"));
    }

    let user = state
        .store
        .insert_user(&req)
        .await
        .map_err(AppError::store(SERVER_ERROR))?;
    info!("Registered user {}", user.id);

    Ok(Json(RegisterResponse {
        message: "Register Berhasil!",
        user,
    }))
}

/// POST /api/login
/// Passwords are compared as plain text.
pub async fn handle_login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state
        .store
        .find_user_by_email(req.email.as_deref())
        .await
        .map_err(AppError::store(SERVER_ERROR))?
        .ok_or(AppError::Unauthorized("Email tidak ditemukan!"))?;

    if !user.password_matches(req.password.as_ref()) {
        return Err(AppError::Unauthorized("Password salah!"));
    }

    Ok(Json(LoginResponse {
        message: "Login Berhasil!",
        user: user.into(),
    }))
}
