// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login and session routes.

use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::db::validate_document_id;
use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, AuthUser};
use crate::models::user::normalize_email;
use crate::models::{LoginRequest, UserResponse};
use crate::routes::AppJson;
use crate::services::password;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/login", post(login))
}

/// Routes that need a session token. The auth layer is added in routes/mod.rs.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/me", get(get_me))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// `POST /api/login`: verify credentials and issue a session token.
async fn login(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    req.validate()?;
    let (Some(email), Some(password)) = (req.email, req.password) else {
        return Err(AppError::BadRequest(
            "email and password are required".to_string(),
        ));
    };
    let email = normalize_email(&email);

    let Some(user) = state.db.find_user_by_email(&email).await? else {
        password::verify_against_dummy(password).await;
        tracing::warn!("Login failed: unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !password::verify_password(password, user.password_hash.clone()).await? {
        tracing::warn!(user_id = %user.id, "Login failed: wrong password");
        return Err(AppError::InvalidCredentials);
    }

    let token = create_jwt(
        &user.id,
        &state.config.jwt_signing_key,
        state.config.jwt_ttl_secs,
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    tracing::info!(user_id = %user.id, "Login successful");

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// `GET /api/me`: the user the session token belongs to.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<UserResponse>> {
    validate_document_id(&auth.user_id).map_err(|_| AppError::InvalidToken)?;

    let user = state
        .db
        .get_user(&auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}
