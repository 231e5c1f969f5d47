// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User resource routes.

use crate::db::validate_document_id;
use crate::error::{AppError, Result};
use crate::models::user::normalize_email;
use crate::models::{CreateUserRequest, NewUser, UpdateUserRequest, UserResponse};
use crate::routes::{AppJson, MessageResponse};
use crate::services::password;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

/// `GET /api/users`
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserResponse>>> {
    let users = state.db.list_users().await?;
    tracing::debug!(count = users.len(), "Listed users");
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// `POST /api/users`
async fn create_user(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    req.validate()?;

    let (Some(name), Some(email), Some(password)) = (req.name, req.email, req.password) else {
        return Err(AppError::BadRequest(
            "name, email and password are required".to_string(),
        ));
    };
    let email = normalize_email(&email);

    if state.db.find_user_by_email(&email).await?.is_some() {
        return Err(AppError::BadRequest("Email is already registered".to_string()));
    }

    let password_hash = password::hash_password(password).await?;
    let user = state
        .db
        .create_user(NewUser {
            name,
            email,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// `GET /api/users/{id}`
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>> {
    validate_document_id(&id)?;

    let user = state.db.get_user(&id).await?.ok_or_else(user_not_found)?;
    Ok(Json(user.into()))
}

/// `PUT /api/users/{id}`: merge supplied fields into the stored user.
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>> {
    validate_document_id(&id)?;
    req.validate()?;

    let mut user = state.db.get_user(&id).await?.ok_or_else(user_not_found)?;

    if let Some(email) = req.email {
        let email = normalize_email(&email);
        if email != user.email {
            if let Some(other) = state.db.find_user_by_email(&email).await? {
                if other.id != user.id {
                    return Err(AppError::BadRequest(
                        "Email is already registered".to_string(),
                    ));
                }
            }
            user.email = email;
        }
    }
    if let Some(name) = req.name {
        user.name = name;
    }
    if let Some(password) = req.password {
        user.password_hash = password::hash_password(password).await?;
    }

    state.db.replace_user(&user).await?;
    tracing::info!(user_id = %user.id, "User updated");

    Ok(Json(user.into()))
}

/// `DELETE /api/users/{id}`
///
/// Workouts referencing the user are left in place.
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    validate_document_id(&id)?;

    if state.db.get_user(&id).await?.is_none() {
        return Err(user_not_found());
    }
    state.db.delete_user(&id).await?;

    tracing::info!(user_id = %id, "User deleted");

    Ok(MessageResponse::new("User deleted"))
}
