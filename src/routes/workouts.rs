// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout resource routes.

use crate::db::validate_document_id;
use crate::error::{AppError, Result};
use crate::models::{CreateWorkoutRequest, UpdateWorkoutRequest, Workout};
use crate::routes::{AppJson, MessageResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workouts", get(list_workouts))
        .route(
            "/api/workouts/{id}",
            put(update_workout).delete(delete_workout),
        )
        .route(
            "/api/users/{id}/workouts",
            get(list_workouts_for_user).post(create_workout),
        )
}

fn workout_not_found() -> AppError {
    AppError::NotFound("Workout not found".to_string())
}

/// `GET /api/workouts`: every workout, regardless of owner.
async fn list_workouts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Workout>>> {
    let workouts = state.db.list_workouts().await?;
    tracing::debug!(count = workouts.len(), "Listed workouts");
    Ok(Json(workouts))
}

/// `POST /api/users/{id}/workouts`
///
/// The owner must exist; nothing is written otherwise.
async fn create_workout(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    AppJson(req): AppJson<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<Workout>)> {
    validate_document_id(&user_id)?;

    if state.db.get_user(&user_id).await?.is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    req.validate()?;
    let new_workout = req.into_new_workout(user_id).ok_or_else(|| {
        AppError::BadRequest("dateTime, workoutType and duration are required".to_string())
    })?;

    let workout = state.db.create_workout(new_workout).await?;
    tracing::info!(
        workout_id = %workout.id,
        user_id = %workout.user_id,
        workout_type = %workout.workout_type,
        "Workout created"
    );

    Ok((StatusCode::CREATED, Json(workout)))
}

/// `GET /api/users/{id}/workouts`
///
/// An unknown user simply has no workouts.
async fn list_workouts_for_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Workout>>> {
    validate_document_id(&user_id)?;

    let workouts = state.db.list_workouts_for_user(&user_id).await?;
    tracing::debug!(user_id = %user_id, count = workouts.len(), "Listed workouts for user");
    Ok(Json(workouts))
}

/// `PUT /api/workouts/{id}`: merge supplied fields into the stored workout.
///
/// The owning user is not re-checked.
async fn update_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateWorkoutRequest>,
) -> Result<Json<Workout>> {
    validate_document_id(&id)?;
    req.validate()?;

    let mut workout = state
        .db
        .get_workout(&id)
        .await?
        .ok_or_else(workout_not_found)?;

    req.apply_to(&mut workout);
    state.db.replace_workout(&workout).await?;

    tracing::info!(workout_id = %workout.id, "Workout updated");

    Ok(Json(workout))
}

/// `DELETE /api/workouts/{id}`
async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    validate_document_id(&id)?;

    if state.db.get_workout(&id).await?.is_none() {
        return Err(workout_not_found());
    }
    state.db.delete_workout(&id).await?;

    tracing::info!(workout_id = %id, "Workout deleted");

    Ok(MessageResponse::new("Workout deleted"))
}
