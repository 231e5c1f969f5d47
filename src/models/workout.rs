// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Workout document, stored and returned as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct Workout {
    /// Document ID
    pub id: String,
    /// Owning user's document ID
    pub user_id: String,
    /// When the workout took place
    #[serde(with = "crate::time_utils::rfc3339_millis")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date_time: DateTime<Utc>,
    /// Free-form label (Run, Swim, Strength, ...)
    pub workout_type: String,
    /// Duration, in whatever unit the client uses (minutes by convention)
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Fields for a workout that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub user_id: String,
    pub date_time: DateTime<Utc>,
    pub workout_type: String,
    pub duration: f64,
    pub distance: Option<f64>,
    pub calories_burned: Option<f64>,
    pub intensity: Option<f64>,
    pub comments: Option<String>,
}

impl NewWorkout {
    pub fn with_id(self, id: String) -> Workout {
        Workout {
            id,
            user_id: self.user_id,
            date_time: self.date_time,
            workout_type: self.workout_type,
            duration: self.duration,
            distance: self.distance,
            calories_burned: self.calories_burned,
            intensity: self.intensity,
            comments: self.comments,
        }
    }
}

/// `POST /api/users/{user_id}/workouts` body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    #[validate(required(message = "dateTime is required"))]
    pub date_time: Option<DateTime<Utc>>,
    #[validate(
        required(message = "workoutType is required"),
        length(min = 1, message = "workoutType must not be empty")
    )]
    pub workout_type: Option<String>,
    #[validate(
        required(message = "duration is required"),
        range(min = 0.0, message = "duration must not be negative")
    )]
    pub duration: Option<f64>,
    #[validate(range(min = 0.0, message = "distance must not be negative"))]
    pub distance: Option<f64>,
    #[validate(range(min = 0.0, message = "caloriesBurned must not be negative"))]
    pub calories_burned: Option<f64>,
    #[validate(range(min = 0.0, message = "intensity must not be negative"))]
    pub intensity: Option<f64>,
    pub comments: Option<String>,
}

impl CreateWorkoutRequest {
    /// Convert a validated request into a record owned by `user_id`.
    ///
    /// Returns `None` if a required field is missing, which `validate()` rules out.
    pub fn into_new_workout(self, user_id: String) -> Option<NewWorkout> {
        Some(NewWorkout {
            user_id,
            date_time: self.date_time?,
            workout_type: self.workout_type?,
            duration: self.duration?,
            distance: self.distance,
            calories_burned: self.calories_burned,
            intensity: self.intensity,
            comments: self.comments,
        })
    }
}

/// `PUT /api/workouts/{id}` body. Only supplied fields change; the owner cannot.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkoutRequest {
    pub date_time: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "workoutType must not be empty"))]
    pub workout_type: Option<String>,
    #[validate(range(min = 0.0, message = "duration must not be negative"))]
    pub duration: Option<f64>,
    #[validate(range(min = 0.0, message = "distance must not be negative"))]
    pub distance: Option<f64>,
    #[validate(range(min = 0.0, message = "caloriesBurned must not be negative"))]
    pub calories_burned: Option<f64>,
    #[validate(range(min = 0.0, message = "intensity must not be negative"))]
    pub intensity: Option<f64>,
    pub comments: Option<String>,
}

impl UpdateWorkoutRequest {
    /// Merge the supplied fields onto `workout`.
    pub fn apply_to(self, workout: &mut Workout) {
        if let Some(date_time) = self.date_time {
            workout.date_time = date_time;
        }
        if let Some(workout_type) = self.workout_type {
            workout.workout_type = workout_type;
        }
        if let Some(duration) = self.duration {
            workout.duration = duration;
        }
        if self.distance.is_some() {
            workout.distance = self.distance;
        }
        if self.calories_burned.is_some() {
            workout.calories_burned = self.calories_burned;
        }
        if self.intensity.is_some() {
            workout.intensity = self.intensity;
        }
        if self.comments.is_some() {
            workout.comments = self.comments;
        }
    }
}
