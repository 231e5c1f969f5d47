// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use fitness_tracker::config::Config;
use fitness_tracker::db::{Database, FirestoreDb, MemoryDb};
use fitness_tracker::routes::create_router;
use fitness_tracker::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Connect to the emulator named by `FIRESTORE_EMULATOR_HOST`.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    let host = std::env::var("FIRESTORE_EMULATOR_HOST").expect("FIRESTORE_EMULATOR_HOST not set");
    FirestoreDb::new_emulator("test-project", &host)
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app backed by a fresh in-memory database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with_db(Database::Memory(MemoryDb::new()))
}

/// Create a test app whose database is offline (every operation fails).
#[allow(dead_code)]
pub fn create_offline_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with_db(Database::Firestore(FirestoreDb::new_mock()))
}

fn create_test_app_with_db(db: Database) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        db,
    });
    (create_router(state.clone()), state)
}

/// Send a request and decode the JSON response body (`Value::Null` if empty).
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Create a user through the API and return its JSON representation.
#[allow(dead_code)]
pub async fn create_user(app: &Router, name: &str, email: &str, password: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": name, "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create user failed: {}", body);
    body
}

/// Create a workout for `user_id` through the API and return its JSON representation.
#[allow(dead_code)]
pub async fn create_workout(app: &Router, user_id: &str, workout: Value) -> Value {
    let uri = format!("/api/users/{}/workouts", user_id);
    let (status, body) = send(app, Method::POST, &uri, Some(workout)).await;
    assert_eq!(status, StatusCode::CREATED, "create workout failed: {}", body);
    body
}

/// A complete, valid workout body.
#[allow(dead_code)]
pub fn sample_workout() -> Value {
    json!({
        "dateTime": "2024-03-01T07:30:00Z",
        "workoutType": "Run",
        "duration": 45,
        "distance": 8.2,
        "intensity": 7,
        "comments": "Easy pace"
    })
}
