// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running:
//! `gcloud emulators firestore start --host-port=127.0.0.1:8200`
//! then run with `FIRESTORE_EMULATOR_HOST=127.0.0.1:8200`.
//!
//! The emulator keeps state between tests, so each test uses unique emails.

use chrono::TimeZone;
use fitness_tracker::config::{Config, DatabaseBackend};
use fitness_tracker::db::Database;
use fitness_tracker::models::{NewUser, NewWorkout};

mod common;
use common::test_db;

fn unique_email() -> String {
    format!("{}@example.com", uuid::Uuid::new_v4().simple())
}

fn test_user(email: &str) -> NewUser {
    NewUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    }
}

fn test_workout(user_id: &str, hour: u32) -> NewWorkout {
    NewWorkout {
        user_id: user_id.to_string(),
        date_time: chrono::Utc
            .with_ymd_and_hms(2024, 3, 1, hour, 0, 0)
            .unwrap(),
        workout_type: "Run".to_string(),
        duration: 30.0,
        distance: Some(5.0),
        calories_burned: None,
        intensity: None,
        comments: None,
    }
}

async fn test_database() -> Database {
    Database::Firestore(test_db().await)
}

// ═══════════════════════════════════════════════════════════════════════════
// USER TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_user_create_and_get() {
    require_emulator!();

    let db = test_database().await;
    let email = unique_email();

    let created = db.create_user(test_user(&email)).await.unwrap();
    assert!(!created.id.is_empty());

    let fetched = db.get_user(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.email, email);
    assert_eq!(fetched.name, "Test User");
    assert_eq!(fetched.password_hash, created.password_hash);
    assert_eq!(fetched.created_at, created.created_at);

    let listed = db.list_users().await.unwrap();
    assert!(listed.iter().any(|u| u.id == created.id));
}

#[tokio::test]
async fn test_find_user_by_email() {
    require_emulator!();

    let db = test_database().await;
    let email = unique_email();

    assert!(db.find_user_by_email(&email).await.unwrap().is_none());

    let created = db.create_user(test_user(&email)).await.unwrap();
    let found = db.find_user_by_email(&email).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
}

#[tokio::test]
async fn test_user_replace_and_delete() {
    require_emulator!();

    let db = test_database().await;
    let mut user = db.create_user(test_user(&unique_email())).await.unwrap();

    user.name = "Renamed".to_string();
    db.replace_user(&user).await.unwrap();
    let fetched = db.get_user(&user.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Renamed");

    db.delete_user(&user.id).await.unwrap();
    assert!(db.get_user(&user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_missing_user() {
    require_emulator!();

    let db = test_database().await;
    let missing = uuid::Uuid::new_v4().simple().to_string();
    assert!(db.get_user(&missing).await.unwrap().is_none());
}

// ═══════════════════════════════════════════════════════════════════════════
// WORKOUT TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_workouts_for_user() {
    require_emulator!();

    let db = test_database().await;
    let a = db.create_user(test_user(&unique_email())).await.unwrap();
    let b = db.create_user(test_user(&unique_email())).await.unwrap();

    let later = db.create_workout(test_workout(&a.id, 18)).await.unwrap();
    let earlier = db.create_workout(test_workout(&a.id, 7)).await.unwrap();
    let other = db.create_workout(test_workout(&b.id, 9)).await.unwrap();

    let owned = db.list_workouts_for_user(&a.id).await.unwrap();
    let ids: Vec<&str> = owned.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec![earlier.id.as_str(), later.id.as_str()]);

    let all = db.list_workouts().await.unwrap();
    assert!(all.iter().any(|w| w.id == other.id));
}

#[tokio::test]
async fn test_workouts_sub_second_ordering() {
    require_emulator!();

    let db = test_database().await;
    let user = db.create_user(test_user(&unique_email())).await.unwrap();

    let whole = test_workout(&user.id, 7);
    let mut half = test_workout(&user.id, 7);
    half.date_time = whole.date_time + chrono::Duration::milliseconds(500);
    let mut next = test_workout(&user.id, 7);
    next.date_time = whole.date_time + chrono::Duration::seconds(1);

    let next = db.create_workout(next).await.unwrap();
    let half = db.create_workout(half).await.unwrap();
    let whole = db.create_workout(whole).await.unwrap();

    let owned = db.list_workouts_for_user(&user.id).await.unwrap();
    let ids: Vec<&str> = owned.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec![whole.id.as_str(), half.id.as_str(), next.id.as_str()]);
    assert_eq!(owned[1].date_time, half.date_time);
}

#[tokio::test]
async fn test_connect_uses_configured_emulator_host() {
    require_emulator!();

    let mut config = Config::test_default();
    config.database_backend = DatabaseBackend::Emulator;
    config.gcp_project_id = "test-project".to_string();
    config.emulator_host = std::env::var("FIRESTORE_EMULATOR_HOST").unwrap();

    let db = Database::connect(&config).await;
    assert_eq!(db.backend_name(), "firestore");

    let created = db.create_user(test_user(&unique_email())).await.unwrap();
    assert!(db.get_user(&created.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_workout_round_trip_fields() {
    require_emulator!();

    let db = test_database().await;
    let user = db.create_user(test_user(&unique_email())).await.unwrap();

    let mut new_workout = test_workout(&user.id, 7);
    new_workout.comments = Some("Hill repeats".to_string());
    new_workout.intensity = Some(8.0);
    let created = db.create_workout(new_workout).await.unwrap();

    let fetched = db.get_workout(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched.user_id, user.id);
    assert_eq!(fetched.date_time, created.date_time);
    assert_eq!(fetched.duration, 30.0);
    assert_eq!(fetched.distance, Some(5.0));
    assert_eq!(fetched.calories_burned, None);
    assert_eq!(fetched.intensity, Some(8.0));
    assert_eq!(fetched.comments.as_deref(), Some("Hill repeats"));
}

#[tokio::test]
async fn test_workout_replace_and_delete() {
    require_emulator!();

    let db = test_database().await;
    let user = db.create_user(test_user(&unique_email())).await.unwrap();
    let mut workout = db.create_workout(test_workout(&user.id, 7)).await.unwrap();

    workout.duration = 55.0;
    db.replace_workout(&workout).await.unwrap();
    let fetched = db.get_workout(&workout.id).await.unwrap().unwrap();
    assert_eq!(fetched.duration, 55.0);

    db.delete_workout(&workout.id).await.unwrap();
    assert!(db.get_workout(&workout.id).await.unwrap().is_none());
    assert!(db
        .list_workouts_for_user(&user.id)
        .await
        .unwrap()
        .is_empty());
}
