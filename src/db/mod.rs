// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer.
//!
//! [`Database`] is the handle passed to every handler. It dispatches to
//! Firestore (cloud or emulator) or to an in-process store.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::config::{Config, DatabaseBackend};
use crate::error::AppError;
use crate::models::{NewUser, NewWorkout, User, Workout};
use crate::time_utils::now_rfc3339;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const WORKOUTS: &str = "workouts";
}

/// Firestore's limit on document ID length, in bytes.
const MAX_DOCUMENT_ID_BYTES: usize = 1500;

/// Check that a client-supplied ID can address a document.
pub fn validate_document_id(id: &str) -> Result<(), AppError> {
    let valid = !id.is_empty()
        && id.len() <= MAX_DOCUMENT_ID_BYTES
        && !id.contains('/')
        && id != "."
        && id != ".."
        && !(id.starts_with("__") && id.ends_with("__"));

    if valid {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("Invalid id: {:?}", id)))
    }
}

/// Generated document IDs are random UUIDs without hyphens.
fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Process-lifetime database handle.
#[derive(Clone)]
pub enum Database {
    Firestore(FirestoreDb),
    Memory(MemoryDb),
}

impl Database {
    /// Open the backend named in `config`.
    ///
    /// A failed Firestore connection is logged and yields an offline handle
    /// whose operations all fail, so the server still starts.
    pub async fn connect(config: &Config) -> Self {
        let result = match config.database_backend {
            DatabaseBackend::Memory => {
                tracing::info!("Using in-memory database");
                return Database::Memory(MemoryDb::new());
            }
            DatabaseBackend::Emulator => {
                FirestoreDb::new_emulator(&config.gcp_project_id, &config.emulator_host).await
            }
            DatabaseBackend::Firestore => FirestoreDb::new(&config.gcp_project_id).await,
        };

        match result {
            Ok(db) => Database::Firestore(db),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    backend = config.database_backend.as_str(),
                    "Error connecting to database, continuing offline"
                );
                Database::Firestore(FirestoreDb::new_mock())
            }
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Database::Firestore(db) if db.is_connected() => "firestore",
            Database::Firestore(_) => "offline",
            Database::Memory(_) => "memory",
        }
    }

    // ─── User Operations ─────────────────────────────────────────

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        match self {
            Database::Firestore(db) => db.list_users().await,
            Database::Memory(db) => Ok(db.list_users()),
        }
    }

    pub async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        match self {
            Database::Firestore(db) => db.get_user(id).await,
            Database::Memory(db) => Ok(db.get_user(id)),
        }
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        match self {
            Database::Firestore(db) => db.find_user_by_email(email).await,
            Database::Memory(db) => Ok(db.find_user_by_email(email)),
        }
    }

    /// Store a new user under a generated ID.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = User {
            id: new_document_id(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now_rfc3339(),
        };
        self.replace_user(&user).await?;
        Ok(user)
    }

    /// Write the whole user document under `user.id`.
    pub async fn replace_user(&self, user: &User) -> Result<(), AppError> {
        match self {
            Database::Firestore(db) => db.set_user(user).await,
            Database::Memory(db) => {
                db.set_user(user);
                Ok(())
            }
        }
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        match self {
            Database::Firestore(db) => db.delete_user(id).await,
            Database::Memory(db) => {
                db.delete_user(id);
                Ok(())
            }
        }
    }

    // ─── Workout Operations ──────────────────────────────────────

    pub async fn list_workouts(&self) -> Result<Vec<Workout>, AppError> {
        match self {
            Database::Firestore(db) => db.list_workouts().await,
            Database::Memory(db) => Ok(db.list_workouts()),
        }
    }

    pub async fn list_workouts_for_user(&self, user_id: &str) -> Result<Vec<Workout>, AppError> {
        match self {
            Database::Firestore(db) => db.list_workouts_for_user(user_id).await,
            Database::Memory(db) => Ok(db.list_workouts_for_user(user_id)),
        }
    }

    pub async fn get_workout(&self, id: &str) -> Result<Option<Workout>, AppError> {
        match self {
            Database::Firestore(db) => db.get_workout(id).await,
            Database::Memory(db) => Ok(db.get_workout(id)),
        }
    }

    /// Store a new workout under a generated ID.
    pub async fn create_workout(&self, new_workout: NewWorkout) -> Result<Workout, AppError> {
        let workout = new_workout.with_id(new_document_id());
        self.replace_workout(&workout).await?;
        Ok(workout)
    }

    /// Write the whole workout document under `workout.id`.
    pub async fn replace_workout(&self, workout: &Workout) -> Result<(), AppError> {
        match self {
            Database::Firestore(db) => db.set_workout(workout).await,
            Database::Memory(db) => {
                db.set_workout(workout);
                Ok(())
            }
        }
    }

    pub async fn delete_workout(&self, id: &str) -> Result<(), AppError> {
        match self {
            Database::Firestore(db) => db.delete_workout(id).await,
            Database::Memory(db) => {
                db.delete_workout(id);
                Ok(())
            }
        }
    }
}
