// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Password hashing with Argon2id.
//!
//! Hashes are stored as PHC strings, which carry their own salt and
//! parameters. Hashing is CPU-bound, so the async entry points run it on
//! the blocking thread pool.

use crate::error::AppError;
use anyhow::anyhow;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::sync::LazyLock;

/// Verified against when a login names an unknown email, so that path costs
/// about as much as a wrong password.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password_blocking("dummy-password-for-unknown-accounts").ok());

/// Hash a password with a fresh random salt.
pub fn hash_password_blocking(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow!("Password hashing failed: {}", e)))
}

/// Check a password against a stored PHC hash.
///
/// A wrong password is `Ok(false)`; only an unreadable stored hash is an error.
pub fn verify_password_blocking(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| AppError::Internal(anyhow!("Stored password hash is invalid: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

pub async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password_blocking(&password))
        .await
        .map_err(|e| AppError::Internal(anyhow!("Hashing task failed: {}", e)))?
}

pub async fn verify_password(password: String, password_hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password_blocking(&password, &password_hash))
        .await
        .map_err(|e| AppError::Internal(anyhow!("Verification task failed: {}", e)))?
}

/// Build the dummy hash ahead of the first login.
///
/// Until this runs, the first unknown-email login also pays for hashing.
pub async fn prepare_dummy_hash() {
    let ready = tokio::task::spawn_blocking(|| LazyLock::force(&DUMMY_HASH).is_some()).await;
    if !matches!(ready, Ok(true)) {
        tracing::warn!("Dummy password hash unavailable; unknown-email logins skip verification");
    }
}

/// Burn one verification's worth of work. Always reports a mismatch.
pub async fn verify_against_dummy(password: String) {
    let result = tokio::task::spawn_blocking(move || match DUMMY_HASH.as_deref() {
        Some(hash) => verify_password_blocking(&password, hash).map(|_| ()),
        None => Ok(()),
    })
    .await;

    if let Ok(Err(e)) = result {
        tracing::warn!(error = %e, "Dummy password verification failed");
    }
}
