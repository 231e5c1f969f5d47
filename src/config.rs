// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_PROJECT_ID: &str = "fitness-tracker";
const DEFAULT_EMULATOR_HOST: &str = "127.0.0.1:8200";
const DEFAULT_JWT_TTL_HOURS: u64 = 30 * 24;
const MIN_JWT_KEY_LEN: usize = 32;
/// About 100 years; keeps `iat + ttl` well inside a JWT timestamp
const MAX_JWT_TTL_SECS: u64 = 100 * 365 * 24 * 60 * 60;

/// Which storage backend the server talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    /// Local Firestore emulator at `Config::emulator_host`
    Emulator,
    /// Cloud Firestore using ambient GCP credentials
    Firestore,
    /// In-process store; data is lost on restart
    Memory,
}

impl DatabaseBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseBackend::Emulator => "emulator",
            DatabaseBackend::Firestore => "firestore",
            DatabaseBackend::Memory => "memory",
        }
    }
}

impl FromStr for DatabaseBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emulator" => Ok(DatabaseBackend::Emulator),
            "firestore" => Ok(DatabaseBackend::Firestore),
            "memory" => Ok(DatabaseBackend::Memory),
            other => Err(ConfigError::Invalid {
                name: "DATABASE_BACKEND",
                reason: format!("unknown backend '{}'", other),
            }),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// The single origin allowed to make cross-origin requests
    pub cors_origin: String,
    /// Storage backend
    pub database_backend: DatabaseBackend,
    /// GCP project ID (also used as the emulator project)
    pub gcp_project_id: String,
    /// Emulator address, `host:port`
    pub emulator_host: String,

    // --- Secrets ---
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// Session token lifetime in seconds
    pub jwt_ttl_secs: u64,
}

impl Config {
    /// Config for tests: in-memory backend and a fixed signing key.
    pub fn test_default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            database_backend: DatabaseBackend::Memory,
            gcp_project_id: "test-project".to_string(),
            emulator_host: DEFAULT_EMULATOR_HOST.to_string(),
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!!".to_vec(),
            jwt_ttl_secs: 60 * 60,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let jwt_signing_key = env::var("JWT_SIGNING_KEY")
            .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
            .trim()
            .to_string()
            .into_bytes();
        if jwt_signing_key.len() < MIN_JWT_KEY_LEN {
            return Err(ConfigError::Invalid {
                name: "JWT_SIGNING_KEY",
                reason: format!("must be at least {} bytes", MIN_JWT_KEY_LEN),
            });
        }

        let jwt_ttl_hours = match env::var("JWT_TTL_HOURS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "JWT_TTL_HOURS",
                reason: format!("'{}' is not a whole number of hours", raw),
            })?,
            Err(_) => DEFAULT_JWT_TTL_HOURS,
        };
        let jwt_ttl_secs = jwt_ttl_hours
            .checked_mul(60 * 60)
            .filter(|secs| *secs <= MAX_JWT_TTL_SECS)
            .ok_or_else(|| ConfigError::Invalid {
                name: "JWT_TTL_HOURS",
                reason: format!("{} hours is too long", jwt_ttl_hours),
            })?;

        let database_backend = match env::var("DATABASE_BACKEND") {
            Ok(raw) => raw.parse()?,
            Err(_) => DatabaseBackend::Emulator,
        };

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
            database_backend,
            gcp_project_id: env::var("GCP_PROJECT_ID")
                .unwrap_or_else(|_| DEFAULT_PROJECT_ID.to_string()),
            emulator_host: env::var("FIRESTORE_EMULATOR_HOST")
                .unwrap_or_else(|_| DEFAULT_EMULATOR_HOST.to_string()),
            jwt_signing_key,
            jwt_ttl_secs,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
