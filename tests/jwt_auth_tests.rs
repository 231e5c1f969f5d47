// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session token format tests.
//!
//! Tokens are plain HS256 JWTs, so a client or another service holding the
//! key can decode them without this crate.

use fitness_tracker::error::AppError;
use fitness_tracker::middleware::auth::{create_jwt, verify_jwt};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

const SIGNING_KEY: &[u8] = b"test_signing_key_32_bytes_long!!";

#[derive(Debug, Serialize, Deserialize)]
struct WireClaims {
    sub: String,
    exp: usize,
    iat: usize,
}

#[test]
fn test_token_decodes_with_plain_jsonwebtoken() {
    let token = create_jwt("abc123", SIGNING_KEY, 720 * 3600).unwrap();

    let decoded = decode::<WireClaims>(
        &token,
        &DecodingKey::from_secret(SIGNING_KEY),
        &Validation::new(Algorithm::HS256),
    )
    .expect("token should decode");

    assert_eq!(decoded.claims.sub, "abc123");
    assert_eq!(decoded.claims.exp - decoded.claims.iat, 720 * 3600);
    assert_eq!(decoded.header.alg, Algorithm::HS256);
}

#[test]
fn test_externally_signed_token_is_accepted() {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;
    let token = encode(
        &Header::new(Algorithm::HS256),
        &WireClaims {
            sub: "abc123".to_string(),
            exp: now + 60 * 60,
            iat: now,
        },
        &EncodingKey::from_secret(SIGNING_KEY),
    )
    .unwrap();

    let claims = verify_jwt(&token, SIGNING_KEY).unwrap();
    assert_eq!(claims.sub, "abc123");
}

#[test]
fn test_other_algorithm_rejected() {
    let now = 2_000_000_000usize;
    let token = encode(
        &Header::new(Algorithm::HS512),
        &WireClaims {
            sub: "abc123".to_string(),
            exp: now,
            iat: now - 60,
        },
        &EncodingKey::from_secret(SIGNING_KEY),
    )
    .unwrap();

    assert!(matches!(
        verify_jwt(&token, SIGNING_KEY),
        Err(AppError::InvalidToken)
    ));
}

#[test]
fn test_empty_subject_rejected() {
    let token = create_jwt("", SIGNING_KEY, 3600).unwrap();
    assert!(matches!(
        verify_jwt(&token, SIGNING_KEY),
        Err(AppError::InvalidToken)
    ));
}

#[test]
fn test_garbage_rejected() {
    for token in ["", "not-a-jwt", "a.b.c"] {
        assert!(matches!(
            verify_jwt(token, SIGNING_KEY),
            Err(AppError::InvalidToken)
        ));
    }
}
