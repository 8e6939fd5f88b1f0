// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! Session token issuing, verification, and cookie transport.
//!
//! A session is a stateless HS256-signed token embedding the user id and a
//! fixed-TTL expiry. Logout clears the cookie on the client; the token
//! itself is not revocable server-side (no blacklist).

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::{claims::SessionClaims, AuthError};

/// Name of the HTTP-only cookie carrying the session token.
pub const SESSION_COOKIE_NAME: &str = "access_token";

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Issue a signed session token for `user_id` with the configured TTL.
pub fn issue_token(user_id: &str, secret: &str, ttl_hours: i64) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + ttl_hours * 3600,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::InternalError(e.to_string()))
}

/// Verify a session token and return its claims.
///
/// Fails when the token is malformed, carries a bad signature, or has
/// expired. Expiry requires re-login; there is no refresh path.
pub fn verify_token(token: &str, secret: &str) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = CLOCK_SKEW_LEEWAY;

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::MalformedToken,
    })?;

    Ok(token_data.claims)
}

/// Build the session cookie: HTTP-only, SameSite=Strict, scoped to the
/// whole API origin, expiring together with the token.
pub fn session_cookie(token: String, ttl_hours: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::hours(ttl_hours))
        .build()
}

/// Build a cookie that instructs the client to discard the session.
///
/// This is the whole of logout: the token stays cryptographically valid
/// until it expires.
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, ""))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issue_and_verify_round_trip() {
        let token = issue_token("user_123", SECRET, 24).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "user_123");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let token = issue_token("user_123", SECRET, 24).unwrap();
        let err = verify_token(&token, "other-secret").unwrap_err();
        assert!(matches!(err, AuthError::InvalidSignature));
    }

    #[test]
    fn verify_rejects_expired_token() {
        // Issued far enough in the past that leeway cannot save it.
        let token = issue_token("user_123", SECRET, -2).unwrap();
        let err = verify_token(&token, SECRET).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn verify_rejects_garbage() {
        let err = verify_token("not.a.token", SECRET).unwrap_err();
        assert!(matches!(err, AuthError::MalformedToken));
    }

    #[test]
    fn verify_rejects_tampered_payload() {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

        let token = issue_token("user_123", SECRET, 24).unwrap();
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();

        // Swap the subject but keep the original signature.
        let payload = URL_SAFE_NO_PAD.decode(&parts[1]).unwrap();
        let forged = String::from_utf8(payload)
            .unwrap()
            .replace("user_123", "user_456");
        parts[1] = URL_SAFE_NO_PAD.encode(forged.as_bytes());

        let err = verify_token(&parts.join("."), SECRET).unwrap_err();
        assert!(matches!(err, AuthError::InvalidSignature));
    }

    #[test]
    fn session_cookie_is_http_only_and_same_site() {
        let cookie = session_cookie("tok".to_string(), 24);
        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::hours(24)));
    }

    #[test]
    fn expired_cookie_clears_the_value() {
        let cookie = expired_session_cookie();
        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
    }
}
