// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! Axum extractor for authenticated requests.
//!
//! `Auth` is the gate every protected route passes through: it resolves the
//! session token to a principal or rejects the request before the handler
//! runs.
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user.user_id is the authenticated owner for this request only
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::CookieJar;

use super::{
    session::{verify_token, SESSION_COOKIE_NAME},
    AuthError, AuthenticatedUser,
};
use crate::state::AppState;

/// Extractor for authenticated users.
///
/// Token resolution order:
/// 1. request extensions (set by upstream middleware or tests)
/// 2. the `access_token` session cookie
/// 3. an `Authorization: Bearer` header, for clients that mirror the
///    signin `accessToken` into a header instead of relying on the cookie
pub struct Auth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>().cloned() {
            return Ok(Auth(user));
        }

        let token = token_from_parts(parts).ok_or(AuthError::MissingToken)?;
        let claims = verify_token(&token, &state.config().jwt_secret)?;

        Ok(Auth(claims.into()))
    }
}

fn token_from_parts(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
}
