// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! Account and session endpoints.
//!
//! Signup and signin are public; signout requires a live session. Signin
//! sets the session cookie and additionally returns the token in the body
//! for clients that prefer an Authorization header.

use axum::{extract::State, http::StatusCode};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    api::extract::Json,
    auth::session::{expired_session_cookie, issue_token, session_cookie},
    auth::Auth,
    error::ApiError,
    models::{SigninRequest, SignupRequest},
    state::AppState,
    storage::{UserRepository, UserView},
};

/// Response for POST /api/auth/signup.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
    /// The created account, without any credential material.
    pub user: UserView,
}

/// Response for POST /api/auth/signin.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SigninResponse {
    pub success: bool,
    pub message: String,
    /// The session token, mirrored from the cookie for header-based clients.
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub user: UserView,
}

/// Response for GET /api/auth/signout.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignoutResponse {
    pub success: bool,
    pub message: String,
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = SignupResponse),
        (status = 400, description = "Missing or empty field"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let repo = UserRepository::new(state.storage());
    let user = repo.create(&request.username, &request.email, &request.password)?;

    tracing::info!(user_id = %user.id, "account created");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            success: true,
            message: "Account created successfully".to_string(),
            user: user.into(),
        }),
    ))
}

/// Sign in with email and password.
///
/// On success the session token is set as an HTTP-only cookie and echoed
/// in the body. Unknown email and wrong password are indistinguishable.
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = "Auth",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signed in, session cookie set", body = SigninResponse),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<SigninRequest>,
) -> Result<(CookieJar, Json<SigninResponse>), ApiError> {
    let repo = UserRepository::new(state.storage());
    let user = repo.verify_credentials(&request.email, &request.password)?;

    let config = state.config();
    let token = issue_token(&user.id, &config.jwt_secret, config.session_ttl_hours)?;
    let jar = jar.add(session_cookie(token.clone(), config.session_ttl_hours));

    tracing::info!(user_id = %user.id, "session issued");

    Ok((
        jar,
        Json(SigninResponse {
            success: true,
            message: "Signed in successfully".to_string(),
            access_token: token,
            user: user.into(),
        }),
    ))
}

/// Sign out the current session.
///
/// Clears the session cookie; the token itself simply ages out.
#[utoipa::path(
    get,
    path = "/api/auth/signout",
    tag = "Auth",
    responses(
        (status = 200, description = "Session cookie cleared", body = SignoutResponse),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn signout(Auth(user): Auth, jar: CookieJar) -> (CookieJar, Json<SignoutResponse>) {
    tracing::info!(user_id = %user.user_id, "session cleared");

    (
        jar.add(expired_session_cookie()),
        Json(SignoutResponse {
            success: true,
            message: "Signed out successfully".to_string(),
        }),
    )
}
